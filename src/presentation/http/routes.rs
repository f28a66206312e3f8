// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{admin, auth, health, posts, users, webhooks},
    middleware::{file_hits::count_file_hits, rate_limit::auth_rate_limit_layer},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post},
};
use std::{sync::Arc, time::Duration};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, &[], true)
}

/// Assemble the full application router. An empty `allowed_origins` list
/// allows any origin.
pub fn build_router_with_rate_limiter(
    state: HttpState,
    allowed_origins: &[String],
    enable_rate_limiter: bool,
) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };
    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    let mut credential_routes = Router::new()
        .route("/api/login", post(auth::login))
        .route("/api/refresh", post(auth::refresh))
        .route("/api/revoke", post(auth::revoke))
        .route("/api/users", post(users::register).put(users::update));
    if enable_rate_limiter {
        credential_routes = credential_routes.layer(auth_rate_limit_layer());
    }

    let file_server = Router::new()
        .nest_service("/app", ServeDir::new(&state.fileserver_root))
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state.hits),
            count_file_hits,
        ));

    Router::new()
        .route("/api/healthz", get(health::healthz))
        .route(
            "/api/chirps",
            get(posts::list_posts).post(posts::create_post),
        )
        .route(
            "/api/chirps/{id}",
            get(posts::get_post).delete(posts::delete_post),
        )
        .route("/api/polka/webhooks", post(webhooks::polka))
        .route("/admin/metrics", get(admin::metrics))
        .route("/admin/reset", post(admin::reset))
        .merge(credential_routes)
        .merge(file_server)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}
