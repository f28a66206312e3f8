// tests/support/helpers.rs
use super::mocks::{InMemoryStore, PlainPasswordHasher, SequentialRefreshTokens, TestClock};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::AUTHORIZATION, header::CONTENT_TYPE};
use axum::response::Response;
use chirpy::application::{
    commands::sessions::SessionCommandService,
    ports::{security::TokenManager, time::Clock},
    services::{ApplicationServices, ServiceDependencies},
};
use chirpy::config::Platform;
use chirpy::domain::post::ContentSanitizer;
use chirpy::infrastructure::security::token::{DEFAULT_ACCESS_TOKEN_TTL, JwtTokenManager};
use chirpy::presentation::http::{
    metrics::HitCounter, routes::build_router_with_rate_limiter, state::HttpState,
};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const TEST_SECRET: &[u8] = b"integration-test-secret";
pub const POLKA_KEY: &str = "f271c81ff7084ee5b99a5091b42d486e";

pub struct TestApp {
    pub router: axum::Router,
    pub store: Arc<InMemoryStore>,
    pub clock: Arc<TestClock>,
    pub hits: Arc<HitCounter>,
    pub services: Arc<ApplicationServices>,
}

pub fn token_manager(clock: Arc<TestClock>) -> Arc<JwtTokenManager> {
    Arc::new(
        JwtTokenManager::new(TEST_SECRET, DEFAULT_ACCESS_TOKEN_TTL, clock)
            .expect("test secret is non-empty"),
    )
}

/// Session service wired to the in-memory store, for tests that skip HTTP.
pub fn session_service(
    store: Arc<InMemoryStore>,
    clock: Arc<TestClock>,
) -> SessionCommandService {
    let manager: Arc<dyn TokenManager> = token_manager(Arc::clone(&clock));
    SessionCommandService::new(
        Arc::clone(&store) as _,
        store,
        manager,
        Arc::new(SequentialRefreshTokens::default()),
        clock,
    )
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_platform(Platform::Prod)
    }

    pub fn with_platform(platform: Platform) -> Self {
        let store = Arc::new(InMemoryStore::new());
        let clock = Arc::new(TestClock::new());
        let clock_port: Arc<dyn Clock> = Arc::clone(&clock) as _;

        let services = Arc::new(ApplicationServices::new(ServiceDependencies {
            user_repo: Arc::clone(&store) as _,
            post_write_repo: Arc::clone(&store) as _,
            post_read_repo: Arc::clone(&store) as _,
            refresh_repo: Arc::clone(&store) as _,
            password_hasher: Arc::new(PlainPasswordHasher),
            token_manager: token_manager(Arc::clone(&clock)),
            refresh_generator: Arc::new(SequentialRefreshTokens::default()),
            clock: clock_port,
            sanitizer: Arc::new(ContentSanitizer::default()),
            refresh_ttl: chrono::Duration::days(60),
        }));

        let hits = Arc::new(HitCounter::new());
        let state = HttpState {
            services: Arc::clone(&services),
            hits: Arc::clone(&hits),
            platform,
            polka_key: Some(Arc::from(POLKA_KEY)),
            fileserver_root: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"),
        };

        Self {
            router: build_router_with_rate_limiter(state, &[], false),
            store,
            clock,
            hits,
            services,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn call(
        &self,
        method: Method,
        uri: &str,
        authorization: Option<&str>,
        body: Option<Value>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        let request = match body {
            Some(json) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(request).await
    }

    /// Register and log in, returning the login response body.
    pub async fn signup(&self, email: &str, password: &str) -> Value {
        let credentials = serde_json::json!({ "email": email, "password": password });
        let resp = self
            .call(Method::POST, "/api/users", None, Some(credentials.clone()))
            .await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let resp = self
            .call(Method::POST, "/api/login", None, Some(credentials))
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
        read_json(resp).await
    }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub async fn read_body(resp: Response) -> (StatusCode, String) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

pub async fn read_json(resp: Response) -> Value {
    let (_, text) = read_body(resp).await;
    serde_json::from_str(&text).expect("expected a JSON body")
}

/// Assert the `{error, message}` envelope produced for failed requests.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_owned();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let expected_error = expected_status.canonical_reason().unwrap_or("error");
    assert_eq!(json["error"], expected_error);
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected non-empty message field"
    );
    json
}
