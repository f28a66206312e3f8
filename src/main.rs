use chirpy::application::{
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
        util::RefreshTokenGenerator,
    },
    services::{ApplicationServices, ServiceDependencies},
};
use chirpy::config::AppConfig;
use chirpy::domain::{
    post::{ContentSanitizer, PostReadRepository, PostWriteRepository},
    session::RefreshTokenRepository,
    user::UserRepository,
};
use chirpy::infrastructure::{
    database,
    repositories::{
        PostgresPostReadRepository, PostgresPostWriteRepository, PostgresRefreshTokenRepository,
        PostgresUserRepository,
    },
    security::{
        password::Argon2PasswordHasher, refresh_token::OsRefreshTokenGenerator,
        token::JwtTokenManager,
    },
    time::SystemClock,
};
use chirpy::presentation::http::{
    metrics::HitCounter, routes::build_router_with_rate_limiter, state::HttpState,
};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let post_write_repo: Arc<dyn PostWriteRepository> =
        Arc::new(PostgresPostWriteRepository::new(pool.clone()));
    let post_read_repo: Arc<dyn PostReadRepository> =
        Arc::new(PostgresPostReadRepository::new(pool.clone()));
    let refresh_repo: Arc<dyn RefreshTokenRepository> =
        Arc::new(PostgresRefreshTokenRepository::new(pool));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(JwtTokenManager::new(
        config.jwt_secret(),
        config.access_token_ttl(),
        Arc::clone(&clock),
    )?);
    let refresh_generator: Arc<dyn RefreshTokenGenerator> = Arc::new(OsRefreshTokenGenerator);

    let services = Arc::new(ApplicationServices::new(ServiceDependencies {
        user_repo,
        post_write_repo,
        post_read_repo,
        refresh_repo,
        password_hasher,
        token_manager,
        refresh_generator,
        clock,
        sanitizer: Arc::new(ContentSanitizer::default()),
        refresh_ttl: config.refresh_token_ttl(),
    }));

    let state = HttpState {
        services,
        hits: Arc::new(HitCounter::new()),
        platform: config.platform(),
        polka_key: config.polka_key().map(Arc::from),
        fileserver_root: config.fileserver_root().clone(),
    };

    let app = build_router_with_rate_limiter(state, config.allowed_origins(), true);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(platform = ?config.platform(), "listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
