mod model;
mod server;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;

use crate::server::{
    config::Config, error::AppError, router, scheduler::ban_expiry, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    tracing::info!("Starting server");

    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = ban_expiry::start_scheduler(scheduler_db).await {
            tracing::error!("Ban expiry scheduler error: {}", e);
        }
    });

    // The session cookie requires credentials, so the CORS origin must be
    // the explicit frontend URL rather than a wildcard.
    let cors = CorsLayer::new()
        .allow_origin(
            config
                .app_url
                .parse::<HeaderValue>()
                .map_err(|e| AppError::InternalError(format!("Invalid APP_URL: {}", e)))?,
        )
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let app = router::router()
        .with_state(AppState::new(
            db,
            http_client,
            oauth_client,
            config.app_url.clone(),
            config.oauth_userinfo_url.clone(),
        ))
        .layer(session)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
