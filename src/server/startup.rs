use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect or migrate
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the application database.
///
/// Sessions live in a dedicated table in the same Sqlite file and expire
/// after seven days of inactivity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Ready to be layered onto the router
/// - `Err(AppError)` - Failed to migrate the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    Ok(SessionManagerLayer::new(session_store)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Builds the HTTP client used for identity-provider requests.
///
/// Redirects are disabled so a malicious provider response cannot bounce
/// requests to internal addresses.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError)` - Client construction failed
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client from the configured provider endpoints.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with auth, token, and redirect URLs set
/// - `Err(AppError::ConfigErr)` - One of the configured URLs failed to parse
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let auth_url = AuthUrl::new(config.oauth_auth_url.clone())
        .map_err(|e| ConfigError::InvalidUrl("OAUTH_AUTH_URL".to_string(), e.to_string()))?;
    let token_url = TokenUrl::new(config.oauth_token_url.clone())
        .map_err(|e| ConfigError::InvalidUrl("OAUTH_TOKEN_URL".to_string(), e.to_string()))?;
    let redirect_url = RedirectUrl::new(config.oauth_redirect_url.clone())
        .map_err(|e| ConfigError::InvalidUrl("OAUTH_REDIRECT_URL".to_string(), e.to_string()))?;

    let client = BasicClient::new(ClientId::new(config.oauth_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.oauth_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}
