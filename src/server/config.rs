use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    /// Frontend base URL for post-login redirects and CORS.
    pub app_url: String,

    pub oauth_client_id: String,
    pub oauth_client_secret: String,
    pub oauth_redirect_url: String,
    pub oauth_auth_url: String,
    pub oauth_token_url: String,
    pub oauth_userinfo_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require_env("DATABASE_URL")?,
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            app_url: require_env("APP_URL")?,
            oauth_client_id: require_env("OAUTH_CLIENT_ID")?,
            oauth_client_secret: require_env("OAUTH_CLIENT_SECRET")?,
            oauth_redirect_url: require_env("OAUTH_REDIRECT_URL")?,
            oauth_auth_url: require_env("OAUTH_AUTH_URL")?,
            oauth_token_url: require_env("OAUTH_TOKEN_URL")?,
            oauth_userinfo_url: require_env("OAUTH_USERINFO_URL")?,
        })
    }
}

fn require_env(name: &str) -> Result<String, AppError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()).into())
}
