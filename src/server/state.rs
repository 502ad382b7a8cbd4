//! Application state shared across all request handlers.
//!
//! `AppState` is initialized once during startup and cloned for each request
//! through Axum's state extraction. All fields are cheap to clone: the
//! database connection and HTTP client are pooled internally, the OAuth
//! client is designed to be cloned, and the URLs are small strings.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

/// Type alias for the OAuth2 client configured for the identity provider.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for identity-provider requests. Configured with redirects
    /// disabled to prevent SSRF.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the login flow.
    pub oauth_client: OAuth2Client,

    /// Frontend base URL, used for post-login redirects and CORS.
    pub app_url: String,

    /// Userinfo endpoint of the identity provider.
    pub userinfo_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        app_url: String,
        userinfo_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            app_url,
            userinfo_url,
        }
    }
}
