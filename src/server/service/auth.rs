//! OAuth2 authentication and user provisioning.

use std::collections::HashSet;

use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{Role, UpsertUserParam, User},
    state::OAuth2Client,
};

/// Identity claims returned from the provider's userinfo endpoint.
#[derive(Debug, Deserialize)]
pub struct UserInfo {
    /// Stable subject identifier for the account.
    pub sub: String,
    pub name: String,
    pub email: String,
}

/// Service for the OAuth2 login flow and user provisioning.
///
/// Generates login URLs, exchanges callback codes for tokens, fetches the
/// identity claims, and upserts the user record. The very first account to
/// log in is granted the full role set so a fresh deployment has an admin.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
    /// Userinfo endpoint of the identity provider.
    pub userinfo_url: &'a str,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        userinfo_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            userinfo_url,
        }
    }

    /// Generates the provider login URL with CSRF protection.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Authorization URL and CSRF state token
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .url();

        (authorize_url, csrf_state)
    }

    /// Handles the OAuth2 callback and provisions the user.
    ///
    /// Exchanges the authorization code for an access token, fetches the
    /// identity claims, and upserts the user. When no admin exists yet the
    /// logging-in account receives every role; otherwise existing roles are
    /// preserved and a new account starts as a plain user.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AppError::AuthErr)` - Token exchange failed
    /// - `Err(AppError::ReqwestErr)` - Userinfo request failed
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchangeFailed(e.to_string()))?;

        let info = self.fetch_user_info(&token).await?;

        let bootstrap_admin = !user_repo.admin_exists().await?;
        let roles = if bootstrap_admin {
            Some(HashSet::from([Role::Admin, Role::Moderator, Role::User]))
        } else {
            None
        };

        let entity = user_repo
            .upsert(UpsertUserParam {
                external_id: info.sub,
                name: info.name,
                email: info.email,
                roles,
            })
            .await?;
        let user = User::from_entity(entity)?;

        if bootstrap_admin {
            tracing::info!("First login: user {} granted the admin role", user.name);
        }

        Ok(user)
    }

    /// Fetches identity claims with the provided access token.
    async fn fetch_user_info(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<UserInfo, AppError> {
        let access_token = token.access_token().secret();

        let info = self
            .http_client
            .get(self.userinfo_url)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .json::<UserInfo>()
            .await?;

        Ok(info)
    }
}
