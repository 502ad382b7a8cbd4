use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session; the request is not logged in.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session carries a user id that no longer resolves to a user row.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user is authenticated but lacks a required role.
    ///
    /// # Fields
    /// - User id of the denied user
    /// - Message describing the denied action, logged server-side
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// CSRF state validation failed during the OAuth callback.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// The identity provider rejected the authorization code exchange.
    #[error("OAuth token exchange failed: {0}")]
    TokenExchangeFailed(String),
}

/// Maps authentication errors to HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden (denial details are logged, not returned)
/// - `CsrfValidationFailed` / `TokenExchangeFailed` → 400 Bad Request with a
///   generic login-failure message
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "You must be logged in to do that.".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(user_id, msg) => {
                tracing::warn!("Access denied for user {}: {}", user_id, msg);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You don't have permission to do that.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::CsrfValidationFailed | Self::TokenExchangeFailed(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
