//! Request-level access control.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::{Role, User},
};

/// Access level a handler requires.
///
/// `Moderator` is satisfied by the moderator or admin role; `Admin` requires
/// the admin role itself.
pub enum Permission {
    Admin,
    Moderator,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session to a user and checks the required permissions.
    ///
    /// An empty permission slice means any logged-in user passes.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user with all required permissions
    /// - `Err(AppError::AuthErr(UserNotInSession))` - Not logged in
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - Session points at a
    ///   user that no longer exists
    /// - `Err(AppError::AuthErr(AccessDenied))` - Missing a required role
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(entity) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };
        let user = User::from_entity(entity)?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.has_role(Role::Admin) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "admin role required".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Moderator => {
                    if !user.has_role(Role::Moderator) && !user.has_role(Role::Admin) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "moderator role required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
