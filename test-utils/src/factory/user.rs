//! User factory for creating test user entities.
//!
//! Provides builder-pattern factories with sensible defaults to cut
//! boilerplate in tests.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let admin = UserFactory::new(&db)
///     .name("AdminUser")
///     .roles(&["admin", "moderator", "user"])
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    external_id: String,
    name: String,
    email: String,
    roles: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - external_id: `"subject-{id}"` where id is auto-incremented
    /// - name: `"User {id}"`
    /// - email: `"user{id}@example.com"`
    /// - roles: `["user"]`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            external_id: format!("subject-{}", id),
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            roles: r#"["user"]"#.to_string(),
        }
    }

    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = external_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the role names stored in the user's roles column.
    pub fn roles(mut self, roles: &[&str]) -> Self {
        self.roles = serde_json::to_string(roles).expect("serializing role names");
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            external_id: ActiveValue::Set(self.external_id),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            roles: ActiveValue::Set(self.roles),
            deleted: ActiveValue::Set(false),
            banned: ActiveValue::Set(false),
            ban_reason: ActiveValue::Set(None),
            post_count: ActiveValue::Set(0),
            comment_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user holding the given roles.
pub async fn create_user_with_roles(
    db: &DatabaseConnection,
    roles: &[&str],
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).roles(roles).build().await
}
