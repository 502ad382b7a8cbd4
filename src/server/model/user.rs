//! User domain model, roles, and parameter types.
//!
//! Users mirror what the identity provider reports and are upserted on every
//! login. Roles are an enumerated set rather than free strings; access checks
//! in the middleware are set-intersection tests over this set.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::{model::user::UserDto, server::error::AppError};

/// Application role. A user may hold several roles at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Moderator,
    User,
}

impl Role {
    /// Stable string form used in the roles column and in DTOs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Moderator => "moderator",
            Role::User => "user",
        }
    }

    /// Parses a stored role name. Unknown names are rejected rather than
    /// silently dropped so a corrupted roles column surfaces as an error.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Role::Admin),
            "moderator" => Some(Role::Moderator),
            "user" => Some(Role::User),
            _ => None,
        }
    }
}

/// Serializes a role set to the JSON array form stored in the roles column.
pub fn roles_to_json(roles: &HashSet<Role>) -> String {
    let mut names: Vec<&str> = roles.iter().map(Role::as_str).collect();
    names.sort_unstable();
    serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
}

/// User with identity-provider linkage, role set, and moderation flags.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Identity-provider subject for this user.
    pub external_id: String,
    pub name: String,
    pub email: String,
    pub roles: HashSet<Role>,
    /// Soft-delete flag; not consulted by the ban/appeal core.
    pub deleted: bool,
    /// Forum soft-ban flag with optional reason.
    pub banned: bool,
    pub ban_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user
    /// - `Err(AppError::InternalError)` - The roles column holds invalid JSON
    ///   or an unknown role name
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let names: Vec<String> = serde_json::from_str(&entity.roles).map_err(|e| {
            AppError::InternalError(format!(
                "Invalid roles column for user {}: {}",
                entity.id, e
            ))
        })?;

        let mut roles = HashSet::new();
        for name in &names {
            let role = Role::parse(name).ok_or_else(|| {
                AppError::InternalError(format!(
                    "Unknown role '{}' for user {}",
                    name, entity.id
                ))
            })?;
            roles.insert(role);
        }

        Ok(Self {
            id: entity.id,
            external_id: entity.external_id,
            name: entity.name,
            email: entity.email,
            roles,
            deleted: entity.deleted,
            banned: entity.banned,
            ban_reason: entity.ban_reason,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Converts to the DTO shape returned by the auth endpoints.
    pub fn into_dto(self) -> UserDto {
        let mut roles: Vec<String> = self
            .roles
            .iter()
            .map(|r| r.as_str().to_string())
            .collect();
        roles.sort_unstable();

        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            roles,
        }
    }
}

/// Parameters for the sync-on-login upsert, keyed by external id.
///
/// `roles` is only `Some` when the caller wants to (re)assign roles, e.g. the
/// first-login admin bootstrap. `None` preserves whatever the user already
/// has, so a regular login never strips privileges.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub external_id: String,
    pub name: String,
    pub email: String,
    pub roles: Option<HashSet<Role>>,
}
