use serde::{Deserialize, Serialize};

/// Authenticated user as returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub roles: Vec<String>,
}

/// Username-only projection used when embedding user references into ban
/// and appeal responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummaryDto {
    pub id: i32,
    pub username: String,
}
