use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Body returned by the delete endpoints on success.
#[derive(Serialize, Deserialize)]
pub struct DeletedDto {
    pub deleted: bool,
}
