use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    /// Database error while setting up or using the in-memory store.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
