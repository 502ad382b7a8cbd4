//! Shared test infrastructure: in-memory database setup and entity
//! factories.

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
