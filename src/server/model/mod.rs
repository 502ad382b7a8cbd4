//! Domain models and operation parameter types.
//!
//! Domain models are converted from SeaORM entity models at the repository
//! boundary and carry typed statuses and role sets instead of the raw strings
//! stored in the database. Parameter structs describe the inputs of each
//! service operation.

pub mod appeal;
pub mod ban;
pub mod page;
pub mod user;
