//! Wire DTOs shared by every endpoint.
//!
//! These are the serde-facing shapes of the REST API, kept separate from the
//! domain models in `server::model` so the wire format can evolve without
//! touching lifecycle logic.

pub mod api;
pub mod appeal;
pub mod ban;
pub mod user;
