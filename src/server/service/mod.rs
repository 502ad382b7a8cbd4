//! Service layer for lifecycle logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They own the
//! ban and appeal lifecycle rules (forced initial statuses, expiration
//! computation), resolve id references into embedded summaries via batch
//! lookups, and map missing records to `NotFound`.

pub mod appeal;
pub mod auth;
pub mod ban;
