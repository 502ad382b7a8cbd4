pub mod appeal;
pub mod auth;
pub mod ban;
