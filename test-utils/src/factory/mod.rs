pub mod appeal;
pub mod ban;
pub mod helpers;
pub mod user;
