pub mod prelude;

pub mod appeal;
pub mod ban;
pub mod user;
