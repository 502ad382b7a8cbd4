pub use super::appeal::Entity as Appeal;
pub use super::ban::Entity as Ban;
pub use super::user::Entity as User;
