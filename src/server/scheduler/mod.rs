pub mod ban_expiry;
