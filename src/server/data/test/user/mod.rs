use std::collections::HashSet;

use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::user::UserRepository;
use crate::server::model::user::{Role, UpsertUserParam};

mod admin_exists;
mod find_by_ids;
mod upsert;

fn upsert_param(external_id: &str) -> UpsertUserParam {
    UpsertUserParam {
        external_id: external_id.to_string(),
        name: "Avery".to_string(),
        email: format!("{}@example.com", external_id),
        roles: None,
    }
}
