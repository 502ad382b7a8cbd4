//! Appeal entity model.
//!
//! Appeals submitted by players against a ban. The ban and user references
//! are plain ids; a deleted ban leaves its appeals dangling by design, so no
//! foreign keys are declared here.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "appeal")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Id of the ban being appealed.
    pub ban_id: i32,
    #[sea_orm(column_type = "Text")]
    pub reason: String,
    #[sea_orm(column_type = "Text")]
    pub evidence: String,
    /// "pending", "approved" or "rejected".
    pub status: String,
    /// Id of the user who submitted the appeal.
    pub submitted_by: i32,
    /// Id of the reviewing moderator, set by the boundary on terminal updates.
    pub reviewed_by: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub review_notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
