use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appeal::Table)
                    .if_not_exists()
                    .col(pk_auto(Appeal::Id))
                    .col(integer(Appeal::BanId))
                    .col(text(Appeal::Reason))
                    .col(text(Appeal::Evidence))
                    .col(string(Appeal::Status))
                    .col(integer(Appeal::SubmittedBy))
                    .col(integer_null(Appeal::ReviewedBy))
                    .col(text_null(Appeal::ReviewNotes))
                    .col(
                        timestamp(Appeal::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Appeal::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_appeal_ban_id")
                    .table(Appeal::Table)
                    .col(Appeal::BanId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_appeal_status")
                    .table(Appeal::Table)
                    .col(Appeal::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appeal::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Appeal {
    Table,
    Id,
    BanId,
    Reason,
    Evidence,
    Status,
    SubmittedBy,
    ReviewedBy,
    ReviewNotes,
    CreatedAt,
    UpdatedAt,
}
