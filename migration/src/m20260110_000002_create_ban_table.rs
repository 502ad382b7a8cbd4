use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

// Ban rows reference the issuing user by plain id. No foreign keys are
// declared: appeals must keep working against a deleted ban, and the query
// layer resolves references with explicit batch lookups.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ban::Table)
                    .if_not_exists()
                    .col(pk_auto(Ban::Id))
                    .col(string(Ban::PlayerName))
                    .col(string(Ban::SteamId))
                    .col(string_null(Ban::DiscordId))
                    .col(string_null(Ban::IpAddress))
                    .col(text(Ban::Reason))
                    .col(text(Ban::Evidence))
                    .col(text_null(Ban::EvidenceUrls))
                    .col(string(Ban::DurationType))
                    .col(integer_null(Ban::DurationDays))
                    .col(timestamp_null(Ban::ExpiresAt))
                    .col(string(Ban::Status))
                    .col(integer(Ban::IssuedBy))
                    .col(text_null(Ban::Notes))
                    .col(
                        timestamp(Ban::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Ban::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ban_steam_id")
                    .table(Ban::Table)
                    .col(Ban::SteamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ban_status")
                    .table(Ban::Table)
                    .col(Ban::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ban::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ban {
    Table,
    Id,
    PlayerName,
    SteamId,
    DiscordId,
    IpAddress,
    Reason,
    Evidence,
    EvidenceUrls,
    DurationType,
    DurationDays,
    ExpiresAt,
    Status,
    IssuedBy,
    Notes,
    CreatedAt,
    UpdatedAt,
}
