use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::ExternalId))
                    .col(string(User::Name))
                    .col(string_uniq(User::Email))
                    .col(text(User::Roles))
                    .col(boolean(User::Deleted).default(false))
                    .col(boolean(User::Banned).default(false))
                    .col(string_null(User::BanReason))
                    .col(integer(User::PostCount).default(0))
                    .col(integer(User::CommentCount).default(0))
                    .col(
                        timestamp(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(User::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    ExternalId,
    Name,
    Email,
    Roles,
    Deleted,
    Banned,
    BanReason,
    PostCount,
    CommentCount,
    CreatedAt,
    UpdatedAt,
}
