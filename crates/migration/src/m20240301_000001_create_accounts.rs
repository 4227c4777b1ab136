//! Create `accounts` table. Username is the unique lookup key;
//! password is stored as an opaque string.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(pk_auto(Accounts::Id))
                    .col(text(Accounts::Username).unique_key().not_null())
                    .col(text(Accounts::Password).not_null())
                    .col(text_null(Accounts::Name))
                    .col(text_null(Accounts::Email))
                    .col(text_null(Accounts::Bio))
                    .col(text_null(Accounts::ProfileImage))
                    .col(
                        timestamp_with_time_zone(Accounts::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Accounts::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Accounts { Table, Id, Username, Password, Name, Email, Bio, ProfileImage, CreatedAt }
