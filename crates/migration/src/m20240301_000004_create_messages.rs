//! Create `messages` table for inbound contact submissions. The read
//! flag is an integer (0 unread, 1 read), flipped only by the
//! mark-as-read operation.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Messages::Table)
                    .if_not_exists()
                    .col(pk_auto(Messages::Id))
                    .col(string_len(Messages::Name, 100).not_null())
                    .col(text(Messages::Email).not_null())
                    .col(string_len_null(Messages::Subject, 200))
                    .col(text(Messages::Message).not_null())
                    .col(integer(Messages::Read).not_null().default(0))
                    .col(
                        timestamp_with_time_zone(Messages::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Messages::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Messages { Table, Id, Name, Email, Subject, Message, Read, CreatedAt }
