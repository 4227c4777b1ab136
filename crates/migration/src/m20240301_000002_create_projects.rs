//! Create `projects` table. Tags are kept as a JSON array column so
//! the stored order matches submission order.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(pk_auto(Projects::Id))
                    .col(string_len(Projects::Title, 100).not_null())
                    .col(text(Projects::Description).not_null())
                    .col(text_null(Projects::Image))
                    .col(json_binary(Projects::Tags).not_null())
                    .col(text_null(Projects::Link))
                    .col(
                        timestamp_with_time_zone(Projects::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Projects::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Projects { Table, Id, Title, Description, Image, Tags, Link, CreatedAt }
