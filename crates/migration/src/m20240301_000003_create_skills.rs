//! Create `skills` table. Proficiency is an unconstrained integer;
//! the intended 0-100 range is a presentation convention.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(pk_auto(Skills::Id))
                    .col(string_len(Skills::Name, 50).not_null())
                    .col(text(Skills::Icon).not_null())
                    .col(integer(Skills::Proficiency).not_null())
                    .col(string_len_null(Skills::Category, 50))
                    .col(
                        timestamp_with_time_zone(Skills::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Skills::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Skills { Table, Id, Name, Icon, Proficiency, Category, CreatedAt }
