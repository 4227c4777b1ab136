//! Migrator registering the portfolio entity tables. The four
//! collections are independent, so ordering only matters for
//! reproducibility.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_accounts;
mod m20240301_000002_create_projects;
mod m20240301_000003_create_skills;
mod m20240301_000004_create_messages;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_accounts::Migration),
            Box::new(m20240301_000002_create_projects::Migration),
            Box::new(m20240301_000003_create_skills::Migration),
            Box::new(m20240301_000004_create_messages::Migration),
        ]
    }
}
