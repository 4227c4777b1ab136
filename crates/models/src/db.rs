use std::time::Duration;

use anyhow::anyhow;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use configs::DatabaseConfig;

/// Connect to the relational backend using the pool knobs from config.
/// Errors if no URL is configured; callers decide beforehand whether a
/// database backend is wanted at all.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let url = cfg
        .url
        .as_deref()
        .ok_or_else(|| anyhow!("database.url (or DATABASE_URL) is not set"))?;

    let mut opts = ConnectOptions::new(url.to_owned());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);

    let db = Database::connect(opts).await?;
    Ok(db)
}

/// Config populated purely from the environment, for tests and tools
/// that bypass `config.toml`.
pub fn config_from_env() -> DatabaseConfig {
    let mut cfg = DatabaseConfig::default();
    cfg.normalize_from_env();
    cfg
}
