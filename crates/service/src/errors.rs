use thiserror::Error;

/// Failures a storage backend can surface. The in-memory backend only
/// ever produces `Db` in theory (and in practice never fails); the
/// relational backend additionally reports constraint violations such
/// as a duplicate username as `Conflict`.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}
