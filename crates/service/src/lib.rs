pub mod errors;
pub mod storage;

#[cfg(test)]
mod test_support;

pub use errors::StorageError;
pub use storage::{init_store, DbStore, MemStore, PortfolioStore};
