use std::sync::Arc;

use service::PortfolioStore;

/// Shared handler state. The store is picked once at startup and is
/// immutable for the process lifetime.
#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<dyn PortfolioStore>,
}
