// Application state module
// Everything a request handler can see

use crate::catalog::CafeCatalog;

use super::types::Config;

/// Shared application state.
///
/// Assembled once in `main` and never mutated, so request handlers read it
/// through a plain `Arc` with no locking.
pub struct AppState {
    pub config: Config,
    pub catalog: CafeCatalog,
}

impl AppState {
    pub const fn new(config: Config, catalog: CafeCatalog) -> Self {
        Self { config, catalog }
    }
}
