use std::sync::{Arc, Mutex};

use tracing::error;

use crate::catalog::CatalogState;
use crate::config::AppConfig;
use crate::error::AppError;

/// One browsing session shared by all handlers. The mutex serializes events
/// so each operation runs to completion before the next.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Mutex<CatalogState>>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(catalog: CatalogState, config: AppConfig) -> Self {
        Self {
            catalog: Arc::new(Mutex::new(catalog)),
            config: Arc::new(config),
        }
    }

    pub fn with_catalog<R>(&self, f: impl FnOnce(&mut CatalogState) -> R) -> Result<R, AppError> {
        let mut guard = self.catalog.lock().map_err(|_| {
            error!("catalog lock poisoned");
            AppError::InternalServerError
        })?;
        Ok(f(&mut guard))
    }
}
