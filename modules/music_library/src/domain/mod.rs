//! Domain layer - entity access services and the schema mapper

pub mod composers;
pub mod recordings;
pub mod rows;
pub mod schema;
pub mod store;
pub mod works;

pub use composers::ComposerService;
pub use recordings::RecordingService;
pub use store::{Filter, Order, RowStore};
pub use works::WorkService;

use crate::config::Config;
use crate::contract::LibraryError;
use std::sync::Arc;

/// The three access services sharing one store client
#[derive(Clone)]
pub struct Services {
    pub composers: Arc<ComposerService>,
    pub works: Arc<WorkService>,
    pub recordings: Arc<RecordingService>,
}

impl Services {
    pub fn new(store: Arc<dyn RowStore>, config: &Config) -> Self {
        Self {
            composers: Arc::new(ComposerService::new(
                store.clone(),
                config.cascade_composer_delete,
            )),
            works: Arc::new(WorkService::new(store.clone())),
            recordings: Arc::new(RecordingService::new(store)),
        }
    }
}

/// Reject blank values for required text fields
pub(crate) fn require_text(field: &str, value: &str) -> Result<(), LibraryError> {
    if value.trim().is_empty() {
        return Err(LibraryError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}
