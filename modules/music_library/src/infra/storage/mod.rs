//! Storage layer - row store implementations

pub mod memory;
pub mod postgrest;

pub use memory::{ColumnDefault, MemoryStore, TableDef};
pub use postgrest::PostgrestStore;

use crate::config::{StoreConfig, StoreKind};
use crate::domain::RowStore;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Build the store client selected by configuration
pub fn connect(config: &StoreConfig) -> Result<Arc<dyn RowStore>> {
    match config.kind {
        StoreKind::Postgrest => {
            let url = config
                .url
                .as_deref()
                .context("store.url is required for the postgrest store")?;
            let api_key = config
                .api_key
                .as_deref()
                .context("store.api_key is required for the postgrest store")?;

            let mut store = PostgrestStore::new(url, api_key)?;
            if let Some(schema) = &config.schema {
                store = store.with_schema(schema);
            }
            tracing::info!(url = %store.base_url(), "using postgrest store");
            Ok(Arc::new(store))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; data is lost on exit");
            Ok(Arc::new(MemoryStore::music_library()))
        }
    }
}
