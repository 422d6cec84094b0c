//! Music Library Module
//!
//! REST facade over a hosted relational store for composers, their works
//! (sheet music) and their recordings. Wire DTOs use camelCase; persisted
//! rows use snake_case columns, translated through one field table per entity.

// Public exports
pub mod contract;
pub use contract::{
    client::MusicLibraryApi, error::LibraryError, Composer, ComposerPatch, NewComposer,
    NewRecording, NewWork, Recording, RecordingPatch, Work, WorkPatch,
};

pub mod module;
pub use module::MusicLibraryModule;

pub mod config;
pub use config::{Config, StoreConfig, StoreKind};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
