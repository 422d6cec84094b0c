//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models and the native client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::MusicLibraryApi;
pub use error::LibraryError;
pub use model::{
    Composer, ComposerPatch, NewComposer, NewRecording, NewWork, Recording, RecordingPatch, Work,
    WorkPatch,
};
