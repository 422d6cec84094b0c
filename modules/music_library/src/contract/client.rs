//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to interact with the
//! music library. NO HTTP - direct function calls.

use super::{
    error::LibraryError,
    model::{
        Composer, ComposerPatch, NewComposer, NewRecording, NewWork, Recording, RecordingPatch,
        Work, WorkPatch,
    },
};
use async_trait::async_trait;

/// Music library API for inter-module communication
#[async_trait]
pub trait MusicLibraryApi: Send + Sync {
    // ===== Composer Operations =====

    /// List all composers ordered by name, without works or recordings
    async fn list_composers(&self) -> Result<Vec<Composer>, LibraryError>;

    /// Get a composer together with its works and recordings
    async fn get_composer(&self, id: &str) -> Result<Composer, LibraryError>;

    async fn create_composer(&self, composer: NewComposer) -> Result<Composer, LibraryError>;

    async fn update_composer(
        &self,
        id: &str,
        patch: ComposerPatch,
    ) -> Result<Composer, LibraryError>;

    async fn delete_composer(&self, id: &str) -> Result<(), LibraryError>;

    // ===== Work Operations =====

    async fn create_work(&self, work: NewWork) -> Result<Work, LibraryError>;

    async fn update_work(&self, id: &str, patch: WorkPatch) -> Result<Work, LibraryError>;

    async fn delete_work(&self, id: &str) -> Result<(), LibraryError>;

    // ===== Recording Operations =====

    async fn create_recording(&self, recording: NewRecording) -> Result<Recording, LibraryError>;

    async fn update_recording(
        &self,
        id: &str,
        patch: RecordingPatch,
    ) -> Result<Recording, LibraryError>;

    async fn delete_recording(&self, id: &str) -> Result<(), LibraryError>;
}
