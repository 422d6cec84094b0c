//! Native client implementation - wraps the access services for in-process calls

use crate::contract::{
    Composer, ComposerPatch, LibraryError, MusicLibraryApi, NewComposer, NewRecording, NewWork,
    Recording, RecordingPatch, Work, WorkPatch,
};
use crate::domain::Services;
use async_trait::async_trait;

/// Native client implementation that directly calls the access services
///
/// This client is used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    services: Services,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(services: Services) -> Self {
        Self { services }
    }
}

#[async_trait]
impl MusicLibraryApi for NativeClient {
    async fn list_composers(&self) -> Result<Vec<Composer>, LibraryError> {
        self.services.composers.list_composers().await
    }

    async fn get_composer(&self, id: &str) -> Result<Composer, LibraryError> {
        self.services.composers.get_composer(id).await
    }

    async fn create_composer(&self, composer: NewComposer) -> Result<Composer, LibraryError> {
        self.services.composers.create_composer(composer).await
    }

    async fn update_composer(
        &self,
        id: &str,
        patch: ComposerPatch,
    ) -> Result<Composer, LibraryError> {
        self.services.composers.update_composer(id, patch).await
    }

    async fn delete_composer(&self, id: &str) -> Result<(), LibraryError> {
        self.services.composers.delete_composer(id).await
    }

    async fn create_work(&self, work: NewWork) -> Result<Work, LibraryError> {
        self.services.works.create_work(work).await
    }

    async fn update_work(&self, id: &str, patch: WorkPatch) -> Result<Work, LibraryError> {
        self.services.works.update_work(id, patch).await
    }

    async fn delete_work(&self, id: &str) -> Result<(), LibraryError> {
        self.services.works.delete_work(id).await
    }

    async fn create_recording(&self, recording: NewRecording) -> Result<Recording, LibraryError> {
        self.services.recordings.create_recording(recording).await
    }

    async fn update_recording(
        &self,
        id: &str,
        patch: RecordingPatch,
    ) -> Result<Recording, LibraryError> {
        self.services.recordings.update_recording(id, patch).await
    }

    async fn delete_recording(&self, id: &str) -> Result<(), LibraryError> {
        self.services.recordings.delete_recording(id).await
    }
}
