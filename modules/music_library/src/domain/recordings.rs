//! Recording access service

use super::require_text;
use super::rows::{decode, RecordingRow};
use super::schema::{EntityFields, RecordingField, WriteSet};
use super::store::{store_error, Filter, RowStore};
use crate::contract::{LibraryError, NewRecording, Recording, RecordingPatch};
use std::sync::Arc;
use tracing::debug;

const TABLE: &str = RecordingField::TABLE;
const RESOURCE: &str = RecordingField::RESOURCE;

pub struct RecordingService {
    store: Arc<dyn RowStore>,
}

impl RecordingService {
    pub fn new(store: Arc<dyn RowStore>) -> Self {
        Self { store }
    }

    pub async fn create_recording(&self, input: NewRecording) -> Result<Recording, LibraryError> {
        require_text(RecordingField::ComposerId.wire(), &input.composer_id)?;
        require_text(RecordingField::Title.wire(), &input.title)?;

        let changes = WriteSet::<RecordingField>::for_create()
            .set(RecordingField::ComposerId, input.composer_id)
            .set(RecordingField::Title, input.title)
            .set_opt(RecordingField::Performer, input.performer)
            .set_opt(RecordingField::Duration, input.duration)
            .set_opt(RecordingField::Year, input.year);

        let row = self
            .store
            .insert(TABLE, changes.into_row())
            .await
            .map_err(store_error("insert", TABLE))?
            .into_iter()
            .next()
            .ok_or_else(|| LibraryError::write_failed(RESOURCE))?;

        let recording: Recording = decode::<RecordingRow, _>(TABLE, row)?;
        debug!(recording_id = %recording.id, "created recording");
        Ok(recording)
    }

    pub async fn update_recording(
        &self,
        id: &str,
        patch: RecordingPatch,
    ) -> Result<Recording, LibraryError> {
        if let Some(title) = &patch.title {
            require_text(RecordingField::Title.wire(), title)?;
        }

        let changes = WriteSet::<RecordingField>::for_update()
            .set_opt(RecordingField::Title, patch.title)
            .set_opt(RecordingField::Performer, patch.performer)
            .set_opt(RecordingField::Duration, patch.duration)
            .set_opt(RecordingField::Year, patch.year);

        let by_id = [Filter::eq(RecordingField::Id.column(), id)];
        let rows = if changes.is_empty() {
            self.store
                .select(TABLE, &by_id, None)
                .await
                .map_err(store_error("select", TABLE))?
        } else {
            self.store
                .update(TABLE, changes.into_row(), &by_id)
                .await
                .map_err(store_error("update", TABLE))?
        };

        let row = rows
            .into_iter()
            .next()
            .ok_or_else(|| LibraryError::not_found(RESOURCE, id))?;
        decode::<RecordingRow, _>(TABLE, row)
    }

    pub async fn delete_recording(&self, id: &str) -> Result<(), LibraryError> {
        let deleted = self
            .store
            .delete(TABLE, &[Filter::eq(RecordingField::Id.column(), id)])
            .await
            .map_err(store_error("delete", TABLE))?;

        if deleted.is_empty() {
            return Err(LibraryError::not_found(RESOURCE, id));
        }
        debug!(recording_id = id, "deleted recording");
        Ok(())
    }
}
