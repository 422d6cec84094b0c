//! Composer access service

use super::rows::{decode, decode_all, ComposerRow, RecordingRow, WorkRow};
use super::schema::{ComposerField, EntityFields, RecordingField, Row, WorkField, WriteSet};
use super::store::{store_error, Filter, Order, RowStore};
use super::require_text;
use crate::contract::{Composer, ComposerPatch, LibraryError, NewComposer};
use std::sync::Arc;
use tracing::debug;

const TABLE: &str = ComposerField::TABLE;
const RESOURCE: &str = ComposerField::RESOURCE;

pub struct ComposerService {
    store: Arc<dyn RowStore>,
    cascade_delete: bool,
}

impl ComposerService {
    pub fn new(store: Arc<dyn RowStore>, cascade_delete: bool) -> Self {
        Self {
            store,
            cascade_delete,
        }
    }

    /// List all composers by name; works and recordings are not loaded
    pub async fn list_composers(&self) -> Result<Vec<Composer>, LibraryError> {
        debug!(table = TABLE, "listing composers");
        let rows = self
            .store
            .select(TABLE, &[], Some(&Order::asc(ComposerField::Name.column())))
            .await
            .map_err(store_error("select", TABLE))?;

        decode_all::<ComposerRow, _>(TABLE, rows)
    }

    /// Fetch one composer and attach its works and recordings
    ///
    /// The three reads are independent round trips; they do not observe a
    /// single snapshot of the store.
    pub async fn get_composer(&self, id: &str) -> Result<Composer, LibraryError> {
        let row = self.find_row(id).await?.ok_or_else(|| LibraryError::not_found(RESOURCE, id))?;
        let mut composer: Composer = decode::<ComposerRow, _>(TABLE, row)?;

        let by_work_owner = [Filter::eq(WorkField::ComposerId.column(), id)];
        let works = self
            .store
            .select(
                WorkField::TABLE,
                &by_work_owner,
                Some(&Order::asc(WorkField::CreatedAt.column())),
            )
            .await
            .map_err(store_error("select", WorkField::TABLE))?;
        composer.works = decode_all::<WorkRow, _>(WorkField::TABLE, works)?;

        let by_recording_owner = [Filter::eq(RecordingField::ComposerId.column(), id)];
        let recordings = self
            .store
            .select(
                RecordingField::TABLE,
                &by_recording_owner,
                Some(&Order::asc(RecordingField::CreatedAt.column())),
            )
            .await
            .map_err(store_error("select", RecordingField::TABLE))?;
        composer.recordings = decode_all::<RecordingRow, _>(RecordingField::TABLE, recordings)?;

        debug!(
            composer_id = id,
            works = composer.works.len(),
            recordings = composer.recordings.len(),
            "loaded composer"
        );
        Ok(composer)
    }

    pub async fn create_composer(&self, input: NewComposer) -> Result<Composer, LibraryError> {
        require_text(ComposerField::Name.wire(), &input.name)?;
        require_text(ComposerField::Period.wire(), &input.period)?;
        require_text(ComposerField::Image.wire(), &input.image)?;

        let changes = WriteSet::<ComposerField>::for_create()
            .set(ComposerField::Name, input.name)
            .set(ComposerField::Period, input.period)
            .set(ComposerField::Image, input.image);

        let row = self
            .store
            .insert(TABLE, changes.into_row())
            .await
            .map_err(store_error("insert", TABLE))?
            .into_iter()
            .next()
            .ok_or_else(|| LibraryError::write_failed(RESOURCE))?;

        let composer: Composer = decode::<ComposerRow, _>(TABLE, row)?;
        debug!(composer_id = %composer.id, "created composer");
        Ok(composer)
    }

    /// Write only the supplied fields; omitted fields keep their stored values
    pub async fn update_composer(
        &self,
        id: &str,
        patch: ComposerPatch,
    ) -> Result<Composer, LibraryError> {
        for (field, value) in [
            (ComposerField::Name.wire(), &patch.name),
            (ComposerField::Period.wire(), &patch.period),
            (ComposerField::Image.wire(), &patch.image),
        ] {
            if let Some(value) = value {
                require_text(field, value)?;
            }
        }

        let changes = WriteSet::<ComposerField>::for_update()
            .set_opt(ComposerField::Name, patch.name)
            .set_opt(ComposerField::Period, patch.period)
            .set_opt(ComposerField::Image, patch.image);

        let row = if changes.is_empty() {
            self.find_row(id).await?
        } else {
            self.store
                .update(TABLE, changes.into_row(), &[Filter::eq(ComposerField::Id.column(), id)])
                .await
                .map_err(store_error("update", TABLE))?
                .into_iter()
                .next()
        };

        let row = row.ok_or_else(|| LibraryError::not_found(RESOURCE, id))?;
        decode::<ComposerRow, _>(TABLE, row)
    }

    /// Delete a composer row
    ///
    /// Works and recordings are only removed with it when cascading deletes
    /// are enabled; otherwise they are left in place.
    pub async fn delete_composer(&self, id: &str) -> Result<(), LibraryError> {
        if self.cascade_delete {
            if self.find_row(id).await?.is_none() {
                return Err(LibraryError::not_found(RESOURCE, id));
            }
            self.delete_children(id).await?;
        }

        let deleted = self
            .store
            .delete(TABLE, &[Filter::eq(ComposerField::Id.column(), id)])
            .await
            .map_err(store_error("delete", TABLE))?;

        if deleted.is_empty() {
            return Err(LibraryError::not_found(RESOURCE, id));
        }
        debug!(composer_id = id, "deleted composer");
        Ok(())
    }

    async fn delete_children(&self, id: &str) -> Result<(), LibraryError> {
        let works = self
            .store
            .delete(WorkField::TABLE, &[Filter::eq(WorkField::ComposerId.column(), id)])
            .await
            .map_err(store_error("delete", WorkField::TABLE))?;
        let recordings = self
            .store
            .delete(
                RecordingField::TABLE,
                &[Filter::eq(RecordingField::ComposerId.column(), id)],
            )
            .await
            .map_err(store_error("delete", RecordingField::TABLE))?;

        debug!(
            composer_id = id,
            works = works.len(),
            recordings = recordings.len(),
            "cascaded composer delete"
        );
        Ok(())
    }

    async fn find_row(&self, id: &str) -> Result<Option<Row>, LibraryError> {
        Ok(self
            .store
            .select(TABLE, &[Filter::eq(ComposerField::Id.column(), id)], None)
            .await
            .map_err(store_error("select", TABLE))?
            .into_iter()
            .next())
    }
}
