//! Work access service

use super::require_text;
use super::rows::{decode, WorkRow};
use super::schema::{EntityFields, WorkField, WriteSet};
use super::store::{store_error, Filter, RowStore};
use crate::contract::{LibraryError, NewWork, Work, WorkPatch};
use std::sync::Arc;
use tracing::debug;

const TABLE: &str = WorkField::TABLE;
const RESOURCE: &str = WorkField::RESOURCE;

pub struct WorkService {
    store: Arc<dyn RowStore>,
}

impl WorkService {
    pub fn new(store: Arc<dyn RowStore>) -> Self {
        Self { store }
    }

    pub async fn create_work(&self, input: NewWork) -> Result<Work, LibraryError> {
        require_text(WorkField::ComposerId.wire(), &input.composer_id)?;
        require_text(WorkField::Title.wire(), &input.title)?;

        let changes = WriteSet::<WorkField>::for_create()
            .set(WorkField::ComposerId, input.composer_id)
            .set(WorkField::Title, input.title)
            .set_opt(WorkField::Edition, input.edition)
            .set_opt(WorkField::Year, input.year)
            .set_opt(WorkField::FileUrl, input.file_url);

        let row = self
            .store
            .insert(TABLE, changes.into_row())
            .await
            .map_err(store_error("insert", TABLE))?
            .into_iter()
            .next()
            .ok_or_else(|| LibraryError::write_failed(RESOURCE))?;

        let work: Work = decode::<WorkRow, _>(TABLE, row)?;
        debug!(work_id = %work.id, "created work");
        Ok(work)
    }

    /// Update a work; its id, creation time and owning composer never change
    pub async fn update_work(&self, id: &str, patch: WorkPatch) -> Result<Work, LibraryError> {
        if let Some(title) = &patch.title {
            require_text(WorkField::Title.wire(), title)?;
        }

        let changes = WriteSet::<WorkField>::for_update()
            .set_opt(WorkField::Title, patch.title)
            .set_opt(WorkField::Edition, patch.edition)
            .set_opt(WorkField::Year, patch.year)
            .set_opt(WorkField::FileUrl, patch.file_url);

        let by_id = [Filter::eq(WorkField::Id.column(), id)];
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
        decode::<WorkRow, _>(TABLE, row)
    }

    pub async fn delete_work(&self, id: &str) -> Result<(), LibraryError> {
        let deleted = self
            .store
            .delete(TABLE, &[Filter::eq(WorkField::Id.column(), id)])
            .await
            .map_err(store_error("delete", TABLE))?;

        if deleted.is_empty() {
            return Err(LibraryError::not_found(RESOURCE, id));
        }
        debug!(work_id = id, "deleted work");
        Ok(())
    }
}
