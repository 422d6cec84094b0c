//! Persisted row shapes and their conversion into contract models
//!
//! Field names here are the snake_case column names of the backing tables;
//! the tests below check them against the field tables in `schema`.

use super::schema::Row;
use crate::contract::{Composer, LibraryError, Recording, Work};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `composers` table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposerRow {
    pub id: String,
    pub name: String,
    pub period: String,
    pub image: String,
    #[serde(default)]
    pub sheet_music_count: i64,
    #[serde(default)]
    pub recording_count: i64,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `works` table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkRow {
    pub id: String,
    #[serde(default)]
    pub composer_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub edition: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `recordings` table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingRow {
    pub id: String,
    #[serde(default)]
    pub composer_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub performer: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl From<ComposerRow> for Composer {
    fn from(row: ComposerRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            period: row.period,
            image: row.image,
            sheet_music_count: row.sheet_music_count,
            recording_count: row.recording_count,
            created_at: row.created_at,
            works: Vec::new(),
            recordings: Vec::new(),
        }
    }
}

impl From<WorkRow> for Work {
    fn from(row: WorkRow) -> Self {
        Self {
            id: row.id,
            composer_id: row.composer_id,
            title: row.title,
            edition: row.edition,
            year: row.year,
            file_url: row.file_url,
            created_at: row.created_at,
        }
    }
}

impl From<RecordingRow> for Recording {
    fn from(row: RecordingRow) -> Self {
        Self {
            id: row.id,
            composer_id: row.composer_id,
            title: row.title,
            performer: row.performer,
            duration: row.duration,
            year: row.year,
            created_at: row.created_at,
        }
    }
}

/// Decode one store row into a contract model via its persisted shape
pub(crate) fn decode<R, M>(table: &str, row: Row) -> Result<M, LibraryError>
where
    R: DeserializeOwned + Into<M>,
{
    serde_json::from_value::<R>(Value::Object(row))
        .map(Into::into)
        .map_err(|err| {
            tracing::error!(table, error = %err, "store returned an undecodable row");
            LibraryError::Store {
                message: format!("malformed {table} row: {err}"),
            }
        })
}

pub(crate) fn decode_all<R, M>(table: &str, rows: Vec<Row>) -> Result<Vec<M>, LibraryError>
where
    R: DeserializeOwned + Into<M>,
{
    rows.into_iter().map(|row| decode::<R, M>(table, row)).collect()
}
