//! Field-name tables and write-set rules for persisted rows
//!
//! Each entity declares ONE table pairing every persisted (snake_case) column
//! with its wire (camelCase) name. Store writes are keyed through this table;
//! the row structs and DTOs are tested against it, so the two spellings cannot
//! drift apart.

use serde_json::{Map, Value};
use std::fmt::Debug;
use std::marker::PhantomData;

/// A record keyed by field name (column names when persisted)
pub type Row = Map<String, Value>;

/// One entry of an entity's field-name table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldName<F> {
    pub field: F,
    /// Persisted column name
    pub column: &'static str,
    /// External (wire) name
    pub wire: &'static str,
}

impl<F> FieldName<F> {
    pub const fn new(field: F, column: &'static str, wire: &'static str) -> Self {
        Self {
            field,
            column,
            wire,
        }
    }
}

/// Declared field set of a persisted entity
pub trait EntityFields: Copy + Eq + Debug + Send + Sync + 'static {
    /// Backing table name
    const TABLE: &'static str;
    /// Human-readable resource name used in errors and messages
    const RESOURCE: &'static str;
    /// Field-name table, one entry per variant in declaration order
    const FIELDS: &'static [FieldName<Self>];
    /// Fields the store assigns; never written by callers
    const SYSTEM_ASSIGNED: &'static [Self];
    /// Fields that must not change once the row exists
    const IMMUTABLE_ON_UPDATE: &'static [Self];

    fn name(self) -> &'static FieldName<Self>;

    fn column(self) -> &'static str {
        self.name().column
    }

    fn wire(self) -> &'static str {
        self.name().wire
    }

    fn columns() -> Vec<&'static str> {
        Self::FIELDS.iter().map(|entry| entry.column).collect()
    }
}

// ===== Field tables =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerField {
    Id,
    Name,
    Period,
    Image,
    SheetMusicCount,
    RecordingCount,
    CreatedAt,
}

impl EntityFields for ComposerField {
    const TABLE: &'static str = "composers";
    const RESOURCE: &'static str = "Composer";
    const FIELDS: &'static [FieldName<Self>] = &[
        FieldName::new(Self::Id, "id", "id"),
        FieldName::new(Self::Name, "name", "name"),
        FieldName::new(Self::Period, "period", "period"),
        FieldName::new(Self::Image, "image", "image"),
        FieldName::new(Self::SheetMusicCount, "sheet_music_count", "sheetMusicCount"),
        FieldName::new(Self::RecordingCount, "recording_count", "recordingCount"),
        FieldName::new(Self::CreatedAt, "created_at", "createdAt"),
    ];
    const SYSTEM_ASSIGNED: &'static [Self] = &[Self::Id, Self::CreatedAt];
    const IMMUTABLE_ON_UPDATE: &'static [Self] = &[Self::Id, Self::CreatedAt];

    fn name(self) -> &'static FieldName<Self> {
        &Self::FIELDS[self as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkField {
    Id,
    ComposerId,
    Title,
    Edition,
    Year,
    FileUrl,
    CreatedAt,
}

impl EntityFields for WorkField {
    const TABLE: &'static str = "works";
    const RESOURCE: &'static str = "Work";
    const FIELDS: &'static [FieldName<Self>] = &[
        FieldName::new(Self::Id, "id", "id"),
        FieldName::new(Self::ComposerId, "composer_id", "composerId"),
        FieldName::new(Self::Title, "title", "title"),
        FieldName::new(Self::Edition, "edition", "edition"),
        FieldName::new(Self::Year, "year", "year"),
        FieldName::new(Self::FileUrl, "file_url", "fileUrl"),
        FieldName::new(Self::CreatedAt, "created_at", "createdAt"),
    ];
    const SYSTEM_ASSIGNED: &'static [Self] = &[Self::Id, Self::CreatedAt];
    const IMMUTABLE_ON_UPDATE: &'static [Self] = &[Self::Id, Self::CreatedAt, Self::ComposerId];

    fn name(self) -> &'static FieldName<Self> {
        &Self::FIELDS[self as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingField {
    Id,
    ComposerId,
    Title,
    Performer,
    Duration,
    Year,
    CreatedAt,
}

impl EntityFields for RecordingField {
    const TABLE: &'static str = "recordings";
    const RESOURCE: &'static str = "Recording";
    const FIELDS: &'static [FieldName<Self>] = &[
        FieldName::new(Self::Id, "id", "id"),
        FieldName::new(Self::ComposerId, "composer_id", "composerId"),
        FieldName::new(Self::Title, "title", "title"),
        FieldName::new(Self::Performer, "performer", "performer"),
        FieldName::new(Self::Duration, "duration", "duration"),
        FieldName::new(Self::Year, "year", "year"),
        FieldName::new(Self::CreatedAt, "created_at", "createdAt"),
    ];
    const SYSTEM_ASSIGNED: &'static [Self] = &[Self::Id, Self::CreatedAt];
    const IMMUTABLE_ON_UPDATE: &'static [Self] = &[Self::Id, Self::CreatedAt, Self::ComposerId];

    fn name(self) -> &'static FieldName<Self> {
        &Self::FIELDS[self as usize]
    }
}

// ===== Write sets =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Create,
    Update,
}

/// Columns to send to the store for one insert or update
///
/// Only fields explicitly set are included, so store-side defaults apply to
/// everything else. System-assigned fields are never included, and on update
/// the entity's immutable fields are dropped as well.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteSet<F: EntityFields> {
    mode: WriteMode,
    row: Row,
    _fields: PhantomData<F>,
}

impl<F: EntityFields> WriteSet<F> {
    pub fn for_create() -> Self {
        Self::new(WriteMode::Create)
    }

    pub fn for_update() -> Self {
        Self::new(WriteMode::Update)
    }

    fn new(mode: WriteMode) -> Self {
        Self {
            mode,
            row: Row::new(),
            _fields: PhantomData,
        }
    }

    /// Whether `field` may be written in this mode
    pub fn accepts(&self, field: F) -> bool {
        if F::SYSTEM_ASSIGNED.contains(&field) {
            return false;
        }
        match self.mode {
            WriteMode::Create => true,
            WriteMode::Update => !F::IMMUTABLE_ON_UPDATE.contains(&field),
        }
    }

    pub fn set(mut self, field: F, value: impl Into<Value>) -> Self {
        if self.accepts(field) {
            self.row.insert(field.column().to_string(), value.into());
        } else {
            tracing::debug!(
                table = F::TABLE,
                column = field.column(),
                mode = ?self.mode,
                "dropping non-writable column from write set"
            );
        }
        self
    }

    /// Set `field` only when a value is present
    pub fn set_opt<V: Into<Value>>(self, field: F, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(field, value),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.row.is_empty()
    }

    pub fn contains(&self, field: F) -> bool {
        self.row.contains_key(field.column())
    }

    pub fn into_row(self) -> Row {
        self.row
    }
}
