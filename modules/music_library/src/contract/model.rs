//! Contract models for the music library
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

/// Composer with its dependent works and recordings
///
/// `works` and `recordings` are derived views: they are not stored on the
/// composer row and are only populated by a single-composer fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composer {
    /// Store-assigned identifier
    pub id: String,
    pub name: String,
    /// Musical period (e.g. "Baroque")
    pub period: String,
    /// Portrait reference (URL or asset path)
    pub image: String,
    pub sheet_music_count: i64,
    pub recording_count: i64,
    /// Store-assigned creation timestamp
    pub created_at: Option<String>,
    pub works: Vec<Work>,
    pub recordings: Vec<Recording>,
}

/// Sheet-music work belonging to a composer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Work {
    pub id: String,
    pub composer_id: Option<String>,
    pub title: String,
    pub edition: Option<String>,
    pub year: Option<String>,
    /// Reference to the score file
    pub file_url: Option<String>,
    pub created_at: Option<String>,
}

/// Recording belonging to a composer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recording {
    pub id: String,
    pub composer_id: Option<String>,
    pub title: String,
    pub performer: Option<String>,
    pub duration: Option<String>,
    pub year: Option<String>,
    pub created_at: Option<String>,
}

/// Input for creating a composer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComposer {
    pub name: String,
    pub period: String,
    pub image: String,
}

/// Partial composer update; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposerPatch {
    pub name: Option<String>,
    pub period: Option<String>,
    pub image: Option<String>,
}

/// Input for creating a work
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWork {
    pub composer_id: String,
    pub title: String,
    pub edition: Option<String>,
    pub year: Option<String>,
    pub file_url: Option<String>,
}

/// Partial work update. The owning composer cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkPatch {
    pub title: Option<String>,
    pub edition: Option<String>,
    pub year: Option<String>,
    pub file_url: Option<String>,
}

/// Input for creating a recording
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecording {
    pub composer_id: String,
    pub title: String,
    pub performer: Option<String>,
    pub duration: Option<String>,
    pub year: Option<String>,
}

/// Partial recording update. The owning composer cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingPatch {
    pub title: Option<String>,
    pub performer: Option<String>,
    pub duration: Option<String>,
    pub year: Option<String>,
}
