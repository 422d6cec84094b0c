//! REST DTOs with serde derives for HTTP API
//!
//! All fields use camelCase on the wire. The names must agree with the wire
//! column of the field tables in `domain::schema`; the tests below check that.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Composer DTOs =====

/// Composer response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComposerDto {
    pub id: String,

    #[schema(example = "Johann Sebastian Bach")]
    pub name: String,

    #[schema(example = "Baroque")]
    pub period: String,

    /// Portrait URL
    pub image: String,

    pub sheet_music_count: i64,

    pub recording_count: i64,

    pub created_at: Option<String>,

    /// Populated only when fetching a single composer
    pub works: Vec<WorkDto>,

    /// Populated only when fetching a single composer
    pub recordings: Vec<RecordingDto>,
}

/// Create composer request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateComposerRequest {
    pub name: String,
    pub period: String,
    pub image: String,
}

/// Update composer request; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateComposerRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

// ===== Work DTOs =====

/// Work response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkDto {
    pub id: String,
    pub composer_id: Option<String>,
    #[schema(example = "Goldberg Variations")]
    pub title: String,
    pub edition: Option<String>,
    #[schema(example = "1741")]
    pub year: Option<String>,
    pub file_url: Option<String>,
    pub created_at: Option<String>,
}

/// Create work request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkRequest {
    /// Ignored; assigned by the store
    #[serde(default)]
    pub id: Option<String>,
    pub composer_id: String,
    pub title: String,
    #[serde(default)]
    pub edition: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    /// Ignored; assigned by the store
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Update work request
///
/// Accepts the full work shape; `id`, `composerId` and `createdAt` are
/// ignored because they cannot change after creation.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub composer_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub edition: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

// ===== Recording DTOs =====

/// Recording response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordingDto {
    pub id: String,
    pub composer_id: Option<String>,
    pub title: String,
    pub performer: Option<String>,
    #[schema(example = "4:32")]
    pub duration: Option<String>,
    pub year: Option<String>,
    pub created_at: Option<String>,
}

/// Create recording request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordingRequest {
    /// Ignored; assigned by the store
    #[serde(default)]
    pub id: Option<String>,
    pub composer_id: String,
    pub title: String,
    #[serde(default)]
    pub performer: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    /// Ignored; assigned by the store
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Update recording request
///
/// Accepts the full recording shape; `id`, `composerId` and `createdAt` are
/// ignored because they cannot change after creation.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecordingRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub composer_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub performer: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

// ===== Misc =====

/// Plain confirmation message
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// Note: Conversion implementations live in mapper.rs
