//! HTTP request handlers - thin layer that delegates to the access services

use super::{
    dto::*,
    error::{map_domain_error, JsonBody, Problem},
};
use crate::domain::{ComposerService, RecordingService, WorkService};
use axum::{extract::Path, http::StatusCode, Json};
use std::sync::Arc;

// ===== Health =====

pub async fn health() -> Json<MessageResponse> {
    Json(MessageResponse::new("Music library backend is running"))
}

// ===== Composer Handlers =====

/// List composers by name (works and recordings empty)
pub async fn list_composers(
    service: Arc<ComposerService>,
) -> Result<Json<Vec<ComposerDto>>, Problem> {
    let composers = service.list_composers().await.map_err(map_domain_error)?;

    Ok(Json(composers.into_iter().map(Into::into).collect()))
}

/// Get a composer with its works and recordings
pub async fn get_composer(
    service: Arc<ComposerService>,
    Path(id): Path<String>,
) -> Result<Json<ComposerDto>, Problem> {
    let composer = service.get_composer(&id).await.map_err(map_domain_error)?;

    Ok(Json(composer.into()))
}

pub async fn create_composer(
    service: Arc<ComposerService>,
    JsonBody(req): JsonBody<CreateComposerRequest>,
) -> Result<(StatusCode, Json<ComposerDto>), Problem> {
    let composer = service
        .create_composer(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(composer.into())))
}

pub async fn update_composer(
    service: Arc<ComposerService>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateComposerRequest>,
) -> Result<Json<ComposerDto>, Problem> {
    let composer = service
        .update_composer(&id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(composer.into()))
}

pub async fn delete_composer(
    service: Arc<ComposerService>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, Problem> {
    service.delete_composer(&id).await.map_err(map_domain_error)?;

    Ok(Json(MessageResponse::new("Composer deleted successfully")))
}

// ===== Work Handlers =====

pub async fn create_work(
    service: Arc<WorkService>,
    JsonBody(req): JsonBody<CreateWorkRequest>,
) -> Result<(StatusCode, Json<WorkDto>), Problem> {
    let work = service.create_work(req.into()).await.map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(work.into())))
}

pub async fn update_work(
    service: Arc<WorkService>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateWorkRequest>,
) -> Result<Json<WorkDto>, Problem> {
    let work = service
        .update_work(&id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(work.into()))
}

pub async fn delete_work(
    service: Arc<WorkService>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, Problem> {
    service.delete_work(&id).await.map_err(map_domain_error)?;

    Ok(Json(MessageResponse::new("Work deleted successfully")))
}

// ===== Recording Handlers =====

pub async fn create_recording(
    service: Arc<RecordingService>,
    JsonBody(req): JsonBody<CreateRecordingRequest>,
) -> Result<(StatusCode, Json<RecordingDto>), Problem> {
    let recording = service
        .create_recording(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(recording.into())))
}

pub async fn update_recording(
    service: Arc<RecordingService>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateRecordingRequest>,
) -> Result<Json<RecordingDto>, Problem> {
    let recording = service
        .update_recording(&id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(recording.into()))
}

pub async fn delete_recording(
    service: Arc<RecordingService>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, Problem> {
    service.delete_recording(&id).await.map_err(map_domain_error)?;

    Ok(Json(MessageResponse::new("Recording deleted successfully")))
}
