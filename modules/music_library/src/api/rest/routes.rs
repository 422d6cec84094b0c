//! Route registration

use super::{dto::*, error::{JsonBody, Problem}, handlers};
use crate::domain::{ComposerService, RecordingService, Services, WorkService};
use axum::{
    extract::Path,
    http::StatusCode,
    routing::{get, post, put},
    Extension, Json, Router,
};
use std::sync::Arc;

/// Register all REST routes
pub fn register_routes(router: Router, services: &Services) -> Router {
    router
        .route("/", get(handlers::health))
        // Composer endpoints
        .route(
            "/api/composers",
            get(list_composers_handler).post(create_composer_handler),
        )
        .route(
            "/api/composers/{id}",
            get(get_composer_handler)
                .put(update_composer_handler)
                .delete(delete_composer_handler),
        )
        // Work endpoints
        .route("/api/works", post(create_work_handler))
        .route(
            "/api/works/{id}",
            put(update_work_handler).delete(delete_work_handler),
        )
        // Recording endpoints
        .route("/api/recordings", post(create_recording_handler))
        .route(
            "/api/recordings/{id}",
            put(update_recording_handler).delete(delete_recording_handler),
        )
        // Add services as extensions for handlers
        .layer(Extension(services.composers.clone()))
        .layer(Extension(services.works.clone()))
        .layer(Extension(services.recordings.clone()))
}

// ===== Handler wrappers that extract services from Extension =====

async fn list_composers_handler(
    Extension(service): Extension<Arc<ComposerService>>,
) -> Result<Json<Vec<ComposerDto>>, Problem> {
    handlers::list_composers(service).await
}

async fn get_composer_handler(
    Extension(service): Extension<Arc<ComposerService>>,
    path: Path<String>,
) -> Result<Json<ComposerDto>, Problem> {
    handlers::get_composer(service, path).await
}

async fn create_composer_handler(
    Extension(service): Extension<Arc<ComposerService>>,
    json: JsonBody<CreateComposerRequest>,
) -> Result<(StatusCode, Json<ComposerDto>), Problem> {
    handlers::create_composer(service, json).await
}

async fn update_composer_handler(
    Extension(service): Extension<Arc<ComposerService>>,
    path: Path<String>,
    json: JsonBody<UpdateComposerRequest>,
) -> Result<Json<ComposerDto>, Problem> {
    handlers::update_composer(service, path, json).await
}

async fn delete_composer_handler(
    Extension(service): Extension<Arc<ComposerService>>,
    path: Path<String>,
) -> Result<Json<MessageResponse>, Problem> {
    handlers::delete_composer(service, path).await
}

async fn create_work_handler(
    Extension(service): Extension<Arc<WorkService>>,
    json: JsonBody<CreateWorkRequest>,
) -> Result<(StatusCode, Json<WorkDto>), Problem> {
    handlers::create_work(service, json).await
}

async fn update_work_handler(
    Extension(service): Extension<Arc<WorkService>>,
    path: Path<String>,
    json: JsonBody<UpdateWorkRequest>,
) -> Result<Json<WorkDto>, Problem> {
    handlers::update_work(service, path, json).await
}

async fn delete_work_handler(
    Extension(service): Extension<Arc<WorkService>>,
    path: Path<String>,
) -> Result<Json<MessageResponse>, Problem> {
    handlers::delete_work(service, path).await
}

async fn create_recording_handler(
    Extension(service): Extension<Arc<RecordingService>>,
    json: JsonBody<CreateRecordingRequest>,
) -> Result<(StatusCode, Json<RecordingDto>), Problem> {
    handlers::create_recording(service, json).await
}

async fn update_recording_handler(
    Extension(service): Extension<Arc<RecordingService>>,
    path: Path<String>,
    json: JsonBody<UpdateRecordingRequest>,
) -> Result<Json<RecordingDto>, Problem> {
    handlers::update_recording(service, path, json).await
}

async fn delete_recording_handler(
    Extension(service): Extension<Arc<RecordingService>>,
    path: Path<String>,
) -> Result<Json<MessageResponse>, Problem> {
    handlers::delete_recording(service, path).await
}
