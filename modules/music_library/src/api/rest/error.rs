//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::LibraryError;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Serialize)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Problem {
    /// Create a new Problem Details response
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
        }
    }

    /// Add detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: LibraryError) -> Problem {
    match error {
        LibraryError::NotFound { resource, id } => {
            Problem::new(StatusCode::NOT_FOUND, format!("{} Not Found", resource))
                .with_detail(format!("{} with id '{}' was not found", resource, id))
        }

        LibraryError::WriteFailed { resource } => {
            tracing::error!(resource = %resource, "store returned no row for insert");
            Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Write Failed")
                .with_detail(format!("Failed to create {}", resource.to_lowercase()))
        }

        LibraryError::Validation { message } => {
            Problem::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Error").with_detail(message)
        }

        LibraryError::Store { message } => {
            tracing::error!(error = %message, "store error surfaced to client");
            Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Store Error").with_detail(message)
        }
    }
}

/// JSON body extractor whose rejections are Problem Details
///
/// Missing or ill-typed fields become 422 responses, malformed JSON stays 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(map_json_rejection(rejection)),
        }
    }
}

fn map_json_rejection(rejection: JsonRejection) -> Problem {
    let status = rejection.status();
    let title = if status == StatusCode::UNPROCESSABLE_ENTITY {
        "Validation Error"
    } else {
        "Invalid Request Body"
    };
    Problem::new(status, title).with_detail(rejection.body_text())
}
