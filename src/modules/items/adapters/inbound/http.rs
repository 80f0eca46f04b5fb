// Shared HTTP plumbing for the items inbound adapters.
//
// Responsibilities
// - Map application errors onto status codes and JSON bodies.
// - Turn JSON extraction failures into 400 responses with the same body shape.
// - Report a field of the wrong JSON type on its dotted path.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::modules::items::core::errors::ApplicationError;
use crate::shared::core::validation::{INVALID_DATA_TYPE, MUST_BE_NUMBER, ValidationErrors};

pub const NOT_FOUND_MESSAGE: &str = "Item not found";

pub fn error_body(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            ApplicationError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "errors": errors.to_map() })),
            )
                .into_response(),
            ApplicationError::InvalidArgument(message) => {
                error_body(StatusCode::BAD_REQUEST, message)
            }
            ApplicationError::NotFound(_) => error_body(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
            err @ (ApplicationError::Store(_) | ApplicationError::Unexpected(_)) => {
                tracing::error!(error = %err, "request failed");
                error_body(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        }
    }
}

/// Decodes the extracted JSON into `T`.
///
/// Content-type and syntax failures answer `{"error": ...}`. A field holding
/// the wrong JSON type answers `{"errors": {path: message}}`.
pub fn json_body<T: DeserializeOwned>(body: Result<Json<Value>, JsonRejection>) -> Result<T, Response> {
    let Json(value) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected request body");
        error_body(
            StatusCode::BAD_REQUEST,
            format!("invalid request body: {}", rejection.body_text()),
        )
    })?;

    serde_path_to_error::deserialize(value).map_err(|err| {
        tracing::debug!(error = %err, "request body field has the wrong type");
        let path = err.path().to_string();
        if path == "." {
            return error_body(
                StatusCode::BAD_REQUEST,
                format!("invalid request body: {}", err.inner()),
            );
        }
        let message = if err.inner().to_string().contains("expected f64") {
            MUST_BE_NUMBER
        } else {
            INVALID_DATA_TYPE
        };
        ApplicationError::Validation(ValidationErrors::single(path, message)).into_response()
    })
}
