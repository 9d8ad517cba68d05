use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::{ServiceError, ValidationErrors};
use thiserror::Error;
use tracing::error;

/// Error body returned by every handler.
///
/// Field errors are sent as the bare field map
/// (`{"first_name": ["First name cannot be empty"]}`); anything else as
/// `{"title", "detail"}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: String,
    pub detail: Option<String>,
    pub errors: Option<ValidationErrors>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: Option<String>) -> Self {
        Self { status, title: title.into(), detail, errors: None }
    }

    fn fields(title: &str, errors: ValidationErrors) -> Self {
        Self { status: StatusCode::BAD_REQUEST, title: title.into(), detail: None, errors: Some(errors) }
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(errs) => Self::fields("Validation Error", errs),
            ServiceError::Reference(errs) => Self::fields("Reference Error", errs),
            ServiceError::Uniqueness(errs) => Self::fields("Uniqueness Error", errs),
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            ServiceError::Db(msg) => {
                error!(error = %msg, "database failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Error", None)
            }
        }
    }
}

const NON_FIELD: &str = "non_field_errors";
const DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

/// Key a typed-body error by the field path it names.
///
/// `manager_id: UUID parsing failed ...` becomes
/// `("manager_id", "Must be a valid UUID.")`; text without a path goes under
/// `non_field_errors`.
fn split_data_error(text: &str) -> (String, String) {
    let text = text.strip_prefix(DATA_ERROR_PREFIX).unwrap_or(text);
    let text = text.rfind(" at line ").map_or(text, |i| &text[..i]);
    match text.split_once(": ") {
        Some((path, msg)) if !path.is_empty() && !path.contains(' ') => {
            let msg = if msg.starts_with("UUID parsing failed") { "Must be a valid UUID." } else { msg };
            (path.to_string(), msg.to_string())
        }
        _ => (NON_FIELD.to_string(), text.to_string()),
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        let text = rejection.body_text();
        let errors = match rejection {
            JsonRejection::JsonDataError(_) => {
                let (field, msg) = split_data_error(&text);
                ValidationErrors::single(field, msg)
            }
            _ => ValidationErrors::single(NON_FIELD, text),
        };
        Self::fields("Malformed Body", errors)
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        match self.errors {
            Some(errors) => (self.status, Json(errors)).into_response(),
            None => {
                let body = serde_json::json!({"title": self.title, "detail": self.detail});
                (self.status, Json(body)).into_response()
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database setup failed: {0}")]
    Database(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_service_errors_to_status() {
        let e = JsonApiError::from(ServiceError::reference("manager_id", "Invalid manager ID"));
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert!(e.errors.is_some());

        let e = JsonApiError::from(ServiceError::not_found("influencer"));
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        assert_eq!(e.detail.as_deref(), Some("influencer not found"));

        let e = JsonApiError::from(ServiceError::Db("connection reset".into()));
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(e.detail.is_none());
    }

    #[test]
    fn typed_body_errors_are_keyed_by_path() {
        let (field, msg) = split_data_error(
            "Failed to deserialize the JSON body into the target type: manager_id: UUID parsing failed: invalid length at line 1 column 21",
        );
        assert_eq!(field, "manager_id");
        assert_eq!(msg, "Must be a valid UUID.");

        let (field, msg) = split_data_error(
            "Failed to deserialize the JSON body into the target type: social_media_accounts[0].platform: invalid type: integer `5`, expected a string at line 1 column 50",
        );
        assert_eq!(field, "social_media_accounts[0].platform");
        assert_eq!(msg, "invalid type: integer `5`, expected a string");
    }

    #[test]
    fn pathless_body_errors_are_non_field() {
        let (field, msg) = split_data_error(
            "Failed to deserialize the JSON body into the target type: invalid type: sequence, expected struct InfluencerInput at line 1 column 0",
        );
        assert_eq!(field, NON_FIELD);
        assert_eq!(msg, "invalid type: sequence, expected struct InfluencerInput");
    }
}
