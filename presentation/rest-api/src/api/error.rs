use poem::http::StatusCode;
use poem_openapi::{Enum, Object, payload::Json};
use serde::{Deserialize, Serialize};

use business::domain::errors::ErrorKind;

/// Outcome marker carried by every response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    #[oai(rename = "success")]
    Success,
    #[oai(rename = "error")]
    Error,
}

#[derive(Object, Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Always `error`
    pub status: EnvelopeStatus,
    /// Code-style message, e.g. `product.not_found: 4`
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Error,
            message: message.into(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Storage => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
