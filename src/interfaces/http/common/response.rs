//! Response envelope and error mapping

use std::collections::BTreeMap;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Standard API response wrapper.
///
/// Success: `{"success": true, "data": {...}}`.
/// Failure: `{"success": false, "error": "...", "fields": {"name": ["..."]}}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Per-field validation messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, Vec<String>>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            fields: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            fields: None,
        }
    }

    pub fn with_fields(mut self, fields: BTreeMap<String, Vec<String>>) -> Self {
        self.fields = Some(fields);
        self
    }
}

/// Empty response for operations without return data
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmptyData {}

pub type ApiError = (StatusCode, Json<ApiResponse<()>>);
pub type ApiResult<T> = Result<T, ApiError>;

/// Map a domain error to its HTTP status and error body.
pub fn error_response(err: DomainError) -> ApiError {
    let status = match &err {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::InvalidField { .. } | DomainError::BookingConflict => {
            StatusCode::BAD_REQUEST
        }
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
        DomainError::OperationDisabled(_) => StatusCode::METHOD_NOT_ALLOWED,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %err, "Request failed");
        return (status, Json(ApiResponse::error("Internal server error")));
    }

    let body = match err {
        DomainError::InvalidField { field, message } => {
            ApiResponse::error(message.clone())
                .with_fields(BTreeMap::from([(field.to_string(), vec![message])]))
        }
        other => ApiResponse::error(other.to_string()),
    };
    (status, Json(body))
}

pub fn ok<T>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::success(data))
}

/// `201 Created` with a `Location` header.
pub fn created<T: Serialize>(location: String, data: T) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::success(data)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        let cases = [
            (DomainError::not_found("Hotel", 1), StatusCode::NOT_FOUND),
            (DomainError::BookingConflict, StatusCode::BAD_REQUEST),
            (DomainError::Forbidden("no".into()), StatusCode::FORBIDDEN),
            (DomainError::Unauthorized("no".into()), StatusCode::UNAUTHORIZED),
            (DomainError::OperationDisabled("create"), StatusCode::METHOD_NOT_ALLOWED),
            (DomainError::Storage("disk".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            assert_eq!(error_response(err).0, expected);
        }
    }

    #[test]
    fn invalid_field_lists_field_messages() {
        let (status, Json(body)) = error_response(DomainError::invalid_field("room", "bad pk"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error.as_deref(), Some("bad pk"));
        assert_eq!(body.fields.unwrap()["room"], vec!["bad pk".to_string()]);
    }

    #[test]
    fn storage_details_are_not_leaked() {
        let (_, Json(body)) = error_response(DomainError::Storage("UNIQUE failed".into()));
        assert_eq!(body.error.as_deref(), Some("Internal server error"));
    }

    #[test]
    fn conflict_message_is_exposed() {
        let (_, Json(body)) = error_response(DomainError::BookingConflict);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Room is already reserved for specified dates.");
        assert!(json.get("data").is_none());
    }
}
