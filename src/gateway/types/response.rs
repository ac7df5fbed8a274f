//! API Response types and error codes
//!
//! - `ApiResponse<T>`: Unified response wrapper
//! - `ApiError`: HTTP-mapped failure
//! - `error_codes`: Standard error code constants

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::balance::ErrorKind;
use crate::gateway::error::HandlerError;

// ============================================================================
// Unified API Response Format
// ============================================================================

/// Unified API response wrapper
///
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or null (error)
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    #[schema(example = 0)]
    pub code: i32,
    #[schema(example = "ok")]
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: error_codes::SUCCESS,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::success(data)))
}

// ============================================================================
// ApiError
// ============================================================================

/// Failure returned to the RPC caller. Never carries partial data.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub error: &'static str,
    pub msg: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: i32, error: &'static str, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            error,
            msg: msg.into(),
        }
    }
}

impl From<HandlerError> for ApiError {
    fn from(err: HandlerError) -> Self {
        let kind = err.kind();
        let (status, code) = match kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, error_codes::INVALID_PARAMETER),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, error_codes::BALANCE_NOT_FOUND),
            ErrorKind::NoRowsAffected => (StatusCode::NOT_FOUND, error_codes::NO_ROWS_AFFECTED),
            ErrorKind::ConstraintViolation => {
                (StatusCode::CONFLICT, error_codes::CONSTRAINT_VIOLATION)
            }
            ErrorKind::StorageUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                error_codes::SERVICE_UNAVAILABLE,
            ),
            ErrorKind::DeadlineExceeded => {
                (StatusCode::GATEWAY_TIMEOUT, error_codes::DEADLINE_EXCEEDED)
            }
        };
        Self::new(status, code, kind.name(), err.to_string())
    }
}

/// JSON body for errors
#[derive(Debug, Serialize)]
struct ApiErrorBody {
    code: i32,
    error: &'static str,
    msg: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            code: self.code,
            error: self.error,
            msg: self.msg,
        };
        (self.status, Json(body)).into_response()
    }
}

// ============================================================================
// Error Codes
// ============================================================================

/// Standard API error codes
pub mod error_codes {
    // Success
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;

    // Resource errors (4xxx)
    pub const BALANCE_NOT_FOUND: i32 = 4004;
    pub const NO_ROWS_AFFECTED: i32 = 4005;
    pub const CONSTRAINT_VIOLATION: i32 = 4009;

    // Server errors (5xxx)
    pub const SERVICE_UNAVAILABLE: i32 = 5001;
    pub const DEADLINE_EXCEEDED: i32 = 5004;
}
