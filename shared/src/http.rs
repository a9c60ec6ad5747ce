//! HTTP helpers for Lambda handlers.

use lambda_http::{Body, Response};
use serde::Serialize;

use crate::error::{Error, PermissionError};
use crate::role::{Permission, Role};

/// Standard API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Body returned for every error response.
///
/// Permission denials additionally carry the permission and role.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_permission: Option<Permission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_role: Option<Role>,
}

impl From<&PermissionError> for ErrorBody {
    fn from(err: &PermissionError) -> Self {
        Self {
            code: "PERMISSION_DENIED",
            message: err.message.clone(),
            required_permission: Some(err.required_permission),
            user_role: Some(err.user_role),
        }
    }
}

impl From<&Error> for ErrorBody {
    fn from(err: &Error) -> Self {
        match err {
            Error::PermissionDenied(denied) => denied.into(),
            other => Self {
                code: other.code(),
                message: other.to_string(),
                required_permission: None,
                user_role: None,
            },
        }
    }
}

/// Create a JSON response with the given status code and data.
pub fn json_response<T: Serialize>(
    status: u16,
    data: &T,
) -> Result<Response<Body>, lambda_http::Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(data)?))
        .map_err(Box::new)?;

    Ok(response)
}

/// 403 response for a failed permission guard.
pub fn permission_denied_response(
    err: &PermissionError,
) -> Result<Response<Body>, lambda_http::Error> {
    json_response(403, &ErrorBody::from(err))
}

/// Map any error to its status code and JSON body.
pub fn error_response(err: &Error) -> Result<Response<Body>, lambda_http::Error> {
    json_response(err.status_code(), &ErrorBody::from(err))
}
