//! Problem responses (RFC 9457) for failed tool calls.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::core::error::DispatchError;

const BAD_REQUEST_TYPE: &str = "https://tools.ietf.org/html/rfc9110#section-15.5.1";
const NOT_FOUND_TYPE: &str = "https://tools.ietf.org/html/rfc9110#section-15.5.5";
const INTERNAL_ERROR_TYPE: &str = "https://tools.ietf.org/html/rfc9110#section-15.6.1";

/// Problem payload returned with every non-success status.
#[derive(Debug, Clone, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ProblemDetails {
    /// Create a problem for the given status.
    pub fn new(
        status: StatusCode,
        problem_type: &str,
        title: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            problem_type: problem_type.to_string(),
            title: title.into(),
            status: status.as_u16(),
            detail: Some(detail.into()),
        }
    }

    /// The HTTP status carried by this problem.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<DispatchError> for ProblemDetails {
    fn from(err: DispatchError) -> Self {
        let detail = err.to_string();
        match err {
            DispatchError::NotFound(_) => {
                Self::new(StatusCode::NOT_FOUND, NOT_FOUND_TYPE, "Tool not found", detail)
            }
            DispatchError::InvalidBody(_) => Self::new(
                StatusCode::BAD_REQUEST,
                BAD_REQUEST_TYPE,
                "Invalid request body",
                detail,
            ),
            DispatchError::Tool(tool_err) => Self::new(
                StatusCode::BAD_REQUEST,
                BAD_REQUEST_TYPE,
                format!("MCP Tool Error ({})", tool_err.code().0),
                detail,
            ),
            DispatchError::ServiceUnavailable(_) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_TYPE,
                "Tools capability unavailable",
                detail,
            ),
            DispatchError::Unexpected(_) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_TYPE,
                "An error occurred while processing your request.",
                detail,
            ),
        }
    }
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (
            status,
            [(header::CONTENT_TYPE, "application/problem+json")],
            Json(self),
        )
            .into_response()
    }
}
