// obelus/src/response/server_error.rs — the empty-body 5xx results

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

fn status_only(status: StatusCode) -> Response {
    status.into_response()
}

// ════════════════════════════════════════════════════════════
// 500 Internal Server Error
// ════════════════════════════════════════════════════════════

/// Produces an Internal Server Error (500) response with no body.
///
/// ```ignore
/// async fn handler() -> InternalServerErrorResult {
///     InternalServerErrorResult::new()
/// }
/// ```
#[derive(Debug, Default)]
pub struct InternalServerErrorResult;

impl InternalServerErrorResult {
    pub fn new() -> Self {
        Self
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for InternalServerErrorResult {
    fn into_response(self) -> Response {
        status_only(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

// ════════════════════════════════════════════════════════════
// 501 Not Implemented
// ════════════════════════════════════════════════════════════

/// Produces a Not Implemented (501) response with no body.
#[derive(Debug, Default)]
pub struct NotImplementedResult;

impl NotImplementedResult {
    pub fn new() -> Self {
        Self
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::NOT_IMPLEMENTED
    }
}

impl IntoResponse for NotImplementedResult {
    fn into_response(self) -> Response {
        status_only(StatusCode::NOT_IMPLEMENTED)
    }
}

// ════════════════════════════════════════════════════════════
// 502 Bad Gateway
// ════════════════════════════════════════════════════════════

/// Produces a Bad Gateway (502) response with no body.
#[derive(Debug, Default)]
pub struct BadGatewayResult;

impl BadGatewayResult {
    pub fn new() -> Self {
        Self
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_GATEWAY
    }
}

impl IntoResponse for BadGatewayResult {
    fn into_response(self) -> Response {
        status_only(StatusCode::BAD_GATEWAY)
    }
}

// ════════════════════════════════════════════════════════════
// 504 Gateway Timeout
// ════════════════════════════════════════════════════════════

/// Produces a Gateway Timeout (504) response with no body.
#[derive(Debug, Default)]
pub struct GatewayTimeoutResult;

impl GatewayTimeoutResult {
    pub fn new() -> Self {
        Self
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::GATEWAY_TIMEOUT
    }
}

impl IntoResponse for GatewayTimeoutResult {
    fn into_response(self) -> Response {
        status_only(StatusCode::GATEWAY_TIMEOUT)
    }
}
