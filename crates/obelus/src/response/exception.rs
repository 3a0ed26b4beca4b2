// obelus/src/response/exception.rs — 500 result wrapping a handler error
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Produces an Internal Server Error (500) response wrapping the error that
/// caused it. The error chain is only rendered into the body when
/// `include_error_detail` is set; the default keeps the body generic.
///
/// ```ignore
/// async fn handler() -> Result<String, ExceptionResult> {
///     let data = load_data()?; // any anyhow-compatible error converts
///     Ok(data)
/// }
/// ```
#[derive(Debug)]
pub struct ExceptionResult {
    error: anyhow::Error,
    include_error_detail: bool,
}

impl ExceptionResult {
    pub fn new(error: impl Into<anyhow::Error>) -> Self {
        Self {
            error: error.into(),
            include_error_detail: false,
        }
    }

    pub fn with_detail(error: impl Into<anyhow::Error>, include_error_detail: bool) -> Self {
        Self {
            error: error.into(),
            include_error_detail,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    pub fn error(&self) -> &anyhow::Error {
        &self.error
    }

    pub fn include_error_detail(&self) -> bool {
        self.include_error_detail
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ExceptionResult {
    fn into_response(self) -> Response {
        tracing::error!("Internal server error: {:#}", self.error);

        let message = if self.include_error_detail {
            format!("{:#}", self.error)
        } else {
            "An unexpected error occurred".to_string()
        };

        let body = Json(ErrorBody { error: message });
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

// Allows handlers to use `?` on standard Result types (like SQLx or std::io)
impl<E> From<E> for ExceptionResult
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        ExceptionResult::new(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_exact_error() {
        let result = ExceptionResult::new(anyhow::anyhow!("database offline"));
        assert_eq!(result.error().to_string(), "database offline");
        assert!(!result.include_error_detail());
    }

    #[test]
    fn test_detail_flag_carried() {
        let result = ExceptionResult::with_detail(anyhow::anyhow!("boom"), true);
        assert!(result.include_error_detail());

        let result = ExceptionResult::with_detail(anyhow::anyhow!("boom"), false);
        assert!(!result.include_error_detail());
    }

    #[test]
    fn test_status_is_500() {
        let result = ExceptionResult::new(anyhow::anyhow!("boom"));
        assert_eq!(result.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let resp = result.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_from_io_error() {
        fn read() -> Result<String, ExceptionResult> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "pipe closed"))?
        }

        let err = read().unwrap_err();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error().to_string(), "pipe closed");
    }
}
