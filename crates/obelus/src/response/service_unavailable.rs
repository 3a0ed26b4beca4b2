// obelus/src/response/service_unavailable.rs — 503 result with an optional Retry-After hint
use super::base::{finalize_response, BaseResponse};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Produces a Service Unavailable (503) response. An optional delay hint is
/// emitted verbatim as a `Retry-After` header; the string is not validated,
/// a value that cannot be encoded as a header is skipped.
#[derive(Debug, Default)]
pub struct ServiceUnavailableResult {
    length_of_delay: Option<String>,
}

impl ServiceUnavailableResult {
    pub fn new() -> Self {
        Self {
            length_of_delay: None,
        }
    }

    pub fn after(length_of_delay: impl Into<String>) -> Self {
        Self {
            length_of_delay: Some(length_of_delay.into()),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::SERVICE_UNAVAILABLE
    }

    pub fn length_of_delay(&self) -> Option<&str> {
        self.length_of_delay.as_deref()
    }
}

impl IntoResponse for ServiceUnavailableResult {
    fn into_response(self) -> Response {
        let mut base = BaseResponse::new(StatusCode::SERVICE_UNAVAILABLE);
        if let Some(delay) = self.length_of_delay {
            base.header("retry-after", &delay);
        }
        finalize_response(base, ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_delay_hint() {
        let resp = ServiceUnavailableResult::new().into_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(!resp.headers().contains_key("retry-after"));
    }

    #[test]
    fn test_delay_hint_verbatim() {
        let result = ServiceUnavailableResult::after("120");
        assert_eq!(result.length_of_delay(), Some("120"));

        let resp = result.into_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(resp.headers().get("retry-after").unwrap(), "120");
    }

    #[test]
    fn test_delay_hint_not_validated() {
        // HTTP-date form, and arbitrary text, both pass through unchanged
        let resp = ServiceUnavailableResult::after("Fri, 31 Dec 1999 23:59:59 GMT").into_response();
        assert_eq!(
            resp.headers().get("retry-after").unwrap(),
            "Fri, 31 Dec 1999 23:59:59 GMT"
        );

        let resp = ServiceUnavailableResult::after("not-a-duration").into_response();
        assert_eq!(resp.headers().get("retry-after").unwrap(), "not-a-duration");
    }

    #[test]
    fn test_empty_delay_hint() {
        let result = ServiceUnavailableResult::after("");
        assert_eq!(result.length_of_delay(), Some(""));

        let resp = result.into_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(resp.headers().get("retry-after").unwrap(), "");
    }

    #[test]
    fn test_unencodable_delay_hint_skipped() {
        let resp = ServiceUnavailableResult::after("two\nlines").into_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(!resp.headers().contains_key("retry-after"));
    }
}
