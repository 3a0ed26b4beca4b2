// obelus/src/response/version.rs — 505 result carrying an arbitrary body value
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Produces an HTTP Version Not Supported (505) response whose body is the
/// given value rendered as JSON. The value is not validated; a value that
/// fails to serialize degrades to a JSON `null` body, the status stays 505.
#[derive(Debug)]
pub struct HttpVersionNotSupportedResult<T> {
    value: T,
}

impl<T: serde::Serialize> HttpVersionNotSupportedResult<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::HTTP_VERSION_NOT_SUPPORTED
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: serde::Serialize> IntoResponse for HttpVersionNotSupportedResult<T> {
    fn into_response(self) -> Response {
        let body = serde_json::to_value(&self.value).unwrap_or(serde_json::Value::Null);
        (StatusCode::HTTP_VERSION_NOT_SUPPORTED, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_505() {
        let result = HttpVersionNotSupportedResult::new("HTTP/0.9 is not supported");
        assert_eq!(result.status_code(), StatusCode::HTTP_VERSION_NOT_SUPPORTED);

        let resp = result.into_response();
        assert_eq!(resp.status(), StatusCode::HTTP_VERSION_NOT_SUPPORTED);
    }

    #[test]
    fn test_value_carried() {
        let result = HttpVersionNotSupportedResult::new(vec![1, 2, 3]);
        assert_eq!(result.value(), &vec![1, 2, 3]);
    }

    #[test]
    fn test_none_value_does_not_panic() {
        let resp = HttpVersionNotSupportedResult::new(Option::<String>::None).into_response();
        assert_eq!(resp.status(), StatusCode::HTTP_VERSION_NOT_SUPPORTED);
    }
}
