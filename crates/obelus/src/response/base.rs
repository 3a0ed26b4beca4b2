// obelus/src/response/base.rs — shared status + header carrier and finalizer for the result types
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

pub struct BaseResponse {
    headers: HeaderMap,
    status: StatusCode,
}

impl BaseResponse {
    pub fn new(status: StatusCode) -> Self {
        Self {
            headers: HeaderMap::new(),
            status,
        }
    }

    /// Guarded insert: a key or value that cannot be encoded is skipped.
    pub fn header(&mut self, key: &str, value: &str) {
        if let (Ok(name), Ok(val)) = (
            HeaderName::from_bytes(key.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.headers.insert(name, val);
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }
}

// shared finalizer
pub fn finalize_response(base: BaseResponse, body: impl IntoResponse) -> Response {
    (base.status, base.headers, body).into_response()
}
