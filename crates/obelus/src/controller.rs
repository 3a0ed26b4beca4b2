// obelus/src/controller.rs — extension trait attaching the 5xx helpers to any handler type

use crate::response::{
    BadGatewayResult, ExceptionResult, GatewayTimeoutResult, HttpVersionNotSupportedResult,
    InternalServerErrorResult, NotImplementedResult, ServiceUnavailableResult,
};

/// Server error response helpers, available on any controller-like type.
///
/// The blanket impl makes these callable on whatever state or handler struct
/// a service routes through, in the spirit of framework extension methods:
///
/// ```ignore
/// async fn proxy(state: AppState) -> impl IntoResponse {
///     if state.upstream_down() {
///         return state.bad_gateway().into_response();
///     }
///     // ...
/// }
/// ```
pub trait ServerErrorResponses {
    /// Internal Server Error (500) with no body.
    fn internal_server_error(&self) -> InternalServerErrorResult {
        InternalServerErrorResult::new()
    }

    /// Internal Server Error (500) wrapping the given error. Error detail is
    /// kept out of the body by default.
    fn internal_server_error_from(&self, error: impl Into<anyhow::Error>) -> ExceptionResult {
        ExceptionResult::new(error)
    }

    /// Internal Server Error (500) wrapping the given error, with explicit
    /// control over whether the error chain is rendered into the body.
    fn internal_server_error_with_detail(
        &self,
        error: impl Into<anyhow::Error>,
        include_error_detail: bool,
    ) -> ExceptionResult {
        ExceptionResult::with_detail(error, include_error_detail)
    }

    /// Not Implemented (501) with no body.
    fn not_implemented(&self) -> NotImplementedResult {
        NotImplementedResult::new()
    }

    /// Bad Gateway (502) with no body.
    fn bad_gateway(&self) -> BadGatewayResult {
        BadGatewayResult::new()
    }

    /// Service Unavailable (503) with no delay hint.
    fn service_unavailable(&self) -> ServiceUnavailableResult {
        ServiceUnavailableResult::new()
    }

    /// Service Unavailable (503) carrying the delay hint verbatim as a
    /// `Retry-After` header.
    fn service_unavailable_after(
        &self,
        length_of_delay: impl Into<String>,
    ) -> ServiceUnavailableResult {
        ServiceUnavailableResult::after(length_of_delay)
    }

    /// Gateway Timeout (504) with no body.
    fn gateway_timeout(&self) -> GatewayTimeoutResult {
        GatewayTimeoutResult::new()
    }

    /// HTTP Version Not Supported (505) with the given value rendered into
    /// the body.
    fn http_version_not_supported<V: serde::Serialize>(
        &self,
        value: V,
    ) -> HttpVersionNotSupportedResult<V> {
        HttpVersionNotSupportedResult::new(value)
    }
}

impl<T: ?Sized> ServerErrorResponses for T {}
