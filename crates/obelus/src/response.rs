// obelus/src/response.rs — module root for the server error result types

pub mod base;
pub mod exception;
pub mod macros;
pub mod server_error;
pub mod service_unavailable;
pub mod version;

pub use base::{finalize_response, BaseResponse};
pub use exception::ExceptionResult;
pub use server_error::{
    BadGatewayResult, GatewayTimeoutResult, InternalServerErrorResult, NotImplementedResult,
};
pub use service_unavailable::ServiceUnavailableResult;
pub use version::HttpVersionNotSupportedResult;
