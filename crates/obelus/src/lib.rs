// Obelus - server error action results for Axum
// Small result objects for the 5xx family (500-505), callable from any handler

pub mod controller;
pub mod response;
pub mod testing;
pub mod writer;

// Re-export the core API so developers can just `use obelus::*`
pub use controller::ServerErrorResponses;
pub use response::{
    BadGatewayResult, ExceptionResult, GatewayTimeoutResult, HttpVersionNotSupportedResult,
    InternalServerErrorResult, NotImplementedResult, ServiceUnavailableResult,
};
pub use writer::{HttpResponseStreamWriter, ResponseStreamWriterFactory};

// Re-export Axum primitives callers might need for convenience
pub use axum;
pub use axum::http::StatusCode;
pub use axum::response::Response;
