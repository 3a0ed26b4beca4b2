// obelus/src/response/macros.rs
// Shorthand macros covering the overload sets of the helper methods.

// Internal server error macro
#[macro_export]
macro_rules! internal_server_error {
    () => {
        $crate::response::InternalServerErrorResult::new()
    };

    ($err:expr) => {
        $crate::response::ExceptionResult::new($err)
    };

    ($err:expr, $detail:expr) => {
        $crate::response::ExceptionResult::with_detail($err, $detail)
    };
}

// Service unavailable macro
#[macro_export]
macro_rules! service_unavailable {
    () => {
        $crate::response::ServiceUnavailableResult::new()
    };

    ($delay:expr) => {
        $crate::response::ServiceUnavailableResult::after($delay)
    };
}

/* example usage:

internal_server_error!()
internal_server_error!(err)
internal_server_error!(err, true)

service_unavailable!()
service_unavailable!("120")

*/
