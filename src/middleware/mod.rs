//! Tower middleware.

pub mod request_ulid;
pub mod runtime;
