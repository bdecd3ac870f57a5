//! Request-id generation as a [ulid](https://github.com/ulid/spec).

use http::Request;
use tower_http::request_id::{MakeRequestId, RequestId};
use ulid::Ulid;

/// Generates one [Ulid] per incoming request, to be attached as the
/// `request_id` header.
#[derive(Clone, Copy, Debug, Default)]
pub struct MakeRequestUlid;

impl MakeRequestId for MakeRequestUlid {
    fn make_request_id<B>(&mut self, _: &Request<B>) -> Option<RequestId> {
        let ulid = Ulid::new().to_string();
        let header_value = ulid.parse().ok()?;
        Some(RequestId::new(header_value))
    }
}
