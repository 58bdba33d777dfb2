//! Transport layer: wire-format details — the request capability, form-body
//! encoding, and JSON response decoding.

mod envelope;
mod form;
mod message_status;
mod send_sms;
mod send_sms_verify;
mod sms_verify_status;

pub use message_status::decode_message_status_response;
pub use send_sms::decode_send_sms_response;
pub use send_sms_verify::decode_sms_verify_response;
pub use sms_verify_status::decode_sms_verify_status_response;

use crate::auth::HttpMethod;

/// The request capability: the minimal set of queries an endpoint descriptor
/// must answer to flow through the signing/execution pipeline.
///
/// All four are deterministic, side-effect-free functions of the request's
/// own field values. New endpoints are added by implementing this trait on a
/// new request type; the pipeline itself never changes.
pub trait ApiRequest {
    /// HTTP method of the call.
    fn method(&self) -> HttpMethod;

    /// Domain-relative URI actually requested, including any query component.
    fn uri(&self) -> String;

    /// The path signed inside the canonical string: [`ApiRequest::uri`]
    /// stripped of domain and query. A mismatch with the requested path
    /// silently fails server-side verification.
    fn resource_path(&self) -> String;

    /// URL-encoded form body; empty for bodyless methods.
    fn body(&self) -> String;
}
