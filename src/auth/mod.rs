//! Request signing: canonical-string construction and HMAC-SHA256 signatures.
//!
//! Everything here is pure and side-effect-free. The executor feeds in a
//! freshly generated date and nonce per call; identical inputs always yield
//! the identical signature, which is what the server verifies against.

use std::fmt;

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

/// Value of the `X-TS-Auth-Method` header and of the auth-method line inside
/// the canonical string.
pub const AUTH_METHOD: &str = "HMAC-SHA256";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// HTTP method of an API request.
///
/// The method decides the canonical-string shape: GET and DELETE sign
/// without a body line, everything else signs the body too.
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Wire form of the method, as it appears in the canonical string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Whether requests with this method carry a form body.
    pub fn has_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
/// Failure computing a signature.
pub enum SignatureError {
    /// The API key did not decode as standard base64. Unreachable through a
    /// validated [`crate::domain::ApiKey`].
    #[error("api key is not valid base64")]
    Key(#[source] base64::DecodeError),
}

/// Render a timestamp the way the server expects it in the `Date` header and
/// the canonical string: RFC 1123 with a numeric zone,
/// e.g. `Mon, 02 Jan 2006 15:04:05 +0000`.
pub fn format_date(t: DateTime<Utc>) -> String {
    t.format("%a, %d %b %Y %H:%M:%S %z").to_string()
}

/// Build the exact newline-joined text the HMAC is computed over.
///
/// Lines are joined with a single `\n` and there is no trailing newline. The
/// resource is the domain-relative path, never the absolute URI.
pub fn canonical_string(
    method: HttpMethod,
    resource: &str,
    content_type: &str,
    date: &str,
    nonce: &str,
    body: &str,
) -> String {
    match method {
        HttpMethod::Get | HttpMethod::Delete => format!(
            "{}\n{}\n{}\nx-ts-auth-method:{AUTH_METHOD}\nx-ts-nonce:{}\n{}",
            method.as_str(),
            content_type,
            date,
            nonce,
            resource,
        ),
        HttpMethod::Post | HttpMethod::Put => format!(
            "{}\n{}\n{}\nx-ts-auth-method:{AUTH_METHOD}\nx-ts-nonce:{}\n{}\n{}",
            method.as_str(),
            content_type,
            date,
            nonce,
            body,
            resource,
        ),
    }
}

/// Compute the request signature: base64-decode the API key, HMAC-SHA256 the
/// UTF-8 bytes of the canonical string with it, and base64-encode the MAC.
///
/// The decoded key lives only for the duration of this call.
pub fn sign(
    api_key: &str,
    method: HttpMethod,
    resource: &str,
    content_type: &str,
    date: &str,
    nonce: &str,
    body: &str,
) -> Result<String, SignatureError> {
    let key = BASE64_STANDARD.decode(api_key).map_err(SignatureError::Key)?;
    let canonical = canonical_string(method, resource, content_type, date, nonce, body);
    Ok(base64_hmac_sha256(&key, canonical.as_bytes()))
}

/// Base64 encoded HMAC with SHA256 hash.
fn base64_hmac_sha256(key: &[u8], content: &[u8]) -> String {
    // Hmac::new_from_slice accepts keys of any length, so this cannot fail.
    let mut mac = Hmac::<Sha256>::new_from_slice(key).unwrap();
    mac.update(content);
    BASE64_STANDARD.encode(mac.finalize().into_bytes())
}
