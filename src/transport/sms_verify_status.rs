use crate::auth::HttpMethod;
use crate::domain::{SmsVerifyResponse, SmsVerifyStatus, VerifyCode};

use super::ApiRequest;
use super::envelope::TransportError;
use super::send_sms_verify::SmsVerifyJsonResponse;

/// Verify transaction resource (`GET /v1/verify/{reference_id}`).
pub(crate) const VERIFY_PATH: &str = "/v1/verify";

impl ApiRequest for SmsVerifyStatus {
    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    /// Includes the optional `verify_code` query component; the query is sent
    /// but not signed.
    fn uri(&self) -> String {
        let path = self.resource_path();
        match self.verify_code() {
            Some(code) => format!("{path}?{}={}", VerifyCode::FIELD, code.value()),
            None => path,
        }
    }

    fn resource_path(&self) -> String {
        format!("{VERIFY_PATH}/{}", self.reference_id().as_str())
    }

    fn body(&self) -> String {
        String::new()
    }
}

pub fn decode_sms_verify_status_response(
    http_status: u16,
    body: &[u8],
) -> Result<SmsVerifyResponse, TransportError> {
    let parsed: SmsVerifyJsonResponse = serde_json::from_slice(body)?;
    Ok(parsed.into_domain(http_status))
}
