use crate::auth::HttpMethod;
use crate::domain::{
    CallbackUrl, Language, RawPhoneNumber, SenderId, SendSmsVerify, SmsVerifyResponse, Template,
    Ucid, VerifyCode,
};
use serde::Deserialize;

use super::ApiRequest;
use super::envelope::{JsonError, JsonStatus, JsonVerify, TransportError, map_errors};
use super::form::FormBody;

/// Verification-code resource (`POST /v1/verify/sms`).
pub(crate) const VERIFY_SMS_PATH: &str = "/v1/verify/sms";

impl ApiRequest for SendSmsVerify {
    fn method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn uri(&self) -> String {
        VERIFY_SMS_PATH.to_owned()
    }

    fn resource_path(&self) -> String {
        VERIFY_SMS_PATH.to_owned()
    }

    fn body(&self) -> String {
        encode_send_sms_verify_form(self)
    }
}

pub fn encode_send_sms_verify_form(request: &SendSmsVerify) -> String {
    let mut body = FormBody::new();
    body.field(RawPhoneNumber::FIELD, request.phone_number().raw());

    let options = request.options();
    if let Some(ucid) = options.ucid.as_ref() {
        body.field(Ucid::FIELD, ucid.as_str());
    }
    if let Some(ip) = options.originating_ip {
        body.field("originating_ip", &ip.to_string());
    }
    if let Some(language) = options.language.as_ref() {
        body.field(Language::FIELD, language.as_str());
    }
    if let Some(verify_code) = options.verify_code {
        body.field(VerifyCode::FIELD, &verify_code.value().to_string());
    }
    if let Some(template) = options.template.as_ref() {
        // Template text is free text like a message body; spaces must reach
        // the wire as %20.
        body.message_field(Template::FIELD, template.as_str());
    }
    if let Some(sender_id) = options.sender_id.as_ref() {
        body.field(SenderId::FIELD, sender_id.as_str());
    }
    if let Some(callback_url) = options.callback_url.as_ref() {
        body.field(CallbackUrl::FIELD, callback_url.as_str());
    }
    if let Some(is_primary) = options.is_primary {
        body.field("is_primary", if is_primary { "true" } else { "false" });
    }

    body.finish()
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SmsVerifyJsonResponse {
    #[serde(default)]
    reference_id: Option<String>,
    #[serde(default)]
    resource_uri: Option<String>,
    #[serde(default)]
    sub_resource: Option<String>,
    #[serde(default)]
    status: JsonStatus,
    #[serde(default)]
    verify: JsonVerify,
    #[serde(default)]
    external_id: Option<String>,
    #[serde(default)]
    signature_string: Option<String>,
    #[serde(default)]
    errors: Vec<JsonError>,
}

impl SmsVerifyJsonResponse {
    pub(crate) fn into_domain(self, http_status: u16) -> SmsVerifyResponse {
        SmsVerifyResponse {
            http_status,
            reference_id: self.reference_id,
            resource_uri: self.resource_uri,
            sub_resource: self.sub_resource,
            status: self.status.into(),
            verify: self.verify.into(),
            external_id: self.external_id,
            signature_string: self.signature_string,
            errors: map_errors(self.errors),
        }
    }
}

pub fn decode_sms_verify_response(
    http_status: u16,
    body: &[u8],
) -> Result<SmsVerifyResponse, TransportError> {
    let parsed: SmsVerifyJsonResponse = serde_json::from_slice(body)?;
    Ok(parsed.into_domain(http_status))
}
