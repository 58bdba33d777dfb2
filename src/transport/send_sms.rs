use crate::auth::HttpMethod;
use crate::domain::{
    AccountLifecycleEvent, CallbackUrl, ExternalId, MessageText, MessageType, RawPhoneNumber,
    SendSms, SendSmsResponse, SenderId,
};
use serde::Deserialize;

use super::ApiRequest;
use super::envelope::{JsonAdditionalInfo, JsonError, JsonStatus, TransportError, map_errors};
use super::form::FormBody;

/// Messaging resource (`POST /v1/messaging`, status under the same path).
pub(crate) const MESSAGING_PATH: &str = "/v1/messaging";

impl ApiRequest for SendSms {
    fn method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn uri(&self) -> String {
        MESSAGING_PATH.to_owned()
    }

    fn resource_path(&self) -> String {
        MESSAGING_PATH.to_owned()
    }

    fn body(&self) -> String {
        encode_send_sms_form(self)
    }
}

pub fn encode_send_sms_form(request: &SendSms) -> String {
    let mut body = FormBody::new();
    body.field(RawPhoneNumber::FIELD, request.phone_number().raw());
    body.message_field(MessageText::FIELD, request.message().as_str());
    body.field(MessageType::FIELD, request.message_type().as_str());

    let options = request.options();
    if let Some(event) = options.account_lifecycle_event {
        body.field(AccountLifecycleEvent::FIELD, event.as_str());
    }
    if let Some(sender_id) = options.sender_id.as_ref() {
        body.field(SenderId::FIELD, sender_id.as_str());
    }
    if let Some(external_id) = options.external_id.as_ref() {
        body.field(ExternalId::FIELD, external_id.as_str());
    }
    if let Some(ip) = options.originating_ip {
        body.field("originating_ip", &ip.to_string());
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
struct SendSmsJsonResponse {
    #[serde(default)]
    reference_id: Option<String>,
    #[serde(default)]
    resource_uri: Option<String>,
    #[serde(default)]
    status: JsonStatus,
    #[serde(default)]
    additional_info: Option<JsonAdditionalInfo>,
    #[serde(default)]
    errors: Vec<JsonError>,
}

pub fn decode_send_sms_response(
    http_status: u16,
    body: &[u8],
) -> Result<SendSmsResponse, TransportError> {
    let parsed: SendSmsJsonResponse = serde_json::from_slice(body)?;
    Ok(SendSmsResponse {
        http_status,
        reference_id: parsed.reference_id,
        resource_uri: parsed.resource_uri,
        status: parsed.status.into(),
        additional_info: parsed.additional_info.map(Into::into),
        errors: map_errors(parsed.errors),
    })
}
