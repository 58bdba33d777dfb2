use crate::auth::HttpMethod;
use crate::domain::{MessageStatus, MessageStatusResponse};
use serde::Deserialize;

use super::ApiRequest;
use super::envelope::{JsonAdditionalInfo, JsonError, JsonStatus, TransportError, map_errors};
use super::send_sms::MESSAGING_PATH;

impl ApiRequest for MessageStatus {
    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn uri(&self) -> String {
        format!("{MESSAGING_PATH}/{}", self.reference_id().as_str())
    }

    fn resource_path(&self) -> String {
        self.uri()
    }

    fn body(&self) -> String {
        String::new()
    }
}

#[derive(Debug, Clone, Deserialize)]
struct MessageStatusJsonResponse {
    #[serde(default)]
    reference_id: Option<String>,
    #[serde(default)]
    resource_uri: Option<String>,
    #[serde(default)]
    sub_resource: Option<String>,
    #[serde(default)]
    status: JsonStatus,
    #[serde(default)]
    additional_info: Option<JsonAdditionalInfo>,
    #[serde(default)]
    errors: Vec<JsonError>,
}

pub fn decode_message_status_response(
    http_status: u16,
    body: &[u8],
) -> Result<MessageStatusResponse, TransportError> {
    let parsed: MessageStatusJsonResponse = serde_json::from_slice(body)?;
    Ok(MessageStatusResponse {
        http_status,
        reference_id: parsed.reference_id,
        resource_uri: parsed.resource_uri,
        sub_resource: parsed.sub_resource,
        status: parsed.status.into(),
        additional_info: parsed.additional_info.map(Into::into),
        errors: map_errors(parsed.errors),
    })
}
