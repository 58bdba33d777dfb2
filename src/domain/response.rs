#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Transaction status object nested in every TeleSign response envelope.
pub struct TransactionStatus {
    pub code: i32,
    pub updated_on: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// API-level error entry from the `errors` array.
///
/// These are data, not failures: the client surfaces them for the caller to
/// interpret and never acts on them itself.
pub struct ApiError {
    pub code: i32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Extra delivery details on messaging responses.
pub struct AdditionalInfo {
    pub code_entered: Option<String>,
    pub message_parts_count: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Response to [`crate::domain::SendSms`].
pub struct SendSmsResponse {
    /// HTTP status of the exchange, passed through untouched.
    pub http_status: u16,
    pub reference_id: Option<String>,
    pub resource_uri: Option<String>,
    pub status: TransactionStatus,
    pub additional_info: Option<AdditionalInfo>,
    pub errors: Vec<ApiError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Response to [`crate::domain::MessageStatus`].
pub struct MessageStatusResponse {
    /// HTTP status of the exchange, passed through untouched.
    pub http_status: u16,
    pub reference_id: Option<String>,
    pub resource_uri: Option<String>,
    pub sub_resource: Option<String>,
    pub status: TransactionStatus,
    pub additional_info: Option<AdditionalInfo>,
    pub errors: Vec<ApiError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Verification-code state nested in verify responses.
pub struct VerifyInfo {
    pub code_state: Option<String>,
    pub code_entered: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Response to [`crate::domain::SendSmsVerify`] and
/// [`crate::domain::SmsVerifyStatus`] — both address the same verify
/// resource, so TeleSign returns the same shape.
pub struct SmsVerifyResponse {
    /// HTTP status of the exchange, passed through untouched.
    pub http_status: u16,
    pub reference_id: Option<String>,
    pub resource_uri: Option<String>,
    pub sub_resource: Option<String>,
    pub status: TransactionStatus,
    pub verify: VerifyInfo,
    pub external_id: Option<String>,
    pub signature_string: Option<String>,
    pub errors: Vec<ApiError>,
}
