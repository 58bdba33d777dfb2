use std::net::IpAddr;

use crate::domain::value::{
    AccountLifecycleEvent, CallbackUrl, ExternalId, Language, MessageText, MessageType,
    RawPhoneNumber, ReferenceId, SenderId, Template, Ucid, VerifyCode,
};

#[derive(Debug, Clone, Default)]
/// Optional parameters for [`SendSms`].
pub struct SendSmsOptions {
    pub account_lifecycle_event: Option<AccountLifecycleEvent>,
    pub sender_id: Option<SenderId>,
    pub external_id: Option<ExternalId>,
    /// IP address of the end user, never your own.
    pub originating_ip: Option<IpAddr>,
    pub callback_url: Option<CallbackUrl>,
    /// Whether TeleSign is the primary provider for this message (`true`) or
    /// a backup after another provider failed (`false`).
    pub is_primary: Option<bool>,
}

#[derive(Debug, Clone)]
/// Send an SMS message (`POST /v1/messaging`).
pub struct SendSms {
    phone_number: RawPhoneNumber,
    message: MessageText,
    message_type: MessageType,
    options: SendSmsOptions,
}

impl SendSms {
    /// Build a send-SMS request from already-validated values.
    pub fn new(
        phone_number: RawPhoneNumber,
        message: MessageText,
        message_type: MessageType,
        options: SendSmsOptions,
    ) -> Self {
        Self {
            phone_number,
            message,
            message_type,
            options,
        }
    }

    pub fn phone_number(&self) -> &RawPhoneNumber {
        &self.phone_number
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn message_type(&self) -> MessageType {
        self.message_type
    }

    pub fn options(&self) -> &SendSmsOptions {
        &self.options
    }
}

#[derive(Debug, Clone, Default)]
/// Optional parameters for [`SendSmsVerify`].
pub struct SendSmsVerifyOptions {
    pub ucid: Option<Ucid>,
    /// IP address of the end user, never your own.
    pub originating_ip: Option<IpAddr>,
    pub language: Option<Language>,
    /// Override for the generated verification code.
    pub verify_code: Option<VerifyCode>,
    pub template: Option<Template>,
    pub sender_id: Option<SenderId>,
    pub callback_url: Option<CallbackUrl>,
    pub is_primary: Option<bool>,
}

#[derive(Debug, Clone)]
/// Send an SMS verification code (`POST /v1/verify/sms`).
pub struct SendSmsVerify {
    phone_number: RawPhoneNumber,
    options: SendSmsVerifyOptions,
}

impl SendSmsVerify {
    /// Build a verification request from already-validated values.
    pub fn new(phone_number: RawPhoneNumber, options: SendSmsVerifyOptions) -> Self {
        Self {
            phone_number,
            options,
        }
    }

    pub fn phone_number(&self) -> &RawPhoneNumber {
        &self.phone_number
    }

    pub fn options(&self) -> &SendSmsVerifyOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
/// Fetch delivery status for a sent message (`GET /v1/messaging/{reference_id}`).
pub struct MessageStatus {
    reference_id: ReferenceId,
}

impl MessageStatus {
    pub fn new(reference_id: ReferenceId) -> Self {
        Self { reference_id }
    }

    pub fn reference_id(&self) -> &ReferenceId {
        &self.reference_id
    }
}

#[derive(Debug, Clone)]
/// Fetch status of a verification transaction (`GET /v1/verify/{reference_id}`).
///
/// Passing `verify_code` asks TeleSign to also report whether the code the
/// end user entered is valid; it is sent as a query parameter and is not part
/// of the signed resource.
pub struct SmsVerifyStatus {
    reference_id: ReferenceId,
    verify_code: Option<VerifyCode>,
}

impl SmsVerifyStatus {
    pub fn new(reference_id: ReferenceId) -> Self {
        Self {
            reference_id,
            verify_code: None,
        }
    }

    /// Include a code for TeleSign to check against the one it sent.
    pub fn with_verify_code(mut self, verify_code: VerifyCode) -> Self {
        self.verify_code = Some(verify_code);
        self
    }

    pub fn reference_id(&self) -> &ReferenceId {
        &self.reference_id
    }

    pub fn verify_code(&self) -> Option<VerifyCode> {
        self.verify_code
    }
}
