use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use phonenumber::country;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// TeleSign customer id, the account identifier carried in the
/// `Authorization: TSA <customer_id>:<signature>` header.
///
/// Invariant: non-empty after trimming.
pub struct CustomerId(String);

impl CustomerId {
    /// Field name used in validation errors (`customer_id`).
    pub const FIELD: &'static str = "customer_id";

    /// Create a validated [`CustomerId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated customer id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// TeleSign API key: the base64-encoded shared secret used for request signing.
///
/// Invariant: non-empty and decodable as standard base64, checked up front so
/// signing cannot fail later. The decoded secret is never stored; it is
/// rederived for each signature and dropped.
pub struct ApiKey(String);

impl ApiKey {
    /// Field name used in validation errors (`api_key`).
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if BASE64_STANDARD.decode(trimmed).is_err() {
            return Err(ValidationError::NotBase64 { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the base64 form of the key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    // Keeps the shared secret out of debug output and logs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated phone number as sent to TeleSign (`phone_number`).
///
/// TeleSign expects digits starting with the country code, without `+`,
/// spaces, or punctuation. This type does not normalize; if you want that
/// guarantee, parse into [`PhoneNumber`] and convert it into [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Form field name used by TeleSign (`phone_number`).
    pub const FIELD: &'static str = "phone_number";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to TeleSign.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// Convert an already-parsed phone number to TeleSign wire form
    /// (country code + national number, digits only).
    fn from(value: PhoneNumber) -> Self {
        Self(value.digits)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with a TeleSign wire representation.
///
/// The wire form is E.164 without the leading `+`: country code followed by
/// the national number, digits only. Equality, ordering, and hashing are
/// based on that form.
pub struct PhoneNumber {
    raw: String,
    digits: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Form field name used by TeleSign (`phone_number`).
    pub const FIELD: &'static str = "phone_number";

    /// Parse and normalize a phone number.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();
        let digits = e164.trim_start_matches('+').to_owned();

        Ok(Self {
            raw,
            digits,
            parsed,
        })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// TeleSign wire form: country code + national number, digits only.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.digits == other.digits
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.digits.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.digits.cmp(&other.digits)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Free-text message body (`message`).
///
/// Invariant: non-empty after trimming. The original value (including
/// whitespace) is preserved; TeleSign limits messages to 1600 characters and
/// splits long ones into parts, which is not enforced here.
pub struct MessageText(String);

impl MessageText {
    /// Form field name used by TeleSign (`message`).
    pub const FIELD: &'static str = "message";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Traffic class of an outbound message (`message_type`).
pub enum MessageType {
    /// One-time passwords.
    Otp,
    /// Alerts, reminders, and notifications.
    Arn,
    /// Marketing traffic.
    Mkt,
}

impl MessageType {
    /// Form field name used by TeleSign (`message_type`).
    pub const FIELD: &'static str = "message_type";

    /// Wire value as expected by TeleSign.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Otp => "OTP",
            Self::Arn => "ARN",
            Self::Mkt => "MKT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Account lifecycle stage a transaction belongs to (`account_lifecycle_event`).
pub enum AccountLifecycleEvent {
    Create,
    SignIn,
    Transact,
    Update,
    Delete,
}

impl AccountLifecycleEvent {
    /// Form field name used by TeleSign (`account_lifecycle_event`).
    pub const FIELD: &'static str = "account_lifecycle_event";

    /// Wire value as expected by TeleSign.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::SignIn => "sign-in",
            Self::Transact => "transact",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender id shown to the end user (`sender_id`).
///
/// Invariant: non-empty after trimming. The value must be allow-listed in
/// your TeleSign account; the service may override it.
pub struct SenderId(String);

impl SenderId {
    /// Form field name used by TeleSign (`sender_id`).
    pub const FIELD: &'static str = "sender_id";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Customer-generated transaction id (`external_id`), echoed back in responses.
///
/// Invariant: non-empty after trimming.
pub struct ExternalId(String);

impl ExternalId {
    /// Form field name used by TeleSign (`external_id`).
    pub const FIELD: &'static str = "external_id";

    /// Create a validated [`ExternalId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated external id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Use-case code for a verification request (`ucid`).
///
/// Invariant: non-empty after trimming.
pub struct Ucid(String);

impl Ucid {
    /// Form field name used by TeleSign (`ucid`).
    pub const FIELD: &'static str = "ucid";

    /// Create a validated [`Ucid`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated ucid.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Language code selecting a predefined message template (`language`).
///
/// Invariant: non-empty after trimming. Ignored by TeleSign when a
/// [`Template`] override is supplied.
pub struct Language(String);

impl Language {
    /// Form field name used by TeleSign (`language`).
    pub const FIELD: &'static str = "language";

    /// Create a validated [`Language`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated language code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Template text overriding the predefined verification message (`template`).
///
/// Invariant: non-empty after trimming. Include the `$$CODE$$` variable to
/// have the verification code inserted.
pub struct Template(String);

impl Template {
    /// Form field name used by TeleSign (`template`).
    pub const FIELD: &'static str = "template";

    /// Create a validated [`Template`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the template text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Verification code override (`verify_code`).
///
/// Invariant: `0..=9_999_999`. When omitted, TeleSign generates a random
/// seven-digit code.
pub struct VerifyCode(u32);

impl VerifyCode {
    /// Form field name used by TeleSign (`verify_code`).
    pub const FIELD: &'static str = "verify_code";

    /// Maximum allowed code value.
    pub const MAX: u32 = 9_999_999;

    /// Create a validated [`VerifyCode`].
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value > Self::MAX {
            return Err(ValidationError::VerifyCodeOutOfRange {
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Get the underlying code value.
    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Delivery-report callback URL override (`callback_url`).
///
/// Invariant: parses as an absolute URL. The override lasts for one request.
pub struct CallbackUrl(String);

impl CallbackUrl {
    /// Form field name used by TeleSign (`callback_url`).
    pub const FIELD: &'static str = "callback_url";

    /// Create a validated [`CallbackUrl`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if url::Url::parse(trimmed).is_err() {
            return Err(ValidationError::InvalidCallbackUrl {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated callback url.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Transaction reference id (`reference_id`) returned by TeleSign and used to
/// address status resources.
///
/// Invariant: non-empty after trimming.
pub struct ReferenceId(String);

impl ReferenceId {
    /// Field name used by TeleSign (`reference_id`).
    pub const FIELD: &'static str = "reference_id";

    /// Create a validated [`ReferenceId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated reference id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
