//! Typed Rust client for the TeleSign messaging and verification REST API.
//!
//! The crate is split into a domain layer of strong types, a transport layer
//! for wire-format details, a pure signing module, and a small client layer
//! orchestrating requests. Every call flows through one signed-transport
//! pipeline: any [`ApiRequest`] value is turned into a canonical string,
//! signed with the account's HMAC-SHA256 key, and executed; the raw response
//! bytes come back untouched. Typed helpers decode the common envelope on
//! top of that.
//!
//! ```rust,no_run
//! use telesign::{MessageText, MessageType, RawPhoneNumber, SendSms, SendSmsOptions, TeleSignClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), telesign::TeleSignError> {
//!     let client = TeleSignClient::new("customer-id", "base64-api-key")?;
//!     let request = SendSms::new(
//!         RawPhoneNumber::new("15551234567")?,
//!         MessageText::new("You're signed in")?,
//!         MessageType::Otp,
//!         SendSmsOptions::default(),
//!     );
//!     let response = client.send_sms(request).await?;
//!     println!("reference_id: {:?}", response.reference_id);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod auth;
pub mod client;
pub mod domain;
mod transport;

pub use auth::{AUTH_METHOD, HttpMethod, SignatureError};
pub use client::{Environment, RawResponse, TeleSignClient, TeleSignClientBuilder, TeleSignError};
pub use domain::{
    AccountLifecycleEvent, AdditionalInfo, ApiError, ApiKey, CallbackUrl, CustomerId, ExternalId,
    Language, MessageStatus, MessageStatusResponse, MessageText, MessageType, PhoneNumber,
    RawPhoneNumber, ReferenceId, SendSms, SendSmsOptions, SendSmsResponse, SendSmsVerify,
    SendSmsVerifyOptions, SenderId, SmsVerifyResponse, SmsVerifyStatus, Template, TransactionStatus,
    Ucid, ValidationError, VerifyCode, VerifyInfo,
};
pub use transport::ApiRequest;
