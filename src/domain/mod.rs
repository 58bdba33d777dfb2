//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    MessageStatus, SendSms, SendSmsOptions, SendSmsVerify, SendSmsVerifyOptions, SmsVerifyStatus,
};
pub use response::{
    AdditionalInfo, ApiError, MessageStatusResponse, SendSmsResponse, SmsVerifyResponse,
    TransactionStatus, VerifyInfo,
};
pub use validation::ValidationError;
pub use value::{
    AccountLifecycleEvent, ApiKey, CallbackUrl, CustomerId, ExternalId, Language, MessageText,
    MessageType, PhoneNumber, RawPhoneNumber, ReferenceId, SenderId, Template, Ucid, VerifyCode,
};
