//! Client layer: configuration, the signing executor, and typed endpoint calls.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use crate::auth::{self, AUTH_METHOD, HttpMethod, SignatureError};
use crate::domain::{
    ApiKey, CustomerId, MessageStatus, MessageStatusResponse, SendSms, SendSmsResponse,
    SendSmsVerify, SmsVerifyResponse, SmsVerifyStatus, ValidationError,
};
use crate::transport::{self, ApiRequest};

const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Content type sent (and signed) with every body-bearing request.
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// TeleSign API environment; selects the base domain all requests go to.
pub enum Environment {
    /// `https://rest-api.telesign.com`
    Standard,
    /// `https://rest-ww.telesign.com`
    #[default]
    Enterprise,
}

impl Environment {
    /// Base URL for this environment.
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Standard => "https://rest-api.telesign.com",
            Self::Enterprise => "https://rest-ww.telesign.com",
        }
    }
}

#[derive(Debug, Clone)]
/// One fully assembled outbound request, as handed to the transport.
struct HttpRequestParts {
    method: HttpMethod,
    url: String,
    headers: Vec<(&'static str, String)>,
    body: String,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: Vec<u8>,
}

#[derive(Debug)]
enum TransportFailure {
    /// The exchange itself failed (connect, TLS, timeout).
    Send(Box<dyn StdError + Send + Sync>),
    /// The exchange succeeded but draining the body did not.
    Read(Box<dyn StdError + Send + Sync>),
}

trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: HttpRequestParts,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequestParts,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>> {
        Box::pin(async move {
            let HttpRequestParts {
                method,
                url,
                headers,
                body,
            } = request;

            let method = match method {
                HttpMethod::Get => reqwest::Method::GET,
                HttpMethod::Post => reqwest::Method::POST,
                HttpMethod::Put => reqwest::Method::PUT,
                HttpMethod::Delete => reqwest::Method::DELETE,
            };

            let mut builder = self.client.request(method, &url);
            for (name, value) in headers {
                builder = builder.header(name, value);
            }
            if !body.is_empty() {
                builder = builder.body(body);
            }

            let response = builder
                .send()
                .await
                .map_err(|err| TransportFailure::Send(Box::new(err)))?;
            let status = response.status().as_u16();
            let body = response
                .bytes()
                .await
                .map_err(|err| TransportFailure::Read(Box::new(err)))?;

            Ok(HttpResponse {
                status,
                body: body.to_vec(),
            })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TeleSignClient`].
///
/// Non-2xx HTTP statuses and API-level `errors` entries are deliberately not
/// errors here: the executor is a signed-transport layer and treats them as
/// data for the caller to interpret.
pub enum TeleSignError {
    /// Invalid credentials or request values; raised before any network activity.
    #[error("configuration error: {0}")]
    Configuration(#[from] ValidationError),

    /// Signature computation failed.
    #[error("signature error: {0}")]
    Signature(#[from] SignatureError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The exchange completed but the response body could not be drained.
    #[error("response read error: {0}")]
    ResponseRead(#[source] Box<dyn StdError + Send + Sync>),

    /// A typed call could not parse the response body.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raw outcome of one signed exchange, passed through byte-for-byte.
pub struct RawResponse {
    /// HTTP status code. Non-2xx is data here, not a failure.
    pub http_status: u16,
    /// Unmodified response body bytes; decoding is the caller's concern.
    pub body: Vec<u8>,
}

#[derive(Debug, Clone)]
/// Builder for [`TeleSignClient`].
///
/// Use this when you need to pick the environment, timeout, or user-agent.
pub struct TeleSignClientBuilder {
    customer_id: String,
    api_key: String,
    environment: Environment,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl TeleSignClientBuilder {
    /// Create a builder with the default environment (Enterprise) and timeout.
    pub fn new(customer_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            api_key: api_key.into(),
            environment: Environment::default(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Select the API environment.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Set the HTTP timeout applied to each entire exchange.
    ///
    /// A zero duration is ignored in favor of the 10-second default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Validate the credentials and build a [`TeleSignClient`].
    pub fn build(self) -> Result<TeleSignClient, TeleSignError> {
        let customer_id = CustomerId::new(self.customer_id)?;
        let api_key = ApiKey::new(self.api_key)?;
        let user_agent = self.user_agent.unwrap_or_else(default_user_agent);

        let client = reqwest::Client::builder()
            .timeout(effective_timeout(self.timeout))
            .build()
            .map_err(|err| TeleSignError::Transport(Box::new(err)))?;

        Ok(TeleSignClient {
            customer_id,
            api_key,
            environment: self.environment,
            user_agent,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn effective_timeout(requested: Option<Duration>) -> Duration {
    match requested {
        Some(timeout) if !timeout.is_zero() => timeout,
        _ => DEFAULT_HTTP_TIMEOUT,
    }
}

fn default_user_agent() -> String {
    format!("TeleSignSDK/rust-{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Clone)]
/// TeleSign REST API client.
///
/// Immutable after construction and cheap to clone; concurrent calls need no
/// coordination since every call generates its own nonce and timestamp.
///
/// The typed methods ([`TeleSignClient::send_sms`] and friends) decode the
/// JSON envelope for you; [`TeleSignClient::execute`] gives you the raw bytes
/// of any [`ApiRequest`].
pub struct TeleSignClient {
    customer_id: CustomerId,
    api_key: ApiKey,
    environment: Environment,
    user_agent: String,
    http: Arc<dyn HttpTransport>,
}

impl TeleSignClient {
    /// Create a client for the default (Enterprise) environment.
    ///
    /// For more customization, use [`TeleSignClient::builder`].
    pub fn new(
        customer_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, TeleSignError> {
        Self::builder(customer_id, api_key).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(
        customer_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> TeleSignClientBuilder {
        TeleSignClientBuilder::new(customer_id, api_key)
    }

    /// The environment this client calls.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Execute one signed exchange and return the response untouched.
    ///
    /// A fresh nonce and timestamp are generated for this call only, the
    /// canonical string is signed with the account key, and the auth headers
    /// are attached before sending. Transport failures surface unchanged and
    /// are never retried; the HTTP status is returned as data, whatever it
    /// is. Dropping the returned future cancels the call.
    pub async fn execute<R: ApiRequest>(&self, request: &R) -> Result<RawResponse, TeleSignError> {
        let method = request.method();
        let uri = request.uri();
        let url = format!("{}{}", self.environment.base_url(), uri);
        let body = request.body();

        // Fresh per call, never reused: both are replay-prevention inputs to
        // the signature.
        let nonce = Uuid::new_v4().to_string();
        let date = auth::format_date(Utc::now());

        let content_type = if method.has_body() {
            FORM_CONTENT_TYPE
        } else {
            ""
        };
        let signature = auth::sign(
            self.api_key.as_str(),
            method,
            &request.resource_path(),
            content_type,
            &date,
            &nonce,
            &body,
        )?;

        let mut headers: Vec<(&'static str, String)> = vec![
            ("User-Agent", self.user_agent.clone()),
            ("X-TS-Auth-Method", AUTH_METHOD.to_owned()),
            (
                "Authorization",
                format!("TSA {}:{}", self.customer_id.as_str(), signature),
            ),
            ("X-TS-Nonce", nonce),
            ("Date", date),
        ];
        if method.has_body() {
            headers.push(("Content-Type", FORM_CONTENT_TYPE.to_owned()));
        }

        log::debug!("executing {method} {uri}");
        let response = self
            .http
            .send(HttpRequestParts {
                method,
                url,
                headers,
                body,
            })
            .await
            .map_err(|failure| match failure {
                TransportFailure::Send(err) => TeleSignError::Transport(err),
                TransportFailure::Read(err) => TeleSignError::ResponseRead(err),
            })?;
        log::debug!("{method} {uri} returned HTTP {}", response.status);

        Ok(RawResponse {
            http_status: response.status,
            body: response.body,
        })
    }

    /// Send an SMS message and decode the response envelope.
    pub async fn send_sms(&self, request: SendSms) -> Result<SendSmsResponse, TeleSignError> {
        let response = self.execute(&request).await?;
        transport::decode_send_sms_response(response.http_status, &response.body)
            .map_err(|err| TeleSignError::Parse(Box::new(err)))
    }

    /// Send an SMS verification code and decode the response envelope.
    pub async fn send_sms_verify(
        &self,
        request: SendSmsVerify,
    ) -> Result<SmsVerifyResponse, TeleSignError> {
        let response = self.execute(&request).await?;
        transport::decode_sms_verify_response(response.http_status, &response.body)
            .map_err(|err| TeleSignError::Parse(Box::new(err)))
    }

    /// Fetch delivery status for a previously sent message.
    pub async fn message_status(
        &self,
        request: MessageStatus,
    ) -> Result<MessageStatusResponse, TeleSignError> {
        let response = self.execute(&request).await?;
        transport::decode_message_status_response(response.http_status, &response.body)
            .map_err(|err| TeleSignError::Parse(Box::new(err)))
    }

    /// Fetch status of a verification transaction, optionally checking a code
    /// the end user entered.
    pub async fn sms_verify_status(
        &self,
        request: SmsVerifyStatus,
    ) -> Result<SmsVerifyResponse, TeleSignError> {
        let response = self.execute(&request).await?;
        transport::decode_sms_verify_status_response(response.http_status, &response.body)
            .map_err(|err| TeleSignError::Parse(Box::new(err)))
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;
    use std::sync::Mutex;

    use crate::domain::{
        MessageText, MessageType, RawPhoneNumber, ReferenceId, SendSmsOptions,
        SendSmsVerifyOptions,
    };

    use super::*;

    const CUSTOMER_ID: &str = "cust123";
    // base64 of "testkey"
    const API_KEY: &str = "dGVzdGtleQ==";

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        requests: Vec<HttpRequestParts>,
        response_status: u16,
        response_body: Vec<u8>,
        failure: Option<&'static str>,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<Vec<u8>>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    requests: Vec::new(),
                    response_status,
                    response_body: response_body.into(),
                    failure: None,
                })),
            }
        }

        fn failing(message: &'static str) -> Self {
            let transport = Self::new(200, Vec::new());
            transport.state.lock().unwrap().failure = Some(message);
            transport
        }

        fn requests(&self) -> Vec<HttpRequestParts> {
            self.state.lock().unwrap().requests.clone()
        }

        fn last_request(&self) -> HttpRequestParts {
            self.requests().pop().expect("no request captured")
        }
    }

    #[derive(Debug)]
    struct FakeFailure(&'static str);

    impl fmt::Display for FakeFailure {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.0)
        }
    }

    impl StdError for FakeFailure {}

    impl HttpTransport for FakeTransport {
        fn send<'a>(
            &'a self,
            request: HttpRequestParts,
        ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>> {
            Box::pin(async move {
                let (status, body, failure) = {
                    let mut state = self.state.lock().unwrap();
                    state.requests.push(request);
                    (
                        state.response_status,
                        state.response_body.clone(),
                        state.failure,
                    )
                };
                if let Some(message) = failure {
                    return Err(TransportFailure::Send(Box::new(FakeFailure(message))));
                }
                Ok(HttpResponse { status, body })
            })
        }
    }

    fn make_client(environment: Environment, transport: FakeTransport) -> TeleSignClient {
        TeleSignClient {
            customer_id: CustomerId::new(CUSTOMER_ID).unwrap(),
            api_key: ApiKey::new(API_KEY).unwrap(),
            environment,
            user_agent: default_user_agent(),
            http: Arc::new(transport),
        }
    }

    fn header<'a>(request: &'a HttpRequestParts, name: &str) -> Option<&'a str> {
        request
            .headers
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    fn send_sms_request() -> SendSms {
        SendSms::new(
            RawPhoneNumber::new("15551234567").unwrap(),
            MessageText::new("Hi there").unwrap(),
            MessageType::Otp,
            SendSmsOptions::default(),
        )
    }

    #[tokio::test]
    async fn execute_resolves_the_enterprise_domain_by_default() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(Environment::default(), transport.clone());

        client.execute(&send_sms_request()).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.url, "https://rest-ww.telesign.com/v1/messaging");
    }

    #[tokio::test]
    async fn execute_resolves_the_standard_domain() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(Environment::Standard, transport.clone());

        client.execute(&send_sms_request()).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.url, "https://rest-api.telesign.com/v1/messaging");
    }

    #[tokio::test]
    async fn execute_attaches_the_signed_header_set() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(Environment::default(), transport.clone());

        client.execute(&send_sms_request()).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(
            request.body,
            "phone_number=15551234567&message=Hi%20there&message_type=OTP"
        );
        assert_eq!(header(&request, "X-TS-Auth-Method"), Some("HMAC-SHA256"));
        assert_eq!(header(&request, "Content-Type"), Some(FORM_CONTENT_TYPE));
        assert!(
            header(&request, "User-Agent")
                .unwrap()
                .starts_with("TeleSignSDK/rust-")
        );

        // The Authorization header must recompute from the captured date and
        // nonce: that is exactly what the server will do.
        let date = header(&request, "Date").unwrap();
        let nonce = header(&request, "X-TS-Nonce").unwrap();
        let expected = auth::sign(
            API_KEY,
            HttpMethod::Post,
            "/v1/messaging",
            FORM_CONTENT_TYPE,
            date,
            nonce,
            &request.body,
        )
        .unwrap();
        assert_eq!(
            header(&request, "Authorization").unwrap(),
            format!("TSA {CUSTOMER_ID}:{expected}")
        );
    }

    #[tokio::test]
    async fn execute_omits_content_type_and_body_for_get() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(Environment::default(), transport.clone());

        let status = MessageStatus::new(ReferenceId::new("ABCDE").unwrap());
        client.execute(&status).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "https://rest-ww.telesign.com/v1/messaging/ABCDE");
        assert_eq!(request.body, "");
        assert_eq!(header(&request, "Content-Type"), None);

        let date = header(&request, "Date").unwrap();
        let nonce = header(&request, "X-TS-Nonce").unwrap();
        let expected =
            auth::sign(API_KEY, HttpMethod::Get, "/v1/messaging/ABCDE", "", date, nonce, "")
                .unwrap();
        assert_eq!(
            header(&request, "Authorization").unwrap(),
            format!("TSA {CUSTOMER_ID}:{expected}")
        );
    }

    #[tokio::test]
    async fn repeated_calls_use_fresh_nonces_and_signatures() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(Environment::default(), transport.clone());

        let request = send_sms_request();
        client.execute(&request).await.unwrap();
        client.execute(&request).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        let first_nonce = header(&requests[0], "X-TS-Nonce").unwrap();
        let second_nonce = header(&requests[1], "X-TS-Nonce").unwrap();
        assert_ne!(first_nonce, second_nonce);
        assert_ne!(
            header(&requests[0], "Authorization").unwrap(),
            header(&requests[1], "Authorization").unwrap()
        );
    }

    #[tokio::test]
    async fn execute_passes_response_bytes_and_status_through() {
        // Non-2xx and non-JSON alike: the executor never inspects either.
        let transport = FakeTransport::new(502, &b"\x00upstream says no\xff"[..]);
        let client = make_client(Environment::default(), transport);

        let response = client.execute(&send_sms_request()).await.unwrap();
        assert_eq!(response.http_status, 502);
        assert_eq!(response.body, b"\x00upstream says no\xff");
    }

    #[tokio::test]
    async fn execute_surfaces_transport_failures_unchanged() {
        let transport = FakeTransport::failing("connection refused");
        let client = make_client(Environment::default(), transport);

        let err = client.execute(&send_sms_request()).await.unwrap_err();
        match err {
            TeleSignError::Transport(source) => {
                assert_eq!(source.to_string(), "connection refused");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn send_sms_decodes_the_envelope() {
        let json = r#"
        {
          "reference_id": "B56A497589BC48BBA2C1D1B21B2072A2",
          "resource_uri": "/v1/messaging/B56A497589BC48BBA2C1D1B21B2072A2",
          "status": {
            "code": 290,
            "updated_on": "2015-10-03T14:51:28.709526Z",
            "description": "Message in progress"
          }
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(Environment::default(), transport);

        let response = client.send_sms(send_sms_request()).await.unwrap();
        assert_eq!(response.http_status, 200);
        assert_eq!(
            response.reference_id.as_deref(),
            Some("B56A497589BC48BBA2C1D1B21B2072A2")
        );
        assert_eq!(response.status.code, 290);
    }

    #[tokio::test]
    async fn send_sms_verify_hits_the_verify_resource() {
        let transport = FakeTransport::new(200, r#"{"sub_resource": "sms"}"#);
        let client = make_client(Environment::default(), transport.clone());

        let request = SendSmsVerify::new(
            RawPhoneNumber::new("15551234567").unwrap(),
            SendSmsVerifyOptions::default(),
        );
        let response = client.send_sms_verify(request).await.unwrap();
        assert_eq!(response.sub_resource.as_deref(), Some("sms"));

        let request = transport.last_request();
        assert_eq!(request.url, "https://rest-ww.telesign.com/v1/verify/sms");
    }

    #[tokio::test]
    async fn typed_calls_map_invalid_json_to_parse_errors() {
        let transport = FakeTransport::new(200, "{ not json }");
        let client = make_client(Environment::default(), transport);

        let err = client.send_sms(send_sms_request()).await.unwrap_err();
        assert!(matches!(err, TeleSignError::Parse(_)));
    }

    #[test]
    fn builder_rejects_empty_or_invalid_credentials() {
        assert!(matches!(
            TeleSignClient::new("", API_KEY),
            Err(TeleSignError::Configuration(ValidationError::Empty {
                field: CustomerId::FIELD
            }))
        ));
        assert!(matches!(
            TeleSignClient::new(CUSTOMER_ID, "   "),
            Err(TeleSignError::Configuration(ValidationError::Empty {
                field: ApiKey::FIELD
            }))
        ));
        assert!(matches!(
            TeleSignClient::new(CUSTOMER_ID, "not base64!!!"),
            Err(TeleSignError::Configuration(ValidationError::NotBase64 {
                field: ApiKey::FIELD
            }))
        ));
    }

    #[test]
    fn builder_applies_environment_and_user_agent() {
        let client = TeleSignClient::builder(CUSTOMER_ID, API_KEY)
            .environment(Environment::Standard)
            .user_agent("my-app/1.0")
            .build()
            .unwrap();
        assert_eq!(client.environment(), Environment::Standard);
        assert_eq!(client.user_agent, "my-app/1.0");

        let client = TeleSignClient::new(CUSTOMER_ID, API_KEY).unwrap();
        assert_eq!(client.environment(), Environment::Enterprise);
        assert_eq!(client.user_agent, default_user_agent());
    }

    #[test]
    fn zero_timeout_falls_back_to_the_default() {
        assert_eq!(effective_timeout(None), DEFAULT_HTTP_TIMEOUT);
        assert_eq!(
            effective_timeout(Some(Duration::ZERO)),
            DEFAULT_HTTP_TIMEOUT
        );
        assert_eq!(
            effective_timeout(Some(Duration::from_secs(30))),
            Duration::from_secs(30)
        );
    }

    #[test]
    fn environment_base_urls_are_fixed() {
        assert_eq!(
            Environment::Standard.base_url(),
            "https://rest-api.telesign.com"
        );
        assert_eq!(
            Environment::Enterprise.base_url(),
            "https://rest-ww.telesign.com"
        );
    }
}
