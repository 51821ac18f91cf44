//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use url::Url;

use crate::domain::{ApiKey, SendPattern, SendRequest, SendResponse, SendVotp, SendWebservice};

/// Production IPPanel API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://edge.ippanel.com/v1/api";

/// Overall deadline applied to each request (connect, send and body read).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Path all sending modes are posted to, relative to the base URL.
pub const SEND_PATH: &str = "/send";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: Url,
        headers: HeaderMap,
        body: Vec<u8>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: Url,
        headers: HeaderMap,
        body: Vec<u8>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .headers(headers)
                .body(body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`IppanelClient`].
///
/// Every failure is returned as-is; nothing is retried.
pub enum IppanelError {
    /// The request payload could not be encoded as JSON.
    #[error("failed to marshal request: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The HTTP request could not be built (malformed URL, invalid header value).
    #[error("failed to create request: {0}")]
    Request(#[source] Box<dyn StdError + Send + Sync>),

    /// HTTP client / transport failure (DNS, TLS, timeouts, body read, etc).
    #[error("request failed: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The server answered with HTTP status >= 400. Displays the raw body unchanged.
    #[error("{body}")]
    Rejected { status: u16, body: String },

    /// The response body is not a valid response envelope.
    #[error("failed to unmarshal response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl IppanelError {
    /// Returns `true` if the request was aborted by the client deadline.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport(err) => err
                .downcast_ref::<reqwest::Error>()
                .is_some_and(reqwest::Error::is_timeout),
            _ => false,
        }
    }

    /// HTTP status of a remote rejection.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`IppanelClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct IppanelClientBuilder {
    api_key: ApiKey,
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl IppanelClientBuilder {
    /// Create a builder with the default endpoint and a 10 second timeout.
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Override the base URL, e.g. for a sandbox. An empty value keeps the default.
    ///
    /// The value is used verbatim: request URLs are `{base_url}/send`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        if !base_url.is_empty() {
            self.base_url = base_url;
        }
        self
    }

    /// Set the HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build an [`IppanelClient`]. No network activity happens here.
    pub fn build(self) -> Result<IppanelClient, IppanelError> {
        let mut builder = reqwest::Client::builder().timeout(self.timeout);
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| IppanelError::Transport(Box::new(err)))?;

        Ok(IppanelClient {
            api_key: self.api_key,
            base_url: self.base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level IPPanel client.
///
/// Every sending mode is a single JSON `POST` to `{base_url}/send`, authenticated by the
/// raw API key in the `Authorization` header. The client holds no per-request state and
/// can be shared between tasks; clones reuse the same connection pool.
///
/// Dropping a returned future aborts the in-flight request.
pub struct IppanelClient {
    api_key: ApiKey,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for IppanelClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IppanelClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl IppanelClient {
    /// Create a client using the default endpoint and timeout.
    ///
    /// For more customization, use [`IppanelClient::builder`].
    pub fn new(api_key: impl Into<ApiKey>) -> Result<Self, IppanelError> {
        Self::builder(api_key).build()
    }

    /// Create a client with an optional base URL override. `None` or an empty string
    /// selects [`DEFAULT_BASE_URL`].
    pub fn with_base_url(
        api_key: impl Into<ApiKey>,
        base_url: Option<&str>,
    ) -> Result<Self, IppanelError> {
        let mut builder = Self::builder(api_key);
        if let Some(base_url) = base_url {
            builder = builder.base_url(base_url);
        }
        builder.build()
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: impl Into<ApiKey>) -> IppanelClientBuilder {
        IppanelClientBuilder::new(api_key)
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a free-text message to a list of recipients.
    ///
    /// Errors:
    /// - [`IppanelError::Rejected`] for HTTP status >= 400, carrying the raw body,
    /// - [`IppanelError::Transport`] for network failures and timeouts,
    /// - [`IppanelError::Decode`] when a successful body is not a response envelope.
    pub async fn send_webservice(
        &self,
        request: SendWebservice,
    ) -> Result<SendResponse, IppanelError> {
        self.send(request.into()).await
    }

    /// Send a server-side template (pattern) to one recipient.
    pub async fn send_pattern(&self, request: SendPattern) -> Result<SendResponse, IppanelError> {
        self.send(request.into()).await
    }

    /// Send a one-time password to one recipient.
    pub async fn send_votp(&self, request: SendVotp) -> Result<SendResponse, IppanelError> {
        self.send(request.into()).await
    }

    /// Send any of the sending modes.
    pub async fn send(&self, request: SendRequest) -> Result<SendResponse, IppanelError> {
        self.post(SEND_PATH, &request).await
    }

    async fn post(&self, path: &str, request: &SendRequest) -> Result<SendResponse, IppanelError> {
        let body = crate::transport::encode_send_json(request).map_err(IppanelError::Serialize)?;

        let url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|err| IppanelError::Request(Box::new(err)))?;
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(self.api_key.as_str())
                .map_err(|err| IppanelError::Request(Box::new(err)))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        log::debug!("sending {} request to {url}", request.sending_type());
        let response = self
            .http
            .post_json(url, headers, body)
            .await
            .map_err(IppanelError::Transport)?;
        log::debug!("received HTTP {}", response.status);

        if response.status >= 400 {
            return Err(IppanelError::Rejected {
                status: response.status,
                body: response.body,
            });
        }

        crate::transport::decode_send_json_response(&response.body).map_err(IppanelError::Decode)
    }
}
