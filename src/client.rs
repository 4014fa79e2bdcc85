//! Instagram API client and call dispatcher.
//!
//! The [`Client`] type is the main entry point for making API calls.
//! Use [`Client::new`] with a token or [`ClientBuilder`] to configure one.

use crate::{
    config::{ClientConfig, DEFAULT_BASE_URL},
    metadata::RequestMetadata,
    params::Params,
    rate_limit::RateLimit,
    response::{Completion, Reply},
    Error, Result,
};
use http::{
    header::{CONTENT_LENGTH, CONTENT_TYPE},
    Method,
};
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use url::Url;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A client for the Instagram API.
///
/// The client is cheap to clone and meant to be reused. Its configuration is
/// fixed at construction, so calls in flight always see the same token,
/// page size and timeout.
///
/// Every operation can be consumed two ways: awaited as a future that
/// resolves to a [`Reply`], or handed to [`Client::send_with`] together with
/// a callback that receives the raw envelope.
///
/// # Examples
///
/// ```no_run
/// use instagram_client::{endpoints, params::MediaPage, Client};
///
/// # async fn example() -> Result<(), instagram_client::Error> {
/// let client = Client::new("my-access-token")?;
///
/// // Future style
/// let reply = client.recently_posted("self", MediaPage::new().count(5)).await?;
/// println!("{} posts, {} calls left", reply.data.as_array().map_or(0, Vec::len), reply.remaining);
///
/// // Callback style
/// let handle = client.send_with(endpoints::get_user("self"), |result, rate_limit| {
///     match result {
///         Ok(envelope) => println!("{} ({} left)", envelope["data"]["username"], rate_limit.remaining),
///         Err(e) => eprintln!("call failed: {}", e),
///     }
/// });
/// handle.await.ok();
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::Client,
    base_url: Url,
    config: ClientConfig,
}

impl Client {
    /// Creates a client from a bare access token or a [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: impl Into<ClientConfig>) -> Result<Self> {
        ClientBuilder::new().config(config.into()).build()
    }

    /// Creates a new `ClientBuilder` for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Returns the URL every endpoint path is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Sends a request and resolves the envelope into a [`Reply`].
    ///
    /// # Errors
    ///
    /// See [`Completion::into_reply`] for how each outcome maps to an error.
    pub async fn send(&self, request: RequestMetadata) -> Result<Reply> {
        let reply = self.call(&request).await.into_reply();
        if let Err(e) = &reply {
            if let Some(meta) = e.meta() {
                tracing::warn!(
                    method = %request.method,
                    path = %request.path(),
                    code = ?meta.code,
                    error_type = meta.error_type.as_deref().unwrap_or(""),
                    "Instagram rejected the call"
                );
            }
        }
        reply
    }

    /// Sends a request on a background task and hands the raw outcome to
    /// `callback`.
    ///
    /// The callback receives the parsed envelope without any `meta` check,
    /// plus the rate limit pair. The returned handle resolves once the
    /// callback has run.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime, since the call runs on a
    /// task started with [`tokio::spawn`].
    pub fn send_with<F>(&self, request: RequestMetadata, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<Value>, RateLimit) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move {
            client.call(&request).await.deliver(callback);
        })
    }

    /// Dispatches a single request and returns its raw [`Completion`].
    ///
    /// Adds `access_token` and the default `count`, sends the request and
    /// parses the body as JSON. No request is sent when the client has no
    /// access token.
    pub async fn call(&self, request: &RequestMetadata) -> Completion {
        let params = match self.prepare_params(request) {
            Ok(params) => params,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    method = %request.method,
                    path = %request.path(),
                    "Request not sent"
                );
                return Completion::failed(e);
            }
        };

        let start_time = Instant::now();
        match self.execute_request(request, &params).await {
            Ok(response) => self.parse_response(response, start_time.elapsed()).await,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    method = %request.method,
                    path = %request.path(),
                    "Request failed"
                );
                Completion::failed(e)
            }
        }
    }

    /// Builds the final parameter set of a call.
    fn prepare_params(&self, request: &RequestMetadata) -> Result<Params> {
        let access_token = self
            .inner
            .config
            .access_token()
            .ok_or(Error::MissingAccessToken)?;

        let mut params = request.params.clone();
        params.set("access_token", access_token);
        params.set_default("count", self.inner.config.limit);
        Ok(params)
    }

    /// Resolves the endpoint against the base URL. GET and DELETE carry the
    /// parameters in the query string.
    fn endpoint_url(&self, request: &RequestMetadata, params: &Params) -> Result<Url> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::ConfigurationError(format!(
                    "Base URL cannot take a path: {}",
                    self.inner.base_url
                ))
            })?
            .pop_if_empty()
            .extend(&request.segments);

        if request.method != Method::POST {
            url.query_pairs_mut().extend_pairs(params.iter());
        }

        Ok(url)
    }

    /// Executes a single request.
    async fn execute_request(
        &self,
        request: &RequestMetadata,
        params: &Params,
    ) -> Result<reqwest::Response> {
        let url = self.endpoint_url(request, params)?;

        tracing::debug!(
            method = %request.method,
            path = %url.path(),
            "Executing API request"
        );

        let mut builder = self
            .inner
            .http_client
            .request(request.method.clone(), url)
            .timeout(self.inner.config.timeout());

        if request.method == Method::POST {
            let body = params.to_form();
            builder = builder
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .header(CONTENT_LENGTH, body.len().to_string())
                .body(body);
        }

        builder.send().await.map_err(Error::transport)
    }

    /// Reads the rate limit headers and parses the body as JSON.
    async fn parse_response(&self, response: reqwest::Response, latency: Duration) -> Completion {
        let status = response.status();
        let rate_limit = RateLimit::from_headers(response.headers());

        tracing::info!(
            status = status.as_u16(),
            latency_ms = latency.as_millis(),
            rate_limit = rate_limit.limit,
            remaining = rate_limit.remaining,
            "Received API response"
        );

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Non-success HTTP status");
        }

        let raw_body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                let e = Error::transport(e);
                tracing::error!(error = %e, "Failed to read response body");
                return Completion::new(Err(e), rate_limit);
            }
        };

        match serde_json::from_str::<Value>(&raw_body) {
            Ok(body) => Completion::new(Ok(body), rate_limit),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    raw_response = %raw_body,
                    "Failed to parse response"
                );

                Completion::new(
                    Err(Error::ParseFailed {
                        raw_response: raw_body,
                        serde_error: e.to_string(),
                        rate_limit,
                    }),
                    rate_limit,
                )
            }
        }
    }
}

/// Builder for configuring and creating a [`Client`].
///
/// # Examples
///
/// ```no_run
/// use instagram_client::ClientBuilder;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), instagram_client::Error> {
/// let client = ClientBuilder::new()
///     .access_token("my-access-token")
///     .limit(25)
///     .timeout(Duration::from_secs(5))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    config: ClientConfig,
    base_url: Option<Url>,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings and no token.
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            base_url: None,
        }
    }

    /// Replaces every setting with those of `config`.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the access token sent with every call.
    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.config.access_token = Some(access_token.into());
        self
    }

    /// Sets the page size sent as `count` when a call does not set one.
    pub fn limit(mut self, limit: u32) -> Self {
        self.config.limit = limit;
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Overrides the API base URL, for proxies and test servers.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        self.base_url = Some(Url::parse(url.as_ref())?);
        Ok(self)
    }

    /// Builds the configured `Client`.
    ///
    /// A missing access token is not an error here; calls made without one
    /// fail with [`Error::MissingAccessToken`].
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot carry a path or if the HTTP
    /// client cannot be built.
    pub fn build(self) -> Result<Client> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        if base_url.cannot_be_a_base() {
            return Err(Error::ConfigurationError(format!(
                "Base URL cannot take a path: {}",
                base_url
            )));
        }

        let http_client = reqwest::Client::builder().build().map_err(|e| {
            Error::ConfigurationError(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Client {
            inner: Arc::new(ClientInner {
                http_client,
                base_url,
                config: self.config,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
