//! Main SpofityClient

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use reqwest::Method;
use serde::Serialize;

use crate::api::RawResponse;
use crate::auth::TokenProvider;
use crate::error::ApiError;
use crate::error::AuthError;
use crate::error::Error;

/// Client for the Spofity backend.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across tasks.
///
/// # Example
///
/// ```ignore
/// use spofity_lib::{SpofityClient, auth::StaticTokenProvider};
///
/// let client = SpofityClient::builder()
///     .url("http://localhost:3000")
///     .token_provider(StaticTokenProvider::new(token))
///     .build()?;
///
/// let outcome = client.login(&credentials).await?;
/// ```
#[derive(Clone)]
pub struct SpofityClient {
    inner: Arc<SpofityClientInner>,
}

struct SpofityClientInner {
    base_url: String,
    token_provider: Option<Arc<dyn TokenProvider>>,
    http_client: Client,
    timeout: Option<Duration>,
}

impl SpofityClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> SpofityClientBuilder<Missing> {
        SpofityClientBuilder::new()
    }

    /// Returns the base URL of the backend.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Returns the per-request timeout, if one is set.
    pub fn timeout(&self) -> Option<Duration> {
        self.inner.timeout
    }

    pub(crate) fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url.trim_end_matches('/'), path)
    }

    /// Sends a JSON request and returns the raw status and body.
    ///
    /// Non-2xx statuses are not errors at this level; the caller decides
    /// what the body means. Only transport failures are reported here.
    pub(crate) async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        authenticated: bool,
    ) -> Result<RawResponse, Error> {
        let url = self.build_url(path);
        let mut request = self.inner.http_client.request(method.clone(), &url);

        if authenticated {
            let provider = self
                .inner
                .token_provider
                .as_ref()
                .ok_or(AuthError::MissingSession)?;
            let token = provider.get_token().await?;
            request = request.bearer_auth(&token.access_token);
        }

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        log::debug!("{} {}", method, url);

        let response = request.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        log::debug!("{} {} -> {}", method, url, status);
        Ok(RawResponse::new(status, body))
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        match self.inner.timeout {
            Some(timeout) if err.is_timeout() => Error::Api(ApiError::Timeout(timeout)),
            _ => Error::Api(ApiError::Network(err)),
        }
    }
}

impl std::fmt::Debug for SpofityClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpofityClient")
            .field("base_url", &self.inner.base_url)
            .field("authenticated", &self.inner.token_provider.is_some())
            .field("timeout", &self.inner.timeout)
            .finish()
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`SpofityClient`].
///
/// Uses the typestate pattern so `build` only exists once the URL is set.
/// A token provider is optional; without one, calls that need a session
/// fail with [`AuthError::MissingSession`].
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use spofity_lib::SpofityClient;
///
/// let client = SpofityClient::builder()
///     .url("http://localhost:3000")
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
/// assert_eq!(client.base_url(), "http://localhost:3000");
/// ```
pub struct SpofityClientBuilder<Url> {
    url: Url,
    token_provider: Option<Arc<dyn TokenProvider>>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl SpofityClientBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: Missing,
            token_provider: None,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the backend base URL.
    pub fn url(self, url: impl Into<String>) -> SpofityClientBuilder<Set<String>> {
        SpofityClientBuilder {
            url: Set(url.into()),
            token_provider: self.token_provider,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl Default for SpofityClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> SpofityClientBuilder<U> {
    /// Sets the token provider used for authenticated calls.
    pub fn token_provider<T: TokenProvider + 'static>(mut self, provider: T) -> Self {
        self.token_provider = Some(Arc::new(provider));
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl SpofityClientBuilder<Set<String>> {
    /// Builds the [`SpofityClient`].
    ///
    /// Fails if the URL is not http(s) or the HTTP client cannot be created.
    pub fn build(self) -> Result<SpofityClient, ApiError> {
        let base_url = self.url.0;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidUrl(base_url));
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(SpofityClient {
            inner: Arc::new(SpofityClientInner {
                base_url,
                token_provider: self.token_provider,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticTokenProvider;

    #[test]
    fn test_build_url_trims_trailing_slash() {
        let client = SpofityClient::builder()
            .url("http://localhost:3000/")
            .build()
            .unwrap();
        assert_eq!(
            client.build_url("/api/auth/login/email"),
            "http://localhost:3000/api/auth/login/email"
        );
    }

    #[test]
    fn test_rejects_non_http_url() {
        let result = SpofityClient::builder().url("localhost:3000").build();
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_builder_options() {
        let client = SpofityClient::builder()
            .token_provider(StaticTokenProvider::new("t"))
            .timeout(Duration::from_secs(5))
            .connect_timeout(Duration::from_secs(2))
            .url("https://api.example.com")
            .build()
            .unwrap();
        assert_eq!(client.timeout(), Some(Duration::from_secs(5)));
        let debug = format!("{:?}", client);
        assert!(debug.contains("authenticated: true"));
    }

    #[tokio::test]
    async fn test_authenticated_call_without_provider_fails_before_sending() {
        let client = SpofityClient::builder()
            .url("http://127.0.0.1:9")
            .build()
            .unwrap();
        let result = client
            .send_json::<()>(Method::PUT, "/api/users/update-profile", None, true)
            .await;
        assert!(matches!(result, Err(Error::Auth(AuthError::MissingSession))));
    }
}
