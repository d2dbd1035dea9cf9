//! Shared HTTP plumbing for the service clients

use crate::config::ApiConfig;
use crate::models::ErrorBody;
use crate::settings::{CredentialProvider, NoCredentials};
use crate::types::{ClientError, ClientResult};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Base URL, connection pool and credential source shared by all clients.
///
/// Cloning is cheap; clones share the pool and the credential provider.
#[derive(Clone)]
pub struct RemoteService {
    client: Client,
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl std::fmt::Debug for RemoteService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteService")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl RemoteService {
    /// Service without credentials and with reqwest's default timeouts
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url, Arc::new(NoCredentials))
    }

    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
        }
    }

    pub fn from_config(
        config: &ApiConfig,
        credentials: Arc<dyn CredentialProvider>,
    ) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("jobboard/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, config.base_url.clone(), credentials))
    }

    /// Replace the credential provider, keeping the pool
    pub fn with_credentials(mut self, credentials: Arc<dyn CredentialProvider>) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!(%method, path, "Remote request");
        self.client.request(method, self.url(path))
    }

    /// `path` with `segment` appended as one percent-encoded path segment
    pub(crate) fn segment_url(&self, path: &str, segment: &str) -> ClientResult<Url> {
        let mut url =
            Url::parse(&self.url(path)).map_err(|e| ClientError::InvalidRequest(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidRequest("base URL cannot hold a path".to_string()))?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }

    pub(crate) fn request_url(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, %url, "Remote request");
        self.client.request(method, url)
    }

    /// Request carrying `Authorization: Bearer <token>`.
    ///
    /// Without a token the header is left off and the service decides.
    pub(crate) fn authorized(&self, method: Method, path: &str) -> RequestBuilder {
        self.bearer(self.request(method, path))
    }

    pub(crate) fn authorized_url(&self, method: Method, url: Url) -> RequestBuilder {
        self.bearer(self.request_url(method, url))
    }

    fn bearer(&self, request: RequestBuilder) -> RequestBuilder {
        match self.credentials.bearer_token() {
            Some(token) => request.bearer_auth(token),
            None => {
                debug!("No bearer token available");
                request
            }
        }
    }
}

pub(crate) async fn send(request: RequestBuilder) -> ClientResult<Response> {
    request
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))
}

pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

/// `message` from an error body, when the body is JSON and carries one
pub(crate) async fn server_message(response: Response) -> Option<String> {
    let text = response.text().await.ok()?;
    serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .and_then(|body| body.message)
        .filter(|m| !m.trim().is_empty())
}

/// Failure for endpoints whose error bodies carry nothing useful
pub(crate) fn status_error(status: StatusCode) -> ClientError {
    ClientError::Http {
        status: status.as_u16(),
        message: None,
    }
}

/// Failure for endpoints that explain rejections.
///
/// 4xx becomes [`ClientError::Validation`] with the server message or
/// `fallback`; anything else stays an HTTP error carrying the message.
pub(crate) async fn rejection(response: Response, fallback: &str) -> ClientError {
    let status = response.status();
    let message = server_message(response).await;
    if status.is_client_error() {
        ClientError::Validation {
            status: status.as_u16(),
            message: message.unwrap_or_else(|| fallback.to_string()),
        }
    } else {
        ClientError::Http {
            status: status.as_u16(),
            message,
        }
    }
}
