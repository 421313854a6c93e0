use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::{Config, FLASK_API_PREFIX};
use crate::error::{ApiError, Result};
use crate::session::store::SessionStore;

/// The error body shape both backends use for failures.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// HTTP boundary to the two backends.
///
/// Owns the transport, the configuration, and the session store, and is
/// passed explicitly to every service call. Each request is fresh: no retry,
/// no caching, no timeout beyond the transport default.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Config,
    store: SessionStore,
}

impl ApiClient {
    /// Creates a new `ApiClient`.
    ///
    /// # Arguments
    ///
    /// * `config` - Backend origins and upload limits.
    /// * `store` - The session store supplying bearer credentials.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `ApiClient`.
    pub fn new(config: Config, store: SessionStore) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self {
            http,
            config,
            store,
        })
    }

    /// The client configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The session store backing this client.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Builds a URL under the main backend's `/api` prefix.
    pub(crate) fn api_url(&self, path: &str) -> String {
        format!(
            "{}/api{}",
            self.config.api_base_url.trim_end_matches('/'),
            path
        )
    }

    /// Builds a URL under the analysis backend's versioned prefix.
    pub(crate) fn flask_url(&self, path: &str) -> String {
        format!(
            "{}{}{}",
            self.config.flask_base_url.trim_end_matches('/'),
            FLASK_API_PREFIX,
            path
        )
    }

    /// Starts a request, attaching the bearer credential when an unexpired
    /// session exists. An expired token is never attached; the store clears
    /// it on inspection.
    pub(crate) fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match self.store.bearer_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// GET a JSON resource.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("➡️ GET {}", url);
        let response = self.request(Method::GET, url).send().await?;
        read_json(response).await
    }

    /// POST a JSON body and read a JSON response.
    pub(crate) async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        tracing::debug!("➡️ POST {}", url);
        let response = self.request(Method::POST, url).json(body).send().await?;
        read_json(response).await
    }

    /// POST a multipart form and read a JSON response.
    ///
    /// No `Content-Type: application/json` here; the multipart body carries
    /// its own boundary type.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        url: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        tracing::debug!("➡️ POST (multipart) {}", url);
        let response = self
            .request(Method::POST, url)
            .multipart(form)
            .send()
            .await?;
        read_json(response).await
    }

    /// DELETE a resource, accepting an empty success body.
    pub(crate) async fn delete(&self, url: &str) -> Result<()> {
        tracing::debug!("➡️ DELETE {}", url);
        let response = self.request(Method::DELETE, url).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from_response(response).await)
        }
    }
}

fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type
        .map(|value| value.contains("application/json"))
        .unwrap_or(false)
}

/// Normalizes a successful body: a 2xx response must carry JSON.
fn parse_success<T: DeserializeOwned>(content_type: Option<&str>, body: &str) -> Result<T> {
    if !is_json_content_type(content_type) {
        return Err(ApiError::Protocol(format!(
            "Expected a JSON response, got content type {}",
            content_type.unwrap_or("<none>")
        )));
    }

    sonic_rs::from_str(body)
        .map_err(|e| ApiError::Protocol(format!("Malformed JSON response: {}", e)))
}

/// Normalizes a failure body into a `Remote` error.
///
/// A JSON `{error|message}` body surfaces the server's message verbatim;
/// anything else surfaces the status code with the raw text.
fn remote_error(status: u16, content_type: Option<&str>, body: &str) -> ApiError {
    if is_json_content_type(content_type) {
        if let Ok(parsed) = sonic_rs::from_str::<ErrorBody>(body) {
            if let Some(message) = parsed.error.or(parsed.message) {
                return ApiError::Remote { status, message };
            }
        }
    }

    let detail = body.trim();
    let message = if detail.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, detail)
    };
    ApiError::Remote { status, message }
}

fn content_type_of(response: &Response) -> Option<String> {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

/// Reads and normalizes a response per the boundary contract.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status().as_u16();
    let content_type = content_type_of(&response);
    let success = response.status().is_success();
    let body = response.text().await.unwrap_or_default();

    if !success {
        return Err(remote_error(status, content_type.as_deref(), &body));
    }

    parse_success(content_type.as_deref(), &body)
}

pub(crate) async fn error_from_response(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let content_type = content_type_of(&response);
    let body = response.text().await.unwrap_or_default();
    remote_error(status, content_type.as_deref(), &body)
}
