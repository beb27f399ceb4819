#![doc = include_str!("../README.md")]

mod album;
mod artist;
mod auth;
mod browse;
mod endpoint;
mod follow;
mod library;
mod params;
mod player;
mod playlist;
mod search;
mod template;
mod track;
mod user;

pub use album::*;
pub use artist::*;
pub use auth::*;
pub use browse::*;
pub use endpoint::*;
pub use follow::*;
pub use library::*;
pub use params::*;
pub use player::*;
pub use playlist::*;
pub use search::*;
pub use template::substitute_path_params;
pub use track::*;
pub use user::*;

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::fmt::Display;
use template::unresolved_placeholders;
use url::Url;

pub(crate) static API_BASE_URL: &str = "https://api.example-music-service.com/v1/";
pub(crate) static ACCOUNTS_BASE_URL: &str = "https://accounts.example-music-service.com/";

/// Error reported by the music service for a failed API call.
///
/// Dispatch never produces this on its own: responses are handed back as
/// they are. Use [`ApiResponse::error_for_status`] to turn a non-2xx
/// response into [`Error::RemoteApi`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RemoteApiError {
    /// HTTP status code
    pub status: u16,
    /// Human-readable error message
    #[serde(default)]
    pub message: String,
}

impl Display for RemoteApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Music API error: {} {}", self.status, self.message)
    }
}

// The service wraps API errors as {"error": {"status": .., "message": ..}}
#[derive(Deserialize)]
struct RemoteApiErrorEnvelope {
    error: RemoteApiError,
}

/// Errors that can occur when using the tunesrs library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request failed (DNS, connection refused, timeouts, etc.)
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// The token endpoint did not hand out an access token
    #[error(transparent)]
    Auth(#[from] AuthError),
    /// The API answered with a non-2xx status
    #[error("{0}")]
    RemoteApi(RemoteApiError),
    /// JSON serialization/deserialization failed
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
    /// The endpoint exists but its request shape has not been wired up
    #[error("Endpoint {0} is not implemented")]
    NotImplemented(&'static str),
    /// A required environment variable is not set
    #[error("Environment variable {0} is not set")]
    MissingEnvVar(&'static str),
}

/// Raw response of an API call.
///
/// Every status code is returned as-is; the caller decides what a non-2xx
/// answer means.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Decode the body as JSON. An empty body decodes as `null`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        if self.body.trim().is_empty() {
            return Ok(serde_json::from_value(serde_json::Value::Null)?);
        }

        Ok(serde_json::from_str(&self.body)?)
    }

    /// Turn a non-2xx response into [`Error::RemoteApi`].
    pub fn error_for_status(self) -> Result<Self, Error> {
        if self.is_success() {
            return Ok(self);
        }

        let err = match serde_json::from_str::<RemoteApiErrorEnvelope>(&self.body) {
            Ok(envelope) => envelope.error,
            Err(_) => RemoteApiError {
                status: self.status.as_u16(),
                message: self.body.clone(),
            },
        };

        if log::log_enabled!(log::Level::Debug) {
            log::debug!("Music API Error: {}", err);
        }

        Err(Error::RemoteApi(err))
    }
}

/// Client for the music service's Web API.
///
/// The client holds no session state: every operation takes the bearer
/// token it should use, and performs exactly one HTTP round trip. It can be
/// shared freely between tasks.
///
/// # Example
///
/// ```no_run
/// use tunesrs::{Credentials, MusicClient, RequestParams};
///
/// # async fn example() -> Result<(), tunesrs::Error> {
/// let client = MusicClient::new();
/// let credentials = Credentials::from_env()?;
/// let token = client.get_access_token(&credentials).await?;
///
/// let params = RequestParams::new()
///     .with("id", "0sNOF9WDwhWunNAHPD3Baj")
///     .with("market", "SE");
/// let resp = client.get_an_album(&params, &token).await?;
/// println!("{}", resp.body);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MusicClient {
    pub client: reqwest::Client,
    api_base_url: Url,
    accounts_base_url: Url,
}

impl Default for MusicClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MusicClient {
    /// Create a new client pointing at the public service.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base_url: Url::parse(API_BASE_URL).expect("valid default API base URL"),
            accounts_base_url: Url::parse(ACCOUNTS_BASE_URL)
                .expect("valid default accounts base URL"),
        }
    }

    /// Set a custom HTTP client using the builder pattern.
    ///
    /// Timeouts, proxies and TLS settings are configured here.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tunesrs::MusicClient;
    ///
    /// let custom_client = reqwest::Client::builder()
    ///     .timeout(std::time::Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = MusicClient::new().with_client(custom_client);
    /// ```
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Set the base URL that endpoint templates are appended to.
    pub fn with_api_base_url(mut self, url: Url) -> Self {
        self.api_base_url = with_trailing_slash(url);
        self
    }

    /// Set the base URL of the accounts service (token and authorize pages).
    pub fn with_accounts_base_url(mut self, url: Url) -> Self {
        self.accounts_base_url = with_trailing_slash(url);
        self
    }

    pub fn get_api_base_url(&self) -> &Url {
        &self.api_base_url
    }

    pub fn get_accounts_base_url(&self) -> &Url {
        &self.accounts_base_url
    }

    /// Issue one authenticated request against the API.
    ///
    /// The URL is the API base plus `template`, with path placeholders
    /// substituted from `params`. Entries named in [`QUERY_PARAMS`] become
    /// the query string and, for POST and PUT, entries named in
    /// [`BODY_PARAMS`] become a JSON body. Everything else is dropped.
    ///
    /// The response comes back whatever its status; only transport failures
    /// are errors.
    pub async fn request(
        &self,
        method: HttpMethod,
        template: &str,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        let url = substitute_path_params(params, &format!("{}{}", self.api_base_url, template));

        let unresolved = unresolved_placeholders(&url);
        if !unresolved.is_empty() {
            log::warn!("Sending {url} with unsubstituted path parameters: {unresolved:?}");
        }

        log::debug!("{method} {url}");

        let mut req = self
            .client
            .request(method.into(), &url)
            .header(AUTHORIZATION, format!("Bearer {}", token.as_str()))
            .header(CONTENT_TYPE, "application/json");

        let query = params.query_pairs();
        if !query.is_empty() {
            req = req.query(&query);
        }

        if matches!(method, HttpMethod::Post | HttpMethod::Put) {
            if let Some(body) = params.body() {
                req = req.body(serde_json::to_vec(&body)?);
            }
        }

        let resp = req.send().await?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.text().await?;

        if log::log_enabled!(log::Level::Trace) {
            log::trace!("Requested URL: {}", url);
            log::trace!("Response {} {}", status, body);
        }

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }

    /// [`MusicClient::request`] with `GET`.
    pub async fn get_request(
        &self,
        template: &str,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        self.request(HttpMethod::Get, template, params, token).await
    }

    /// [`MusicClient::request`] with `POST`.
    pub async fn post_request(
        &self,
        template: &str,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        self.request(HttpMethod::Post, template, params, token).await
    }

    /// [`MusicClient::request`] with `PUT`.
    pub async fn put_request(
        &self,
        template: &str,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        self.request(HttpMethod::Put, template, params, token).await
    }

    /// [`MusicClient::request`] with `DELETE`.
    pub async fn delete_request(
        &self,
        template: &str,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        self.request(HttpMethod::Delete, template, params, token).await
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
