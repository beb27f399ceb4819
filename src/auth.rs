use crate::Error;
use crate::MusicClient;
use base64::Engine;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use url::Url;

pub(crate) static CLIENT_ID_ENV: &str = "MUSIC_CLIENT_ID";
pub(crate) static CLIENT_SECRET_ENV: &str = "MUSIC_CLIENT_SECRET";
pub(crate) static REFRESH_TOKEN_ENV: &str = "MUSIC_REFRESH_TOKEN";

/// Application credentials issued by the music service.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

// Keep the secret out of logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Read credentials from `MUSIC_CLIENT_ID` and `MUSIC_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::new(env_var(CLIENT_ID_ENV)?, env_var(CLIENT_SECRET_ENV)?))
    }

    /// Value of the `Authorization` header for the token endpoint.
    pub fn basic_auth_header(&self) -> String {
        let raw = format!("{}:{}", self.client_id, self.client_secret);
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(raw.as_bytes())
        )
    }
}

/// Read a refresh token from `MUSIC_REFRESH_TOKEN`.
pub fn refresh_token_from_env() -> Result<String, Error> {
    env_var(REFRESH_TOKEN_ENV)
}

fn env_var(name: &'static str) -> Result<String, Error> {
    std::env::var(name).map_err(|_| Error::MissingEnvVar(name))
}

/// An opaque bearer token.
///
/// The client never tracks expiry; when a call fails because the token has
/// expired, fetch a new one with [`MusicClient::refresh_access_token`] or
/// [`MusicClient::get_access_token`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

impl Display for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

/// The grant presented to the token endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenGrant {
    /// App-only access with the client id and secret
    ClientCredentials,
    /// Exchange a refresh token for a fresh access token
    RefreshToken(String),
    /// Complete the user-consent flow started with [`MusicClient::authorize_url`]
    AuthorizationCode { code: String, redirect_uri: String },
}

impl TokenGrant {
    fn form(&self) -> Vec<(&'static str, &str)> {
        match self {
            TokenGrant::ClientCredentials => vec![("grant_type", "client_credentials")],
            TokenGrant::RefreshToken(refresh_token) => vec![
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token.as_str()),
            ],
            TokenGrant::AuthorizationCode { code, redirect_uri } => vec![
                ("grant_type", "authorization_code"),
                ("code", code.as_str()),
                ("redirect_uri", redirect_uri.as_str()),
            ],
        }
    }

    fn grant_type(&self) -> &'static str {
        match self {
            TokenGrant::ClientCredentials => "client_credentials",
            TokenGrant::RefreshToken(_) => "refresh_token",
            TokenGrant::AuthorizationCode { .. } => "authorization_code",
        }
    }
}

/// Successful answer of the token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Bearer token for API calls
    pub access_token: AccessToken,
    /// Type of token (typically "Bearer")
    pub token_type: Option<String>,
    /// Token lifetime in seconds
    pub expires_in: Option<u64>,
    /// Space-separated scopes granted to the token
    pub scope: Option<String>,
    /// Present for user grants; may rotate on refresh
    pub refresh_token: Option<String>,
}

// Raw body before checking for the access token
#[derive(Deserialize)]
struct RawTokenResponse {
    access_token: Option<String>,
    token_type: Option<String>,
    expires_in: Option<u64>,
    scope: Option<String>,
    refresh_token: Option<String>,
}

/// Failures of the token endpoint.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The token endpoint answered with a non-2xx status
    #[error("Token request rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
    /// The response carried no `access_token`
    #[error("Token response did not contain an access token")]
    MissingAccessToken,
    /// The response body was not valid JSON
    #[error("Invalid token response: {0}")]
    InvalidResponse(#[source] serde_json::Error),
}

impl MusicClient {
    /// URL of the token endpoint.
    pub fn get_token_url(&self) -> String {
        format!("{}api/token", self.get_accounts_base_url())
    }

    /// Obtain an app-only access token with the client-credentials grant.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tunesrs::{Credentials, MusicClient};
    ///
    /// # async fn example() -> Result<(), tunesrs::Error> {
    /// let client = MusicClient::new();
    /// let token = client
    ///     .get_access_token(&Credentials::new("client_id", "client_secret"))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_access_token(&self, credentials: &Credentials) -> Result<AccessToken, Error> {
        let resp = self
            .request_token(credentials, &TokenGrant::ClientCredentials)
            .await?;
        Ok(resp.access_token)
    }

    /// Exchange a refresh token for a new access token.
    pub async fn refresh_access_token(
        &self,
        credentials: &Credentials,
        refresh_token: &str,
    ) -> Result<AccessToken, Error> {
        let grant = TokenGrant::RefreshToken(refresh_token.to_string());
        let resp = self.request_token(credentials, &grant).await?;
        Ok(resp.access_token)
    }

    /// Exchange an authorization code for user tokens.
    pub async fn exchange_code(
        &self,
        credentials: &Credentials,
        code: &str,
        redirect_uri: &str,
    ) -> Result<TokenResponse, Error> {
        let grant = TokenGrant::AuthorizationCode {
            code: code.to_string(),
            redirect_uri: redirect_uri.to_string(),
        };
        self.request_token(credentials, &grant).await
    }

    /// Build the consent page URL that starts the authorization-code flow.
    ///
    /// Send the user there; the service redirects back to `redirect_uri`
    /// with a `code` to pass to [`MusicClient::exchange_code`].
    pub fn authorize_url(
        &self,
        credentials: &Credentials,
        redirect_uri: &str,
        scopes: &[&str],
        state: Option<&str>,
    ) -> Url {
        let mut url = self.get_accounts_base_url().clone();
        url.set_path(&format!("{}authorize", url.path()));

        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("client_id", &credentials.client_id)
                .append_pair("response_type", "code")
                .append_pair("redirect_uri", redirect_uri);
            if !scopes.is_empty() {
                query.append_pair("scope", &scopes.join(" "));
            }
            if let Some(state) = state {
                query.append_pair("state", state);
            }
        }

        url
    }

    /// POST a grant to the token endpoint with HTTP Basic authentication.
    ///
    /// Fails with [`AuthError`] when the endpoint answers non-2xx or its body
    /// lacks an `access_token`.
    pub async fn request_token(
        &self,
        credentials: &Credentials,
        grant: &TokenGrant,
    ) -> Result<TokenResponse, Error> {
        let url = self.get_token_url();

        log::debug!("Requesting {} token from {}", grant.grant_type(), url);

        let resp = self
            .client
            .post(&url)
            .header(AUTHORIZATION, credentials.basic_auth_header())
            .form(&grant.form())
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            if log::log_enabled!(log::Level::Debug) {
                log::debug!("Token request failed: {} {}", status, body);
            }
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let raw: RawTokenResponse =
            serde_json::from_str(&body).map_err(AuthError::InvalidResponse)?;

        let access_token = raw.access_token.ok_or(AuthError::MissingAccessToken)?;

        Ok(TokenResponse {
            access_token: AccessToken(access_token),
            token_type: raw.token_type,
            expires_in: raw.expires_in,
            scope: raw.scope,
            refresh_token: raw.refresh_token,
        })
    }
}
