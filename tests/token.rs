//! Tests for the token endpoint: client credentials, refresh and code grants.

use serde_json::json;
use tunesrs::{AuthError, Credentials, Error, MusicClient, TokenGrant};
use url::Url;
use wiremock::matchers::{basic_auth, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> MusicClient {
    let accounts_base = Url::parse(&server.uri()).unwrap();
    MusicClient::new().with_accounts_base_url(accounts_base)
}

fn credentials() -> Credentials {
    Credentials::new("my-client", "my-secret")
}

#[test]
fn test_basic_auth_header() {
    assert_eq!(
        Credentials::new("id", "secret").basic_auth_header(),
        "Basic aWQ6c2VjcmV0"
    );
    assert_eq!(
        credentials().basic_auth_header(),
        "Basic bXktY2xpZW50Om15LXNlY3JldA=="
    );
}

#[test]
fn test_credentials_debug_hides_secret() {
    let debug = format!("{:?}", credentials());
    assert!(debug.contains("my-client"));
    assert!(!debug.contains("my-secret"));
}

#[tokio::test]
async fn test_get_access_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(basic_auth("my-client", "my-secret"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "NgCXRKc...MzYjw",
            "token_type": "bearer",
            "expires_in": 3600,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let token = client.get_access_token(&credentials()).await.unwrap();

    assert_eq!(token.as_str(), "NgCXRKc...MzYjw");
}

#[tokio::test]
async fn test_refresh_access_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(basic_auth("my-client", "my-secret"))
        .and(body_string("grant_type=refresh_token&refresh_token=AQD-refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "fresh",
            "token_type": "Bearer",
            "expires_in": 3600,
            "scope": "user-read-playback-state",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let token = client
        .refresh_access_token(&credentials(), "AQD-refresh")
        .await
        .unwrap();

    assert_eq!(token.as_str(), "fresh");
}

#[tokio::test]
async fn test_request_token_returns_full_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(body_string(
            "grant_type=authorization_code&code=CODE&redirect_uri=http%3A%2F%2Flocalhost%3A8888%2Fcallback",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "user-token",
            "token_type": "Bearer",
            "expires_in": 3600,
            "scope": "playlist-modify-private",
            "refresh_token": "AQD-refresh",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client
        .exchange_code(&credentials(), "CODE", "http://localhost:8888/callback")
        .await
        .unwrap();

    assert_eq!(resp.access_token.as_str(), "user-token");
    assert_eq!(resp.token_type.as_deref(), Some("Bearer"));
    assert_eq!(resp.expires_in, Some(3600));
    assert_eq!(resp.scope.as_deref(), Some("playlist-modify-private"));
    assert_eq!(resp.refresh_token.as_deref(), Some("AQD-refresh"));
}

#[tokio::test]
async fn test_rejected_token_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_client",
            "error_description": "Invalid client secret",
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.get_access_token(&credentials()).await;

    match result {
        Err(Error::Auth(AuthError::Rejected { status, body })) => {
            assert_eq!(status, 400);
            assert!(body.contains("invalid_client"));
        }
        other => panic!("Expected a rejected token request, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_access_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "Bearer",
            "expires_in": 3600,
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .refresh_access_token(&credentials(), "AQD-refresh")
        .await;

    assert!(matches!(
        result,
        Err(Error::Auth(AuthError::MissingAccessToken))
    ));
}

#[tokio::test]
async fn test_invalid_token_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .request_token(&credentials(), &TokenGrant::ClientCredentials)
        .await;

    assert!(matches!(
        result,
        Err(Error::Auth(AuthError::InvalidResponse(_)))
    ));
}

#[test]
fn test_token_url() {
    let client = MusicClient::new();
    assert_eq!(
        client.get_token_url(),
        "https://accounts.example-music-service.com/api/token"
    );

    let client = MusicClient::new()
        .with_accounts_base_url(Url::parse("http://127.0.0.1:9000/accounts").unwrap());
    assert_eq!(client.get_token_url(), "http://127.0.0.1:9000/accounts/api/token");
}

#[test]
fn test_authorize_url() {
    let client = MusicClient::new();
    let url = client.authorize_url(
        &credentials(),
        "http://localhost:8888/callback",
        &["user-read-private", "playlist-modify-public"],
        Some("xyz"),
    );

    assert_eq!(url.path(), "/authorize");

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("client_id".to_string(), "my-client".to_string()),
            ("response_type".to_string(), "code".to_string()),
            (
                "redirect_uri".to_string(),
                "http://localhost:8888/callback".to_string()
            ),
            (
                "scope".to_string(),
                "user-read-private playlist-modify-public".to_string()
            ),
            ("state".to_string(), "xyz".to_string()),
        ]
    );
}

#[test]
fn test_authorize_url_without_scopes_or_state() {
    let client = MusicClient::new();
    let url = client.authorize_url(&credentials(), "http://localhost:8888/callback", &[], None);

    let keys: Vec<String> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();
    assert_eq!(keys, vec!["client_id", "response_type", "redirect_uri"]);
}
