//! Tests for building and dispatching API requests against a mock server.

use serde_json::json;
use tunesrs::{AccessToken, Error, HttpMethod, MusicClient, RemoteApiError, RequestParams};
use url::Url;
use wiremock::matchers::{bearer_token, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> MusicClient {
    let api_base = Url::parse(&format!("{}/v1/", server.uri())).unwrap();
    MusicClient::new().with_api_base_url(api_base)
}

#[tokio::test]
async fn test_get_an_album_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/albums/0sNOF9WDwhWunNAHPD3Baj"))
        .and(query_param("market", "SE"))
        .and(header("authorization", "Bearer TOKEN"))
        .and(header("content-type", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "name": "She's So Unusual" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = RequestParams::new()
        .with("id", "0sNOF9WDwhWunNAHPD3Baj")
        .with("market", "SE");

    let resp = client
        .get_an_album(&params, &AccessToken::from("TOKEN"))
        .await
        .unwrap();

    assert!(resp.is_success());
    let album: serde_json::Value = resp.json().unwrap();
    assert_eq!(album["name"], "She's So Unusual");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("market=SE"));
}

#[tokio::test]
async fn test_unrecognized_params_are_dropped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = RequestParams::new()
        .with("id", "ABC")
        .with("market", "SE")
        .with("bogus", "X");

    client
        .get_request("albums/id", &params, &AccessToken::from("TOKEN"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.path(), "/v1/albums/ABC");
    assert_eq!(requests[0].url.query(), Some("market=SE"));
}

#[tokio::test]
async fn test_no_query_string_without_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "smedjan" })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .get_current_users_profile(&RequestParams::new(), &AccessToken::from("TOKEN"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_each_builder_uses_its_verb() {
    let server = MockServer::start().await;

    Mock::given(path("/v1/me/player/seek"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let token = AccessToken::from("TOKEN");
    // The same params for every verb, including a body key
    let params = RequestParams::new()
        .with("position_ms", 25000)
        .with("name", "ignored for GET and DELETE");

    client.get_request("me/player/seek", &params, &token).await.unwrap();
    client.post_request("me/player/seek", &params, &token).await.unwrap();
    client.put_request("me/player/seek", &params, &token).await.unwrap();
    client.delete_request("me/player/seek", &params, &token).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let verbs: Vec<&str> = requests.iter().map(|r| r.method.as_str()).collect();
    assert_eq!(verbs, vec!["GET", "POST", "PUT", "DELETE"]);

    for req in &requests {
        assert_eq!(req.url.query(), Some("position_ms=25000"));
    }
}

#[tokio::test]
async fn test_request_with_explicit_method() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/me/player/pause"))
        .and(bearer_token("TOKEN"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client
        .request(
            HttpMethod::Put,
            "me/player/pause",
            &RequestParams::new(),
            &AccessToken::from("TOKEN"),
        )
        .await
        .unwrap();

    assert_eq!(resp.status.as_u16(), 204);
    assert!(resp.body.is_empty());
}

#[tokio::test]
async fn test_body_params_are_sent_as_json_on_post() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/users/smedjan/playlists"))
        .and(body_json(json!({ "name": "Road trip", "public": false })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "P1" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = RequestParams::new()
        .with("user_id", "smedjan")
        .with("name", "Road trip")
        .with("public", false);

    let resp = client
        .create_a_playlist(&params, &AccessToken::from("TOKEN"))
        .await
        .unwrap();

    assert_eq!(resp.status.as_u16(), 201);
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_body_params_are_not_sent_on_get() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = RequestParams::new()
        .with("playlist_id", "P1")
        .with("name", "Road trip");

    client
        .get_a_playlist(&params, &AccessToken::from("TOKEN"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.path(), "/v1/playlists/P1");
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_list_values_are_comma_joined_in_the_query() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/me/tracks"))
        .and(query_param("ids", "7ouMYWpwJ422jRcDASZB7P,4VqPOruhp5EdPBeR92t6lQ"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = RequestParams::new().with(
        "ids",
        vec!["7ouMYWpwJ422jRcDASZB7P", "4VqPOruhp5EdPBeR92t6lQ"],
    );

    let resp = client
        .save_tracks_for_user(&params, &AccessToken::from("TOKEN"))
        .await
        .unwrap();
    assert!(resp.is_success());
}

#[tokio::test]
async fn test_missing_path_param_is_sent_literally() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/albums/id/tracks"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "status": 400, "message": "invalid id" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client
        .get_an_albums_tracks(&RequestParams::new(), &AccessToken::from("TOKEN"))
        .await
        .unwrap();

    assert_eq!(resp.status.as_u16(), 400);
}

#[tokio::test]
async fn test_non_success_status_is_returned_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/tracks/T1"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "status": 401, "message": "The access token expired" }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = RequestParams::new().with("id", "T1");

    let resp = client
        .get_a_track(&params, &AccessToken::from("EXPIRED"))
        .await
        .unwrap();

    assert_eq!(resp.status.as_u16(), 401);
    assert!(!resp.is_success());
    assert!(resp.body.contains("The access token expired"));

    match resp.error_for_status() {
        Err(Error::RemoteApi(err)) => assert_eq!(
            err,
            RemoteApiError {
                status: 401,
                message: "The access token expired".to_string(),
            }
        ),
        other => panic!("Expected a remote API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_for_status_falls_back_to_raw_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad gateway"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client
        .get_all_new_releases(&RequestParams::new(), &AccessToken::from("TOKEN"))
        .await
        .unwrap();

    match resp.error_for_status() {
        Err(Error::RemoteApi(err)) => {
            assert_eq!(err.status, 502);
            assert_eq!(err.message, "Bad gateway");
        }
        other => panic!("Expected a remote API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_for_status_passes_success_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "devices": [] })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client
        .get_a_users_available_devices(&RequestParams::new(), &AccessToken::from("TOKEN"))
        .await
        .unwrap()
        .error_for_status()
        .unwrap();

    let devices: serde_json::Value = resp.json().unwrap();
    assert_eq!(devices, json!({ "devices": [] }));
}

#[tokio::test]
async fn test_transport_failure_is_an_http_error() {
    // Grab a free port, then close it so nothing is listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let api_base = Url::parse(&format!("http://127.0.0.1:{port}/v1/")).unwrap();
    let client = MusicClient::new().with_api_base_url(api_base);

    let result = client
        .get_an_album(
            &RequestParams::new().with("id", "ABC"),
            &AccessToken::from("TOKEN"),
        )
        .await;

    assert!(matches!(result, Err(Error::Http(_))));
}
