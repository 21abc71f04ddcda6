use playlist_dl::clients::{VideoSearch, YouTubeClient, errors::Error};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

#[tokio::test]
async fn returns_watch_url_for_top_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("part", "snippet"))
        .and(query_param("type", "video"))
        .and(query_param("maxResults", "1"))
        .and(query_param("q", "Song Artist One, Artist Two audio"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "youtube#searchListResponse",
            "items": [
                {
                    "kind": "youtube#searchResult",
                    "id": { "kind": "youtube#video", "videoId": "dQw4w9WgXcQ" },
                    "snippet": { "title": "Song (Official Audio)" }
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = YouTubeClient::with_base_url("test-key", server.uri());
    let url = client
        .best_match("Song Artist One, Artist Two audio")
        .await
        .unwrap();
    assert_eq!(
        url.as_deref(),
        Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
    );
}

#[tokio::test]
async fn empty_result_is_no_match() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    let client = YouTubeClient::with_base_url("test-key", server.uri());
    assert_eq!(client.best_match("nothing here").await.unwrap(), None);
}

#[tokio::test]
async fn response_without_items_is_no_match() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "pageInfo": {} })))
        .mount(&server)
        .await;

    let client = YouTubeClient::with_base_url("test-key", format!("{}/", server.uri()));
    assert_eq!(client.best_match("query").await.unwrap(), None);
}

#[tokio::test]
async fn api_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(403).set_body_string("quotaExceeded"))
        .mount(&server)
        .await;

    let client = YouTubeClient::with_base_url("test-key", server.uri());
    match client.best_match("query").await {
        Err(Error::YouTubeApiError { status, body }) => {
            assert_eq!(status, 403);
            assert!(body.contains("quotaExceeded"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
