use httpmock::prelude::*;
use jokester::{router, serve, HttpJokeProvider, HttpNameProvider, JokeService};
use std::time::Duration;
use tokio::net::TcpListener;

async fn spawn_against(server: &MockServer, timeout: Duration) -> String {
    let names = HttpNameProvider::new(&server.url("/api/v0/"), timeout).unwrap();
    let jokes = HttpJokeProvider::new(&server.url("/joke?limitTo=nerdy"), timeout).unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve(
        listener,
        router(JokeService::new(names, jokes)),
        std::future::pending(),
    ));
    format!("http://{}/", addr)
}

#[tokio::test]
async fn test_end_to_end_joke_with_real_http() {
    let server = MockServer::start();

    let name_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v0/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"first_name": "John", "last_name": "Doe"}));
    });

    let joke_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/joke")
            .query_param("limitTo", "nerdy")
            .query_param("firstName", "John")
            .query_param("lastName", "Doe");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "type": "success",
                "value": {"id": 42, "joke": "Mocked joke about John Doe"}
            }));
    });

    let url = spawn_against(&server, Duration::from_secs(5)).await;
    let response = reqwest::get(url).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "Mocked joke about John Doe");
    name_mock.assert();
    joke_mock.assert();
}

#[tokio::test]
async fn test_end_to_end_name_service_down() {
    let server = MockServer::start();

    let name_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v0/");
        then.status(500).body("internal error");
    });
    let joke_mock = server.mock(|when, then| {
        when.method(GET).path("/joke");
        then.status(200)
            .json_body(serde_json::json!({"value": {"joke": "unused"}}));
    });

    let url = spawn_against(&server, Duration::from_secs(5)).await;
    let response = reqwest::get(url).await.unwrap();

    assert_eq!(response.status(), 500);
    assert_eq!(response.text().await.unwrap(), "failed to get name");
    name_mock.assert();
    joke_mock.assert_hits(0);
}

#[tokio::test]
async fn test_end_to_end_name_service_returns_html() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/api/v0/");
        then.status(200).body("<html>maintenance</html>");
    });
    let joke_mock = server.mock(|when, then| {
        when.method(GET).path("/joke");
        then.status(200)
            .json_body(serde_json::json!({"value": {"joke": "unused"}}));
    });

    let url = spawn_against(&server, Duration::from_secs(5)).await;
    let response = reqwest::get(url).await.unwrap();

    assert_eq!(response.status(), 500);
    assert_eq!(response.text().await.unwrap(), "failed to get name");
    joke_mock.assert_hits(0);
}

#[tokio::test]
async fn test_end_to_end_joke_service_malformed() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/api/v0/");
        then.status(200)
            .json_body(serde_json::json!({"first_name": "John", "last_name": "Doe"}));
    });
    let joke_mock = server.mock(|when, then| {
        when.method(GET).path("/joke");
        then.status(200).json_body(serde_json::json!({"value": {}}));
    });

    let url = spawn_against(&server, Duration::from_secs(5)).await;
    let response = reqwest::get(url).await.unwrap();

    assert_eq!(response.status(), 500);
    assert_eq!(response.text().await.unwrap(), "failed to get joke");
    joke_mock.assert();
}

#[tokio::test]
async fn test_end_to_end_joke_service_timeout() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/api/v0/");
        then.status(200)
            .json_body(serde_json::json!({"first_name": "John", "last_name": "Doe"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/joke");
        then.status(200)
            .delay(Duration::from_millis(1500))
            .json_body(serde_json::json!({"value": {"joke": "too late"}}));
    });

    let url = spawn_against(&server, Duration::from_millis(300)).await;
    let response = reqwest::get(url).await.unwrap();

    assert_eq!(response.status(), 500);
    assert_eq!(response.text().await.unwrap(), "failed to get joke");
}
