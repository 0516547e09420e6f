use serde_json::{json, Value};
use stash_rest::{BlockingClient, ConnectionInfo, Error, StatusCode};
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn connection(server: &MockServer) -> ConnectionInfo {
    let address = server.address();
    ConnectionInfo::new("http", address.port()).host(address.ip())
}

/// Run `f` with a blocking client outside of the async runtime that drives the mock server.
async fn with_blocking_client<T, F>(info: ConnectionInfo, f: F) -> T
where
    F: FnOnce(&BlockingClient) -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let client = BlockingClient::new(&info).unwrap();
        f(&client)
    })
    .await
    .unwrap()
}

// Compare these with their namesake from `mock_server.rs`.

#[tokio::test(flavor = "multi_thread")]
async fn get_returns_parsed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tags"))
        .and(header("cookie", "session=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tags": []})))
        .expect(1)
        .mount(&server)
        .await;

    let info = connection(&server).session_cookie("abc");
    let value = with_blocking_client(info, |c| c.get("/tags")).await.unwrap();
    assert_eq!(value, json!({"tags": []}));
}

#[tokio::test(flavor = "multi_thread")]
async fn no_content_returns_null() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/tags/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let value = with_blocking_client(connection(&server), |c| c.delete("/tags/1", None))
        .await
        .unwrap();
    assert_eq!(value, Value::Null);
}

#[tokio::test(flavor = "multi_thread")]
async fn error_status_returns_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/scenes/query"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let error = with_blocking_client(connection(&server), |c| c.find_scenes(None, None))
        .await
        .unwrap_err();
    let Error::Api(error) = error else {
        panic!("Expected an API error, got {error:?}");
    };
    assert_eq!(error.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error.body, "boom");
    assert_eq!(error.path, "/scenes/query");
}

#[tokio::test(flavor = "multi_thread")]
async fn find_tag_by_name_requires_exact_match() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/tags/query"))
        .and(body_json(json!({"filter": {"q": "Foo", "per_page": -1}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tags": [
            {"id": "1", "name": "Foobar"},
            {"id": "2", "name": "Foo"},
        ]})))
        .mount(&server)
        .await;

    let id = with_blocking_client(connection(&server), |c| c.find_tag_by_name("Foo"))
        .await
        .unwrap();
    assert_eq!(id, Some(json!("2")));
}

#[tokio::test(flavor = "multi_thread")]
async fn metadata_scan_sends_paths() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/metadata/scan"))
        .and(body_json(json!({"paths": ["/media"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"job_id": "4"}})))
        .expect(1)
        .mount(&server)
        .await;

    let handle = with_blocking_client(connection(&server), |c| c.metadata_scan(["/media"]))
        .await
        .unwrap();
    assert_eq!(handle["data"]["job_id"], "4");
}
