use esbind_core::{
    ActionError, Arguments, Client, HttpTransport, transport::http::HttpTransportError,
};
use serde_json::json;
use wiremock::matchers::{any, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_bulk_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/books/_bulk"))
        .and(query_param("refresh", "true"))
        .and(header("content-type", "application/x-ndjson"))
        .and(body_string(
            "{\"index\":{\"_id\":1}}\n{\"title\":\"Dune\"}\n",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "errors": false })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::connect(&server.uri()).unwrap();

    let res = client
        .bulk(
            &Arguments::new()
                .arg("index", "books")
                .arg("refresh", true)
                .body(json!([{ "index": { "_id": 1 } }, { "title": "Dune" }])),
        )
        .await
        .unwrap();

    assert_eq!(res, json!({ "errors": false }));
}

#[tokio::test]
async fn test_escaped_identifiers_and_list_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/my%20index/_doc/a%2Fb"))
        .and(query_param("_source_includes", "title,year"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "found": true })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::connect(&server.uri()).unwrap();

    let res = client
        .get(
            &Arguments::new()
                .arg("index", "my index")
                .arg("id", "a/b")
                .arg("_source_includes", json!(["title", "year"])),
        )
        .await
        .unwrap();

    assert_eq!(res["found"], json!(true));
}

#[tokio::test]
async fn test_cat_text_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_cat/shards"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("books 0 p STARTED 1 4kb 127.0.0.1 node-1\n"),
        )
        .mount(&server)
        .await;

    let client = Client::connect(&server.uri()).unwrap();

    let res = client.cat().shards(&Arguments::new()).await.unwrap();

    assert_eq!(res, json!("books 0 p STARTED 1 4kb 127.0.0.1 node-1\n"));
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/_ml/data_frame/analytics/nope"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "error": { "type": "resource_not_found_exception" } })),
        )
        .mount(&server)
        .await;

    let client = Client::connect(&server.uri()).unwrap();

    let err = client
        .ml()
        .delete_data_frame_analytics(&Arguments::new().arg("id", "nope"))
        .await
        .unwrap_err();

    match err {
        ActionError::Transport(HttpTransportError::Status { status, body }) => {
            assert_eq!(status, 404);
            assert_eq!(body["error"]["type"], "resource_not_found_exception");
        }
        other => panic!("Expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_ignored_status_is_returned() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/books"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "status": 404 })))
        .mount(&server)
        .await;

    let client = Client::connect(&server.uri()).unwrap();

    let res = client
        .indices()
        .delete(&Arguments::new().arg("index", "books").arg("ignore", 404))
        .await
        .unwrap();

    assert_eq!(res, json!({ "status": 404 }));
}

#[tokio::test]
async fn test_exists_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/books/_doc/1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/books/_doc/2"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = Client::connect(&server.uri()).unwrap();
    let doc = Arguments::new().arg("index", "books");

    assert!(client.exists(&doc.clone().arg("id", 1)).await.unwrap());
    assert!(!client.exists(&doc.clone().arg("id", 2)).await.unwrap());
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("authorization", "ApiKey abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "node-1" })))
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpTransport::new(&server.uri())
        .unwrap()
        .with_default_headers(vec![("Authorization".to_string(), "ApiKey abc".to_string())]);
    let client = Client::new(transport);

    let res = client.info(&Arguments::new()).await.unwrap();

    assert_eq!(res["name"], "node-1");
}

#[tokio::test]
async fn test_dot_identifiers_are_never_sent() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "acknowledged": true })))
        .expect(0)
        .mount(&server)
        .await;

    let client = Client::connect(&server.uri()).unwrap();

    for id in ["..", ".", "%2e%2E"] {
        let err = client
            .delete(&Arguments::new().arg("index", "books").arg("id", id))
            .await
            .unwrap_err();

        assert!(
            matches!(
                err,
                ActionError::Transport(HttpTransportError::DotSegment { .. })
            ),
            "{id} was not rejected: {err:?}"
        );
    }

    let err = client
        .indices()
        .delete(&Arguments::new().arg("index", ".."))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ActionError::Transport(HttpTransportError::DotSegment { .. })
    ));
}
