//! End-to-end tests for the resource wrappers over the real HTTP client.
//!
//! Each test starts a mock M2X server, points an [`M2xClient`] at it and
//! checks the method, path, query and body that reach the wire.

use m2x::rest::{CrudResource, MetadataResource, Params, ResourceError};
use m2x::{ApiKey, BaseUrl, HttpError, M2xClient, M2xConfig};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn params(value: Value) -> Params {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

fn client_for(server: &MockServer) -> M2xClient {
    let config = M2xConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    M2xClient::new(&config).unwrap()
}

// ============================================================================
// Collections
// ============================================================================

#[tokio::test]
async fn test_collection_lifecycle() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("POST"))
        .and(path("/v2/collections"))
        .and(header("X-M2X-KEY", "test-key"))
        .and(body_json(json!({"name": "fleet"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "c1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/collections/c1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "c1", "name": "fleet"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v2/collections/c1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .collections()
        .create(params(json!({"name": "fleet"})))
        .await
        .unwrap();
    assert_eq!(created.code, 201);
    assert_eq!(created.body["id"], "c1");

    let viewed = client.collections().view("c1").await.unwrap();
    assert_eq!(viewed.body["name"], "fleet");

    let deleted = client.collections().delete("c1").await.unwrap();
    assert_eq!(deleted.code, 204);
    assert_eq!(deleted.body, json!({}));
}

#[tokio::test]
async fn test_collection_list_passes_query() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/v2/collections"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"collections": []})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .collections()
        .list(Some(params(json!({"page": 2}))))
        .await
        .unwrap();

    assert_eq!(response.body, json!({"collections": []}));
}

#[tokio::test]
async fn test_collection_device_membership() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("PUT"))
        .and(path("/v2/collections/c1/devices/d1"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v2/collections/c1/devices/d1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.collections().add_device("c1", "d1").await.unwrap();
    client.collections().remove_device("c1", "d1").await.unwrap();
}

#[tokio::test]
async fn test_collection_metadata_field_update() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("PUT"))
        .and(path("/v2/collections/c1/metadata/x"))
        .and(body_json(json!({"value": 42})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client
        .collections()
        .update_metadata_field("c1", "x", json!(42))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_collection_keys_and_delegated_create() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/v2/keys"))
        .and(query_param("collection", "c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"keys": []})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/keys"))
        .and(body_json(json!({"name": "k", "collection": "c1"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"key": "abc"})))
        .expect(1)
        .mount(&server)
        .await;

    client.collections().keys("c1").await.unwrap();
    let created = client
        .collections()
        .create_key("c1", Some(params(json!({"name": "k", "collection": "zzz"}))))
        .await
        .unwrap();

    assert_eq!(created.body["key"], "abc");
}

// ============================================================================
// Devices, keys and utilities
// ============================================================================

#[tokio::test]
async fn test_device_stream_and_updates() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    let updates = json!({
        "values": {"temperature": [{"timestamp": "2014-09-09T19:15:00Z", "value": 21}]}
    });

    Mock::given(method("PUT"))
        .and(path("/v2/devices/d1/streams/temperature"))
        .and(body_json(json!({"unit": {"label": "celsius"}})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/devices/d1/updates"))
        .and(body_json(updates.clone()))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    client
        .devices()
        .update_stream(
            "d1",
            "temperature",
            Some(params(json!({"unit": {"label": "celsius"}}))),
        )
        .await
        .unwrap();
    let response = client
        .devices()
        .post_updates("d1", params(updates))
        .await
        .unwrap();

    assert_eq!(response.code, 202);
}

#[tokio::test]
async fn test_key_regenerate() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("POST"))
        .and(path("/v2/keys/abc/regenerate"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"key": "def"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.keys().regenerate("abc").await.unwrap();
    assert_eq!(response.body["key"], "def");
}

#[tokio::test]
async fn test_utils_time() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/v2/time"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "seconds": 1_400_000_000,
            "millis": 1_400_000_000_000_u64,
            "iso8601": "2014-05-13T16:53:20.000Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.utils().time().await.unwrap();
    assert_eq!(response.body["seconds"], 1_400_000_000);
}

#[tokio::test]
async fn test_utils_time_iso8601_returns_plain_text() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/v2/time/iso8601"))
        .respond_with(ResponseTemplate::new(200).set_body_string("2014-10-22T00:19:03.123Z"))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.utils().time_iso8601().await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.body, json!("2014-10-22T00:19:03.123Z"));
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_api_errors_surface_as_http_errors() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/v2/devices/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("X-Request-Id", "req-404")
                .set_body_json(json!({"message": "Resource not found"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let error = client.devices().view("missing").await.unwrap_err();

    assert_eq!(error.status(), Some(404));
    assert_eq!(error.request_id(), Some("req-404"));
    assert!(matches!(error, ResourceError::Http(HttpError::Response(_))));
    assert!(error.to_string().contains("Resource not found"));
}

#[tokio::test]
async fn test_missing_identifier_never_reaches_server() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = client.devices().metadata_field("d1", "").await;

    assert!(matches!(
        result,
        Err(ResourceError::MissingIdentifier { name: "field", .. })
    ));
}
