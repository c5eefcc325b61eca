//! Integration tests for operation dispatch using wiremock.

use assert2::{check, let_assert};
use bytes::Bytes;
use clasp::{
    BodyKind, Client, ClientConfig, ClientError, Codec, Error, HyperClient, Json, JsonCodec,
    Method, Operation, OperationDescriptor, Response, Result, from_json, to_json,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Tag {
    name: String,
}

struct ListTags;

impl Operation for ListTags {
    type Input = ();
    type Output = Json<Vec<Tag>>;

    const DESCRIPTOR: &'static OperationDescriptor =
        &OperationDescriptor::new("list_tags", Method::Get, "/tags")
            .response_body(BodyKind::Encoded);
}

struct CreateTag;

impl Operation for CreateTag {
    type Input = Tag;
    type Output = ();

    const DESCRIPTOR: &'static OperationDescriptor =
        &OperationDescriptor::new("create_tag", Method::Post, "/tags")
            .headers(&[("Content-Type", "application/json")])
            .request_body(BodyKind::Encoded);
}

fn client(server: &MockServer) -> Client {
    let config = ClientConfig::builder()
        .base_url(server.uri())
        .build()
        .expect("config");
    Client::connect(config)
}

fn tag(name: &str) -> Tag {
    Tag {
        name: name.to_string(),
    }
}

#[tokio::test]
async fn list_decodes_success_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tags"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![tag("rust"), tag("http")]))
        .expect(1)
        .mount(&server)
        .await;

    let Json(tags) = client(&server).invoke::<ListTags>(&()).await.expect("list");

    check!(tags == vec![tag("rust"), tag("http")]);
}

#[tokio::test]
async fn create_sends_encoded_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tags"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(tag("rust")))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .invoke::<CreateTag>(&tag("rust"))
        .await
        .expect("create");
}

#[tokio::test]
async fn client_error_is_decoded_with_original_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tags"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(serde_json::json!({"message": "name is blank"})),
        )
        .mount(&server)
        .await;

    let result = client(&server).invoke::<CreateTag>(&tag("")).await;

    let_assert!(Err(Error::Application { status, error }) = result);
    check!(status == 422);
    check!(error.message() == Some("name is blank"));
}

#[tokio::test]
async fn server_error_with_message_is_decoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tags"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({"message": "database down"})),
        )
        .mount(&server)
        .await;

    let err = client(&server)
        .invoke::<ListTags>(&())
        .await
        .expect_err("server error");

    check!(err.is_application());
    check!(err.status() == Some(500));
    check!(err.remote_message() == Some("database down"));
}

#[tokio::test]
async fn null_message_is_an_explicit_absence() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tags"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"message": null})),
        )
        .mount(&server)
        .await;

    let result = client(&server).invoke::<ListTags>(&()).await;

    let_assert!(Err(Error::Application { status, error }) = result);
    check!(status == 404);
    check!(error == ClientError::without_message());
}

#[tokio::test]
async fn non_json_error_body_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tags"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let result = client(&server).invoke::<ListTags>(&()).await;

    let_assert!(Err(Error::OpaqueRemote { status, message }) = result);
    check!(status == 502);
    check!(message == "list_tags GET /tags failed with status 502");
}

#[tokio::test]
async fn bare_string_error_body_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tags"))
        .respond_with(ResponseTemplate::new(500).set_body_json("internal error"))
        .mount(&server)
        .await;

    let err = client(&server)
        .invoke::<ListTags>(&())
        .await
        .expect_err("server error");

    check!(err.is_opaque_remote());
    check!(err.status() == Some(500));
}

#[tokio::test]
async fn empty_error_body_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tags"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let err = client(&server)
        .invoke::<CreateTag>(&tag("rust"))
        .await
        .expect_err("conflict");

    check!(err.is_opaque_remote());
    check!(err.status() == Some(409));
}

#[tokio::test]
async fn undecodable_success_body_is_a_codec_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"tags": []})))
        .mount(&server)
        .await;

    let result = client(&server).invoke::<ListTags>(&()).await;

    let_assert!(Err(Error::JsonDeserialization { .. }) = result);
}

#[tokio::test]
async fn transport_failure_is_not_normalized() {
    let config = ClientConfig::builder()
        .base_url("http://127.0.0.1:1")
        .build()
        .expect("config");

    let err = Client::connect(config)
        .invoke::<ListTags>(&())
        .await
        .expect_err("connection error");

    check!(err.is_connection());
    check!(err.status().is_none());
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Vec::<Tag>::new()))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .base_url(format!("{}/api/v1/", server.uri()))
        .build()
        .expect("config");

    let Json(tags) = Client::connect(config)
        .invoke::<ListTags>(&())
        .await
        .expect("list");
    check!(tags.is_empty());
}

#[tokio::test]
async fn base_url_query_stays_a_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .and(query_param("key", "v"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Vec::<Tag>::new()))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .base_url(format!("{}/api?key=v", server.uri()))
        .build()
        .expect("config");

    Client::connect(config)
        .invoke::<ListTags>(&())
        .await
        .expect("list");
}

/// JSON codec that decodes bodies whatever their status.
#[derive(Debug, Clone, Copy, Default)]
struct AnyStatusCodec;

impl Codec for AnyStatusCodec {
    fn media_type(&self) -> &'static str {
        JsonCodec.media_type()
    }

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Bytes> {
        to_json(value)
    }

    fn decode<T: DeserializeOwned>(&self, response: &Response<Bytes>) -> Result<Option<T>> {
        if response.body().is_empty() {
            return Ok(None);
        }
        from_json(response.body()).map(Some)
    }

    fn decodes_only_success(&self) -> bool {
        false
    }
}

#[tokio::test]
async fn custom_codec_sees_original_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tags"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(serde_json::json!({"message": "forbidden"})),
        )
        .mount(&server)
        .await;

    let url = url::Url::parse(&server.uri()).expect("url");
    let client = Client::new(HyperClient::new(), url, AnyStatusCodec);

    let err = client
        .invoke::<ListTags>(&())
        .await
        .expect_err("forbidden");

    check!(err.status() == Some(403));
    check!(err.remote_message() == Some("forbidden"));
}

#[tokio::test]
async fn clients_share_one_transport() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![tag("a")]))
        .expect(4)
        .mount(&server)
        .await;

    let url = url::Url::parse(&server.uri()).expect("url");
    let client = Client::new(HyperClient::new(), url, JsonCodec);

    let calls = (0..4).map(|_| {
        let client = client.clone();
        tokio::spawn(async move { client.invoke::<ListTags>(&()).await })
    });
    for call in calls.collect::<Vec<_>>() {
        let Json(tags) = call.await.expect("join").expect("list");
        check!(tags == vec![tag("a")]);
    }
}
