//! End-to-end tests through `HyperClient` using wiremock.

#![allow(missing_docs)]

use std::sync::Arc;

use grapnel::{
    CallContext, ClientDescriptor, Dispatcher, FormBody, Headers, HyperClient, Json, JsonBody,
    PathVars, Query, Registry, Result, Status,
};
use serde::{Deserialize, Serialize};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, body_string, header, method, path, query_param},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct User {
    id: u64,
    name: String,
}

fn user_registry(domain: &str) -> Registry {
    let mut registry = Registry::new();
    registry.register(Arc::new(
        ClientDescriptor::new("users", domain)
            .endpoint("get", "GET", "/users/{id}")
            .endpoint("search", "GET", "/users")
            .endpoint("create", "POST", "/users")
            .endpoint("login", "POST", "/login")
            .endpoint("delete", "DELETE", "/users/{id}"),
    ));
    registry
}

#[tokio::test]
async fn get_user_by_path_variable() {
    let mock_server = MockServer::start().await;
    let user = User {
        id: 42,
        name: "Alice".to_string(),
    };

    Mock::given(method("GET"))
        .and(path("/users/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&user))
        .mount(&mock_server)
        .await;

    let dispatcher =
        Dispatcher::wire(user_registry(&mock_server.uri()), HyperClient::new()).expect("wire");

    let endpoint = dispatcher.endpoint("users", "get").expect("wired");
    let Json(found): Json<User> = endpoint
        .invoke([PathVars::new().set("id", "42").into()])
        .await
        .expect("invoke");

    assert_eq!(found, user);
}

#[tokio::test]
async fn post_json_body() {
    let mock_server = MockServer::start().await;
    let input = User {
        id: 0,
        name: "Bob".to_string(),
    };
    let output = User {
        id: 7,
        name: "Bob".to_string(),
    };

    Mock::given(method("POST"))
        .and(path("/users"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(&input))
        .respond_with(ResponseTemplate::new(201).set_body_json(&output))
        .mount(&mock_server)
        .await;

    let dispatcher =
        Dispatcher::wire(user_registry(&mock_server.uri()), HyperClient::new()).expect("wire");

    let endpoint = dispatcher.endpoint("users", "create").expect("wired");
    let (status, Json(created)): (Status, Json<User>) = endpoint
        .invoke([JsonBody::new(input).into()])
        .await
        .expect("invoke");

    assert_eq!(status, Status(201));
    assert_eq!(created, output);
}

#[tokio::test]
async fn post_url_encoded_form() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string("username=alice&password=secret"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let dispatcher =
        Dispatcher::wire(user_registry(&mock_server.uri()), HyperClient::new()).expect("wire");

    let endpoint = dispatcher.endpoint("users", "login").expect("wired");
    let status: Status = endpoint
        .invoke([
            FormBody::new()
                .field("username", "alice")
                .field("password", "secret")
                .into(),
        ])
        .await
        .expect("invoke");

    assert_eq!(status, Status(204));
}

#[tokio::test]
async fn query_parameters_and_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("q", "rust"))
        .and(query_param("page", "1"))
        .and(header("Authorization", "Bearer token123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Vec::<User>::new()))
        .mount(&mock_server)
        .await;

    let dispatcher =
        Dispatcher::wire(user_registry(&mock_server.uri()), HyperClient::new()).expect("wire");

    let endpoint = dispatcher.endpoint("users", "search").expect("wired");
    let Json(users): Json<Vec<User>> = endpoint
        .invoke([
            Query::new().add("q", "rust").add("page", "1").into(),
            Headers::new().set("Authorization", "Bearer token123").into(),
        ])
        .await
        .expect("invoke");

    assert!(users.is_empty());
}

#[tokio::test]
async fn delete_yields_status_and_headers_without_decode() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/users/9"))
        .respond_with(ResponseTemplate::new(204).insert_header("X-Request-Id", "abc"))
        .mount(&mock_server)
        .await;

    let dispatcher =
        Dispatcher::wire(user_registry(&mock_server.uri()), HyperClient::new()).expect("wire");

    let endpoint = dispatcher.endpoint("users", "delete").expect("wired");
    let (status, headers): (Status, Headers) = endpoint
        .invoke([PathVars::new().set("id", "9").into()])
        .await
        .expect("invoke");

    assert_eq!(status, Status(204));
    assert_eq!(headers.get("x-request-id"), Some("abc"));
}

#[tokio::test]
async fn call_deadline_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let dispatcher =
        Dispatcher::wire(user_registry(&mock_server.uri()), HyperClient::new()).expect("wire");

    let endpoint = dispatcher.endpoint("users", "get").expect("wired");
    let result: Result<Status> = endpoint
        .invoke([
            PathVars::new().set("id", "1").into(),
            CallContext::new()
                .with_deadline(std::time::Duration::from_millis(100))
                .into(),
        ])
        .await;

    let err = result.expect_err("expected timeout");
    assert!(err.is_timeout(), "expected timeout error, got: {err}");
}

#[tokio::test]
async fn connection_failure_maps_to_transport_error() {
    let dispatcher =
        Dispatcher::wire(user_registry("http://127.0.0.1:1"), HyperClient::new()).expect("wire");

    let endpoint = dispatcher.endpoint("users", "get").expect("wired");
    let result: Result<Json<User>> = endpoint
        .invoke([PathVars::new().set("id", "1").into()])
        .await;

    let err = result.expect_err("expected connection error");
    assert!(err.is_connection(), "expected connection error, got: {err}");
}

#[tokio::test]
async fn decode_failure_maps_to_decoding_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let dispatcher =
        Dispatcher::wire(user_registry(&mock_server.uri()), HyperClient::new()).expect("wire");

    let endpoint = dispatcher.endpoint("users", "get").expect("wired");
    let result: Result<Json<User>> = endpoint
        .invoke([PathVars::new().set("id", "1").into()])
        .await;

    let err = result.expect_err("expected decoding error");
    assert!(err.is_decoding(), "expected decoding error, got: {err}");
}
