#![allow(clippy::unwrap_used, reason = "Panics simply indicate failed tests.")]

use crate::app_builder::build_app;
use axum::serve;
use bookshelf::{Book, BookStore, build_schema};
use reqwest::{Client, StatusCode, header::CONTENT_TYPE};
use serde_json::{Value, json};
use std::net::SocketAddr;
use tokio::net::TcpListener;

///# Panics
/// Panics if the TCP listener cannot bind to the requested address
/// or if the local address cannot be retrieved.
async fn spawn_app(store: BookStore) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let addrs = listener
        .local_addr()
        .expect("Failed to get local address from listener");
    let service = build_app(build_schema(store));
    drop(tokio::spawn(async move {
        serve(listener, service)
            .await
            .expect("Server failed to start");
    }));

    addrs
}

fn seeded_store() -> BookStore {
    BookStore::new(vec![Book {
        id: 1,
        name: "Dune".to_owned(),
        pages: 412,
        ..Book::default()
    }])
}

/// Send a GraphQL request and return the decoded response body.
async fn post_query(client: &Client, addrs: SocketAddr, query: &str) -> Value {
    let response = client
        .post(format!("http://{addrs}/graphql"))
        .json(&json!({ "query": query }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    response
        .json()
        .await
        .expect("Failed to parse the response")
}

///# Panics
/// Panics if any response deviates from the expected data.
#[tokio::test]
async fn graphql_round_trip() {
    let store = seeded_store();
    let addrs = spawn_app(store.clone()).await;
    let client = Client::new();

    let added = post_query(
        &client,
        addrs,
        r#"mutation { addBook(name: "Foo", pages: 10) { id name pages } }"#,
    )
    .await;
    assert_eq!(
        added,
        json!({ "data": { "addBook": { "id": 6, "name": "Foo", "pages": 10 } } })
    );

    let updated = post_query(
        &client,
        addrs,
        "mutation { updateBook(id: 6, pages: 20) { id name pages } }",
    )
    .await;
    assert_eq!(
        updated,
        json!({ "data": { "updateBook": { "id": 6, "name": "Foo", "pages": 20 } } })
    );

    let listed = post_query(&client, addrs, "{ bookList { id } }").await;
    assert_eq!(
        listed,
        json!({ "data": { "bookList": [{ "id": 1 }, { "id": 6 }] } })
    );
    assert_eq!(store.len(), 2);
}

///# Panics
/// Panics if a request missing a required argument reaches the store.
#[tokio::test]
async fn missing_argument_is_rejected() {
    let store = seeded_store();
    let addrs = spawn_app(store.clone()).await;
    let client = Client::new();

    let body = post_query(&client, addrs, "mutation { addBook(pages: 10) { id } }").await;

    assert!(!body["errors"].as_array().unwrap().is_empty());
    assert_eq!(store.len(), 1);
}

///# Panics
/// Panics if the sandbox page is not served as HTML.
#[tokio::test]
async fn sandbox_is_served() {
    let addrs = spawn_app(BookStore::default()).await;

    let response = Client::new()
        .get(format!("http://{addrs}/sandbox"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[CONTENT_TYPE].to_str().unwrap().to_owned();
    assert!(content_type.starts_with("text/html"));
    let body = response
        .text()
        .await
        .expect("Failed to retrieve response text");
    assert!(body.contains("/graphql"));
}
