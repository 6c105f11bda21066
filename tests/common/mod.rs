//! Shared utilities for integration tests.

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use pokedex_shell::{app_routes, HttpServer, SelectionStore, ShellConfig};

/// Build the shell app, returning a handle on its store as well.
pub fn app() -> (Router, SelectionStore) {
    let store = SelectionStore::new();
    let server = HttpServer::new(
        ShellConfig::default(),
        app_routes().expect("app routes compile"),
        store.clone(),
    );
    (server.app(), store)
}

/// Send a request through the app without a network listener.
pub async fn send(
    app: &Router,
    method: Method,
    path: &str,
    json: Option<&str>,
) -> (StatusCode, axum::http::HeaderMap, String) {
    let mut builder = Request::builder().method(method).uri(path);
    let body = match json {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

#[allow(dead_code)]
pub async fn get(app: &Router, path: &str) -> (StatusCode, String) {
    let (status, _, body) = send(app, Method::GET, path, None).await;
    (status, body)
}
