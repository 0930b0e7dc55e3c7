use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use peptide_proxy::server::{self, handlers::AppState};
use serde_json::Value;
use std::sync::Arc;

use super::mocks::MockInferenceClient;

/// Build the application router around a mock inference client
pub fn create_test_app(client: MockInferenceClient) -> Router {
    create_test_app_with_limit(client, None)
}

/// Build the application router with a POST body limit
pub fn create_test_app_with_limit(client: MockInferenceClient, max_body_bytes: Option<usize>) -> Router {
    server::router(AppState {
        inference: Arc::new(client),
        max_body_bytes,
    })
}

/// Build a POST request to `/` carrying a raw body
pub fn post(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read the whole response body as text
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Read the whole response body as JSON
pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}
