#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use aws_apigateway_local::apigateway::{server, state::ApiGatewayState};

pub const ACCOUNT_ID: &str = "123456789012";

pub fn app() -> Router {
    let state = Arc::new(ApiGatewayState::new(
        ACCOUNT_ID.to_string(),
        "us-west-2".to_string(),
    ));
    server::create_router(state)
}

pub async fn request(
    app: &Router,
    method: &str,
    path: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub async fn get(app: &Router, path: &str) -> (StatusCode, Value) {
    request(app, "GET", path, None).await
}

pub async fn post(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    request(app, "POST", path, Some(body)).await
}

pub async fn put(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    request(app, "PUT", path, Some(body)).await
}

pub async fn patch(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    request(app, "PATCH", path, Some(body)).await
}

pub async fn delete(app: &Router, path: &str) -> (StatusCode, Value) {
    request(app, "DELETE", path, None).await
}

/// Create a REST API and return its id and root resource id.
pub async fn create_api(app: &Router, name: &str) -> (String, String) {
    let (status, body) = post(app, "/restapis", serde_json::json!({ "name": name })).await;
    assert_eq!(status, StatusCode::CREATED);
    let api_id = body["id"].as_str().unwrap().to_string();
    let (_, resources) = get(app, &format!("/restapis/{api_id}/resources")).await;
    let root_id = resources["items"][0]["id"].as_str().unwrap().to_string();
    (api_id, root_id)
}

/// Create a deployment bound to a stage, returning the deployment id.
pub async fn deploy_stage(app: &Router, api_id: &str, stage_name: &str) -> String {
    let (status, body) = post(
        app,
        &format!("/restapis/{api_id}/deployments"),
        serde_json::json!({ "stageName": stage_name }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}
