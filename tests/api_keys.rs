mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{app, delete, get, patch, post};

#[tokio::test]
async fn create_api_key_generates_a_value() {
    let app = app();
    let (status, body) = post(&app, "/apikeys", json!({ "name": "my-key" })).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "my-key");
    assert_eq!(body["enabled"], false);
    assert_eq!(body["stageKeys"], json!([]));
    assert!(body["value"].as_str().unwrap().len() >= 20);
    assert!(body["createdDate"].as_f64().is_some());
    assert!(body["lastUpdatedDate"].as_f64().is_some());
}

#[tokio::test]
async fn api_key_value_must_be_at_least_twenty_characters() {
    let app = app();
    let (status, body) = post(
        &app,
        "/apikeys",
        json!({ "name": "my-key", "value": "short" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "API Key value should be at least 20 characters"
    );
}

#[tokio::test]
async fn duplicate_name_and_value_conflicts() {
    let app = app();
    let key = json!({ "name": "my-key", "value": "12345678901234567890" });
    let (status, _) = post(&app, "/apikeys", key.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post(&app, "/apikeys", key).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "API Key already exists");
}

#[tokio::test]
async fn value_is_hidden_unless_requested() {
    let app = app();
    let (_, created) = post(
        &app,
        "/apikeys",
        json!({ "name": "my-key", "value": "12345678901234567890" }),
    )
    .await;
    let key_id = created["id"].as_str().unwrap();

    let (status, body) = get(&app, &format!("/apikeys/{key_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("value").is_none());

    let (_, body) = get(&app, &format!("/apikeys/{key_id}?includeValue=true")).await;
    assert_eq!(body["value"], "12345678901234567890");

    let (_, list) = get(&app, "/apikeys").await;
    assert!(list["items"][0].get("value").is_none());

    let (_, list) = get(&app, "/apikeys?includeValues=true").await;
    assert_eq!(list["items"][0]["value"], "12345678901234567890");
}

#[tokio::test]
async fn list_api_keys() {
    let app = app();
    post(&app, "/apikeys", json!({ "name": "key1" })).await;
    post(&app, "/apikeys", json!({ "name": "key2" })).await;

    let (status, list) = get(&app, "/apikeys").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn update_api_key() {
    let app = app();
    let (_, created) = post(&app, "/apikeys", json!({ "name": "my-key" })).await;
    let key_id = created["id"].as_str().unwrap();

    let (status, body) = patch(
        &app,
        &format!("/apikeys/{key_id}"),
        json!({ "patchOperations": [
            { "op": "replace", "path": "/name", "value": "renamed" },
            { "op": "replace", "path": "/description", "value": "the key" },
            { "op": "replace", "path": "/enabled", "value": "true" },
            { "op": "replace", "path": "/customerId", "value": "cust-1" }
        ]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "renamed");
    assert_eq!(body["description"], "the key");
    assert_eq!(body["enabled"], true);
    assert_eq!(body["customerId"], "cust-1");
}

#[tokio::test]
async fn update_api_key_rejects_unknown_patch_path() {
    let app = app();
    let (_, created) = post(&app, "/apikeys", json!({ "name": "my-key" })).await;
    let key_id = created["id"].as_str().unwrap();

    let (status, _) = patch(
        &app,
        &format!("/apikeys/{key_id}"),
        json!({ "patchOperations": [{ "op": "replace", "path": "/value", "value": "x" }] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_api_key() {
    let app = app();
    let (_, created) = post(&app, "/apikeys", json!({ "name": "my-key" })).await;
    let key_id = created["id"].as_str().unwrap();

    let (status, _) = delete(&app, &format!("/apikeys/{key_id}")).await;
    assert_eq!(status, StatusCode::ACCEPTED);

    let (status, body) = get(&app, &format!("/apikeys/{key_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Invalid API Key identifier specified");
}
