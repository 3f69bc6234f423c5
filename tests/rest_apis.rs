mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{app, delete, get, patch, post};

#[tokio::test]
async fn create_rest_api_returns_defaults() {
    let app = app();
    let (status, body) = post(&app, "/restapis", json!({ "name": "my_api" })).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"].as_str().unwrap().len(), 10);
    assert_eq!(body["name"], "my_api");
    assert_eq!(body["version"], "V1");
    assert_eq!(body["binaryMediaTypes"], json!([]));
    assert_eq!(body["apiKeySource"], "HEADER");
    assert_eq!(body["endpointConfiguration"], json!({ "types": ["EDGE"] }));
    assert_eq!(body["tags"], json!({}));
    assert_eq!(body["disableExecuteApiEndpoint"], false);
    assert!(body["createdDate"].as_f64().is_some());
    assert!(body.get("description").is_none());
    assert!(body.get("policy").is_none());
}

#[tokio::test]
async fn create_rest_api_with_all_fields() {
    let app = app();
    let (status, body) = post(
        &app,
        "/restapis",
        json!({
            "name": "my_api",
            "description": "this is my api",
            "version": "2.0",
            "binaryMediaTypes": ["image/png"],
            "apiKeySource": "AUTHORIZER",
            "endpointConfiguration": { "types": ["REGIONAL"] },
            "policy": "{\"Version\": \"2012-10-17\"}",
            "tags": { "team": "platform" }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["description"], "this is my api");
    assert_eq!(body["version"], "2.0");
    assert_eq!(body["binaryMediaTypes"], json!(["image/png"]));
    assert_eq!(body["apiKeySource"], "AUTHORIZER");
    assert_eq!(body["endpointConfiguration"]["types"], json!(["REGIONAL"]));
    assert_eq!(body["policy"], "{\"Version\": \"2012-10-17\"}");
    assert_eq!(body["tags"]["team"], "platform");
}

#[tokio::test]
async fn create_rest_api_rejects_bad_api_key_source() {
    let app = app();
    let (status, body) = post(
        &app,
        "/restapis",
        json!({ "name": "my_api", "apiKeySource": "QUERY" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "1 validation error detected: Value 'QUERY' at 'createRestApiInput.apiKeySource' \
         failed to satisfy constraint: Member must satisfy enum value set: [AUTHORIZER, HEADER]"
    );
}

#[tokio::test]
async fn create_rest_api_rejects_bad_endpoint_type() {
    let app = app();
    let (status, body) = post(
        &app,
        "/restapis",
        json!({ "name": "my_api", "endpointConfiguration": { "types": ["GLOBAL"] } }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "1 validation error detected: Value '[GLOBAL]' at \
         'createRestApiInput.endpointConfiguration.types' failed to satisfy constraint: \
         Member must satisfy enum value set: [PRIVATE, EDGE, REGIONAL]"
    );
}

#[tokio::test]
async fn list_and_get_rest_apis() {
    let app = app();
    let (_, a) = post(&app, "/restapis", json!({ "name": "my_api" })).await;
    let (_, b) = post(&app, "/restapis", json!({ "name": "my_api2" })).await;

    let (status, list) = get(&app, "/restapis").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["items"].as_array().unwrap().len(), 2);

    let (status, fetched) = get(&app, &format!("/restapis/{}", a["id"].as_str().unwrap())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "my_api");
    assert_eq!(fetched["id"], a["id"]);
    assert_ne!(a["id"], b["id"]);
}

#[tokio::test]
async fn get_unknown_rest_api_is_not_found() {
    let app = app();
    let (status, body) = get(&app, "/restapis/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Invalid REST API identifier specified");
}

#[tokio::test]
async fn delete_rest_api() {
    let app = app();
    let (_, created) = post(&app, "/restapis", json!({ "name": "my_api" })).await;
    let api_id = created["id"].as_str().unwrap();

    let (status, _) = delete(&app, &format!("/restapis/{api_id}")).await;
    assert_eq!(status, StatusCode::ACCEPTED);

    let (status, _) = get(&app, &format!("/restapis/{api_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_rest_api_replace_operations() {
    let app = app();
    let (_, created) = post(&app, "/restapis", json!({ "name": "my_api" })).await;
    let api_id = created["id"].as_str().unwrap();

    let (status, body) = patch(
        &app,
        &format!("/restapis/{api_id}"),
        json!({
            "patchOperations": [
                { "op": "replace", "path": "/name", "value": "new-name" },
                { "op": "replace", "path": "/description", "value": "new description" },
                { "op": "replace", "path": "/apiKeySource", "value": "AUTHORIZER" },
                { "op": "replace", "path": "/disableExecuteApiEndpoint", "value": "True" }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "new-name");
    assert_eq!(body["description"], "new description");
    assert_eq!(body["apiKeySource"], "AUTHORIZER");
    assert_eq!(body["disableExecuteApiEndpoint"], true);
}

#[tokio::test]
async fn update_rest_api_binary_media_types() {
    let app = app();
    let (_, created) = post(&app, "/restapis", json!({ "name": "my_api" })).await;
    let api_id = created["id"].as_str().unwrap();

    let (_, body) = patch(
        &app,
        &format!("/restapis/{api_id}"),
        json!({ "patchOperations": [
            { "op": "add", "path": "/binaryMediaTypes", "value": "image/png" },
            { "op": "add", "path": "/binaryMediaTypes", "value": "image/jpeg" }
        ]}),
    )
    .await;
    assert_eq!(body["binaryMediaTypes"], json!(["image/png", "image/jpeg"]));

    let (_, body) = patch(
        &app,
        &format!("/restapis/{api_id}"),
        json!({ "patchOperations": [
            { "op": "remove", "path": "/binaryMediaTypes", "value": "image/png" }
        ]}),
    )
    .await;
    assert_eq!(body["binaryMediaTypes"], json!(["image/jpeg"]));

    let (_, body) = patch(
        &app,
        &format!("/restapis/{api_id}"),
        json!({ "patchOperations": [
            { "op": "replace", "path": "/binaryMediaTypes", "value": "application/octet-stream" }
        ]}),
    )
    .await;
    assert_eq!(body["binaryMediaTypes"], json!(["application/octet-stream"]));
}

#[tokio::test]
async fn update_rest_api_remove_description_clears_it() {
    let app = app();
    let (_, created) = post(
        &app,
        "/restapis",
        json!({ "name": "my_api", "description": "this is my api" }),
    )
    .await;
    let api_id = created["id"].as_str().unwrap();

    let (_, body) = patch(
        &app,
        &format!("/restapis/{api_id}"),
        json!({ "patchOperations": [{ "op": "remove", "path": "/description" }] }),
    )
    .await;
    assert_eq!(body["description"], "");
}

#[tokio::test]
async fn update_rest_api_validates_api_key_source_value() {
    let app = app();
    let (_, created) = post(&app, "/restapis", json!({ "name": "my_api" })).await;
    let api_id = created["id"].as_str().unwrap();

    let (status, body) = patch(
        &app,
        &format!("/restapis/{api_id}"),
        json!({ "patchOperations": [
            { "op": "replace", "path": "/apiKeySource", "value": "QUERY" }
        ]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("[AUTHORIZER, HEADER]"));
}

#[tokio::test]
async fn update_rest_api_rejects_unknown_patch_path() {
    let app = app();
    let (_, created) = post(&app, "/restapis", json!({ "name": "my_api" })).await;
    let api_id = created["id"].as_str().unwrap();

    let (status, body) = patch(
        &app,
        &format!("/restapis/{api_id}"),
        json!({ "patchOperations": [
            { "op": "replace", "path": "/notasetting", "value": "x" }
        ]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid patch path '/notasetting'");
}

#[tokio::test]
async fn update_unknown_rest_api_is_not_found() {
    let app = app();
    let (status, _) = patch(
        &app,
        "/restapis/unknown",
        json!({ "patchOperations": [{ "op": "replace", "path": "/name", "value": "x" }] }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
