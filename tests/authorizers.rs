mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{app, create_api, delete, get, patch, post};

#[tokio::test]
async fn create_authorizer_with_defaults() {
    let app = app();
    let (api_id, _) = create_api(&app, "my_api").await;

    let (status, body) = post(
        &app,
        &format!("/restapis/{api_id}/authorizers"),
        json!({
            "name": "my_authorizer",
            "type": "COGNITO_USER_POOLS",
            "providerARNs": ["arn:aws:cognito-idp:us-west-2:123456789012:userpool/us-west-2_x"]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"].as_str().unwrap().len(), 10);
    assert_eq!(body["name"], "my_authorizer");
    assert_eq!(body["type"], "COGNITO_USER_POOLS");
    assert_eq!(body["authorizerResultTtlInSeconds"], 300);
    assert!(body.get("createdDate").is_none());
}

#[tokio::test]
async fn list_authorizers_and_get_one() {
    let app = app();
    let (api_id, _) = create_api(&app, "my_api").await;

    let (_, a) = post(
        &app,
        &format!("/restapis/{api_id}/authorizers"),
        json!({ "name": "authorizer1", "type": "TOKEN" }),
    )
    .await;
    post(
        &app,
        &format!("/restapis/{api_id}/authorizers"),
        json!({ "name": "authorizer2", "type": "TOKEN" }),
    )
    .await;

    let (status, list) = get(&app, &format!("/restapis/{api_id}/authorizers")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["items"].as_array().unwrap().len(), 2);

    let authorizer_id = a["id"].as_str().unwrap();
    let (status, fetched) = get(
        &app,
        &format!("/restapis/{api_id}/authorizers/{authorizer_id}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "authorizer1");
}

#[tokio::test]
async fn get_unknown_authorizer_is_not_found() {
    let app = app();
    let (api_id, _) = create_api(&app, "my_api").await;

    let (status, body) = get(&app, &format!("/restapis/{api_id}/authorizers/unknown")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Invalid Authorizer identifier specified");
}

#[tokio::test]
async fn update_authorizer() {
    let app = app();
    let (api_id, _) = create_api(&app, "my_api").await;
    let (_, created) = post(
        &app,
        &format!("/restapis/{api_id}/authorizers"),
        json!({ "name": "my_authorizer", "type": "TOKEN" }),
    )
    .await;
    let authorizer_id = created["id"].as_str().unwrap();

    let (status, body) = patch(
        &app,
        &format!("/restapis/{api_id}/authorizers/{authorizer_id}"),
        json!({ "patchOperations": [
            { "op": "replace", "path": "/name", "value": "renamed" },
            { "op": "replace", "path": "/type", "value": "REQUEST" },
            { "op": "replace", "path": "/authorizerResultTtlInSeconds", "value": "600" }
        ]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "renamed");
    assert_eq!(body["type"], "REQUEST");
    assert_eq!(body["authorizerResultTtlInSeconds"], 600);
}

#[tokio::test]
async fn update_authorizer_rejects_unknown_patch_path() {
    let app = app();
    let (api_id, _) = create_api(&app, "my_api").await;
    let (_, created) = post(
        &app,
        &format!("/restapis/{api_id}/authorizers"),
        json!({ "name": "my_authorizer", "type": "TOKEN" }),
    )
    .await;
    let authorizer_id = created["id"].as_str().unwrap();

    let (status, _) = patch(
        &app,
        &format!("/restapis/{api_id}/authorizers/{authorizer_id}"),
        json!({ "patchOperations": [
            { "op": "replace", "path": "/invalidpath", "value": "x" }
        ]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_authorizer() {
    let app = app();
    let (api_id, _) = create_api(&app, "my_api").await;
    let (_, created) = post(
        &app,
        &format!("/restapis/{api_id}/authorizers"),
        json!({ "name": "my_authorizer", "type": "TOKEN" }),
    )
    .await;
    let authorizer_id = created["id"].as_str().unwrap();

    let (status, _) = delete(
        &app,
        &format!("/restapis/{api_id}/authorizers/{authorizer_id}"),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);

    let (status, _) = get(
        &app,
        &format!("/restapis/{api_id}/authorizers/{authorizer_id}"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
