mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{app, create_api, delete, get, put};

#[tokio::test]
async fn put_and_get_method() {
    let app = app();
    let (api_id, root_id) = create_api(&app, "my_api").await;

    let (status, body) = put(
        &app,
        &format!("/restapis/{api_id}/resources/{root_id}/methods/GET"),
        json!({ "authorizationType": "none" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["httpMethod"], "GET");
    assert_eq!(body["authorizationType"], "none");
    assert_eq!(body["apiKeyRequired"], false);
    assert_eq!(body["methodResponses"], json!({}));

    let (status, fetched) = get(
        &app,
        &format!("/restapis/{api_id}/resources/{root_id}/methods/GET"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["httpMethod"], "GET");
}

#[tokio::test]
async fn put_method_with_options() {
    let app = app();
    let (api_id, root_id) = create_api(&app, "my_api").await;

    let (_, body) = put(
        &app,
        &format!("/restapis/{api_id}/resources/{root_id}/methods/POST"),
        json!({
            "authorizationType": "none",
            "apiKeyRequired": true,
            "requestParameters": { "method.request.header.InvocationType": true }
        }),
    )
    .await;
    assert_eq!(body["apiKeyRequired"], true);
    assert_eq!(
        body["requestParameters"]["method.request.header.InvocationType"],
        true
    );
}

#[tokio::test]
async fn put_method_overwrites_the_existing_verb() {
    let app = app();
    let (api_id, root_id) = create_api(&app, "my_api").await;
    let path = format!("/restapis/{api_id}/resources/{root_id}/methods/GET");

    put(&app, &path, json!({ "authorizationType": "NONE" })).await;
    let (status, body) = put(
        &app,
        &path,
        json!({ "authorizationType": "CUSTOM", "apiKeyRequired": true }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["authorizationType"], "CUSTOM");
    assert_eq!(body["apiKeyRequired"], true);

    // Still a single method on the resource, carrying the latest fields.
    let (_, resource) = get(&app, &format!("/restapis/{api_id}/resources/{root_id}")).await;
    let methods = resource["resourceMethods"].as_object().unwrap();
    assert_eq!(methods.len(), 1);
    assert_eq!(methods["GET"]["authorizationType"], "CUSTOM");
    assert_eq!(methods["GET"]["apiKeyRequired"], true);
}

#[tokio::test]
async fn get_unknown_method_is_not_found() {
    let app = app();
    let (api_id, root_id) = create_api(&app, "my_api").await;

    let (status, body) = get(
        &app,
        &format!("/restapis/{api_id}/resources/{root_id}/methods/GET"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Invalid Method identifier specified");
}

#[tokio::test]
async fn delete_method() {
    let app = app();
    let (api_id, root_id) = create_api(&app, "my_api").await;
    put(
        &app,
        &format!("/restapis/{api_id}/resources/{root_id}/methods/GET"),
        json!({ "authorizationType": "none" }),
    )
    .await;

    let (status, _) = delete(
        &app,
        &format!("/restapis/{api_id}/resources/{root_id}/methods/GET"),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = get(
        &app,
        &format!("/restapis/{api_id}/resources/{root_id}/methods/GET"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn method_appears_on_resource_output() {
    let app = app();
    let (api_id, root_id) = create_api(&app, "my_api").await;
    put(
        &app,
        &format!("/restapis/{api_id}/resources/{root_id}/methods/GET"),
        json!({ "authorizationType": "none" }),
    )
    .await;

    let (_, resource) = get(&app, &format!("/restapis/{api_id}/resources/{root_id}")).await;
    assert_eq!(resource["resourceMethods"]["GET"]["httpMethod"], "GET");
}

#[tokio::test]
async fn put_get_and_delete_method_response() {
    let app = app();
    let (api_id, root_id) = create_api(&app, "my_api").await;
    put(
        &app,
        &format!("/restapis/{api_id}/resources/{root_id}/methods/GET"),
        json!({ "authorizationType": "none" }),
    )
    .await;

    let base = format!("/restapis/{api_id}/resources/{root_id}/methods/GET/responses/200");
    let (status, body) = put(&app, &base, json!({})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["statusCode"], "200");

    let (status, body) = get(&app, &base).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["statusCode"], "200");

    let (_, method) = get(
        &app,
        &format!("/restapis/{api_id}/resources/{root_id}/methods/GET"),
    )
    .await;
    assert_eq!(method["methodResponses"]["200"]["statusCode"], "200");

    let (status, _) = delete(&app, &base).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = get(&app, &base).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Invalid Response status code specified");
}

#[tokio::test]
async fn method_response_requires_the_method() {
    let app = app();
    let (api_id, root_id) = create_api(&app, "my_api").await;

    let (status, body) = put(
        &app,
        &format!("/restapis/{api_id}/resources/{root_id}/methods/GET/responses/200"),
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Invalid Method identifier specified");
}
