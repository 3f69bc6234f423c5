mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{app, create_api, deploy_stage, get, post};

#[tokio::test]
async fn create_deployment_with_stage() {
    let app = app();
    let (api_id, _) = create_api(&app, "my_api").await;

    let (status, body) = post(
        &app,
        &format!("/restapis/{api_id}/deployments"),
        json!({ "stageName": "staging", "description": "first rollout" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["description"], "first rollout");
    assert!(body["createdDate"].as_f64().is_some());
    let deployment_id = body["id"].as_str().unwrap();

    let (status, stage) = get(&app, &format!("/restapis/{api_id}/stages/staging")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stage["stageName"], "staging");
    assert_eq!(stage["deploymentId"], deployment_id);
}

#[tokio::test]
async fn get_and_list_deployments() {
    let app = app();
    let (api_id, _) = create_api(&app, "my_api").await;
    let deployment_id = deploy_stage(&app, &api_id, "dev").await;

    let (status, fetched) = get(
        &app,
        &format!("/restapis/{api_id}/deployments/{deployment_id}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], deployment_id.as_str());

    let (status, list) = get(&app, &format!("/restapis/{api_id}/deployments")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn get_unknown_deployment_is_not_found() {
    let app = app();
    let (api_id, _) = create_api(&app, "my_api").await;

    let (status, _) = get(&app, &format!("/restapis/{api_id}/deployments/unknown")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn redeploying_updates_the_stage() {
    let app = app();
    let (api_id, _) = create_api(&app, "my_api").await;
    deploy_stage(&app, &api_id, "dev").await;
    let second = deploy_stage(&app, &api_id, "dev").await;

    let (_, stages) = get(&app, &format!("/restapis/{api_id}/stages")).await;
    assert_eq!(stages["items"].as_array().unwrap().len(), 1);
    assert_eq!(stages["items"][0]["deploymentId"], second.as_str());
}

#[tokio::test]
async fn create_stage_explicitly() {
    let app = app();
    let (api_id, _) = create_api(&app, "my_api").await;
    let deployment_id = deploy_stage(&app, &api_id, "dev").await;

    let (status, body) = post(
        &app,
        &format!("/restapis/{api_id}/stages"),
        json!({
            "stageName": "prod",
            "deploymentId": deployment_id,
            "variables": { "env": "prod" }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["stageName"], "prod");
    assert_eq!(body["variables"]["env"], "prod");

    // Re-creating the same stage name conflicts.
    let (status, _) = post(
        &app,
        &format!("/restapis/{api_id}/stages"),
        json!({ "stageName": "prod", "deploymentId": deployment_id }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn create_stage_requires_the_deployment() {
    let app = app();
    let (api_id, _) = create_api(&app, "my_api").await;

    let (status, _) = post(
        &app,
        &format!("/restapis/{api_id}/stages"),
        json!({ "stageName": "prod", "deploymentId": "unknown" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
