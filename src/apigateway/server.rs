use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Deserialize;

use super::error::ApiGatewayError;
use super::state::ApiGatewayState;
use super::types::*;

fn json_response<T: serde::Serialize>(status: StatusCode, value: &T) -> Response {
    (status, Json(serde_json::to_value(value).unwrap())).into_response()
}

// --- REST API handlers ---

async fn create_rest_api_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Json(req): Json<CreateRestApiRequest>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.create_rest_api(req).await?;
    Ok(json_response(StatusCode::CREATED, &resp))
}

async fn get_rest_apis_handler(
    State(state): State<Arc<ApiGatewayState>>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.get_rest_apis().await?;
    Ok(json_response(StatusCode::OK, &resp))
}

async fn get_rest_api_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path(rest_api_id): Path<String>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.get_rest_api(&rest_api_id).await?;
    Ok(json_response(StatusCode::OK, &resp))
}

async fn delete_rest_api_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path(rest_api_id): Path<String>,
) -> Result<Response, ApiGatewayError> {
    state.delete_rest_api(&rest_api_id).await?;
    Ok(StatusCode::ACCEPTED.into_response())
}

async fn update_rest_api_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path(rest_api_id): Path<String>,
    Json(req): Json<UpdateRequest>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.update_rest_api(&rest_api_id, req).await?;
    Ok(json_response(StatusCode::OK, &resp))
}

// --- Resource handlers ---

async fn get_resources_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path(rest_api_id): Path<String>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.get_resources(&rest_api_id).await?;
    Ok(json_response(StatusCode::OK, &resp))
}

async fn create_resource_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path((rest_api_id, parent_id)): Path<(String, String)>,
    Json(req): Json<CreateResourceRequest>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.create_resource(&rest_api_id, &parent_id, req).await?;
    Ok(json_response(StatusCode::CREATED, &resp))
}

async fn get_resource_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path((rest_api_id, resource_id)): Path<(String, String)>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.get_resource(&rest_api_id, &resource_id).await?;
    Ok(json_response(StatusCode::OK, &resp))
}

async fn delete_resource_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path((rest_api_id, resource_id)): Path<(String, String)>,
) -> Result<Response, ApiGatewayError> {
    state.delete_resource(&rest_api_id, &resource_id).await?;
    Ok(StatusCode::ACCEPTED.into_response())
}

// --- Method handlers ---

async fn put_method_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path((rest_api_id, resource_id, http_method)): Path<(String, String, String)>,
    Json(req): Json<PutMethodRequest>,
) -> Result<Response, ApiGatewayError> {
    let resp = state
        .put_method(&rest_api_id, &resource_id, &http_method, req)
        .await?;
    Ok(json_response(StatusCode::CREATED, &resp))
}

async fn get_method_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path((rest_api_id, resource_id, http_method)): Path<(String, String, String)>,
) -> Result<Response, ApiGatewayError> {
    let resp = state
        .get_method(&rest_api_id, &resource_id, &http_method)
        .await?;
    Ok(json_response(StatusCode::OK, &resp))
}

async fn delete_method_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path((rest_api_id, resource_id, http_method)): Path<(String, String, String)>,
) -> Result<Response, ApiGatewayError> {
    state
        .delete_method(&rest_api_id, &resource_id, &http_method)
        .await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

// --- MethodResponse handlers ---

async fn put_method_response_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path((rest_api_id, resource_id, http_method, status_code)): Path<(
        String,
        String,
        String,
        String,
    )>,
    Json(req): Json<PutMethodResponseRequest>,
) -> Result<Response, ApiGatewayError> {
    let resp = state
        .put_method_response(&rest_api_id, &resource_id, &http_method, &status_code, req)
        .await?;
    Ok(json_response(StatusCode::CREATED, &resp))
}

async fn get_method_response_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path((rest_api_id, resource_id, http_method, status_code)): Path<(
        String,
        String,
        String,
        String,
    )>,
) -> Result<Response, ApiGatewayError> {
    let resp = state
        .get_method_response(&rest_api_id, &resource_id, &http_method, &status_code)
        .await?;
    Ok(json_response(StatusCode::OK, &resp))
}

async fn delete_method_response_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path((rest_api_id, resource_id, http_method, status_code)): Path<(
        String,
        String,
        String,
        String,
    )>,
) -> Result<Response, ApiGatewayError> {
    state
        .delete_method_response(&rest_api_id, &resource_id, &http_method, &status_code)
        .await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

// --- Integration handlers ---

async fn put_integration_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path((rest_api_id, resource_id, http_method)): Path<(String, String, String)>,
    Json(req): Json<PutIntegrationRequest>,
) -> Result<Response, ApiGatewayError> {
    let resp = state
        .put_integration(&rest_api_id, &resource_id, &http_method, req)
        .await?;
    Ok(json_response(StatusCode::CREATED, &resp))
}

async fn get_integration_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path((rest_api_id, resource_id, http_method)): Path<(String, String, String)>,
) -> Result<Response, ApiGatewayError> {
    let resp = state
        .get_integration(&rest_api_id, &resource_id, &http_method)
        .await?;
    Ok(json_response(StatusCode::OK, &resp))
}

async fn delete_integration_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path((rest_api_id, resource_id, http_method)): Path<(String, String, String)>,
) -> Result<Response, ApiGatewayError> {
    state
        .delete_integration(&rest_api_id, &resource_id, &http_method)
        .await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

// --- IntegrationResponse handlers ---

async fn put_integration_response_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path((rest_api_id, resource_id, http_method, status_code)): Path<(
        String,
        String,
        String,
        String,
    )>,
    Json(req): Json<PutIntegrationResponseRequest>,
) -> Result<Response, ApiGatewayError> {
    let resp = state
        .put_integration_response(&rest_api_id, &resource_id, &http_method, &status_code, req)
        .await?;
    Ok(json_response(StatusCode::CREATED, &resp))
}

async fn get_integration_response_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path((rest_api_id, resource_id, http_method, status_code)): Path<(
        String,
        String,
        String,
        String,
    )>,
) -> Result<Response, ApiGatewayError> {
    let resp = state
        .get_integration_response(&rest_api_id, &resource_id, &http_method, &status_code)
        .await?;
    Ok(json_response(StatusCode::OK, &resp))
}

async fn delete_integration_response_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path((rest_api_id, resource_id, http_method, status_code)): Path<(
        String,
        String,
        String,
        String,
    )>,
) -> Result<Response, ApiGatewayError> {
    state
        .delete_integration_response(&rest_api_id, &resource_id, &http_method, &status_code)
        .await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

// --- Authorizer handlers ---

async fn create_authorizer_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path(rest_api_id): Path<String>,
    Json(req): Json<CreateAuthorizerRequest>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.create_authorizer(&rest_api_id, req).await?;
    Ok(json_response(StatusCode::CREATED, &resp))
}

async fn get_authorizers_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path(rest_api_id): Path<String>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.get_authorizers(&rest_api_id).await?;
    Ok(json_response(StatusCode::OK, &resp))
}

async fn get_authorizer_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path((rest_api_id, authorizer_id)): Path<(String, String)>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.get_authorizer(&rest_api_id, &authorizer_id).await?;
    Ok(json_response(StatusCode::OK, &resp))
}

async fn update_authorizer_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path((rest_api_id, authorizer_id)): Path<(String, String)>,
    Json(req): Json<UpdateRequest>,
) -> Result<Response, ApiGatewayError> {
    let resp = state
        .update_authorizer(&rest_api_id, &authorizer_id, req)
        .await?;
    Ok(json_response(StatusCode::OK, &resp))
}

async fn delete_authorizer_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path((rest_api_id, authorizer_id)): Path<(String, String)>,
) -> Result<Response, ApiGatewayError> {
    state.delete_authorizer(&rest_api_id, &authorizer_id).await?;
    Ok(StatusCode::ACCEPTED.into_response())
}

// --- Deployment handlers ---

async fn create_deployment_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path(rest_api_id): Path<String>,
    body: axum::body::Bytes,
) -> Result<Response, ApiGatewayError> {
    // The SDK sends an empty body for a bare createDeployment call.
    let req: CreateDeploymentRequest = if body.is_empty() {
        CreateDeploymentRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| ApiGatewayError::BadRequestException(e.to_string()))?
    };
    let resp = state.create_deployment(&rest_api_id, req).await?;
    Ok(json_response(StatusCode::CREATED, &resp))
}

async fn get_deployments_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path(rest_api_id): Path<String>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.get_deployments(&rest_api_id).await?;
    Ok(json_response(StatusCode::OK, &resp))
}

async fn get_deployment_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path((rest_api_id, deployment_id)): Path<(String, String)>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.get_deployment(&rest_api_id, &deployment_id).await?;
    Ok(json_response(StatusCode::OK, &resp))
}

// --- Stage handlers ---

async fn create_stage_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path(rest_api_id): Path<String>,
    Json(req): Json<CreateStageRequest>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.create_stage(&rest_api_id, req).await?;
    Ok(json_response(StatusCode::CREATED, &resp))
}

async fn get_stages_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path(rest_api_id): Path<String>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.get_stages(&rest_api_id).await?;
    Ok(json_response(StatusCode::OK, &resp))
}

async fn get_stage_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path((rest_api_id, stage_name)): Path<(String, String)>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.get_stage(&rest_api_id, &stage_name).await?;
    Ok(json_response(StatusCode::OK, &resp))
}

// --- Model handlers ---

async fn create_model_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path(rest_api_id): Path<String>,
    Json(req): Json<CreateModelRequest>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.create_model(&rest_api_id, req).await?;
    Ok(json_response(StatusCode::CREATED, &resp))
}

async fn get_models_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path(rest_api_id): Path<String>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.get_models(&rest_api_id).await?;
    Ok(json_response(StatusCode::OK, &resp))
}

async fn get_model_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path((rest_api_id, model_name)): Path<(String, String)>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.get_model(&rest_api_id, &model_name).await?;
    Ok(json_response(StatusCode::OK, &resp))
}

// --- ApiKey handlers ---

#[derive(Deserialize)]
struct IncludeValueQuery {
    #[serde(rename = "includeValue", default)]
    include_value: Option<bool>,
}

#[derive(Deserialize)]
struct IncludeValuesQuery {
    #[serde(rename = "includeValues", default)]
    include_values: Option<bool>,
}

async fn create_api_key_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Json(req): Json<CreateApiKeyRequest>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.create_api_key(req).await?;
    Ok(json_response(StatusCode::CREATED, &resp))
}

async fn get_api_keys_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Query(q): Query<IncludeValuesQuery>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.get_api_keys(q.include_values.unwrap_or(false)).await?;
    Ok(json_response(StatusCode::OK, &resp))
}

async fn get_api_key_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path(api_key_id): Path<String>,
    Query(q): Query<IncludeValueQuery>,
) -> Result<Response, ApiGatewayError> {
    let resp = state
        .get_api_key(&api_key_id, q.include_value.unwrap_or(false))
        .await?;
    Ok(json_response(StatusCode::OK, &resp))
}

async fn update_api_key_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path(api_key_id): Path<String>,
    Json(req): Json<UpdateRequest>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.update_api_key(&api_key_id, req).await?;
    Ok(json_response(StatusCode::OK, &resp))
}

async fn delete_api_key_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path(api_key_id): Path<String>,
) -> Result<Response, ApiGatewayError> {
    state.delete_api_key(&api_key_id).await?;
    Ok(StatusCode::ACCEPTED.into_response())
}

// --- UsagePlan handlers ---

#[derive(Deserialize)]
struct KeyIdQuery {
    #[serde(rename = "keyId", default)]
    key_id: Option<String>,
}

async fn create_usage_plan_handler(
    State(state): State<Arc<ApiGatewayState>>,
    body: axum::body::Bytes,
) -> Result<Response, ApiGatewayError> {
    let req: CreateUsagePlanRequest = if body.is_empty() {
        CreateUsagePlanRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| ApiGatewayError::BadRequestException(e.to_string()))?
    };
    let resp = state.create_usage_plan(req).await?;
    Ok(json_response(StatusCode::CREATED, &resp))
}

async fn get_usage_plans_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Query(q): Query<KeyIdQuery>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.get_usage_plans(q.key_id.as_deref()).await?;
    Ok(json_response(StatusCode::OK, &resp))
}

async fn get_usage_plan_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path(usage_plan_id): Path<String>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.get_usage_plan(&usage_plan_id).await?;
    Ok(json_response(StatusCode::OK, &resp))
}

async fn update_usage_plan_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path(usage_plan_id): Path<String>,
    Json(req): Json<UpdateRequest>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.update_usage_plan(&usage_plan_id, req).await?;
    Ok(json_response(StatusCode::OK, &resp))
}

async fn delete_usage_plan_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path(usage_plan_id): Path<String>,
) -> Result<Response, ApiGatewayError> {
    state.delete_usage_plan(&usage_plan_id).await?;
    Ok(StatusCode::ACCEPTED.into_response())
}

// --- UsagePlanKey handlers ---

async fn create_usage_plan_key_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path(usage_plan_id): Path<String>,
    Json(req): Json<CreateUsagePlanKeyRequest>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.create_usage_plan_key(&usage_plan_id, req).await?;
    Ok(json_response(StatusCode::CREATED, &resp))
}

async fn get_usage_plan_keys_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path(usage_plan_id): Path<String>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.get_usage_plan_keys(&usage_plan_id).await?;
    Ok(json_response(StatusCode::OK, &resp))
}

async fn get_usage_plan_key_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path((usage_plan_id, key_id)): Path<(String, String)>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.get_usage_plan_key(&usage_plan_id, &key_id).await?;
    Ok(json_response(StatusCode::OK, &resp))
}

async fn delete_usage_plan_key_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path((usage_plan_id, key_id)): Path<(String, String)>,
) -> Result<Response, ApiGatewayError> {
    state.delete_usage_plan_key(&usage_plan_id, &key_id).await?;
    Ok(StatusCode::ACCEPTED.into_response())
}

// --- DomainName handlers ---

async fn create_domain_name_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Json(req): Json<CreateDomainNameRequest>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.create_domain_name(req).await?;
    Ok(json_response(StatusCode::CREATED, &resp))
}

async fn get_domain_names_handler(
    State(state): State<Arc<ApiGatewayState>>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.get_domain_names().await?;
    Ok(json_response(StatusCode::OK, &resp))
}

async fn get_domain_name_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path(domain_name): Path<String>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.get_domain_name(&domain_name).await?;
    Ok(json_response(StatusCode::OK, &resp))
}

async fn delete_domain_name_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path(domain_name): Path<String>,
) -> Result<Response, ApiGatewayError> {
    state.delete_domain_name(&domain_name).await?;
    Ok(StatusCode::ACCEPTED.into_response())
}

// --- BasePathMapping handlers ---

async fn create_base_path_mapping_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path(domain_name): Path<String>,
    Json(req): Json<CreateBasePathMappingRequest>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.create_base_path_mapping(&domain_name, req).await?;
    Ok(json_response(StatusCode::CREATED, &resp))
}

async fn get_base_path_mappings_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path(domain_name): Path<String>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.get_base_path_mappings(&domain_name).await?;
    Ok(json_response(StatusCode::OK, &resp))
}

async fn get_base_path_mapping_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path((domain_name, base_path)): Path<(String, String)>,
) -> Result<Response, ApiGatewayError> {
    let resp = state.get_base_path_mapping(&domain_name, &base_path).await?;
    Ok(json_response(StatusCode::OK, &resp))
}

async fn update_base_path_mapping_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path((domain_name, base_path)): Path<(String, String)>,
    Json(req): Json<UpdateRequest>,
) -> Result<Response, ApiGatewayError> {
    let resp = state
        .update_base_path_mapping(&domain_name, &base_path, req)
        .await?;
    Ok(json_response(StatusCode::OK, &resp))
}

async fn delete_base_path_mapping_handler(
    State(state): State<Arc<ApiGatewayState>>,
    Path((domain_name, base_path)): Path<(String, String)>,
) -> Result<Response, ApiGatewayError> {
    state
        .delete_base_path_mapping(&domain_name, &base_path)
        .await?;
    Ok(StatusCode::ACCEPTED.into_response())
}

pub fn create_router(state: Arc<ApiGatewayState>) -> Router {
    Router::new()
        // REST APIs
        .route(
            "/restapis",
            post(create_rest_api_handler).get(get_rest_apis_handler),
        )
        .route(
            "/restapis/{rest_api_id}",
            get(get_rest_api_handler)
                .delete(delete_rest_api_handler)
                .patch(update_rest_api_handler),
        )
        // Resources
        .route(
            "/restapis/{rest_api_id}/resources",
            get(get_resources_handler),
        )
        .route(
            "/restapis/{rest_api_id}/resources/{parent_id}",
            get(get_resource_handler)
                .post(create_resource_handler)
                .delete(delete_resource_handler),
        )
        // Methods
        .route(
            "/restapis/{rest_api_id}/resources/{resource_id}/methods/{http_method}",
            put(put_method_handler)
                .get(get_method_handler)
                .delete(delete_method_handler),
        )
        // MethodResponses
        .route(
            "/restapis/{rest_api_id}/resources/{resource_id}/methods/{http_method}/responses/{status_code}",
            put(put_method_response_handler)
                .get(get_method_response_handler)
                .delete(delete_method_response_handler),
        )
        // Integrations
        .route(
            "/restapis/{rest_api_id}/resources/{resource_id}/methods/{http_method}/integration",
            put(put_integration_handler)
                .get(get_integration_handler)
                .delete(delete_integration_handler),
        )
        // IntegrationResponses
        .route(
            "/restapis/{rest_api_id}/resources/{resource_id}/methods/{http_method}/integration/responses/{status_code}",
            put(put_integration_response_handler)
                .get(get_integration_response_handler)
                .delete(delete_integration_response_handler),
        )
        // Authorizers
        .route(
            "/restapis/{rest_api_id}/authorizers",
            post(create_authorizer_handler).get(get_authorizers_handler),
        )
        .route(
            "/restapis/{rest_api_id}/authorizers/{authorizer_id}",
            get(get_authorizer_handler)
                .patch(update_authorizer_handler)
                .delete(delete_authorizer_handler),
        )
        // Deployments
        .route(
            "/restapis/{rest_api_id}/deployments",
            post(create_deployment_handler).get(get_deployments_handler),
        )
        .route(
            "/restapis/{rest_api_id}/deployments/{deployment_id}",
            get(get_deployment_handler),
        )
        // Stages
        .route(
            "/restapis/{rest_api_id}/stages",
            post(create_stage_handler).get(get_stages_handler),
        )
        .route(
            "/restapis/{rest_api_id}/stages/{stage_name}",
            get(get_stage_handler),
        )
        // Models
        .route(
            "/restapis/{rest_api_id}/models",
            post(create_model_handler).get(get_models_handler),
        )
        .route(
            "/restapis/{rest_api_id}/models/{model_name}",
            get(get_model_handler),
        )
        // API keys
        .route(
            "/apikeys",
            post(create_api_key_handler).get(get_api_keys_handler),
        )
        .route(
            "/apikeys/{api_key_id}",
            get(get_api_key_handler)
                .patch(update_api_key_handler)
                .delete(delete_api_key_handler),
        )
        // Usage plans
        .route(
            "/usageplans",
            post(create_usage_plan_handler).get(get_usage_plans_handler),
        )
        .route(
            "/usageplans/{usage_plan_id}",
            get(get_usage_plan_handler)
                .patch(update_usage_plan_handler)
                .delete(delete_usage_plan_handler),
        )
        .route(
            "/usageplans/{usage_plan_id}/keys",
            post(create_usage_plan_key_handler).get(get_usage_plan_keys_handler),
        )
        .route(
            "/usageplans/{usage_plan_id}/keys/{key_id}",
            get(get_usage_plan_key_handler).delete(delete_usage_plan_key_handler),
        )
        // Domain names
        .route(
            "/domainnames",
            post(create_domain_name_handler).get(get_domain_names_handler),
        )
        .route(
            "/domainnames/{domain_name}",
            get(get_domain_name_handler).delete(delete_domain_name_handler),
        )
        // Base path mappings
        .route(
            "/domainnames/{domain_name}/basepathmappings",
            post(create_base_path_mapping_handler).get(get_base_path_mappings_handler),
        )
        .route(
            "/domainnames/{domain_name}/basepathmappings/{base_path}",
            get(get_base_path_mapping_handler)
                .patch(update_base_path_mapping_handler)
                .delete(delete_base_path_mapping_handler),
        )
        .with_state(state)
}
