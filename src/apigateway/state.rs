use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use super::api::{
    now, ApiKey, Authorizer, BasePathMapping, Deployment, DomainName, Integration,
    IntegrationResponse, Method, MethodResponse, Model, Resource, RestApi, Stage, UsagePlan,
    EMPTY_BASE_PATH,
};
use super::error::ApiGatewayError;
use super::patch;
use super::types::*;
use super::validate;

fn short_id() -> String {
    Uuid::new_v4()
        .to_string()
        .replace('-', "")
        .chars()
        .take(10)
        .collect()
}

fn generate_api_key_value() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
        .chars()
        .take(40)
        .collect()
}

const INTEGRATION_TYPES_REQUIRING_METHOD: [&str; 4] = ["HTTP", "HTTP_PROXY", "AWS", "AWS_PROXY"];
const HTTP_INTEGRATION_TYPES: [&str; 2] = ["HTTP", "HTTP_PROXY"];
const AWS_INTEGRATION_TYPES: [&str; 2] = ["AWS", "AWS_PROXY"];

const BASE_PATH_SLASH_MESSAGE: &str = "API Gateway V1 doesn't support the slash character (/) in \
     base path mappings. To create a multi-level base path mapping, use API Gateway V2.";

struct ApiGatewayStateInner {
    apis: HashMap<String, RestApi>,
    api_keys: HashMap<String, ApiKey>,
    usage_plans: HashMap<String, UsagePlan>,
    usage_plan_keys: HashMap<String, HashSet<String>>,
    domain_names: HashMap<String, DomainName>,
    account_id: String,
    _region: String,
}

/// One instance emulates one account/region context; the embedding transport
/// decides which instance a request targets.
pub struct ApiGatewayState {
    inner: Arc<Mutex<ApiGatewayStateInner>>,
}

impl ApiGatewayState {
    pub fn new(account_id: String, region: String) -> Self {
        ApiGatewayState {
            inner: Arc::new(Mutex::new(ApiGatewayStateInner {
                apis: HashMap::new(),
                api_keys: HashMap::new(),
                usage_plans: HashMap::new(),
                usage_plan_keys: HashMap::new(),
                domain_names: HashMap::new(),
                account_id,
                _region: region,
            })),
        }
    }

    // --- REST APIs ---

    pub async fn create_rest_api(
        &self,
        req: CreateRestApiRequest,
    ) -> Result<RestApiOutput, ApiGatewayError> {
        let mut state = self.inner.lock().await;

        if let Some(source) = &req.api_key_source {
            validate::validate_api_key_source(source)?;
        }
        if let Some(config) = &req.endpoint_configuration {
            validate::validate_endpoint_types(&config.types)?;
        }

        let id = short_id();
        let mut api = RestApi::new(id.clone(), short_id(), req.name);
        api.description = req.description;
        if let Some(version) = req.version {
            api.version = version;
        }
        if let Some(types) = req.binary_media_types {
            api.binary_media_types = types;
        }
        if let Some(source) = req.api_key_source {
            api.api_key_source = source;
        }
        if let Some(config) = req.endpoint_configuration {
            api.endpoint_configuration = config.types;
        }
        api.policy = req.policy;
        api.tags = req.tags;

        let output = api_to_output(&api);
        state.apis.insert(id, api);
        Ok(output)
    }

    pub async fn get_rest_api(&self, rest_api_id: &str) -> Result<RestApiOutput, ApiGatewayError> {
        let state = self.inner.lock().await;
        let api = get_api(&state.apis, rest_api_id)?;
        Ok(api_to_output(api))
    }

    pub async fn get_rest_apis(&self) -> Result<RestApisOutput, ApiGatewayError> {
        let state = self.inner.lock().await;
        let mut apis: Vec<&RestApi> = state.apis.values().collect();
        apis.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(RestApisOutput {
            items: apis.into_iter().map(api_to_output).collect(),
            position: None,
        })
    }

    pub async fn delete_rest_api(&self, rest_api_id: &str) -> Result<(), ApiGatewayError> {
        let mut state = self.inner.lock().await;
        if state.apis.remove(rest_api_id).is_none() {
            return Err(api_not_found());
        }
        Ok(())
    }

    pub async fn update_rest_api(
        &self,
        rest_api_id: &str,
        req: UpdateRequest,
    ) -> Result<RestApiOutput, ApiGatewayError> {
        let mut state = self.inner.lock().await;
        let api = get_api_mut(&mut state.apis, rest_api_id)?;

        // Apply against a copy so a failing operation leaves the API untouched.
        let mut updated = api.clone();
        for op in &req.patch_operations {
            let value = op.value_or_default();
            match op.path.as_str() {
                "/name" => updated.name = value,
                "/description" => match op.op.as_str() {
                    "remove" => updated.description = Some(String::new()),
                    _ => updated.description = Some(value),
                },
                "/version" => updated.version = value,
                "/apiKeySource" => {
                    validate::validate_api_key_source(&value)?;
                    updated.api_key_source = value;
                }
                "/binaryMediaTypes" => match op.op.as_str() {
                    "add" => updated.binary_media_types.push(value),
                    "remove" => {
                        if let Some(pos) =
                            updated.binary_media_types.iter().position(|t| *t == value)
                        {
                            updated.binary_media_types.remove(pos);
                        }
                    }
                    _ => updated.binary_media_types = vec![value],
                },
                "/disableExecuteApiEndpoint" => {
                    updated.disable_execute_api_endpoint = patch::as_bool(&value);
                }
                "/policy" => updated.policy = Some(value),
                path => return Err(patch::unknown_path(path)),
            }
        }
        *api = updated;
        Ok(api_to_output(api))
    }

    // --- Resources ---

    pub async fn get_resources(&self, rest_api_id: &str) -> Result<ResourcesOutput, ApiGatewayError> {
        let state = self.inner.lock().await;
        let api = get_api(&state.apis, rest_api_id)?;
        let mut resources: Vec<ResourceOutput> = api
            .resources
            .values()
            .map(|r| resource_to_output(api, r))
            .collect();
        resources.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(ResourcesOutput {
            items: resources,
            position: None,
        })
    }

    pub async fn get_resource(
        &self,
        rest_api_id: &str,
        resource_id: &str,
    ) -> Result<ResourceOutput, ApiGatewayError> {
        let state = self.inner.lock().await;
        let api = get_api(&state.apis, rest_api_id)?;
        let resource = get_resource(&api.resources, resource_id)?;
        Ok(resource_to_output(api, resource))
    }

    pub async fn create_resource(
        &self,
        rest_api_id: &str,
        parent_id: &str,
        req: CreateResourceRequest,
    ) -> Result<ResourceOutput, ApiGatewayError> {
        let mut state = self.inner.lock().await;
        let api = get_api_mut(&mut state.apis, rest_api_id)?;
        get_resource(&api.resources, parent_id)?;
        validate::validate_path_part(&req.path_part)?;

        let id = short_id();
        let resource = Resource {
            id: id.clone(),
            parent_id: Some(parent_id.to_string()),
            path_part: Some(req.path_part),
            resource_methods: HashMap::new(),
        };
        api.resources.insert(id.clone(), resource);
        let resource = &api.resources[&id];
        Ok(resource_to_output(api, resource))
    }

    pub async fn delete_resource(
        &self,
        rest_api_id: &str,
        resource_id: &str,
    ) -> Result<(), ApiGatewayError> {
        let mut state = self.inner.lock().await;
        let api = get_api_mut(&mut state.apis, rest_api_id)?;
        if api.resources.remove(resource_id).is_none() {
            return Err(resource_not_found());
        }
        Ok(())
    }

    // --- Methods ---

    pub async fn put_method(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        http_method: &str,
        req: PutMethodRequest,
    ) -> Result<MethodOutput, ApiGatewayError> {
        let mut state = self.inner.lock().await;
        let api = get_api_mut(&mut state.apis, rest_api_id)?;
        let resource = get_resource_mut(&mut api.resources, resource_id)?;

        let verb = http_method.to_uppercase();
        let mut method = Method::new(verb.clone(), req.authorization_type);
        method.authorizer_id = req.authorizer_id;
        method.api_key_required = req.api_key_required;
        method.request_parameters = req.request_parameters;
        method.request_models = req.request_models;

        let output = method_to_output(&method);
        resource.resource_methods.insert(verb, method);
        Ok(output)
    }

    pub async fn get_method(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        http_method: &str,
    ) -> Result<MethodOutput, ApiGatewayError> {
        let state = self.inner.lock().await;
        let api = get_api(&state.apis, rest_api_id)?;
        let resource = get_resource(&api.resources, resource_id)?;
        let method = get_method(&resource.resource_methods, http_method)?;
        Ok(method_to_output(method))
    }

    pub async fn delete_method(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        http_method: &str,
    ) -> Result<(), ApiGatewayError> {
        let mut state = self.inner.lock().await;
        let api = get_api_mut(&mut state.apis, rest_api_id)?;
        let resource = get_resource_mut(&mut api.resources, resource_id)?;
        if resource
            .resource_methods
            .remove(&http_method.to_uppercase())
            .is_none()
        {
            return Err(method_not_found());
        }
        Ok(())
    }

    // --- Method responses ---

    pub async fn put_method_response(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        http_method: &str,
        status_code: &str,
        req: PutMethodResponseRequest,
    ) -> Result<MethodResponseOutput, ApiGatewayError> {
        let mut state = self.inner.lock().await;
        let api = get_api_mut(&mut state.apis, rest_api_id)?;
        let resource = get_resource_mut(&mut api.resources, resource_id)?;
        let method = get_method_mut(&mut resource.resource_methods, http_method)?;

        let response = MethodResponse {
            status_code: status_code.to_string(),
            response_parameters: req.response_parameters,
            response_models: req.response_models,
        };
        let output = method_response_to_output(&response);
        method
            .method_responses
            .insert(status_code.to_string(), response);
        Ok(output)
    }

    pub async fn get_method_response(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        http_method: &str,
        status_code: &str,
    ) -> Result<MethodResponseOutput, ApiGatewayError> {
        let state = self.inner.lock().await;
        let api = get_api(&state.apis, rest_api_id)?;
        let resource = get_resource(&api.resources, resource_id)?;
        let method = get_method(&resource.resource_methods, http_method)?;
        let response = method
            .method_responses
            .get(status_code)
            .ok_or_else(status_code_not_found)?;
        Ok(method_response_to_output(response))
    }

    pub async fn delete_method_response(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        http_method: &str,
        status_code: &str,
    ) -> Result<(), ApiGatewayError> {
        let mut state = self.inner.lock().await;
        let api = get_api_mut(&mut state.apis, rest_api_id)?;
        let resource = get_resource_mut(&mut api.resources, resource_id)?;
        let method = get_method_mut(&mut resource.resource_methods, http_method)?;
        if method.method_responses.remove(status_code).is_none() {
            return Err(status_code_not_found());
        }
        Ok(())
    }

    // --- Integrations ---

    pub async fn put_integration(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        http_method: &str,
        req: PutIntegrationRequest,
    ) -> Result<IntegrationOutput, ApiGatewayError> {
        let mut state = self.inner.lock().await;
        let account_id = state.account_id.clone();
        let api = get_api_mut(&mut state.apis, rest_api_id)?;
        let resource = get_resource_mut(&mut api.resources, resource_id)?;
        let method = get_method_mut(&mut resource.resource_methods, http_method)?;

        let integration_type = req.integration_type.as_str();
        if INTEGRATION_TYPES_REQUIRING_METHOD.contains(&integration_type)
            && req
                .integration_http_method
                .as_deref()
                .unwrap_or("")
                .is_empty()
        {
            return Err(ApiGatewayError::BadRequestException(
                "Enumeration value for HttpMethod must be non-empty".to_string(),
            ));
        }

        if let Some(credentials) = &req.credentials {
            if !validate::role_belongs_to_account(credentials, &account_id) {
                return Err(ApiGatewayError::AccessDeniedException(
                    "Cross-account pass role is not allowed.".to_string(),
                ));
            }
        }

        let uri = req.uri.clone().unwrap_or_default();
        if HTTP_INTEGRATION_TYPES.contains(&integration_type) && !validate::is_http_endpoint(&uri) {
            return Err(ApiGatewayError::BadRequestException(
                "Invalid HTTP endpoint specified for URI".to_string(),
            ));
        }
        if AWS_INTEGRATION_TYPES.contains(&integration_type) {
            if !validate::is_arn(&uri) {
                return Err(ApiGatewayError::BadRequestException(
                    "Invalid ARN specified in the request".to_string(),
                ));
            }
            if !validate::arn_has_path_or_action(&uri) {
                return Err(ApiGatewayError::BadRequestException(
                    "AWS ARN for integration must contain path or action".to_string(),
                ));
            }
        }
        if integration_type == "AWS_PROXY" && !validate::is_aws_proxy_target(&uri) {
            return Err(ApiGatewayError::BadRequestException(
                "Integrations of type 'AWS_PROXY' currently only supports Lambda function \
                 and Firehose stream invocations."
                    .to_string(),
            ));
        }
        if integration_type == "AWS"
            && req.credentials.is_none()
            && !validate::is_lambda_invocation_arn(&uri)
        {
            return Err(ApiGatewayError::BadRequestException(
                "Role ARN must be specified for AWS integrations".to_string(),
            ));
        }

        let mut integration = Integration::new(
            req.integration_type,
            req.uri,
            req.integration_http_method,
        );
        integration.credentials = req.credentials;
        if let Some(pb) = req.passthrough_behavior {
            integration.passthrough_behavior = pb;
        }
        integration.content_handling = req.content_handling;
        integration.timeout_in_millis = req.timeout_in_millis;
        integration.cache_key_parameters = req.cache_key_parameters.unwrap_or_default();
        integration.request_parameters = req.request_parameters;
        integration.request_templates = req.request_templates;

        let output = integration_to_output(&integration);
        method.method_integration = Some(integration);
        Ok(output)
    }

    pub async fn get_integration(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        http_method: &str,
    ) -> Result<IntegrationOutput, ApiGatewayError> {
        let state = self.inner.lock().await;
        let api = get_api(&state.apis, rest_api_id)?;
        let resource = get_resource(&api.resources, resource_id)?;
        let method = get_method(&resource.resource_methods, http_method)?;
        let integration = method
            .method_integration
            .as_ref()
            .ok_or_else(integration_not_found)?;
        Ok(integration_to_output(integration))
    }

    pub async fn delete_integration(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        http_method: &str,
    ) -> Result<(), ApiGatewayError> {
        let mut state = self.inner.lock().await;
        let api = get_api_mut(&mut state.apis, rest_api_id)?;
        let resource = get_resource_mut(&mut api.resources, resource_id)?;
        let method = get_method_mut(&mut resource.resource_methods, http_method)?;
        if method.method_integration.take().is_none() {
            return Err(integration_not_found());
        }
        Ok(())
    }

    // --- Integration responses ---

    pub async fn put_integration_response(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        http_method: &str,
        status_code: &str,
        req: PutIntegrationResponseRequest,
    ) -> Result<IntegrationResponseOutput, ApiGatewayError> {
        let mut state = self.inner.lock().await;
        let api = get_api_mut(&mut state.apis, rest_api_id)?;
        let resource = get_resource_mut(&mut api.resources, resource_id)?;
        let method = get_method_mut(&mut resource.resource_methods, http_method)?;
        let integration = method
            .method_integration
            .as_mut()
            .ok_or_else(integration_not_found)?;

        let response = IntegrationResponse {
            status_code: status_code.to_string(),
            selection_pattern: req.selection_pattern,
            response_templates: req.response_templates,
            response_parameters: req.response_parameters,
            content_handling: req.content_handling,
        };
        let output = integration_response_to_output(&response);
        integration
            .integration_responses
            .get_or_insert_with(HashMap::new)
            .insert(status_code.to_string(), response);
        Ok(output)
    }

    pub async fn get_integration_response(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        http_method: &str,
        status_code: &str,
    ) -> Result<IntegrationResponseOutput, ApiGatewayError> {
        let state = self.inner.lock().await;
        let api = get_api(&state.apis, rest_api_id)?;
        let resource = get_resource(&api.resources, resource_id)?;
        let method = get_method(&resource.resource_methods, http_method)?;
        let integration = method
            .method_integration
            .as_ref()
            .ok_or_else(integration_not_found)?;
        let response = integration
            .integration_responses
            .as_ref()
            .and_then(|responses| responses.get(status_code))
            .ok_or_else(status_code_not_found)?;
        Ok(integration_response_to_output(response))
    }

    pub async fn delete_integration_response(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        http_method: &str,
        status_code: &str,
    ) -> Result<(), ApiGatewayError> {
        let mut state = self.inner.lock().await;
        let api = get_api_mut(&mut state.apis, rest_api_id)?;
        let resource = get_resource_mut(&mut api.resources, resource_id)?;
        let method = get_method_mut(&mut resource.resource_methods, http_method)?;
        let integration = method
            .method_integration
            .as_mut()
            .ok_or_else(integration_not_found)?;
        let removed = integration
            .integration_responses
            .as_mut()
            .and_then(|responses| responses.remove(status_code));
        if removed.is_none() {
            return Err(status_code_not_found());
        }
        Ok(())
    }

    // --- Authorizers ---

    pub async fn create_authorizer(
        &self,
        rest_api_id: &str,
        req: CreateAuthorizerRequest,
    ) -> Result<AuthorizerOutput, ApiGatewayError> {
        let mut state = self.inner.lock().await;
        let api = get_api_mut(&mut state.apis, rest_api_id)?;

        let id = short_id();
        let authorizer = Authorizer {
            id: id.clone(),
            name: req.name,
            authorizer_type: req.authorizer_type,
            provider_arns: req.provider_arns,
            auth_type: req.auth_type,
            identity_source: req.identity_source,
            authorizer_result_ttl_in_seconds: req.authorizer_result_ttl_in_seconds.unwrap_or(300),
        };
        let output = authorizer_to_output(&authorizer);
        api.authorizers.insert(id, authorizer);
        Ok(output)
    }

    pub async fn get_authorizer(
        &self,
        rest_api_id: &str,
        authorizer_id: &str,
    ) -> Result<AuthorizerOutput, ApiGatewayError> {
        let state = self.inner.lock().await;
        let api = get_api(&state.apis, rest_api_id)?;
        let authorizer = api
            .authorizers
            .get(authorizer_id)
            .ok_or_else(authorizer_not_found)?;
        Ok(authorizer_to_output(authorizer))
    }

    pub async fn get_authorizers(
        &self,
        rest_api_id: &str,
    ) -> Result<AuthorizersOutput, ApiGatewayError> {
        let state = self.inner.lock().await;
        let api = get_api(&state.apis, rest_api_id)?;
        let mut authorizers: Vec<&Authorizer> = api.authorizers.values().collect();
        authorizers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(AuthorizersOutput {
            items: authorizers.into_iter().map(authorizer_to_output).collect(),
            position: None,
        })
    }

    pub async fn update_authorizer(
        &self,
        rest_api_id: &str,
        authorizer_id: &str,
        req: UpdateRequest,
    ) -> Result<AuthorizerOutput, ApiGatewayError> {
        let mut state = self.inner.lock().await;
        let api = get_api_mut(&mut state.apis, rest_api_id)?;
        let authorizer = api
            .authorizers
            .get_mut(authorizer_id)
            .ok_or_else(authorizer_not_found)?;

        let mut updated = authorizer.clone();
        for op in &req.patch_operations {
            let value = op.value_or_default();
            match op.path.as_str() {
                "/name" => updated.name = value,
                "/type" => updated.authorizer_type = value,
                "/authType" => updated.auth_type = Some(value),
                "/identitySource" => updated.identity_source = Some(value),
                "/providerARNs" => updated.provider_arns = Some(vec![value]),
                "/authorizerResultTtlInSeconds" => {
                    updated.authorizer_result_ttl_in_seconds = patch::as_i64(&value)?;
                }
                path => return Err(patch::unknown_path(path)),
            }
        }
        *authorizer = updated;
        Ok(authorizer_to_output(authorizer))
    }

    pub async fn delete_authorizer(
        &self,
        rest_api_id: &str,
        authorizer_id: &str,
    ) -> Result<(), ApiGatewayError> {
        let mut state = self.inner.lock().await;
        let api = get_api_mut(&mut state.apis, rest_api_id)?;
        if api.authorizers.remove(authorizer_id).is_none() {
            return Err(authorizer_not_found());
        }
        Ok(())
    }

    // --- Deployments ---

    pub async fn create_deployment(
        &self,
        rest_api_id: &str,
        req: CreateDeploymentRequest,
    ) -> Result<DeploymentOutput, ApiGatewayError> {
        let mut state = self.inner.lock().await;
        let api = get_api_mut(&mut state.apis, rest_api_id)?;

        let id = short_id();
        let deployment = Deployment::new(id.clone(), req.description);

        if let Some(stage_name) = req.stage_name {
            let stage = api
                .stages
                .entry(stage_name.clone())
                .or_insert_with(|| Stage::new(stage_name, None, req.stage_description));
            stage.deployment_id = Some(id.clone());
            stage.last_updated_date = now();
            if !req.variables.is_empty() {
                stage.variables = req.variables;
            }
        }

        let output = deployment_to_output(&deployment);
        api.deployments.insert(id, deployment);
        Ok(output)
    }

    pub async fn get_deployment(
        &self,
        rest_api_id: &str,
        deployment_id: &str,
    ) -> Result<DeploymentOutput, ApiGatewayError> {
        let state = self.inner.lock().await;
        let api = get_api(&state.apis, rest_api_id)?;
        let deployment = api
            .deployments
            .get(deployment_id)
            .ok_or_else(deployment_not_found)?;
        Ok(deployment_to_output(deployment))
    }

    pub async fn get_deployments(
        &self,
        rest_api_id: &str,
    ) -> Result<DeploymentsOutput, ApiGatewayError> {
        let state = self.inner.lock().await;
        let api = get_api(&state.apis, rest_api_id)?;
        let mut deployments: Vec<&Deployment> = api.deployments.values().collect();
        deployments.sort_by(|a, b| {
            b.created_date
                .partial_cmp(&a.created_date)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(DeploymentsOutput {
            items: deployments.into_iter().map(deployment_to_output).collect(),
            position: None,
        })
    }

    // --- Stages ---

    pub async fn create_stage(
        &self,
        rest_api_id: &str,
        req: CreateStageRequest,
    ) -> Result<StageOutput, ApiGatewayError> {
        let mut state = self.inner.lock().await;
        let api = get_api_mut(&mut state.apis, rest_api_id)?;

        if api.stages.contains_key(&req.stage_name) {
            return Err(ApiGatewayError::ConflictException(format!(
                "Stage already exists: {}",
                req.stage_name
            )));
        }
        if !api.deployments.contains_key(&req.deployment_id) {
            return Err(deployment_not_found());
        }

        let mut stage = Stage::new(
            req.stage_name.clone(),
            Some(req.deployment_id),
            req.description,
        );
        stage.variables = req.variables;
        stage.tags = req.tags;

        let output = stage_to_output(&stage);
        api.stages.insert(req.stage_name, stage);
        Ok(output)
    }

    pub async fn get_stage(
        &self,
        rest_api_id: &str,
        stage_name: &str,
    ) -> Result<StageOutput, ApiGatewayError> {
        let state = self.inner.lock().await;
        let api = get_api(&state.apis, rest_api_id)?;
        let stage = api.stages.get(stage_name).ok_or_else(stage_not_found)?;
        Ok(stage_to_output(stage))
    }

    pub async fn get_stages(&self, rest_api_id: &str) -> Result<StagesOutput, ApiGatewayError> {
        let state = self.inner.lock().await;
        let api = get_api(&state.apis, rest_api_id)?;
        let mut stages: Vec<&Stage> = api.stages.values().collect();
        stages.sort_by(|a, b| a.stage_name.cmp(&b.stage_name));
        Ok(StagesOutput {
            items: stages.into_iter().map(stage_to_output).collect(),
        })
    }

    // --- Models ---

    pub async fn create_model(
        &self,
        rest_api_id: &str,
        req: CreateModelRequest,
    ) -> Result<ModelOutput, ApiGatewayError> {
        let mut state = self.inner.lock().await;
        let api = state.apis.get_mut(rest_api_id).ok_or_else(|| {
            ApiGatewayError::NotFoundException("Invalid Rest API Id specified".to_string())
        })?;
        if req.name.is_empty() {
            return Err(ApiGatewayError::BadRequestException(
                "No Model Name specified".to_string(),
            ));
        }

        let model = Model {
            id: short_id(),
            name: req.name.clone(),
            description: req.description,
            content_type: req.content_type,
            schema: req.schema,
        };
        let output = model_to_output(&model);
        api.models.insert(req.name, model);
        Ok(output)
    }

    pub async fn get_models(&self, rest_api_id: &str) -> Result<ModelsOutput, ApiGatewayError> {
        let state = self.inner.lock().await;
        let api = state.apis.get(rest_api_id).ok_or_else(|| {
            ApiGatewayError::NotFoundException("Invalid Rest API Id specified".to_string())
        })?;
        let mut models: Vec<&Model> = api.models.values().collect();
        models.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(ModelsOutput {
            items: models.into_iter().map(model_to_output).collect(),
            position: None,
        })
    }

    pub async fn get_model(
        &self,
        rest_api_id: &str,
        model_name: &str,
    ) -> Result<ModelOutput, ApiGatewayError> {
        let state = self.inner.lock().await;
        let api = state.apis.get(rest_api_id).ok_or_else(|| {
            ApiGatewayError::NotFoundException("Invalid Rest API Id specified".to_string())
        })?;
        let model = api.models.get(model_name).ok_or_else(|| {
            ApiGatewayError::NotFoundException("Invalid Model Name specified".to_string())
        })?;
        Ok(model_to_output(model))
    }

    // --- API keys ---

    pub async fn create_api_key(
        &self,
        req: CreateApiKeyRequest,
    ) -> Result<ApiKeyOutput, ApiGatewayError> {
        let mut state = self.inner.lock().await;

        let value = match req.value {
            Some(value) => {
                if value.len() < 20 {
                    return Err(ApiGatewayError::BadRequestException(
                        "API Key value should be at least 20 characters".to_string(),
                    ));
                }
                value
            }
            None => generate_api_key_value(),
        };
        let duplicate = state
            .api_keys
            .values()
            .any(|k| k.name == req.name && k.value == value);
        if duplicate {
            return Err(ApiGatewayError::ConflictException(
                "API Key already exists".to_string(),
            ));
        }

        let ts = now();
        let key = ApiKey {
            id: short_id(),
            name: req.name,
            value,
            customer_id: req.customer_id,
            description: req.description,
            enabled: req.enabled,
            created_date: ts,
            last_updated_date: ts,
            stage_keys: req
                .stage_keys
                .into_iter()
                .map(|sk| format!("{}/{}", sk.rest_api_id, sk.stage_name))
                .collect(),
            tags: req.tags,
        };
        let output = api_key_to_output(&key, true);
        state.api_keys.insert(key.id.clone(), key);
        Ok(output)
    }

    pub async fn get_api_key(
        &self,
        api_key_id: &str,
        include_value: bool,
    ) -> Result<ApiKeyOutput, ApiGatewayError> {
        let state = self.inner.lock().await;
        let key = get_api_key(&state.api_keys, api_key_id)?;
        Ok(api_key_to_output(key, include_value))
    }

    pub async fn get_api_keys(&self, include_values: bool) -> Result<ApiKeysOutput, ApiGatewayError> {
        let state = self.inner.lock().await;
        let mut keys: Vec<&ApiKey> = state.api_keys.values().collect();
        keys.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(ApiKeysOutput {
            items: keys
                .into_iter()
                .map(|k| api_key_to_output(k, include_values))
                .collect(),
            position: None,
        })
    }

    pub async fn update_api_key(
        &self,
        api_key_id: &str,
        req: UpdateRequest,
    ) -> Result<ApiKeyOutput, ApiGatewayError> {
        let mut state = self.inner.lock().await;
        let key = state
            .api_keys
            .get_mut(api_key_id)
            .ok_or_else(api_key_not_found)?;

        let mut updated = key.clone();
        for op in &req.patch_operations {
            let value = op.value_or_default();
            match op.path.as_str() {
                "/name" => updated.name = Some(value),
                "/customerId" => updated.customer_id = Some(value),
                "/description" => updated.description = Some(value),
                "/enabled" => updated.enabled = patch::as_bool(&value),
                path => return Err(patch::unknown_path(path)),
            }
        }
        updated.last_updated_date = now();
        *key = updated;
        Ok(api_key_to_output(key, false))
    }

    pub async fn delete_api_key(&self, api_key_id: &str) -> Result<(), ApiGatewayError> {
        let mut state = self.inner.lock().await;
        if state.api_keys.remove(api_key_id).is_none() {
            return Err(api_key_not_found());
        }
        Ok(())
    }

    // --- Usage plans ---

    pub async fn create_usage_plan(
        &self,
        req: CreateUsagePlanRequest,
    ) -> Result<UsagePlanOutput, ApiGatewayError> {
        let mut state = self.inner.lock().await;
        let plan = UsagePlan {
            id: short_id(),
            name: req.name,
            description: req.description,
            api_stages: req.api_stages,
            throttle: req.throttle,
            quota: req.quota,
            product_code: req.product_code,
            tags: req.tags,
        };
        let output = usage_plan_to_output(&plan);
        state.usage_plans.insert(plan.id.clone(), plan);
        Ok(output)
    }

    pub async fn get_usage_plan(
        &self,
        usage_plan_id: &str,
    ) -> Result<UsagePlanOutput, ApiGatewayError> {
        let state = self.inner.lock().await;
        let plan = state
            .usage_plans
            .get(usage_plan_id)
            .ok_or_else(usage_plan_not_found)?;
        Ok(usage_plan_to_output(plan))
    }

    pub async fn get_usage_plans(
        &self,
        key_id: Option<&str>,
    ) -> Result<UsagePlansOutput, ApiGatewayError> {
        let state = self.inner.lock().await;
        let mut plans: Vec<&UsagePlan> = state
            .usage_plans
            .values()
            .filter(|plan| match key_id {
                Some(key_id) => state
                    .usage_plan_keys
                    .get(&plan.id)
                    .map(|keys| keys.contains(key_id))
                    .unwrap_or(false),
                None => true,
            })
            .collect();
        plans.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(UsagePlansOutput {
            items: plans.into_iter().map(usage_plan_to_output).collect(),
            position: None,
        })
    }

    pub async fn update_usage_plan(
        &self,
        usage_plan_id: &str,
        req: UpdateRequest,
    ) -> Result<UsagePlanOutput, ApiGatewayError> {
        let mut state = self.inner.lock().await;
        let plan = state
            .usage_plans
            .get_mut(usage_plan_id)
            .ok_or_else(usage_plan_not_found)?;

        let mut updated = plan.clone();
        for op in &req.patch_operations {
            let value = op.value_or_default();
            match op.path.as_str() {
                "/name" => updated.name = Some(value),
                "/description" => updated.description = Some(value),
                "/productCode" => updated.product_code = Some(value),
                "/quota/limit" => {
                    updated.quota.get_or_insert_with(default_quota).limit =
                        Some(patch::as_i64(&value)?);
                }
                "/quota/period" => {
                    updated.quota.get_or_insert_with(default_quota).period = Some(value);
                }
                "/quota/offset" => {
                    updated.quota.get_or_insert_with(default_quota).offset =
                        Some(patch::as_i64(&value)?);
                }
                "/throttle/rateLimit" => {
                    updated
                        .throttle
                        .get_or_insert_with(default_throttle)
                        .rate_limit = Some(patch::as_f64(&value)?);
                }
                "/throttle/burstLimit" => {
                    updated
                        .throttle
                        .get_or_insert_with(default_throttle)
                        .burst_limit = Some(patch::as_i64(&value)?);
                }
                path => return Err(patch::unknown_path(path)),
            }
        }
        *plan = updated;
        Ok(usage_plan_to_output(plan))
    }

    pub async fn delete_usage_plan(&self, usage_plan_id: &str) -> Result<(), ApiGatewayError> {
        let mut state = self.inner.lock().await;
        if state.usage_plans.remove(usage_plan_id).is_none() {
            return Err(usage_plan_not_found());
        }
        state.usage_plan_keys.remove(usage_plan_id);
        Ok(())
    }

    // --- Usage plan keys ---

    pub async fn create_usage_plan_key(
        &self,
        usage_plan_id: &str,
        req: CreateUsagePlanKeyRequest,
    ) -> Result<UsagePlanKeyOutput, ApiGatewayError> {
        let mut state = self.inner.lock().await;
        if !state.api_keys.contains_key(&req.key_id) {
            return Err(api_key_not_found());
        }
        state
            .usage_plan_keys
            .entry(usage_plan_id.to_string())
            .or_default()
            .insert(req.key_id.clone());
        let key = &state.api_keys[&req.key_id];
        Ok(usage_plan_key_to_output(key))
    }

    pub async fn get_usage_plan_key(
        &self,
        usage_plan_id: &str,
        key_id: &str,
    ) -> Result<UsagePlanKeyOutput, ApiGatewayError> {
        let state = self.inner.lock().await;
        // The key id is resolved before the plan linkage; each miss has its
        // own message.
        let key = get_api_key(&state.api_keys, key_id)?;
        let attached = state
            .usage_plan_keys
            .get(usage_plan_id)
            .map(|keys| keys.contains(key_id))
            .unwrap_or(false);
        if !attached {
            return Err(usage_plan_not_found());
        }
        Ok(usage_plan_key_to_output(key))
    }

    pub async fn get_usage_plan_keys(
        &self,
        usage_plan_id: &str,
    ) -> Result<UsagePlanKeysOutput, ApiGatewayError> {
        let state = self.inner.lock().await;
        let mut items: Vec<UsagePlanKeyOutput> = state
            .usage_plan_keys
            .get(usage_plan_id)
            .map(|keys| {
                keys.iter()
                    .filter_map(|key_id| state.api_keys.get(key_id))
                    .map(usage_plan_key_to_output)
                    .collect()
            })
            .unwrap_or_default();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(UsagePlanKeysOutput {
            items,
            position: None,
        })
    }

    pub async fn delete_usage_plan_key(
        &self,
        usage_plan_id: &str,
        key_id: &str,
    ) -> Result<(), ApiGatewayError> {
        let mut state = self.inner.lock().await;
        if let Some(keys) = state.usage_plan_keys.get_mut(usage_plan_id) {
            keys.remove(key_id);
        }
        Ok(())
    }

    // --- Domain names ---

    pub async fn create_domain_name(
        &self,
        req: CreateDomainNameRequest,
    ) -> Result<DomainNameOutput, ApiGatewayError> {
        let mut state = self.inner.lock().await;
        if req.domain_name.is_empty() {
            return Err(ApiGatewayError::BadRequestException(
                "No Domain Name specified".to_string(),
            ));
        }

        let mut domain = DomainName::new(req.domain_name.clone());
        domain.certificate_name = req.certificate_name;
        domain.certificate_private_key = req.certificate_private_key;

        let output = domain_to_output(&domain);
        state.domain_names.insert(req.domain_name, domain);
        Ok(output)
    }

    pub async fn get_domain_name(
        &self,
        domain_name: &str,
    ) -> Result<DomainNameOutput, ApiGatewayError> {
        let state = self.inner.lock().await;
        let domain = get_domain(&state.domain_names, domain_name)?;
        Ok(domain_to_output(domain))
    }

    pub async fn get_domain_names(&self) -> Result<DomainNamesOutput, ApiGatewayError> {
        let state = self.inner.lock().await;
        let mut domains: Vec<&DomainName> = state.domain_names.values().collect();
        domains.sort_by(|a, b| a.domain_name.cmp(&b.domain_name));
        Ok(DomainNamesOutput {
            items: domains.into_iter().map(domain_to_output).collect(),
            position: None,
        })
    }

    pub async fn delete_domain_name(&self, domain_name: &str) -> Result<(), ApiGatewayError> {
        let mut state = self.inner.lock().await;
        if state.domain_names.remove(domain_name).is_none() {
            return Err(domain_not_found());
        }
        Ok(())
    }

    // --- Base path mappings ---

    pub async fn create_base_path_mapping(
        &self,
        domain_name: &str,
        req: CreateBasePathMappingRequest,
    ) -> Result<BasePathMappingOutput, ApiGatewayError> {
        let mut state = self.inner.lock().await;
        let inner = &mut *state;
        let domain = get_domain_mut(&mut inner.domain_names, domain_name)?;

        let api = inner.apis.get(&req.rest_api_id).ok_or_else(|| {
            ApiGatewayError::BadRequestException(
                "Invalid REST API identifier specified".to_string(),
            )
        })?;
        if let Some(base_path) = &req.base_path {
            if base_path.contains('/') {
                return Err(ApiGatewayError::BadRequestException(
                    BASE_PATH_SLASH_MESSAGE.to_string(),
                ));
            }
        }
        if let Some(stage) = &req.stage {
            if !api.stages.contains_key(stage) {
                return Err(ApiGatewayError::BadRequestException(
                    "Invalid stage identifier specified".to_string(),
                ));
            }
        }

        let base_path = req.base_path.unwrap_or_else(|| EMPTY_BASE_PATH.to_string());
        if domain.base_path_mappings.contains_key(&base_path) {
            return Err(ApiGatewayError::ConflictException(
                "Base path already exists for this domain name".to_string(),
            ));
        }

        let mapping = BasePathMapping {
            base_path: base_path.clone(),
            rest_api_id: req.rest_api_id,
            stage: req.stage,
        };
        let output = mapping_to_output(&mapping);
        domain.base_path_mappings.insert(base_path, mapping);
        Ok(output)
    }

    pub async fn get_base_path_mapping(
        &self,
        domain_name: &str,
        base_path: &str,
    ) -> Result<BasePathMappingOutput, ApiGatewayError> {
        let state = self.inner.lock().await;
        let domain = get_domain(&state.domain_names, domain_name)?;
        let mapping = domain
            .base_path_mappings
            .get(base_path)
            .ok_or_else(mapping_not_found)?;
        Ok(mapping_to_output(mapping))
    }

    pub async fn get_base_path_mappings(
        &self,
        domain_name: &str,
    ) -> Result<BasePathMappingsOutput, ApiGatewayError> {
        let state = self.inner.lock().await;
        let domain = get_domain(&state.domain_names, domain_name)?;
        let mut mappings: Vec<&BasePathMapping> = domain.base_path_mappings.values().collect();
        mappings.sort_by(|a, b| a.base_path.cmp(&b.base_path));
        Ok(BasePathMappingsOutput {
            items: mappings.into_iter().map(mapping_to_output).collect(),
            position: None,
        })
    }

    pub async fn update_base_path_mapping(
        &self,
        domain_name: &str,
        base_path: &str,
        req: UpdateRequest,
    ) -> Result<BasePathMappingOutput, ApiGatewayError> {
        let mut state = self.inner.lock().await;
        let inner = &mut *state;
        let domain = get_domain_mut(&mut inner.domain_names, domain_name)?;
        let mapping = domain
            .base_path_mappings
            .get(base_path)
            .ok_or_else(mapping_not_found)?
            .clone();

        // Gather every patched value before validating, so a stage that only
        // exists on the patched-in API is still accepted.
        let mut new_stage: Option<String> = None;
        let mut new_base_path: Option<String> = None;
        let mut new_rest_api_id: Option<String> = None;
        for op in &req.patch_operations {
            let value = op.value_or_default();
            match op.path.as_str() {
                "/stage" => new_stage = Some(value),
                "/basePath" => new_base_path = Some(value),
                "/restapiId" => new_rest_api_id = Some(value),
                path => return Err(patch::unknown_path(path)),
            }
        }

        let target_api_id = new_rest_api_id
            .clone()
            .unwrap_or_else(|| mapping.rest_api_id.clone());
        if new_rest_api_id.is_some() && !inner.apis.contains_key(&target_api_id) {
            return Err(ApiGatewayError::BadRequestException(
                "Invalid REST API identifier specified".to_string(),
            ));
        }
        if let Some(stage) = &new_stage {
            let stage_exists = inner
                .apis
                .get(&target_api_id)
                .map(|api| api.stages.contains_key(stage))
                .unwrap_or(false);
            if !stage_exists {
                return Err(ApiGatewayError::BadRequestException(
                    "Invalid stage identifier specified".to_string(),
                ));
            }
        }
        if let Some(new_base) = &new_base_path {
            if new_base.contains('/') {
                return Err(ApiGatewayError::BadRequestException(
                    BASE_PATH_SLASH_MESSAGE.to_string(),
                ));
            }
            if new_base != base_path && domain.base_path_mappings.contains_key(new_base) {
                return Err(ApiGatewayError::ConflictException(
                    "Base path already exists for this domain name".to_string(),
                ));
            }
        }

        let mut updated = mapping;
        if let Some(stage) = new_stage {
            updated.stage = Some(stage);
        }
        if let Some(api_id) = new_rest_api_id {
            updated.rest_api_id = api_id;
        }
        if let Some(new_base) = new_base_path {
            updated.base_path = new_base;
        }

        domain.base_path_mappings.remove(base_path);
        let output = mapping_to_output(&updated);
        domain
            .base_path_mappings
            .insert(updated.base_path.clone(), updated);
        Ok(output)
    }

    pub async fn delete_base_path_mapping(
        &self,
        domain_name: &str,
        base_path: &str,
    ) -> Result<(), ApiGatewayError> {
        let mut state = self.inner.lock().await;
        let domain = get_domain_mut(&mut state.domain_names, domain_name)?;
        if domain.base_path_mappings.remove(base_path).is_none() {
            return Err(mapping_not_found());
        }
        Ok(())
    }
}

// --- Lookup helpers ---

fn api_not_found() -> ApiGatewayError {
    ApiGatewayError::NotFoundException("Invalid REST API identifier specified".to_string())
}

fn resource_not_found() -> ApiGatewayError {
    ApiGatewayError::NotFoundException("Invalid resource identifier specified".to_string())
}

fn method_not_found() -> ApiGatewayError {
    ApiGatewayError::NotFoundException("Invalid Method identifier specified".to_string())
}

fn status_code_not_found() -> ApiGatewayError {
    ApiGatewayError::NotFoundException("Invalid Response status code specified".to_string())
}

fn integration_not_found() -> ApiGatewayError {
    ApiGatewayError::NotFoundException("Invalid Integration identifier specified".to_string())
}

fn authorizer_not_found() -> ApiGatewayError {
    ApiGatewayError::NotFoundException("Invalid Authorizer identifier specified".to_string())
}

fn deployment_not_found() -> ApiGatewayError {
    ApiGatewayError::NotFoundException("Invalid Deployment identifier specified".to_string())
}

fn stage_not_found() -> ApiGatewayError {
    ApiGatewayError::NotFoundException("Invalid stage identifier specified".to_string())
}

fn api_key_not_found() -> ApiGatewayError {
    ApiGatewayError::NotFoundException("Invalid API Key identifier specified".to_string())
}

fn usage_plan_not_found() -> ApiGatewayError {
    ApiGatewayError::NotFoundException("Invalid Usage Plan ID specified".to_string())
}

fn domain_not_found() -> ApiGatewayError {
    ApiGatewayError::NotFoundException("Invalid domain name identifier specified".to_string())
}

fn mapping_not_found() -> ApiGatewayError {
    ApiGatewayError::NotFoundException(
        "Invalid base path mapping identifier specified".to_string(),
    )
}

fn get_api<'a>(
    apis: &'a HashMap<String, RestApi>,
    api_id: &str,
) -> Result<&'a RestApi, ApiGatewayError> {
    apis.get(api_id).ok_or_else(api_not_found)
}

fn get_api_mut<'a>(
    apis: &'a mut HashMap<String, RestApi>,
    api_id: &str,
) -> Result<&'a mut RestApi, ApiGatewayError> {
    apis.get_mut(api_id).ok_or_else(api_not_found)
}

fn get_resource<'a>(
    resources: &'a HashMap<String, Resource>,
    resource_id: &str,
) -> Result<&'a Resource, ApiGatewayError> {
    resources.get(resource_id).ok_or_else(resource_not_found)
}

fn get_resource_mut<'a>(
    resources: &'a mut HashMap<String, Resource>,
    resource_id: &str,
) -> Result<&'a mut Resource, ApiGatewayError> {
    resources.get_mut(resource_id).ok_or_else(resource_not_found)
}

fn get_method<'a>(
    methods: &'a HashMap<String, Method>,
    http_method: &str,
) -> Result<&'a Method, ApiGatewayError> {
    methods
        .get(&http_method.to_uppercase())
        .ok_or_else(method_not_found)
}

fn get_method_mut<'a>(
    methods: &'a mut HashMap<String, Method>,
    http_method: &str,
) -> Result<&'a mut Method, ApiGatewayError> {
    methods
        .get_mut(&http_method.to_uppercase())
        .ok_or_else(method_not_found)
}

fn get_api_key<'a>(
    api_keys: &'a HashMap<String, ApiKey>,
    api_key_id: &str,
) -> Result<&'a ApiKey, ApiGatewayError> {
    api_keys.get(api_key_id).ok_or_else(api_key_not_found)
}

fn get_domain<'a>(
    domains: &'a HashMap<String, DomainName>,
    domain_name: &str,
) -> Result<&'a DomainName, ApiGatewayError> {
    domains.get(domain_name).ok_or_else(domain_not_found)
}

fn get_domain_mut<'a>(
    domains: &'a mut HashMap<String, DomainName>,
    domain_name: &str,
) -> Result<&'a mut DomainName, ApiGatewayError> {
    domains.get_mut(domain_name).ok_or_else(domain_not_found)
}

fn default_quota() -> Quota {
    Quota {
        limit: None,
        period: None,
        offset: None,
    }
}

fn default_throttle() -> Throttle {
    Throttle {
        rate_limit: None,
        burst_limit: None,
    }
}

// --- Conversion helpers ---

fn api_to_output(api: &RestApi) -> RestApiOutput {
    RestApiOutput {
        id: api.id.clone(),
        name: api.name.clone(),
        description: api.description.clone(),
        created_date: api.created_date,
        version: api.version.clone(),
        binary_media_types: api.binary_media_types.clone(),
        api_key_source: api.api_key_source.clone(),
        endpoint_configuration: EndpointConfiguration {
            types: api.endpoint_configuration.clone(),
        },
        policy: api.policy.clone(),
        tags: api.tags.clone(),
        disable_execute_api_endpoint: api.disable_execute_api_endpoint,
    }
}

fn resource_to_output(api: &RestApi, resource: &Resource) -> ResourceOutput {
    ResourceOutput {
        id: resource.id.clone(),
        parent_id: resource.parent_id.clone(),
        path_part: resource.path_part.clone(),
        path: api.resource_path(&resource.id),
        resource_methods: resource
            .resource_methods
            .iter()
            .map(|(verb, method)| (verb.clone(), method_to_output(method)))
            .collect(),
    }
}

fn method_to_output(method: &Method) -> MethodOutput {
    MethodOutput {
        http_method: method.http_method.clone(),
        authorization_type: method.authorization_type.clone(),
        authorizer_id: method.authorizer_id.clone(),
        api_key_required: method.api_key_required,
        request_parameters: method.request_parameters.clone(),
        request_models: method.request_models.clone(),
        method_integration: method.method_integration.as_ref().map(integration_to_output),
        method_responses: method
            .method_responses
            .iter()
            .map(|(code, response)| (code.clone(), method_response_to_output(response)))
            .collect(),
    }
}

fn method_response_to_output(response: &MethodResponse) -> MethodResponseOutput {
    MethodResponseOutput {
        status_code: response.status_code.clone(),
        response_parameters: response.response_parameters.clone(),
        response_models: response.response_models.clone(),
    }
}

fn integration_to_output(integration: &Integration) -> IntegrationOutput {
    IntegrationOutput {
        integration_type: integration.integration_type.clone(),
        uri: integration.uri.clone(),
        http_method: integration.http_method.clone(),
        passthrough_behavior: integration.passthrough_behavior.clone(),
        content_handling: integration.content_handling.clone(),
        timeout_in_millis: integration.timeout_in_millis,
        cache_key_parameters: integration.cache_key_parameters.clone(),
        request_parameters: integration.request_parameters.clone(),
        request_templates: integration.request_templates.clone(),
        integration_responses: integration.integration_responses.as_ref().map(|responses| {
            responses
                .iter()
                .map(|(code, response)| (code.clone(), integration_response_to_output(response)))
                .collect()
        }),
    }
}

fn integration_response_to_output(response: &IntegrationResponse) -> IntegrationResponseOutput {
    IntegrationResponseOutput {
        status_code: response.status_code.clone(),
        selection_pattern: response.selection_pattern.clone(),
        response_templates: response.response_templates.clone(),
        response_parameters: response.response_parameters.clone(),
        content_handling: response.content_handling.clone(),
    }
}

fn authorizer_to_output(authorizer: &Authorizer) -> AuthorizerOutput {
    AuthorizerOutput {
        id: authorizer.id.clone(),
        name: authorizer.name.clone(),
        authorizer_type: authorizer.authorizer_type.clone(),
        provider_arns: authorizer.provider_arns.clone(),
        auth_type: authorizer.auth_type.clone(),
        identity_source: authorizer.identity_source.clone(),
        authorizer_result_ttl_in_seconds: authorizer.authorizer_result_ttl_in_seconds,
    }
}

fn deployment_to_output(deployment: &Deployment) -> DeploymentOutput {
    DeploymentOutput {
        id: deployment.id.clone(),
        description: deployment.description.clone(),
        created_date: deployment.created_date,
    }
}

fn stage_to_output(stage: &Stage) -> StageOutput {
    StageOutput {
        stage_name: stage.stage_name.clone(),
        deployment_id: stage.deployment_id.clone(),
        description: stage.description.clone(),
        created_date: stage.created_date,
        last_updated_date: stage.last_updated_date,
        variables: stage.variables.clone(),
        tags: stage.tags.clone(),
    }
}

fn model_to_output(model: &Model) -> ModelOutput {
    ModelOutput {
        id: model.id.clone(),
        name: model.name.clone(),
        description: model.description.clone(),
        content_type: model.content_type.clone(),
        schema: model.schema.clone(),
    }
}

fn api_key_to_output(key: &ApiKey, include_value: bool) -> ApiKeyOutput {
    ApiKeyOutput {
        id: key.id.clone(),
        value: include_value.then(|| key.value.clone()),
        name: key.name.clone(),
        customer_id: key.customer_id.clone(),
        description: key.description.clone(),
        enabled: key.enabled,
        created_date: key.created_date,
        last_updated_date: key.last_updated_date,
        stage_keys: key.stage_keys.clone(),
        tags: key.tags.clone(),
    }
}

fn usage_plan_to_output(plan: &UsagePlan) -> UsagePlanOutput {
    UsagePlanOutput {
        id: plan.id.clone(),
        name: plan.name.clone(),
        description: plan.description.clone(),
        api_stages: plan.api_stages.clone(),
        throttle: plan.throttle.clone(),
        quota: plan.quota.clone(),
        product_code: plan.product_code.clone(),
        tags: plan.tags.clone(),
    }
}

fn usage_plan_key_to_output(key: &ApiKey) -> UsagePlanKeyOutput {
    UsagePlanKeyOutput {
        id: key.id.clone(),
        key_type: "API_KEY".to_string(),
        value: key.value.clone(),
        name: key.name.clone(),
    }
}

fn domain_to_output(domain: &DomainName) -> DomainNameOutput {
    DomainNameOutput {
        domain_name: domain.domain_name.clone(),
        certificate_name: domain.certificate_name.clone(),
        domain_name_status: domain.domain_name_status.clone(),
    }
}

fn mapping_to_output(mapping: &BasePathMapping) -> BasePathMappingOutput {
    BasePathMappingOutput {
        base_path: mapping.base_path.clone(),
        rest_api_id: mapping.rest_api_id.clone(),
        stage: mapping.stage.clone(),
    }
}
