use std::collections::HashMap;

use super::types::{ApiStage, Quota, Throttle};

pub fn now() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs_f64()
}

/// Sentinel base path for a mapping bound to the domain root.
pub const EMPTY_BASE_PATH: &str = "(none)";

#[derive(Debug, Clone)]
pub struct RestApi {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_date: f64,
    pub version: String,
    pub binary_media_types: Vec<String>,
    pub api_key_source: String,
    pub endpoint_configuration: Vec<String>,
    pub policy: Option<String>,
    pub tags: HashMap<String, String>,
    pub disable_execute_api_endpoint: bool,
    pub resources: HashMap<String, Resource>,
    pub authorizers: HashMap<String, Authorizer>,
    pub deployments: HashMap<String, Deployment>,
    pub stages: HashMap<String, Stage>,
    pub models: HashMap<String, Model>,
}

impl RestApi {
    pub fn new(id: String, root_resource_id: String, name: String) -> Self {
        let root = Resource {
            id: root_resource_id.clone(),
            parent_id: None,
            path_part: None,
            resource_methods: HashMap::new(),
        };
        let mut resources = HashMap::new();
        resources.insert(root_resource_id, root);
        RestApi {
            id,
            name,
            description: None,
            created_date: now(),
            version: "V1".to_string(),
            binary_media_types: Vec::new(),
            api_key_source: "HEADER".to_string(),
            endpoint_configuration: vec!["EDGE".to_string()],
            policy: None,
            tags: HashMap::new(),
            disable_execute_api_endpoint: false,
            resources,
            authorizers: HashMap::new(),
            deployments: HashMap::new(),
            stages: HashMap::new(),
            models: HashMap::new(),
        }
    }

    /// Full path of a resource, derived by walking parent links to the root.
    /// The walk is bounded by the resource count so a corrupted parent chain
    /// cannot loop forever.
    pub fn resource_path(&self, resource_id: &str) -> String {
        let mut parts: Vec<&str> = Vec::new();
        let mut current = self.resources.get(resource_id);
        let mut hops = 0;
        while let Some(resource) = current {
            if let Some(part) = &resource.path_part {
                parts.push(part);
            }
            hops += 1;
            if hops > self.resources.len() {
                break;
            }
            current = resource
                .parent_id
                .as_deref()
                .and_then(|id| self.resources.get(id));
        }
        if parts.is_empty() {
            "/".to_string()
        } else {
            parts.reverse();
            format!("/{}", parts.join("/"))
        }
    }
}

#[derive(Debug, Clone)]
pub struct Resource {
    pub id: String,
    pub parent_id: Option<String>,
    pub path_part: Option<String>,
    pub resource_methods: HashMap<String, Method>,
}

#[derive(Debug, Clone)]
pub struct Method {
    pub http_method: String,
    pub authorization_type: String,
    pub authorizer_id: Option<String>,
    pub api_key_required: bool,
    pub request_parameters: HashMap<String, bool>,
    pub request_models: HashMap<String, String>,
    pub method_integration: Option<Integration>,
    pub method_responses: HashMap<String, MethodResponse>,
}

impl Method {
    pub fn new(http_method: String, authorization_type: String) -> Self {
        Method {
            http_method,
            authorization_type,
            authorizer_id: None,
            api_key_required: false,
            request_parameters: HashMap::new(),
            request_models: HashMap::new(),
            method_integration: None,
            method_responses: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MethodResponse {
    pub status_code: String,
    pub response_parameters: HashMap<String, bool>,
    pub response_models: HashMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct Integration {
    pub integration_type: String,
    pub uri: Option<String>,
    pub http_method: Option<String>,
    pub credentials: Option<String>,
    pub passthrough_behavior: String,
    pub content_handling: Option<String>,
    pub timeout_in_millis: Option<i64>,
    pub cache_key_parameters: Vec<String>,
    pub request_parameters: HashMap<String, String>,
    pub request_templates: HashMap<String, String>,
    // None until the first putIntegrationResponse; stays a map afterwards
    // even when emptied again.
    pub integration_responses: Option<HashMap<String, IntegrationResponse>>,
}

impl Integration {
    pub fn new(integration_type: String, uri: Option<String>, http_method: Option<String>) -> Self {
        Integration {
            integration_type,
            uri,
            http_method,
            credentials: None,
            passthrough_behavior: "WHEN_NO_MATCH".to_string(),
            content_handling: None,
            timeout_in_millis: None,
            cache_key_parameters: Vec::new(),
            request_parameters: HashMap::new(),
            request_templates: HashMap::new(),
            integration_responses: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IntegrationResponse {
    pub status_code: String,
    pub selection_pattern: Option<String>,
    pub response_templates: HashMap<String, String>,
    pub response_parameters: HashMap<String, String>,
    pub content_handling: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Authorizer {
    pub id: String,
    pub name: String,
    pub authorizer_type: String,
    pub provider_arns: Option<Vec<String>>,
    pub auth_type: Option<String>,
    pub identity_source: Option<String>,
    pub authorizer_result_ttl_in_seconds: i64,
}

#[derive(Debug, Clone)]
pub struct Deployment {
    pub id: String,
    pub description: Option<String>,
    pub created_date: f64,
}

impl Deployment {
    pub fn new(id: String, description: Option<String>) -> Self {
        Deployment {
            id,
            description,
            created_date: now(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Stage {
    pub stage_name: String,
    pub deployment_id: Option<String>,
    pub description: Option<String>,
    pub created_date: f64,
    pub last_updated_date: f64,
    pub variables: HashMap<String, String>,
    pub tags: HashMap<String, String>,
}

impl Stage {
    pub fn new(stage_name: String, deployment_id: Option<String>, description: Option<String>) -> Self {
        let ts = now();
        Stage {
            stage_name,
            deployment_id,
            description,
            created_date: ts,
            last_updated_date: ts,
            variables: HashMap::new(),
            tags: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Model {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub content_type: Option<String>,
    pub schema: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ApiKey {
    pub id: String,
    pub name: Option<String>,
    pub value: String,
    pub customer_id: Option<String>,
    pub description: Option<String>,
    pub enabled: bool,
    pub created_date: f64,
    pub last_updated_date: f64,
    pub stage_keys: Vec<String>,
    pub tags: HashMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct UsagePlan {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub api_stages: Vec<ApiStage>,
    pub throttle: Option<Throttle>,
    pub quota: Option<Quota>,
    pub product_code: Option<String>,
    pub tags: HashMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct DomainName {
    pub domain_name: String,
    pub certificate_name: Option<String>,
    pub certificate_private_key: Option<String>,
    pub domain_name_status: String,
    pub base_path_mappings: HashMap<String, BasePathMapping>,
}

impl DomainName {
    pub fn new(domain_name: String) -> Self {
        DomainName {
            domain_name,
            certificate_name: None,
            certificate_private_key: None,
            domain_name_status: "AVAILABLE".to_string(),
            base_path_mappings: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BasePathMapping {
    pub base_path: String,
    pub rest_api_id: String,
    pub stage: Option<String>,
}
