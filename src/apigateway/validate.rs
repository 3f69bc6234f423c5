use std::sync::LazyLock;

use regex::Regex;

use super::error::ApiGatewayError;

pub const API_KEY_SOURCES: [&str; 2] = ["AUTHORIZER", "HEADER"];
pub const ENDPOINT_TYPES: [&str; 3] = ["PRIVATE", "EDGE", "REGIONAL"];

static PATH_PART: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z0-9._-]+|\{[a-zA-Z0-9._-]+\+?\})$").unwrap()
});

static HTTP_ENDPOINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/]+").unwrap());

static ARN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^arn:aws:").unwrap());

static SERVICE_PROXY_ARN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^arn:aws:apigateway:[a-zA-Z0-9-]+:[a-zA-Z0-9.-]+:(path|action)/").unwrap()
});

static LAMBDA_INVOCATION_ARN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^arn:aws:apigateway:[a-zA-Z0-9-]+:lambda:path/").unwrap());

static PROXY_INVOCATION_ARN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^arn:aws:apigateway:[a-zA-Z0-9-]+:(lambda|firehose):").unwrap()
});

static ROLE_ARN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^arn:aws:iam::(\d+):").unwrap());

/// A path part is either a bare segment of `a-zA-Z0-9._-` or that same
/// segment wrapped in `{}`, optionally greedy (`{proxy+}`).
pub fn validate_path_part(path_part: &str) -> Result<(), ApiGatewayError> {
    if PATH_PART.is_match(path_part) {
        Ok(())
    } else {
        Err(ApiGatewayError::BadRequestException(
            "Resource's path part only allow a-zA-Z0-9._- and curly braces at the \
             beginning and the end and an optional plus sign before the closing brace."
                .to_string(),
        ))
    }
}

pub fn validate_api_key_source(value: &str) -> Result<(), ApiGatewayError> {
    if API_KEY_SOURCES.contains(&value) {
        return Ok(());
    }
    Err(ApiGatewayError::ValidationException(format!(
        "1 validation error detected: Value '{}' at 'createRestApiInput.apiKeySource' \
         failed to satisfy constraint: Member must satisfy enum value set: [{}]",
        value,
        API_KEY_SOURCES.join(", ")
    )))
}

pub fn validate_endpoint_types(types: &[String]) -> Result<(), ApiGatewayError> {
    if types.iter().all(|t| ENDPOINT_TYPES.contains(&t.as_str())) {
        return Ok(());
    }
    Err(ApiGatewayError::ValidationException(format!(
        "1 validation error detected: Value '[{}]' at \
         'createRestApiInput.endpointConfiguration.types' failed to satisfy constraint: \
         Member must satisfy enum value set: [{}]",
        types.join(", "),
        ENDPOINT_TYPES.join(", ")
    )))
}

pub fn is_http_endpoint(uri: &str) -> bool {
    HTTP_ENDPOINT.is_match(uri)
}

pub fn is_arn(uri: &str) -> bool {
    ARN.is_match(uri)
}

/// Service-proxy ARNs carry a `path/` or `action/` segment after the target
/// service; anything else is malformed for an integration URI.
pub fn arn_has_path_or_action(uri: &str) -> bool {
    SERVICE_PROXY_ARN.is_match(uri)
}

pub fn is_lambda_invocation_arn(uri: &str) -> bool {
    LAMBDA_INVOCATION_ARN.is_match(uri)
}

/// AWS_PROXY integrations only accept Lambda function and Firehose stream
/// targets.
pub fn is_aws_proxy_target(uri: &str) -> bool {
    PROXY_INVOCATION_ARN.is_match(uri)
}

pub fn role_belongs_to_account(role_arn: &str, account_id: &str) -> bool {
    ROLE_ARN
        .captures(role_arn)
        .map(|c| &c[1] == account_id)
        .unwrap_or(false)
}
