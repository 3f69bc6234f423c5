use serde::Deserialize;

use super::error::ApiGatewayError;

/// One `{op, path, value}` mutation, following the add/remove/replace subset
/// of JSON Patch that the management API accepts.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchOperation {
    pub op: String,
    pub path: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl PatchOperation {
    pub fn value_or_default(&self) -> String {
        self.value.clone().unwrap_or_default()
    }
}

pub fn unknown_path(path: &str) -> ApiGatewayError {
    ApiGatewayError::BadRequestException(format!("Invalid patch path '{}'", path))
}

/// Patch values arrive as strings regardless of the target field's type.
pub fn as_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

pub fn as_i64(value: &str) -> Result<i64, ApiGatewayError> {
    value.parse().map_err(|_| {
        ApiGatewayError::BadRequestException(format!("Invalid patch value specified: {}", value))
    })
}

pub fn as_f64(value: &str) -> Result<f64, ApiGatewayError> {
    value.parse().map_err(|_| {
        ApiGatewayError::BadRequestException(format!("Invalid patch value specified: {}", value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_coercion_is_case_insensitive() {
        assert!(as_bool("true"));
        assert!(as_bool("True"));
        assert!(!as_bool("false"));
        assert!(!as_bool("False"));
        assert!(!as_bool("yes"));
    }

    #[test]
    fn numeric_coercions() {
        assert_eq!(as_i64("1000").unwrap(), 1000);
        assert_eq!(as_f64("2").unwrap(), 2.0);
        assert!(as_i64("ten").is_err());
        assert!(as_f64("").is_err());
    }

    #[test]
    fn unknown_path_is_bad_request() {
        let err = unknown_path("/notasetting");
        assert_eq!(err.error_type(), "BadRequestException");
        assert_eq!(err.message(), "Invalid patch path '/notasetting'");
    }
}
