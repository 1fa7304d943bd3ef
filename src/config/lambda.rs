use crate::config::{DynamoDbSettings, DEFAULT_REGION};
use crate::utils::error::{CoverageError, Result};
use std::env;

pub const DYNAMODB_ARN_VAR: &str = "DYNAMODB_ARN";
pub const REGION_VAR: &str = "AWS_REGION";
pub const ENDPOINT_VAR: &str = "DYNAMODB_ENDPOINT";

/// Environment backed configuration for the Lambda function.
pub struct LambdaConfig;

impl LambdaConfig {
    pub fn from_env() -> Result<DynamoDbSettings> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<DynamoDbSettings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_arn = lookup(DYNAMODB_ARN_VAR)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| CoverageError::MissingConfigError {
                field: DYNAMODB_ARN_VAR.to_string(),
            })?;

        Ok(DynamoDbSettings {
            table_arn,
            region: lookup(REGION_VAR)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
            endpoint_url: lookup(ENDPOINT_VAR).filter(|v| !v.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_defaults() {
        let settings =
            LambdaConfig::from_lookup(lookup(&[("DYNAMODB_ARN", "abc/coverage")])).unwrap();
        assert_eq!(settings.table_arn, "abc/coverage");
        assert_eq!(settings.region, "us-east-2");
        assert_eq!(settings.endpoint_url, None);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let settings = LambdaConfig::from_lookup(lookup(&[
            ("DYNAMODB_ARN", "abc/coverage"),
            ("AWS_REGION", "us-west-2"),
            ("DYNAMODB_ENDPOINT", "http://localhost:8000"),
        ]))
        .unwrap();
        assert_eq!(settings.region, "us-west-2");
        assert_eq!(settings.endpoint_url.as_deref(), Some("http://localhost:8000"));
    }

    #[test]
    fn test_missing_arn() {
        let err = LambdaConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, CoverageError::MissingConfigError { ref field } if field == "DYNAMODB_ARN"));

        assert!(LambdaConfig::from_lookup(lookup(&[("DYNAMODB_ARN", "")])).is_err());
    }
}
