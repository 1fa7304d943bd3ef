#[cfg(feature = "cli")]
pub mod cli;
pub mod file;
pub mod lambda;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use file::FileConfig;
pub use lambda::LambdaConfig;

use crate::adapters::dynamodb::table_name_from_arn;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_aws_region, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_REGION: &str = "us-east-2";

/// Where the coverage table lives. Every entry point resolves to one of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamoDbSettings {
    pub table_arn: String,
    pub region: String,
    pub endpoint_url: Option<String>,
}

impl ConfigProvider for DynamoDbSettings {
    fn table_arn(&self) -> &str {
        &self.table_arn
    }

    fn region(&self) -> &str {
        &self.region
    }

    fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url.as_deref()
    }
}

impl Validate for DynamoDbSettings {
    fn validate(&self) -> Result<()> {
        table_name_from_arn(&self.table_arn)?;
        validate_aws_region("region", &self.region)?;
        if let Some(endpoint) = &self.endpoint_url {
            validate_url("endpoint_url", endpoint)?;
        }

        tracing::debug!("DynamoDB configuration validation passed");
        Ok(())
    }
}
