use crate::config::{DynamoDbSettings, FileConfig, DEFAULT_REGION};
use crate::utils::error::{CoverageError, Result};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "coverage")]
#[command(about = "Query carrier coverage and CSA codes for a zip code")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// ARN of the coverage table
    #[arg(long, global = true, env = "DYNAMODB_ARN")]
    pub table_arn: Option<String>,

    #[arg(long, global = true, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Endpoint override, e.g. http://localhost:8000 for DynamoDB Local
    #[arg(long, global = true, env = "DYNAMODB_ENDPOINT")]
    pub endpoint_url: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check whether a zip code is covered by a carrier
    Check {
        #[arg(long)]
        zipcode: String,
        /// 1 = Sprint, 2 = Verizon
        #[arg(long)]
        carrierid: String,
    },
    /// Look up the Sprint CSA code for a zip code
    Csa {
        #[arg(long)]
        zipcode: String,
    },
}

impl CliConfig {
    /// Command line values win over the configuration file.
    pub fn settings(&self, file: Option<FileConfig>) -> Result<DynamoDbSettings> {
        let file = file.unwrap_or_default().dynamodb;

        let table_arn = self
            .table_arn
            .clone()
            .or(file.table_arn)
            .ok_or_else(|| CoverageError::MissingConfigError {
                field: "table_arn".to_string(),
            })?;

        Ok(DynamoDbSettings {
            table_arn,
            region: self
                .region
                .clone()
                .or(file.region)
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
            endpoint_url: self.endpoint_url.clone().or(file.endpoint_url),
        })
    }

    pub fn load_settings(&self) -> Result<DynamoDbSettings> {
        let file = match &self.config {
            Some(path) => Some(FileConfig::from_file(path)?),
            None => None,
        };
        self.settings(file)
    }
}
