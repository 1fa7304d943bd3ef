pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::DynamoDbTable;
pub use app::CoverageApp;
pub use config::{DynamoDbSettings, FileConfig, LambdaConfig};
pub use crate::core::{
    dispatcher::CarrierDispatcher,
    service::{CoverageCheck, CoverageCheckService, CsaLookup, CsaService},
};
pub use domain::model::{CarrierType, CoverageCheckResponse, CoverageRecord, CsaResponse};
pub use utils::error::{CoverageError, Result};
