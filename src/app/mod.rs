//! Process-wide application state.
//!
//! `CoverageApp` is built once at process start (cold start for Lambda) and
//! then shared read-only by every request. Building it is the only place a
//! store connection is configured; a failure there ends the process instead
//! of surfacing on individual requests.

use crate::adapters::dynamodb::DynamoDbTable;
use crate::core::dispatcher::CarrierDispatcher;
use crate::core::service::{CoverageCheck, CoverageCheckService, CsaLookup, CsaService};
use crate::core::{ConfigProvider, CoverageTable};
use crate::http::{ApiResponse, QueryParams, Router};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::sync::Arc;

#[derive(Clone)]
pub struct CoverageApp {
    coverage: Arc<dyn CoverageCheck>,
    csa: Arc<dyn CsaLookup>,
    router: Router,
}

impl CoverageApp {
    pub async fn init<C: ConfigProvider + Validate>(config: &C) -> Result<Self> {
        config.validate()?;
        let table = DynamoDbTable::connect(config).await?;
        Ok(Self::from_table(table))
    }

    pub fn from_table<T: CoverageTable + 'static>(table: T) -> Self {
        let table = Arc::new(table);
        let coverage: Arc<dyn CoverageCheck> = Arc::new(CoverageCheckService::new(
            CarrierDispatcher::new(Arc::clone(&table)),
        ));
        let csa: Arc<dyn CsaLookup> = Arc::new(CsaService::new(table));
        let router = Router::new(Arc::clone(&coverage), Arc::clone(&csa));

        Self {
            coverage,
            csa,
            router,
        }
    }

    pub fn coverage(&self) -> &dyn CoverageCheck {
        self.coverage.as_ref()
    }

    pub fn csa(&self) -> &dyn CsaLookup {
        self.csa.as_ref()
    }

    pub async fn handle(&self, method: &str, path: &str, query: &QueryParams) -> ApiResponse {
        self.router.handle(method, path, query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DynamoDbSettings;
    use crate::utils::error::CoverageError;

    /// Provider for a table deployed outside the usual env/file settings.
    struct StaticConfig {
        arn: &'static str,
    }

    impl ConfigProvider for StaticConfig {
        fn table_arn(&self) -> &str {
            self.arn
        }

        fn region(&self) -> &str {
            "us-east-2"
        }

        fn endpoint_url(&self) -> Option<&str> {
            Some("http://localhost:8000")
        }
    }

    impl Validate for StaticConfig {
        fn validate(&self) -> Result<()> {
            let settings = DynamoDbSettings {
                table_arn: self.table_arn().to_string(),
                region: self.region().to_string(),
                endpoint_url: self.endpoint_url().map(str::to_string),
            };
            settings.validate()
        }
    }

    #[tokio::test]
    async fn test_init_with_any_config_provider() {
        let app = CoverageApp::init(&StaticConfig { arn: "abc/coverage" }).await;
        assert!(app.is_ok());
    }

    #[tokio::test]
    async fn test_init_rejects_invalid_config() {
        let err = CoverageApp::init(&StaticConfig { arn: "no-table" })
            .await
            .err()
            .unwrap();
        assert!(matches!(err, CoverageError::ConfigError { .. }));

        let settings = DynamoDbSettings {
            table_arn: "abc/coverage".to_string(),
            region: "US EAST".to_string(),
            endpoint_url: None,
        };
        assert!(CoverageApp::init(&settings).await.is_err());
    }
}
