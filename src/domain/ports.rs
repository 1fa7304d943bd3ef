use crate::domain::model::{AttributeMap, CarrierType};
use crate::utils::error::Result;

/// Composite primary key of the coverage table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageKey {
    pub zip_code: String,
    pub carrier_type: String,
}

impl CoverageKey {
    pub fn new(zip_code: &str, carrier: CarrierType) -> Self {
        Self {
            zip_code: zip_code.to_string(),
            carrier_type: carrier.table_key().to_string(),
        }
    }
}

/// Single-item lookup against the backing key-value store.
///
/// `Ok(None)` means the key has no item. Transport failures, timeouts and
/// undecodable responses are errors.
pub trait CoverageTable: Send + Sync {
    fn get_item(
        &self,
        key: &CoverageKey,
        projection: &[&str],
    ) -> impl std::future::Future<Output = Result<Option<AttributeMap>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn table_arn(&self) -> &str;
    fn region(&self) -> &str;
    fn endpoint_url(&self) -> Option<&str>;
}
