use crate::domain::model::{CarrierType, CoverageRecord};
use crate::domain::ports::{CoverageKey, CoverageTable};
use crate::utils::error::Result;
use std::sync::Arc;

/// Looks up coverage records for a carrier, restricted to the attributes that
/// carrier's rule and the CSA lookup need.
pub struct CoverageStore<T: CoverageTable> {
    table: Arc<T>,
}

impl<T: CoverageTable> Clone for CoverageStore<T> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
        }
    }
}

impl<T: CoverageTable> CoverageStore<T> {
    pub fn new(table: Arc<T>) -> Self {
        Self { table }
    }

    /// A key with no item yields an empty record rather than an error.
    pub async fn lookup(&self, carrier: CarrierType, zip_code: &str) -> Result<CoverageRecord> {
        let key = CoverageKey::new(zip_code, carrier);
        let item = self.table.get_item(&key, carrier.projection()).await?;

        match item {
            Some(attributes) => {
                let record = CoverageRecord::new(attributes);
                if !record.is_found() {
                    tracing::debug!("Could not find coverage data for zipcode: {}", zip_code);
                }
                Ok(record)
            }
            None => {
                tracing::debug!("Could not find coverage data for zipcode: {}", zip_code);
                Ok(CoverageRecord::not_found())
            }
        }
    }
}
