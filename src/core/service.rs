use crate::core::dispatcher::CarrierDispatcher;
use crate::core::store::CoverageStore;
use crate::domain::model::{CarrierType, CoverageCheckResponse, CsaResponse, CSA_ATTRIBUTE};
use crate::domain::ports::CoverageTable;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// CSA codes are only published for this carrier.
pub const CSA_CARRIER: CarrierType = CarrierType::Sprint;

#[async_trait]
pub trait CoverageCheck: Send + Sync {
    async fn verify(&self, zip_code: &str, carrier_id: &str) -> Result<CoverageCheckResponse>;
}

#[async_trait]
pub trait CsaLookup: Send + Sync {
    async fn get_csa(&self, zip_code: &str) -> Result<CsaResponse>;
}

pub struct CoverageCheckService<T: CoverageTable> {
    dispatcher: CarrierDispatcher<T>,
}

impl<T: CoverageTable> CoverageCheckService<T> {
    pub fn new(dispatcher: CarrierDispatcher<T>) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl<T: CoverageTable> CoverageCheck for CoverageCheckService<T> {
    /// Dispatcher and store errors are returned as-is: no retry, no default.
    async fn verify(&self, zip_code: &str, carrier_id: &str) -> Result<CoverageCheckResponse> {
        tracing::info!(
            "Verifying coverage for zipcode: {} and carrierID: {}",
            zip_code,
            carrier_id
        );

        let client = self.dispatcher.resolve(carrier_id)?;
        let is_covered = client.verify_coverage(zip_code).await?;

        Ok(CoverageCheckResponse { is_covered })
    }
}

pub struct CsaService<T: CoverageTable> {
    store: CoverageStore<T>,
}

impl<T: CoverageTable> CsaService<T> {
    pub fn new(table: Arc<T>) -> Self {
        Self {
            store: CoverageStore::new(table),
        }
    }
}

#[async_trait]
impl<T: CoverageTable> CsaLookup for CsaService<T> {
    async fn get_csa(&self, zip_code: &str) -> Result<CsaResponse> {
        tracing::info!("Getting Csa for zipcode: {}", zip_code);

        let record = self.store.lookup(CSA_CARRIER, zip_code).await?;
        let csa = record.get(CSA_ATTRIBUTE).to_string();

        Ok(CsaResponse {
            csa_found: !csa.is_empty(),
            csa,
        })
    }
}
