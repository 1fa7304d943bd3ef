use crate::core::rules::CoverageRule;
use crate::core::store::CoverageStore;
use crate::domain::model::CarrierType;
use crate::domain::ports::CoverageTable;
use crate::utils::error::Result;
use std::sync::Arc;

/// Store lookup paired with the rule for one carrier.
pub struct CarrierClient<T: CoverageTable> {
    carrier: CarrierType,
    rule: CoverageRule,
    store: CoverageStore<T>,
}

impl<T: CoverageTable> CarrierClient<T> {
    pub fn carrier(&self) -> CarrierType {
        self.carrier
    }

    pub fn rule(&self) -> CoverageRule {
        self.rule
    }

    pub async fn verify_coverage(&self, zip_code: &str) -> Result<bool> {
        tracing::debug!("Checking {} coverage for zipcode: {}", self.carrier, zip_code);

        let record = self.store.lookup(self.carrier, zip_code).await?;
        if !record.is_found() {
            return Ok(false);
        }
        Ok(self.rule.evaluate(&record))
    }
}

pub struct CarrierDispatcher<T: CoverageTable> {
    store: CoverageStore<T>,
}

impl<T: CoverageTable> CarrierDispatcher<T> {
    pub fn new(table: Arc<T>) -> Self {
        Self {
            store: CoverageStore::new(table),
        }
    }

    /// Fails with `UnknownCarrier` for identifiers outside the supported set.
    pub fn resolve(&self, carrier_id: &str) -> Result<CarrierClient<T>> {
        let carrier = CarrierType::from_id(carrier_id)?;
        Ok(self.client_for(carrier))
    }

    pub fn client_for(&self, carrier: CarrierType) -> CarrierClient<T> {
        CarrierClient {
            carrier,
            rule: CoverageRule::for_carrier(carrier),
            store: self.store.clone(),
        }
    }
}
