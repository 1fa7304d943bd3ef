pub mod dispatcher;
pub mod rules;
pub mod service;
pub mod store;

pub use crate::domain::model::{CarrierType, CoverageCheckResponse, CoverageRecord, CsaResponse};
pub use crate::domain::ports::{ConfigProvider, CoverageKey, CoverageTable};
pub use crate::utils::error::Result;
