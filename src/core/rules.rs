use crate::domain::model::{CarrierType, CoverageRecord};

/// Percentages are stored in 0-100 units; a zip code must exceed this, not reach it.
pub const COVERAGE_THRESHOLD_PCT: f64 = 50.0;

/// Indicator value marking an area as served.
pub const INDICATOR_COVERED: &str = "Y";

/// Carrier specific decision over a coverage record.
///
/// Missing, empty or non-numeric values are a data quality condition and
/// always evaluate to "not covered", never to an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageRule {
    /// Both percentages must exceed the threshold.
    DualPercentage {
        current: &'static str,
        lte: &'static str,
    },
    /// The percentage must exceed the threshold and the indicator must be `Y`.
    PercentageWithIndicator {
        percentage: &'static str,
        indicator: &'static str,
    },
}

impl CoverageRule {
    pub fn for_carrier(carrier: CarrierType) -> Self {
        match carrier {
            CarrierType::Sprint => CoverageRule::DualPercentage {
                current: "cur_pct_cov",
                lte: "lte_4g_pctcov",
            },
            CarrierType::Verizon => CoverageRule::PercentageWithIndicator {
                percentage: "vzelte",
                indicator: "vze_lte_ind",
            },
        }
    }

    pub fn evaluate(&self, record: &CoverageRecord) -> bool {
        match *self {
            CoverageRule::DualPercentage { current, lte } => {
                if record.get(current).is_empty() || record.get(lte).is_empty() {
                    tracing::debug!(
                        "zipcode: {} not covered as either {}, {} fields are empty",
                        record.zip_code(),
                        current,
                        lte
                    );
                    return false;
                }
                exceeds_threshold(record, current) && exceeds_threshold(record, lte)
            }
            CoverageRule::PercentageWithIndicator {
                percentage,
                indicator,
            } => {
                if record.get(percentage).is_empty() || record.get(indicator).is_empty() {
                    tracing::debug!(
                        "zipcode: {} not covered as either {}, {} fields are empty",
                        record.zip_code(),
                        percentage,
                        indicator
                    );
                    return false;
                }
                exceeds_threshold(record, percentage) && record.get(indicator) == INDICATOR_COVERED
            }
        }
    }
}

fn exceeds_threshold(record: &CoverageRecord, attribute: &str) -> bool {
    let raw = record.get(attribute);
    match raw.parse::<f64>() {
        Ok(value) => value > COVERAGE_THRESHOLD_PCT,
        Err(e) => {
            tracing::warn!(
                "Illegal value '{}' in {} for zipcode {}: {}",
                raw,
                attribute,
                record.zip_code(),
                e
            );
            false
        }
    }
}
