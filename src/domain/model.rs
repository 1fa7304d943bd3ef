use crate::utils::error::{CoverageError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Raw attributes of a single store item, values already rendered as strings.
pub type AttributeMap = HashMap<String, String>;

pub const ZIP_CODE_ATTRIBUTE: &str = "zipcode";
pub const CARRIER_TYPE_ATTRIBUTE: &str = "carriertype";
pub const CSA_ATTRIBUTE: &str = "csa_leaf";

const SPRINT_PROJECTION: &[&str] = &[
    ZIP_CODE_ATTRIBUTE,
    CARRIER_TYPE_ATTRIBUTE,
    CSA_ATTRIBUTE,
    "cur_pct_cov",
    "lte_4g_pctcov",
];

const VERIZON_PROJECTION: &[&str] = &[
    ZIP_CODE_ATTRIBUTE,
    CARRIER_TYPE_ATTRIBUTE,
    "vzelte",
    "vze_lte_ind",
    "state",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarrierType {
    Sprint,
    Verizon,
}

impl CarrierType {
    pub const ALL: [CarrierType; 2] = [CarrierType::Sprint, CarrierType::Verizon];

    pub fn from_id(id: &str) -> Result<Self> {
        match id {
            "1" => Ok(CarrierType::Sprint),
            "2" => Ok(CarrierType::Verizon),
            other => Err(CoverageError::UnknownCarrier {
                carrier: other.to_string(),
            }),
        }
    }

    /// Identifier used by API callers.
    pub fn id(&self) -> &'static str {
        match self {
            CarrierType::Sprint => "1",
            CarrierType::Verizon => "2",
        }
    }

    /// Value of the `carriertype` key attribute in the coverage table.
    pub fn table_key(&self) -> &'static str {
        match self {
            CarrierType::Sprint => "sprint",
            CarrierType::Verizon => "verizon",
        }
    }

    pub fn projection(&self) -> &'static [&'static str] {
        match self {
            CarrierType::Sprint => SPRINT_PROJECTION,
            CarrierType::Verizon => VERIZON_PROJECTION,
        }
    }
}

impl FromStr for CarrierType {
    type Err = CoverageError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_id(s)
    }
}

impl fmt::Display for CarrierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_key())
    }
}

/// Attribute bag for one (zip code, carrier) key. An empty zip code means the
/// store had no item for the key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoverageRecord {
    attributes: AttributeMap,
}

impl CoverageRecord {
    pub fn new(attributes: AttributeMap) -> Self {
        Self { attributes }
    }

    pub fn not_found() -> Self {
        Self::default()
    }

    pub fn get(&self, attribute: &str) -> &str {
        self.attributes
            .get(attribute)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn zip_code(&self) -> &str {
        self.get(ZIP_CODE_ATTRIBUTE)
    }

    pub fn is_found(&self) -> bool {
        !self.zip_code().is_empty()
    }
}

impl FromIterator<(String, String)> for CoverageRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageCheckResponse {
    #[serde(rename = "IsCovered")]
    pub is_covered: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CsaResponse {
    #[serde(rename = "CsaFound")]
    pub csa_found: bool,
    #[serde(rename = "Csa")]
    pub csa: String,
}

/// Envelope returned from every public endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Response<T: Serialize> {
    #[serde(rename = "Result", skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(rename = "Errors", skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,
}

impl<T: Serialize> Response<T> {
    pub fn result(result: T) -> Self {
        Self {
            result: Some(result),
            errors: Vec::new(),
        }
    }

    /// Indented JSON for terminal output.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Response<()> {
    pub fn errors(errors: Vec<ApiError>) -> Self {
        Self {
            result: None,
            errors,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
        }
    }

    pub fn for_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: Some(path.into()),
        }
    }
}
