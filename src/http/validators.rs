use crate::domain::model::{ApiError, CarrierType};
use crate::http::QueryParams;
use crate::utils::validation::is_valid_zip_code;

pub const ZIP_CODE_PARAM: &str = "zipcode";
pub const CARRIER_ID_PARAM: &str = "carrierid";

pub const MISSING_PROPERTY: &str = "Missing required property";
pub const ILLEGAL_VALUE: &str = "Illegal value for property";

pub(crate) fn param<'a>(query: &'a QueryParams, name: &str) -> &'a str {
    query.get(name).map(String::as_str).unwrap_or("")
}

/// Presence is checked first; format errors are only reported once every
/// required parameter is present.
pub fn validate_coverage_check(query: &QueryParams) -> Vec<ApiError> {
    let mut errors = Vec::new();

    let zip_code = param(query, ZIP_CODE_PARAM);
    if zip_code.is_empty() {
        errors.push(ApiError::for_path(MISSING_PROPERTY, ZIP_CODE_PARAM));
    }

    let carrier_id = param(query, CARRIER_ID_PARAM);
    if carrier_id.is_empty() {
        errors.push(ApiError::for_path(MISSING_PROPERTY, CARRIER_ID_PARAM));
    }

    if !errors.is_empty() {
        return errors;
    }

    if !is_valid_zip_code(zip_code) {
        tracing::debug!(zip_code, "zip code failed regex check");
        errors.push(ApiError::for_path(ILLEGAL_VALUE, ZIP_CODE_PARAM));
    }

    if CarrierType::from_id(carrier_id).is_err() {
        tracing::debug!(carrier_id, "Invalid Carrier ID");
        errors.push(ApiError::for_path(ILLEGAL_VALUE, CARRIER_ID_PARAM));
    }

    errors
}

pub fn validate_csa(query: &QueryParams) -> Vec<ApiError> {
    let zip_code = param(query, ZIP_CODE_PARAM);
    if zip_code.is_empty() {
        return vec![ApiError::for_path(MISSING_PROPERTY, ZIP_CODE_PARAM)];
    }

    if !is_valid_zip_code(zip_code) {
        tracing::debug!(zip_code, "zip code failed regex check");
        return vec![ApiError::for_path(ILLEGAL_VALUE, ZIP_CODE_PARAM)];
    }

    Vec::new()
}
