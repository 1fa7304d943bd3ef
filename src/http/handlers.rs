use crate::core::service::{CoverageCheck, CsaLookup};
use crate::domain::model::{ApiError, Response};
use crate::http::validators::{
    self, param, CARRIER_ID_PARAM, ILLEGAL_VALUE, ZIP_CODE_PARAM,
};
use crate::http::{ApiResponse, QueryParams};

pub const SERVER_ERROR_MESSAGE: &str = "There is a problem on the server. Please try again later";

pub async fn check_coverage(service: &dyn CoverageCheck, query: &QueryParams) -> ApiResponse {
    let errors = validators::validate_coverage_check(query);
    if !errors.is_empty() {
        return ApiResponse::json(400, &Response::errors(errors));
    }

    let zip_code = param(query, ZIP_CODE_PARAM);
    let carrier_id = param(query, CARRIER_ID_PARAM);

    match service.verify(zip_code, carrier_id).await {
        Ok(response) => ApiResponse::json(200, &Response::result(response)),
        Err(e) if e.is_client_error() => {
            tracing::warn!("Rejected carrierID {}: {}", carrier_id, e);
            ApiResponse::json(
                400,
                &Response::errors(vec![ApiError::for_path(ILLEGAL_VALUE, CARRIER_ID_PARAM)]),
            )
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                "Error occurred checking coverage for zipcode: {} and carrierID: {}",
                zip_code,
                carrier_id
            );
            ApiResponse::json(500, &ApiError::new(SERVER_ERROR_MESSAGE))
        }
    }
}

pub async fn get_csa(service: &dyn CsaLookup, query: &QueryParams) -> ApiResponse {
    let errors = validators::validate_csa(query);
    if !errors.is_empty() {
        return ApiResponse::json(400, &Response::errors(errors));
    }

    let zip_code = param(query, ZIP_CODE_PARAM);

    match service.get_csa(zip_code).await {
        Ok(response) => ApiResponse::json(200, &Response::result(response)),
        Err(e) => {
            tracing::error!(
                error = %e,
                "Error occurred getting csa for zipcode: {}",
                zip_code
            );
            ApiResponse::json(500, &ApiError::new(SERVER_ERROR_MESSAGE))
        }
    }
}
