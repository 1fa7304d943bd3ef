//! Request plumbing for the two public endpoints.
//!
//! Nothing here depends on a particular HTTP runtime: the router takes a
//! method, a path and the decoded query string and returns a status plus a
//! JSON body. The Lambda binary adapts this to `lambda_http`.

pub mod handlers;
pub mod validators;

use crate::core::service::{CoverageCheck, CsaLookup};
use crate::domain::model::ApiError;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

pub type QueryParams = HashMap<String, String>;

pub const COVERAGE_CHECK_PATH: &str = "/v1/coveragecheck";
pub const CSA_PATH: &str = "/v1/csa";
pub const CONTENT_TYPE_JSON: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self { status, body },
            Err(e) => {
                tracing::error!("failed to serialize response body: {}", e);
                Self {
                    status: 500,
                    body: format!(r#"{{"message":"{}"}}"#, handlers::SERVER_ERROR_MESSAGE),
                }
            }
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Clone)]
pub struct Router {
    coverage: Arc<dyn CoverageCheck>,
    csa: Arc<dyn CsaLookup>,
}

impl Router {
    pub fn new(coverage: Arc<dyn CoverageCheck>, csa: Arc<dyn CsaLookup>) -> Self {
        Self { coverage, csa }
    }

    pub async fn handle(&self, method: &str, path: &str, query: &QueryParams) -> ApiResponse {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        tracing::debug!("{} {}", method, path);

        match (method, path) {
            ("GET", COVERAGE_CHECK_PATH) => handlers::check_coverage(self.coverage.as_ref(), query).await,
            ("GET", CSA_PATH) => handlers::get_csa(self.csa.as_ref(), query).await,
            (_, COVERAGE_CHECK_PATH) | (_, CSA_PATH) => {
                ApiResponse::json(405, &ApiError::new("Method not allowed"))
            }
            _ => ApiResponse::json(404, &ApiError::new("Not found")),
        }
    }
}
