use coverage::http::{QueryParams, CONTENT_TYPE_JSON};
use coverage::utils::logger;
use coverage::{CoverageApp, LambdaConfig};
use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};

/// Flattens the query string, keeping the first value of a repeated parameter.
fn query_params(event: &Request) -> QueryParams {
    let mut query = QueryParams::new();
    for (name, value) in event.query_string_parameters_ref().into_iter().flat_map(|q| q.iter()) {
        query
            .entry(name.to_string())
            .or_insert_with(|| value.to_string());
    }
    query
}

async fn function_handler(app: &CoverageApp, event: Request) -> Result<Response<Body>, Error> {
    let query = query_params(&event);

    // REST API stages are prefixed onto `uri().path()`; route on the path as the client sent it.
    let response = app
        .handle(event.method().as_str(), event.raw_http_path(), &query)
        .await;

    Ok(Response::builder()
        .status(response.status)
        .header("content-type", CONTENT_TYPE_JSON)
        .body(Body::Text(response.body))?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();
    tracing::info!("Lambda COLD START");

    // Setup failures abort the cold start; the runtime reports the init error.
    let settings = LambdaConfig::from_env()?;
    let app = CoverageApp::init(&settings).await?;

    run(service_fn(|event| function_handler(&app, event))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use coverage::core::{CoverageKey, CoverageTable};
    use coverage::domain::model::AttributeMap;

    /// Holds a single Sprint record for zip 94105.
    struct SprintTable;

    impl CoverageTable for SprintTable {
        async fn get_item(
            &self,
            key: &CoverageKey,
            _projection: &[&str],
        ) -> coverage::Result<Option<AttributeMap>> {
            if key.zip_code != "94105" || key.carrier_type != "sprint" {
                return Ok(None);
            }
            Ok(Some(
                [
                    ("zipcode", "94105"),
                    ("carriertype", "sprint"),
                    ("csa_leaf", "fakeCsa"),
                    ("cur_pct_cov", "100"),
                    ("lte_4g_pctcov", "100"),
                ]
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ))
        }
    }

    fn rest_event(path: &str, query: &str, multi_query: &str) -> Request {
        let event = format!(
            r#"{{
                "resource": "/{{proxy+}}",
                "path": "{path}",
                "httpMethod": "GET",
                "headers": {{"Host": "abc123.execute-api.us-east-2.amazonaws.com"}},
                "queryStringParameters": {query},
                "multiValueQueryStringParameters": {multi_query},
                "pathParameters": null,
                "stageVariables": null,
                "requestContext": {{
                    "accountId": "123456789012",
                    "resourceId": "us4z18",
                    "stage": "Prod",
                    "requestId": "41b45ea3-70b5-11e6-b7bd-69b5aaebc7d9",
                    "identity": {{"sourceIp": "192.168.100.1"}},
                    "resourcePath": "/{{proxy+}}",
                    "httpMethod": "GET",
                    "apiId": "abc123"
                }},
                "body": null,
                "isBase64Encoded": false
            }}"#
        );
        lambda_http::request::from_str(&event).expect("valid REST API event")
    }

    fn body_text(response: &Response<Body>) -> &str {
        match response.body() {
            Body::Text(text) => text,
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_routes_rest_event_with_stage() {
        let app = CoverageApp::from_table(SprintTable);
        let event = rest_event("/v1/csa", r#"{"zipcode": "94105"}"#, "null");
        assert_eq!(event.raw_http_path(), "/v1/csa");

        let response = function_handler(&app, event).await.unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["content-type"], CONTENT_TYPE_JSON);
        assert_eq!(
            body_text(&response),
            r#"{"Result":{"CsaFound":true,"Csa":"fakeCsa"}}"#
        );
    }

    #[tokio::test]
    async fn test_coverage_check_rest_event() {
        let app = CoverageApp::from_table(SprintTable);
        let event = rest_event(
            "/v1/coveragecheck",
            r#"{"zipcode": "94105", "carrierid": "1"}"#,
            "null",
        );

        let response = function_handler(&app, event).await.unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(body_text(&response), r#"{"Result":{"IsCovered":true}}"#);
    }

    #[tokio::test]
    async fn test_repeated_parameter_uses_first_value() {
        let app = CoverageApp::from_table(SprintTable);
        let event = rest_event(
            "/v1/csa",
            r#"{"zipcode": "11111"}"#,
            r#"{"zipcode": ["94105", "11111"]}"#,
        );

        let query = query_params(&event);
        assert_eq!(query["zipcode"], "94105");

        let response = function_handler(&app, event).await.unwrap();
        assert_eq!(
            body_text(&response),
            r#"{"Result":{"CsaFound":true,"Csa":"fakeCsa"}}"#
        );
    }
}
