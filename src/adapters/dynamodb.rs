use crate::domain::model::{AttributeMap, CARRIER_TYPE_ATTRIBUTE, ZIP_CODE_ATTRIBUTE};
use crate::domain::ports::{ConfigProvider, CoverageKey, CoverageTable};
use crate::utils::error::{CoverageError, Result};
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use std::collections::HashMap;

/// Extracts the table name from an ARN such as
/// `arn:aws:dynamodb:us-east-2:123456789012:table/coverage`.
pub fn table_name_from_arn(arn: &str) -> Result<String> {
    match arn.split('/').nth(1) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(CoverageError::ConfigError {
            message: format!("Invalid dynamodbARN: {}", arn),
        }),
    }
}

#[derive(Debug, Clone)]
pub struct DynamoDbTable {
    client: Client,
    table_name: String,
}

impl DynamoDbTable {
    pub fn new(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }

    pub async fn connect<C: ConfigProvider>(config: &C) -> Result<Self> {
        let table_name = table_name_from_arn(config.table_arn())?;

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region().to_string()))
            .load()
            .await;

        let mut builder = aws_sdk_dynamodb::config::Builder::from(&sdk_config);
        if let Some(endpoint) = config.endpoint_url() {
            tracing::info!("Using DynamoDB endpoint override: {}", endpoint);
            builder = builder.endpoint_url(endpoint);
        }

        tracing::info!(
            "Configured DynamoDB table {} in {}",
            table_name,
            config.region()
        );
        Ok(Self::new(Client::from_conf(builder.build()), table_name))
    }
}

/// `#0, #1, ...` placeholders keep attribute names clear of DynamoDB reserved words.
fn projection_names(projection: &[&str]) -> (String, HashMap<String, String>) {
    let names: HashMap<String, String> = projection
        .iter()
        .enumerate()
        .map(|(i, name)| (format!("#{}", i), name.to_string()))
        .collect();
    let expression = (0..projection.len())
        .map(|i| format!("#{}", i))
        .collect::<Vec<_>>()
        .join(", ");
    (expression, names)
}

fn to_attribute_map(item: &HashMap<String, AttributeValue>) -> Result<AttributeMap> {
    item.iter()
        .map(|(name, value)| match value {
            AttributeValue::S(s) => Ok((name.clone(), s.clone())),
            AttributeValue::N(n) => Ok((name.clone(), n.clone())),
            _ => Err(CoverageError::MalformedRecord {
                attribute: name.clone(),
            }),
        })
        .collect()
}

impl CoverageTable for DynamoDbTable {
    async fn get_item(
        &self,
        key: &CoverageKey,
        projection: &[&str],
    ) -> Result<Option<AttributeMap>> {
        let mut request = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ZIP_CODE_ATTRIBUTE, AttributeValue::S(key.zip_code.clone()))
            .key(
                CARRIER_TYPE_ATTRIBUTE,
                AttributeValue::S(key.carrier_type.clone()),
            );

        if !projection.is_empty() {
            let (expression, names) = projection_names(projection);
            request = request
                .projection_expression(expression)
                .set_expression_attribute_names(Some(names));
        }

        let output = request.send().await.map_err(|e| {
            tracing::error!("failed to query dynamodb: {}", DisplayErrorContext(&e));
            CoverageError::Store {
                message: DisplayErrorContext(&e).to_string(),
            }
        })?;

        match output.item() {
            Some(item) => to_attribute_map(item).map(Some),
            None => Ok(None),
        }
    }
}
