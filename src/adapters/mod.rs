// Adapters layer: concrete implementations of the domain ports for external systems.

pub mod dynamodb;

pub use dynamodb::{table_name_from_arn, DynamoDbTable};
