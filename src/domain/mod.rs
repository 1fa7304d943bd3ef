// Domain layer: carrier model, response envelope and ports. Nothing here talks to AWS.

pub mod model;
pub mod ports;
