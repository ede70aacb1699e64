pub mod client;
pub mod configuration;
pub mod domain;
pub mod request_spec;
pub mod telemetry;
