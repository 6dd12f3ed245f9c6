pub mod config;
pub mod enquiry;
pub mod error;
pub mod relay;
pub mod site;
pub mod telemetry;
