//! Outbound delivery of enquiries to the third-party form relay.
//!
//! Exactly one relay contract is active per deployment. The query contract
//! mirrors a script endpoint that cannot report back (its response is opaque),
//! so it is optimistic: any completed HTTP exchange counts as delivered and
//! relay-side failures go unnoticed. The JSON contract checks the status code.

pub mod json;
pub mod log;
pub mod query;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::RelayConfig;
use crate::enquiry::EnquiryRecord;

pub use json::JsonRelay;
pub use log::LogRelay;
pub use query::QueryRelay;

/// One-shot delivery of a captured enquiry. No retries, no queueing.
#[async_trait]
pub trait SubmissionTransport: Send + Sync + fmt::Debug {
    async fn send(&self, record: &EnquiryRecord) -> Result<(), TransportError>;

    fn contract(&self) -> &'static str;
}

/// Opaque delivery failure; only the message is meaningful.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            Self::new("relay request timed out")
        } else if value.is_connect() {
            Self::new(format!("relay unreachable: {value}"))
        } else {
            Self::new(format!("relay request failed: {value}"))
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RelayContract {
    /// GET against a script endpoint with the fields as query parameters.
    #[default]
    Query,
    /// POST with a JSON body; non-2xx is a failure.
    Json,
}

impl RelayContract {
    pub fn as_str(self) -> &'static str {
        match self {
            RelayContract::Query => "query",
            RelayContract::Json => "json",
        }
    }
}

impl FromStr for RelayContract {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "query" | "get" => Ok(RelayContract::Query),
            "json" | "post" => Ok(RelayContract::Json),
            other => Err(other.to_string()),
        }
    }
}

pub(crate) fn http_client(timeout: Option<Duration>) -> Result<reqwest::Client, TransportError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|err| TransportError::new(format!("unable to build relay client: {err}")))
}

/// Build the transport selected by configuration. Without an endpoint the
/// enquiry is only logged, which keeps local development off the real relay.
pub fn build_transport(config: &RelayConfig) -> Result<Arc<dyn SubmissionTransport>, TransportError> {
    let Some(endpoint) = config.endpoint.clone() else {
        return Ok(Arc::new(LogRelay));
    };

    let transport: Arc<dyn SubmissionTransport> = match config.contract {
        RelayContract::Query => Arc::new(QueryRelay::new(endpoint, config.timeout)?),
        RelayContract::Json => Arc::new(JsonRelay::new(endpoint, config.timeout)?),
    };
    Ok(transport)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_parses_method_aliases() {
        assert_eq!("GET".parse::<RelayContract>(), Ok(RelayContract::Query));
        assert_eq!(" json ".parse::<RelayContract>(), Ok(RelayContract::Json));
        assert_eq!(
            "soap".parse::<RelayContract>(),
            Err("soap".to_string())
        );
        assert_eq!(RelayContract::default().as_str(), "query");
        assert_eq!(RelayContract::Json.as_str(), "json");
    }

    #[test]
    fn missing_endpoint_falls_back_to_log_relay() {
        let config = RelayConfig {
            endpoint: None,
            contract: RelayContract::Json,
            timeout: None,
        };
        let transport = build_transport(&config).expect("transport builds");
        assert_eq!(transport.contract(), "log");
    }

    #[test]
    fn endpoint_selects_configured_contract() {
        let config = RelayConfig {
            endpoint: Some("https://relay.example/exec".parse().expect("valid url")),
            contract: RelayContract::Json,
            timeout: Some(Duration::from_secs(5)),
        };
        let transport = build_transport(&config).expect("transport builds");
        assert_eq!(transport.contract(), "json");
    }
}
