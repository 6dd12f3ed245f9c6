use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use super::{http_client, SubmissionTransport, TransportError};
use crate::enquiry::EnquiryRecord;

/// POST relay sending the record as a JSON object.
#[derive(Debug, Clone)]
pub struct JsonRelay {
    client: reqwest::Client,
    endpoint: Url,
}

impl JsonRelay {
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self, TransportError> {
        Ok(Self::with_client(http_client(timeout)?, endpoint))
    }

    pub fn with_client(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl SubmissionTransport for JsonRelay {
    async fn send(&self, record: &EnquiryRecord) -> Result<(), TransportError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(record)
            .send()
            .await?;

        let status = response.status();
        debug!(%status, endpoint = %self.endpoint, "json relay completed");
        if !status.is_success() {
            return Err(TransportError::new(format!(
                "relay responded with HTTP {status}"
            )));
        }
        Ok(())
    }

    fn contract(&self) -> &'static str {
        "json"
    }
}
