use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use super::{http_client, SubmissionTransport, TransportError};
use crate::enquiry::EnquiryRecord;

/// GET relay for script endpoints that only accept query parameters.
#[derive(Debug, Clone)]
pub struct QueryRelay {
    client: reqwest::Client,
    endpoint: Url,
}

impl QueryRelay {
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self, TransportError> {
        Ok(Self::with_client(http_client(timeout)?, endpoint))
    }

    pub fn with_client(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn request_url(&self, record: &EnquiryRecord) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in record.relay_fields() {
                pairs.append_pair(name, value);
            }
        }
        url
    }
}

#[async_trait]
impl SubmissionTransport for QueryRelay {
    async fn send(&self, record: &EnquiryRecord) -> Result<(), TransportError> {
        let url = self.request_url(record);
        let response = self.client.get(url).send().await?;

        // The status is logged but not interpreted.
        debug!(
            status = %response.status(),
            endpoint = %self.endpoint,
            "query relay completed"
        );
        Ok(())
    }

    fn contract(&self) -> &'static str {
        "query"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_appends_fields_to_existing_query() {
        let relay = QueryRelay::with_client(
            reqwest::Client::new(),
            "https://script.example/macros/s/abc/exec?source=arc"
                .parse()
                .expect("valid url"),
        );
        let record = EnquiryRecord {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "+1 234 567 8900".to_string(),
            subject: String::new(),
            message: "Interested & keen".to_string(),
        };

        let url = relay.request_url(&record);
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert_eq!(url.path(), "/macros/s/abc/exec");
        assert_eq!(pairs[0], ("source".to_string(), "arc".to_string()));
        assert_eq!(pairs[1], ("name".to_string(), "Jane Doe".to_string()));
        assert_eq!(pairs[3], ("phone".to_string(), "+1 234 567 8900".to_string()));
        assert_eq!(
            pairs[4],
            ("message".to_string(), "Interested & keen".to_string())
        );
        assert_eq!(pairs.len(), 5);
    }
}
