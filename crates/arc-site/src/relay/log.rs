use async_trait::async_trait;
use tracing::info;

use super::{SubmissionTransport, TransportError};
use crate::enquiry::EnquiryRecord;

/// Stand-in used when no relay endpoint is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogRelay;

#[async_trait]
impl SubmissionTransport for LogRelay {
    async fn send(&self, record: &EnquiryRecord) -> Result<(), TransportError> {
        info!(
            name = %record.name,
            email = %record.email,
            subject = %record.subject,
            "enquiry captured; no relay endpoint configured"
        );
        Ok(())
    }

    fn contract(&self) -> &'static str {
        "log"
    }
}
