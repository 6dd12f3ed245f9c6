use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use crate::enquiry::domain::{EnquiryRecord, EnquirySettings};
use crate::enquiry::router::EnquiryState;
use crate::relay::{SubmissionTransport, TransportError};

#[derive(Debug, Default)]
pub(super) struct RecordingTransport {
    sent: Mutex<Vec<EnquiryRecord>>,
}

impl RecordingTransport {
    pub(super) fn sent(&self) -> Vec<EnquiryRecord> {
        self.sent.lock().expect("sent mutex").clone()
    }
}

#[async_trait]
impl SubmissionTransport for RecordingTransport {
    async fn send(&self, record: &EnquiryRecord) -> Result<(), TransportError> {
        self.sent.lock().expect("sent mutex").push(record.clone());
        Ok(())
    }

    fn contract(&self) -> &'static str {
        "recording"
    }
}

#[derive(Debug, Default)]
pub(super) struct FailingTransport {
    attempts: Mutex<usize>,
}

impl FailingTransport {
    pub(super) fn attempts(&self) -> usize {
        *self.attempts.lock().expect("attempts mutex")
    }
}

#[async_trait]
impl SubmissionTransport for FailingTransport {
    async fn send(&self, _record: &EnquiryRecord) -> Result<(), TransportError> {
        *self.attempts.lock().expect("attempts mutex") += 1;
        Err(TransportError::new("relay responded with HTTP 500 Internal Server Error"))
    }

    fn contract(&self) -> &'static str {
        "failing"
    }
}

/// Never answers; used to leave a submission pending.
#[derive(Debug, Default)]
pub(super) struct HangingTransport {
    attempts: Mutex<usize>,
}

impl HangingTransport {
    pub(super) fn attempts(&self) -> usize {
        *self.attempts.lock().expect("attempts mutex")
    }
}

#[async_trait]
impl SubmissionTransport for HangingTransport {
    async fn send(&self, _record: &EnquiryRecord) -> Result<(), TransportError> {
        *self.attempts.lock().expect("attempts mutex") += 1;
        std::future::pending().await
    }

    fn contract(&self) -> &'static str {
        "hanging"
    }
}

pub(super) fn settings() -> EnquirySettings {
    EnquirySettings {
        contact_email: "sales@arc.example".to_string(),
        ..EnquirySettings::default()
    }
}

pub(super) fn jane() -> EnquiryRecord {
    EnquiryRecord {
        name: "Jane Doe".to_string(),
        email: "jane@x.com".to_string(),
        phone: "+1 234 567 8900".to_string(),
        subject: String::new(),
        message: "Interested".to_string(),
    }
}

pub(super) fn short_record() -> EnquiryRecord {
    EnquiryRecord {
        name: "A".to_string(),
        email: "bad".to_string(),
        phone: "123".to_string(),
        subject: String::new(),
        message: String::new(),
    }
}

pub(super) fn recording_state() -> (EnquiryState, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::default());
    let state = EnquiryState::new(transport.clone(), settings());
    (state, transport)
}

pub(super) fn failing_state() -> (EnquiryState, Arc<FailingTransport>) {
    let transport = Arc::new(FailingTransport::default());
    let state = EnquiryState::new(transport.clone(), settings());
    (state, transport)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    serde_json::from_slice(&bytes).expect("json body")
}
