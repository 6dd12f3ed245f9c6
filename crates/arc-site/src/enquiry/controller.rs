use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info, warn};

use super::domain::{
    EnquiryField, EnquiryRecord, EnquirySettings, FieldErrors, FormVariant, SubmissionStatus,
};
use super::validation;
use crate::relay::{SubmissionTransport, TransportError};

type CloseCallback = Box<dyn FnMut() + Send>;

/// Owns one enquiry form: its field values, field errors and submission status.
///
/// Field updates are applied one at a time through `&mut self`, so the form
/// never sees interleaved edits. A successful submission clears the record and
/// arms a close deadline; `wait_and_close` waits it out and resets the form.
pub struct EnquiryController {
    variant: FormVariant,
    settings: EnquirySettings,
    transport: Arc<dyn SubmissionTransport>,
    record: EnquiryRecord,
    errors: FieldErrors,
    status: SubmissionStatus,
    banner: Option<String>,
    close_deadline: Option<Instant>,
    on_close: Option<CloseCallback>,
}

/// Returned by a successful submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub close_after: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("enquiry has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),
    #[error("{banner}")]
    Transport {
        banner: String,
        #[source]
        source: TransportError,
    },
    #[error("an enquiry submission is already in flight")]
    InFlight,
}

impl EnquiryController {
    pub fn new(
        variant: FormVariant,
        settings: EnquirySettings,
        transport: Arc<dyn SubmissionTransport>,
    ) -> Self {
        Self {
            variant,
            settings,
            transport,
            record: EnquiryRecord::default(),
            errors: FieldErrors::new(),
            status: SubmissionStatus::Idle,
            banner: None,
            close_deadline: None,
            on_close: None,
        }
    }

    /// Register the callback run whenever the form closes.
    pub fn on_close<F>(mut self, callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_close = Some(Box::new(callback));
        self
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn record(&self) -> &EnquiryRecord {
        &self.record
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Banner text shown after a failed delivery.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn close_deadline(&self) -> Option<Instant> {
        self.close_deadline
    }

    /// Replace one field and drop any error previously reported for it.
    pub fn update_field(&mut self, field: EnquiryField, value: impl Into<String>) {
        self.record.set(field, value.into());
        self.errors.remove(&field);
    }

    /// Apply every field of `input`, as if typed one after another.
    pub fn fill(&mut self, input: EnquiryRecord) {
        let EnquiryRecord {
            name,
            email,
            phone,
            subject,
            message,
        } = input;
        self.update_field(EnquiryField::Name, name);
        self.update_field(EnquiryField::Email, email);
        self.update_field(EnquiryField::Phone, phone);
        self.update_field(EnquiryField::Subject, subject);
        self.update_field(EnquiryField::Message, message);
    }

    pub fn validate(&self) -> FieldErrors {
        validation::validate(&self.record, self.variant)
    }

    /// Validate and deliver the current record.
    ///
    /// Returns `SubmitError::InFlight` while a delivery is pending. A submit
    /// future dropped before the transport answers leaves the form in
    /// `Submitting` until `close()` is called.
    pub async fn submit(&mut self) -> Result<SubmitReceipt, SubmitError> {
        if self.status == SubmissionStatus::Submitting {
            return Err(SubmitError::InFlight);
        }

        let errors = self.validate();
        if !errors.is_empty() {
            debug!(
                variant = self.variant.as_str(),
                invalid_fields = errors.len(),
                "enquiry rejected by validation"
            );
            self.errors = errors.clone();
            return Err(SubmitError::Invalid(errors));
        }

        self.errors.clear();
        self.banner = None;
        self.close_deadline = None;
        if self.status == SubmissionStatus::Success {
            // Resubmitted before the pending close fired.
            self.transition(SubmissionStatus::Idle);
        }
        self.transition(SubmissionStatus::Submitting);

        match self.transport.send(&self.record).await {
            Ok(()) => {
                self.transition(SubmissionStatus::Success);
                self.record = EnquiryRecord::default();
                let close_after = self.settings.close_delay(self.variant);
                self.close_deadline = Some(Instant::now() + close_after);
                info!(
                    variant = self.variant.as_str(),
                    contract = self.transport.contract(),
                    "enquiry delivered"
                );
                Ok(SubmitReceipt { close_after })
            }
            Err(source) => {
                self.transition(SubmissionStatus::Error);
                let banner = self.settings.failure_banner();
                self.banner = Some(banner.clone());
                warn!(
                    variant = self.variant.as_str(),
                    contract = self.transport.contract(),
                    error = %source,
                    "enquiry delivery failed"
                );
                Err(SubmitError::Transport { banner, source })
            }
        }
    }

    /// Close the form: discard entered values and return to idle.
    pub fn close(&mut self) {
        self.record = EnquiryRecord::default();
        self.errors.clear();
        self.banner = None;
        self.close_deadline = None;
        self.transition(SubmissionStatus::Idle);
        if let Some(callback) = self.on_close.as_mut() {
            callback();
        }
    }

    /// Wait for the close armed by a successful submit, then close.
    ///
    /// Returns `false` without waiting when no close is pending.
    pub async fn wait_and_close(&mut self) -> bool {
        let Some(deadline) = self.close_deadline else {
            return false;
        };
        tokio::time::sleep_until(deadline).await;
        self.close();
        true
    }

    fn transition(&mut self, next: SubmissionStatus) {
        debug_assert!(
            self.status.can_transition_to(next),
            "illegal enquiry status transition {:?} -> {:?}",
            self.status,
            next
        );
        debug!(from = self.status.label(), to = next.label(), "enquiry status");
        self.status = next;
    }
}

impl fmt::Debug for EnquiryController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnquiryController")
            .field("variant", &self.variant)
            .field("status", &self.status)
            .field("record", &self.record)
            .field("errors", &self.errors)
            .field("transport", &self.transport.contract())
            .finish_non_exhaustive()
    }
}
