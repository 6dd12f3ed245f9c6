use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Visitor-submitted contact request as captured by the enquiry form.
///
/// All fields are plain strings; `subject` is only collected by the
/// standalone enquiry page and stays empty for the landing-page modal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnquiryRecord {
    #[serde(default, alias = "fullName")]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl EnquiryRecord {
    pub fn get(&self, field: EnquiryField) -> &str {
        match field {
            EnquiryField::Name => &self.name,
            EnquiryField::Email => &self.email,
            EnquiryField::Phone => &self.phone,
            EnquiryField::Subject => &self.subject,
            EnquiryField::Message => &self.message,
        }
    }

    pub(crate) fn set(&mut self, field: EnquiryField, value: String) {
        let slot = match field {
            EnquiryField::Name => &mut self.name,
            EnquiryField::Email => &mut self.email,
            EnquiryField::Phone => &mut self.phone,
            EnquiryField::Subject => &mut self.subject,
            EnquiryField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        EnquiryField::ALL
            .iter()
            .all(|field| self.get(*field).is_empty())
    }

    /// Name/value pairs sent to the relay. `subject` is only included when set.
    pub fn relay_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![
            (EnquiryField::Name.as_str(), self.name.as_str()),
            (EnquiryField::Email.as_str(), self.email.as_str()),
            (EnquiryField::Phone.as_str(), self.phone.as_str()),
            (EnquiryField::Message.as_str(), self.message.as_str()),
        ];
        if !self.subject.is_empty() {
            fields.push((EnquiryField::Subject.as_str(), self.subject.as_str()));
        }
        fields
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnquiryField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl EnquiryField {
    pub const ALL: [EnquiryField; 5] = [
        EnquiryField::Name,
        EnquiryField::Email,
        EnquiryField::Phone,
        EnquiryField::Subject,
        EnquiryField::Message,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EnquiryField::Name => "name",
            EnquiryField::Email => "email",
            EnquiryField::Phone => "phone",
            EnquiryField::Subject => "subject",
            EnquiryField::Message => "message",
        }
    }

    /// Resolve a form input name. The enquiry page historically posted `fullName`.
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw.trim() {
            "name" | "fullName" | "full_name" => Some(EnquiryField::Name),
            "email" => Some(EnquiryField::Email),
            "phone" => Some(EnquiryField::Phone),
            "subject" => Some(EnquiryField::Subject),
            "message" => Some(EnquiryField::Message),
            _ => None,
        }
    }
}

impl fmt::Display for EnquiryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation messages, ordered by field.
pub type FieldErrors = BTreeMap<EnquiryField, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnquirySubject {
    General,
    Viewing,
    Pricing,
    Amenities,
    Other,
}

impl EnquirySubject {
    pub const ALL: [EnquirySubject; 5] = [
        EnquirySubject::General,
        EnquirySubject::Viewing,
        EnquirySubject::Pricing,
        EnquirySubject::Amenities,
        EnquirySubject::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EnquirySubject::General => "general",
            EnquirySubject::Viewing => "viewing",
            EnquirySubject::Pricing => "pricing",
            EnquirySubject::Amenities => "amenities",
            EnquirySubject::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EnquirySubject::General => "General Enquiry",
            EnquirySubject::Viewing => "Schedule a Viewing",
            EnquirySubject::Pricing => "Pricing Information",
            EnquirySubject::Amenities => "Amenities Details",
            EnquirySubject::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown enquiry subject '{0}'")]
pub struct UnknownSubject(pub String);

impl FromStr for EnquirySubject {
    type Err = UnknownSubject;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        EnquirySubject::ALL
            .into_iter()
            .find(|subject| subject.as_str() == value.trim())
            .ok_or_else(|| UnknownSubject(value.to_string()))
    }
}

/// UI status of one enquiry form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn label(self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Submitting => "submitting",
            SubmissionStatus::Success => "success",
            SubmissionStatus::Error => "error",
        }
    }

    pub fn can_transition_to(self, next: SubmissionStatus) -> bool {
        use SubmissionStatus::*;
        matches!(
            (self, next),
            (Idle, Submitting)
                | (Error, Submitting)
                | (Submitting, Success)
                | (Submitting, Error)
                | (Submitting, Idle)
                | (Success, Idle)
                | (Error, Idle)
                | (Idle, Idle)
        )
    }
}

/// Which form flavour is being driven.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormVariant {
    /// Popup on the landing page: name, email and phone required, message optional.
    #[default]
    Modal,
    /// Standalone enquiry page: adds a subject and requires a message.
    Page,
}

impl FormVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            FormVariant::Modal => "modal",
            FormVariant::Page => "page",
        }
    }

    pub fn default_close_delay(self) -> Duration {
        match self {
            FormVariant::Modal => Duration::from_millis(2_000),
            FormVariant::Page => Duration::from_millis(3_000),
        }
    }
}

impl FromStr for FormVariant {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "modal" => Ok(FormVariant::Modal),
            "page" => Ok(FormVariant::Page),
            other => Err(format!("unknown form variant '{other}' (expected modal or page)")),
        }
    }
}

/// Deployment-level knobs shared by every controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnquirySettings {
    pub contact_email: String,
    pub modal_close_delay: Duration,
    pub page_close_delay: Duration,
}

impl Default for EnquirySettings {
    fn default() -> Self {
        Self {
            contact_email: "manianj@hotmail.com".to_string(),
            modal_close_delay: FormVariant::Modal.default_close_delay(),
            page_close_delay: FormVariant::Page.default_close_delay(),
        }
    }
}

impl EnquirySettings {
    pub fn close_delay(&self, variant: FormVariant) -> Duration {
        match variant {
            FormVariant::Modal => self.modal_close_delay,
            FormVariant::Page => self.page_close_delay,
        }
    }

    pub fn failure_banner(&self) -> String {
        format!(
            "Unable to submit form. Please try again or contact us directly at {}",
            self.contact_email
        )
    }
}
