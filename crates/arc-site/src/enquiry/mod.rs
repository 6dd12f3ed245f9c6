//! Enquiry form state, validation and the submission flow.

pub mod controller;
pub mod domain;
pub mod router;
pub mod validation;

#[cfg(test)]
mod tests;

pub use controller::{EnquiryController, SubmitError, SubmitReceipt};
pub use domain::{
    EnquiryField, EnquiryRecord, EnquirySettings, EnquirySubject, FieldErrors, FormVariant,
    SubmissionStatus, UnknownSubject,
};
pub use router::{enquiry_router, EnquiryState};
pub use validation::validate;
