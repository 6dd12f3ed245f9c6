use std::fmt::{self, Write as _};
use std::time::Duration;

use super::html::{escape_html, Refresh};
use crate::enquiry::{
    EnquiryController, EnquiryField, EnquiryRecord, EnquirySubject, FieldErrors, FormVariant,
    SubmissionStatus, SubmitError, SubmitReceipt,
};

/// Snapshot of a form for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormView {
    pub variant: FormVariant,
    pub record: EnquiryRecord,
    pub errors: FieldErrors,
    pub status: SubmissionStatus,
    pub banner: Option<String>,
    pub close_after: Option<Duration>,
}

impl FormView {
    pub fn blank(variant: FormVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn from_outcome(
        controller: &EnquiryController,
        outcome: &Result<SubmitReceipt, SubmitError>,
    ) -> Self {
        Self {
            variant: controller.variant(),
            record: controller.record().clone(),
            errors: controller.errors().clone(),
            status: controller.status(),
            banner: controller.banner().map(str::to_string),
            close_after: outcome.as_ref().ok().map(|receipt| receipt.close_after),
        }
    }

    /// Refresh that closes the form after a success: back to the landing page.
    pub(crate) fn refresh(&self) -> Option<Refresh<'static>> {
        let close_after = self.close_after?;
        if self.status != SubmissionStatus::Success {
            return None;
        }
        let millis = u64::try_from(close_after.as_millis()).unwrap_or(u64::MAX);
        Some(Refresh {
            seconds: millis.div_ceil(1_000),
            target: "/",
        })
    }

    fn error(&self, field: EnquiryField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

struct Input<'a> {
    field: EnquiryField,
    name: &'a str,
    id: &'a str,
    kind: &'a str,
    label: Option<&'a str>,
    placeholder: &'a str,
    required: bool,
}

fn write_input(out: &mut String, view: &FormView, input: Input<'_>) -> fmt::Result {
    let error = view.error(input.field);
    out.push_str("<div class=\"field\">");
    if let Some(label) = input.label {
        write!(out, "<label for=\"{}\">{}</label>", input.id, escape_html(label))?;
    }
    let class = if error.is_some() { " class=\"invalid\"" } else { "" };
    let required = if input.required { " required" } else { "" };
    let value = escape_html(view.record.get(input.field));
    if input.kind == "textarea" {
        write!(
            out,
            "<textarea id=\"{}\" name=\"{}\" rows=\"4\" placeholder=\"{}\"{class}{required}>{value}</textarea>",
            input.id,
            input.name,
            escape_html(input.placeholder),
        )?;
    } else {
        write!(
            out,
            "<input type=\"{}\" id=\"{}\" name=\"{}\" value=\"{value}\" placeholder=\"{}\"{class}{required}>",
            input.kind,
            input.id,
            input.name,
            escape_html(input.placeholder),
        )?;
    }
    if let Some(message) = error {
        write!(out, "<p class=\"field-error\">{}</p>", escape_html(message))?;
    }
    out.push_str("</div>\n");
    Ok(())
}

fn write_banner(out: &mut String, view: &FormView, success_text: &str) -> fmt::Result {
    match view.status {
        SubmissionStatus::Error => writeln!(
            out,
            "<div class=\"banner-error\" role=\"alert\">{}</div>",
            escape_html(
                view.banner
                    .as_deref()
                    .unwrap_or("Something went wrong. Please try again.")
            )
        ),
        SubmissionStatus::Success => writeln!(
            out,
            "<div class=\"banner-success\" role=\"status\">{}</div>",
            escape_html(success_text)
        ),
        SubmissionStatus::Idle | SubmissionStatus::Submitting => Ok(()),
    }
}

fn submit_label(view: &FormView, idle: &str) -> String {
    if view.status == SubmissionStatus::Submitting {
        "Submitting...".to_string()
    } else {
        idle.to_string()
    }
}

/// Popup form on the landing page. Open when targeted by `#enquire` or after a post.
pub(crate) fn write_modal_form(out: &mut String, view: &FormView, open: bool) -> fmt::Result {
    let open_class = if open { " open" } else { "" };
    writeln!(
        out,
        "<div id=\"enquire\" class=\"modal{open_class}\" role=\"dialog\" aria-modal=\"true\">"
    )?;
    out.push_str("<div class=\"modal-panel\">\n");
    out.push_str("<a href=\"/\" class=\"modal-close\" aria-label=\"Close enquiry form\">&times;</a>\n");
    out.push_str("<h2>Inquire about ARC</h2>\n<p>Please leave a message if you are interested!</p>\n");
    out.push_str("<form id=\"enquiry-form\" method=\"post\" action=\"/enquiry#enquire\">\n");

    write_input(
        out,
        view,
        Input {
            field: EnquiryField::Name,
            name: "name",
            id: "modal-name",
            kind: "text",
            label: None,
            placeholder: "Your full name",
            required: true,
        },
    )?;
    write_input(
        out,
        view,
        Input {
            field: EnquiryField::Email,
            name: "email",
            id: "modal-email",
            kind: "email",
            label: None,
            placeholder: "you@example.com",
            required: true,
        },
    )?;
    write_input(
        out,
        view,
        Input {
            field: EnquiryField::Phone,
            name: "phone",
            id: "modal-phone",
            kind: "tel",
            label: None,
            placeholder: "e.g. +1 234 567 890",
            required: true,
        },
    )?;
    write_input(
        out,
        view,
        Input {
            field: EnquiryField::Message,
            name: "message",
            id: "modal-message",
            kind: "textarea",
            label: None,
            placeholder: "Your message (optional)",
            required: false,
        },
    )?;

    write_banner(
        out,
        view,
        "Thank you for your inquiry! We'll get back to you soon.",
    )?;
    writeln!(
        out,
        "<button type=\"submit\" class=\"button\">{}</button>",
        submit_label(view, "Submit Inquiry")
    )?;
    out.push_str("</form>\n</div>\n</div>\n");
    Ok(())
}

/// Form shown on the standalone enquiry page.
pub(crate) fn write_page_form(out: &mut String, view: &FormView) -> fmt::Result {
    if view.status == SubmissionStatus::Success {
        out.push_str("<div class=\"thank-you\">\n<h2>Thank You!</h2>\n");
        out.push_str("<p>Your enquiry has been submitted successfully. We'll get back to you shortly.</p>\n");
        out.push_str("<p>Redirecting to homepage...</p>\n</div>\n");
        return Ok(());
    }

    out.push_str("<form id=\"enquiry-page-form\" method=\"post\" action=\"/enquire\">\n");
    write_input(
        out,
        view,
        Input {
            field: EnquiryField::Name,
            name: "fullName",
            id: "fullName",
            kind: "text",
            label: Some("Full Name *"),
            placeholder: "Enter your full name",
            required: false,
        },
    )?;
    write_input(
        out,
        view,
        Input {
            field: EnquiryField::Email,
            name: "email",
            id: "email",
            kind: "email",
            label: Some("Email Address *"),
            placeholder: "Enter your email address",
            required: false,
        },
    )?;
    write_input(
        out,
        view,
        Input {
            field: EnquiryField::Phone,
            name: "phone",
            id: "phone",
            kind: "tel",
            label: Some("Phone Number"),
            placeholder: "Enter your phone number",
            required: false,
        },
    )?;

    let subject_error = view.error(EnquiryField::Subject);
    out.push_str("<div class=\"field\"><label for=\"subject\">Subject *</label>");
    let class = if subject_error.is_some() { " class=\"invalid\"" } else { "" };
    write!(out, "<select id=\"subject\" name=\"subject\"{class}>")?;
    out.push_str("<option value=\"\">Select a subject</option>");
    for subject in EnquirySubject::ALL {
        let selected = if view.record.subject == subject.as_str() {
            " selected"
        } else {
            ""
        };
        write!(
            out,
            "<option value=\"{}\"{selected}>{}</option>",
            subject.as_str(),
            escape_html(subject.label())
        )?;
    }
    out.push_str("</select>");
    if let Some(message) = subject_error {
        write!(out, "<p class=\"field-error\">{}</p>", escape_html(message))?;
    }
    out.push_str("</div>\n");

    write_input(
        out,
        view,
        Input {
            field: EnquiryField::Message,
            name: "message",
            id: "message",
            kind: "textarea",
            label: Some("Message *"),
            placeholder: "Enter your message",
            required: false,
        },
    )?;

    write_banner(out, view, "")?;
    writeln!(
        out,
        "<button type=\"submit\" class=\"button\">{}</button>",
        submit_label(view, "Submit Enquiry")
    )?;
    out.push_str("</form>\n");
    Ok(())
}
