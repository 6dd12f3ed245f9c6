use std::sync::OnceLock;

use regex::Regex;

use super::domain::{EnquiryField, EnquiryRecord, EnquirySubject, FieldErrors, FormVariant};

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"))
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9+\-\s()]{10,}$").expect("phone pattern"))
}

pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    phone_pattern().is_match(value)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validate a record against the rules of the given form variant.
///
/// Returns an empty map when the record may be submitted. The check is pure:
/// it never touches controller state or the network.
pub fn validate(record: &EnquiryRecord, variant: FormVariant) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if is_blank(&record.name) {
        errors.insert(EnquiryField::Name, "Full name is required".to_string());
    }

    if is_blank(&record.email) {
        errors.insert(EnquiryField::Email, "Email is required".to_string());
    } else if !is_valid_email(&record.email) {
        errors.insert(
            EnquiryField::Email,
            "Please enter a valid email address".to_string(),
        );
    }

    match variant {
        FormVariant::Modal => {
            if is_blank(&record.phone) {
                errors.insert(EnquiryField::Phone, "Phone number is required".to_string());
            }
        }
        FormVariant::Page => {
            if !record.phone.is_empty() && !is_valid_phone(&record.phone) {
                errors.insert(
                    EnquiryField::Phone,
                    "Please enter a valid phone number".to_string(),
                );
            }
            if record.subject.parse::<EnquirySubject>().is_err() {
                errors.insert(EnquiryField::Subject, "Please select a subject".to_string());
            }
            if is_blank(&record.message) {
                errors.insert(EnquiryField::Message, "Message is required".to_string());
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, email: &str, phone: &str, message: &str) -> EnquiryRecord {
        EnquiryRecord {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            subject: String::new(),
            message: message.to_string(),
        }
    }

    #[test]
    fn modal_variant_only_flags_malformed_email_for_short_record() {
        let errors = validate(&record("A", "bad", "123", ""), FormVariant::Modal);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(&EnquiryField::Email).map(String::as_str),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn page_variant_requires_subject_message_and_valid_phone() {
        let errors = validate(&record("A", "bad", "123", ""), FormVariant::Page);
        let keys: Vec<_> = errors.keys().copied().collect();
        assert_eq!(
            keys,
            vec![
                EnquiryField::Email,
                EnquiryField::Phone,
                EnquiryField::Subject,
                EnquiryField::Message
            ]
        );
    }

    #[test]
    fn page_variant_allows_empty_phone() {
        let mut valid = record("Jane Doe", "jane@x.com", "", "Interested");
        valid.subject = "viewing".to_string();
        assert!(validate(&valid, FormVariant::Page).is_empty());
    }

    #[test]
    fn blank_required_fields_are_reported() {
        let errors = validate(&record("   ", "", "", ""), FormVariant::Modal);
        assert_eq!(
            errors.get(&EnquiryField::Name).map(String::as_str),
            Some("Full name is required")
        );
        assert_eq!(
            errors.get(&EnquiryField::Email).map(String::as_str),
            Some("Email is required")
        );
        assert!(errors.contains_key(&EnquiryField::Phone));
        assert!(!errors.contains_key(&EnquiryField::Message));
    }

    #[test]
    fn valid_modal_record_passes() {
        let errors = validate(
            &record("Jane Doe", "jane@x.com", "+1 234 567 8900", "Interested"),
            FormVariant::Modal,
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn email_pattern_rejects_whitespace_and_missing_domain_dot() {
        assert!(is_valid_email("jane@x.com"));
        assert!(!is_valid_email("jane@x"));
        assert!(!is_valid_email("jane doe@x.com"));
        assert!(!is_valid_email("@x.com"));
    }

    #[test]
    fn phone_pattern_needs_ten_allowed_characters() {
        assert!(is_valid_phone("+91 123 456 7890"));
        assert!(is_valid_phone("(0484) 123-4567"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("call me maybe"));
    }
}
