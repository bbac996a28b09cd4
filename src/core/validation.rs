//! Validation module for the trial registration form
//!
//! Field rules:
//! - name: at least two characters
//! - email: `local@domain.tld` shape
//! - terms: must be accepted
//!
//! Company and phone are free text and never fail.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum length of the full name
pub const MIN_NAME_LENGTH: usize = 2;

/// Maximum email length accepted (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Form fields that can carry an inline error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    AgreeToTerms,
}

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name must be at least {min} characters")]
    NameTooShort { min: usize },
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("You must agree to the terms and conditions")]
    TermsNotAccepted,
}

impl FieldError {
    /// Field the error is shown under
    pub fn field(&self) -> Field {
        match self {
            FieldError::NameTooShort { .. } => Field::Name,
            FieldError::InvalidEmail => Field::Email,
            FieldError::TermsNotAccepted => Field::AgreeToTerms,
        }
    }
}

/// Errors found in one validation pass, at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Record an error, replacing any previous error on the same field
    pub fn add(&mut self, error: FieldError) {
        let field = error.field();
        self.errors.retain(|e| e.field() != field);
        self.errors.push(error);
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    /// Inline message for `field`, if it failed
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

/// Raw values as typed into the form inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub agree_to_terms: bool,
}

impl RegistrationDraft {
    /// Validate every field and build the payload handed to the submit handler
    pub fn validate(&self) -> Result<RegistrationForm, FieldErrors> {
        let mut errors = FieldErrors::new();

        if let Err(e) = validate_full_name(&self.name) {
            errors.add(e);
        }
        if let Err(e) = validate_email(&self.email) {
            errors.add(e);
        }
        if !self.agree_to_terms {
            errors.add(FieldError::TermsNotAccepted);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(RegistrationForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: optional_text(&self.company),
            phone: optional_text(&self.phone),
            agree_to_terms: self.agree_to_terms,
        })
    }

    /// Back to empty inputs and an unticked checkbox
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Validated registration payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub agree_to_terms: bool,
}

fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Validate the full name field
pub fn validate_full_name(name: &str) -> Result<(), FieldError> {
    if name.trim().chars().count() < MIN_NAME_LENGTH {
        return Err(FieldError::NameTooShort {
            min: MIN_NAME_LENGTH,
        });
    }
    Ok(())
}

/// Validate the email field
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if is_valid_email(email.trim()) {
        Ok(())
    } else {
        Err(FieldError::InvalidEmail)
    }
}

/// Check the `local@domain.tld` shape
///
/// The local part may use letters, digits and `_'+-.`, must not start with or
/// repeat a dot, and must end in a letter, digit, `_`, `+` or `-`. The domain needs at least two labels of
/// letters, digits and inner hyphens, and an alphabetic TLD of two or more
/// characters.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > MAX_EMAIL_LENGTH {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    if local.is_empty() || local.len() > 64 {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    let chars_ok = local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "_'+-.".contains(c));
    let last_ok = local
        .chars()
        .last()
        .is_some_and(|c| c.is_ascii_alphanumeric() || "_+-".contains(c));

    chars_ok && last_ok
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

    let tld_ok = labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));

    labels_ok && tld_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> RegistrationDraft {
        RegistrationDraft {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            company: String::new(),
            phone: String::new(),
            agree_to_terms: true,
        }
    }

    #[test]
    fn test_valid_names() {
        assert!(validate_full_name("Jo").is_ok());
        assert!(validate_full_name("Jane Doe").is_ok());
        assert!(validate_full_name("Łukasz").is_ok());
    }

    #[test]
    fn test_short_names() {
        assert!(validate_full_name("").is_err());
        assert!(validate_full_name("J").is_err());
        assert!(validate_full_name("  J  ").is_err());
        // Two bytes, one character
        assert!(validate_full_name("é").is_err());
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("john@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co.in"));
        assert!(is_valid_email("a_b-c@sub-domain.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("john@"));
        assert!(!is_valid_email("john@example"));
        assert!(!is_valid_email("john@example.c"));
        assert!(!is_valid_email("john@@example.com"));
        assert!(!is_valid_email("john doe@example.com"));
        assert!(!is_valid_email(".john@example.com"));
        assert!(!is_valid_email("jo..hn@example.com"));
        assert!(!is_valid_email("john@-example.com"));
        assert!(!is_valid_email("john@example..com"));
        assert!(!is_valid_email("john@example.123"));
    }

    #[test]
    fn test_local_part_punctuation() {
        assert!(is_valid_email("o'brien@example.com"));
        assert!(is_valid_email("tag+@example.com"));
        assert!(!is_valid_email("a#b@example.com"));
        assert!(!is_valid_email("x{y}@example.com"));
        assert!(!is_valid_email("pipe|me@example.com"));
        assert!(!is_valid_email("bang!@example.com"));
        // Apostrophe is allowed inside but not as the last character
        assert!(!is_valid_email("obrien'@example.com"));
        assert!(!is_valid_email("john.@example.com"));
    }

    #[test]
    fn test_email_is_trimmed_before_validation() {
        assert!(validate_email("  jane@example.com ").is_ok());
    }

    #[test]
    fn test_valid_draft_builds_form() {
        let mut draft = valid_draft();
        draft.company = "  Kisan Mandi ".to_string();
        draft.phone = "   ".to_string();

        let form = draft.validate().unwrap();
        assert_eq!(form.name, "Jane Doe");
        assert_eq!(form.email, "jane@example.com");
        assert_eq!(form.company.as_deref(), Some("Kisan Mandi"));
        assert_eq!(form.phone, None);
        assert!(form.agree_to_terms);
    }

    #[test]
    fn test_all_failing_fields_reported() {
        let draft = RegistrationDraft {
            name: "J".to_string(),
            email: "not-an-email".to_string(),
            ..Default::default()
        };

        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.message(Field::Name).as_deref(),
            Some("Name must be at least 2 characters")
        );
        assert_eq!(
            errors.message(Field::Email).as_deref(),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            errors.message(Field::AgreeToTerms).as_deref(),
            Some("You must agree to the terms and conditions")
        );
    }

    #[test]
    fn test_terms_required() {
        let mut draft = valid_draft();
        draft.agree_to_terms = false;

        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::AgreeToTerms), Some(&FieldError::TermsNotAccepted));
        assert!(errors.get(Field::Name).is_none());
    }

    #[test]
    fn test_field_errors_keep_one_per_field() {
        let mut errors = FieldErrors::new();
        errors.add(FieldError::InvalidEmail);
        errors.add(FieldError::InvalidEmail);
        errors.add(FieldError::NameTooShort { min: 2 });
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.iter().count(), 2);
    }

    #[test]
    fn test_reset_clears_draft() {
        let mut draft = valid_draft();
        draft.reset();
        assert_eq!(draft, RegistrationDraft::default());
        assert!(!draft.agree_to_terms);
    }

    #[test]
    fn test_form_serializes_camel_case() {
        let form = valid_draft().validate().unwrap();
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["agreeToTerms"], true);
        assert_eq!(json["name"], "Jane Doe");
        assert!(json.get("company").is_none());
    }
}
