//! Waitlist form state and validation

use super::field::FormField;
use super::signup::{OtpSolution, SignupRequest};
use once_cell::sync::Lazy;
use regex::Regex;

/// Basic "local@domain.tld" shape; anything stricter rejects real addresses
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

pub const FULL_NAME_REQUIRED: &str = "Full name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Per-field validation messages, rebuilt from scratch on every pass.
///
/// Only the two required fields can carry errors; the optional fields are
/// never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub full_name: Option<String>,
    pub email: Option<String>,
}

impl ValidationErrors {
    /// The form is valid iff no field carries an error
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.email.is_none()
    }
}

/// The waitlist signup form
#[derive(Debug, Clone)]
pub struct WaitlistForm {
    pub full_name: FormField,
    pub email: FormField,
    pub company_name: FormField,
    pub current_otp: FormField,
    pub monthly_usage: FormField,
    /// 0-4 are the fields, 5 is the submit row
    pub active_field_index: usize,
}

impl WaitlistForm {
    pub fn new() -> Self {
        Self {
            full_name: FormField::text("full_name", "Full Name", true),
            email: FormField::text("email", "Email Address", true),
            company_name: FormField::text("company_name", "Company Name", false),
            current_otp: FormField::select(
                "current_otp",
                "Current OTP Solution",
                &OtpSolution::LABELS,
            ),
            monthly_usage: FormField::text_with_placeholder(
                "monthly_usage",
                "Expected Monthly Usage",
                "e.g., 10,000 authentications",
            ),
            active_field_index: 0,
        }
    }

    /// Returns true if the submit row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == 5
    }

    /// Rebuild the full error map from the current field values
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        if self.full_name.as_text().trim().is_empty() {
            errors.full_name = Some(FULL_NAME_REQUIRED.to_string());
        }

        let email = self.email.as_text();
        if email.trim().is_empty() {
            errors.email = Some(EMAIL_REQUIRED.to_string());
        } else if !EMAIL_RE.is_match(email) {
            errors.email = Some(EMAIL_INVALID.to_string());
        }

        errors
    }

    /// Snapshot the current field values into a signup record
    pub fn to_request(&self) -> SignupRequest {
        SignupRequest {
            full_name: self.full_name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            company_name: self.company_name.as_text().to_string(),
            current_otp_solution: self
                .current_otp
                .selected_index()
                .map(|i| OtpSolution::ALL[i]),
            monthly_usage: self.monthly_usage.as_text().to_string(),
        }
    }
}

impl Default for WaitlistForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for WaitlistForm {
    fn field_count(&self) -> usize {
        6 // five fields plus the submit row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(5);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.full_name,
            1 => &mut self.email,
            2 => &mut self.company_name,
            3 => &mut self.current_otp,
            // Submit row (index 5) has no field; return the last one as dummy
            _ => &mut self.monthly_usage,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.full_name),
            1 => Some(&self.email),
            2 => Some(&self.company_name),
            3 => Some(&self.current_otp),
            4 => Some(&self.monthly_usage),
            // Index 5 is the submit row, no FormField for it
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(field: &mut FormField, text: &str) {
        for c in text.chars() {
            field.push_char(c);
        }
    }

    fn valid_form() -> WaitlistForm {
        let mut form = WaitlistForm::new();
        type_into(&mut form.full_name, "Jane Doe");
        type_into(&mut form.email, "jane@x.com");
        form
    }

    mod validation {
        use super::*;

        #[test]
        fn test_empty_form_has_both_errors() {
            let errors = WaitlistForm::new().validate();
            assert_eq!(errors.full_name.as_deref(), Some(FULL_NAME_REQUIRED));
            assert_eq!(errors.email.as_deref(), Some(EMAIL_REQUIRED));
            assert!(!errors.is_empty());
        }

        #[test]
        fn test_whitespace_only_name_is_missing() {
            let mut form = valid_form();
            form.full_name.clear();
            type_into(&mut form.full_name, "   ");
            let errors = form.validate();
            assert_eq!(errors.full_name.as_deref(), Some(FULL_NAME_REQUIRED));
        }

        #[test]
        fn test_blank_email_message_is_distinct_from_format_error() {
            let mut form = valid_form();
            form.email.clear();
            assert_eq!(form.validate().email.as_deref(), Some(EMAIL_REQUIRED));

            type_into(&mut form.email, "not-an-email");
            assert_eq!(form.validate().email.as_deref(), Some(EMAIL_INVALID));
        }

        #[test]
        fn test_minimal_valid_email_passes() {
            let mut form = valid_form();
            form.email.clear();
            type_into(&mut form.email, "a@b.c");
            assert!(form.validate().is_empty());
        }

        #[test]
        fn test_email_with_spaces_rejected() {
            let mut form = valid_form();
            form.email.clear();
            type_into(&mut form.email, "a b@c.d");
            assert_eq!(form.validate().email.as_deref(), Some(EMAIL_INVALID));
        }

        #[test]
        fn test_email_without_tld_rejected() {
            let mut form = valid_form();
            form.email.clear();
            type_into(&mut form.email, "jane@x");
            assert_eq!(form.validate().email.as_deref(), Some(EMAIL_INVALID));
        }

        #[test]
        fn test_optional_fields_never_validated() {
            let form = valid_form();
            // All optionals left empty
            assert!(form.validate().is_empty());
        }

        #[test]
        fn test_validate_rebuilds_from_scratch() {
            let mut form = WaitlistForm::new();
            assert!(!form.validate().is_empty());
            type_into(&mut form.full_name, "Jane Doe");
            type_into(&mut form.email, "jane@x.com");
            // Prior errors must not linger once the fields are fixed
            assert!(form.validate().is_empty());
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_field_count_includes_submit_row() {
            assert_eq!(WaitlistForm::new().field_count(), 6);
        }

        #[test]
        fn test_next_field_wraps() {
            let mut form = WaitlistForm::new();
            for _ in 0..6 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_submit_row() {
            let mut form = WaitlistForm::new();
            form.prev_field();
            assert_eq!(form.active_field_index, 5);
            assert!(form.is_submit_row_active());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = WaitlistForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 5);
        }

        #[test]
        fn test_get_field_returns_correct_fields() {
            let form = WaitlistForm::new();
            assert_eq!(form.get_field(0).unwrap().name, "full_name");
            assert_eq!(form.get_field(1).unwrap().name, "email");
            assert_eq!(form.get_field(2).unwrap().name, "company_name");
            assert_eq!(form.get_field(3).unwrap().name, "current_otp");
            assert_eq!(form.get_field(4).unwrap().name, "monthly_usage");
            assert!(form.get_field(5).is_none()); // submit row
        }

        #[test]
        fn test_required_markers() {
            let form = WaitlistForm::new();
            assert!(form.full_name.required);
            assert!(form.email.required);
            assert!(!form.company_name.required);
            assert!(!form.current_otp.required);
            assert!(!form.monthly_usage.required);
        }
    }

    mod to_request {
        use super::*;
        use crate::state::OtpSolution;

        #[test]
        fn test_unset_select_maps_to_none() {
            let request = valid_form().to_request();
            assert!(request.current_otp_solution.is_none());
        }

        #[test]
        fn test_selected_option_maps_to_enum() {
            let mut form = valid_form();
            form.current_otp.next_option();
            form.current_otp.next_option();
            let request = form.to_request();
            assert_eq!(request.current_otp_solution, Some(OtpSolution::Authy));
        }

        #[test]
        fn test_text_fields_copied_verbatim() {
            let mut form = valid_form();
            type_into(&mut form.company_name, "Acme");
            type_into(&mut form.monthly_usage, "10k");
            let request = form.to_request();
            assert_eq!(request.full_name, "Jane Doe");
            assert_eq!(request.email, "jane@x.com");
            assert_eq!(request.company_name, "Acme");
            assert_eq!(request.monthly_usage, "10k");
        }
    }
}
