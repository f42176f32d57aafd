//! The signup record forwarded to the waitlist admin inbox

use std::collections::HashMap;
use std::fmt;

/// Recipient label on the admin notification
pub const ADMIN_RECIPIENT: &str = "MOJA Waitlist Admin";

/// Substituted for empty optional fields in the outbound envelope
pub const NOT_PROVIDED: &str = "Not provided";

/// The fixed set of OTP solutions a signup can name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpSolution {
    GoogleAuthenticator,
    Authy,
    MicrosoftAuthenticator,
    SmsOtp,
    EmailOtp,
    Other,
}

impl OtpSolution {
    pub const ALL: [OtpSolution; 6] = [
        OtpSolution::GoogleAuthenticator,
        OtpSolution::Authy,
        OtpSolution::MicrosoftAuthenticator,
        OtpSolution::SmsOtp,
        OtpSolution::EmailOtp,
        OtpSolution::Other,
    ];

    /// User-facing labels, in the same order as [`OtpSolution::ALL`]
    pub const LABELS: [&'static str; 6] = [
        "Google Authenticator",
        "Authy",
        "Microsoft Authenticator",
        "SMS-based OTP",
        "Email-based OTP",
        "Other",
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OtpSolution::GoogleAuthenticator => Self::LABELS[0],
            OtpSolution::Authy => Self::LABELS[1],
            OtpSolution::MicrosoftAuthenticator => Self::LABELS[2],
            OtpSolution::SmsOtp => Self::LABELS[3],
            OtpSolution::EmailOtp => Self::LABELS[4],
            OtpSolution::Other => Self::LABELS[5],
        }
    }
}

impl fmt::Display for OtpSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A completed signup as collected from the form
#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub company_name: String,
    pub current_otp_solution: Option<OtpSolution>,
    pub monthly_usage: String,
}

impl SignupRequest {
    /// Build the named template variables for the notification send.
    ///
    /// Empty optional fields are substituted with the literal
    /// [`NOT_PROVIDED`]; `message` carries a plain-text summary of the
    /// whole signup for templates that render a single body block.
    pub fn template_params(&self) -> HashMap<String, String> {
        let company = non_empty_or_default(&self.company_name);
        let current_otp = self
            .current_otp_solution
            .map(|s| s.label().to_string())
            .unwrap_or_else(|| NOT_PROVIDED.to_string());
        let monthly_usage = non_empty_or_default(&self.monthly_usage);

        let message = format!(
            "New waitlist signup:\n\
             Full Name: {}\n\
             Email: {}\n\
             Company: {}\n\
             Current OTP Solution: {}\n\
             Expected Monthly Usage: {}",
            self.full_name, self.email, company, current_otp, monthly_usage
        );

        let mut params = HashMap::new();
        params.insert("to_name".to_string(), ADMIN_RECIPIENT.to_string());
        params.insert("from_name".to_string(), self.full_name.clone());
        params.insert("from_email".to_string(), self.email.clone());
        params.insert("company_name".to_string(), company);
        params.insert("current_otp".to_string(), current_otp);
        params.insert("monthly_usage".to_string(), monthly_usage);
        params.insert("message".to_string(), message);
        params
    }
}

fn non_empty_or_default(value: &str) -> String {
    if value.is_empty() {
        NOT_PROVIDED.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn minimal_request() -> SignupRequest {
        SignupRequest {
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            company_name: String::new(),
            current_otp_solution: None,
            monthly_usage: String::new(),
        }
    }

    #[test]
    fn test_labels_match_all_order() {
        for (solution, label) in OtpSolution::ALL.iter().zip(OtpSolution::LABELS) {
            assert_eq!(solution.label(), label);
        }
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(OtpSolution::SmsOtp.to_string(), "SMS-based OTP");
    }

    #[test]
    fn test_empty_optionals_become_not_provided() {
        let params = minimal_request().template_params();
        assert_eq!(params["company_name"], NOT_PROVIDED);
        assert_eq!(params["current_otp"], NOT_PROVIDED);
        assert_eq!(params["monthly_usage"], NOT_PROVIDED);
    }

    #[test]
    fn test_recipient_and_sender_variables() {
        let params = minimal_request().template_params();
        assert_eq!(params["to_name"], "MOJA Waitlist Admin");
        assert_eq!(params["from_name"], "Jane Doe");
        assert_eq!(params["from_email"], "jane@x.com");
    }

    #[test]
    fn test_filled_optionals_pass_through() {
        let request = SignupRequest {
            company_name: "Acme".to_string(),
            current_otp_solution: Some(OtpSolution::Authy),
            monthly_usage: "10,000 authentications".to_string(),
            ..minimal_request()
        };
        let params = request.template_params();
        assert_eq!(params["company_name"], "Acme");
        assert_eq!(params["current_otp"], "Authy");
        assert_eq!(params["monthly_usage"], "10,000 authentications");
    }

    #[test]
    fn test_message_summarizes_all_fields() {
        let request = SignupRequest {
            company_name: "Acme".to_string(),
            current_otp_solution: Some(OtpSolution::GoogleAuthenticator),
            monthly_usage: "5k".to_string(),
            ..minimal_request()
        };
        let params = request.template_params();
        let message = &params["message"];
        assert!(message.starts_with("New waitlist signup:"));
        assert!(message.contains("Full Name: Jane Doe"));
        assert!(message.contains("Email: jane@x.com"));
        assert!(message.contains("Company: Acme"));
        assert!(message.contains("Current OTP Solution: Google Authenticator"));
        assert!(message.contains("Expected Monthly Usage: 5k"));
    }

    #[test]
    fn test_message_uses_not_provided_for_empty_optionals() {
        let params = minimal_request().template_params();
        assert!(params["message"].contains("Company: Not provided"));
    }

    #[test]
    fn test_all_seven_variables_present() {
        let params = minimal_request().template_params();
        assert_eq!(params.len(), 7);
        for key in [
            "to_name",
            "from_name",
            "from_email",
            "company_name",
            "current_otp",
            "monthly_usage",
            "message",
        ] {
            assert!(params.contains_key(key), "missing variable: {key}");
        }
    }
}
