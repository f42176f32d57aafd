//! Configuration handling for the signup client

use std::env;

const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";

/// Identifiers for the transactional-email service, sourced from the
/// environment once at startup.
///
/// All three are opaque strings. Missing variables fall back to empty
/// strings rather than failing startup; the service rejects the send at
/// submit time instead, which surfaces through the normal failure path.
#[derive(Debug, Clone, Default)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_values(
            env::var(SERVICE_ID_VAR).ok(),
            env::var(TEMPLATE_ID_VAR).ok(),
            env::var(PUBLIC_KEY_VAR).ok(),
        )
    }

    fn from_values(
        service_id: Option<String>,
        template_id: Option<String>,
        public_key: Option<String>,
    ) -> Self {
        Self {
            service_id: service_id.unwrap_or_default(),
            template_id: template_id.unwrap_or_default(),
            public_key: public_key.unwrap_or_default(),
        }
    }

    /// True when every identifier is present
    pub fn is_complete(&self) -> bool {
        !self.service_id.is_empty() && !self.template_id.is_empty() && !self.public_key.is_empty()
    }
}
