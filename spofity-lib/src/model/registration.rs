use serde::Serialize;

use super::VerificationKind;
use super::VerificationTarget;

/// Sign-up request. At least one contact must be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Registration {
    #[serde(rename = "correo", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Registration {
    /// Builds a registration from raw input, treating blank values as absent.
    ///
    /// Returns `None` when both are blank.
    pub fn from_input(email: &str, phone: &str) -> Option<Self> {
        let clean = |v: &str| {
            let v = v.trim();
            (!v.is_empty()).then(|| v.to_string())
        };
        let registration = Self {
            email: clean(email),
            phone: clean(phone),
        };
        (registration.email.is_some() || registration.phone.is_some()).then_some(registration)
    }

    /// Where the verification code goes. Email wins when both are given.
    pub fn verification_target(&self) -> Option<VerificationTarget> {
        match (&self.email, &self.phone) {
            (Some(email), _) => Some(VerificationTarget::new(VerificationKind::Email, email)),
            (None, Some(phone)) => Some(VerificationTarget::new(VerificationKind::Phone, phone)),
            (None, None) => None,
        }
    }
}
