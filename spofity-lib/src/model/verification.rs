use serde::Serialize;
use serde::ser::SerializeMap;

/// Number of digits in a verification code.
pub const CODE_LENGTH: usize = 6;

/// Channel the account is verified through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VerificationKind {
    #[default]
    Email,
    Phone,
    Alias,
}

impl VerificationKind {
    /// JSON key the contact travels under.
    pub fn contact_key(self) -> &'static str {
        match self {
            VerificationKind::Email => "email",
            VerificationKind::Phone => "telefono",
            VerificationKind::Alias => "alias",
        }
    }

    /// Parses the kind names used in routes. Unknown names fall back to email.
    pub fn from_route_param(param: &str) -> Self {
        match param {
            "phone" => VerificationKind::Phone,
            "alias" => VerificationKind::Alias,
            _ => VerificationKind::Email,
        }
    }
}

/// Who is being verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationTarget {
    pub kind: VerificationKind,
    /// Email, phone or alias the code was sent for.
    pub contact: String,
}

impl VerificationTarget {
    pub fn new(kind: VerificationKind, contact: impl Into<String>) -> Self {
        Self {
            kind,
            contact: contact.into(),
        }
    }

    /// Body for `POST /api/auth/verify-code`.
    pub fn with_code<'a>(&'a self, code: &'a VerificationCode) -> VerifyRequest<'a> {
        VerifyRequest { target: self, code }
    }
}

/// A complete six digit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCode(String);

impl VerificationCode {
    /// Accepts exactly [`CODE_LENGTH`] ASCII digits.
    pub fn parse(code: &str) -> Option<Self> {
        if code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(code.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Serializes to `{ "<contact_key>": contact, "code": code }`.
#[derive(Debug)]
pub struct VerifyRequest<'a> {
    target: &'a VerificationTarget,
    code: &'a VerificationCode,
}

impl Serialize for VerifyRequest<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(self.target.kind.contact_key(), &self.target.contact)?;
        map.serialize_entry("code", self.code.as_str())?;
        map.end()
    }
}
