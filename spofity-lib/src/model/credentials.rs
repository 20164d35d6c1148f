use serde::Serialize;
use serde::ser::SerializeMap;

use super::VerificationKind;
use super::VerificationTarget;
use crate::auth::AccessToken;

/// Which identifier the user logs in with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LoginMode {
    /// Public handle.
    #[default]
    Alias,
    /// Email address.
    Email,
    /// Phone number in `+56XXXXXXXXX` form.
    Phone,
}

impl LoginMode {
    /// All modes, in the order the login screen offers them.
    pub const ALL: [LoginMode; 3] = [LoginMode::Alias, LoginMode::Email, LoginMode::Phone];

    /// Endpoint path for this mode.
    pub fn path(self) -> &'static str {
        match self {
            LoginMode::Alias => "/api/auth/login/alias",
            LoginMode::Email => "/api/auth/login/email",
            LoginMode::Phone => "/api/auth/login/phone",
        }
    }

    /// JSON key the identifier travels under.
    pub fn identifier_key(self) -> &'static str {
        match self {
            LoginMode::Alias => "alias",
            LoginMode::Email => "correo",
            LoginMode::Phone => "telefono",
        }
    }

    /// Field label shown on the login screen.
    pub fn label(self) -> &'static str {
        match self {
            LoginMode::Alias => "Nombre de usuario",
            LoginMode::Email => "Dirección de email",
            LoginMode::Phone => "Número de teléfono",
        }
    }

    /// Kind of verification a login in this mode falls back to.
    pub fn verification_kind(self) -> VerificationKind {
        match self {
            LoginMode::Alias => VerificationKind::Alias,
            LoginMode::Email => VerificationKind::Email,
            LoginMode::Phone => VerificationKind::Phone,
        }
    }
}

/// Login request.
///
/// Serializes to `{ "<identifier_key>": identifier, "contrasenia": password }`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Login mode, selects endpoint and identifier key.
    pub mode: LoginMode,
    /// Alias, email or phone as typed.
    pub identifier: String,
    /// Password as typed.
    pub password: String,
}

impl Credentials {
    /// Creates credentials for the given mode.
    pub fn new(mode: LoginMode, identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            mode,
            identifier: identifier.into(),
            password: password.into(),
        }
    }

    /// Where to send the user if the account still needs verifying.
    pub fn verification_target(&self) -> VerificationTarget {
        VerificationTarget::new(self.mode.verification_kind(), self.identifier.clone())
    }
}

impl Serialize for Credentials {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("contrasenia", &self.password)?;
        map.serialize_entry(self.mode.identifier_key(), &self.identifier)?;
        map.end()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("mode", &self.mode)
            .field("identifier", &self.identifier)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// What happened after a login attempt the backend did not reject.
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    /// Logged in. The backend may or may not hand out a token.
    Authenticated(Option<AccessToken>),
    /// The account exists but is not verified yet.
    VerificationRequired(VerificationTarget),
}
