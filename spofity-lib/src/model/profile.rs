use serde::Serialize;

use crate::auth::TokenClaims;

/// Editable copy of the profile shown on the account screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub alias: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub photo_url: String,
}

impl Profile {
    /// Copies the claims into editable strings; missing values become empty.
    pub fn from_claims(claims: &TokenClaims) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            alias: text(&claims.alias),
            name: text(&claims.name),
            email: text(&claims.email),
            phone: text(&claims.phone),
            photo_url: text(&claims.photo_url),
        }
    }

    /// Writes the edited values back over `claims`.
    pub fn apply_to(&self, claims: &mut TokenClaims) {
        let value = |v: &str| (!v.is_empty()).then(|| v.to_string());
        claims.alias = value(&self.alias);
        claims.name = value(&self.name);
        claims.email = value(&self.email);
        claims.phone = value(&self.phone);
        claims.photo_url = value(&self.photo_url);
    }
}

/// Body for `PUT /api/users/update-profile`: only the fields that changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "correo", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "fotoPerfil", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl ProfileChanges {
    /// Fields of `edited` that differ from `original`.
    ///
    /// A missing claim and an empty string count as the same value.
    pub fn between(original: &TokenClaims, edited: &Profile) -> Self {
        let changed = |before: &Option<String>, after: &str| {
            (before.as_deref().unwrap_or("") != after).then(|| after.to_string())
        };
        Self {
            alias: changed(&original.alias, &edited.alias),
            name: changed(&original.name, &edited.name),
            email: changed(&original.email, &edited.email),
            phone: changed(&original.phone, &edited.phone),
            photo_url: changed(&original.photo_url, &edited.photo_url),
        }
    }

    /// Returns `true` if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.alias.is_none()
            && self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.photo_url.is_none()
    }
}
