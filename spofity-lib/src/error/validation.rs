//! Validation errors reported by the backend

use serde::Deserialize;

/// Error information for a specific field that the backend rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BackendFieldError {
    /// Wire name of the field (e.g. `contrasenia`).
    pub field: String,
    /// Human-readable validation error message.
    pub message: String,
}

impl BackendFieldError {
    /// Creates a new field validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Display label for the wire field name.
    pub fn label(&self) -> &str {
        match self.field.as_str() {
            "contrasenia" => "Contraseña",
            other => other,
        }
    }

    /// `"<label>: <message>"`, the line shown under a form.
    pub fn describe(&self) -> String {
        format!("{}: {}", self.label(), self.message)
    }
}

impl std::fmt::Display for BackendFieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
