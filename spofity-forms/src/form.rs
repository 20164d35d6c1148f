//! Groups of fields submitted together.

use crate::field::ValidatedField;

/// Information about a single field that failed on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name the field was registered under.
    pub field_name: String,
    /// The field's display label.
    pub label: String,
    /// Error message.
    pub message: String,
}

/// Result of a submit attempt over one or more fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// All fields passed validation.
    #[default]
    Valid,
    /// One or more fields failed validation.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get all validation errors.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Get the first validation error (if any).
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    /// Name of the first invalid field, for focusing.
    pub fn first_invalid_field(&self) -> Option<&str> {
        self.first_error().map(|e| e.field_name.as_str())
    }
}

/// A named set of fields with a shared submit flag.
///
/// Submitting forces every field to reveal its current validity, whether
/// the user visited it or not.
///
/// # Example
///
/// ```
/// use spofity_forms::{Form, Rule, ValidatedField};
///
/// let mut form = Form::new()
///     .field("alias", ValidatedField::builder("Alias")
///         .rule(Rule::required("El nombre de usuario es requerido"))
///         .build());
///
/// let result = form.attempt_submit();
/// assert_eq!(result.first_invalid_field(), Some("alias"));
/// ```
#[derive(Debug, Default)]
pub struct Form {
    fields: Vec<(String, ValidatedField)>,
    attempted: bool,
}

impl Form {
    /// Create an empty form.
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            attempted: false,
        }
    }

    /// Add a field under `name`. Fields keep their insertion order.
    pub fn field(mut self, name: impl Into<String>, field: ValidatedField) -> Self {
        self.fields.push((name.into(), field));
        self
    }

    /// Look up a field.
    pub fn get(&self, name: &str) -> Option<&ValidatedField> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, field)| field)
    }

    /// Look up a field mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut ValidatedField> {
        self.fields
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, field)| field)
    }

    /// Iterate fields with their names, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidatedField)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    /// Whether a submit was attempted.
    pub fn attempted(&self) -> bool {
        self.attempted
    }

    /// Whether every field's rules accept its current value.
    ///
    /// Computed fresh, so it also covers rules that read other fields.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|(_, field)| field.passes_rules())
    }

    /// Pick up host writes into controlled cells.
    pub fn sync(&mut self) {
        for (_, field) in &mut self.fields {
            field.sync();
        }
    }

    /// Mark the form as submitted and reveal every field.
    ///
    /// Fields that were already forced are revalidated too, so errors that
    /// depend on other fields are current when the result is built.
    pub fn attempt_submit(&mut self) -> ValidationResult {
        self.attempted = true;

        let mut errors = Vec::new();
        for (name, field) in &mut self.fields {
            if field.force_show_error() {
                field.revalidate();
            } else {
                field.set_force_show_error(true);
            }

            if let Some(message) = field.display_error() {
                errors.push(FieldError {
                    field_name: name.clone(),
                    label: field.label().to_string(),
                    message: message.to_string(),
                });
            }
        }

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            log::debug!("submit blocked by {} invalid field(s)", errors.len());
            ValidationResult::Invalid(errors)
        }
    }
}
