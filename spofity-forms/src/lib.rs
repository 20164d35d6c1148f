//! Rule-based text field validation with deferred error display.
//!
//! A [`ValidatedField`] evaluates an ordered list of [`Rule`]s against its
//! value and decides when the resulting message may be shown: only once the
//! field has been blurred, or when the host forces it after a submit
//! attempt. Screens group fields in a [`Form`] and share values through
//! [`State`] cells.
//!
//! # Example
//!
//! ```
//! use spofity_forms::{Form, Rule, State, ValidatedField};
//!
//! let password = State::new(String::new());
//! let password_valid = State::new(false);
//!
//! let mut form = Form::new()
//!     .field("password", ValidatedField::builder("Contraseña")
//!         .controlled(&password)
//!         .rule(Rule::required("La contraseña es requerida"))
//!         .rule(Rule::min_length(6, "Mínimo 6 caracteres"))
//!         .report_validity(&password_valid)
//!         .secure()
//!         .build());
//!
//! let result = form.attempt_submit();
//! assert!(result.is_invalid());
//! assert!(!password_valid.get());
//!
//! form.get_mut("password").unwrap().set_value("secret123");
//! assert!(password_valid.get());
//! assert_eq!(password.get(), "secret123");
//! ```

mod field;
mod form;
mod options;
mod rule;
mod state;

pub use field::{FieldBuilder, FieldEvent, ValidatedField, ValueSource};
pub use form::{FieldError, Form, ValidationResult};
pub use options::{InputOptions, KeyboardKind};
pub use rule::{Rule, Rules};
pub use state::State;
