//! Rules shared by the auth screens.

use std::sync::LazyLock;

use regex::Regex;
use spofity_forms::Rule;

static EMAIL_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern"));

static CHILE_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+56\d{9}$").expect("Invalid regex pattern"));

pub const ALIAS_REQUIRED: &str = "El nombre de usuario es requerido";
pub const ALIAS_TOO_SHORT: &str = "Debe tener al menos 3 caracteres";
pub const EMAIL_REQUIRED: &str = "El email es requerido";
pub const EMAIL_INVALID: &str = "Formato de email inválido";
pub const PHONE_REQUIRED: &str = "El teléfono es requerido";
pub const PHONE_INVALID: &str = "Formato: +56912345678 (sin espacios)";
pub const PASSWORD_REQUIRED: &str = "La contraseña es requerida";
pub const PASSWORD_TOO_SHORT: &str = "Mínimo 6 caracteres";

pub fn alias() -> Vec<Rule> {
    vec![
        Rule::required(ALIAS_REQUIRED),
        Rule::min_length(3, ALIAS_TOO_SHORT),
    ]
}

/// `something@something.something`, no whitespace.
pub fn email_format() -> Rule {
    Rule::regex(EMAIL_FORMAT.clone(), EMAIL_INVALID)
}

pub fn email() -> Vec<Rule> {
    vec![Rule::required(EMAIL_REQUIRED), email_format()]
}

/// `+56` followed by exactly nine digits.
pub fn phone_format() -> Rule {
    Rule::regex(CHILE_PHONE.clone(), PHONE_INVALID)
}

pub fn phone() -> Vec<Rule> {
    vec![Rule::required(PHONE_REQUIRED), phone_format()]
}

pub fn password() -> Vec<Rule> {
    vec![
        Rule::required(PASSWORD_REQUIRED),
        Rule::min_length(6, PASSWORD_TOO_SHORT),
    ]
}

/// Passes empty values, otherwise defers to `rule`.
pub fn optional(rule: Rule) -> Rule {
    let message = rule.message().to_string();
    Rule::new(move |v| v.is_empty() || rule.test(v), message)
}
