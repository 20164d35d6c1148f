//! Field behaviour for the canonical login/confirmation cases.

use std::sync::{Arc, Mutex};

use spofity_forms::{Rule, Rules, State, ValidatedField};

fn password_rules() -> Rules {
    Rules::new()
        .with(Rule::new(|v| !v.is_empty(), "required"))
        .with(Rule::min_length(6, "min 6 chars"))
}

fn field_with(value: &str, touched: bool, force: bool) -> (ValidatedField, Arc<Mutex<Vec<bool>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let mut field = ValidatedField::builder("Contraseña")
        .rules(password_rules())
        .initial_value(value)
        .on_validation_change(move |valid| sink.lock().unwrap().push(valid))
        .build();
    if touched {
        field.mark_touched();
    }
    field.set_force_show_error(force);
    (field, calls)
}

#[test]
fn test_untouched_empty_field_shows_nothing() {
    let (field, calls) = field_with("", false, false);
    assert_eq!(field.display_error(), None);
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn test_touched_empty_field_is_required() {
    let (field, _) = field_with("", true, false);
    assert_eq!(field.display_error(), Some("required"));
}

#[test]
fn test_touched_short_value_reports_second_rule() {
    let (field, _) = field_with("abc", true, false);
    assert_eq!(field.display_error(), Some("min 6 chars"));
}

#[test]
fn test_touched_valid_value_notifies_true() {
    let (field, calls) = field_with("abcdef", true, false);
    assert_eq!(field.display_error(), None);
    assert_eq!(*calls.lock().unwrap(), vec![true]);
}

#[test]
fn test_forced_empty_confirmation_fails_strict_equality() {
    let password = State::new("secret123".to_string());
    let mut confirm = ValidatedField::builder("Confirmar")
        .rule(Rule::equals(&password, "no coincide"))
        .build();
    confirm.set_force_show_error(true);
    assert_eq!(confirm.display_error(), Some("no coincide"));
}

/// The permissive confirmation rule judges a blank confirmation valid even
/// after a forced submit. Kept as written; hosts that need a strict check
/// use `Rule::equals`.
#[test]
fn test_forced_empty_confirmation_passes_permissive_rule() {
    let password = State::new("secret123".to_string());
    let valid = State::new(false);
    let mut confirm = ValidatedField::builder("Confirmar")
        .rule(Rule::equals_or_empty(&password, "no coincide"))
        .report_validity(&valid)
        .build();
    confirm.set_force_show_error(true);
    assert_eq!(confirm.display_error(), None);
    assert!(valid.get());

    confirm.set_value("secret");
    assert_eq!(confirm.display_error(), Some("no coincide"));
    assert!(!valid.get());
}

#[test]
fn test_submit_reveals_untouched_field_retroactively() {
    let (mut field, calls) = field_with("abc", false, false);
    assert_eq!(field.display_error(), None);

    field.set_force_show_error(true);
    assert!(!field.is_touched());
    assert_eq!(field.display_error(), Some("min 6 chars"));
    assert_eq!(*calls.lock().unwrap(), vec![false]);
}
