//! The validated field controller.
//!
//! A [`ValidatedField`] owns one text field's validation state and decides
//! when its error may be shown. It is an explicit state machine: the three
//! inputs (`set_value`, `mark_touched`, `set_force_show_error`) each emit a
//! [`FieldEvent`], and every event runs the same [`ValidatedField::revalidate`]
//! pass.

use std::fmt;

use crate::options::{InputOptions, KeyboardKind};
use crate::rule::{Rule, Rules};
use crate::state::State;

type ChangeCallback = Box<dyn FnMut(&str) + Send>;
type ValidityCallback = Box<dyn FnMut(bool) + Send>;

/// Where the field's value lives. Decided once, at construction.
#[derive(Debug, Clone)]
pub enum ValueSource {
    /// The controller owns the value.
    Owned(String),
    /// The host screen owns the value; the controller mirrors it.
    Controlled(State<String>),
}

/// Events that drive a field's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// The effective value changed.
    ValueChanged,
    /// The field lost focus for the first time.
    TouchedSet,
    /// The host's force-show flag changed.
    ForceFlagChanged,
}

/// A text field with ordered validation rules and deferred error display.
///
/// Errors stay hidden until the field has been blurred once (`touched`) or
/// the host forces them (`force_show_error`, typically after a submit
/// attempt). While hidden, no rule runs.
///
/// # Example
///
/// ```
/// use spofity_forms::{Rule, ValidatedField};
///
/// let mut field = ValidatedField::builder("Contraseña")
///     .rule(Rule::required("La contraseña es requerida"))
///     .rule(Rule::min_length(6, "Mínimo 6 caracteres"))
///     .build();
///
/// field.set_value("abc");
/// assert_eq!(field.display_error(), None);
///
/// field.mark_touched();
/// assert_eq!(field.display_error(), Some("Mínimo 6 caracteres"));
/// ```
pub struct ValidatedField {
    label: String,
    rules: Rules,
    source: ValueSource,
    /// Controlled-cell version at the last time this field looked at it.
    seen_version: u64,
    touched: bool,
    force_show_error: bool,
    error_message: Option<String>,
    options: InputOptions,
    on_change: Option<ChangeCallback>,
    on_validation_change: Option<ValidityCallback>,
}

impl ValidatedField {
    /// Start building a field with the given label.
    pub fn builder(label: impl Into<String>) -> FieldBuilder {
        FieldBuilder::new(label)
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// The display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The rule list this field was built with.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Presentation options.
    pub fn options(&self) -> &InputOptions {
        &self.options
    }

    /// Returns `true` if the value is owned by the host.
    pub fn is_controlled(&self) -> bool {
        matches!(self.source, ValueSource::Controlled(_))
    }

    /// The current effective value.
    pub fn value(&self) -> String {
        match &self.source {
            ValueSource::Owned(value) => value.clone(),
            ValueSource::Controlled(state) => state.get(),
        }
    }

    /// Whether the field has lost focus at least once.
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Whether the host currently forces errors to show.
    pub fn force_show_error(&self) -> bool {
        self.force_show_error
    }

    /// `touched || force_show_error`.
    pub fn is_revealed(&self) -> bool {
        self.touched || self.force_show_error
    }

    /// The result of the most recent validation pass, shown or not.
    pub fn last_error(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// The error the presentation layer may render.
    ///
    /// `None` while the field is not revealed, whatever the last pass said.
    pub fn display_error(&self) -> Option<&str> {
        if self.is_revealed() {
            self.error_message.as_deref()
        } else {
            None
        }
    }

    /// Evaluate the rules against the current value without touching state
    /// or notifying anyone.
    ///
    /// Hosts use this to re-derive validity for rules that depend on other
    /// fields.
    pub fn passes_rules(&self) -> bool {
        let value = self.value();
        self.rules.first_failure(&value).is_none()
    }

    // -------------------------------------------------------------------------
    // Inputs
    // -------------------------------------------------------------------------

    /// Set the field's value.
    ///
    /// Controlled fields write through the host's cell. The raw text is
    /// always forwarded to the `on_change` callback, before validation.
    pub fn set_value(&mut self, new_value: impl Into<String>) {
        let new_value = new_value.into();
        let changed = match &mut self.source {
            ValueSource::Owned(value) => {
                let changed = *value != new_value;
                if changed {
                    value.clone_from(&new_value);
                }
                changed
            }
            ValueSource::Controlled(state) => {
                // A host write not yet synced counts as a change too.
                let pending = state.version() != self.seen_version;
                let differs = state.with(|current| *current != new_value);
                if differs {
                    state.set(new_value.clone());
                }
                self.seen_version = state.version();
                pending || differs
            }
        };

        if let Some(on_change) = self.on_change.as_mut() {
            on_change(&new_value);
        }

        if changed {
            self.handle(FieldEvent::ValueChanged);
        }
    }

    /// Record a focus loss. The first one sets `touched` for good.
    pub fn mark_touched(&mut self) {
        if !self.touched {
            self.touched = true;
            self.handle(FieldEvent::TouchedSet);
        }
    }

    /// Update the host's force-show flag.
    pub fn set_force_show_error(&mut self, force: bool) {
        if self.force_show_error != force {
            self.force_show_error = force;
            self.handle(FieldEvent::ForceFlagChanged);
        }
    }

    /// Pick up a value the host wrote straight into the controlled cell.
    ///
    /// Returns `true` if the value had moved and a change event fired.
    /// Owned fields never change behind the controller's back.
    pub fn sync(&mut self) -> bool {
        let ValueSource::Controlled(state) = &self.source else {
            return false;
        };
        let version = state.version();
        if version == self.seen_version {
            return false;
        }
        self.seen_version = version;
        self.handle(FieldEvent::ValueChanged);
        true
    }

    /// Flip the show/hide affordance of a secure field.
    pub fn toggle_secret_visibility(&mut self) {
        self.options.toggle_secret_visibility();
    }

    // -------------------------------------------------------------------------
    // State machine
    // -------------------------------------------------------------------------

    /// Feed an event to the state machine.
    ///
    /// Every event leads to the same revalidation pass. Returns the outcome
    /// reported to the host, or `None` if the field was not revealed.
    pub fn handle(&mut self, event: FieldEvent) -> Option<bool> {
        log::trace!("field '{}': {:?}", self.label, event);
        match event {
            FieldEvent::ValueChanged | FieldEvent::TouchedSet | FieldEvent::ForceFlagChanged => {
                self.revalidate()
            }
        }
    }

    /// Run the rules if the field is revealed.
    ///
    /// When revealed, sets the error to the first failing rule's message
    /// (or clears it) and calls `on_validation_change` exactly once, even if
    /// the outcome did not change. When not revealed, nothing runs and the
    /// previous result is kept.
    pub fn revalidate(&mut self) -> Option<bool> {
        if !self.is_revealed() {
            return None;
        }

        self.error_message = if self.rules.is_empty() {
            None
        } else {
            let value = self.value();
            self.rules
                .first_failure(&value)
                .map(|rule| rule.message().to_string())
        };

        let valid = self.error_message.is_none();
        log::trace!("field '{}' validated: valid={}", self.label, valid);

        if let Some(on_validation_change) = self.on_validation_change.as_mut() {
            on_validation_change(valid);
        }
        Some(valid)
    }
}

impl fmt::Debug for ValidatedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = if self.options.secure {
            "[REDACTED]".to_string()
        } else {
            self.value()
        };
        f.debug_struct("ValidatedField")
            .field("label", &self.label)
            .field("value", &value)
            .field("controlled", &self.is_controlled())
            .field("rules", &self.rules.len())
            .field("touched", &self.touched)
            .field("force_show_error", &self.force_show_error)
            .field("error_message", &self.error_message)
            .finish()
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for a [`ValidatedField`].
pub struct FieldBuilder {
    label: String,
    rules: Rules,
    source: ValueSource,
    force_show_error: bool,
    options: InputOptions,
    on_change: Option<ChangeCallback>,
    on_validation_change: Option<ValidityCallback>,
}

impl FieldBuilder {
    fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            rules: Rules::new(),
            source: ValueSource::Owned(String::new()),
            force_show_error: false,
            options: InputOptions::default(),
            on_change: None,
            on_validation_change: None,
        }
    }

    /// Append a validation rule. Order matters.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules = self.rules.with(rule);
        self
    }

    /// Replace the whole rule list.
    pub fn rules(mut self, rules: impl Into<Rules>) -> Self {
        self.rules = rules.into();
        self
    }

    /// Let the host own the value through a shared cell.
    pub fn controlled(mut self, value: &State<String>) -> Self {
        self.source = ValueSource::Controlled(value.clone());
        self
    }

    /// Start an uncontrolled field with some text already in it.
    pub fn initial_value(mut self, value: impl Into<String>) -> Self {
        self.source = ValueSource::Owned(value.into());
        self
    }

    /// Initial value of the host's force-show flag.
    pub fn force_show_error(mut self, force: bool) -> Self {
        self.force_show_error = force;
        self
    }

    /// Called with the raw text on every `set_value`.
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Called with the outcome of every revalidation pass.
    pub fn on_validation_change<F>(mut self, f: F) -> Self
    where
        F: FnMut(bool) + Send + 'static,
    {
        self.on_validation_change = Some(Box::new(f));
        self
    }

    /// Write every validation outcome into a host flag.
    pub fn report_validity(self, flag: &State<bool>) -> Self {
        let flag = flag.clone();
        self.on_validation_change(move |valid| flag.set(valid))
    }

    /// Set the placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.options.placeholder = Some(placeholder.into());
        self
    }

    /// Set the keyboard hint.
    pub fn keyboard(mut self, keyboard: KeyboardKind) -> Self {
        self.options.keyboard = keyboard;
        self
    }

    /// Mark the field as secret (masked, with a show/hide toggle).
    pub fn secure(mut self) -> Self {
        self.options.secure = true;
        self
    }

    /// Limit the number of characters the input accepts.
    pub fn max_length(mut self, max: usize) -> Self {
        self.options.max_length = Some(max);
        self
    }

    /// Ask the platform to auto-capitalize.
    pub fn auto_capitalize(mut self) -> Self {
        self.options.auto_capitalize = true;
        self
    }

    /// Build the field.
    ///
    /// A field built with `force_show_error(true)` validates right away, the
    /// same way a later false→true toggle would.
    pub fn build(self) -> ValidatedField {
        let seen_version = match &self.source {
            ValueSource::Controlled(state) => state.version(),
            ValueSource::Owned(_) => 0,
        };

        let mut field = ValidatedField {
            label: self.label,
            rules: self.rules,
            source: self.source,
            seen_version,
            touched: false,
            force_show_error: self.force_show_error,
            error_message: None,
            options: self.options,
            on_change: self.on_change,
            on_validation_change: self.on_validation_change,
        };

        if field.force_show_error {
            field.handle(FieldEvent::ForceFlagChanged);
        }
        field
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn password_rules() -> Rules {
        Rules::new()
            .with(Rule::required("required"))
            .with(Rule::min_length(6, "min 6 chars"))
    }

    fn recording_field(rules: Rules) -> (ValidatedField, Arc<Mutex<Vec<bool>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let field = ValidatedField::builder("field")
            .rules(rules)
            .on_validation_change(move |valid| sink.lock().unwrap().push(valid))
            .build();
        (field, calls)
    }

    #[test]
    fn test_hidden_until_revealed() {
        let (mut field, calls) = recording_field(password_rules());
        field.set_value("abc");
        assert_eq!(field.display_error(), None);
        assert_eq!(field.last_error(), None);
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_touch_reveals_and_validates() {
        let (mut field, calls) = recording_field(password_rules());
        field.set_value("abc");
        field.mark_touched();
        assert_eq!(field.display_error(), Some("min 6 chars"));
        assert_eq!(*calls.lock().unwrap(), vec![false]);
    }

    #[test]
    fn test_typing_after_touch_revalidates_each_change() {
        let (mut field, calls) = recording_field(password_rules());
        field.mark_touched();
        field.set_value("abcdef");
        field.set_value("");
        assert_eq!(field.display_error(), Some("required"));
        assert_eq!(*calls.lock().unwrap(), vec![false, true, false]);
    }

    #[test]
    fn test_touched_is_permanent() {
        let (mut field, calls) = recording_field(password_rules());
        field.mark_touched();
        field.mark_touched();
        field.set_force_show_error(true);
        field.set_force_show_error(false);
        assert!(field.is_touched());
        assert!(field.is_revealed());
        // one pass for the touch, one per force toggle
        assert_eq!(calls.lock().unwrap().len(), 3);
    }

    #[test]
    fn test_force_reveals_without_touch_or_change() {
        let (mut field, calls) = recording_field(password_rules());
        field.set_force_show_error(true);
        assert!(!field.is_touched());
        assert_eq!(field.display_error(), Some("required"));
        assert_eq!(*calls.lock().unwrap(), vec![false]);
    }

    #[test]
    fn test_unforcing_hides_but_keeps_last_result() {
        let mut field = ValidatedField::builder("f").rules(password_rules()).build();
        field.set_force_show_error(true);
        field.set_force_show_error(false);
        assert_eq!(field.display_error(), None);
        assert_eq!(field.last_error(), Some("required"));

        // not revealed: changing the value runs nothing
        field.set_value("abcdef");
        assert_eq!(field.last_error(), Some("required"));
        assert_eq!(field.display_error(), None);
    }

    #[test]
    fn test_revalidate_is_idempotent() {
        let (mut field, calls) = recording_field(password_rules());
        field.set_value("abc");
        field.mark_touched();
        assert_eq!(field.revalidate(), Some(false));
        assert_eq!(field.revalidate(), Some(false));
        assert_eq!(field.last_error(), Some("min 6 chars"));
        assert_eq!(*calls.lock().unwrap(), vec![false, false, false]);
    }

    #[test]
    fn test_revalidate_skipped_when_hidden() {
        let (mut field, calls) = recording_field(password_rules());
        assert_eq!(field.revalidate(), None);
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_zero_rules_always_valid() {
        let (mut field, calls) = recording_field(Rules::new());
        field.set_force_show_error(true);
        field.set_value("");
        field.mark_touched();
        assert_eq!(field.display_error(), None);
        assert!(calls.lock().unwrap().iter().all(|&valid| valid));
    }

    #[test]
    fn test_on_change_sees_raw_text_before_reveal() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut field = ValidatedField::builder("f")
            .rules(password_rules())
            .on_change(move |text| sink.lock().unwrap().push(text.to_string()))
            .build();

        field.set_value("a");
        field.set_value("a");
        field.set_value(" ab ");
        assert_eq!(*seen.lock().unwrap(), vec!["a", "a", " ab "]);
    }

    #[test]
    fn test_controlled_writes_through_host_cell() {
        let host = State::new(String::new());
        let mut field = ValidatedField::builder("f")
            .controlled(&host)
            .rules(password_rules())
            .build();

        assert!(field.is_controlled());
        field.set_value("abcdef");
        assert_eq!(host.get(), "abcdef");
        assert_eq!(field.value(), "abcdef");
        assert!(!field.sync());
    }

    #[test]
    fn test_sync_picks_up_host_writes() {
        let host = State::new(String::new());
        let flag = State::new(true);
        let mut field = ValidatedField::builder("f")
            .controlled(&host)
            .rules(password_rules())
            .report_validity(&flag)
            .build();
        field.mark_touched();
        assert!(!flag.get());

        host.set("abcdef".into());
        assert!(field.sync());
        assert!(flag.get());
        assert_eq!(field.display_error(), None);
        assert!(!field.sync());
    }

    #[test]
    fn test_set_value_flushes_unsynced_host_write() {
        let host = State::new(String::new());
        let mut field = ValidatedField::builder("f")
            .controlled(&host)
            .rule(Rule::required("required"))
            .build();
        field.mark_touched();
        assert_eq!(field.display_error(), Some("required"));

        host.set("abc".into());
        field.set_value("abc");
        assert_eq!(field.value(), "abc");
        assert_eq!(field.display_error(), None);
        assert!(!field.sync());
    }

    #[test]
    fn test_owned_field_never_syncs() {
        let mut field = ValidatedField::builder("f").initial_value("abc").build();
        assert!(!field.sync());
        assert_eq!(field.value(), "abc");
    }

    #[test]
    fn test_built_forced_validates_immediately() {
        let flag = State::new(true);
        let field = ValidatedField::builder("f")
            .rules(password_rules())
            .force_show_error(true)
            .report_validity(&flag)
            .build();
        assert_eq!(field.display_error(), Some("required"));
        assert!(!flag.get());
    }

    #[test]
    fn test_confirmation_goes_stale_when_other_field_changes() {
        let password = State::new("secret123".to_string());
        let mut confirm = ValidatedField::builder("confirm")
            .rule(Rule::equals(&password, "no coincide"))
            .build();
        confirm.mark_touched();
        confirm.set_value("secret123");
        assert_eq!(confirm.display_error(), None);

        password.set("other".into());
        assert_eq!(confirm.display_error(), None);
        assert!(!confirm.passes_rules());

        confirm.revalidate();
        assert_eq!(confirm.display_error(), Some("no coincide"));
    }

    #[test]
    fn test_debug_redacts_secure_values() {
        let mut field = ValidatedField::builder("pw").secure().build();
        field.set_value("hunter22");
        let debug = format!("{:?}", field);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("hunter22"));
    }
}
