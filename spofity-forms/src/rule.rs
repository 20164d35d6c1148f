//! Validation rules: a predicate paired with the message shown when it fails.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::state::State;

/// Type alias for the predicate closure of a rule.
type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A single validation rule.
///
/// The predicate returns `true` when the value is acceptable. When it
/// returns `false`, `message` is what the user gets to see.
///
/// # Example
///
/// ```
/// use spofity_forms::Rule;
///
/// let rule = Rule::min_length(6, "Mínimo 6 caracteres");
/// assert!(rule.test("abcdef"));
/// assert!(!rule.test("abc"));
/// assert_eq!(rule.message(), "Mínimo 6 caracteres");
/// ```
#[derive(Clone)]
pub struct Rule {
    predicate: Predicate,
    message: String,
}

impl Rule {
    /// Create a rule from an arbitrary predicate.
    pub fn new<F>(predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            message: message.into(),
        }
    }

    /// Run the predicate against `value`.
    pub fn test(&self, value: &str) -> bool {
        (self.predicate)(value)
    }

    /// The message surfaced when this rule fails.
    pub fn message(&self) -> &str {
        &self.message
    }

    // -------------------------------------------------------------------------
    // Built-in rules
    // -------------------------------------------------------------------------

    /// Require the value to contain something other than whitespace.
    pub fn required(message: impl Into<String>) -> Self {
        Self::new(|v| !v.trim().is_empty(), message)
    }

    /// Require at least one character, whitespace included.
    pub fn non_empty(message: impl Into<String>) -> Self {
        Self::new(|v| !v.is_empty(), message)
    }

    /// Require minimum length (in characters).
    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Self::new(move |v| v.chars().count() >= min, message)
    }

    /// Require maximum length (in characters).
    pub fn max_length(max: usize, message: impl Into<String>) -> Self {
        Self::new(move |v| v.chars().count() <= max, message)
    }

    /// Require the value to match a regex pattern.
    ///
    /// Fails with the regex compile error instead of panicking.
    pub fn pattern(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        let re = Regex::new(pattern)?;
        Ok(Self::new(move |v| re.is_match(v), message))
    }

    /// Require the value to match an already compiled regex.
    pub fn regex(re: Regex, message: impl Into<String>) -> Self {
        Self::new(move |v| re.is_match(v), message)
    }

    /// Require a valid email address.
    ///
    /// Empty is accepted; pair with [`Rule::required`] for mandatory fields.
    pub fn email(message: impl Into<String>) -> Self {
        Self::new(
            |v| v.is_empty() || email_address::EmailAddress::is_valid(v),
            message,
        )
    }

    /// Require the value to equal the live content of another field.
    ///
    /// The other value is read every time the rule runs, not captured once.
    pub fn equals(other: &State<String>, message: impl Into<String>) -> Self {
        let other = other.clone();
        Self::new(move |v| other.with(|o| v == o), message)
    }

    /// Like [`Rule::equals`], but an empty value passes.
    ///
    /// Confirmation fields built this way stay silent until the user types
    /// something; a blank confirmation is judged valid, even on submit.
    pub fn equals_or_empty(other: &State<String>, message: impl Into<String>) -> Self {
        let other = other.clone();
        Self::new(move |v| v.is_empty() || other.with(|o| v == o), message)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// An ordered list of rules.
///
/// Evaluation stops at the first failing rule, so declaration order decides
/// which message wins when several rules fail at once.
#[derive(Debug, Clone, Default)]
pub struct Rules {
    rules: Vec<Rule>,
}

impl Rules {
    /// Create an empty rule list. An empty list accepts every value.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule, builder style.
    pub fn with(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Returns `true` if no rules were declared.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of declared rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Iterate the rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Find the first rule that rejects `value`.
    ///
    /// Rules after the first failure are not run.
    pub fn first_failure(&self, value: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| !rule.test(value))
    }
}

impl From<Vec<Rule>> for Rules {
    fn from(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

impl FromIterator<Rule> for Rules {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
