//! Presentation options a field carries alongside its rules.

/// Keyboard layout hint passed through to the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyboardKind {
    #[default]
    Text,
    Email,
    Phone,
    Numeric,
}

/// Presentation options a field carries but never interprets.
///
/// Validation ignores everything in here. The only behaviour attached is
/// the show/hide toggle for secure entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputOptions {
    /// Text shown while the field is empty.
    pub placeholder: Option<String>,
    /// Keyboard hint.
    pub keyboard: KeyboardKind,
    /// Whether the field holds a secret (passwords).
    pub secure: bool,
    /// Whether a secure field is currently showing its content.
    pub revealed_secret: bool,
    /// Maximum number of characters the input accepts.
    pub max_length: Option<usize>,
    /// Whether the platform should auto-capitalize.
    pub auto_capitalize: bool,
}

impl InputOptions {
    /// Returns `true` if the content should be masked right now.
    pub fn masks_content(&self) -> bool {
        self.secure && !self.revealed_secret
    }

    /// Flip the show/hide affordance of a secure field.
    ///
    /// Does nothing for non-secure fields.
    pub fn toggle_secret_visibility(&mut self) {
        if self.secure {
            self.revealed_secret = !self.revealed_secret;
        }
    }

    /// Clamp `text` to `max_length`, if one is set.
    pub fn clamp<'a>(&self, text: &'a str) -> &'a str {
        match self.max_length {
            Some(max) => match text.char_indices().nth(max) {
                Some((cut, _)) => &text[..cut],
                None => text,
            },
            None => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_only_affects_secure_fields() {
        let mut plain = InputOptions::default();
        plain.toggle_secret_visibility();
        assert!(!plain.revealed_secret);
        assert!(!plain.masks_content());

        let mut secret = InputOptions {
            secure: true,
            ..Default::default()
        };
        assert!(secret.masks_content());
        secret.toggle_secret_visibility();
        assert!(!secret.masks_content());
        secret.toggle_secret_visibility();
        assert!(secret.masks_content());
    }

    #[test]
    fn test_clamp() {
        let opts = InputOptions {
            max_length: Some(3),
            ..Default::default()
        };
        assert_eq!(opts.clamp("abcdef"), "abc");
        assert_eq!(opts.clamp("añ"), "añ");
        assert_eq!(opts.clamp("ñññññ"), "ñññ");
        assert_eq!(InputOptions::default().clamp("abcdef"), "abcdef");
    }
}
