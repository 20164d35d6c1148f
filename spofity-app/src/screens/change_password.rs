//! Change password form.

use spofity_forms::{Form, Rule, State, ValidatedField};
use spofity_lib::SpofityClient;
use spofity_lib::error::Error;

use super::Route;
use super::rules::PASSWORD_TOO_SHORT;

pub const CURRENT_REQUIRED: &str = "Requerida";
pub const MISMATCH: &str = "No coincide";
pub const PASSWORD_CHANGED: &str = "Contraseña actualizada";

const MIN_LENGTH: usize = 6;

pub struct ChangePasswordScreen {
    current: State<String>,
    new: State<String>,
    confirm: State<String>,
    form: Form,
    backend_error: Option<String>,
    success: Option<String>,
}

impl Default for ChangePasswordScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangePasswordScreen {
    pub fn new() -> Self {
        let current = State::new(String::new());
        let new = State::new(String::new());
        let confirm = State::new(String::new());

        let target = new.clone();
        let form = Form::new()
            .field(
                "current",
                ValidatedField::builder("Contraseña actual")
                    .controlled(&current)
                    .secure()
                    .rule(Rule::non_empty(CURRENT_REQUIRED))
                    .build(),
            )
            .field(
                "new",
                ValidatedField::builder("Nueva contraseña")
                    .controlled(&new)
                    .secure()
                    .rule(Rule::min_length(MIN_LENGTH, PASSWORD_TOO_SHORT))
                    .build(),
            )
            .field(
                "confirm",
                ValidatedField::builder("Confirmar contraseña")
                    .controlled(&confirm)
                    .secure()
                    .rule(Rule::new(
                        move |v| v.chars().count() >= MIN_LENGTH && target.with(|n| v == n),
                        MISMATCH,
                    ))
                    .build(),
            );

        Self {
            current,
            new,
            confirm,
            form,
            backend_error: None,
            success: None,
        }
    }

    /// Field by name: `current`, `new` or `confirm`.
    pub fn field(&self, name: &str) -> Option<&ValidatedField> {
        self.form.get(name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut ValidatedField> {
        self.form.get_mut(name)
    }

    pub fn attempted_submit(&self) -> bool {
        self.form.attempted()
    }

    pub fn backend_error(&self) -> Option<&str> {
        self.backend_error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    /// Re-derives validity straight from the three values, ignoring what
    /// the fields last reported.
    fn values_ok(&self) -> bool {
        let new = self.new.get();
        self.current.with(|c| !c.is_empty())
            && new.chars().count() >= MIN_LENGTH
            && self.confirm.with(|c| *c == new)
    }

    /// Reveals every error and returns `(current, new)` when the form is
    /// good to send.
    pub fn prepare_submit(&mut self) -> Option<(String, String)> {
        self.backend_error = None;
        self.success = None;
        let result = self.form.attempt_submit();
        if result.is_invalid() || !self.values_ok() {
            return None;
        }
        Some((self.current.get(), self.new.get()))
    }

    pub fn finish(&mut self, result: Result<(), Error>) -> Option<Route> {
        match result {
            Ok(()) => {
                log::info!("password changed");
                self.success = Some(PASSWORD_CHANGED.to_string());
                Some(Route::Back)
            }
            Err(e) => {
                log::warn!("password change failed: {}", e);
                self.backend_error = Some(e.user_message());
                None
            }
        }
    }

    pub async fn submit(&mut self, client: &SpofityClient) -> Option<Route> {
        let (current, new) = self.prepare_submit()?;
        let result = client.change_password(&current, &new).await;
        self.finish(result)
    }
}

#[cfg(test)]
mod tests {
    use spofity_lib::error::AuthError;

    use super::*;

    fn fill(screen: &mut ChangePasswordScreen, current: &str, new: &str, confirm: &str) {
        screen.field_mut("current").unwrap().set_value(current);
        screen.field_mut("new").unwrap().set_value(new);
        screen.field_mut("confirm").unwrap().set_value(confirm);
    }

    fn shown(screen: &ChangePasswordScreen, name: &str) -> Option<String> {
        screen
            .field(name)
            .and_then(|f| f.display_error())
            .map(str::to_string)
    }

    #[test]
    fn test_empty_submit_reveals_all() {
        let mut screen = ChangePasswordScreen::new();
        assert!(screen.prepare_submit().is_none());
        assert_eq!(shown(&screen, "current").as_deref(), Some(CURRENT_REQUIRED));
        assert_eq!(shown(&screen, "new").as_deref(), Some(PASSWORD_TOO_SHORT));
        assert_eq!(shown(&screen, "confirm").as_deref(), Some(MISMATCH));
    }

    #[test]
    fn test_whitespace_current_password_counts() {
        let mut screen = ChangePasswordScreen::new();
        fill(&mut screen, " ", "abcdef", "abcdef");
        assert!(screen.prepare_submit().is_some());
    }

    #[test]
    fn test_confirm_picks_up_later_new_password_on_resubmit() {
        let mut screen = ChangePasswordScreen::new();
        fill(&mut screen, "old-pass", "abcdef", "abcdef");
        screen.field_mut("confirm").unwrap().mark_touched();
        assert_eq!(shown(&screen, "confirm"), None);

        // the confirm field is not told about this change
        screen.field_mut("new").unwrap().set_value("abcdefg");
        assert_eq!(shown(&screen, "confirm"), None);

        assert!(screen.prepare_submit().is_none());
        assert_eq!(shown(&screen, "confirm").as_deref(), Some(MISMATCH));
    }

    #[test]
    fn test_valid_submit() {
        let mut screen = ChangePasswordScreen::new();
        fill(&mut screen, "old-pass", "new-pass", "new-pass");
        assert_eq!(
            screen.prepare_submit(),
            Some(("old-pass".to_string(), "new-pass".to_string()))
        );
        assert!(screen.attempted_submit());
    }

    #[test]
    fn test_finish() {
        let mut screen = ChangePasswordScreen::new();
        assert_eq!(screen.finish(Ok(())), Some(Route::Back));
        assert_eq!(screen.success(), Some(PASSWORD_CHANGED));

        assert_eq!(
            screen.finish(Err(Error::Auth(AuthError::MissingSession))),
            None
        );
        assert_eq!(
            screen.backend_error(),
            Some("No se encontró un token de sesión.")
        );
    }
}
