//! Login by alias, email or phone.

use spofity_forms::{KeyboardKind, State, ValidatedField};
use spofity_lib::SpofityClient;
use spofity_lib::error::Error;
use spofity_lib::model::{Credentials, LoginMode, LoginOutcome};

use super::Route;
use super::rules;
use crate::session::SessionStore;

/// One identifier input plus its value cell and validity flag.
struct IdentifierInput {
    value: State<String>,
    valid: State<bool>,
    field: ValidatedField,
}

impl IdentifierInput {
    fn new(mode: LoginMode) -> Self {
        let value = State::new(String::new());
        let valid = State::new(false);
        let builder = ValidatedField::builder(mode.label())
            .controlled(&value)
            .report_validity(&valid);
        let field = match mode {
            LoginMode::Alias => builder
                .placeholder("Introduce tu usuario")
                .rules(rules::alias()),
            LoginMode::Email => builder
                .placeholder("correo@ejemplo.com")
                .keyboard(KeyboardKind::Email)
                .rules(rules::email()),
            LoginMode::Phone => builder
                .placeholder("+56912345678")
                .keyboard(KeyboardKind::Phone)
                .rules(rules::phone()),
        }
        .build();
        Self {
            value,
            valid,
            field,
        }
    }

    fn ready(&self) -> bool {
        self.valid.get() && self.value.with(|v| !v.trim().is_empty())
    }
}

/// Login screen.
///
/// Only the input of the active mode is shown, but all three keep their
/// values so switching back and forth loses nothing.
pub struct LoginScreen {
    mode: LoginMode,
    alias: IdentifierInput,
    email: IdentifierInput,
    phone: IdentifierInput,
    password: State<String>,
    password_valid: State<bool>,
    password_field: ValidatedField,
    attempted_submit: bool,
    backend_error: Option<String>,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginScreen {
    pub fn new() -> Self {
        let password = State::new(String::new());
        let password_valid = State::new(false);
        let password_field = ValidatedField::builder("Contraseña")
            .controlled(&password)
            .placeholder("Introduce tu contraseña")
            .secure()
            .rules(rules::password())
            .report_validity(&password_valid)
            .build();

        Self {
            mode: LoginMode::Alias,
            alias: IdentifierInput::new(LoginMode::Alias),
            email: IdentifierInput::new(LoginMode::Email),
            phone: IdentifierInput::new(LoginMode::Phone),
            password,
            password_valid,
            password_field,
            attempted_submit: false,
            backend_error: None,
        }
    }

    pub fn mode(&self) -> LoginMode {
        self.mode
    }

    /// Switches the identifier input.
    pub fn set_mode(&mut self, mode: LoginMode) {
        if self.mode != mode {
            log::debug!("login mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
            self.backend_error = None;
        }
    }

    fn input(&self) -> &IdentifierInput {
        match self.mode {
            LoginMode::Alias => &self.alias,
            LoginMode::Email => &self.email,
            LoginMode::Phone => &self.phone,
        }
    }

    fn input_mut(&mut self) -> &mut IdentifierInput {
        match self.mode {
            LoginMode::Alias => &mut self.alias,
            LoginMode::Email => &mut self.email,
            LoginMode::Phone => &mut self.phone,
        }
    }

    /// The identifier input of the active mode.
    pub fn identifier_field(&self) -> &ValidatedField {
        &self.input().field
    }

    pub fn identifier_field_mut(&mut self) -> &mut ValidatedField {
        &mut self.input_mut().field
    }

    pub fn password_field(&self) -> &ValidatedField {
        &self.password_field
    }

    pub fn password_field_mut(&mut self) -> &mut ValidatedField {
        &mut self.password_field
    }

    pub fn attempted_submit(&self) -> bool {
        self.attempted_submit
    }

    /// Message from the last failed backend call.
    pub fn backend_error(&self) -> Option<&str> {
        self.backend_error.as_deref()
    }

    /// The "create account" link. Drops the stale backend error.
    pub fn go_to_register(&mut self) -> Route {
        self.backend_error = None;
        Route::Register
    }

    /// Marks the submit attempt and returns the credentials if the active
    /// identifier and the password are both valid and non-blank.
    ///
    /// Every field is forced to show its error, including the inputs of
    /// the inactive modes, so switching mode afterwards shows errors too.
    pub fn prepare_submit(&mut self) -> Option<Credentials> {
        self.attempted_submit = true;
        self.backend_error = None;

        for input in [&mut self.alias, &mut self.email, &mut self.phone] {
            input.field.set_force_show_error(true);
        }
        self.password_field.set_force_show_error(true);

        let password_ready =
            self.password_valid.get() && self.password.with(|p| !p.trim().is_empty());
        if !(self.input().ready() && password_ready) {
            log::debug!("login blocked by client-side validation");
            return None;
        }

        Some(Credentials::new(
            self.mode,
            self.input().value.get(),
            self.password.get(),
        ))
    }

    /// Applies the result of a login call.
    ///
    /// A returned token is stored in `session` before going home.
    pub async fn finish(
        &mut self,
        result: Result<LoginOutcome, Error>,
        session: &SessionStore,
    ) -> Option<Route> {
        match result {
            Ok(LoginOutcome::Authenticated(token)) => {
                if let Some(token) = token
                    && let Err(e) = session.save(&token).await
                {
                    log::error!("could not store session: {}", e);
                    self.backend_error = Some(e.to_string());
                    return None;
                }
                Some(Route::Home)
            }
            Ok(LoginOutcome::VerificationRequired(target)) => Some(Route::Verification(target)),
            Err(e) => {
                log::warn!("login failed: {}", e);
                self.backend_error = Some(e.user_message());
                None
            }
        }
    }

    /// Validates, calls the backend and applies the result.
    pub async fn submit(&mut self, client: &SpofityClient, session: &SessionStore) -> Option<Route> {
        let credentials = self.prepare_submit()?;
        let result = client.login(&credentials).await;
        self.finish(result, session).await
    }
}
