//! Sign-up with email and/or phone.

use spofity_forms::{KeyboardKind, State, ValidatedField};
use spofity_lib::SpofityClient;
use spofity_lib::error::Error;
use spofity_lib::model::Registration;

use super::Route;
use super::rules;

/// Shown when both contact fields are blank on submit.
pub const CONTACT_REQUIRED: &str = "Ingresa un email o un número de teléfono";

pub struct RegisterScreen {
    email: State<String>,
    phone: State<String>,
    email_valid: State<bool>,
    phone_valid: State<bool>,
    email_field: ValidatedField,
    phone_field: ValidatedField,
    attempted_submit: bool,
    backend_error: Option<String>,
}

impl Default for RegisterScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterScreen {
    pub fn new() -> Self {
        let email = State::new(String::new());
        let phone = State::new(String::new());
        let email_valid = State::new(true);
        let phone_valid = State::new(true);

        // both optional on their own; at least one is checked on submit
        let email_field = ValidatedField::builder("Dirección de email")
            .controlled(&email)
            .placeholder("correo@ejemplo.com")
            .keyboard(KeyboardKind::Email)
            .rule(rules::optional(rules::email_format()))
            .report_validity(&email_valid)
            .build();
        let phone_field = ValidatedField::builder("Usar numero de teléfono")
            .controlled(&phone)
            .placeholder("+56912345678")
            .keyboard(KeyboardKind::Phone)
            .rule(rules::optional(rules::phone_format()))
            .report_validity(&phone_valid)
            .build();

        Self {
            email,
            phone,
            email_valid,
            phone_valid,
            email_field,
            phone_field,
            attempted_submit: false,
            backend_error: None,
        }
    }

    pub fn email_field(&self) -> &ValidatedField {
        &self.email_field
    }

    pub fn email_field_mut(&mut self) -> &mut ValidatedField {
        &mut self.email_field
    }

    pub fn phone_field(&self) -> &ValidatedField {
        &self.phone_field
    }

    pub fn phone_field_mut(&mut self) -> &mut ValidatedField {
        &mut self.phone_field
    }

    pub fn attempted_submit(&self) -> bool {
        self.attempted_submit
    }

    pub fn backend_error(&self) -> Option<&str> {
        self.backend_error.as_deref()
    }

    /// The "already have an account" link.
    pub fn go_to_login(&mut self) -> Route {
        self.backend_error = None;
        Route::Login
    }

    /// Returns the registration if both fields are well formed and at
    /// least one is filled in.
    pub fn prepare_submit(&mut self) -> Option<Registration> {
        self.attempted_submit = true;
        self.backend_error = None;
        self.email_field.set_force_show_error(true);
        self.phone_field.set_force_show_error(true);

        if !(self.email_valid.get() && self.phone_valid.get()) {
            return None;
        }

        let registration = Registration::from_input(&self.email.get(), &self.phone.get());
        if registration.is_none() {
            self.backend_error = Some(CONTACT_REQUIRED.to_string());
        }
        registration
    }

    /// Applies the result of a sign-up call.
    pub fn finish(&mut self, registration: &Registration, result: Result<(), Error>) -> Option<Route> {
        match result {
            Ok(()) => registration.verification_target().map(Route::Verification),
            Err(e) => {
                log::warn!("registration failed: {}", e);
                self.backend_error = Some(e.user_message());
                None
            }
        }
    }

    pub async fn submit(&mut self, client: &SpofityClient) -> Option<Route> {
        let registration = self.prepare_submit()?;
        let result = client.register(&registration).await;
        self.finish(&registration, result)
    }
}
