//! Login, verification and sign-up calls

use reqwest::Method;

use super::response::interpret_empty;
use super::response::interpret_login;
use super::response::interpret_resend;
use super::response::interpret_verify;
use super::response::REGISTER_FAILED_MESSAGE;
use crate::SpofityClient;
use crate::auth::AccessToken;
use crate::error::Error;
use crate::model::Credentials;
use crate::model::LoginOutcome;
use crate::model::Registration;
use crate::model::VerificationCode;
use crate::model::VerificationTarget;

impl SpofityClient {
    /// Logs in with an alias, email or phone and a password.
    ///
    /// An unverified account is not an error: it comes back as
    /// [`LoginOutcome::VerificationRequired`].
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome, Error> {
        let response = self
            .send_json(Method::POST, credentials.mode.path(), Some(credentials), false)
            .await?;
        let outcome = interpret_login(&response, credentials)?;
        log::info!("login via {:?}: {}", credentials.mode, describe(&outcome));
        Ok(outcome)
    }

    /// Submits a verification code.
    pub async fn verify_code(
        &self,
        target: &VerificationTarget,
        code: &VerificationCode,
    ) -> Result<Option<AccessToken>, Error> {
        let body = target.with_code(code);
        let response = self
            .send_json(Method::POST, "/api/auth/verify-code", Some(&body), false)
            .await?;
        Ok(interpret_verify(&response)?)
    }

    /// Asks the backend to send a new code.
    pub async fn resend_code(&self, target: &VerificationTarget) -> Result<(), Error> {
        let mut body = serde_json::Map::new();
        body.insert(
            target.kind.contact_key().to_string(),
            serde_json::Value::String(target.contact.clone()),
        );
        let response = self
            .send_json(Method::POST, "/api/auth/resend-code", Some(&body), false)
            .await?;
        Ok(interpret_resend(&response)?)
    }

    /// Creates an account from an email and/or phone number.
    pub async fn register(&self, registration: &Registration) -> Result<(), Error> {
        let response = self
            .send_json(Method::POST, "/api/auth/register", Some(registration), false)
            .await?;
        Ok(interpret_empty(&response, REGISTER_FAILED_MESSAGE)?)
    }
}

fn describe(outcome: &LoginOutcome) -> &'static str {
    match outcome {
        LoginOutcome::Authenticated(Some(_)) => "authenticated",
        LoginOutcome::Authenticated(None) => "authenticated without token",
        LoginOutcome::VerificationRequired(_) => "verification required",
    }
}
