//! Interpretation of backend responses.
//!
//! Everything here is a pure function of status code and body text, so the
//! rules can be tested without a server.

use serde_json::Map;
use serde_json::Value;

use crate::auth::AccessToken;
use crate::error::ApiError;
use crate::error::BackendFieldError;
use crate::model::Credentials;
use crate::model::LoginOutcome;

/// Fallback when a failed login carries no usable message.
pub const LOGIN_FAILED_MESSAGE: &str = "Error al iniciar sesión. Verifica tus credenciales.";
/// Fallback when a code is rejected without a message.
pub const WRONG_CODE_MESSAGE: &str = "Código incorrecto. Intenta nuevamente.";
/// Reported after a successful resend.
pub const CODE_RESENT_MESSAGE: &str = "Código reenviado exitosamente";
/// Reported after a failed resend.
pub const RESEND_FAILED_MESSAGE: &str = "No se pudo reenviar el código";
/// Fallback for failed sign-ups.
pub const REGISTER_FAILED_MESSAGE: &str = "No se pudo completar el registro.";
/// Fallback for failed profile updates.
pub const UPDATE_PROFILE_FAILED_MESSAGE: &str = "No se pudo actualizar el perfil.";
/// Fallback for failed password changes.
pub const CHANGE_PASSWORD_FAILED_MESSAGE: &str = "No se pudo cambiar la contraseña.";

const UNKNOWN_ERROR_MESSAGE: &str = "Error desconocido";

/// Status code and body text of a backend response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// The fields the backend may put in a JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseBody {
    pub token: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
    pub errors: Option<Vec<BackendFieldError>>,
}

impl ResponseBody {
    fn from_fields(fields: &Map<String, Value>) -> Self {
        let text = |name: &str| fields.get(name).and_then(Value::as_str).map(str::to_string);
        let errors = fields.get("errors").and_then(Value::as_array).map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value::<BackendFieldError>(item.clone()).ok())
                .collect()
        });

        Self {
            token: text("token"),
            message: text("message"),
            error: text("error"),
            errors,
        }
    }
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parses the body leniently.
    ///
    /// Each field is picked on its own: a field of the wrong type is
    /// ignored, never the whole body. `errors` counts only as an array.
    /// A body that is not a JSON object becomes `{ message: <text> }`, or
    /// `{ message: "Error desconocido" }` when blank.
    pub fn parsed(&self) -> ResponseBody {
        match serde_json::from_str::<Value>(&self.body) {
            Ok(Value::Object(fields)) => ResponseBody::from_fields(&fields),
            _ => {
                let text = self.body.trim();
                ResponseBody {
                    message: Some(if text.is_empty() {
                        UNKNOWN_ERROR_MESSAGE.to_string()
                    } else {
                        text.to_string()
                    }),
                    ..Default::default()
                }
            }
        }
    }

    /// Builds the error for a failed call.
    ///
    /// Field errors win over `message`, which wins over `error`, which wins
    /// over `fallback`.
    pub fn failure(&self, fallback: &str) -> ApiError {
        let body = self.parsed();
        match body {
            ResponseBody {
                errors: Some(errors),
                ..
            } if !errors.is_empty() => ApiError::http_with_fields(self.status, errors),
            ResponseBody {
                message: Some(message),
                ..
            } if !message.is_empty() => ApiError::http(self.status, message),
            ResponseBody {
                error: Some(error), ..
            } if !error.is_empty() => ApiError::http(self.status, error),
            _ => ApiError::http(self.status, fallback),
        }
    }

    /// Token from a successful body, if the backend sent one.
    fn token(&self) -> Option<AccessToken> {
        self.parsed()
            .token
            .filter(|t| !t.is_empty())
            .map(AccessToken::from_jwt)
    }
}

/// Returns `true` if the backend is telling us the account is unverified.
///
/// That is a 403, or a message mentioning verification.
pub fn needs_verification(response: &RawResponse) -> bool {
    if response.status == 403 {
        return true;
    }
    response.parsed().message.is_some_and(|message| {
        let message = message.to_lowercase();
        message.contains("no verificad") || message.contains("verificación")
    })
}

/// Interprets the answer to a login request.
pub fn interpret_login(
    response: &RawResponse,
    credentials: &Credentials,
) -> Result<LoginOutcome, ApiError> {
    if response.is_success() {
        return Ok(LoginOutcome::Authenticated(response.token()));
    }
    if needs_verification(response) {
        return Ok(LoginOutcome::VerificationRequired(
            credentials.verification_target(),
        ));
    }
    Err(response.failure(LOGIN_FAILED_MESSAGE))
}

/// Interprets the answer to a verify-code request.
pub fn interpret_verify(response: &RawResponse) -> Result<Option<AccessToken>, ApiError> {
    if response.is_success() {
        Ok(response.token())
    } else {
        Err(response.failure(WRONG_CODE_MESSAGE))
    }
}

/// Interprets the answer to a resend-code request.
///
/// The body is ignored; the user only ever sees the fixed message.
pub fn interpret_resend(response: &RawResponse) -> Result<(), ApiError> {
    if response.is_success() {
        Ok(())
    } else {
        Err(ApiError::http(response.status, RESEND_FAILED_MESSAGE))
    }
}

/// Interprets a response that carries no payload of interest.
pub fn interpret_empty(response: &RawResponse, fallback: &str) -> Result<(), ApiError> {
    if response.is_success() {
        Ok(())
    } else {
        Err(response.failure(fallback))
    }
}

/// Interprets the answer to a profile update. The backend may re-issue the token.
pub fn interpret_update_profile(response: &RawResponse) -> Result<Option<AccessToken>, ApiError> {
    if response.is_success() {
        Ok(response.token())
    } else {
        Err(response.failure(UPDATE_PROFILE_FAILED_MESSAGE))
    }
}
