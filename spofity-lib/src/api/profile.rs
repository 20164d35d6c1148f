//! Calls that need a session token

use reqwest::Method;
use serde::Serialize;

use super::response::CHANGE_PASSWORD_FAILED_MESSAGE;
use super::response::interpret_empty;
use super::response::interpret_update_profile;
use crate::SpofityClient;
use crate::auth::AccessToken;
use crate::error::Error;
use crate::model::ProfileChanges;

#[derive(Serialize)]
struct ChangePasswordRequest<'a> {
    #[serde(rename = "contraseniaActual")]
    current: &'a str,
    #[serde(rename = "nuevaContrasenia")]
    new: &'a str,
}

impl SpofityClient {
    /// Sends the changed profile fields.
    ///
    /// Returns the re-issued token when the backend sends one.
    pub async fn update_profile(
        &self,
        changes: &ProfileChanges,
    ) -> Result<Option<AccessToken>, Error> {
        let response = self
            .send_json(Method::PUT, "/api/users/update-profile", Some(changes), true)
            .await?;
        Ok(interpret_update_profile(&response)?)
    }

    /// Changes the password of the logged in user.
    pub async fn change_password(&self, current: &str, new: &str) -> Result<(), Error> {
        let body = ChangePasswordRequest { current, new };
        let response = self
            .send_json(Method::PUT, "/api/users/change-password", Some(&body), true)
            .await?;
        Ok(interpret_empty(&response, CHANGE_PASSWORD_FAILED_MESSAGE)?)
    }
}
