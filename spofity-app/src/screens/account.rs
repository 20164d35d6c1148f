//! Account details from the session token, with inline editing.

use spofity_lib::SpofityClient;
use spofity_lib::auth::{AccessToken, TokenClaims, display_or_fallback};
use spofity_lib::error::Error;
use spofity_lib::model::{Profile, ProfileChanges};

use super::Route;
use crate::session::SessionStore;

#[derive(Debug, Default)]
pub struct AccountScreen {
    has_session: bool,
    claims: Option<TokenClaims>,
    editing: Option<Profile>,
    backend_error: Option<String>,
}

impl AccountScreen {
    /// Reads the stored token. A token that does not decode still counts as
    /// a session; its details just show as not provided.
    pub async fn load(session: &SessionStore) -> Self {
        let mut screen = Self::default();
        match session.token().await {
            Ok(Some(token)) => {
                screen.has_session = true;
                screen.claims = token.claims().ok();
            }
            Ok(None) => {}
            Err(e) => {
                log::error!("could not read session: {}", e);
                screen.backend_error = Some(e.to_string());
            }
        }
        screen
    }

    pub fn has_session(&self) -> bool {
        self.has_session
    }

    pub fn claims(&self) -> Option<&TokenClaims> {
        self.claims.as_ref()
    }

    pub fn backend_error(&self) -> Option<&str> {
        self.backend_error.as_deref()
    }

    fn claim(&self, pick: impl Fn(&TokenClaims) -> Option<&str>) -> &str {
        display_or_fallback(self.claims.as_ref().and_then(pick))
    }

    pub fn alias(&self) -> &str {
        self.claim(|c| c.alias.as_deref())
    }

    pub fn name(&self) -> &str {
        self.claim(|c| c.name.as_deref())
    }

    pub fn email(&self) -> &str {
        self.claim(|c| c.email.as_deref())
    }

    pub fn phone(&self) -> &str {
        self.claim(|c| c.phone.as_deref())
    }

    pub fn photo_url(&self) -> Option<&str> {
        self.claims
            .as_ref()
            .and_then(|c| c.photo_url.as_deref())
            .filter(|url| !url.is_empty())
    }

    /// The "Cambiar contraseña" button, shown with the read-only details.
    pub fn change_password(&self) -> Option<Route> {
        (!self.is_editing()).then_some(Route::ChangePassword)
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Copies the current details into editable values.
    pub fn enter_edit(&mut self) {
        let claims = self.claims.clone().unwrap_or_default();
        self.editing = Some(Profile::from_claims(&claims));
        self.backend_error = None;
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// The values being edited, if in edit mode.
    pub fn edited_mut(&mut self) -> Option<&mut Profile> {
        self.editing.as_mut()
    }

    /// Fields that differ from the loaded details.
    ///
    /// Returns `None` and leaves edit mode when nothing changed, or when
    /// there is no session to send with.
    pub fn prepare_save(&mut self) -> Option<ProfileChanges> {
        let edited = self.editing.as_ref()?;
        if !self.has_session {
            log::warn!("no session token, not saving profile");
            return None;
        }

        let original = self.claims.clone().unwrap_or_default();
        let changes = ProfileChanges::between(&original, edited);
        if changes.is_empty() {
            log::debug!("no profile changes to save");
            self.editing = None;
            return None;
        }
        Some(changes)
    }

    /// Applies the result of a profile update.
    pub async fn finish_save(
        &mut self,
        result: Result<Option<AccessToken>, Error>,
        session: &SessionStore,
    ) {
        match result {
            Ok(token) => {
                if let Some(edited) = self.editing.take() {
                    let claims = self.claims.get_or_insert_with(TokenClaims::default);
                    edited.apply_to(claims);
                }
                if let Some(token) = token
                    && let Err(e) = session.save(&token).await
                {
                    log::error!("could not store re-issued token: {}", e);
                }
                log::info!("profile updated");
            }
            Err(e) => {
                log::warn!("profile update failed: {}", e);
                self.backend_error = Some(e.user_message());
            }
        }
    }

    pub async fn save(&mut self, client: &SpofityClient, session: &SessionStore) {
        let Some(changes) = self.prepare_save() else {
            return;
        };
        let result = client.update_profile(&changes).await;
        self.finish_save(result, session).await;
    }
}
