//! Six digit code entry.

use spofity_lib::SpofityClient;
use spofity_lib::api::{CODE_RESENT_MESSAGE, RESEND_FAILED_MESSAGE};
use spofity_lib::auth::AccessToken;
use spofity_lib::error::Error;
use spofity_lib::model::{CODE_LENGTH, VerificationCode, VerificationTarget};

use super::Route;
use crate::session::SessionStore;

pub const INCOMPLETE_CODE: &str = "Ingresa el código completo de 6 dígitos";
pub const VERIFY_CONNECTION_ERROR: &str = "Error de conexión. Verifica tu conexión a internet.";
pub const RESEND_CONNECTION_ERROR: &str = "Error de conexión";

/// Line shown under the code cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Error(String),
    Info(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Error(text) | Notice::Info(text) => text,
        }
    }
}

pub struct VerificationScreen {
    target: VerificationTarget,
    cells: [Option<char>; CODE_LENGTH],
    focus: usize,
    notice: Option<Notice>,
}

impl VerificationScreen {
    pub fn new(target: VerificationTarget) -> Self {
        Self {
            target,
            cells: [None; CODE_LENGTH],
            focus: 0,
            notice: None,
        }
    }

    pub fn target(&self) -> &VerificationTarget {
        &self.target
    }

    pub fn cells(&self) -> &[Option<char>; CODE_LENGTH] {
        &self.cells
    }

    /// Index of the focused cell.
    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Digits entered so far, in cell order.
    pub fn code(&self) -> String {
        self.cells.iter().flatten().collect()
    }

    /// Text typed into cell `index`.
    ///
    /// Empty text clears the cell. Anything other than a single ASCII digit
    /// is ignored. A digit fills the cell and moves focus to the next one.
    pub fn input(&mut self, index: usize, text: &str) {
        if index >= CODE_LENGTH {
            return;
        }
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (None, _) => self.cells[index] = None,
            (Some(c), None) if c.is_ascii_digit() => {
                self.cells[index] = Some(c);
                if index + 1 < CODE_LENGTH {
                    self.focus = index + 1;
                }
            }
            _ => return,
        }
        self.notice = None;
    }

    /// Backspace in cell `index`: on an empty cell, focus moves back.
    pub fn backspace(&mut self, index: usize) {
        if index > 0 && index < CODE_LENGTH && self.cells[index].is_none() {
            self.focus = index - 1;
        }
    }

    fn reset_cells(&mut self) {
        self.cells = [None; CODE_LENGTH];
        self.focus = 0;
    }

    /// The code to send, or `None` with a notice if cells are missing.
    pub fn prepare_verify(&mut self) -> Option<VerificationCode> {
        match VerificationCode::parse(&self.code()) {
            Some(code) => {
                self.notice = None;
                Some(code)
            }
            None => {
                self.notice = Some(Notice::Error(INCOMPLETE_CODE.to_string()));
                None
            }
        }
    }

    /// Applies the result of a verify call.
    ///
    /// A rejected code clears every cell and focuses the first one.
    pub async fn finish_verify(
        &mut self,
        result: Result<Option<AccessToken>, Error>,
        session: &SessionStore,
    ) -> Option<Route> {
        match result {
            Ok(token) => {
                if let Some(token) = token
                    && let Err(e) = session.save(&token).await
                {
                    self.notice = Some(Notice::Error(e.to_string()));
                    return None;
                }
                log::info!("account verified via {:?}", self.target.kind);
                Some(Route::Home)
            }
            Err(Error::Api(ref e)) if e.is_connection_error() => {
                self.notice = Some(Notice::Error(VERIFY_CONNECTION_ERROR.to_string()));
                None
            }
            Err(e) => {
                self.notice = Some(Notice::Error(e.user_message()));
                self.reset_cells();
                None
            }
        }
    }

    /// Applies the result of a resend call.
    pub fn finish_resend(&mut self, result: Result<(), Error>) {
        self.notice = Some(match result {
            Ok(()) => Notice::Info(CODE_RESENT_MESSAGE.to_string()),
            Err(Error::Api(ref e)) if e.is_connection_error() => {
                Notice::Error(RESEND_CONNECTION_ERROR.to_string())
            }
            Err(_) => Notice::Error(RESEND_FAILED_MESSAGE.to_string()),
        });
    }

    pub async fn verify(&mut self, client: &SpofityClient, session: &SessionStore) -> Option<Route> {
        let code = self.prepare_verify()?;
        let result = client.verify_code(&self.target, &code).await;
        self.finish_verify(result, session).await
    }

    pub async fn resend(&mut self, client: &SpofityClient) {
        self.notice = None;
        let result = client.resend_code(&self.target).await;
        self.finish_resend(result);
    }
}

#[cfg(test)]
mod tests {
    use spofity_lib::error::ApiError;
    use spofity_lib::model::VerificationKind;

    use super::*;
    use crate::settings::SettingsProvider;

    fn screen() -> VerificationScreen {
        VerificationScreen::new(VerificationTarget::new(VerificationKind::Email, "ana@example.com"))
    }

    fn type_code(screen: &mut VerificationScreen, code: &str) {
        for (i, c) in code.chars().enumerate() {
            screen.input(i, &c.to_string());
        }
    }

    #[test]
    fn test_digits_advance_focus() {
        let mut s = screen();
        s.input(0, "4");
        assert_eq!(s.focus(), 1);
        type_code(&mut s, "123456");
        assert_eq!(s.code(), "123456");
        assert_eq!(s.focus(), CODE_LENGTH - 1);
    }

    #[test]
    fn test_non_digits_ignored() {
        let mut s = screen();
        s.input(0, "a");
        s.input(0, "12");
        s.input(0, "٣");
        assert_eq!(s.cells()[0], None);
        assert_eq!(s.focus(), 0);
    }

    #[test]
    fn test_backspace_on_empty_cell_moves_back() {
        let mut s = screen();
        s.input(0, "1");
        s.backspace(1);
        assert_eq!(s.focus(), 0);

        s.input(0, "1");
        s.backspace(1);
        s.backspace(0);
        assert_eq!(s.focus(), 0);
    }

    #[test]
    fn test_incomplete_code_notice() {
        let mut s = screen();
        type_code(&mut s, "123");
        assert!(s.prepare_verify().is_none());
        assert_eq!(s.notice().map(Notice::text), Some(INCOMPLETE_CODE));

        s.input(3, "4");
        assert_eq!(s.notice(), None);
    }

    #[tokio::test]
    async fn test_rejected_code_clears_cells() {
        let session = SessionStore::new(SettingsProvider::in_memory());
        let mut s = screen();
        type_code(&mut s, "123456");
        let route = s
            .finish_verify(
                Err(Error::Api(ApiError::http(400, "Código incorrecto. Intenta nuevamente."))),
                &session,
            )
            .await;
        assert_eq!(route, None);
        assert_eq!(s.code(), "");
        assert_eq!(s.focus(), 0);
        assert_eq!(
            s.notice(),
            Some(&Notice::Error("Código incorrecto. Intenta nuevamente.".into()))
        );
    }

    #[tokio::test]
    async fn test_accepted_code_goes_home() {
        let session = SessionStore::new(SettingsProvider::in_memory());
        let mut s = screen();
        type_code(&mut s, "123456");
        let route = s
            .finish_verify(Ok(Some(AccessToken::new("h.e30.s"))), &session)
            .await;
        assert_eq!(route, Some(Route::Home));
        assert!(session.token().await.unwrap().is_some());
    }

    #[test]
    fn test_resend_messages() {
        let mut s = screen();
        s.finish_resend(Ok(()));
        assert_eq!(s.notice(), Some(&Notice::Info(CODE_RESENT_MESSAGE.into())));

        s.finish_resend(Err(Error::Api(ApiError::http(500, "boom"))));
        assert_eq!(
            s.notice(),
            Some(&Notice::Error(RESEND_FAILED_MESSAGE.into()))
        );

        s.finish_resend(Err(Error::Api(ApiError::Timeout(std::time::Duration::from_secs(1)))));
        assert_eq!(
            s.notice(),
            Some(&Notice::Error(RESEND_CONNECTION_ERROR.into()))
        );
    }
}
