//! Line-based front end over the screens.

use std::io::Write;

use spofity_forms::ValidatedField;
use spofity_lib::SpofityClient;
use spofity_lib::model::{LoginMode, VerificationTarget};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::error::AppError;
use crate::screens::{AccountScreen, HomeScreen, LoginScreen, Route, VerificationScreen};
use crate::session::SessionStore;

const RESEND_COMMAND: &str = "reenviar";

/// Drives login, verification and the account summary over text lines.
pub struct Console<R, W> {
    input: R,
    output: W,
    client: SpofityClient,
    session: SessionStore,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(input: R, output: W, client: SpofityClient, session: SessionStore) -> Self {
        Self {
            input,
            output,
            client,
            session,
        }
    }

    /// Gives back the output, for inspection after a run.
    pub fn into_output(self) -> W {
        self.output
    }

    async fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn show_field_error(&mut self, field: &ValidatedField) -> Result<(), AppError> {
        if let Some(error) = field.display_error() {
            writeln!(self.output, "  {}: {}", field.label(), error)?;
        }
        Ok(())
    }

    /// Runs until the user reaches the account summary or input ends.
    pub async fn run(&mut self) -> Result<(), AppError> {
        if self.session.token().await?.is_some() {
            return self.summary().await;
        }

        let mut screen = LoginScreen::new();
        loop {
            let Some(mode) = self.read_line("Modo [alias/email/phone]").await? else {
                return Ok(());
            };
            screen.set_mode(parse_mode(&mode).unwrap_or(screen.mode()));

            let Some(identifier) = self.read_line(screen.mode().label()).await? else {
                return Ok(());
            };
            screen.identifier_field_mut().set_value(identifier);
            screen.identifier_field_mut().mark_touched();

            let Some(password) = self.read_line("Contraseña").await? else {
                return Ok(());
            };
            screen.password_field_mut().set_value(password);
            screen.password_field_mut().mark_touched();

            let route = screen.submit(&self.client, &self.session).await;

            let identifier_field = screen.identifier_field();
            let password_field = screen.password_field();
            self.show_field_error(identifier_field)?;
            self.show_field_error(password_field)?;
            if let Some(error) = screen.backend_error() {
                writeln!(self.output, "{}", error)?;
            }

            match route {
                Some(Route::Home) => return self.summary().await,
                Some(Route::Verification(target)) => {
                    if self.verify(target).await? {
                        return self.summary().await;
                    }
                    return Ok(());
                }
                _ => continue,
            }
        }
    }

    /// Returns `true` once the code is accepted, `false` if input ends.
    async fn verify(&mut self, target: VerificationTarget) -> Result<bool, AppError> {
        writeln!(
            self.output,
            "Cuenta sin verificar. Ingresa el código enviado a {} (o '{}').",
            target.contact, RESEND_COMMAND
        )?;
        let mut screen = VerificationScreen::new(target);

        loop {
            let Some(line) = self.read_line("Código").await? else {
                return Ok(false);
            };

            if line.trim().eq_ignore_ascii_case(RESEND_COMMAND) {
                screen.resend(&self.client).await;
            } else {
                for (index, c) in line.trim().chars().take(6).enumerate() {
                    screen.input(index, &c.to_string());
                }
                if screen.verify(&self.client, &self.session).await == Some(Route::Home) {
                    return Ok(true);
                }
            }

            if let Some(notice) = screen.notice() {
                writeln!(self.output, "{}", notice.text())?;
            }
        }
    }

    async fn summary(&mut self) -> Result<(), AppError> {
        let home = HomeScreen::load(&self.session).await;
        let account = AccountScreen::load(&self.session).await;

        writeln!(self.output, "{}", home.greeting())?;
        writeln!(self.output, "Alias: {}", account.alias())?;
        writeln!(self.output, "Nombre: {}", account.name())?;
        writeln!(self.output, "Correo: {}", account.email())?;
        writeln!(self.output, "Teléfono: {}", account.phone())?;
        Ok(())
    }
}

fn parse_mode(input: &str) -> Option<LoginMode> {
    match input.trim().to_lowercase().as_str() {
        "alias" | "usuario" => Some(LoginMode::Alias),
        "email" | "correo" => Some(LoginMode::Email),
        "phone" | "telefono" | "teléfono" => Some(LoginMode::Phone),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode(" Email "), Some(LoginMode::Email));
        assert_eq!(parse_mode("teléfono"), Some(LoginMode::Phone));
        assert_eq!(parse_mode(""), None);
    }
}
