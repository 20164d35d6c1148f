//! Home tab: greeting and logout.

use spofity_lib::error::AuthError;

use super::Route;
use crate::session::SessionStore;

/// Greeting name when the token carries no alias.
pub const DEFAULT_ALIAS: &str = "Usuario";

/// Entries of the side menu, apart from logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Account,
    Plan,
}

impl MenuItem {
    pub const ALL: [MenuItem; 2] = [MenuItem::Account, MenuItem::Plan];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Account => "Mi Cuenta",
            MenuItem::Plan => "Mi Plan",
        }
    }
}

#[derive(Debug)]
pub struct HomeScreen {
    alias: String,
    photo_url: Option<String>,
    menu_open: bool,
}

impl HomeScreen {
    pub async fn load(session: &SessionStore) -> Self {
        let claims = match session.claims().await {
            Ok(claims) => claims,
            Err(e) => {
                log::warn!("could not read session: {}", e);
                None
            }
        };

        let alias = claims
            .as_ref()
            .and_then(|c| c.alias.clone())
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ALIAS.to_string());
        let photo_url = claims
            .and_then(|c| c.photo_url)
            .filter(|url| !url.is_empty());

        Self {
            alias,
            photo_url,
            menu_open: false,
        }
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn greeting(&self) -> String {
        format!("Hola, {}", self.alias)
    }

    pub fn photo_url(&self) -> Option<&str> {
        self.photo_url.as_deref()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn open_menu(&mut self) {
        self.menu_open = true;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Closes the menu and returns where the chosen entry leads.
    pub fn select(&mut self, item: MenuItem) -> Route {
        self.menu_open = false;
        match item {
            MenuItem::Account => Route::Account,
            MenuItem::Plan => Route::Plan,
        }
    }

    /// Clears the stored token and sends the user to the login screen.
    pub async fn logout(&mut self, session: &SessionStore) -> Result<Route, AuthError> {
        self.menu_open = false;
        session.clear().await?;
        Ok(Route::Login)
    }
}
