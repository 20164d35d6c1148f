//! Headless screens.
//!
//! Each screen owns its field controllers and the host-side state around
//! them: value cells, validity flags fed by the fields, the submit-attempt
//! flag and the last backend error. A presentation layer only forwards
//! input and reads state back.

mod account;
mod change_password;
mod create_playlist;
mod edit_profile;
mod home;
mod library;
mod login;
mod plan;
mod register;
pub mod rules;
mod search;
mod verification;

pub use account::AccountScreen;
pub use change_password::ChangePasswordScreen;
pub use create_playlist::CreatePlaylistScreen;
pub use edit_profile::EditProfileScreen;
pub use home::{HomeScreen, MenuItem};
pub use library::{LibraryScreen, Playlist};
pub use login::LoginScreen;
pub use plan::{PlanChange, PlanScreen};
pub use register::RegisterScreen;
pub use search::SearchScreen;
pub use verification::VerificationScreen;

use spofity_lib::model::VerificationTarget;

/// Where a screen asks the host to go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Verification(VerificationTarget),
    Home,
    Account,
    ChangePassword,
    CreatePlaylist,
    Library,
    Search,
    Plan,
    /// Pop the current screen.
    Back,
}

/// The bottom tab bar shown once logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Search,
    Library,
    Create,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Search, Tab::Library, Tab::Create];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Inicio",
            Tab::Search => "Buscar",
            Tab::Library => "Biblioteca",
            Tab::Create => "Crear",
        }
    }

    pub fn route(self) -> Route {
        match self {
            Tab::Home => Route::Home,
            Tab::Search => Route::Search,
            Tab::Library => Route::Library,
            Tab::Create => Route::CreatePlaylist,
        }
    }
}
