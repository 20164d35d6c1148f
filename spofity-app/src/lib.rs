//! Spofity client application: settings, session and headless screens.

pub mod config;
pub mod console;
pub mod error;
pub mod paths;
pub mod screens;
pub mod session;
pub mod settings;
