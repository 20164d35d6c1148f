//! Client library for the Spofity backend.
//!
//! Covers the auth endpoints (login by alias, email or phone, code
//! verification, sign-up), the profile endpoints, client-side decoding of
//! the session token, and the static catalog used by the search and plan
//! screens.

pub mod api;
pub mod auth;
pub mod catalog;
pub mod error;
pub mod model;

mod client;

pub use client::*;
