//! Backend endpoints.
//!
//! Each call sends one request and hands the raw status and body to the
//! matching function in [`response`](self) for interpretation.

mod auth;
mod profile;
mod response;

pub use response::*;
