//! Request and outcome types exchanged with the backend.

mod credentials;
mod profile;
mod registration;
mod verification;

pub use credentials::*;
pub use profile::*;
pub use registration::*;
pub use verification::*;
