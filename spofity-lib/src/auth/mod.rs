//! Session tokens

mod claims;
mod token;

pub use claims::TokenClaims;
pub use claims::decode_claims;
pub use claims::display_or_fallback;
pub use claims::NOT_PROVIDED;
pub use token::AccessToken;
pub use token::StaticTokenProvider;
pub use token::TokenProvider;
