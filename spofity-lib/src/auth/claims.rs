//! JWT payload decoding for display.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::error::AuthError;

/// Shown in place of profile values the user never filled in.
pub const NOT_PROVIDED: &str = "No proporcionado";

/// Profile data the backend embeds in the session token.
///
/// Only used to render the account and home screens. Nothing here is
/// trusted for authorization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Backend user id.
    #[serde(default)]
    pub id: Option<i64>,
    /// Public handle.
    #[serde(default)]
    pub alias: Option<String>,
    /// Full name.
    #[serde(default, rename = "nombre")]
    pub name: Option<String>,
    /// Email address.
    #[serde(default, rename = "correo")]
    pub email: Option<String>,
    /// Phone number.
    #[serde(default, rename = "telefono")]
    pub phone: Option<String>,
    /// Profile picture URL.
    #[serde(default, rename = "fotoPerfil")]
    pub photo_url: Option<String>,
    /// Expiry, seconds since the epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// Expiry as a timestamp, if the token carries one.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

/// Decode the payload segment of a JWT.
///
/// Accepts both the URL-safe and the standard base64 alphabet, with or
/// without padding. The signature is not verified.
///
/// # Example
///
/// ```
/// use spofity_lib::auth::decode_claims;
///
/// // {"alias":"ana"}
/// let claims = decode_claims("h.eyJhbGlhcyI6ImFuYSJ9.s").unwrap();
/// assert_eq!(claims.alias.as_deref(), Some("ana"));
/// ```
pub fn decode_claims(token: &str) -> Result<TokenClaims, AuthError> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next()) {
        (Some(_), Some(payload)) => payload,
        _ => {
            return Err(AuthError::MalformedToken(
                "expected header and payload segments".to_string(),
            ));
        }
    };

    let normalized: String = payload
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    let bytes = URL_SAFE_NO_PAD.decode(normalized)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// The value itself, or [`NOT_PROVIDED`] when missing or blank.
pub fn display_or_fallback(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_PROVIDED,
    }
}

#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::STANDARD;

    use super::*;

    fn token_with(payload: &str) -> String {
        format!("header.{}.signature", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn test_decode_full_payload() {
        let token = token_with(
            r#"{"id":7,"alias":"ana","nombre":"Ana Pérez","correo":"ana@example.com","telefono":"+56912345678","fotoPerfil":null,"exp":1700000000}"#,
        );
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.id, Some(7));
        assert_eq!(claims.alias.as_deref(), Some("ana"));
        assert_eq!(claims.name.as_deref(), Some("Ana Pérez"));
        assert_eq!(claims.email.as_deref(), Some("ana@example.com"));
        assert_eq!(claims.phone.as_deref(), Some("+56912345678"));
        assert_eq!(claims.photo_url, None);
        assert_eq!(claims.expires_at().unwrap().timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_decode_padded_standard_alphabet() {
        // standard alphabet, padded
        let payload = r#"{"alias":"ñandú~~~>>>???"}"#;
        let token = format!("h.{}.s", STANDARD.encode(payload));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.alias.as_deref(), Some("ñandú~~~>>>???"));
    }

    #[test]
    fn test_two_segments_are_enough() {
        let token = format!("h.{}", URL_SAFE_NO_PAD.encode(r#"{"alias":"x"}"#));
        assert_eq!(decode_claims(&token).unwrap().alias.as_deref(), Some("x"));
    }

    #[test]
    fn test_unknown_claims_are_ignored() {
        let token = token_with(r#"{"alias":"x","iat":1,"role":"user"}"#);
        assert!(decode_claims(&token).is_ok());
    }

    #[test]
    fn test_malformed_tokens() {
        assert!(matches!(
            decode_claims("no-dots-here"),
            Err(AuthError::MalformedToken(_))
        ));
        assert!(matches!(
            decode_claims("h.!!!notbase64.s"),
            Err(AuthError::MalformedToken(_))
        ));
        let not_json = format!("h.{}.s", URL_SAFE_NO_PAD.encode("plain text"));
        assert!(matches!(
            decode_claims(&not_json),
            Err(AuthError::MalformedToken(_))
        ));
    }

    #[test]
    fn test_display_or_fallback() {
        assert_eq!(display_or_fallback(Some("ana")), "ana");
        assert_eq!(display_or_fallback(Some("   ")), NOT_PROVIDED);
        assert_eq!(display_or_fallback(None), NOT_PROVIDED);
    }
}
