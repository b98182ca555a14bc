// auth/mod.rs - bearer token verification and the two-kind error taxonomy

pub mod gate;

pub use gate::{AccessGate, AuthService};

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use thiserror::Error;

/// The only two failure kinds a caller can observe. Internal causes (bad
/// signature vs expired vs store unreachable vs zero rows) are logged but
/// never distinguished in the returned value, so a denial cannot be used
/// as an oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Token missing, malformed, signature mismatch, expired, or missing
    /// the email claim. Maps to 401.
    #[error("invalid or expired token")]
    InvalidToken,

    /// Token valid but no active authorization record was found, or the
    /// record store could not answer. Maps to 403.
    #[error("access denied")]
    AccessDenied,
}

/// Identity extracted from a verified token. Only constructed once the
/// email claim is known to be present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    pub email: String,
}

#[derive(Debug, Deserialize)]
struct RawClaims {
    #[serde(default)]
    email: Option<String>,
}

/// Verifies token signature and expiry against the shared HS256 secret.
/// Pure: no I/O, no state beyond the secret loaded at startup.
#[derive(Clone)]
pub struct TokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenValidator {
    pub fn new(secret: &str) -> Self {
        // Single fixed algorithm, no negotiation. Default validation also
        // requires and checks the exp claim. Issuer tokens carry an aud
        // claim we do not check, so audience validation must be off.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_aud = false;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<RawClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|err| {
                // The error carries the cause, never the token itself
                tracing::warn!("Token verification failed: {}", err);
                AuthError::InvalidToken
            })?;

        match data.claims.email {
            Some(email) if !email.is_empty() => Ok(Claims { email }),
            _ => {
                tracing::warn!("Verified token is missing a usable email claim");
                Err(AuthError::InvalidToken)
            }
        }
    }
}
