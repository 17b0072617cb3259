//! Access-token decoding
//!
//! Only the `exp` claim is read. Signatures are not verified here; the backend
//! does that on every request.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::AuthError;

/// Read-only view of an access token, recomputed on every check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedToken {
    /// Expiration as seconds since the Unix epoch
    pub expiration_epoch_seconds: i64,
}

#[derive(Deserialize)]
struct Claims {
    exp: i64,
}

impl DecodedToken {
    /// Decode the payload segment of a `header.payload.signature` token
    pub fn decode(token: &str) -> Result<Self, AuthError> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return Err(AuthError::MalformedToken(format!(
                "expected 3 segments, found {}",
                parts.len()
            )));
        }

        // Tolerate padded payloads from non-standard issuers
        let payload = parts[1].trim_end_matches('=');
        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|e| AuthError::MalformedToken(format!("payload is not base64url: {}", e)))?;

        let claims: Claims = serde_json::from_slice(&bytes)
            .map_err(|e| AuthError::MalformedToken(format!("payload has no usable exp: {}", e)))?;

        Ok(Self {
            expiration_epoch_seconds: claims.exp,
        })
    }

    /// Usable only while expiration is strictly after `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiration_epoch_seconds <= now.timestamp()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.expiration_epoch_seconds, 0)
    }
}

/// Build an unsigned token with the given `exp`, for tests
#[cfg(test)]
pub fn unsigned_token(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{},"user_id":1}}"#, exp));
    format!("{}.{}.sig", header, payload)
}
