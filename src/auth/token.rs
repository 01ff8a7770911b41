//! Token issuance and verification
//!
//! Verification is a pure function of (token, secret, clock): no store
//! access, no mutable state. A token moves issued -> valid -> expired and
//! nothing can pull it back; there is no revocation list in this design.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use thiserror::Error;

use super::models::Claims;
use crate::common::ApiError;

/// Token verification failures, classified for tests and server-side logs.
/// Clients see all three as the same 401.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,
    #[error("token signature does not match")]
    BadSignature,
    #[error("token has expired")]
    Expired,
}

impl From<TokenError> for ApiError {
    fn from(_: TokenError) -> Self {
        // One externally visible message regardless of which check failed
        ApiError::Unauthorized("invalid token".to_string())
    }
}

/// Signs and verifies bearer tokens with a process-lifetime secret.
///
/// Constructed once at startup with the secret and validity window and held
/// read-only for the life of the process.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Issue a signed token embedding the account id and display name,
    /// expiring one validity window from now.
    pub fn issue(&self, sub: &str, username: &str) -> Result<String, ApiError> {
        let exp = (Utc::now() + self.ttl).timestamp() as usize;
        let claims = Claims {
            sub: sub.to_string(),
            username: username.to_string(),
            exp,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|_| ApiError::InternalServer("failed to sign token".to_string()))
    }

    /// Verify a token's signature and expiry, returning the decoded claims.
    ///
    /// Expiry is checked with zero leeway so an expired token reports
    /// `Expired`, never `BadSignature`.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        match decode::<Claims>(token, &self.decoding, &validation) {
            Ok(data) => Ok(data.claims),
            Err(e) => match e.kind() {
                ErrorKind::ExpiredSignature => Err(TokenError::Expired),
                ErrorKind::InvalidSignature => Err(TokenError::BadSignature),
                _ => Err(TokenError::Malformed),
            },
        }
    }
}
