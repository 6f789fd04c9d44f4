//! Access token issuing and verification.
//!
//! A [`TokenIssuer`] is built once from [`JwtConfig`] and stored in
//! application state. It signs HS256 tokens whose `exp` is `iat` plus the
//! configured lifetime, and verifies them with zero clock leeway. There is no
//! revocation list: a token stays valid until it expires.
//!
//! # Example
//!
//! ```ignore
//! use gradebook_auth::{TokenIdentity, TokenIssuer};
//! use gradebook_config::JwtConfig;
//!
//! let issuer = TokenIssuer::new(&JwtConfig::from_env());
//!
//! let token = issuer.issue(&TokenIdentity {
//!     id: teacher.id,
//!     name: teacher.name.clone(),
//!     email: teacher.email.clone(),
//! })?;
//!
//! let claims = issuer.verify(&token)?;
//! ```

use std::fmt;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use gradebook_config::JwtConfig;

use crate::claims::{Claims, TokenIdentity};

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token is invalid")]
    Invalid,

    #[error("token has expired")]
    Expired,

    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_seconds: i64,
}

impl TokenIssuer {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            ttl_seconds: config.access_token_expiry,
        }
    }

    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    pub fn issue(&self, identity: &TokenIdentity) -> Result<String, TokenError> {
        self.issue_at(identity, Utc::now().timestamp())
    }

    /// Issues a token as if signed at `issued_at` (Unix seconds).
    pub fn issue_at(&self, identity: &TokenIdentity, issued_at: i64) -> Result<String, TokenError> {
        let iat = issued_at.max(0);
        let claims = Claims {
            id: identity.id,
            name: identity.name.clone(),
            email: identity.email.clone(),
            iat: iat as usize,
            exp: (iat + self.ttl_seconds).max(0) as usize,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("algorithm", &"HS256")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}
