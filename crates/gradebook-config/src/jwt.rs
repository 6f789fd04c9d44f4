use std::env;
use std::fmt;

use crate::env_util::parse_or;

/// Default access token lifetime in seconds.
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 3600;

/// Token signing configuration.
///
/// The secret is only ever handed to the token issuer at startup. `Debug`
/// output redacts it.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Access token lifetime in seconds.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .expect("JWT_SECRET must be set");

        Self {
            secret,
            access_token_expiry: parse_or("JWT_ACCESS_EXPIRY", DEFAULT_ACCESS_TOKEN_EXPIRY),
        }
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("access_token_expiry", &self.access_token_expiry)
            .finish()
    }
}
