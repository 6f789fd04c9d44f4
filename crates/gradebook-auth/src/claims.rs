//! Bearer token claim structures.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Claims carried by an access token.
///
/// `exp` is always `iat` plus the configured lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// Teacher ID
    pub id: i64,
    /// Teacher's display name
    pub name: String,
    /// Teacher's email address
    pub email: String,
    /// Issued-at timestamp (Unix seconds)
    pub iat: usize,
    /// Expiration timestamp (Unix seconds)
    pub exp: usize,
}

/// The identity a token is issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenIdentity {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<&Claims> for TokenIdentity {
    fn from(claims: &Claims) -> Self {
        Self {
            id: claims.id,
            name: claims.name.clone(),
            email: claims.email.clone(),
        }
    }
}
