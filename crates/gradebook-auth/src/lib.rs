//! # Gradebook Auth
//!
//! Access token claims and the [`TokenIssuer`] that signs and verifies them.
//!
//! - [`claims`]: the [`Claims`] carried in every access token
//! - [`jwt`]: [`TokenIssuer`] and [`TokenError`]

pub mod claims;
pub mod jwt;

pub use claims::{Claims, TokenIdentity};
pub use jwt::{TokenError, TokenIssuer};
