//! # Gradebook Config
//!
//! Configuration types for the Gradebook API, loaded from environment variables:
//!
//! - [`jwt`]: token signing secret and lifetime
//! - [`cors`]: allowed browser origins
//! - [`pagination`]: default and maximum page sizes
//! - [`access`]: which resource route groups require a bearer token
//! - [`server`]: listen addresses for the API and metrics servers
//!
//! # Example
//!
//! ```ignore
//! use gradebook_config::{AccessConfig, CorsConfig, JwtConfig, PaginationConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let pagination_config = PaginationConfig::from_env();
//! let access_config = AccessConfig::from_env();
//! ```

pub mod access;
pub mod cors;
pub mod jwt;
pub mod pagination;
pub mod server;

mod env_util;

pub use access::AccessConfig;
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use pagination::PaginationConfig;
pub use server::ServerConfig;
