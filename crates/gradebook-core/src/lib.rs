//! # Gradebook Core
//!
//! Core types, errors, and utilities for the Gradebook API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`pagination`]: The page/limit/sort/populate list contract
//! - [`password`]: bcrypt hashing and verification
//! - [`serde`]: Custom deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use gradebook_core::errors::AppError;
//! use gradebook_core::pagination::{PageLimits, PaginationParams};
//! use gradebook_core::password::{hash_password, verify_password};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Student not found"));
//!
//! let hash = hash_password("secure_password")?;
//!
//! let query = PaginationParams::default().validate::<Student>(PageLimits::default())?;
//! ```

pub mod errors;
pub mod pagination;
pub mod password;
pub mod serde;

pub use errors::AppError;
pub use pagination::{
    ListQuery, PageLimits, Paginated, PaginationError, PaginationMeta, PaginationParams,
    Populate, PopulateParams, Resource, SortOrder,
};
pub use password::{hash_password, verify_password};
