//! Teacher data models and DTOs.
//!
//! Re-exports teacher and auth models from the `gradebook-models` crate.

pub use gradebook_models::auth::*;
pub use gradebook_models::teachers::*;
