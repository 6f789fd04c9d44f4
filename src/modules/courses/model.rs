//! Course data models and DTOs.
//!
//! Re-exports course models from the `gradebook-models` crate.

pub use gradebook_models::courses::*;
