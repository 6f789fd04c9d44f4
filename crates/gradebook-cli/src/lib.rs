//! # Gradebook CLI
//!
//! Administrative and seeding utilities for the Gradebook database.
//!
//! ## Usage
//!
//! ```ignore
//! use gradebook_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(10).with_courses(3).with_students(12);
//! seed_all(&pool, config).await?;
//! ```

pub mod seeder;
pub mod teachers;
