//! # Classbook CLI
//!
//! Database seeding utilities for Classbook testing and development.
//!
//! This library crate provides the seeding functionality used by the CLI binary.
//!
//! ## Usage
//!
//! ```ignore
//! use classbook_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(20, 200);
//! seed_all(&pool, &config).await?;
//! ```

pub mod seeder;
