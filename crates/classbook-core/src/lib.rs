//! # Classbook Core
//!
//! Core types, errors, and utilities for the Classbook API.
//!
//! This crate provides foundational types used throughout the Classbook application:
//!
//! - [`errors`]: Application error types with HTTP response conversion
//! - [`pagination`]: Pagination utilities for API responses
//! - [`serde`]: Custom serde deserialization helpers
//! - [`viewset`]: The generic model-viewset layer (model binding, repository port, CRUD actions)
//!
//! # Example
//!
//! ```ignore
//! use classbook_core::errors::AppError;
//! use classbook_core::pagination::PaginationParams;
//! use classbook_core::viewset::ModelViewSet;
//!
//! let viewset = ModelViewSet::new(repository);
//! let page = viewset.list(&PaginationParams::default()).await?;
//! ```

pub mod errors;
pub mod pagination;
pub mod serde;
pub mod viewset;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use pagination::{Paginated, PaginationMeta, PaginationParams};
pub use viewset::{Model, ModelViewSet, Repository};
