//! # Classbook Models
//!
//! Domain models and DTOs for the Classbook API.
//!
//! Each module defines a stored record, its full-write payload (`*Input`,
//! used by create and PUT) and its partial-write payload (`*Patch`, used by
//! PATCH), and binds them together through [`classbook_core::Model`].
//!
//! - [`students`]: Student records
//! - [`teachers`]: Teacher records
//!
//! # Example
//!
//! ```ignore
//! use classbook_models::{Teacher, TeacherInput};
//! use validator::Validate;
//!
//! let input = TeacherInput { /* ... */ };
//! input.validate()?;
//! ```

pub mod students;
pub mod teachers;

// Re-export commonly used types at crate root for convenience
pub use students::{Student, StudentInput, StudentPatch};
pub use teachers::{Teacher, TeacherInput, TeacherPatch};
