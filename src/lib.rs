//! # Classbook API
//!
//! A REST API built with Rust, Axum, and PostgreSQL that exposes the teachers
//! and students of a school as two CRUD resources.
//!
//! ## Overview
//!
//! Each resource is served by a [`ModelViewSet`](classbook_core::ModelViewSet)
//! bound to a PostgreSQL repository:
//!
//! | Method   | Path                    | Action           |
//! |----------|-------------------------|------------------|
//! | `GET`    | `/api/teachers`         | paginated list   |
//! | `POST`   | `/api/teachers`         | create           |
//! | `GET`    | `/api/teachers/{id}`    | retrieve         |
//! | `PUT`    | `/api/teachers/{id}`    | full update      |
//! | `PATCH`  | `/api/teachers/{id}`    | partial update   |
//! | `DELETE` | `/api/teachers/{id}`    | destroy          |
//!
//! `/api/students` mirrors the same table.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── docs.rs          # OpenAPI document
//! ├── extract.rs       # Body and path extractors
//! ├── modules/         # Feature modules
//! │   ├── health.rs
//! │   ├── students/
//! │   └── teachers/
//! ├── router.rs        # Route table and middleware stack
//! └── state.rs         # Shared application state
//! crates/
//! ├── classbook-core/           # Errors, pagination, viewset layer
//! ├── classbook-config/         # Environment-driven configuration
//! ├── classbook-db/             # Pool, migrations
//! ├── classbook-models/         # Teacher and Student records
//! ├── classbook-observability/  # Tracing, logging, metrics
//! └── classbook-cli/            # migrate / seed / clear
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers
//! - `repository.rs`: PostgreSQL queries
//! - `router.rs`: Axum router configuration
//!
//! ## API Documentation
//!
//! - Swagger UI at `/swagger-ui`
//! - Scalar at `/scalar`
//! - Raw OpenAPI JSON at `/api-docs/openapi.json`

pub mod docs;
pub mod extract;
pub mod modules;
pub mod router;
pub mod state;

pub use classbook_core::{AppError, ModelViewSet};
pub use classbook_models::{Student, Teacher};
