//! Student endpoints: `/api/students` and `/api/students/{id}`.

pub mod controller;
pub mod repository;
pub mod router;
