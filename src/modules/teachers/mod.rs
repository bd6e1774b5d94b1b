//! Teacher endpoints: `/api/teachers` and `/api/teachers/{id}`.

pub mod controller;
pub mod repository;
pub mod router;
