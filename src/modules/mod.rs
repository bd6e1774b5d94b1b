pub mod health;
pub mod students;
pub mod teachers;
