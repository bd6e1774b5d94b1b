//! Data models for database seeding.

use chrono::NaiveDate;

/// Seed data for one teacher row.
pub struct TeacherSeed {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: Option<String>,
}

/// Seed data for one student row.
pub struct StudentSeed {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub grade_level: Option<String>,
}

/// How many records of each kind to generate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedConfig {
    pub teachers: usize,
    pub students: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            teachers: 10,
            students: 100,
        }
    }
}

impl SeedConfig {
    pub fn new(teachers: usize, students: usize) -> Self {
        Self { teachers, students }
    }

    pub fn total(&self) -> usize {
        self.teachers + self.students
    }
}

/// Rows actually written by a seeding run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub teachers: u64,
    pub students: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SeedConfig::default();
        assert_eq!(config.teachers, 10);
        assert_eq!(config.students, 100);
        assert_eq!(config.total(), 110);
    }
}
