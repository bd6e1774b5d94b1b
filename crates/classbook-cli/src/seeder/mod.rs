//! Fake-data seeding for the `teachers` and `students` tables.
//!
//! Rows are generated in parallel with Rayon, then written with multi-row
//! `INSERT` statements inside one transaction per table. Every seeded email
//! ends in [`SEED_EMAIL_DOMAIN`], which is how [`clear_all`] finds them again.

pub mod models;
pub mod students;
pub mod teachers;

pub use models::{SeedConfig, SeedSummary, StudentSeed, TeacherSeed};

use sqlx::PgPool;
use std::time::Instant;

pub const SEED_EMAIL_DOMAIN: &str = "example.com";

/// Seeds teachers then students.
pub async fn seed_all(db: &PgPool, config: &SeedConfig) -> anyhow::Result<SeedSummary> {
    let start_time = Instant::now();

    println!("🌱 Starting database seeding...");
    println!("   - Teachers: {}", config.teachers);
    println!("   - Students: {}", config.students);

    let summary = SeedSummary {
        teachers: teachers::seed_teachers(db, config.teachers).await?,
        students: students::seed_students(db, config.students).await?,
    };

    println!(
        "\n✅ Seeded {} records in {:?}",
        summary.teachers + summary.students,
        start_time.elapsed()
    );

    Ok(summary)
}

/// Removes every seeded teacher and student. Records created through the API
/// with other email domains are kept.
pub async fn clear_all(db: &PgPool) -> anyhow::Result<SeedSummary> {
    println!("🗑️  Clearing seeded data...");

    let summary = SeedSummary {
        teachers: teachers::clear_teachers(db).await?,
        students: students::clear_students(db).await?,
    };

    println!(
        "   ✓ Deleted {} teachers and {} students",
        summary.teachers, summary.students
    );

    Ok(summary)
}

pub(crate) fn seed_email(first_name: &str, last_name: &str, prefix: &str, idx: usize) -> String {
    let slug = |name: &str| {
        name.chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase()
    };

    format!(
        "{}.{}+{}{}@{}",
        slug(first_name),
        slug(last_name),
        prefix,
        idx,
        SEED_EMAIL_DOMAIN
    )
}

/// `($1, $2), ($3, $4), ...` for `rows` rows of `columns` parameters.
pub(crate) fn placeholders(rows: usize, columns: usize) -> String {
    (0..rows)
        .map(|row| {
            let params: Vec<String> = (1..=columns)
                .map(|col| format!("${}", row * columns + col))
                .collect();
            format!("({})", params.join(", "))
        })
        .collect::<Vec<_>>()
        .join(", ")
}
