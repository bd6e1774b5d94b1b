//! Student seeding.

use anyhow::Context;
use chrono::NaiveDate;
use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;

use super::models::StudentSeed;
use super::{SEED_EMAIL_DOMAIN, placeholders};

// 5 params per row
const BATCH_SIZE: usize = 1000;

/// Generates student data in parallel using Rayon
pub fn generate_students(count: usize) -> Vec<StudentSeed> {
    (0..count)
        .into_par_iter()
        .map(|idx| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();
            let grade: u32 = (1..13).fake();

            StudentSeed {
                email: super::seed_email(&first_name, &last_name, "student", idx),
                first_name,
                last_name,
                date_of_birth: birth_date_for_grade(grade),
                grade_level: Some(grade.to_string()),
            }
        })
        .collect()
}

/// A plausible birth date for a pupil in `grade` (grade 1 at age 6).
fn birth_date_for_grade(grade: u32) -> Option<NaiveDate> {
    let year = 2019 - grade as i32;
    let month: u32 = (1..13).fake();
    let day: u32 = (1..29).fake();
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Seeds students into the database, returning how many rows were inserted.
pub async fn seed_students(db: &PgPool, count: usize) -> anyhow::Result<u64> {
    let start_time = Instant::now();
    println!("🎓 Seeding {} students...", count);

    let students = generate_students(count);

    let mut tx = db.begin().await.context("Failed to start transaction")?;
    let mut inserted = 0;
    for chunk in students.chunks(BATCH_SIZE) {
        inserted += insert_students_chunk(&mut tx, chunk).await?;
    }
    tx.commit().await.context("Failed to commit students")?;

    println!(
        "   ✓ Inserted {} students in {:?}",
        inserted,
        start_time.elapsed()
    );

    Ok(inserted)
}

async fn insert_students_chunk(
    tx: &mut Transaction<'_, Postgres>,
    students: &[StudentSeed],
) -> anyhow::Result<u64> {
    if students.is_empty() {
        return Ok(0);
    }

    let query = format!(
        "INSERT INTO students (first_name, last_name, email, date_of_birth, grade_level) \
         VALUES {} ON CONFLICT (email) DO NOTHING",
        placeholders(students.len(), 5)
    );

    let mut q = sqlx::query(&query);
    for student in students {
        q = q
            .bind(&student.first_name)
            .bind(&student.last_name)
            .bind(&student.email)
            .bind(student.date_of_birth)
            .bind(&student.grade_level);
    }

    let result = q
        .execute(&mut **tx)
        .await
        .context("Failed to insert students")?;
    Ok(result.rows_affected())
}

/// Deletes every student created by the seeder.
pub async fn clear_students(db: &PgPool) -> anyhow::Result<u64> {
    let result = sqlx::query("DELETE FROM students WHERE email LIKE $1")
        .bind(format!("%@{SEED_EMAIL_DOMAIN}"))
        .execute(db)
        .await
        .context("Failed to clear students")?;

    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_generate_students() {
        let students = generate_students(50);

        assert_eq!(students.len(), 50);
        for student in &students {
            let grade: i32 = student.grade_level.as_deref().unwrap().parse().unwrap();
            assert!((1..=12).contains(&grade));
            assert_eq!(student.date_of_birth.unwrap().year(), 2019 - grade);
            assert!(student.grade_level.as_ref().unwrap().len() <= 10);
        }
    }

    #[test]
    fn test_birth_date_is_always_valid() {
        for grade in 1..=12 {
            assert!(birth_date_for_grade(grade).is_some());
        }
    }
}
