//! Teacher seeding.

use anyhow::Context;
use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;

use super::models::TeacherSeed;
use super::{SEED_EMAIL_DOMAIN, placeholders};

const SUBJECTS: &[&str] = &[
    "Mathematics",
    "English",
    "Biology",
    "Chemistry",
    "Physics",
    "History",
    "Geography",
    "Art",
    "Music",
    "Computer Science",
];

// 4 params per row
const BATCH_SIZE: usize = 1000;

/// Generates teacher data in parallel using Rayon
pub fn generate_teachers(count: usize) -> Vec<TeacherSeed> {
    (0..count)
        .into_par_iter()
        .map(|idx| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();
            let subject = SUBJECTS[(0..SUBJECTS.len()).fake::<usize>()];

            TeacherSeed {
                email: super::seed_email(&first_name, &last_name, "teacher", idx),
                first_name,
                last_name,
                subject: Some(subject.to_string()),
            }
        })
        .collect()
}

/// Seeds teachers into the database, returning how many rows were inserted.
pub async fn seed_teachers(db: &PgPool, count: usize) -> anyhow::Result<u64> {
    let start_time = Instant::now();
    println!("👩‍🏫 Seeding {} teachers...", count);

    let teachers = generate_teachers(count);

    let mut tx = db.begin().await.context("Failed to start transaction")?;
    let mut inserted = 0;
    for chunk in teachers.chunks(BATCH_SIZE) {
        inserted += insert_teachers_chunk(&mut tx, chunk).await?;
    }
    tx.commit().await.context("Failed to commit teachers")?;

    println!(
        "   ✓ Inserted {} teachers in {:?}",
        inserted,
        start_time.elapsed()
    );

    Ok(inserted)
}

async fn insert_teachers_chunk(
    tx: &mut Transaction<'_, Postgres>,
    teachers: &[TeacherSeed],
) -> anyhow::Result<u64> {
    if teachers.is_empty() {
        return Ok(0);
    }

    let query = format!(
        "INSERT INTO teachers (first_name, last_name, email, subject) VALUES {} \
         ON CONFLICT (email) DO NOTHING",
        placeholders(teachers.len(), 4)
    );

    let mut q = sqlx::query(&query);
    for teacher in teachers {
        q = q
            .bind(&teacher.first_name)
            .bind(&teacher.last_name)
            .bind(&teacher.email)
            .bind(&teacher.subject);
    }

    let result = q
        .execute(&mut **tx)
        .await
        .context("Failed to insert teachers")?;
    Ok(result.rows_affected())
}

/// Deletes every teacher created by the seeder.
pub async fn clear_teachers(db: &PgPool) -> anyhow::Result<u64> {
    let result = sqlx::query("DELETE FROM teachers WHERE email LIKE $1")
        .bind(format!("%@{SEED_EMAIL_DOMAIN}"))
        .execute(db)
        .await
        .context("Failed to clear teachers")?;

    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_teachers() {
        let teachers = generate_teachers(25);

        assert_eq!(teachers.len(), 25);
        for teacher in &teachers {
            assert!(!teacher.first_name.is_empty());
            assert!(teacher.email.ends_with(SEED_EMAIL_DOMAIN));
            let subject = teacher.subject.as_deref().unwrap();
            assert!(SUBJECTS.contains(&subject));
        }
    }

    #[test]
    fn test_generated_emails_are_unique() {
        let teachers = generate_teachers(200);
        let mut emails: Vec<&str> = teachers.iter().map(|t| t.email.as_str()).collect();
        emails.sort_unstable();
        emails.dedup();
        assert_eq!(emails.len(), 200);
    }
}
