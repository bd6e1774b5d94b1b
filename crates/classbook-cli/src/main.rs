use anyhow::Context;
use classbook_cli::seeder::{self, SeedConfig};
use classbook_config::DatabaseConfig;
use classbook_db::{PgPool, init_db_pool, run_migrations};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "classbook-cli")]
#[command(about = "Classbook CLI - Database tools for Classbook", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Seed the database with fake teachers and students
    Seed {
        /// Number of teachers to create
        #[arg(short = 't', long, default_value = "10")]
        teachers: usize,

        /// Number of students to create
        #[arg(short = 's', long, default_value = "100")]
        students: usize,
    },
    /// Clear all seeded teachers and students
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let mut config = DatabaseConfig::from_env()?;
    config.run_migrations = false;
    let pool = init_db_pool(&config).await?;

    match cli.command {
        Commands::Migrate => handle_migrate(&pool).await,
        Commands::Seed { teachers, students } => {
            handle_seed(&pool, SeedConfig::new(teachers, students)).await
        }
        Commands::Clear => handle_clear(&pool).await,
    }
}

async fn handle_migrate(pool: &PgPool) -> anyhow::Result<()> {
    run_migrations(pool)
        .await
        .context("❌ Error applying migrations")?;
    println!("✅ Migrations applied");
    Ok(())
}

async fn handle_seed(pool: &PgPool, config: SeedConfig) -> anyhow::Result<()> {
    seeder::seed_all(pool, &config)
        .await
        .context("❌ Error seeding database")?;
    Ok(())
}

async fn handle_clear(pool: &PgPool) -> anyhow::Result<()> {
    seeder::clear_all(pool)
        .await
        .context("❌ Error clearing seeded data")?;
    println!("✅ Cleared seeded data");
    Ok(())
}
