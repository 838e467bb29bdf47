//! Database migration management commands.

use clap::{Args, Subcommand};

use crate::output;
use quillpad_core::error::{AppError, ErrorKind};

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
    /// Show applied migrations
    Status,
    /// Reset database (drop all tables and re-run)
    Reset {
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;

    match &args.command {
        MigrateCommand::Run => {
            println!("Running database migrations...");
            quillpad_database::migration::run_migrations(&pool).await?;
            output::print_success("All migrations applied successfully.");
        }
        MigrateCommand::Status => {
            let applied = quillpad_database::migration::applied_migrations(&pool).await?;
            if applied.is_empty() {
                println!("No migrations applied yet.");
            } else {
                println!("Applied migrations:");
                for (version, description) in &applied {
                    println!("  {:>4}  {}", version, description);
                }
            }
        }
        MigrateCommand::Reset { force } => {
            if !force {
                let confirmed = dialoguer::Confirm::new()
                    .with_prompt("This will DROP ALL DATA. Continue?")
                    .default(false)
                    .interact()
                    .unwrap_or(false);

                if !confirmed {
                    output::print_warning("Reset aborted.");
                    return Ok(());
                }
            }

            // Drop in reverse dependency order.
            for table in [
                "follows",
                "comments",
                "posts",
                "groups",
                "sessions",
                "users",
                "_sqlx_migrations",
            ] {
                sqlx::query(&format!("DROP TABLE IF EXISTS {table} CASCADE"))
                    .execute(&pool)
                    .await
                    .map_err(|e| {
                        AppError::with_source(
                            ErrorKind::Database,
                            format!("Failed to drop table {table}"),
                            e,
                        )
                    })?;
            }

            quillpad_database::migration::run_migrations(&pool).await?;
            output::print_success("Database reset and migrated.");
        }
    }

    Ok(())
}
