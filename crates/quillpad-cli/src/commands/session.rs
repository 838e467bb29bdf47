//! Session maintenance CLI commands.

use clap::{Args, Subcommand};

use crate::output;
use quillpad_core::error::AppError;
use quillpad_database::repositories::session::SessionRepository;

/// Arguments for session commands
#[derive(Debug, Args)]
pub struct SessionArgs {
    /// Session subcommand
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Session subcommands
#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    /// Remove sessions past their absolute expiry
    Cleanup,
}

/// Execute session commands
pub async fn execute(args: &SessionArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;
    let session_repo = SessionRepository::new(pool);

    match &args.command {
        SessionCommand::Cleanup => {
            let removed = session_repo.delete_expired().await?;
            output::print_success(&format!("Removed {removed} expired sessions"));
        }
    }

    Ok(())
}
