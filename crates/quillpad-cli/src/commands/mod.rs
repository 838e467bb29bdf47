//! CLI command definitions and dispatch.

pub mod group;
pub mod migrate;
pub mod serve;
pub mod session;
pub mod user;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use quillpad_core::error::AppError;

/// Quillpad — blogging platform backend
#[derive(Debug, Parser)]
#[command(name = "quillpad", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the Quillpad server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// User account management
    User(user::UserArgs),
    /// Group (category) management
    Group(group::GroupArgs),
    /// Session maintenance
    Session(session::SessionArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate(args) => migrate::execute(args, &self.config).await,
            Commands::User(args) => user::execute(args, &self.config, self.format).await,
            Commands::Group(args) => group::execute(args, &self.config, self.format).await,
            Commands::Session(args) => session::execute(args, &self.config).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<quillpad_core::config::AppConfig, AppError> {
    quillpad_core::config::AppConfig::load(config_path)
}

/// Helper: create database pool from config
pub async fn create_db_pool(
    config: &quillpad_core::config::AppConfig,
) -> Result<sqlx::PgPool, AppError> {
    quillpad_database::create_pool(&config.database).await
}
