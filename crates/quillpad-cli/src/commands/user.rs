//! User management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use quillpad_auth::password::{PasswordHasher, PasswordValidator};
use quillpad_core::error::AppError;
use quillpad_core::types::pagination::PageRequest;
use quillpad_database::repositories::user::UserRepository;
use quillpad_entity::user::CreateUser;

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List users
    List {
        /// Page number
        #[arg(short, long, default_value = "1")]
        page: u64,
    },
    /// Create a user account
    Create {
        /// Username
        username: String,
        /// Email address
        #[arg(short, long)]
        email: Option<String>,
        /// Display name
        #[arg(short, long)]
        display_name: Option<String>,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: String,
    /// Username
    username: String,
    /// Email
    email: String,
    /// Created at
    created_at: String,
    /// Last login
    last_login: String,
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;
    let user_repo = UserRepository::new(pool.clone());

    match &args.command {
        UserCommand::List { page } => {
            let page_req = PageRequest::new(*page, 25);
            let users = user_repo.find_all(&page_req).await?;

            let rows: Vec<UserRow> = users
                .items
                .iter()
                .map(|u| UserRow {
                    id: u.id.to_string(),
                    username: u.username.clone(),
                    email: u.email.clone().unwrap_or_default(),
                    created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
                    last_login: u
                        .last_login_at
                        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                        .unwrap_or_default(),
                })
                .collect();

            output::print_list(&rows, format);
            println!(
                "Page {}/{} ({} users)",
                users.page, users.total_pages, users.total_items
            );
        }
        UserCommand::Create {
            username,
            email,
            display_name,
        } => {
            let password = dialoguer::Password::new()
                .with_prompt("Password")
                .with_confirmation("Confirm password", "Passwords do not match")
                .interact()
                .map_err(|e| AppError::internal(format!("Failed to read password: {e}")))?;

            PasswordValidator::new(&config.auth).validate(&password)?;
            let password_hash = PasswordHasher::new().hash_password(&password)?;

            let user = user_repo
                .create(&CreateUser {
                    username: username.clone(),
                    email: email.clone(),
                    password_hash,
                    display_name: display_name.clone(),
                })
                .await?;

            output::print_success(&format!("Created user '{}' ({})", user.username, user.id));
        }
    }

    Ok(())
}
