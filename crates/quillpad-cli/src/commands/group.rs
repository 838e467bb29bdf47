//! Group management CLI commands.
//!
//! Groups are operator-curated; this is the only place they are created.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use quillpad_core::error::AppError;
use quillpad_core::types::pagination::PageRequest;
use quillpad_database::repositories::group::GroupRepository;
use quillpad_entity::group::CreateGroup;

/// Arguments for group commands
#[derive(Debug, Args)]
pub struct GroupArgs {
    /// Group subcommand
    #[command(subcommand)]
    pub command: GroupCommand,
}

/// Group subcommands
#[derive(Debug, Subcommand)]
pub enum GroupCommand {
    /// List groups
    List {
        /// Page number
        #[arg(short, long, default_value = "1")]
        page: u64,
    },
    /// Create a group
    Create {
        /// Group title
        title: String,
        /// URL-safe unique slug
        slug: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
    },
}

/// Group display row for table output
#[derive(Debug, Serialize, Tabled)]
struct GroupRow {
    /// Group ID
    id: String,
    /// Title
    title: String,
    /// Slug
    slug: String,
    /// Created at
    created_at: String,
}

/// Execute group commands
pub async fn execute(
    args: &GroupArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;
    let group_repo = GroupRepository::new(pool.clone());

    match &args.command {
        GroupCommand::List { page } => {
            let page_req = PageRequest::new(*page, 25);
            let groups = group_repo.find_all(&page_req).await?;

            let rows: Vec<GroupRow> = groups
                .items
                .iter()
                .map(|g| GroupRow {
                    id: g.id.to_string(),
                    title: g.title.clone(),
                    slug: g.slug.clone(),
                    created_at: g.created_at.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();

            output::print_list(&rows, format);
            println!(
                "Page {}/{} ({} groups)",
                groups.page, groups.total_pages, groups.total_items
            );
        }
        GroupCommand::Create {
            title,
            slug,
            description,
        } => {
            if slug.is_empty()
                || !slug
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            {
                return Err(AppError::validation(
                    "Slug must be lowercase letters, digits, and '-'",
                ));
            }

            let group = group_repo
                .create(&CreateGroup {
                    title: title.clone(),
                    slug: slug.clone(),
                    description: description.clone(),
                })
                .await?;

            output::print_success(&format!("Created group '{}' (/{})", group.title, group.slug));
        }
    }

    Ok(())
}
