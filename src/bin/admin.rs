//! CLI administration tool for link-registry.
//!
//! Manages links directly in PostgreSQL, without going through the HTTP API,
//! using the same validation and normalization as the management service.
//!
//! # Usage
//!
//! ```bash
//! # List links
//! cargo run --bin admin -- links list
//!
//! # Add a link
//! cargo run --bin admin -- links add My_Link https://example.com/a
//!
//! # Remove a link
//! cargo run --bin admin -- links remove my_link
//!
//! # Generate a value for API_TOKEN
//! cargo run --bin admin -- token generate
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required for `links` and `db`): PostgreSQL connection string
//! - `RESOLVER_HOST` (optional): host shown in redirect URLs, default `localhost`

use link_registry::application::services::ManagementService;
use link_registry::infrastructure::persistence::PgLinkRepository;
use link_registry::server::run_migrations;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing link-registry.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Manage the API bearer token
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links
    List,

    /// Add a link
    Add {
        /// Short name (letters and digits, optionally one `_` segment)
        name: String,

        /// Destination URL (absolute http/https)
        url: String,
    },

    /// Remove a link
    Remove {
        /// Short name to remove (case-insensitive)
        name: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Token subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Generate a random value suitable for API_TOKEN
    Generate {
        /// Print only the token
        #[arg(long)]
        raw: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Token { action } => handle_token_action(action),
        Commands::Links { action } => {
            let pool = connect().await?;
            handle_link_action(action, pool).await
        }
        Commands::Db { action } => {
            let pool = connect().await?;
            handle_db_action(action, &pool).await
        }
    }
}

async fn connect() -> Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, pool: PgPool) -> Result<()> {
    run_migrations(&pool).await?;

    let resolver_host = std::env::var("RESOLVER_HOST").unwrap_or_else(|_| "localhost".to_string());
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    let service = ManagementService::new(repo, resolver_host);

    match action {
        LinkAction::List => list_links(&service).await,
        LinkAction::Add { name, url } => add_link(&service, &name, &url).await,
        LinkAction::Remove { name, yes } => remove_link(&service, &name, yes).await,
    }
}

/// Lists all links in a table.
///
/// ```text
/// 🔗 Links
///
///   Name                 URL
///   ──────────────────────────────────────────────────────────────
///   docs                 https://example.com/docs
/// ```
async fn list_links(service: &ManagementService<PgLinkRepository>) -> Result<()> {
    println!("{}", "🔗 Links".bright_blue().bold());
    println!();

    let links = service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<20} {}",
        "Name".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!("  {:<20} {}", link.name.cyan(), link.url);
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn add_link(
    service: &ManagementService<PgLinkRepository>,
    name: &str,
    url: &str,
) -> Result<()> {
    let created = service
        .create_link(name, url)
        .await
        .map_err(|e| describe("Failed to add link", &e))?;

    println!("{}", "✅ Link created".green().bold());
    println!("  Name:     {}", created.link.name.cyan());
    println!("  URL:      {}", created.link.url);
    println!("  Redirect: {}", created.redirect_url.bright_yellow());

    Ok(())
}

/// Removes a link after confirmation (default: No).
async fn remove_link(
    service: &ManagementService<PgLinkRepository>,
    name: &str,
    skip_confirm: bool,
) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove link '{}'?", name.to_lowercase()))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let removed = service
        .delete_link(name)
        .await
        .map_err(|e| describe("Failed to remove link", &e))?;

    println!("{} {}", "✅ Link removed:".green().bold(), removed.cyan());

    Ok(())
}

fn describe(context: &str, e: &link_registry::AppError) -> anyhow::Error {
    let body = e.to_error_body();
    match body.error {
        Some(detail) => anyhow::anyhow!("{context}: {} ({detail})", body.message),
        None => anyhow::anyhow!("{context}: {}", body.message),
    }
}

fn handle_token_action(action: TokenAction) -> Result<()> {
    match action {
        TokenAction::Generate { raw } => {
            let token = generate_token();

            if raw {
                println!("{token}");
                return Ok(());
            }

            println!("{}", "🔑 Generated API token".bright_blue().bold());
            println!();
            println!("  {}", token.bright_yellow().bold());
            println!();
            println!("{}", "Set it in the server environment:".bright_white());
            println!("  API_TOKEN={}", token);
            println!();
            println!("{}", "Then authenticate requests with:".bright_white());
            println!(
                "  {}: Bearer {}",
                "Authorization".bright_cyan(),
                token.bright_yellow()
            );
            println!();
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());

            let links_count: Option<i64> =
                sqlx::query_scalar("SELECT COUNT(*) FROM links")
                    .fetch_one(pool)
                    .await
                    .ok();

            match links_count {
                Some(count) => println!("  Links:      {}", count.to_string().bright_green()),
                None => println!("  Links:      {}", "table not created yet".yellow()),
            }
            println!();
        }
    }

    Ok(())
}

/// Generates a cryptographically random token.
///
/// # Format
///
/// - Length: 48 characters
/// - Character set: A-Z, a-z, 0-9
fn generate_token() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const TOKEN_LEN: usize = 48;

    let mut rng = rand::rng();

    (0..TOKEN_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
