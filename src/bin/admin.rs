//! CLI administration tool for query-gateway.
//!
//! Performs database diagnostics and schema setup without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Server version and row counts of the dump tables
//! cargo run --bin admin -- db info
//!
//! # Apply bundled migrations (asks for confirmation unless -y)
//! cargo run --bin admin -- db migrate -y
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use query_gateway::config::{Config, mask_connection_string};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;

/// Tables of the StackExchange dump, in display order.
const TABLES: [&str; 6] = ["users", "posts", "comments", "tags", "post_tags", "badges"];

/// CLI tool for managing query-gateway.
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
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show server version and table sizes
    Info,

    /// Apply bundled schema migrations
    Migrate {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to {}",
                mask_connection_string(&database_url)
            )
        })?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => show_info(pool).await?,
        DbAction::Migrate { yes } => migrate(pool, yes).await?,
    }

    Ok(())
}

/// Prints the server version and the row count of every dump table.
///
/// Missing tables are reported instead of aborting, so the command is useful
/// against a half-restored dump.
///
/// # Output Format
///
/// ```text
/// Database Information
///
///   PostgreSQL: PostgreSQL 16.2 on x86_64-pc-linux-gnu ...
///
///   Table        Rows
///   ──────────────────────
///   users        112389
///   posts        MISSING
/// ```
async fn show_info(pool: &PgPool) -> Result<()> {
    println!("{}", "Database Information".bright_blue().bold());
    println!();

    let version: String = sqlx::query_scalar("SELECT version()")
        .fetch_one(pool)
        .await?;

    println!("  PostgreSQL: {}", version.bright_white());
    println!();

    println!(
        "  {:<12} {}",
        "Table".bright_white().bold(),
        "Rows".bright_white().bold()
    );
    println!("  {}", "─".repeat(22).bright_black());

    for table in TABLES {
        // Table names come from the constant list above, never from input.
        let count: Result<i64, sqlx::Error> =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
                .fetch_one(pool)
                .await;

        match count {
            Ok(count) => println!(
                "  {:<12} {}",
                table.cyan(),
                count.to_string().bright_green().bold()
            ),
            Err(e) => {
                tracing::debug!(table, error = %e, "Row count failed");
                println!("  {:<12} {}", table.cyan(), "MISSING".red());
            }
        }
    }
    println!();

    Ok(())
}

/// Applies `migrations/` after confirmation.
async fn migrate(pool: &PgPool, skip_confirm: bool) -> Result<()> {
    println!("{}", "Apply migrations".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create the dump schema in this database?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to apply migrations")?;

    println!("{}", "Migrations applied".green().bold());
    println!();

    Ok(())
}
