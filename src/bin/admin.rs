//! CLI administration tool for shortlink.
//!
//! Runs maintenance operations through the same store contract the service
//! uses, without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Create the `urls` table if missing
//! cargo run --bin admin -- db init
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Insert a known mapping (test123 -> https://www.google.com by default)
//! cargo run --bin admin -- seed -y
//!
//! # Shorten or resolve from the command line
//! cargo run --bin admin -- shorten https://example.com/page1
//! cargo run --bin admin -- resolve test123
//! ```
//!
//! # Environment Variables
//!
//! Same as the service: `DATABASE_URL` or `DB_HOST`/`DB_PORT`/`DB_USER`/
//! `DB_PASSWORD`/`DB_NAME`.

use shortlink::application::services::ShortenService;
use shortlink::config;
use shortlink::domain::entities::PutOutcome;
use shortlink::domain::repositories::UrlStore;
use shortlink::error::AppError;
use shortlink::server::{build_service, build_store};
use shortlink::utils::code_generator::is_valid_code;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing shortlink.
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

    /// Insert a fixed mapping, leaving an existing code untouched
    Seed {
        /// Short code to insert
        #[arg(short, long, default_value = "test123")]
        code: String,

        /// Destination URL
        #[arg(short, long, default_value = "https://www.google.com")]
        url: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Create a short code for a URL
    Shorten {
        /// URL to shorten
        url: String,
    },

    /// Look up the URL stored for a code
    Resolve {
        /// Short code
        code: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Create the `urls` table if it does not exist
    Init,

    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env().context("Failed to load configuration")?;

    match cli.command {
        Commands::Db { action } => {
            let store = build_store(&config).await?;
            handle_db_action(action, store.as_ref()).await?
        }
        Commands::Seed { code, url, yes } => {
            let store = build_store(&config).await?;
            handle_seed(store.as_ref(), &code, &url, yes, config.code_length).await?
        }
        Commands::Shorten { url } => {
            let service = build_service(&config).await?;
            let mapping = service.shorten(&url).await?;
            let short_url = ShortenService::short_url(&config.base_url, &mapping.code);

            println!("{} {}", "✓".green().bold(), short_url.bright_white().bold());
            println!("  Code: {}", mapping.code.cyan());
        }
        Commands::Resolve { code } => {
            let service = build_service(&config).await?;
            match service.resolve(&code).await {
                Ok(mapping) => println!("{} {}", code.cyan(), mapping.original_url),
                Err(AppError::NotFound { .. }) => {
                    println!("{} {}", "Short URL not found:".yellow(), code);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, store: &dyn UrlStore) -> Result<()> {
    match action {
        DbAction::Init => {
            store
                .ensure_schema()
                .await
                .context("Failed to create schema")?;
            println!("{}", "✓ Table 'urls' is ready".green());
        }
        DbAction::Check => {
            store.ping().await.context("Database connection failed")?;
            println!("{}", "✓ Database connection OK".green());
        }
    }

    Ok(())
}

/// Inserts one mapping with insert-if-absent semantics.
async fn handle_seed(
    store: &dyn UrlStore,
    code: &str,
    url: &str,
    yes: bool,
    code_length: usize,
) -> Result<()> {
    if url.is_empty() {
        anyhow::bail!("URL must not be empty");
    }
    if code.contains('\0') || url.contains('\0') {
        anyhow::bail!("Code and URL must not contain NUL characters");
    }

    if !is_valid_code(code, code_length) {
        println!(
            "{} '{}' is not a {}-character alphanumeric code; it can still be resolved",
            "⚠".yellow(),
            code,
            code_length
        );
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Insert {} -> {}?", code, url))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".yellow());
            return Ok(());
        }
    }

    store
        .ensure_schema()
        .await
        .context("Failed to create schema")?;

    match store.put(code, url).await? {
        PutOutcome::Created(mapping) => {
            println!(
                "{} {} -> {} (id {})",
                "✓ Inserted".green(),
                mapping.code.cyan(),
                mapping.original_url,
                mapping.id
            );
        }
        PutOutcome::AlreadyExists => {
            println!(
                "{} '{}' already exists, left unchanged",
                "•".yellow(),
                code
            );
        }
    }

    Ok(())
}
