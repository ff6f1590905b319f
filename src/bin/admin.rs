//! CLI administration tool for shortlink.
//!
//! Works directly against the configured Redis, without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts for the URL when omitted)
//! cargo run --bin admin -- shorten https://example.com --expire 60
//!
//! # Show a link's detail record
//! cargo run --bin admin -- info 1
//!
//! # Resolve a link to its URL
//! cargo run --bin admin -- resolve 1
//!
//! # Check the store connection / show the allocation counter
//! cargo run --bin admin -- store check
//! cargo run --bin admin -- store counter
//! ```
//!
//! # Environment Variables
//!
//! - `REDIS_URL` or `REDIS_HOST` (+ `REDIS_PORT`, `REDIS_PASSWORD`, `REDIS_DB`): required

use shortlink::application::services::LinkService;
use shortlink::config;
use shortlink::domain::keys::COUNTER_KEY;
use shortlink::domain::repositories::KvStore;
use shortlink::error::AppError;
use shortlink::server::connect_redis;
use shortlink::utils::url_normalizer::normalize_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::sync::Arc;

/// CLI tool for managing shortlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL
    Shorten {
        /// URL to shorten (prompted for if omitted)
        url: Option<String>,

        /// Lifetime in minutes; 0 never expires
        #[arg(short, long, default_value_t = 0)]
        expire: i64,
    },

    /// Show the detail record of a short link
    Info { id: String },

    /// Resolve a short link to its URL
    Resolve { id: String },

    /// Store operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

/// Store operation subcommands.
#[derive(Subcommand)]
enum StoreAction {
    /// Check the store connection
    Check,

    /// Show the current value of the allocation counter
    Counter,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let redis_url = config
        .redis_url
        .as_deref()
        .context("REDIS_URL or REDIS_HOST must be set")?;

    let store: Arc<dyn KvStore> = Arc::new(
        connect_redis(redis_url, config.store_connect_retries)
            .await
            .context("Failed to connect to Redis")?,
    );
    let service = LinkService::new(store.clone());

    match cli.command {
        Commands::Shorten { url, expire } => shorten(&service, url, expire).await?,
        Commands::Info { id } => info(&service, &id).await?,
        Commands::Resolve { id } => resolve(&service, &id).await?,
        Commands::Store { action } => handle_store_action(action, store.as_ref()).await?,
    }

    Ok(())
}

/// Shortens a URL, prompting for it when not given.
async fn shorten(service: &LinkService<dyn KvStore>, url: Option<String>, expire: i64) -> Result<()> {
    let url = match url {
        Some(u) => u,
        None => Input::<String>::new()
            .with_prompt("URL to shorten")
            .interact_text()?,
    };

    let url = normalize_url(&url)?;

    let id = service
        .shorten(&url, expire)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!();
    println!("{}", "✅ Short link ready".green().bold());
    println!("  URL:     {}", url.cyan());
    println!("  ID:      {}", id.bright_yellow().bold());
    if expire == 0 {
        println!("  Expires: {}", "never".bright_black());
    } else {
        println!("  Expires: in {} min", expire.to_string().bright_white());
    }
    println!();

    Ok(())
}

/// Prints the detail record of a short link.
async fn info(service: &LinkService<dyn KvStore>, id: &str) -> Result<()> {
    match service.short_link_info(id).await {
        Ok(detail) => {
            println!("{}", "🔗 Short link".bright_blue().bold());
            println!();
            println!("  ID:         {}", id.bright_yellow().bold());
            println!("  URL:        {}", detail.url.cyan());
            println!(
                "  Created:    {}",
                detail
                    .created_at
                    .format("%Y-%m-%d %H:%M:%S UTC")
                    .to_string()
                    .bright_black()
            );
            println!(
                "  Expiration: {}",
                match detail.expiration_in_minutes {
                    0 => "never".to_string(),
                    m => format!("{} min", m),
                }
            );
            println!();
            Ok(())
        }
        Err(AppError::NotFound { .. }) => {
            println!("{} {}", "❌ Unknown short link:".red(), id);
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to read link info: {}", e)),
    }
}

/// Prints the URL a short link resolves to.
async fn resolve(service: &LinkService<dyn KvStore>, id: &str) -> Result<()> {
    match service.un_shorten(id).await {
        Ok(url) => {
            println!("{} {} {}", id.bright_yellow().bold(), "→".bright_black(), url.cyan());
            Ok(())
        }
        Err(AppError::NotFound { .. }) => {
            println!("{} {}", "❌ Unknown short link:".red(), id);
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to resolve link: {}", e)),
    }
}

/// Dispatches store commands.
async fn handle_store_action(action: StoreAction, store: &dyn KvStore) -> Result<()> {
    match action {
        StoreAction::Check => {
            print!("Checking store connection... ");
            if store.health_check().await {
                println!("{}", "✅ OK".green().bold());
            } else {
                println!("{}", "❌ FAILED".red().bold());
                anyhow::bail!("Store ping failed");
            }
        }
        StoreAction::Counter => {
            let value = store
                .get(COUNTER_KEY)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to read counter: {}", e))?;

            match value {
                Some(v) => println!(
                    "  {}: {}",
                    COUNTER_KEY.bright_white(),
                    v.bright_yellow().bold()
                ),
                None => println!(
                    "  {}: {}",
                    COUNTER_KEY.bright_white(),
                    "not allocated yet".bright_black()
                ),
            }
        }
    }

    Ok(())
}
