//! internet-search CLI - demo front-end for the federated search library
//!
//! API keys and tunables are resolved from INTERNET_SEARCH_* environment
//! variables, the same way a host application would supply them.

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::*;
use internet_search::{
    fanout::{search_all, FanoutOptions},
    types::items_to_json,
    ProviderKind, SearchConfig,
};

#[derive(Parser)]
#[command(name = "internet-search")]
#[command(about = "Federated multi-provider internet search")]
#[command(version)]
struct Cli {
    /// Search query
    query: String,

    /// Restrict to a comma-separated provider subset (exa, tavily, linkup)
    #[arg(short, long)]
    providers: Option<String>,

    /// Emit raw JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = SearchConfig::from_env().context("failed to resolve configuration")?;

    let providers = match &cli.providers {
        Some(raw) => Some(
            raw.split(',')
                .map(|name| name.trim().parse::<ProviderKind>())
                .collect::<Result<Vec<_>, _>>()
                .context("invalid provider list")?,
        ),
        None => None,
    };

    let options = FanoutOptions {
        query: cli.query.clone(),
        api_keys: config.api_keys(),
        providers,
        max_results_per_provider: config.max_results_per_provider,
        max_summary_chars: config.max_summary_chars,
        ..Default::default()
    };

    let items = match search_all(&options).await {
        Ok(items) => items,
        Err(error) => bail!("search failed: {error}"),
    };

    if cli.json {
        println!("{}", items_to_json(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("{}", "No results.".yellow());
        return Ok(());
    }

    println!(
        "{} {} {}",
        "Found".green().bold(),
        items.len().to_string().green().bold(),
        "results".green().bold()
    );
    for (i, item) in items.iter().enumerate() {
        println!();
        println!(
            "{}. {} {}",
            i + 1,
            item.metadata.file_name.bold(),
            format!("[{}]", item.metadata.source).cyan()
        );
        if !item.metadata.url.is_empty() {
            println!("   {}", item.metadata.url.blue().underline());
        }
        if let Some(date) = &item.metadata.published_date {
            println!("   {}", date.dimmed());
        }
        if !item.metadata.summary.is_empty() {
            println!("   {}", item.metadata.summary);
        }
    }

    Ok(())
}
