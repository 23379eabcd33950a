//! Medboard CLI
//!
//! Command-line interface for console operations over the running API:
//! - List and search any collection
//! - Send an SMS to the outbox
//! - Check server status
//! - Export a collection
//! - Generate a default config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "medboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Hospital management console CLI")]
#[command(
    long_about = "Medboard is a hospital management console.\nThis CLI talks to a running medboard-api instance."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8086", global = true)]
    pub api_url: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List a collection ("doctors", "patients", "smart-cards", ...)
    List {
        /// Collection path segment as mounted under /api/v1/admin
        collection: String,
        /// Case-insensitive substring filter
        #[arg(short, long)]
        query: Option<String>,
        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Append an SMS to the outbox (nothing is delivered)
    Sms {
        /// Recipient phone number
        recipient: String,
        /// Message body
        body: String,
    },

    /// Show server status
    Status,

    /// Export a collection
    Export {
        /// Collection name ("doctors", "smart_cards", ...)
        collection: String,
        /// Format (json, csv)
        #[arg(short, long, default_value = "json")]
        format: String,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::List {
            collection,
            query,
            json,
        } => {
            let mut url = format!("{}/api/v1/admin/{}", cli.api_url, collection);
            if let Some(q) = &query {
                url = format!("{}?q={}", url, q);
            }

            let response = client
                .get(&url)
                .send()
                .await
                .context("request failed - is medboard-api running?")?;
            if !response.status().is_success() {
                bail!("server returned {}", response.status());
            }

            let body: serde_json::Value = response.json().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                print_table(&body);
            }
        }

        Commands::Sms { recipient, body } => {
            let response = client
                .post(format!("{}/api/v1/admin/sms", cli.api_url))
                .json(&serde_json::json!({ "recipient": recipient, "body": body }))
                .send()
                .await
                .context("request failed - is medboard-api running?")?;
            if !response.status().is_success() {
                bail!("server returned {}", response.status());
            }
            let stored: serde_json::Value = response.json().await?;
            println!("Appended to outbox with id {}", stored["id"]);
        }

        Commands::Status => {
            let response = client
                .get(format!("{}/health", cli.api_url))
                .send()
                .await
                .context("request failed - is medboard-api running?")?;
            let health: serde_json::Value = response.json().await?;
            println!(
                "status: {}  records: {}  uptime: {}s  version: {}",
                health["status"].as_str().unwrap_or("unknown"),
                health["records"],
                health["uptime_seconds"],
                health["version"].as_str().unwrap_or("unknown"),
            );
        }

        Commands::Export {
            collection,
            format,
            output,
        } => {
            let url = format!(
                "{}/api/v1/admin/export?collection={}&format={}",
                cli.api_url, collection, format
            );
            let response = client
                .get(&url)
                .send()
                .await
                .context("request failed - is medboard-api running?")?;
            if !response.status().is_success() {
                bail!("server returned {}", response.status());
            }
            let body = response.text().await?;
            match output {
                Some(path) => {
                    std::fs::write(&path, body)
                        .with_context(|| format!("failed to write {:?}", path))?;
                    println!("Exported {} to {:?}", collection, path);
                }
                None => println!("{}", body),
            }
        }

        Commands::Config { output } => {
            let content = medboard::config::generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("failed to write {:?}", path))?;
                    println!("Wrote default config to {:?}", path);
                }
                None => println!("{}", content),
            }
        }
    }

    Ok(())
}

/// Print a list response as a plain table: header from the first record's
/// keys, one row per record.
fn print_table(body: &serde_json::Value) {
    let items = match body.get("items").and_then(|i| i.as_array()) {
        Some(items) if !items.is_empty() => items,
        _ => {
            println!("(no records)");
            return;
        }
    };

    let keys: Vec<&str> = items[0]
        .as_object()
        .map(|obj| obj.keys().map(String::as_str).collect())
        .unwrap_or_default();

    println!("{}", keys.join(" | "));
    for item in items {
        let row: Vec<String> = keys
            .iter()
            .map(|k| match &item[*k] {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect();
        println!("{}", row.join(" | "));
    }
    println!("({} records)", items.len());
}
