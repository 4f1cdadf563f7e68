// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! photo-catalog: GitHub photo directory to gallery catalog
//!
//! Fetches the configured directory listing, derives metadata for every image
//! and prints the catalog, falling back to a static dataset when the live
//! listing is unavailable.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use photo_catalog::classify::{detect_color, detect_theme, generate_tags};
use photo_catalog::config::AppConfig;
use photo_catalog::{
    derive_title, load_fallback, CatalogError, GitHubClient, PhotoCatalog, PhotoRecord, Result,
};

/// photo-catalog CLI - build a photo catalog from a GitHub directory
#[derive(Parser, Debug)]
#[command(name = "photo-catalog")]
#[command(version)]
#[command(about = "Build a photo gallery catalog from a GitHub directory listing")]
#[command(long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file (JSON format)
    #[arg(short, long, default_value = "config.json", global = true)]
    config: PathBuf,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable trace logging (most verbose)
    #[arg(long, global = true)]
    trace: bool,

    /// Output format for results
    #[arg(long, global = true, default_value = "text", value_parser = ["text", "json", "jsonl"])]
    format: String,

    /// Suppress non-essential output (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch the listing and print the photo catalog
    Fetch {
        /// JSON dataset to use when the listing cannot be loaded (overrides config)
        #[arg(long)]
        fallback: Option<PathBuf>,

        /// Write the catalog to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the metadata derived from filenames, without any network access
    Classify {
        /// Filenames to classify
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Generate default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config.json")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate configuration file
    Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };

    // Logs go to stderr so catalog output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load(&cli.config)?;

    match cli.command {
        Some(Commands::Fetch { fallback, output }) => {
            run_fetch(config, fallback, output, &cli.format).await
        }
        Some(Commands::Classify { names }) => {
            run_classify(&names, &cli.format)
        }
        Some(Commands::Config { action }) => {
            run_config_command(config, action, &cli.config)
        }
        None => {
            run_fetch(config, None, None, &cli.format).await
        }
    }
}

/// Load the catalog, falling back to the static dataset, and emit it
async fn run_fetch(
    config: AppConfig,
    fallback_override: Option<PathBuf>,
    output: Option<PathBuf>,
    format: &str,
) -> Result<()> {
    let client = GitHubClient::new(&config)?;
    info!("Fetching listing: {}", client.listing_url());

    let mut catalog = PhotoCatalog::new();
    if catalog.refresh(&client, &config).await.is_none() {
        let fallback = fallback_override.or_else(|| config.fallback.as_ref().map(PathBuf::from));
        match fallback {
            Some(path) => {
                warn!("Live listing unavailable, using fallback dataset {:?}", path);
                let records = load_fallback(&path)?;
                if records.is_empty() {
                    return Err(CatalogError::Config(format!(
                        "No photos could be loaded and fallback dataset {:?} is empty",
                        path
                    )));
                }
                catalog.extend_fallback(records);
            }
            None => {
                return Err(CatalogError::Config(
                    "No photos could be loaded and no fallback dataset is configured".to_string(),
                ));
            }
        }
    }

    let rendered = render_records(catalog.records(), format)?;
    match output {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            info!("Wrote {} photos to {:?}", catalog.len(), path);
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Format records for output
fn render_records(records: &[PhotoRecord], format: &str) -> Result<String> {
    let mut out = String::new();

    match format {
        "json" => {
            out.push_str(&serde_json::to_string_pretty(records)?);
            out.push('\n');
        }
        "jsonl" => {
            for record in records {
                out.push_str(&serde_json::to_string(record)?);
                out.push('\n');
            }
        }
        _ => {
            for record in records {
                out.push_str(&format!(
                    "{:>4}  {}  [{}/{}]  {}\n      {}\n",
                    record.id,
                    record.title,
                    record.theme,
                    record.color,
                    record.tags.join(", "),
                    record.src,
                ));
            }
            out.push_str(&format!("\n{} photos\n", records.len()));
        }
    }

    Ok(out)
}

/// Run the filename heuristics on the given names
fn run_classify(names: &[String], format: &str) -> Result<()> {
    let results: Vec<serde_json::Value> = names
        .iter()
        .map(|name| {
            let title = derive_title(name);
            let text = title.to_lowercase();
            serde_json::json!({
                "filename": name,
                "title": title,
                "theme": detect_theme(&text),
                "color": detect_color(&text),
                "tags": generate_tags(&text),
            })
        })
        .collect();

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&results)?),
        "jsonl" => {
            for line in &results {
                println!("{}", serde_json::to_string(line)?);
            }
        }
        _ => {
            for r in &results {
                let tags = r["tags"]
                    .as_array()
                    .map(|tags| {
                        tags.iter()
                            .filter_map(|t| t.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    })
                    .unwrap_or_default();
                println!(
                    "{}: {} [theme: {}, color: {}, tags: {}]",
                    r["filename"].as_str().unwrap_or_default(),
                    r["title"].as_str().unwrap_or_default(),
                    r["theme"].as_str().unwrap_or_default(),
                    r["color"].as_str().unwrap_or_default(),
                    tags,
                );
            }
        }
    }

    Ok(())
}

/// Run config commands
fn run_config_command(config: AppConfig, action: ConfigCommands, config_path: &Path) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            let json = serde_json::to_string_pretty(&config)?;
            println!("{}", json);
        }
        ConfigCommands::Generate { output, force } => {
            if output.exists() && !force {
                return Err(CatalogError::Config(format!(
                    "{:?} already exists. Use --force to overwrite", output
                )));
            }
            AppConfig::default().save(&output)?;
            println!("Generated config at {:?}", output);
        }
        ConfigCommands::Validate => {
            config.validate()?;
            println!("Configuration at {:?} is valid", config_path);
            println!("  Listing: {}", config.source.listing_url());
            println!("  Branch: {}", config.source.branch);
            println!("  Formats: {}", config.image.formats.join(", "));
            println!("  Fallback: {}", config.fallback.as_deref().unwrap_or("-"));
        }
    }

    Ok(())
}
