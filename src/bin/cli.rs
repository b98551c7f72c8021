//! Exhibition CLI
//!
//! Authoring helpers for the exhibition site:
//! - Check a content document for load failures and empty fields
//! - List the gallery filter buttons
//! - Work out which chapter a scroll position activates
//! - Check a running preview server
//! - Generate the default config

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use exhibition::config::{generate_default_config, LoggingConfig};
use exhibition::content::{lint, load_logged, source_for};
use exhibition::gallery::CategoryFilter;
use exhibition::logging::init_logging;
use exhibition::scroll::{active_index, ScrollFrame};

#[derive(Parser)]
#[command(name = "exhibition")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Authoring tools for the exhibition site")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,

    /// Log level for diagnostics on stderr
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a content document and report empty fields
    Check {
        /// Path or http(s) URL of db.json
        location: String,
    },

    /// List gallery filter buttons in display order
    Categories {
        /// Path or http(s) URL of db.json
        location: String,
    },

    /// Show which chapter is active at a scroll position
    Activate {
        /// Window vertical scroll offset in px
        #[arg(long)]
        scroll_y: f64,
        /// Viewport height in px
        #[arg(long, default_value = "900")]
        viewport: f64,
        /// Chapter top offsets in px, in display order
        #[arg(required = true)]
        tops: Vec<f64>,
    },

    /// Query a running preview server
    Status {
        /// Preview server URL
        #[arg(long, default_value = "http://127.0.0.1:8084")]
        server_url: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&LoggingConfig {
        level: cli.log_level.clone(),
        ..Default::default()
    });

    match cli.command {
        Commands::Check { location } => {
            let source = source_for(&location);
            let doc = match load_logged(source.as_ref()).await {
                Ok(doc) => doc,
                Err(e) => {
                    eprintln!("Could not load {}: {}", location, e);
                    return Ok(ExitCode::FAILURE);
                }
            };
            let warnings = lint(&doc);

            if cli.format == "json" {
                let body = serde_json::json!({
                    "chapters": doc.chapters.len(),
                    "artworks": doc.artworks.len(),
                    "warnings": warnings.iter().map(ToString::to_string).collect::<Vec<_>>(),
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                println!("Chapters: {}", doc.chapters.len());
                println!("Artworks: {}", doc.artworks.len());
                if warnings.is_empty() {
                    println!("No empty fields.");
                } else {
                    println!();
                    println!("Fields that will render empty:");
                    for warning in &warnings {
                        println!("  {}", warning);
                    }
                }
            }
        }

        Commands::Categories { location } => {
            let source = source_for(&location);
            let doc = match load_logged(source.as_ref()).await {
                Ok(doc) => doc,
                Err(e) => {
                    eprintln!("Could not load {}: {}", location, e);
                    return Ok(ExitCode::FAILURE);
                }
            };
            let filter = CategoryFilter::from_artworks(&doc.artworks);

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(filter.categories())?);
            } else {
                println!("{:<24} {}", "Category", "Artworks");
                println!("{}", "-".repeat(34));
                for category in filter.categories() {
                    let mut probe = filter.clone();
                    probe.select(category);
                    println!(
                        "{:<24} {}",
                        category,
                        probe.visible_indices(&doc.artworks).len()
                    );
                }
            }
        }

        Commands::Activate {
            scroll_y,
            viewport,
            tops,
        } => {
            let frame = ScrollFrame::new(scroll_y, viewport);
            let active = active_index(frame, &tops);

            if cli.format == "json" {
                let body = serde_json::json!({
                    "scroll_pos": frame.scroll_pos(),
                    "active": active,
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                println!("Look-ahead point: {:.1}px", frame.scroll_pos());
                match active {
                    Some(index) => println!("Active chapter: {} (top {:.1}px)", index, tops[index]),
                    None => println!("No chapter reached yet"),
                }
            }
        }

        Commands::Status { server_url } => {
            let client = reqwest::Client::new();
            let response = client
                .get(format!("{}/health", server_url.trim_end_matches('/')))
                .send()
                .await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    println!("Exhibition v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!("Status: {}", health["status"].as_str().unwrap_or("unknown"));
                    println!("Content: {}", health["content"].as_str().unwrap_or("unknown"));
                    println!("  Chapters: {}", health["chapters"].as_u64().unwrap_or(0));
                    println!("  Artworks: {}", health["artworks"].as_u64().unwrap_or(0));
                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!();
                        println!("Uptime: {}s", uptime);
                    }
                }
                Ok(resp) => {
                    eprintln!("Preview server returned error: {}", resp.status());
                    return Ok(ExitCode::FAILURE);
                }
                Err(e) => {
                    eprintln!("Cannot connect to preview server at {}", server_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Start it with:");
                    eprintln!("  cargo run --bin exhibition");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, config)?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", config),
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
