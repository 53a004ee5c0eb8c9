//! Command-line driver for the artwork table.
//!
//! Stands in for a table UI: one command per control the table exposes.
//!
//! # Usage
//!
//! ```bash
//! # Show the second page with 12 rows per page
//! cargo run -- page --page 2 --rows 12
//!
//! # Select the first 20 artworks across pages
//! cargo run -- select 20
//!
//! # Prompt for the number of rows to select
//! cargo run -- select
//! ```
//!
//! # Environment Variables
//!
//! See [`artwork_picker::config`] for the full list.

use artwork_picker::application::services::SelectionService;
use artwork_picker::application::table::{TableController, UpdateOutcome};
use artwork_picker::config::{self, Config};
use artwork_picker::domain::entities::Artwork;
use artwork_picker::domain::pagination::PageEvent;
use artwork_picker::infrastructure::http::HttpArtworkRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Browse the artwork catalogue and select rows across pages.
#[derive(Parser)]
#[command(name = "artworks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log the loaded configuration before running
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one page of artworks
    Page {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Rows per page (defaults to DEFAULT_PAGE_SIZE)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=100))]
        rows: Option<u32>,
    },

    /// Select the first N artworks across pages
    Select {
        /// Number of rows to select; prompted for when omitted
        count: Option<String>,

        /// Page size used while accumulating (defaults to DEFAULT_PAGE_SIZE)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=100))]
        rows: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    init_tracing(&config);
    if cli.verbose {
        config.print_summary();
    }

    let repository = HttpArtworkRepository::from_config(&config)
        .context("Failed to build artworks client")?;
    let service = Arc::new(SelectionService::new(Arc::new(repository)));

    match cli.command {
        Commands::Page { page, rows } => {
            let rows = rows.unwrap_or(config.default_page_size);
            show_page(TableController::new(service, rows), page, rows).await?
        }
        Commands::Select { count, rows } => {
            let rows = rows.unwrap_or(config.default_page_size);
            select_rows(TableController::new(service, rows), count).await?
        }
    }

    Ok(())
}

/// Installs the `tracing` subscriber on stderr, text or JSON per `LOG_FORMAT`.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Loads and prints one page.
async fn show_page(
    controller: TableController<HttpArtworkRepository>,
    page: u32,
    rows: u32,
) -> Result<()> {
    let outcome = controller
        .apply_page_event(PageEvent::new(Some(page - 1), rows))
        .await
        .context("Failed to load artworks page")?;

    if outcome != UpdateOutcome::Applied {
        anyhow::bail!("Page {page} with {rows} rows was not loaded");
    }

    let state = controller.snapshot().await;
    println!("{}", "🖼  Artworks".bright_blue().bold());
    println!();

    if state.records.is_empty() {
        println!("{}", "  No artworks on this page".yellow());
        return Ok(());
    }

    print_artworks(&state.records);

    let first = state.first_record_offset() + 1;
    let last = state.first_record_offset() + state.records.len() as u64;
    println!();
    println!(
        "  Showing {}-{} of {} (page {}, {} rows per page)",
        first.to_string().cyan(),
        last.to_string().cyan(),
        state.total_records.to_string().cyan(),
        state.page,
        state.rows
    );

    Ok(())
}

/// Runs a "select first N" and prints the selection.
async fn select_rows(
    controller: TableController<HttpArtworkRepository>,
    count: Option<String>,
) -> Result<()> {
    let input = match count {
        Some(c) => c,
        None => Input::new()
            .with_prompt("Enter number of rows to auto select")
            .with_initial_text("20")
            .interact_text()?,
    };

    controller.set_input(input.clone()).await;
    let outcome = controller
        .apply_selection()
        .await
        .context("Failed to select artworks")?;

    if outcome == UpdateOutcome::Ignored {
        println!(
            "{}",
            format!("⚠️  '{}' is not a positive number, nothing selected", input.trim()).yellow()
        );
        return Ok(());
    }

    let state = controller.snapshot().await;
    println!(
        "{}",
        format!("✅ Selected {} artworks", state.selection.len())
            .green()
            .bold()
    );
    println!();
    print_artworks(state.selection.as_slice());

    Ok(())
}

/// Prints artworks as an aligned table.
fn print_artworks(artworks: &[Artwork]) {
    println!(
        "  {:<8} {:<20} {:<36} {:<12} {:<10} {:<10}",
        "ID".bright_white().bold(),
        "Place of Origin".bright_white().bold(),
        "Artist".bright_white().bold(),
        "Inscriptions".bright_white().bold(),
        "Date Start".bright_white().bold(),
        "Date End".bright_white().bold()
    );
    println!("  {}", "─".repeat(100).bright_black());

    for artwork in artworks {
        let artist = artwork.artist_display.lines().next().unwrap_or_default();
        let inscriptions = if artwork.has_inscriptions() { "yes" } else { "-" };

        println!(
            "  {:<8} {:<20} {:<36} {:<12} {:<10} {:<10}",
            artwork.id,
            truncate(&artwork.place_of_origin, 20),
            truncate(artist, 36),
            inscriptions,
            artwork.date_start,
            artwork.date_end
        );
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
