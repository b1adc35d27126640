//! Talkdex CLI - Command-line interface for talkdex
//!
//! Regenerates the talk index documents and the statistics report of a talks
//! repository. With no arguments it updates the index documents of the
//! repository in the current directory.

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use talkdex_core::{
    init_logging, log_operation_error, log_operation_start, log_operation_success, LoggingConfig,
    TalkdexConfig, TalkdexError,
};
use talkdex_report::TalkIndexGenerator;
use tracing::info;

#[derive(Parser)]
#[command(name = "talkdex")]
#[command(about = "Keeps the talk index and statistics of a talks repository up to date")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Repository root (defaults to the current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Configuration file path (defaults to talkdex.toml in the root)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Reference date for past/upcoming classification (YYYY-MM-DD, defaults to today)
    #[arg(long, global = true, value_parser = parse_reference_date)]
    today: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the index section of every language document (default)
    Index,
    /// Regenerate the standalone statistics report and print it
    Stats,
}

fn parse_reference_date(value: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.format("%Y-%m-%d").to_string())
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging_config = LoggingConfig::default();
    if cli.verbose {
        logging_config.level = "debug".to_string();
    }
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("❌ Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(talkdex_error) = e.downcast_ref::<TalkdexError>() {
                talkdex_error.log();
            }
            eprintln!("❌ Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().context("Cannot determine the current directory")?,
    };
    let config = TalkdexConfig::load(&root, cli.config.as_deref())?;
    let today = cli
        .today
        .unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string());

    info!("Starting talkdex v{} (reference date {})", env!("CARGO_PKG_VERSION"), today);
    let generator = TalkIndexGenerator::new(&root, config, &today);

    match cli.command.unwrap_or(Commands::Index) {
        Commands::Index => handle_index(&generator).await,
        Commands::Stats => handle_stats(&generator).await,
    }
}

async fn handle_index(generator: &TalkIndexGenerator) -> anyhow::Result<()> {
    log_operation_start!("generate_index", root = %generator.root().display());
    println!("🔍 Scanning for talks...");

    let outcome = generator.generate_index().await.map_err(|e| {
        log_operation_error!("generate_index", e);
        e
    })?;

    println!("📚 Found {} talks", outcome.talks);
    if outcome.skipped > 0 {
        println!("⚠️  Skipped {} entries (see warnings above)", outcome.skipped);
    }
    for document in &outcome.documents {
        let shown = document.strip_prefix(generator.root()).unwrap_or(document);
        println!("✅ Updated {}", shown.display());
    }
    println!("\n✨ Index generation complete!");

    log_operation_success!("generate_index", talks = outcome.talks);
    Ok(())
}

async fn handle_stats(generator: &TalkIndexGenerator) -> anyhow::Result<()> {
    log_operation_start!("generate_report", root = %generator.root().display());

    let report = generator.generate_report().await.map_err(|e| {
        log_operation_error!("generate_report", e);
        e
    })?;
    print!("{}", report);

    log_operation_success!("generate_report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_defaults_to_index() {
        let cli = Cli::try_parse_from(["talkdex"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.today.is_none());
    }

    #[test]
    fn test_reference_date_validation() {
        let cli = Cli::try_parse_from(["talkdex", "stats", "--today", "2025-06-01"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Stats)));
        assert_eq!(cli.today.as_deref(), Some("2025-06-01"));

        assert!(Cli::try_parse_from(["talkdex", "--today", "2025-13-01"]).is_err());
        assert!(Cli::try_parse_from(["talkdex", "--today", "June 1st"]).is_err());
    }
}
