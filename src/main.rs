//! fxharvest main entry point
//!
//! Command-line interface for the exchange-rate harvester.

use clap::Parser;
use fxharvest::config::load_config_with_hash;
use fxharvest::navigator::HttpNavigator;
use fxharvest::output::{print_report, CsvDatasetWriter, DatasetWriter};
use fxharvest::pipeline::harvest;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// fxharvest: a historical exchange-rate harvester
///
/// Crawls a reference site's index page for countries and their history
/// links, extracts dated rate observations from each linked page, and writes
/// the combined records to a CSV file.
#[derive(Parser, Debug)]
#[command(name = "fxharvest")]
#[command(version)]
#[command(about = "Harvest historical exchange rates into a CSV dataset", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be harvested without navigating
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (cfg, hash)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config, &config_hash);
        return Ok(());
    }

    handle_harvest(&config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("fxharvest=info,warn"),
            1 => EnvFilter::new("fxharvest=debug,info"),
            2 => EnvFilter::new("fxharvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows the plan
fn handle_dry_run(config: &fxharvest::Config, config_hash: &str) {
    println!("=== fxharvest Dry Run ===\n");

    println!("Source:");
    println!("  Index URL: {}", config.source.index_url);

    println!("\nSelectors:");
    println!("  Index table:  {}", config.selectors.index_table);
    println!("  Detail table: {}", config.selectors.detail_table);

    println!("\nLimits:");
    println!("  Max index rows:  {}", config.limits.max_index_rows);
    println!("  Max detail rows: {}", config.limits.max_detail_rows);
    println!("  Page pause:      {}ms", config.limits.page_pause_ms);
    println!(
        "  Readiness:       {}ms timeout, {}ms poll",
        config.limits.readiness_timeout_ms, config.limits.readiness_poll_ms
    );

    println!("\nOutput:");
    println!("  Dataset: {}", config.output.dataset_path);

    println!("\nConfig hash: {}", config_hash);
    println!("\n✓ Configuration is valid");
}

/// Handles the main harvest operation
async fn handle_harvest(config: &fxharvest::Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut navigator = HttpNavigator::from_config(&config.http)?;

    let outcome = match harvest(config, &mut navigator).await {
        Ok(outcome) => outcome,
        Err(e) => {
            // Index-level failure: nothing was harvested, write no file
            tracing::error!("Harvest failed: {}", e);
            return Err(e.into());
        }
    };

    let writer = CsvDatasetWriter::new(&config.output.dataset_path);
    writer.write_dataset(&outcome.dataset)?;

    print_report(&outcome);
    println!("\nData saved to {}", config.output.dataset_path);

    Ok(())
}
