//! Zot-Scrape command-line interface
//!
//! Drives the content-processing core against local inputs: validating URLs
//! against the trap policy, and running saved response bodies through the
//! full pipeline. The network fetch layer lives elsewhere; this binary only
//! consumes bodies that are already on disk.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use zot_scrape::config::{load_config, Config};
use zot_scrape::output::write_reports;
use zot_scrape::policy::is_valid;
use zot_scrape::scraper::{process, FetchedResponse};
use zot_scrape::state::CrawlState;
use zot_scrape::text::StopwordSet;

/// Zot-Scrape: content-processing core for a focused academic crawler
#[derive(Parser, Debug)]
#[command(name = "zot-scrape")]
#[command(version = "1.0.0")]
#[command(about = "Link extraction, trap filtering, and text analysis for a focused crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate URLs against the trap-avoidance policy
    Check {
        /// URLs to validate
        #[arg(value_name = "URL", required = true)]
        urls: Vec<String>,
    },

    /// Run saved response bodies through the processing pipeline
    Process {
        /// Files containing response bodies (HTML or XML)
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// URL the bodies were fetched from; file names are appended when
        /// several files are given
        #[arg(long, value_name = "URL")]
        url: String,

        /// Declared Content-Type of the bodies
        #[arg(long, value_name = "TYPE", default_value = "text/html")]
        content_type: String,

        /// Write the word-frequency, URL-list, and subdomain reports
        #[arg(long)]
        export: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).context("failed to load configuration")?
        }
        None => Config::default(),
    };

    match cli.command {
        Command::Check { urls } => handle_check(&urls, &config),
        Command::Process {
            files,
            url,
            content_type,
            export,
        } => handle_process(&files, &url, &content_type, export, &config),
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("zot_scrape=info,warn"),
            1 => EnvFilter::new("zot_scrape=debug,info"),
            2 => EnvFilter::new("zot_scrape=trace,debug"),
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

/// Handles the `check` command: prints one verdict per URL
fn handle_check(urls: &[String], config: &Config) -> anyhow::Result<()> {
    for url in urls {
        let verdict = if is_valid(url, &config.scope) {
            "valid"
        } else {
            "invalid"
        };
        println!("{:8} {}", verdict, url);
    }
    Ok(())
}

/// Handles the `process` command: runs bodies through the full pipeline
fn handle_process(
    files: &[PathBuf],
    base_url: &str,
    content_type: &str,
    export: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let stopwords = StopwordSet::load(std::path::Path::new(&config.resources.stopwords_path))
        .context("stopword set is required before processing")?;
    tracing::info!("Loaded {} stopwords", stopwords.len());

    let mut state = CrawlState::new(&config.limits);

    for file in files {
        let body = std::fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?;

        let page_url = if files.len() == 1 {
            base_url.to_string()
        } else {
            let name = file.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
            format!("{}/{}", base_url.trim_end_matches('/'), name)
        };

        let response = FetchedResponse::ok(&page_url, content_type, &body);
        let links = process(&page_url, &response, &mut state, &stopwords, config);

        println!("{} -> {} accepted links", page_url, links.len());
        for link in &links {
            println!("  {}", link);
        }
    }

    println!();
    println!("Unique URLs:  {}", state.unique_urls.len());
    println!("Vocabulary:   {} tokens", state.word_frequencies.len());
    if let Some(url) = &state.longest_page.url {
        println!("Longest page: {} ({} words)", url, state.longest_page.words);
    }

    if export {
        write_reports(&state, config)?;
        println!("Reports written to {}", config.output.word_frequencies_path);
    }

    Ok(())
}
