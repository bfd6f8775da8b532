//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `sitemap_finder` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Choosing between a single target, an interactive prompt, and batch input
//! - Exit codes
//!
//! All core functionality is implemented in the library crate.

use std::io::{self, BufRead, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use sitemap_finder::config::EXIT_INVALID_INPUT;
use sitemap_finder::initialization::init_logger_with;
use sitemap_finder::{
    open_target_source, process_target, run_batch, Config, DiscoveryContext, Opt, TargetOutcome,
};

const TARGET_PROMPT: &str = "Enter the website URL (e.g., https://example.com): ";

/// Asks for a target on stdin.
fn prompt_for_target() -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{TARGET_PROMPT}")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read target from stdin")?;
    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();
    let config = Config::from(&opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let ctx = DiscoveryContext::from_config(config).context("Failed to initialize HTTP client")?;
    let mut stdout = io::stdout();

    if let Some(input) = &opt.input {
        let mut source = match open_target_source(input, opt.column, opt.has_header) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("sitemap_finder error: {e}");
                process::exit(EXIT_INVALID_INPUT);
            }
        };
        let summary = run_batch(&mut source, &ctx, &mut stdout)
            .await
            .context("Failed to write report")?;
        log::info!(
            "Processed {} target(s) ({} invalid): {} sitemap(s), {} page(s)",
            summary.targets,
            summary.invalid,
            summary.sitemaps,
            summary.pages
        );
        ctx.stats.log_summary();
        return Ok(());
    }

    let target = match &opt.target {
        Some(target) => target.clone(),
        None => prompt_for_target()?,
    };

    let outcome = process_target(&target, &ctx, &mut stdout)
        .await
        .context("Failed to write report")?;
    ctx.stats.log_summary();

    if let TargetOutcome::Invalid(e) = &outcome {
        eprintln!("{e}");
    }
    let code = outcome.exit_code();
    if code != 0 {
        process::exit(code);
    }
    Ok(())
}
