//! Per-target and batch execution: discover, report, archive.

use std::io::{self, Write};

use log::warn;

use crate::archive::archive_pages;
use crate::config::{BATCH_SEPARATOR, EXIT_INVALID_INPUT};
use crate::discovery::discover;
use crate::error_handling::{DiscoveryError, ErrorType};
use crate::fetch::DiscoveryContext;
use crate::report::write_report;
use crate::targets::TargetSource;

/// What happened to a single target.
#[derive(Debug)]
pub enum TargetOutcome {
    /// Discovery ran and the report was written.
    Reported {
        /// Distinct sitemaps found
        sitemaps: usize,
        /// Pages collected (zero unless page collection is enabled)
        pages: usize,
        /// Pages written to the archive directory
        archived: usize,
    },
    /// The target could not be normalized; nothing was requested.
    Invalid(DiscoveryError),
}

impl TargetOutcome {
    /// Process exit code for a single-target run.
    ///
    /// Only an invalid target is a failure; finding nothing is a normal result.
    pub fn exit_code(&self) -> i32 {
        match self {
            TargetOutcome::Reported { .. } => 0,
            TargetOutcome::Invalid(_) => EXIT_INVALID_INPUT,
        }
    }
}

/// Totals for a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Targets read from the source
    pub targets: usize,
    /// Targets rejected as invalid URLs
    pub invalid: usize,
    /// Distinct sitemaps found, summed over targets
    pub sitemaps: usize,
    /// Pages collected, summed over targets
    pub pages: usize,
}

/// Runs discovery for one target and writes its report to `out`.
///
/// When an archive directory is configured, each collected page is saved and
/// a line is written per saved page. An invalid target writes nothing.
///
/// # Errors
///
/// Only fails if writing to `out` fails.
pub async fn process_target<W: Write>(
    target: &str,
    ctx: &DiscoveryContext,
    out: &mut W,
) -> io::Result<TargetOutcome> {
    let result = match discover(target, ctx).await {
        Ok(result) => result,
        Err(e) => {
            ctx.stats.increment_error(ErrorType::InvalidTargetUrl);
            return Ok(TargetOutcome::Invalid(e));
        }
    };

    write_report(out, &result, ctx.config.collect_pages)?;

    let mut archived = 0;
    if let Some(dir) = &ctx.config.archive_dir {
        let saved = archive_pages(ctx, &result.pages, dir).await;
        for page in &saved {
            writeln!(out, "Page saved: {page}")?;
        }
        writeln!(out, "Done saving {} pages.", saved.len())?;
        archived = saved.len();
    }
    out.flush()?;

    Ok(TargetOutcome::Reported {
        sitemaps: result.sitemaps.len(),
        pages: result.pages.len(),
        archived,
    })
}

/// Runs every target from `source` in order, one at a time.
///
/// Each target's report is preceded by a separator line. Invalid targets are
/// reported inline and skipped.
///
/// # Errors
///
/// Only fails if writing to `out` fails.
pub async fn run_batch<S, W>(
    source: &mut S,
    ctx: &DiscoveryContext,
    out: &mut W,
) -> io::Result<BatchSummary>
where
    S: TargetSource + ?Sized,
    W: Write,
{
    let mut summary = BatchSummary::default();

    while let Some(target) = source.next_target() {
        summary.targets += 1;
        writeln!(out, "{BATCH_SEPARATOR}")?;

        match process_target(&target, ctx, out).await? {
            TargetOutcome::Reported {
                sitemaps, pages, ..
            } => {
                summary.sitemaps += sitemaps;
                summary.pages += pages;
            }
            TargetOutcome::Invalid(e) => {
                summary.invalid += 1;
                warn!("Skipping target: {e}");
                writeln!(out, "{e}")?;
            }
        }
    }

    Ok(summary)
}
