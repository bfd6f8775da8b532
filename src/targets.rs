//! Target sources for batch discovery.
//!
//! A `TargetSource` yields raw target strings one at a time. Targets are not
//! validated here; normalization happens per target in `discover`, so one bad
//! line never stops a batch.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use log::warn;

use crate::error_handling::TargetSourceError;

/// Produces the next raw target, or `None` when exhausted.
pub trait TargetSource {
    /// Returns the next target string.
    fn next_target(&mut self) -> Option<String>;
}

impl<T: TargetSource + ?Sized> TargetSource for Box<T> {
    fn next_target(&mut self) -> Option<String> {
        (**self).next_target()
    }
}

/// One target per line. Blank lines and `#` comments are skipped.
pub struct LineTargetSource<R> {
    lines: io::Lines<R>,
}

impl<R: BufRead> LineTargetSource<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> TargetSource for LineTargetSource<R> {
    fn next_target(&mut self) -> Option<String> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                // The bad line has been consumed; keep reading.
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    warn!("Skipping unreadable input line: {e}");
                    continue;
                }
                Err(e) => {
                    warn!("Stopping target input after read error: {e}");
                    return None;
                }
            };
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            return Some(trimmed.to_string());
        }
    }
}

/// Targets taken from one column of a CSV file.
///
/// Rows too short to have the column, or with an empty cell there, are skipped.
pub struct CsvColumnSource<R> {
    records: csv::StringRecordsIntoIter<R>,
    column: usize,
}

impl<R: Read> CsvColumnSource<R> {
    /// Reads `column` (0-based) from `reader`, skipping a header row if `has_header`.
    pub fn new(reader: R, column: usize, has_header: bool) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(has_header)
            .flexible(true)
            .from_reader(reader);
        Self {
            records: reader.into_records(),
            column,
        }
    }
}

impl<R: Read> TargetSource for CsvColumnSource<R> {
    fn next_target(&mut self) -> Option<String> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(e) if e.is_io_error() => {
                    warn!("Stopping CSV target input after read error: {e}");
                    return None;
                }
                Err(e) => {
                    warn!("Skipping malformed CSV row: {e}");
                    continue;
                }
            };
            match record.get(self.column).map(str::trim) {
                Some(cell) if !cell.is_empty() => return Some(cell.to_string()),
                _ => continue,
            }
        }
    }
}

/// Targets from any in-memory iterator, e.g. a fixed list.
pub struct IterTargetSource<I> {
    iter: I,
}

impl<I> IterTargetSource<I>
where
    I: Iterator<Item = String>,
{
    /// Wraps anything that iterates over strings.
    pub fn new<T>(targets: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: targets.into_iter(),
        }
    }
}

impl<I> TargetSource for IterTargetSource<I>
where
    I: Iterator<Item = String>,
{
    fn next_target(&mut self) -> Option<String> {
        self.iter.next()
    }
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Opens the batch input named on the command line.
///
/// `-` reads lines from stdin; a `.csv` extension selects `CsvColumnSource`;
/// anything else is read as one target per line.
///
/// # Errors
///
/// Returns `TargetSourceError` if the file cannot be opened.
pub fn open_target_source(
    path: &Path,
    column: usize,
    has_header: bool,
) -> Result<Box<dyn TargetSource>, TargetSourceError> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(LineTargetSource::new(io::stdin().lock())));
    }

    let file = File::open(path).map_err(|source| TargetSourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    if is_csv(path) {
        Ok(Box::new(CsvColumnSource::new(file, column, has_header)))
    } else {
        Ok(Box::new(LineTargetSource::new(BufReader::new(file))))
    }
}
