//! Product CSV loader.
//!
//! Reads the product export, skips its header line, and fills two lookups
//! keyed by product id: raw price strings and difficulty labels. Nothing in
//! here is fatal; every problem becomes a [`LoadNotice`].

use anyhow::{Context, Result, bail};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, error, info, warn};

use crate::ordered_map::OrderedMap;

/// Default number of accepted rows to read.
pub const DEFAULT_LINE_LIMIT: usize = 1000;

/// Rows with fewer columns than this are skipped.
pub const MIN_COLUMNS: usize = 6;

const PRICE_COLUMN: usize = 0;
const PRODUCT_ID_COLUMN: usize = 4;
const DIFFICULTY_COLUMN: usize = 5;

/// A non-fatal problem met while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadNotice {
    MissingFile { path: String },
    MalformedLine { line: String },
    ReadFailed { message: String },
}

impl fmt::Display for LoadNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadNotice::MissingFile { path } => {
                write!(f, "Error: The file {path} does not exist.")
            }
            LoadNotice::MalformedLine { line } => {
                write!(f, "Warning: Skipping malformed line: {line}")
            }
            LoadNotice::ReadFailed { message } => {
                write!(f, "An error occurred while reading the file: {message}")
            }
        }
    }
}

/// The two lookups built from one file, plus whatever went wrong on the way.
///
/// `prices` and `difficulties` are written from the same accepted row, so
/// their key sets are always identical.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductData {
    pub prices: OrderedMap<String>,
    pub difficulties: OrderedMap<String>,
    pub notices: Vec<LoadNotice>,
}

impl ProductData {
    /// Number of distinct product ids loaded.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Count of malformed lines that were skipped.
    pub fn malformed_lines(&self) -> usize {
        self.notices
            .iter()
            .filter(|n| matches!(n, LoadNotice::MalformedLine { .. }))
            .count()
    }

    fn record(&mut self, product_id: &str, price: &str, difficulty: &str) {
        self.prices.insert(product_id.to_string(), price.to_string());
        self.difficulties
            .insert(product_id.to_string(), difficulty.to_string());
    }

    fn notice(&mut self, notice: LoadNotice) {
        match &notice {
            LoadNotice::MalformedLine { .. } => warn!("{notice}"),
            LoadNotice::MissingFile { .. } | LoadNotice::ReadFailed { .. } => error!("{notice}"),
        }
        self.notices.push(notice);
    }
}

/// Loads up to `limit` accepted rows from the CSV at `path`.
///
/// A missing file yields empty lookups and one [`LoadNotice::MissingFile`].
/// Any other read failure stops the read and keeps the rows accepted so far.
/// Malformed rows are reported and do not count toward `limit`.
#[tracing::instrument(skip(path), fields(file = %path.display()))]
pub fn load_products(path: &Path, limit: usize) -> ProductData {
    let mut data = ProductData::default();

    if !path.exists() {
        data.notice(LoadNotice::MissingFile {
            path: path.display().to_string(),
        });
        return data;
    }

    if let Err(e) = read_rows(path, limit, &mut data) {
        data.notice(LoadNotice::ReadFailed {
            message: format!("{e:#}"),
        });
    }

    info!(
        products = data.len(),
        malformed = data.malformed_lines(),
        "Product data loaded"
    );
    data
}

fn read_rows(path: &Path, limit: usize, data: &mut ProductData) -> Result<()> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut lines = BufReader::new(file).lines();

    // The first physical line is the header, even when it is blank.
    if lines.next().transpose()?.is_none() {
        bail!("{} has no header line", path.display());
    }

    let mut accepted = 0usize;
    for line in lines {
        if accepted >= limit {
            debug!(limit, "Line limit reached");
            break;
        }

        let line = line?;
        let line = line.trim();
        let tokens: Vec<&str> = line.split(',').collect();
        if tokens.len() < MIN_COLUMNS {
            data.notice(LoadNotice::MalformedLine {
                line: line.to_string(),
            });
            continue;
        }

        data.record(
            tokens[PRODUCT_ID_COLUMN],
            tokens[PRICE_COLUMN],
            tokens[DIFFICULTY_COLUMN],
        );
        accepted += 1;
    }

    Ok(())
}
