//! Console report for loaded products and price statistics.
//!
//! Writers are generic so the report can be captured in tests; the binary
//! hands in a locked stdout.

use anyhow::{Result, anyhow};
use std::io::Write;
use tracing::debug;

use crate::analyzers::types::PriceSummary;
use crate::loader::ProductData;

/// Default number of products shown in the sample section.
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Writes the first `count` products as `id price difficulty` lines.
///
/// The difficulty is looked up without a fallback: the loader fills both
/// lookups from the same row, so a miss means the data was built some other
/// way and is reported as an error.
pub fn write_sample<W: Write>(out: &mut W, data: &ProductData, count: usize) -> Result<()> {
    writeln!(out, "Sample Data (Product ID, Price, Difficulty):")?;
    for (product_id, price) in data.prices.iter().take(count) {
        let difficulty = data
            .difficulties
            .get(product_id)
            .ok_or_else(|| anyhow!("no difficulty recorded for product {product_id}"))?;
        writeln!(out, "{product_id} {price} {difficulty}")?;
    }
    Ok(())
}

/// Writes the per-difficulty summary section.
pub fn write_summary<W: Write>(out: &mut W, summary: &PriceSummary) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Summary of Prices by Difficulty Level:")?;
    for group in &summary.groups {
        writeln!(out, "- {group}")?;
    }
    Ok(())
}

/// Logs the summary as JSON at debug level.
pub fn log_summary_json(summary: &PriceSummary) -> Result<()> {
    debug!(summary = %serde_json::to_string(summary)?, "Price summary");
    Ok(())
}
