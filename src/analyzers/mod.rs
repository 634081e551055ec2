//! Price aggregation by difficulty.
//!
//! This module parses the raw price strings collected by the loader, groups
//! them under each product's difficulty label, and computes per-group counts
//! and average prices.

pub mod aggregate;
pub mod types;
pub mod utility;
