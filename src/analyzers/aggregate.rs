use crate::analyzers::types::{DifficultyGroup, InvalidPrice, PriceSummary};
use crate::analyzers::utility::{mean, parse_price};
use crate::ordered_map::OrderedMap;
use tracing::{info, warn};

/// Label used for products with no recorded difficulty.
pub const UNKNOWN_DIFFICULTY: &str = "Unknown";

/// Regroups prices by difficulty label.
///
/// Walks `prices` in order; each price that parses is appended to its
/// difficulty's group, and each one that doesn't is returned in the second
/// element and contributes to no group. Groups are only created when a price
/// lands in them, so none is ever empty.
pub fn group_prices(
    prices: &OrderedMap<String>,
    difficulties: &OrderedMap<String>,
) -> (OrderedMap<Vec<f64>>, Vec<InvalidPrice>) {
    let mut groups: OrderedMap<Vec<f64>> = OrderedMap::new();
    let mut skipped = Vec::new();

    for (product_id, raw_price) in prices.iter() {
        let difficulty = difficulties
            .get(product_id)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_DIFFICULTY);

        let Some(price) = parse_price(raw_price) else {
            let invalid = InvalidPrice {
                product_id: product_id.to_string(),
                price: raw_price.clone(),
            };
            warn!("{invalid}");
            skipped.push(invalid);
            continue;
        };

        groups.get_or_insert_with(difficulty, Vec::new).push(price);
    }

    (groups, skipped)
}

/// Computes per-difficulty count and average price.
#[tracing::instrument(skip_all, fields(products = prices.len()))]
pub fn summarize_prices(
    prices: &OrderedMap<String>,
    difficulties: &OrderedMap<String>,
) -> PriceSummary {
    let (grouped, skipped) = group_prices(prices, difficulties);

    let groups: Vec<DifficultyGroup> = grouped
        .iter()
        .map(|(difficulty, series)| DifficultyGroup {
            difficulty: difficulty.to_string(),
            count: series.len(),
            avg_price: mean(series),
        })
        .collect();

    info!(
        groups = groups.len(),
        skipped = skipped.len(),
        "Prices summarized"
    );

    PriceSummary { groups, skipped }
}
