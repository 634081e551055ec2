use lego_price_report::analyzers::aggregate::summarize_prices;
use lego_price_report::loader::{DEFAULT_LINE_LIMIT, LoadNotice, load_products};
use lego_price_report::output::{DEFAULT_SAMPLE_SIZE, write_sample, write_summary};
use std::path::Path;

#[test]
fn test_full_pipeline() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/lego_sets_sample.csv");
    let data = load_products(&path, DEFAULT_LINE_LIMIT);

    assert_eq!(data.len(), 9);
    assert_eq!(
        data.notices,
        vec![LoadNotice::MalformedLine {
            line: ",".to_string()
        }]
    );

    let summary = summarize_prices(&data.prices, &data.difficulties);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.total_sets(), data.len() - summary.skipped.len());

    let mut out = Vec::new();
    write_sample(&mut out, &data, DEFAULT_SAMPLE_SIZE).expect("Failed to write sample");
    write_summary(&mut out, &summary).expect("Failed to write summary");
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("Sample Data (Product ID, Price, Difficulty):\n75823 29.99 Average\n"));
    assert!(text.contains("- Average: 3 sets, Average Price: $63.32\n"));
    assert!(text.contains("- Easy: 2 sets, Average Price: $16.49\n"));
    assert!(text.contains("- Challenging: 1 sets, Average Price: $79.99\n"));
    assert!(text.contains("- Very Easy: 1 sets, Average Price: $4.99\n"));
    assert!(text.contains("- : 1 sets, Average Price: $39.99\n"));
}

#[test]
fn test_limit_counts_only_accepted_rows() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/lego_sets_sample.csv");
    let data = load_products(&path, 7);

    assert_eq!(data.len(), 7);
    assert!(data.prices.contains_key("60200"));
    assert!(!data.prices.contains_key("60201"));
    assert_eq!(data.malformed_lines(), 1);
}
