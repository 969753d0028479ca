//! Human-readable crawl summary

use crate::crawler::CrawlReport;

/// Prints a crawl summary to stdout in a formatted manner
///
/// # Arguments
///
/// * `report` - The finished crawl to summarize
pub fn print_summary(report: &CrawlReport) {
    let stats = &report.stats;

    println!("=== Crawl Summary ===\n");

    println!("Pages:");
    println!("  Collected: {}", stats.pages_fetched);
    println!("  Fetch failures: {}", stats.fetch_failures);
    println!();

    println!("Links:");
    println!("  Discovered: {}", stats.links_discovered);
    println!("  Already visited: {}", stats.revisits_skipped);
    println!("  Cross-origin: {}", stats.cross_origin_skipped);
    println!("  Invalid: {}", stats.invalid_links);
    println!();

    let attempted = stats.pages_fetched + stats.fetch_failures;
    let success_rate = if attempted > 0 {
        (stats.pages_fetched as f64 / attempted as f64) * 100.0
    } else {
        0.0
    };

    println!(
        "Success rate: {:.1}% ({} / {} fetch attempts)",
        success_rate, stats.pages_fetched, attempted
    );
}
