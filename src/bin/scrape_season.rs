use pl_match_scraper::{export, MatchScraper, ScrapeConfig};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> pl_match_scraper::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ScrapeConfig::default();
    info!(
        first = *config.ids.start(),
        last = *config.ids.end(),
        "scraping premier league match reports"
    );

    let scraper = MatchScraper::new(config.clone());
    let report = scraper.run().await;

    export::export(&report.dataset, &config)?;
    println!(".csv file exported.");
    println!(".pkl file exported.");

    let summary = report.summary();
    println!("Number of errors: {}", summary.failed);
    println!("Errors:\n");
    println!("{:?}", summary.error_ids);
    Ok(())
}
