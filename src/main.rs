use anyhow::Result;
use ie_stations::{fetch, output, process};
use reqwest::Client;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const OUTPUT_FILE: &str = "stations.csv";

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    let client = Client::new();

    // ─── 2) station feed ─────────────────────────────────────────────
    info!(url = fetch::STATION_FEED_URL, "fetching station feed");
    let feed_text = fetch::fetch_station_feed(&client).await?;
    let feed_rows = process::feed::parse_feed(&feed_text)?;
    info!("{} feed rows", feed_rows.len());

    let mut stations = process::normalize::normalize_feed(&feed_rows);
    info!("{} Irish stations from feed", stations.len());

    // ─── 3) Wikipedia station list ───────────────────────────────────
    info!(url = fetch::STATION_PAGE_URL, "fetching station page");
    let page_html = fetch::fetch_station_page(&client).await?;
    let page_rows = process::page::extract_rows(&page_html)?;
    info!("{} table rows", page_rows.len());

    let page_stations = process::normalize::normalize_page(&page_rows)?;
    info!("{} Irish stations from page", page_stations.len());
    stations.extend(page_stations);

    // ─── 4) write output ─────────────────────────────────────────────
    output::write_stations(OUTPUT_FILE, &stations)?;

    info!("all done");
    Ok(())
}
