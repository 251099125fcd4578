// src/fetch/mod.rs
use anyhow::{Context, Result};
use reqwest::Client;
use url::Url;

/// Semicolon-delimited dataset of European train stations.
pub static STATION_FEED_URL: &str =
    "https://raw.githubusercontent.com/trainline-eu/stations/master/stations.csv";

/// Wikipedia page listing the railway stations on the island of Ireland.
pub static STATION_PAGE_URL: &str =
    "https://en.wikipedia.org/wiki/List_of_railway_stations_in_Ireland";

/// Download the station feed as raw delimited text.
pub async fn fetch_station_feed(client: &Client) -> Result<String> {
    fetch_text(client, STATION_FEED_URL).await
}

/// Download the Wikipedia station list page as raw HTML.
pub async fn fetch_station_page(client: &Client) -> Result<String> {
    fetch_text(client, STATION_PAGE_URL).await
}

async fn fetch_text(client: &Client, url_str: &str) -> Result<String> {
    let url = Url::parse(url_str).with_context(|| format!("parsing URL {}", url_str))?;
    let body = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("GET {}", url))?
        .error_for_status()?
        .text()
        .await
        .with_context(|| format!("reading body from {}", url))?;
    Ok(body)
}
