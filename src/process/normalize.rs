// src/process/normalize.rs
use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::process::{feed::FeedStation, page::PageRow, Station};

/// Country code the feed uses for the Republic of Ireland.
const FEED_COUNTRY: &str = "IE";

/// Location labels marking a page row as on the island of Ireland.
const PAGE_LOCATIONS: &[&str] = &["Northern Ireland", "Republic of Ireland"];

/// Decimal pair at the tail of a Wikipedia coordinate cell, latitude first.
static COORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<latitude>-?\d+(?:\.\d+)?); (?P<longitude>-?\d+(?:\.\d+)?)$")
        .expect("coordinate regex should compile")
});

/// Comma-join the present, non-empty address parts in fixed order.
pub fn format_address(name: Option<&str>, city: Option<&str>, country: Option<&str>) -> String {
    [name, city, country]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Pull the `(latitude, longitude)` pair out of a Wikipedia coordinate cell.
///
/// The cell ends with a machine-readable `… / lat; lon` segment. Anything
/// else is a structural violation; callers decide whether that halts the run.
pub fn parse_coordinates(cell: &str) -> Result<(String, String)> {
    let tail = cell.rsplit('/').next().unwrap_or(cell).trim();
    let caps = COORD_RE
        .captures(tail)
        .ok_or_else(|| anyhow!("malformed coordinate cell: {:?}", cell))?;
    Ok((caps["latitude"].to_string(), caps["longitude"].to_string()))
}

/// Keep the feed rows for Irish stations and reshape them.
///
/// Rows with no coordinates at all are skipped with a diagnostic; coordinate
/// strings are otherwise copied verbatim.
pub fn normalize_feed(rows: &[FeedStation]) -> Vec<Station> {
    let mut out = Vec::new();
    for row in rows {
        if row.country.as_deref() != Some(FEED_COUNTRY) {
            continue;
        }
        let latitude = row.latitude.clone().unwrap_or_default();
        let longitude = row.longitude.clone().unwrap_or_default();
        if latitude.is_empty() && longitude.is_empty() {
            warn!(
                name = row.name.as_deref().unwrap_or("<unnamed>"),
                "station has no coordinates, skipping"
            );
            continue;
        }
        out.push(Station {
            name: row.name.clone().unwrap_or_default(),
            address: format_address(
                row.name.as_deref(),
                row.city.as_deref(),
                row.country.as_deref(),
            ),
            latitude,
            longitude,
        });
    }
    out
}

/// Keep the page rows for Irish stations and reshape them.
///
/// Rows missing either name variant are skipped; a row that passes the
/// location filter without a coordinate cell, or with a coordinate cell that
/// does not parse, aborts with an error.
pub fn normalize_page(rows: &[PageRow]) -> Result<Vec<Station>> {
    let mut out = Vec::new();
    for row in rows {
        let location = match row.location.as_deref() {
            Some(l) if PAGE_LOCATIONS.contains(&l) => l,
            _ => continue,
        };
        let (irish, english) = match (row.irish_name.as_deref(), row.english_name.as_deref()) {
            (Some(i), Some(e)) => (i, e),
            _ => continue,
        };
        let cell = row
            .coordinates
            .as_deref()
            .ok_or_else(|| anyhow!("station {:?} has no coordinate cell", english))?;
        let (latitude, longitude) = parse_coordinates(cell)?;
        let name = format!("{}/{}", irish, english);
        out.push(Station {
            address: format!("{}, {}", name, location),
            name,
            latitude,
            longitude,
        });
    }
    Ok(out)
}
