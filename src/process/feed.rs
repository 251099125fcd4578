// src/process/feed.rs
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde::Deserialize;

/// One row of the semicolon-delimited station feed.
///
/// Only the columns the normalizer needs are kept; the feed carries many
/// more, which serde ignores. Empty cells come through as `None`.
#[derive(Debug, Deserialize)]
pub struct FeedStation {
    pub country: Option<String>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

/// Parse the feed text into rows, field names taken from the header line.
pub fn parse_feed(text: &str) -> Result<Vec<FeedStation>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: FeedStation = record.context("parsing feed row")?;
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_by_header_name() -> Result<()> {
        let text = "id;name;slug;city;country;latitude;longitude\n\
                    1;Dublin Connolly;dublin;Dublin;IE;53.3531;-6.2489\n\
                    2;Gare du Nord;paris-nord;Paris;FR;48.8809;2.3553\n";
        let rows = parse_feed(text)?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name.as_deref(), Some("Dublin Connolly"));
        assert_eq!(rows[0].country.as_deref(), Some("IE"));
        assert_eq!(rows[1].latitude.as_deref(), Some("48.8809"));
        Ok(())
    }

    #[test]
    fn empty_cells_become_none() -> Result<()> {
        let text = "name;city;country;latitude;longitude\n\
                    Sligo;;IE;;\n";
        let rows = parse_feed(text)?;
        assert_eq!(rows[0].city, None);
        assert_eq!(rows[0].latitude, None);
        assert_eq!(rows[0].longitude, None);
        Ok(())
    }

    #[test]
    fn missing_columns_become_none() -> Result<()> {
        let text = "name;country\nAthlone;IE\n";
        let rows = parse_feed(text)?;
        assert_eq!(rows[0].name.as_deref(), Some("Athlone"));
        assert_eq!(rows[0].city, None);
        Ok(())
    }
}
