// src/process/page.rs
use anyhow::{anyhow, Result};
use scraper::{ElementRef, Html, Selector};
use tracing::info;

const IRISH_NAME_HEADER: &str = "Irish name";
const ENGLISH_NAME_HEADER: &str = "English name";
const LOCATION_HEADER: &str = "Location";
const COORDINATES_HEADER: &str = "Coordinates";

/// One body row of the station wikitable, narrowed to the four columns the
/// normalizer uses. Cells absent from a short row stay `None`.
#[derive(Debug, Default, PartialEq)]
pub struct PageRow {
    pub irish_name: Option<String>,
    pub english_name: Option<String>,
    pub location: Option<String>,
    pub coordinates: Option<String>,
}

/// Extract the body rows of the first `wikitable` on the page.
///
/// The table's own header row names the columns; each body row is zipped
/// against those names. The table and its header row must exist.
pub fn extract_rows(html: &str) -> Result<Vec<PageRow>> {
    let table_sel = Selector::parse("table.wikitable").expect("wikitable selector should parse");
    let row_sel = Selector::parse("tr").expect("tr selector should parse");
    let header_sel = Selector::parse("th").expect("th selector should parse");
    let cell_sel = Selector::parse("td").expect("td selector should parse");

    let document = Html::parse_document(html);
    let table = document
        .select(&table_sel)
        .next()
        .ok_or_else(|| anyhow!("no table with class 'wikitable' on page"))?;

    let mut trs = table.select(&row_sel);
    let header_row = trs.next().ok_or_else(|| anyhow!("wikitable has no rows"))?;
    let headers: Vec<String> = header_row.select(&header_sel).map(cell_text).collect();
    if headers.is_empty() {
        return Err(anyhow!("wikitable header row has no th cells"));
    }
    info!(?headers, "detected table headers");

    let mut rows = Vec::new();
    for tr in trs {
        let cells: Vec<String> = tr.select(&cell_sel).map(cell_text).collect();
        if cells.is_empty() {
            // repeated header rows mid-table carry no td cells
            continue;
        }
        let mut row = PageRow::default();
        for (header, cell) in headers.iter().zip(cells) {
            match header.as_str() {
                IRISH_NAME_HEADER => row.irish_name = Some(cell),
                ENGLISH_NAME_HEADER => row.english_name = Some(cell),
                LOCATION_HEADER => row.location = Some(cell),
                COORDINATES_HEADER => row.coordinates = Some(cell),
                _ => {}
            }
        }
        rows.push(row);
    }
    Ok(rows)
}

fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}
