// src/output.rs
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::process::Station;

/// Serialize the accumulated stations to a comma-delimited file.
///
/// The header `name,address,latitude,longitude` comes from the record's
/// field names; rows are written in accumulation order, once, at the end.
pub fn write_stations(path: impl AsRef<Path>, stations: &[Station]) -> Result<()> {
    let path = path.as_ref();
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    for station in stations {
        writer.serialize(station).context("writing station row")?;
    }
    writer.flush().context("flushing output file")?;
    info!(count = stations.len(), path = %path.display(), "wrote station file");
    Ok(())
}
