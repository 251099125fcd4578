// src/process/mod.rs
pub mod feed;
pub mod normalize;
pub mod page;

use serde::Serialize;

/// The unified record both sources normalize into. The two normalize paths
/// guarantee every field is populated before a value reaches the writer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub name: String,
    pub address: String,
    pub latitude: String,
    pub longitude: String,
}
