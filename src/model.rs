use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One parsed line of delimited input, keyed by header column in file order.
pub type Row = IndexMap<String, String>;

/// Repository statistics aggregated from three independent git queries.
/// Field declaration order fixes the JSON key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRecord {
    pub commits: u64,
    pub authors: u64,
    pub branches: u64,
}

/// The full output of a CSV conversion. `count` always equals `data.len()`;
/// construct through [`ConversionResult::new`] to keep that true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResult {
    pub data: Vec<Row>,
    pub count: u64,
    pub source: String,
}

impl ConversionResult {
    pub fn new(data: Vec<Row>, source: String) -> Self {
        let count = data.len() as u64;
        Self { data, count, source }
    }
}
