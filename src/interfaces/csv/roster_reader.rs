use crate::error::{PayoutError, Result};
use serde::Deserialize;
use std::io::Read;

/// One row of the roster: `worker,client,cycles,management`.
///
/// A worker with nobody billed this period can be listed with an empty
/// client column.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct RosterRecord {
    pub worker: String,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub cycles: Option<u32>,
    #[serde(default)]
    pub management: Option<bool>,
}

/// Reads roster rows from a CSV source.
pub struct RosterReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RosterReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn records(self) -> impl Iterator<Item = Result<RosterRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PayoutError::from))
    }
}
