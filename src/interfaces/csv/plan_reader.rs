use crate::domain::plan::{Plan, PlanKind};
use crate::error::{PayoutError, Result};
use serde::Deserialize;
use std::io::Read;

/// One row of the plan table: `client,plan,biweekly,split`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PlanRecord {
    pub client: String,
    pub plan: PlanKind,
    #[serde(default)]
    pub biweekly: Option<bool>,
    #[serde(default)]
    pub split: Option<bool>,
}

impl PlanRecord {
    pub fn to_plan(&self) -> Plan {
        Plan {
            kind: self.plan,
            biweekly: self.biweekly.unwrap_or(false),
            split: self.split.unwrap_or(false),
        }
    }
}

/// Reads the client plan table from a CSV source.
///
/// Whitespace is trimmed and trailing modifier columns may be left out.
pub struct PlanReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PlanReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn records(self) -> impl Iterator<Item = Result<PlanRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PayoutError::from))
    }
}
