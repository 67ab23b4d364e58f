use crate::domain::ports::{RosterSnapshot, RosterSource, WorkerEntry};
use crate::error::{PayoutError, Result};
use crate::interfaces::csv::plan_reader::{PlanReader, PlanRecord};
use crate::interfaces::csv::roster_reader::{RosterReader, RosterRecord};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/// A roster stored as two CSV files: the client plan table and the
/// per-worker cycle counts.
#[derive(Debug, Clone)]
pub struct FileRoster {
    plans_path: PathBuf,
    roster_path: PathBuf,
}

impl FileRoster {
    pub fn new(plans_path: impl Into<PathBuf>, roster_path: impl Into<PathBuf>) -> Self {
        Self {
            plans_path: plans_path.into(),
            roster_path: roster_path.into(),
        }
    }
}

#[async_trait]
impl RosterSource for FileRoster {
    async fn load(&self) -> Result<RosterSnapshot> {
        let plans = tokio::fs::read(&self.plans_path).await?;
        let roster = tokio::fs::read(&self.roster_path).await?;

        let plans: Vec<PlanRecord> = PlanReader::new(plans.as_slice())
            .records()
            .collect::<Result<_>>()?;
        let roster: Vec<RosterRecord> = RosterReader::new(roster.as_slice())
            .records()
            .collect::<Result<_>>()?;
        debug!(plans = plans.len(), rows = roster.len(), "roster files read");

        build_snapshot(plans, roster)
    }
}

/// Groups roster rows by worker, keeping first-appearance order.
pub fn build_snapshot(plans: Vec<PlanRecord>, roster: Vec<RosterRecord>) -> Result<RosterSnapshot> {
    let mut snapshot = RosterSnapshot::default();
    for record in plans {
        let plan = record.to_plan();
        if snapshot.plans.insert(record.client.clone(), plan).is_some() {
            return Err(PayoutError::RosterError(format!(
                "Client '{}' has more than one plan",
                record.client
            )));
        }
    }

    let mut index: HashMap<String, usize> = HashMap::new();
    for record in roster {
        let position = *index.entry(record.worker.clone()).or_insert_with(|| {
            snapshot.workers.push(WorkerEntry {
                name: record.worker.clone(),
                ..WorkerEntry::default()
            });
            snapshot.workers.len() - 1
        });
        let entry = &mut snapshot.workers[position];

        if let Some(flag) = record.management {
            match entry.management {
                Some(existing) if existing != flag => {
                    return Err(PayoutError::RosterError(format!(
                        "Worker '{}' is listed with conflicting management flags",
                        record.worker
                    )));
                }
                _ => entry.management = Some(flag),
            }
        }
        if let Some(client) = record.client {
            entry.clients.push((client, record.cycles.unwrap_or(0)));
        }
    }
    Ok(snapshot)
}
