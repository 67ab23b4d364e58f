use super::plan::Plan;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// One worker's line in the roster: the clients they served and how many
/// cycles were processed for each.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkerEntry {
    pub name: String,
    pub clients: Vec<(String, u32)>,
    /// Explicit role override; `None` defers to the configured management list.
    pub management: Option<bool>,
}

/// Raw input for one billing period, before plans are resolved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RosterSnapshot {
    /// Client key to assigned plan.
    pub plans: HashMap<String, Plan>,
    pub workers: Vec<WorkerEntry>,
}

/// Supplies the roster and plan table for a payout run.
#[async_trait]
pub trait RosterSource: Send + Sync {
    async fn load(&self) -> Result<RosterSnapshot>;
}

pub type RosterSourceBox = Box<dyn RosterSource>;
