use crate::domain::plan::Plan;
use crate::domain::ports::{RosterSnapshot, RosterSource, WorkerEntry};
use crate::error::Result;
use async_trait::async_trait;

/// A roster held in memory.
///
/// Built up with [`plan`](Self::plan) and [`worker`](Self::worker); each
/// load hands out a copy so repeated runs see the same snapshot.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRoster {
    snapshot: RosterSnapshot,
}

impl InMemoryRoster {
    /// Creates a new, empty in-memory roster.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: RosterSnapshot) -> Self {
        Self { snapshot }
    }

    /// Assigns `plan` to the client known as `client`.
    pub fn plan(mut self, client: &str, plan: Plan) -> Self {
        self.snapshot.plans.insert(client.to_string(), plan);
        self
    }

    /// Adds a worker whose role is taken from the configured management list.
    pub fn worker(self, name: &str, clients: &[(&str, u32)]) -> Self {
        self.push(name, clients, None)
    }

    /// Adds a worker with an explicit role.
    pub fn worker_with_role(self, name: &str, clients: &[(&str, u32)], management: bool) -> Self {
        self.push(name, clients, Some(management))
    }

    fn push(mut self, name: &str, clients: &[(&str, u32)], management: Option<bool>) -> Self {
        self.snapshot.workers.push(WorkerEntry {
            name: name.to_string(),
            clients: clients
                .iter()
                .map(|(client, cycles)| (client.to_string(), *cycles))
                .collect(),
            management,
        });
        self
    }
}

#[async_trait]
impl RosterSource for InMemoryRoster {
    async fn load(&self) -> Result<RosterSnapshot> {
        Ok(self.snapshot.clone())
    }
}
