use super::money::Money;
use super::plan::{Plan, PlanPrices};
use super::ports::RosterSnapshot;
use crate::config::FeeSchedule;
use crate::error::{PayoutError, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Case-folded form under which worker names are compared.
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}

pub fn same_name(a: &str, b: &str) -> bool {
    name_key(a) == name_key(b)
}

/// A billable client together with the cycles processed this period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Client {
    pub name: String,
    pub plan: Plan,
    pub cycles_processed: u32,
}

impl Client {
    /// Builds a client, returning `None` when no cycles were processed.
    pub fn billable(name: impl Into<String>, plan: Plan, cycles_processed: u32) -> Option<Self> {
        (cycles_processed > 0).then(|| Self {
            name: name.into(),
            plan,
            cycles_processed,
        })
    }

    pub fn amount(&self, prices: &PlanPrices, biweekly_discount: Decimal) -> Money {
        self.plan.price(prices, biweekly_discount) * Decimal::from(self.cycles_processed)
    }

    pub fn hours(&self) -> Decimal {
        Decimal::from(self.cycles_processed) * self.plan.hours_per_cycle()
    }
}

/// Whether a worker pays the management fee or shares in the dividend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Staff,
    Management,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Worker {
    pub name: String,
    pub clients: Vec<Client>,
    pub role: Role,
}

impl Worker {
    pub fn new(name: impl Into<String>, clients: Vec<Client>, role: Role) -> Self {
        Self {
            name: name.into(),
            clients,
            role,
        }
    }

    pub fn is_management(&self) -> bool {
        self.role == Role::Management
    }

    /// Total billed for this worker's clients.
    pub fn sum(&self, prices: &PlanPrices, biweekly_discount: Decimal) -> Money {
        self.clients
            .iter()
            .map(|client| client.amount(prices, biweekly_discount))
            .sum()
    }

    /// Weighted session count used to proportion the payout pool.
    pub fn hours(&self) -> Decimal {
        self.clients.iter().map(Client::hours).sum()
    }
}

/// The ordered set of workers a payout run is computed over.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Team {
    workers: Vec<Worker>,
}

impl Team {
    /// Creates a team, rejecting duplicate worker names.
    pub fn new(workers: Vec<Worker>) -> Result<Self> {
        let mut seen = HashSet::new();
        for worker in &workers {
            if !seen.insert(name_key(&worker.name)) {
                return Err(PayoutError::RosterError(format!(
                    "Duplicate worker '{}'",
                    worker.name
                )));
            }
        }
        Ok(Self { workers })
    }

    /// Resolves a roster snapshot into a team.
    ///
    /// Clients with zero cycles are dropped before their plan is looked up,
    /// so they need not appear in the plan table. A client listed twice for
    /// the same worker is rejected. Roles come from the entry's
    /// explicit flag, falling back to a case-insensitive match against
    /// `schedule.management`.
    pub fn assemble(snapshot: RosterSnapshot, schedule: &FeeSchedule) -> Result<Self> {
        let mut workers = Vec::with_capacity(snapshot.workers.len());
        for entry in snapshot.workers {
            let mut clients = Vec::with_capacity(entry.clients.len());
            let mut listed = HashSet::new();
            for (key, cycles) in entry.clients {
                if !listed.insert(key.clone()) {
                    return Err(PayoutError::RosterError(format!(
                        "Client '{key}' is listed more than once for worker '{}'",
                        entry.name
                    )));
                }
                if cycles == 0 {
                    debug!(worker = %entry.name, client = %key, "skipping client with no cycles");
                    continue;
                }
                let plan = snapshot.plans.get(&key).ok_or_else(|| {
                    PayoutError::RosterError(format!(
                        "Client '{key}' of worker '{}' has no plan",
                        entry.name
                    ))
                })?;
                clients.extend(Client::billable(key.as_str(), *plan, cycles));
            }
            let management = entry
                .management
                .unwrap_or_else(|| schedule.is_management(&entry.name));
            let role = if management {
                Role::Management
            } else {
                Role::Staff
            };
            workers.push(Worker::new(entry.name, clients, role));
        }

        let team = Self::new(workers)?;
        for name in &schedule.management {
            if !team.workers.iter().any(|w| same_name(&w.name, name)) {
                warn!(manager = %name, "configured management worker is not on the roster");
            }
        }
        Ok(team)
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn raw_sum(&self, prices: &PlanPrices, biweekly_discount: Decimal) -> Money {
        self.workers
            .iter()
            .map(|worker| worker.sum(prices, biweekly_discount))
            .sum()
    }

    pub fn hours(&self) -> Decimal {
        self.workers.iter().map(Worker::hours).sum()
    }

    /// Number of billable client records across the team.
    pub fn client_count(&self) -> usize {
        self.workers.iter().map(|w| w.clients.len()).sum()
    }

    pub fn management_count(&self) -> usize {
        self.workers.iter().filter(|w| w.is_management()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plan::PlanKind;
    use crate::domain::ports::WorkerEntry;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn prices() -> PlanPrices {
        PlanPrices::default()
    }

    #[test]
    fn test_middle_school_contribution() {
        let client = Client::billable("Corey", Plan::new(PlanKind::MiddleSchool), 2).unwrap();
        let worker = Worker::new("Jarett", vec![client], Role::Staff);
        assert_eq!(worker.sum(&prices(), dec!(9)), Money::new(dec!(78)));
        assert_eq!(worker.hours(), dec!(2));
    }

    #[test]
    fn test_biweekly_split_contribution() {
        let plan = Plan::new(PlanKind::HighSchool).biweekly().split();
        let client = Client::billable("Camille", plan, 3).unwrap();
        let worker = Worker::new("Jarett", vec![client], Role::Staff);
        assert_eq!(worker.sum(&prices(), dec!(9)), Money::new(dec!(163.5)));
        assert_eq!(worker.hours(), dec!(3));
    }

    #[test]
    fn test_zero_cycles_is_not_billable() {
        assert!(Client::billable("Isabelle", Plan::new(PlanKind::HighSchool), 0).is_none());
    }

    #[test]
    fn test_duplicate_workers_rejected() {
        let result = Team::new(vec![
            Worker::new("Paul", vec![], Role::Staff),
            Worker::new("paul", vec![], Role::Staff),
        ]);
        assert!(matches!(result, Err(PayoutError::RosterError(_))));
    }

    fn snapshot() -> RosterSnapshot {
        let mut plans = HashMap::new();
        plans.insert("Simon".to_string(), Plan::new(PlanKind::MiddleSchool));
        plans.insert(
            "Isabelle".to_string(),
            Plan::new(PlanKind::HighSchool).biweekly(),
        );
        RosterSnapshot {
            plans,
            workers: vec![
                WorkerEntry {
                    name: "JARETT".to_string(),
                    clients: vec![],
                    management: None,
                },
                WorkerEntry {
                    name: "Keon".to_string(),
                    clients: vec![("Simon".to_string(), 2), ("Isabelle".to_string(), 0)],
                    management: None,
                },
            ],
        }
    }

    #[test]
    fn test_assemble_drops_idle_clients_and_assigns_roles() {
        let team = Team::assemble(snapshot(), &FeeSchedule::default()).unwrap();
        let workers = team.workers();
        assert_eq!(workers[0].role, Role::Management);
        assert_eq!(workers[1].role, Role::Staff);
        assert_eq!(workers[1].clients.len(), 1);
        assert_eq!(team.client_count(), 1);
        assert_eq!(team.hours(), dec!(2));
        assert_eq!(team.management_count(), 1);
    }

    #[test]
    fn test_assemble_respects_explicit_role() {
        let mut snapshot = snapshot();
        snapshot.workers[0].management = Some(false);
        snapshot.workers[1].management = Some(true);
        let team = Team::assemble(snapshot, &FeeSchedule::default()).unwrap();
        assert!(!team.workers()[0].is_management());
        assert!(team.workers()[1].is_management());
    }

    #[test]
    fn test_assemble_skips_idle_client_without_plan() {
        let mut snapshot = snapshot();
        snapshot.workers[1].clients.push(("Ghost".to_string(), 0));
        let team = Team::assemble(snapshot, &FeeSchedule::default()).unwrap();
        assert_eq!(team.workers()[1].clients.len(), 1);
        assert_eq!(team.client_count(), 1);
    }

    #[test]
    fn test_assemble_rejects_repeated_client_for_worker() {
        let mut snapshot = snapshot();
        snapshot.workers[1].clients.push(("Simon".to_string(), 1));
        let result = Team::assemble(snapshot, &FeeSchedule::default());
        assert!(matches!(result, Err(PayoutError::RosterError(_))));
    }

    #[test]
    fn test_same_client_for_different_workers_is_allowed() {
        let mut snapshot = snapshot();
        snapshot.workers[0].clients.push(("Simon".to_string(), 1));
        let team = Team::assemble(snapshot, &FeeSchedule::default()).unwrap();
        assert_eq!(team.client_count(), 2);
    }

    #[test]
    fn test_duplicate_workers_detected_beyond_ascii() {
        let result = Team::new(vec![
            Worker::new("Émile", vec![], Role::Staff),
            Worker::new("ÉMILE", vec![], Role::Staff),
        ]);
        assert!(matches!(result, Err(PayoutError::RosterError(_))));
        assert!(same_name("Émile", "éMILE"));
    }

    #[test]
    fn test_assemble_rejects_unknown_client() {
        let mut snapshot = snapshot();
        snapshot.workers[1].clients.push(("Nobody".to_string(), 1));
        let result = Team::assemble(snapshot, &FeeSchedule::default());
        assert!(matches!(result, Err(PayoutError::RosterError(_))));
    }
}
