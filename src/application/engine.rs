use super::allocation::{allocate, redistribute};
use super::balance::verify_balance;
use super::fees::FeeBreakdown;
use crate::config::FeeSchedule;
use crate::domain::money::Money;
use crate::domain::payout::PayoutMap;
use crate::domain::ports::RosterSourceBox;
use crate::domain::team::Team;
use crate::error::{PayoutError, Result};
use serde::Serialize;
use tracing::{debug, info};

/// Everything produced by one payout run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayoutReport {
    pub fees: FeeBreakdown,
    /// Organization name and the amount donated to it, in configured order.
    pub donations: Vec<(String, Money)>,
    pub gross: PayoutMap,
    pub net: PayoutMap,
    pub dividend_pool: Money,
}

/// Computes the payout report for `team` under `schedule`.
///
/// Stages run in order: fee cascade, proportional allocation, dividend
/// redistribution, then the closing balance check. Nothing is returned
/// unless the check passes.
pub fn compute(team: &Team, schedule: &FeeSchedule) -> Result<PayoutReport> {
    schedule.validate()?;
    if team.management_count() == 0 {
        return Err(PayoutError::NoManagementWorkers);
    }

    let fees = FeeBreakdown::compute(team, schedule);
    debug!(
        raw = %fees.raw_sum.value(),
        after_fees = %fees.after_transaction_fee.value(),
        distributable = %fees.distributable.value(),
        "fee cascade"
    );

    let gross = allocate(team, fees.distributable)?;
    let redistribution = redistribute(&gross, team, schedule.management_fee_pct)?;
    verify_balance(
        &redistribution.net,
        fees.total_donation,
        fees.after_transaction_fee,
        schedule.tolerance,
    )?;

    let donations = schedule
        .organizations
        .iter()
        .map(|org| (org.clone(), fees.donation_per_organization))
        .collect();

    Ok(PayoutReport {
        fees,
        donations,
        gross,
        net: redistribution.net,
        dividend_pool: redistribution.dividend_pool,
    })
}

/// Loads a roster from its source and runs the payout pipeline over it.
pub struct PayoutEngine {
    source: RosterSourceBox,
    schedule: FeeSchedule,
}

impl PayoutEngine {
    /// Creates a new `PayoutEngine`.
    ///
    /// # Arguments
    ///
    /// * `source` - Where the roster and plan table come from.
    /// * `schedule` - Fees, donations and management settings for the run.
    pub fn new(source: RosterSourceBox, schedule: FeeSchedule) -> Self {
        Self { source, schedule }
    }

    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    pub async fn team(&self) -> Result<Team> {
        let snapshot = self.source.load().await?;
        Team::assemble(snapshot, &self.schedule)
    }

    pub async fn run(&self) -> Result<PayoutReport> {
        let team = self.team().await?;
        let report = compute(&team, &self.schedule)?;
        info!(
            workers = team.workers().len(),
            clients = team.client_count(),
            "payouts computed"
        );
        Ok(report)
    }
}
