//! Splits the distributable pool across workers and moves the management
//! fee from staff to management.

use super::fees::FeeBreakdown;
use crate::config::FeeSchedule;
use crate::domain::money::Money;
use crate::domain::payout::PayoutMap;
use crate::domain::team::Team;
use crate::error::{PayoutError, Result};
use rust_decimal::Decimal;
use tracing::debug;

/// Allocates `pool` in proportion to each worker's weighted hours,
/// rounding each share to cents.
pub fn allocate(team: &Team, pool: Money) -> Result<PayoutMap> {
    let team_hours = team.hours();
    if team_hours.is_zero() {
        return Err(PayoutError::EmptyWorkload);
    }

    Ok(team
        .workers()
        .iter()
        .map(|worker| {
            let share = (pool * worker.hours() / team_hours).round_cents();
            (worker.name.clone(), share)
        })
        .collect())
}

pub fn gross_payout(team: &Team, schedule: &FeeSchedule) -> Result<PayoutMap> {
    let fees = FeeBreakdown::compute(team, schedule);
    allocate(team, fees.distributable)
}

/// The result of moving the management fee from staff to management.
#[derive(Debug, Clone, PartialEq)]
pub struct Redistribution {
    pub net: PayoutMap,
    pub dividend_pool: Money,
}

/// Skims `management_fee_pct` from every staff payout and shares the pool
/// equally between management workers.
pub fn redistribute(
    gross: &PayoutMap,
    team: &Team,
    management_fee_pct: Decimal,
) -> Result<Redistribution> {
    let managers = team.management_count();
    if managers == 0 {
        return Err(PayoutError::NoManagementWorkers);
    }

    let amount_of = |name: &str| gross.get(name).unwrap_or(Money::ZERO);

    let dividend_pool: Money = team
        .workers()
        .iter()
        .filter(|worker| !worker.is_management())
        .map(|worker| amount_of(&worker.name).percent(management_fee_pct))
        .sum();
    let dividend = dividend_pool / Decimal::from(managers);
    let keep_pct = Decimal::ONE_HUNDRED - management_fee_pct;
    debug!(pool = %dividend_pool.value(), managers, "management dividend");

    let net = team
        .workers()
        .iter()
        .map(|worker| {
            let gross = amount_of(&worker.name);
            let amount = if worker.is_management() {
                gross + dividend
            } else {
                gross.percent(keep_pct)
            };
            (worker.name.clone(), amount)
        })
        .collect();

    Ok(Redistribution { net, dividend_pool })
}

pub fn net_payout(team: &Team, schedule: &FeeSchedule) -> Result<PayoutMap> {
    let gross = gross_payout(team, schedule)?;
    Ok(redistribute(&gross, team, schedule.management_fee_pct)?.net)
}
