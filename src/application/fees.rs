//! The fee cascade: processing fees, then donations, leaving the pool
//! that is split between workers.

use crate::config::FeeSchedule;
use crate::domain::money::Money;
use crate::domain::team::Team;
use rust_decimal::Decimal;
use serde::Serialize;

/// Every intermediate amount of the cascade for one team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeBreakdown {
    pub raw_sum: Money,
    pub transaction_fee: Money,
    pub client_fees: Money,
    pub after_transaction_fee: Money,
    pub donation_per_organization: Money,
    pub total_donation: Money,
    /// What remains for worker payouts.
    pub distributable: Money,
}

impl FeeBreakdown {
    pub fn compute(team: &Team, schedule: &FeeSchedule) -> Self {
        let raw_sum = team.raw_sum(&schedule.plan_prices, schedule.biweekly_discount);
        let transaction_fee = raw_sum.percent(schedule.transaction_fee_pct);
        let client_fees = Money::new(schedule.per_client_fee) * Decimal::from(team.client_count());
        let after_transaction_fee = raw_sum - transaction_fee - client_fees;

        let donation_per_organization = after_transaction_fee.percent(schedule.donation_pct);
        let total_donation =
            donation_per_organization * Decimal::from(schedule.organizations.len());
        let distributable = after_transaction_fee - total_donation;

        Self {
            raw_sum,
            transaction_fee,
            client_fees,
            after_transaction_fee,
            donation_per_organization,
            total_donation,
            distributable,
        }
    }
}

pub fn team_sum_after_transaction_fee(team: &Team, schedule: &FeeSchedule) -> Money {
    FeeBreakdown::compute(team, schedule).after_transaction_fee
}

pub fn donation_per_organization(team: &Team, schedule: &FeeSchedule) -> Money {
    FeeBreakdown::compute(team, schedule).donation_per_organization
}

pub fn total_donation(team: &Team, schedule: &FeeSchedule) -> Money {
    FeeBreakdown::compute(team, schedule).total_donation
}

pub fn team_sum_after_donations(team: &Team, schedule: &FeeSchedule) -> Money {
    FeeBreakdown::compute(team, schedule).distributable
}
