use crate::domain::plan::PlanPrices;
use crate::domain::team::same_name;
use crate::error::{PayoutError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The fee schedule a payout run is computed under.
///
/// Every rate and roster-independent constant lives here so the pipeline is
/// a pure function of `(team, schedule)`. Any key missing from a TOML file
/// takes its value from [`FeeSchedule::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSchedule {
    /// Payment processor's cut, as a percentage of the raw team sum.
    pub transaction_fee_pct: Decimal,
    /// Flat card-network surcharge per billable client.
    pub per_client_fee: Decimal,
    /// Donated to each organization, as a percentage of the post-fee sum.
    pub donation_pct: Decimal,
    /// Skimmed from every non-management worker's gross payout.
    pub management_fee_pct: Decimal,
    /// Flat amount taken off a doubled price for biweekly plans.
    pub biweekly_discount: Decimal,
    pub plan_prices: PlanPrices,
    pub organizations: Vec<String>,
    /// Worker names (matched case-insensitively) exempt from the management fee.
    pub management: Vec<String>,
    /// Largest accepted discrepancy in the closing balance check.
    pub tolerance: Decimal,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            transaction_fee_pct: dec!(2.9),
            per_client_fee: dec!(0.30),
            donation_pct: dec!(2.5),
            management_fee_pct: dec!(10),
            biweekly_discount: dec!(9),
            plan_prices: PlanPrices::default(),
            organizations: vec![
                "No Kid Hungry".to_string(),
                "NAACP Legal Defense Fund".to_string(),
            ],
            management: vec!["Jarett".to_string()],
            tolerance: dec!(0.05),
        }
    }
}

impl FeeSchedule {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let schedule: Self = toml::from_str(content)?;
        schedule.validate()?;
        Ok(schedule)
    }

    pub fn is_management(&self, name: &str) -> bool {
        self.management
            .iter()
            .any(|manager| same_name(manager, name))
    }

    /// Checks that the schedule can only ever produce non-negative prices
    /// and sensible percentages.
    pub fn validate(&self) -> Result<()> {
        validate_percentage("transaction_fee_pct", self.transaction_fee_pct)?;
        validate_percentage("donation_pct", self.donation_pct)?;
        validate_percentage("management_fee_pct", self.management_fee_pct)?;
        validate_non_negative("per_client_fee", self.per_client_fee)?;
        validate_non_negative("biweekly_discount", self.biweekly_discount)?;
        validate_non_negative("tolerance", self.tolerance)?;
        validate_non_negative("plan_prices.middle_school", self.plan_prices.middle_school)?;
        validate_non_negative(
            "plan_prices.high_school_prep",
            self.plan_prices.high_school_prep,
        )?;
        validate_non_negative("plan_prices.high_school", self.plan_prices.high_school)?;
        validate_non_negative("plan_prices.college_prep", self.plan_prices.college_prep)?;

        if self.biweekly_discount > self.plan_prices.cheapest() * dec!(2) {
            return Err(PayoutError::ConfigError(format!(
                "biweekly_discount {} exceeds twice the cheapest plan price",
                self.biweekly_discount
            )));
        }
        if self.organizations.is_empty() {
            return Err(PayoutError::ConfigError(
                "At least one organization is required".to_string(),
            ));
        }
        let donated = self.donation_pct * Decimal::from(self.organizations.len());
        if donated > Decimal::ONE_HUNDRED {
            return Err(PayoutError::ConfigError(format!(
                "Donations total {donated}% of the post-fee sum"
            )));
        }
        Ok(())
    }
}

fn validate_percentage(field: &str, value: Decimal) -> Result<()> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(PayoutError::ConfigError(format!(
            "{field} must be between 0 and 100, got {value}"
        )));
    }
    Ok(())
}

fn validate_non_negative(field: &str, value: Decimal) -> Result<()> {
    if value < Decimal::ZERO {
        return Err(PayoutError::ConfigError(format!(
            "{field} must not be negative, got {value}"
        )));
    }
    Ok(())
}
