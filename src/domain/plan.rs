use super::money::Money;
use crate::error::PayoutError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The service tiers offered by the collective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum PlanKind {
    MiddleSchool,
    HighSchoolPrep,
    HighSchool,
    CollegePrep,
}

impl PlanKind {
    pub const ALL: [PlanKind; 4] = [
        PlanKind::MiddleSchool,
        PlanKind::HighSchoolPrep,
        PlanKind::HighSchool,
        PlanKind::CollegePrep,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanKind::MiddleSchool => "middle school",
            PlanKind::HighSchoolPrep => "high school prep",
            PlanKind::HighSchool => "high school",
            PlanKind::CollegePrep => "college prep",
        }
    }
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanKind {
    type Err = PayoutError;

    /// Accepts the long tier names as well as the short codes
    /// (`ms`, `hsPrep`, `hs`, `collPrep`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "middle school" | "ms" => Ok(PlanKind::MiddleSchool),
            "high school prep" | "hsprep" => Ok(PlanKind::HighSchoolPrep),
            "high school" | "hs" => Ok(PlanKind::HighSchool),
            "college prep" | "collprep" => Ok(PlanKind::CollegePrep),
            other => Err(PayoutError::RosterError(format!(
                "Unknown plan kind '{other}'"
            ))),
        }
    }
}

impl TryFrom<String> for PlanKind {
    type Error = PayoutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for PlanKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Base price per billing cycle for each tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanPrices {
    pub middle_school: Decimal,
    pub high_school_prep: Decimal,
    pub high_school: Decimal,
    pub college_prep: Decimal,
}

impl Default for PlanPrices {
    fn default() -> Self {
        Self {
            middle_school: dec!(39),
            high_school_prep: dec!(49),
            high_school: dec!(59),
            college_prep: dec!(79),
        }
    }
}

impl PlanPrices {
    pub fn base(&self, kind: PlanKind) -> Decimal {
        match kind {
            PlanKind::MiddleSchool => self.middle_school,
            PlanKind::HighSchoolPrep => self.high_school_prep,
            PlanKind::HighSchool => self.high_school,
            PlanKind::CollegePrep => self.college_prep,
        }
    }

    pub fn cheapest(&self) -> Decimal {
        PlanKind::ALL
            .iter()
            .map(|kind| self.base(*kind))
            .min()
            .unwrap_or(Decimal::ZERO)
    }
}

/// A client's tier plus the modifiers that affect price and workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub kind: PlanKind,
    /// Two sessions per cycle, billed at double the base less a flat discount.
    #[serde(default)]
    pub biweekly: bool,
    /// Cost shared between two families; each pays half.
    #[serde(default)]
    pub split: bool,
}

impl Plan {
    pub fn new(kind: PlanKind) -> Self {
        Self {
            kind,
            biweekly: false,
            split: false,
        }
    }

    pub fn biweekly(mut self) -> Self {
        self.biweekly = true;
        self
    }

    pub fn split(mut self) -> Self {
        self.split = true;
        self
    }

    /// Resolves the per-cycle price of this plan.
    ///
    /// The biweekly adjustment is applied first and the split halves the
    /// already adjusted price.
    pub fn price(&self, prices: &PlanPrices, biweekly_discount: Decimal) -> Money {
        let mut price = prices.base(self.kind);
        if self.biweekly {
            price = price * dec!(2) - biweekly_discount;
        }
        if self.split {
            price *= dec!(0.5);
        }
        Money::new(price)
    }

    /// Sessions delivered per processed cycle.
    pub fn hours_per_cycle(&self) -> Decimal {
        let sessions = if self.biweekly { dec!(2) } else { Decimal::ONE };
        let share = if self.split { dec!(0.5) } else { Decimal::ONE };
        sessions * share
    }
}
