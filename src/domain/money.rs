use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

/// Represents a monetary value in currency units.
///
/// This is a wrapper around `rust_decimal::Decimal` so that fee and payout
/// arithmetic never goes through binary floating point. Values carry full
/// decimal precision until [`Money::round_cents`] is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Rounds to whole cents, half away from zero.
    pub fn round_cents(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Takes `pct` percent of this amount.
    pub fn percent(self, pct: Decimal) -> Self {
        Self(self.0 * pct / Decimal::ONE_HUNDRED)
    }

    pub fn abs_diff(self, other: Self) -> Decimal {
        (self.0 - other.0).abs()
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.round_cents().0)
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;
    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Div<Decimal> for Money {
    type Output = Self;
    fn div(self, rhs: Decimal) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(dec!(10.0));
        let b = Money::new(dec!(2.5));
        assert_eq!(a + b, Money::new(dec!(12.5)));
        assert_eq!(a - b, Money::new(dec!(7.5)));
        assert_eq!(a * dec!(3), Money::new(dec!(30)));
        assert_eq!(a / dec!(4), Money::new(dec!(2.5)));
    }

    #[test]
    fn test_round_cents_half_away_from_zero() {
        assert_eq!(Money::new(dec!(1.005)).round_cents(), Money::new(dec!(1.01)));
        assert_eq!(Money::new(dec!(1.004)).round_cents(), Money::new(dec!(1.00)));
        assert_eq!(Money::new(dec!(2.675)).round_cents(), Money::new(dec!(2.68)));
    }

    #[test]
    fn test_percent() {
        assert_eq!(Money::new(dec!(200)).percent(dec!(2.9)), Money::new(dec!(5.8)));
        assert_eq!(Money::new(dec!(80)).percent(dec!(10)), Money::new(dec!(8)));
    }

    #[test]
    fn test_display_pads_to_cents() {
        assert_eq!(Money::new(dec!(163.5)).to_string(), "$163.50");
        assert_eq!(Money::new(dec!(7)).to_string(), "$7.00");
        assert_eq!(Money::new(dec!(0.125)).to_string(), "$0.13");
    }

    #[test]
    fn test_sum() {
        let total: Money = [dec!(1.10), dec!(2.20), dec!(3.30)]
            .into_iter()
            .map(Money::new)
            .sum();
        assert_eq!(total, Money::new(dec!(6.60)));
    }
}
