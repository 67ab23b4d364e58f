use crate::domain::money::Money;
use crate::domain::payout::PayoutMap;
use crate::error::{PayoutError, Result};
use rust_decimal::Decimal;

/// True when net payouts plus donations land within `tolerance` of the
/// post-transaction-fee team sum.
pub fn is_balanced(
    net: &PayoutMap,
    total_donation: Money,
    after_transaction_fee: Money,
    tolerance: Decimal,
) -> bool {
    (net.total() + total_donation).abs_diff(after_transaction_fee) <= tolerance
}

/// Like [`is_balanced`], but reports the discrepancy as an error.
pub fn verify_balance(
    net: &PayoutMap,
    total_donation: Money,
    after_transaction_fee: Money,
    tolerance: Decimal,
) -> Result<()> {
    if is_balanced(net, total_donation, after_transaction_fee, tolerance) {
        Ok(())
    } else {
        Err(PayoutError::ComputationIntegrity {
            expected: after_transaction_fee.value(),
            actual: (net.total() + total_donation).value(),
            tolerance,
        })
    }
}
