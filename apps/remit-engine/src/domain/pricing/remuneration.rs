//! Remuneration and total payment calculation.

use rust_decimal::Decimal;

use crate::domain::shared::Money;

/// Derived monetary fields for an order's payment details.
///
/// The two fields are always computed together from the same inputs and
/// must never be persisted independently of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemunerationBreakdown {
    /// `transfer_amount × percent / 100`, rounded to 2 decimal places.
    pub remuneration_amount: Money,
    /// `transfer_amount + remuneration_amount`.
    pub total_payment_amount: Money,
}

/// Compute remuneration and total payment from the principal amount.
///
/// Pure and deterministic: recomputed from scratch on every change to
/// either input, so repeated calls never accumulate rounding error.
/// Never fails; a negative amount is treated as 0 and the percentage is
/// clamped to `[0, 100]`, matching the intake form's handling of invalid
/// numeric input.
#[must_use]
pub fn compute_remuneration(transfer_amount: Money, percent: Decimal) -> RemunerationBreakdown {
    let amount = transfer_amount.or_zero();
    let percent = percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);

    let remuneration_amount = (amount * (percent / Decimal::ONE_HUNDRED)).round();
    let total_payment_amount = amount + remuneration_amount;

    RemunerationBreakdown {
        remuneration_amount,
        total_payment_amount,
    }
}
