//! Amount calculation: remuneration totals and cross-currency quotes.
//!
//! Pure functions over Decimal inputs, callable on every keystroke of
//! the intake form. Nothing here performs I/O or fails on bad input.

mod cross_currency;
mod remuneration;

pub use cross_currency::{
    CrossCurrencyQuote, FEE_PERCENTAGE, MIN_FEE, RateSource, RateTable,
};
pub use remuneration::{RemunerationBreakdown, compute_remuneration};
