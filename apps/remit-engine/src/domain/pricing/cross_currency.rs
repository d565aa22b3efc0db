//! Indicative cross-currency quotes for the intake form.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{Currency, Money};

/// Transfer fee percentage applied to the send amount.
pub const FEE_PERCENTAGE: Decimal = dec!(0.025);

/// Minimum transfer fee, in units of the send currency.
pub const MIN_FEE: Decimal = dec!(5);

/// How the exchange rate was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// Send and receive currencies are identical; rate is 1.
    SameCurrency,
    /// Directed pair found in the table.
    Direct,
    /// Inverse pair found; rate is the reciprocal.
    Inverse,
    /// Neither pair known; rate defaults to 1 (degraded, not an error).
    Fallback,
}

/// An indicative quote for a cross-currency transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossCurrencyQuote {
    /// Units of receive currency per unit of send currency.
    pub rate: Decimal,
    /// `max(send_amount × FEE_PERCENTAGE, MIN_FEE)` in the send currency.
    pub fee: Money,
    /// `send_amount + fee`.
    pub total_cost: Money,
    /// `send_amount × rate`.
    pub receive_amount: Money,
    /// How the rate was resolved; `Fallback` should be surfaced as a
    /// non-blocking warning to the caller.
    pub rate_source: RateSource,
}

/// Static directed table of indicative exchange rates.
#[derive(Debug, Clone)]
pub struct RateTable {
    rates: HashMap<(Currency, Currency), Decimal>,
}

impl RateTable {
    /// Build an empty table. Every lookup falls back to a rate of 1.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    /// Add or replace a directed pair rate.
    pub fn insert(&mut self, send: Currency, receive: Currency, rate: Decimal) {
        self.rates.insert((send, receive), rate);
    }

    /// Resolve the rate for a currency pair.
    ///
    /// Lookup order: same currency, direct pair, inverse pair (reciprocal),
    /// then a fallback of 1. The fallback is documented degraded behavior,
    /// not an error; it is logged as a warning and reported in the source.
    #[must_use]
    pub fn rate_for(&self, send: &Currency, receive: &Currency) -> (Decimal, RateSource) {
        if send == receive {
            return (Decimal::ONE, RateSource::SameCurrency);
        }
        if let Some(rate) = self.rates.get(&(send.clone(), receive.clone())) {
            return (*rate, RateSource::Direct);
        }
        if let Some(inverse) = self.rates.get(&(receive.clone(), send.clone()))
            && !inverse.is_zero()
        {
            return (Decimal::ONE / inverse, RateSource::Inverse);
        }
        tracing::warn!(
            send = %send,
            receive = %receive,
            "no exchange rate for pair, falling back to 1"
        );
        (Decimal::ONE, RateSource::Fallback)
    }

    /// Compute an indicative quote for a transfer.
    ///
    /// Never fails: a negative send amount is treated as 0.
    #[must_use]
    pub fn quote(
        &self,
        send_amount: Money,
        send: &Currency,
        receive: &Currency,
    ) -> CrossCurrencyQuote {
        let amount = send_amount.or_zero();
        let (rate, rate_source) = self.rate_for(send, receive);

        let percentage_fee = amount * FEE_PERCENTAGE;
        let fee = percentage_fee.max(Money::new(MIN_FEE)).round();
        let total_cost = amount + fee;
        let receive_amount = (amount * rate).round();

        CrossCurrencyQuote {
            rate,
            fee,
            total_cost,
            receive_amount,
            rate_source,
        }
    }
}

impl Default for RateTable {
    /// Table seeded with the indicative corridor rates.
    fn default() -> Self {
        let mut table = Self::empty();
        for (send, receive, rate) in [
            ("USD", "NGN", dec!(1550.50)),
            ("USD", "KES", dec!(152.30)),
            ("USD", "GHS", dec!(15.40)),
            ("EUR", "NGN", dec!(1680.20)),
            ("EUR", "KES", dec!(165.80)),
            ("EUR", "GHS", dec!(16.70)),
            ("GBP", "NGN", dec!(1950.00)),
            ("GBP", "KES", dec!(192.50)),
            ("GBP", "GHS", dec!(19.40)),
            ("USD", "EUR", dec!(0.92)),
            ("USD", "GBP", dec!(0.79)),
            ("EUR", "USD", dec!(1.09)),
            ("EUR", "GBP", dec!(0.86)),
            ("GBP", "USD", dec!(1.27)),
            ("GBP", "EUR", dec!(1.16)),
        ] {
            table.insert(Currency::new(send), Currency::new(receive), rate);
        }
        table
    }
}
