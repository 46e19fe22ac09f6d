//! Exchange rate records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rates quoted from a single currency, keyed by `to_currency_id` then `exchanger_id`.
pub type RatesFrom = BTreeMap<u32, BTreeMap<u32, Rate>>;

/// All rates, keyed by `from_currency_id`, `to_currency_id`, then `exchanger_id`.
pub type RateTable = BTreeMap<u32, RatesFrom>;

/// A rate offered by one exchanger for one currency pair.
///
/// A rate is identified by the triple `(from_currency_id, to_currency_id,
/// exchanger_id)`. Both amounts are strictly positive and finite, so
/// [`Rate::rate`] is always a well-defined quotient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    /// Currency the customer gives.
    pub from_currency_id: u32,
    /// Currency the customer receives.
    pub to_currency_id: u32,
    /// Exchanger offering the rate.
    pub exchanger_id: u32,
    /// Amount given.
    pub rate_give: f64,
    /// Amount received for `rate_give`.
    pub rate_receive: f64,
    /// `rate_give / rate_receive`.
    pub rate: f64,
    /// Exchanger reserve, passed through unchanged.
    pub reserve: String,
}

impl Rate {
    /// Creates a rate, computing the quotient.
    ///
    /// Returns `None` unless both amounts are finite and strictly positive.
    #[must_use]
    pub fn new(
        from_currency_id: u32,
        to_currency_id: u32,
        exchanger_id: u32,
        rate_give: f64,
        rate_receive: f64,
        reserve: impl Into<String>,
    ) -> Option<Self> {
        if !is_positive_amount(rate_give) || !is_positive_amount(rate_receive) {
            return None;
        }

        Some(Self {
            from_currency_id,
            to_currency_id,
            exchanger_id,
            rate_give,
            rate_receive,
            rate: rate_give / rate_receive,
            reserve: reserve.into(),
        })
    }

    /// Returns the `(from, to, exchanger)` identity of this rate.
    #[must_use]
    pub const fn key(&self) -> (u32, u32, u32) {
        (self.from_currency_id, self.to_currency_id, self.exchanger_id)
    }
}

/// Returns true if `amount` can be used as a rate operand.
#[must_use]
pub fn is_positive_amount(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rate_quotient() {
        let rate = Rate::new(1, 2, 5, 100.0, 95.5, "1000").unwrap();
        assert_relative_eq!(rate.rate, 100.0 / 95.5);
        assert_relative_eq!(rate.rate, 1.0471, epsilon = 1e-4);
        assert_eq!(rate.key(), (1, 2, 5));
        assert_eq!(rate.reserve, "1000");
    }

    #[test]
    fn test_rate_rejects_zero_operands() {
        assert!(Rate::new(1, 2, 5, 0.0, 95.5, "").is_none());
        assert!(Rate::new(1, 2, 5, 100.0, 0.0, "").is_none());
    }

    #[test]
    fn test_rate_rejects_non_finite_and_negative() {
        assert!(Rate::new(1, 2, 5, f64::NAN, 1.0, "").is_none());
        assert!(Rate::new(1, 2, 5, 1.0, f64::INFINITY, "").is_none());
        assert!(Rate::new(1, 2, 5, -3.0, 1.0, "").is_none());
    }
}
