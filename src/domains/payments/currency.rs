//! Currency conversion.
//!
//! The rate table is the single source of truth for supported currencies and
//! their rates. Rates are expressed as units of currency per one unit of the
//! base currency (GBP), immutable for the life of the process.

use thiserror::Error;

/// Currency codes accepted anywhere on the tool surface.
pub const SUPPORTED_CURRENCIES: &[&str] = &["GBP", "EUR", "USD", "JPY"];

/// A single payment amount must not exceed this value in the base currency.
pub const MAX_TRANSACTION_AMOUNT: f64 = 10_000.0;

/// Errors from currency operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// The currency code is not in the rate table.
    #[error("Unsupported currency: {0}")]
    Unsupported(String),
}

/// Static exchange-rate table relative to a base currency.
#[derive(Debug, Clone)]
pub struct RateTable {
    base: &'static str,
    rates: Vec<(&'static str, f64)>,
}

impl RateTable {
    /// The standard table: GBP base, rates per one GBP.
    pub fn standard() -> Self {
        Self {
            base: "GBP",
            rates: vec![
                ("GBP", 1.0),
                ("EUR", 1.15),
                ("USD", 1.25),
                ("JPY", 180.0),
            ],
        }
    }

    /// The base currency code.
    pub fn base(&self) -> &'static str {
        self.base
    }

    /// Iterate over (code, rate) pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.rates.iter().copied()
    }

    /// Whether a code (any case) is in the table.
    pub fn is_supported(&self, code: &str) -> bool {
        self.rate(code).is_ok()
    }

    /// Look up the rate for a code, case-insensitively.
    pub fn rate(&self, code: &str) -> Result<f64, CurrencyError> {
        let wanted = code.to_ascii_uppercase();
        self.rates
            .iter()
            .find(|(c, _)| *c == wanted)
            .map(|(_, r)| *r)
            .ok_or_else(|| CurrencyError::Unsupported(code.to_string()))
    }

    /// Convert without rounding. Used internally by summation so rounding
    /// error does not compound across records.
    pub fn convert_raw(&self, amount: f64, from: &str, to: &str) -> Result<f64, CurrencyError> {
        let from_rate = self.rate(from)?;
        let to_rate = self.rate(to)?;
        Ok(amount / from_rate * to_rate)
    }

    /// Convert an amount between two supported codes, rounded to two
    /// decimal places for display.
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, CurrencyError> {
        Ok(round_display(self.convert_raw(amount, from, to)?))
    }

    /// Sum a set of (amount, currency) items in a target currency.
    ///
    /// Raw converted values are accumulated first and rounded exactly once
    /// at the end. Rounding per item and then summing is incorrect here.
    pub fn sum_in<'a, I>(&self, items: I, target: &str) -> Result<f64, CurrencyError>
    where
        I: IntoIterator<Item = (f64, &'a str)>,
    {
        let mut total = 0.0;
        for (amount, code) in items {
            total += self.convert_raw(amount, code, target)?;
        }
        Ok(round_display(total))
    }
}

/// Round to two decimal places, the display precision for all amounts.
pub fn round_display(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_lookup_case_insensitive() {
        let rates = RateTable::standard();
        assert_eq!(rates.rate("eur").unwrap(), 1.15);
        assert_eq!(rates.rate("EUR").unwrap(), 1.15);
        assert_eq!(
            rates.rate("CHF"),
            Err(CurrencyError::Unsupported("CHF".to_string()))
        );
    }

    #[test]
    fn test_convert_eur_to_gbp() {
        let rates = RateTable::standard();
        // 200 EUR at 1.15 per GBP
        assert_eq!(rates.convert(200.0, "EUR", "GBP").unwrap(), 173.91);
    }

    #[test]
    fn test_convert_identity() {
        let rates = RateTable::standard();
        assert_eq!(rates.convert(42.5, "GBP", "GBP").unwrap(), 42.5);
    }

    #[test]
    fn test_convert_round_trip_within_tolerance() {
        let rates = RateTable::standard();
        for &from in SUPPORTED_CURRENCIES {
            for &to in SUPPORTED_CURRENCIES {
                let amount = 137.5;
                let there = rates.convert_raw(amount, from, to).unwrap();
                let back = rates.convert(there, to, from).unwrap();
                assert!(
                    (back - amount).abs() < 0.01,
                    "{} -> {} -> {} drifted: {}",
                    from,
                    to,
                    from,
                    back
                );
            }
        }
    }

    #[test]
    fn test_sum_accumulates_before_rounding() {
        let rates = RateTable::standard();
        // Seeded scenario: 100 GBP + 200 EUR + 50 GBP in GBP.
        let items = vec![(100.0, "GBP"), (200.0, "EUR"), (50.0, "GBP")];
        assert_eq!(rates.sum_in(items, "GBP").unwrap(), 323.91);
    }

    #[test]
    fn test_sum_within_one_unit_of_round_per_item() {
        let rates = RateTable::standard();
        let items = vec![(33.333, "EUR"), (33.333, "EUR"), (33.334, "EUR")];
        let accumulated = rates.sum_in(items.clone(), "GBP").unwrap();
        let per_item: f64 = items
            .iter()
            .map(|(a, c)| rates.convert(*a, c, "GBP").unwrap())
            .sum();
        assert!((accumulated - round_display(per_item)).abs() <= 0.01);
    }

    #[test]
    fn test_sum_unsupported_currency_errors() {
        let rates = RateTable::standard();
        let items = vec![(10.0, "GBP"), (5.0, "XXX")];
        assert!(rates.sum_in(items, "GBP").is_err());
    }
}
