//! Integer money amounts and display formatting.
//!
//! Prices are stored in the currency's minor unit as plain non-negative
//! integers; all arithmetic is integer arithmetic. Formatting reproduces the
//! browser's `toLocaleString` output for the supported locales: digits
//! grouped in threes with the locale's separator, plus the currency symbol.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};

/// A monetary amount in minor currency units.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Create an amount from minor units.
    #[must_use]
    pub const fn new(minor_units: u64) -> Self {
        Self(minor_units)
    }

    /// Get the amount in minor units.
    #[must_use]
    pub const fn minor_units(self) -> u64 {
        self.0
    }

    /// Whether the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(rhs)))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display currency for formatted amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Russian ruble, suffix symbol, no-break-space grouping ("8 500 ₽").
    #[default]
    Rub,
    /// US dollar, prefix symbol, comma grouping ("$8,500").
    Usd,
    /// Euro, suffix symbol, no-break-space grouping ("8 500 €").
    Eur,
}

impl Currency {
    /// The currency symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Rub => "\u{20bd}",
            Self::Usd => "$",
            Self::Eur => "\u{20ac}",
        }
    }

    /// Thousands separator used between digit groups.
    const fn group_separator(self) -> char {
        match self {
            Self::Rub | Self::Eur => '\u{a0}',
            Self::Usd => ',',
        }
    }

    const fn symbol_leads(self) -> bool {
        matches!(self, Self::Usd)
    }

    /// Format an amount with grouped digits and the currency symbol.
    #[must_use]
    pub fn format(self, amount: Money) -> String {
        let digits = group_digits(amount.minor_units(), self.group_separator());
        if self.symbol_leads() {
            format!("{}{digits}", self.symbol())
        } else {
            format!("{digits} {}", self.symbol())
        }
    }
}

/// Group a decimal rendering of `value` in threes from the right.
fn group_digits(value: u64, separator: char) -> String {
    let raw = value.to_string();
    let len = raw.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_matches_locale_output() {
        assert_eq!(group_digits(0, '\u{a0}'), "0");
        assert_eq!(group_digits(500, '\u{a0}'), "500");
        assert_eq!(group_digits(8500, '\u{a0}'), "8\u{a0}500");
        assert_eq!(group_digits(1_234_567, ','), "1,234,567");
        assert_eq!(group_digits(100, ','), "100");
        assert_eq!(group_digits(1000, ','), "1,000");
    }

    #[test]
    fn rub_formats_with_suffix_symbol() {
        assert_eq!(Currency::Rub.format(Money::new(8500)), "8\u{a0}500 \u{20bd}");
        assert_eq!(Currency::Rub.format(Money::ZERO), "0 \u{20bd}");
    }

    #[test]
    fn usd_formats_with_prefix_symbol() {
        assert_eq!(Currency::Usd.format(Money::new(8500)), "$8,500");
    }

    #[test]
    fn money_arithmetic() {
        let price = Money::new(3000);
        assert_eq!(price * 2, Money::new(6000));
        assert_eq!(price + Money::new(500), Money::new(3500));
        let sum: Money = [Money::new(1), Money::new(2), Money::new(3)].into_iter().sum();
        assert_eq!(sum, Money::new(6));
    }

    #[test]
    fn money_serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&Money::new(2500)).unwrap(), "2500");
    }
}
