//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are currency-agnostic at this layer. Locale formatting (symbol,
//! digit grouping) belongs to whoever displays them; the only rendering
//! done here is the fixed two-decimal form used inside order messages.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty.
    #[error("price cannot be empty")]
    Empty,
    /// The input is not a decimal number.
    #[error("invalid price '{0}'")]
    Invalid(String),
    /// The input is below zero.
    #[error("price cannot be negative")]
    Negative,
    /// The input is above [`Price::max_parsed`].
    #[error("price must be at most {max}")]
    TooLarge {
        /// Largest accepted amount.
        max: Price,
    },
}

/// A non-negative monetary amount.
///
/// Arithmetic is exact: totals never drift the way binary floating point
/// would, so `0.1 + 0.2` really is `0.3`. Sums and products saturate at
/// `Decimal::MAX` instead of overflowing.
///
/// ## Examples
///
/// ```
/// use cardapio_core::Price;
///
/// let pizza = Price::parse("30").unwrap();
/// assert_eq!(pizza.to_fixed_2(), "30.00");
///
/// // pt-BR style decimal comma is accepted
/// let suco = Price::parse("4,5").unwrap();
/// assert_eq!(suco.to_fixed_2(), "4.50");
///
/// assert!(Price::parse("-1").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Largest amount [`Price::parse`] accepts, in cents (R$ 10.000.000,00).
    pub const MAX_PARSED_CENTS: i64 = 1_000_000_000;

    /// Wrap a decimal amount.
    ///
    /// No sign check is performed; callers are expected to pass
    /// non-negative amounts. Use [`Price::parse`] at input boundaries.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Build a price from an amount in cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Parse a price from user-facing text.
    ///
    /// Accepts either `.` or `,` as the decimal separator.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, not a number, negative, or
    /// above [`Price::max_parsed`].
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }

        let normalized = trimmed.replace(',', ".");
        let amount = normalized
            .parse::<Decimal>()
            .map_err(|_| PriceError::Invalid(trimmed.to_owned()))?;

        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }

        let max = Self::max_parsed();
        if amount > max.0 {
            return Err(PriceError::TooLarge { max });
        }

        Ok(Self(amount))
    }

    /// Largest amount accepted from text input.
    #[must_use]
    pub fn max_parsed() -> Self {
        Self::from_cents(Self::MAX_PARSED_CENTS)
    }

    /// Add, returning `None` on overflow.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Multiply by a quantity, returning `None` on overflow.
    #[must_use]
    pub fn checked_mul(self, quantity: u32) -> Option<Self> {
        self.0.checked_mul(Decimal::from(quantity)).map(Self)
    }

    /// Returns the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Render with exactly two decimal places, rounding half away from zero.
    #[must_use]
    pub fn to_fixed_2(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{rounded:.2}")
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fixed_2())
    }
}

impl std::str::FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).unwrap_or(Self(Decimal::MAX))
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        self.checked_mul(rhs).unwrap_or(Self(Decimal::MAX))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
