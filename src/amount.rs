//! Monetary amount as written in a ledger.
//!
//! Uses `rust_decimal` internally. Amounts compare by value, so `16`,
//! `16.0` and `16.00` are equal while `16.004` is not. Nothing is rounded:
//! whole or one-place amounts are padded to cents, longer fractions are
//! kept as written.

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A transaction amount with at least two decimal places.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use coding_exercises::Amount;
///
/// let amount = Amount::from_str("49.9").unwrap();
/// assert_eq!(amount.to_string(), "49.90");
///
/// let precise = Amount::from_str("16.004").unwrap();
/// assert_eq!(precise.to_string(), "16.004");
/// assert_ne!(precise, Amount::from_str("16.00").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Minimum number of decimal places shown.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Creates a new `Amount` from a `Decimal`, padding it to cents.
    ///
    /// Only ever adds trailing zeros, so the value is unchanged.
    pub fn new(value: Decimal) -> Self {
        let mut padded = value;
        if padded.scale() < Self::SCALE {
            padded.rescale(Self::SCALE);
        }
        Amount(padded)
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Amount::new)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
