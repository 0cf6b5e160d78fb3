//! Amount and Balance types
//!
//! Domain primitives for monetary values with business rule validation.
//! Both are validated at construction time, so an `Amount` is always
//! strictly positive and a `Balance` is never negative.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Amount represents a validated transaction value.
///
/// # Invariants
/// - Value is always positive (> 0)
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use account_lifecycle::domain::Amount;
///
/// let amount = Amount::new(Decimal::new(100, 0)).unwrap();
/// assert_eq!(amount.value(), Decimal::new(100, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

/// Errors that can occur when creating or combining amounts
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("Amount must be positive (got {0})")]
    NotPositive(Decimal),

    #[error("Balance cannot be negative (got {0})")]
    Negative(Decimal),

    #[error("Balance cannot be represented exactly")]
    Overflow,
}

impl Amount {
    /// Create a new Amount with validation.
    ///
    /// # Errors
    /// - `AmountError::NotPositive` if value <= 0
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value <= Decimal::ZERO {
            return Err(AmountError::NotPositive(value));
        }
        Ok(Self(value))
    }

    /// Get the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// Balance represents an account balance (can be zero or positive).
/// Unlike Amount, Balance can be zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Balance(Decimal);

impl Balance {
    /// Create a new balance (zero or positive)
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value < Decimal::ZERO {
            return Err(AmountError::Negative(value));
        }
        Ok(Self(value))
    }

    /// Create a zero balance
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying value
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Check if balance is sufficient for withdrawal
    pub fn is_sufficient_for(&self, amount: &Amount) -> bool {
        self.0 >= amount.value()
    }

    /// Add amount to balance
    ///
    /// Fails with `Overflow` when the sum is out of range or would be
    /// rounded to fit 28 significant digits.
    pub fn credit(&self, amount: &Amount) -> Result<Balance, AmountError> {
        let new_value = self
            .0
            .checked_add(amount.value())
            .filter(|sum| sum.checked_sub(self.0) == Some(amount.value()))
            .ok_or(AmountError::Overflow)?;
        Balance::new(new_value)
    }

    /// Subtract amount from balance
    ///
    /// Fails with `Negative` when the amount exceeds the balance, and with
    /// `Overflow` when the difference would be rounded.
    pub fn debit(&self, amount: &Amount) -> Result<Balance, AmountError> {
        let new_value = self
            .0
            .checked_sub(amount.value())
            .ok_or(AmountError::Overflow)?;
        let new_balance = Balance::new(new_value)?;
        if self.0.checked_sub(new_value) != Some(amount.value()) {
            return Err(AmountError::Overflow);
        }
        Ok(new_balance)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Default for Balance {
    fn default() -> Self {
        Self::zero()
    }
}

impl TryFrom<Decimal> for Balance {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Balance::new(value)
    }
}

impl From<Balance> for Decimal {
    fn from(balance: Balance) -> Self {
        balance.0
    }
}
