//! Domain Error Types
//!
//! Pure domain errors that don't depend on the demo driver.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The transaction kind an `InvalidTransaction` error was raised from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Deposit,
    Withdrawal,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Deposit => f.write_str("Deposit"),
            Operation::Withdrawal => f.write_str("Withdrawal"),
        }
    }
}

/// Rejections raised by account construction and mutation.
///
/// Each kind is a rejected-input signal: not transient, not retriable.
/// The account is left exactly as it was before the failing call.
#[derive(Debug, Error, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DomainError {
    /// Negative initial balance at construction
    #[error("{message}")]
    InvalidBalance { message: String, requested: Decimal },

    /// Credit or debit with an amount that is not strictly positive, or
    /// whose result the balance cannot hold exactly
    #[error("{message}")]
    InvalidTransaction {
        message: String,
        operation: Operation,
        amount: Decimal,
    },

    /// Debit above the current balance
    #[error("{message}")]
    InsufficientFunds {
        message: String,
        required: Decimal,
        available: Decimal,
    },
}

impl DomainError {
    /// Create an invalid balance error
    pub fn invalid_balance(requested: Decimal) -> Self {
        Self::InvalidBalance {
            message: "Invalid account creation: Initial balance cannot be negative!".to_string(),
            requested,
        }
    }

    /// Create an invalid transaction error for a non-positive amount
    pub fn invalid_transaction(operation: Operation, amount: Decimal) -> Self {
        Self::InvalidTransaction {
            message: format!("{} failed: Amount must be positive!", operation),
            operation,
            amount,
        }
    }

    /// Create an invalid transaction error for an amount whose result
    /// cannot be represented exactly by the balance
    pub fn unrepresentable(operation: Operation, amount: Decimal) -> Self {
        Self::InvalidTransaction {
            message: format!("{} failed: Resulting balance cannot be represented exactly!", operation),
            operation,
            amount,
        }
    }

    /// Create an insufficient funds error
    pub fn insufficient_funds(required: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds {
            message: "Withdrawal failed: Insufficient funds in account!".to_string(),
            required,
            available,
        }
    }

    /// Stable machine-readable code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidBalance { .. } => "invalid_balance",
            Self::InvalidTransaction { .. } => "invalid_transaction",
            Self::InsufficientFunds { .. } => "insufficient_funds",
        }
    }

    /// Human-readable message carried by the error
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidBalance { message, .. }
            | Self::InvalidTransaction { message, .. }
            | Self::InsufficientFunds { message, .. } => message,
        }
    }
}
