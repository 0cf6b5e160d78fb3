//! Account Aggregate
//!
//! Account is the single entity of the model: a holder name and a
//! non-negative balance. Every mutation is validated, and a failed call
//! leaves the account exactly as it was.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use crate::domain::{Amount, Balance, DomainError, Operation};

/// Account Aggregate
///
/// Owned by whichever scope created it. Dropping the account releases it
/// and emits a lifecycle record with its final balance.
#[derive(Debug, PartialEq)]
pub struct Account {
    /// Account holder (not validated, may be empty)
    holder_name: String,

    /// Current balance, never negative
    balance: Balance,
}

/// Read-only snapshot of an account
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountInfo {
    pub holder_name: String,
    pub balance: Balance,
}

impl Account {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Open a new account.
    ///
    /// # Errors
    /// - `DomainError::InvalidBalance` if `initial_balance` is negative.
    ///   No account is produced in that case.
    pub fn new(holder_name: impl Into<String>, initial_balance: Decimal) -> Result<Self, DomainError> {
        let holder_name = holder_name.into();
        tracing::debug!(holder = %holder_name, %initial_balance, "Validating initial balance");

        let balance = Balance::new(initial_balance).map_err(|_| {
            tracing::warn!(
                holder = %holder_name,
                %initial_balance,
                "Rejected account creation: negative initial balance"
            );
            DomainError::invalid_balance(initial_balance)
        })?;

        tracing::debug!(holder = %holder_name, %balance, "Account opened");
        Ok(Self {
            holder_name,
            balance,
        })
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Credit (deposit) money to the account and return the new balance.
    ///
    /// # Errors
    /// - `DomainError::InvalidTransaction` if `amount <= 0`, or if the sum
    ///   cannot be represented exactly by a `Decimal`.
    pub fn credit(&mut self, amount: Decimal) -> Result<Balance, DomainError> {
        let amount = self.validate_amount(Operation::Deposit, amount)?;

        let new_balance = self.balance.credit(&amount).map_err(|e| {
            tracing::warn!(holder = %self.holder_name, %amount, error = %e, "Rejected deposit");
            DomainError::unrepresentable(Operation::Deposit, amount.value())
        })?;

        self.balance = new_balance;
        tracing::debug!(holder = %self.holder_name, %amount, balance = %self.balance, "Deposit applied");
        Ok(self.balance)
    }

    /// Debit (withdraw) money from the account and return the new balance.
    ///
    /// Amount validity is checked before funds sufficiency.
    ///
    /// # Errors
    /// - `DomainError::InvalidTransaction` if `amount <= 0`, or if the
    ///   difference cannot be represented exactly by a `Decimal`
    /// - `DomainError::InsufficientFunds` if `amount` exceeds the balance
    pub fn debit(&mut self, amount: Decimal) -> Result<Balance, DomainError> {
        let amount = self.validate_amount(Operation::Withdrawal, amount)?;

        if !self.balance.is_sufficient_for(&amount) {
            tracing::warn!(
                holder = %self.holder_name,
                %amount,
                balance = %self.balance,
                "Rejected withdrawal: insufficient funds"
            );
            return Err(DomainError::insufficient_funds(
                amount.value(),
                self.balance.value(),
            ));
        }

        // Sufficiency holds here, so only rounding can fail the subtraction
        let new_balance = self.balance.debit(&amount).map_err(|e| {
            tracing::warn!(holder = %self.holder_name, %amount, error = %e, "Rejected withdrawal");
            DomainError::unrepresentable(Operation::Withdrawal, amount.value())
        })?;

        self.balance = new_balance;
        tracing::debug!(holder = %self.holder_name, %amount, balance = %self.balance, "Withdrawal applied");
        Ok(self.balance)
    }

    fn validate_amount(&self, operation: Operation, amount: Decimal) -> Result<Amount, DomainError> {
        Amount::new(amount).map_err(|_| {
            tracing::warn!(holder = %self.holder_name, %operation, %amount, "Rejected non-positive amount");
            DomainError::invalid_transaction(operation, amount)
        })
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn balance(&self) -> Balance {
        self.balance
    }

    /// Snapshot of the account for display or serialization
    pub fn info(&self) -> AccountInfo {
        AccountInfo {
            holder_name: self.holder_name.clone(),
            balance: self.balance,
        }
    }
}

impl Drop for Account {
    fn drop(&mut self) {
        tracing::debug!(
            holder = %self.holder_name,
            final_balance = %self.balance,
            "Account released"
        );
        #[cfg(test)]
        release_log::record(&self.holder_name);
    }
}


impl fmt::Display for AccountInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ${}", self.holder_name, self.balance)
    }
}
