//! Property tests for account validation rules

use account_lifecycle::{Account, DomainError};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Two-place decimal built from a range of cents
fn money(range: std::ops::Range<i64>) -> impl Strategy<Value = Decimal> {
    range.prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    /// Any non-negative initial balance is accepted as given.
    #[test]
    fn prop_non_negative_balance_accepted(balance in money(0..1_000_000_000_000)) {
        let account = Account::new("holder", balance).unwrap();
        prop_assert_eq!(account.balance().value(), balance);
    }

    /// Any negative initial balance is rejected.
    #[test]
    fn prop_negative_balance_rejected(balance in money(-1_000_000_000_000..0)) {
        let result = Account::new("holder", balance);
        let is_invalid_balance = matches!(result, Err(DomainError::InvalidBalance { .. }));
        prop_assert!(is_invalid_balance);
    }

    /// Debiting at most the balance subtracts exactly.
    #[test]
    fn prop_debit_within_balance(
        balance in money(1..1_000_000_000_000),
        fraction in 1u32..=100,
    ) {
        let amount = (balance * Decimal::from(fraction) / Decimal::from(100)).round_dp(2);
        prop_assume!(amount > Decimal::ZERO);

        let mut account = Account::new("holder", balance).unwrap();
        let new_balance = account.debit(amount).unwrap();

        prop_assert_eq!(new_balance.value(), balance - amount);
        prop_assert!(new_balance.value() >= Decimal::ZERO);
    }

    /// Debiting more than the balance fails and leaves the balance alone,
    /// however many times it is retried.
    #[test]
    fn prop_overdraw_rejected(
        balance in money(0..1_000_000_000_000),
        excess in money(1..1_000_000_000),
        attempts in 1usize..5,
    ) {
        let mut account = Account::new("holder", balance).unwrap();

        for _ in 0..attempts {
            let result = account.debit(balance + excess);
            let is_insufficient = matches!(result, Err(DomainError::InsufficientFunds { .. }));
            prop_assert!(is_insufficient);
            prop_assert_eq!(account.balance().value(), balance);
        }
    }

    /// Non-positive amounts are invalid for both credit and debit, even when
    /// they would also exceed the balance.
    #[test]
    fn prop_non_positive_amount_rejected(
        balance in money(0..1_000_000_000),
        amount in money(-1_000_000_000..1),
    ) {
        let mut account = Account::new("holder", balance).unwrap();

        let credit = account.credit(amount);
        let debit = account.debit(amount);

        let credit_invalid = matches!(credit, Err(DomainError::InvalidTransaction { .. }));
        let debit_invalid = matches!(debit, Err(DomainError::InvalidTransaction { .. }));
        prop_assert!(credit_invalid);
        prop_assert!(debit_invalid);
        prop_assert_eq!(account.balance().value(), balance);
    }

    /// Credit adds exactly.
    #[test]
    fn prop_credit_adds(
        balance in money(0..1_000_000_000_000),
        amount in money(1..1_000_000_000_000),
    ) {
        let mut account = Account::new("holder", balance).unwrap();
        prop_assert_eq!(account.credit(amount).unwrap().value(), balance + amount);
    }
}
