//! Integration tests for the account lifecycle scenarios

use account_lifecycle::{Account, DomainError, Scenario, ScenarioRunner};
use rust_decimal_macros::dec;

#[test]
fn test_deposit_then_withdraw() {
    let mut account = Account::new("Alice", dec!(1000.00)).unwrap();
    assert_eq!(account.balance().value(), dec!(1000.00));

    assert_eq!(account.credit(dec!(500.00)).unwrap().value(), dec!(1500.00));
    assert_eq!(account.debit(dec!(300.00)).unwrap().value(), dec!(1200.00));
}

#[test]
fn test_negative_initial_balance() {
    let result = Account::new("Bob", dec!(-500.00));
    assert!(matches!(result, Err(DomainError::InvalidBalance { .. })));
}

#[test]
fn test_withdraw_more_than_balance() {
    let mut account = Account::new("Carol", dec!(500.00)).unwrap();

    let result = account.debit(dec!(800.00));

    assert!(matches!(result, Err(DomainError::InsufficientFunds { .. })));
    assert_eq!(account.balance().value(), dec!(500.00));
}

#[test]
fn test_negative_deposit() {
    let mut account = Account::new("Grace", dec!(1000.00)).unwrap();

    let result = account.credit(dec!(-100.00));

    assert!(matches!(result, Err(DomainError::InvalidTransaction { .. })));
    assert_eq!(account.balance().value(), dec!(1000.00));
}

#[test]
fn test_mixed_operations() {
    let mut account = Account::new("David", dec!(2000.00)).unwrap();

    assert_eq!(account.credit(dec!(1000.00)).unwrap().value(), dec!(3000.00));
    assert_eq!(account.debit(dec!(500.00)).unwrap().value(), dec!(2500.00));
    assert_eq!(account.debit(dec!(1500.00)).unwrap().value(), dec!(1000.00));

    let result = account.debit(dec!(1500.00));
    assert!(matches!(result, Err(DomainError::InsufficientFunds { .. })));
    assert_eq!(account.balance().value(), dec!(1000.00));
}

#[test]
fn test_catalog_outcomes() {
    let runner = ScenarioRunner::new();
    let reports: Vec<_> = Scenario::catalog()
        .iter()
        .map(|scenario| runner.run(scenario).unwrap())
        .collect();

    let codes: Vec<Option<&str>> = reports
        .iter()
        .map(|report| report.failure.as_ref().map(DomainError::code))
        .collect();
    assert_eq!(
        codes,
        vec![
            None,
            Some("invalid_balance"),
            Some("insufficient_funds"),
            Some("insufficient_funds"),
            Some("invalid_transaction"),
            None,
        ]
    );

    // Final balances as released
    assert_eq!(reports[0].released[0].balance.value(), dec!(1200.00));
    assert!(reports[1].released.is_empty());
    assert_eq!(reports[2].released[0].balance.value(), dec!(500.00));
    assert_eq!(reports[3].released[0].balance.value(), dec!(1000.00));
    assert_eq!(reports[4].released[0].balance.value(), dec!(1000.00));
}

#[test]
fn test_catalog_stack_accounts_released_in_reverse() {
    let catalog = Scenario::catalog();
    let report = ScenarioRunner::new().run(&catalog[5]).unwrap();

    assert!(report.succeeded());
    assert_eq!(report.release_order(), vec!["Frank Garcia", "Eva Martinez"]);
}

#[test]
fn test_report_serializes_failure_kind() {
    let catalog = Scenario::catalog();
    let report = ScenarioRunner::new().run(&catalog[2]).unwrap();

    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["number"], 3);
    assert_eq!(json["failure"]["kind"], "insufficient_funds");
    assert_eq!(json["released"][0]["holder_name"], "Carol Williams");
}
