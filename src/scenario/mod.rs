//! Scenario definitions
//!
//! A scenario is a scripted sequence of steps run against accounts by the
//! demo driver. Steps represent intentions; the runner decides what
//! happens when one of them is rejected.

mod runner;

use rust_decimal::Decimal;
use serde::Serialize;

pub use runner::{ScenarioReport, ScenarioRunner};

/// Where the demo keeps an opened account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Boxed, the equivalent of a dynamically allocated object
    Heap,
    /// Held by value in the runner's scope
    Stack,
}

/// A single scripted step
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    Open {
        holder: String,
        initial_balance: Decimal,
        placement: Placement,
    },
    /// Deposit into the most recently opened account
    Credit { amount: Decimal },
    /// Withdraw from the most recently opened account
    Debit { amount: Decimal },
    /// Record a snapshot of the most recently opened account
    Show,
}

/// Scripted sequence of steps
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    pub number: u32,
    pub title: String,
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn new(number: u32, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            steps: Vec::new(),
        }
    }

    pub fn open(self, holder: impl Into<String>, initial_balance: Decimal) -> Self {
        self.open_with(holder, initial_balance, Placement::Heap)
    }

    pub fn open_on_stack(self, holder: impl Into<String>, initial_balance: Decimal) -> Self {
        self.open_with(holder, initial_balance, Placement::Stack)
    }

    fn open_with(mut self, holder: impl Into<String>, initial_balance: Decimal, placement: Placement) -> Self {
        self.steps.push(Step::Open {
            holder: holder.into(),
            initial_balance,
            placement,
        });
        self
    }

    pub fn credit(mut self, amount: Decimal) -> Self {
        self.steps.push(Step::Credit { amount });
        self
    }

    pub fn debit(mut self, amount: Decimal) -> Self {
        self.steps.push(Step::Debit { amount });
        self
    }

    pub fn show(mut self) -> Self {
        self.steps.push(Step::Show);
        self
    }

    /// The six demo scenarios, in run order
    pub fn catalog() -> Vec<Scenario> {
        vec![
            Scenario::new(1, "Valid Account Creation")
                .open("Alice Johnson", Decimal::new(100000, 2))
                .show()
                .credit(Decimal::new(50000, 2))
                .show()
                .debit(Decimal::new(30000, 2))
                .show(),
            Scenario::new(2, "Invalid Account Creation (Negative Balance)")
                .open("Bob Smith", Decimal::new(-50000, 2))
                .show(),
            Scenario::new(3, "Withdrawal with Insufficient Funds")
                .open("Carol Williams", Decimal::new(50000, 2))
                .show()
                .debit(Decimal::new(80000, 2))
                .show(),
            Scenario::new(4, "Multiple Operations with Mixed Results")
                .open("David Brown", Decimal::new(200000, 2))
                .show()
                .credit(Decimal::new(100000, 2))
                .debit(Decimal::new(50000, 2))
                .show()
                .debit(Decimal::new(150000, 2))
                .show()
                .debit(Decimal::new(150000, 2))
                .show(),
            Scenario::new(5, "Invalid Transaction Amounts")
                .open("Grace Lee", Decimal::new(100000, 2))
                .show()
                .credit(Decimal::new(-10000, 2))
                .show(),
            Scenario::new(6, "Destructor Order with Stack Objects")
                .open_on_stack("Eva Martinez", Decimal::new(150000, 2))
                .open_on_stack("Frank Garcia", Decimal::new(250000, 2)),
        ]
    }
}
