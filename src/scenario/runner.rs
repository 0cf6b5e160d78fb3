//! Scenario Runner
//!
//! Executes a scenario's steps against the accounts it opens. The first
//! rejected step aborts the rest of the scenario; every account that was
//! opened is released exactly once, newest first, on every path.

use serde::Serialize;
use std::fmt;

use crate::aggregate::{Account, AccountInfo};
use crate::domain::DomainError;
use crate::error::{AppError, AppResult};

use super::{Placement, Scenario, Step};

/// An opened account, kept where its step asked for it
enum Slot {
    Heap(Box<Account>),
    Stack(Account),
}

impl Slot {
    fn account(&self) -> &Account {
        match self {
            Slot::Heap(account) => &**account,
            Slot::Stack(account) => account,
        }
    }

    fn account_mut(&mut self) -> &mut Account {
        match self {
            Slot::Heap(account) => &mut **account,
            Slot::Stack(account) => account,
        }
    }
}

/// Outcome of a scenario run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub number: u32,
    pub title: String,
    /// Steps that completed successfully
    pub steps_completed: usize,
    pub steps_total: usize,
    /// Snapshots taken by `Show` steps
    pub snapshots: Vec<AccountInfo>,
    /// The rejection that aborted the scenario
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<DomainError>,
    /// Final state of each account, in release order
    pub released: Vec<AccountInfo>,
}

impl ScenarioReport {
    fn new(scenario: &Scenario) -> Self {
        Self {
            number: scenario.number,
            title: scenario.title.clone(),
            steps_completed: 0,
            steps_total: scenario.steps.len(),
            snapshots: Vec::new(),
            failure: None,
            released: Vec::new(),
        }
    }

    /// True when every step ran without a rejection
    pub fn succeeded(&self) -> bool {
        self.failure.is_none()
    }

    /// Holder names in the order their accounts were released
    pub fn release_order(&self) -> Vec<&str> {
        self.released
            .iter()
            .map(|info| info.holder_name.as_str())
            .collect()
    }
}

/// Runs scenarios one at a time
#[derive(Debug, Default)]
pub struct ScenarioRunner;

impl ScenarioRunner {
    pub fn new() -> Self {
        Self
    }

    /// Run a scenario to completion or to its first rejection.
    ///
    /// Domain rejections are recorded in the report, not returned. An error
    /// is returned only for a malformed script (an operation with no open
    /// account), after releasing whatever was opened.
    pub fn run(&self, scenario: &Scenario) -> AppResult<ScenarioReport> {
        tracing::info!(scenario = scenario.number, title = %scenario.title, "Starting scenario");

        let mut report = ScenarioReport::new(scenario);
        let mut slots: Vec<Slot> = Vec::new();

        let outcome = self.execute(scenario, &mut slots, &mut report);

        // Release newest first, whatever happened above
        while let Some(slot) = slots.pop() {
            report.released.push(slot.account().info());
            drop(slot);
        }

        match outcome {
            Ok(()) => {}
            Err(AppError::Domain(err)) => {
                tracing::warn!(
                    scenario = scenario.number,
                    code = err.code(),
                    message = %err,
                    "Operation rejected, scenario aborted"
                );
                report.failure = Some(err);
            }
            Err(err) => return Err(err),
        }

        tracing::info!(
            scenario = scenario.number,
            completed = report.steps_completed,
            total = report.steps_total,
            "Scenario finished"
        );
        Ok(report)
    }

    fn execute(
        &self,
        scenario: &Scenario,
        slots: &mut Vec<Slot>,
        report: &mut ScenarioReport,
    ) -> AppResult<()> {
        for (index, step) in scenario.steps.iter().enumerate() {
            match step {
                Step::Open {
                    holder,
                    initial_balance,
                    placement,
                } => {
                    let account = Account::new(holder.as_str(), *initial_balance)?;
                    slots.push(match placement {
                        Placement::Heap => Slot::Heap(Box::new(account)),
                        Placement::Stack => Slot::Stack(account),
                    });
                }
                Step::Credit { amount } => {
                    current(slots, index)?.credit(*amount)?;
                }
                Step::Debit { amount } => {
                    current(slots, index)?.debit(*amount)?;
                }
                Step::Show => {
                    let info = current(slots, index)?.info();
                    report.snapshots.push(info);
                }
            }
            report.steps_completed += 1;
        }
        Ok(())
    }
}

fn current(slots: &mut [Slot], step: usize) -> AppResult<&mut Account> {
    slots
        .last_mut()
        .map(Slot::account_mut)
        .ok_or(AppError::NoOpenAccount { step })
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for info in &self.snapshots {
            writeln!(f, "  Account {}", info)?;
        }
        if let Some(err) = &self.failure {
            writeln!(f, "  [ERROR CAUGHT] {}", err)?;
        }
        for info in &self.released {
            writeln!(f, "  Released {}", info)?;
        }
        write!(
            f,
            "  Steps completed: {}/{}",
            self.steps_completed, self.steps_total
        )
    }
}
