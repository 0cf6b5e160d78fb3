//! account_lifecycle Library
//!
//! Validated bank-account model plus the scripted scenario driver used by
//! the demo binary.

pub mod aggregate;
pub mod config;
pub mod domain;
pub mod scenario;

mod error;

pub use aggregate::{Account, AccountInfo};
pub use config::Config;
pub use domain::{Amount, AmountError, Balance, DomainError, Operation};
pub use error::{AppError, AppResult};
pub use scenario::{Placement, Scenario, ScenarioReport, ScenarioRunner, Step};
