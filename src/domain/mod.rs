//! Domain module
//!
//! Core domain primitives and error types.

pub mod amount;
pub mod error;

pub use amount::{Amount, AmountError, Balance};
pub use error::{DomainError, Operation};
