//! Aggregate module
//!
//! The account aggregate and its read-only snapshot.

pub mod account;

pub use account::{Account, AccountInfo};
