//! The module contains the errors the ledger can throw.
//!
//! The errors are:
//!
//! - [`GroupNotFound`] thrown when an operation references a group id that
//!   does not resolve.
//! - [`InvalidAmount`] thrown when an amount is non-positive, or negative
//!   where zero is allowed.
//! - [`SplitMismatch`] thrown when split entries do not cover the group
//!   members or their sum drifts from the expense amount.
//! - [`InsufficientMembers`] thrown when a group is created with fewer than
//!   two members.
//!
//!  [`GroupNotFound`]: LedgerError::GroupNotFound
//!  [`InvalidAmount`]: LedgerError::InvalidAmount
//!  [`SplitMismatch`]: LedgerError::SplitMismatch
//!  [`InsufficientMembers`]: LedgerError::InsufficientMembers
use thiserror::Error;

/// Ledger custom errors.
///
/// Every variant is a local validation failure reported synchronously to the
/// caller; none of them leaves the store partially mutated.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Group not found: {0}")]
    GroupNotFound(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Split mismatch: {0}")]
    SplitMismatch(String),
    #[error("Insufficient members: {0}")]
    InsufficientMembers(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
}
