//! Splittab ledger engine.
//!
//! In-memory core of the expense-splitting app: users form groups, log
//! shared expenses, and query running balances of who owes whom. The engine
//! has no I/O surface of its own; the binary (or any embedding UI layer)
//! drives it through [`Ledger`] and persists it through the snapshot
//! contract ([`Ledger::export_state`] / [`Ledger::import_state`]).
//!
//! The one invariant worth stating up front: every stored expense's split
//! entries cover exactly the owning group's members and sum to the expense
//! amount within one cent. The [`split`] module produces such splits; the
//! store re-checks them before every mutation.

pub use error::LedgerError;
pub use expenses::{DEFAULT_CATEGORIES, Expense, SplitEntry, SplitType};
pub use groups::Group;
pub use ids::{IdGen, RandomIds, SequentialIds};
pub use money::Money;
pub use ops::{Ledger, LedgerBuilder};
pub use snapshot::Snapshot;
pub use users::User;

mod error;
mod expenses;
mod groups;
mod ids;
mod money;
mod ops;
mod snapshot;
pub mod split;
mod users;

type ResultLedger<T> = Result<T, LedgerError>;
