use std::collections::HashMap;

use uuid::Uuid;

use crate::{
    LedgerError, ResultLedger,
    expenses::Expense,
    groups::Group,
    ids::{IdGen, RandomIds},
    users::User,
};

mod balances;
mod expenses;
mod groups;
mod snapshot;
mod users;

/// Authoritative in-memory store of users, groups and expenses.
///
/// Constructed once at application start and passed by reference to the
/// consumers; there is no global state. All mutations are synchronous and
/// atomic: an operation either fully applies or rejects before touching the
/// collections.
#[derive(Debug)]
pub struct Ledger {
    users: HashMap<Uuid, User>,
    groups: HashMap<Uuid, Group>,
    expenses: HashMap<Uuid, Expense>,
    ids: Box<dyn IdGen>,
}

impl Ledger {
    /// Return a builder for `Ledger`. Help to build the struct.
    pub fn builder() -> LedgerBuilder {
        LedgerBuilder::default()
    }

    pub fn user(&self, user_id: Uuid) -> Option<&User> {
        self.users.get(&user_id)
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    pub fn group(&self, group_id: Uuid) -> Option<&Group> {
        self.groups.get(&group_id)
    }

    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    pub fn expense(&self, expense_id: Uuid) -> Option<&Expense> {
        self.expenses.get(&expense_id)
    }

    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }
}

fn normalize_required_name(value: &str, label: &str) -> ResultLedger<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::InvalidAmount(format!(
            "{label} must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// The builder for `Ledger`
pub struct LedgerBuilder {
    ids: Box<dyn IdGen>,
}

impl Default for LedgerBuilder {
    fn default() -> Self {
        Self {
            ids: Box::new(RandomIds),
        }
    }
}

impl LedgerBuilder {
    /// Swap the id source (deterministic ids in tests).
    pub fn id_gen(mut self, ids: Box<dyn IdGen>) -> LedgerBuilder {
        self.ids = ids;
        self
    }

    /// Construct `Ledger`
    pub fn build(self) -> Ledger {
        Ledger {
            users: HashMap::new(),
            groups: HashMap::new(),
            expenses: HashMap::new(),
            ids: self.ids,
        }
    }
}
