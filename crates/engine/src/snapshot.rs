//! Full-state snapshot for the persistence adapter.
//!
//! The ledger exports its whole state as one serializable value and restores
//! from it at startup. Restoring re-validates every invariant, so a corrupt
//! or hand-edited snapshot is rejected instead of poisoning the store.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    LedgerError, ResultLedger, expenses::Expense, groups::Group, split, users::User,
};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub users: HashMap<Uuid, User>,
    pub groups: HashMap<Uuid, Group>,
    pub expenses: HashMap<Uuid, Expense>,
}

impl Snapshot {
    /// Checks every store invariant on untrusted data.
    ///
    /// - group names non-empty, rosters of at least 2 unique members
    /// - group expense ids resolve to expenses owned by that group
    /// - expense group ids resolve, and the owning group lists the expense
    /// - amounts positive, payer in the roster, split invariant satisfied
    pub fn validate(&self) -> ResultLedger<()> {
        for (id, group) in &self.groups {
            if *id != group.id {
                return Err(LedgerError::KeyNotFound(format!(
                    "group {id} stored under mismatching key"
                )));
            }
            if group.name.trim().is_empty() {
                return Err(LedgerError::InvalidAmount(
                    "group name must not be empty".to_string(),
                ));
            }
            if group.members.len() < 2 {
                return Err(LedgerError::InsufficientMembers(format!(
                    "group {id} has {} members",
                    group.members.len()
                )));
            }
            let mut member_ids = std::collections::HashSet::new();
            for member in &group.members {
                if !member_ids.insert(member.id) {
                    return Err(LedgerError::ExistingKey(member.id.to_string()));
                }
            }
            for expense_id in &group.expenses {
                match self.expenses.get(expense_id) {
                    Some(expense) if expense.group_id == group.id => {}
                    Some(_) => {
                        return Err(LedgerError::SplitMismatch(format!(
                            "expense {expense_id} listed by group {id} but owned elsewhere"
                        )));
                    }
                    None => {
                        return Err(LedgerError::KeyNotFound(expense_id.to_string()));
                    }
                }
            }
        }

        for (id, expense) in &self.expenses {
            if *id != expense.id {
                return Err(LedgerError::KeyNotFound(format!(
                    "expense {id} stored under mismatching key"
                )));
            }
            let group = self
                .groups
                .get(&expense.group_id)
                .ok_or_else(|| LedgerError::GroupNotFound(expense.group_id.to_string()))?;
            if !group.expenses.contains(id) {
                return Err(LedgerError::KeyNotFound(format!(
                    "expense {id} missing from its group's expense list"
                )));
            }
            if !expense.amount.is_positive() {
                return Err(LedgerError::InvalidAmount(format!(
                    "expense {id} has non-positive amount"
                )));
            }
            if !group.is_member(expense.paid_by.id) {
                return Err(LedgerError::KeyNotFound(format!(
                    "payer {} is not a member of group {}",
                    expense.paid_by.id, group.id
                )));
            }
            split::check_split_invariant(
                expense.amount,
                &group.member_ids(),
                &expense.split_details,
            )?;
        }

        Ok(())
    }
}
