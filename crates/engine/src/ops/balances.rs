use uuid::Uuid;

use crate::{Money, expenses::Expense};

use super::Ledger;

impl Ledger {
    /// Net balance of `user_id`, scoped to one group or to every expense in
    /// the store when `group_id` is `None`.
    ///
    /// Per expense: the payer gains every other member's share; a non-payer
    /// loses their own share. Positive = the user is owed money, negative =
    /// the user owes money. An empty scope (including an unknown group id)
    /// is zero, and the result is additive across expenses in any order.
    pub fn balance_of(&self, user_id: Uuid, group_id: Option<Uuid>) -> Money {
        match group_id {
            Some(group_id) => self
                .list_group_expenses(group_id)
                .into_iter()
                .map(|expense| expense_balance(expense, user_id))
                .sum(),
            None => self
                .expenses
                .values()
                .map(|expense| expense_balance(expense, user_id))
                .sum(),
        }
    }

    /// Net pairwise balance of `user_id` against `other`.
    ///
    /// Scans **all** expenses regardless of group, unlike [`balance_of`]'s
    /// optional group filter; this cross-group aggregation is deliberate.
    /// Expenses paid by neither user contribute nothing, so
    /// `balance_between(a, b) == -balance_between(b, a)`.
    ///
    /// [`balance_of`]: Ledger::balance_of
    pub fn balance_between(&self, user_id: Uuid, other: Uuid) -> Money {
        self.expenses
            .values()
            .map(|expense| {
                if expense.paid_by.id == user_id {
                    expense.share_of(other)
                } else if expense.paid_by.id == other {
                    -expense.share_of(user_id)
                } else {
                    Money::ZERO
                }
            })
            .sum()
    }
}

fn expense_balance(expense: &Expense, user_id: Uuid) -> Money {
    if expense.paid_by.id == user_id {
        expense.owed_to_payer()
    } else {
        -expense.share_of(user_id)
    }
}
