use uuid::Uuid;

use crate::{
    LedgerError, Money, ResultLedger,
    expenses::{Expense, SplitEntry, SplitType},
    split,
};

use super::{Ledger, normalize_optional_text, normalize_required_name};

impl Ledger {
    /// Records an expense against a group.
    ///
    /// `split_details` is expected to come from the split calculator
    /// ([`split::equal_split`] / [`split::validate_custom_split`]); the store
    /// still re-checks the full invariant before touching any state, so a
    /// caller that skipped the calculator cannot corrupt the ledger.
    ///
    /// On any failure the store is completely unchanged.
    #[allow(clippy::too_many_arguments)]
    pub fn record_expense(
        &mut self,
        group_id: Uuid,
        title: &str,
        description: Option<&str>,
        category: &str,
        amount: Money,
        paid_by: Uuid,
        split_type: SplitType,
        split_details: Vec<SplitEntry>,
    ) -> ResultLedger<Uuid> {
        let title = normalize_required_name(title, "expense title")?;
        let category = normalize_required_name(category, "category")?;
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(
                "expense amount must be > 0".to_string(),
            ));
        }

        let group = self
            .groups
            .get(&group_id)
            .ok_or_else(|| LedgerError::GroupNotFound(group_id.to_string()))?;
        let payer = group
            .member(paid_by)
            .ok_or_else(|| LedgerError::KeyNotFound("payer is not a group member".to_string()))?
            .clone();

        split::check_split_invariant(amount, &group.member_ids(), &split_details)?;

        let expense = Expense::new(
            self.ids.new_id(),
            group_id,
            title,
            normalize_optional_text(description),
            category,
            amount,
            payer,
            split_type,
            split_details,
        )?;
        let id = expense.id;

        // All validation passed; both mutations land together.
        if let Some(group) = self.groups.get_mut(&group_id) {
            group.expenses.push(id);
        }
        tracing::info!(
            expense_id = %id,
            group_id = %group_id,
            amount = %amount,
            split = split_type.as_str(),
            "recorded expense"
        );
        self.expenses.insert(id, expense);
        Ok(id)
    }

    /// Expenses of a group in insertion order.
    ///
    /// An unknown group id yields an empty list, not an error: callers treat
    /// it as "no expenses". Display ordering (e.g. newest first) is the
    /// caller's concern.
    pub fn list_group_expenses(&self, group_id: Uuid) -> Vec<&Expense> {
        let Some(group) = self.groups.get(&group_id) else {
            return Vec::new();
        };
        group
            .expenses
            .iter()
            .filter_map(|id| self.expenses.get(id))
            .collect()
    }
}
