use crate::{ResultLedger, snapshot::Snapshot};

use super::Ledger;

impl Ledger {
    /// Clones the full store state for the persistence adapter.
    pub fn export_state(&self) -> Snapshot {
        Snapshot {
            users: self.users.clone(),
            groups: self.groups.clone(),
            expenses: self.expenses.clone(),
        }
    }

    /// Replaces the in-memory state with `snapshot`.
    ///
    /// The snapshot is re-validated first; on rejection the previous state
    /// is kept untouched. Intended for defined lifecycle points (startup),
    /// not as an implicit side effect of mutations.
    pub fn import_state(&mut self, snapshot: Snapshot) -> ResultLedger<()> {
        snapshot.validate()?;
        tracing::info!(
            users = snapshot.users.len(),
            groups = snapshot.groups.len(),
            expenses = snapshot.expenses.len(),
            "restored ledger state"
        );
        self.users = snapshot.users;
        self.groups = snapshot.groups;
        self.expenses = snapshot.expenses;
        Ok(())
    }
}
