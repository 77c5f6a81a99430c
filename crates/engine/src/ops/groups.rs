use std::collections::HashSet;

use uuid::Uuid;

use crate::{LedgerError, ResultLedger, groups::Group, users::User};

use super::{Ledger, normalize_optional_text, normalize_required_name};

impl Ledger {
    /// Creates a group with a fixed member roster.
    ///
    /// Requires a non-empty name and at least 2 unique members (the current
    /// user plus at least one other). Members are registered in the user
    /// table as a side effect; an already known user id keeps its original
    /// record.
    pub fn create_group(
        &mut self,
        name: &str,
        description: Option<&str>,
        members: Vec<User>,
    ) -> ResultLedger<Uuid> {
        let name = normalize_required_name(name, "group name")?;
        if members.len() < 2 {
            return Err(LedgerError::InsufficientMembers(format!(
                "a group needs at least 2 members, got {}",
                members.len()
            )));
        }
        let mut seen = HashSet::new();
        for member in &members {
            if !seen.insert(member.id) {
                return Err(LedgerError::ExistingKey(member.id.to_string()));
            }
        }

        let id = self.ids.new_id();
        for member in &members {
            self.users
                .entry(member.id)
                .or_insert_with(|| member.clone());
        }
        let group = Group::new(id, name, normalize_optional_text(description), members);
        tracing::info!(group_id = %id, members = group.members.len(), "created group");
        self.groups.insert(id, group);
        Ok(id)
    }
}
