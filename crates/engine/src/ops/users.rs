use uuid::Uuid;

use crate::{ResultLedger, users::User};

use super::Ledger;

impl Ledger {
    /// Registers a standalone user so groups can later reference them by id.
    ///
    /// Users are immutable once created; there is no update or delete.
    pub fn register_user(
        &mut self,
        name: &str,
        email: &str,
        avatar: Option<&str>,
    ) -> ResultLedger<Uuid> {
        let id = self.ids.new_id();
        let user = User::new(id, name, email, avatar)?;
        tracing::info!(user_id = %id, "registered user");
        self.users.insert(id, user);
        Ok(id)
    }
}
