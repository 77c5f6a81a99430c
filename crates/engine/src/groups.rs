//! The `Group` holds its member roster and the ids of its expenses.
//!
//! Members are fixed at creation time; the expense id list is append-only
//! and preserves insertion order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::users::User;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub members: Vec<User>,
    pub expenses: Vec<Uuid>,
}

impl Group {
    pub(crate) fn new(
        id: Uuid,
        name: String,
        description: Option<String>,
        members: Vec<User>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            created_at: Utc::now(),
            members,
            expenses: Vec::new(),
        }
    }

    /// Returns the member with the given id, if any.
    pub fn member(&self, user_id: Uuid) -> Option<&User> {
        self.members.iter().find(|member| member.id == user_id)
    }

    pub fn is_member(&self, user_id: Uuid) -> bool {
        self.member(user_id).is_some()
    }

    /// Member ids in roster order.
    pub fn member_ids(&self) -> Vec<Uuid> {
        self.members.iter().map(|member| member.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(n: u128) -> User {
        User::new(Uuid::from_u128(n), &format!("user-{n}"), "u@example.com", None).unwrap()
    }

    #[test]
    fn member_lookup() {
        let group = Group::new(
            Uuid::from_u128(10),
            "Trip".to_string(),
            None,
            vec![user(1), user(2)],
        );
        assert!(group.is_member(Uuid::from_u128(1)));
        assert!(!group.is_member(Uuid::from_u128(3)));
        assert_eq!(
            group.member_ids(),
            vec![Uuid::from_u128(1), Uuid::from_u128(2)]
        );
    }
}
