//! User identity (minimal entity).
//!
//! Users are immutable once created and referenced by id everywhere except
//! the snapshot embedded on an expense's `paid_by`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{LedgerError, ResultLedger};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}

impl User {
    pub fn new(id: Uuid, name: &str, email: &str, avatar: Option<&str>) -> ResultLedger<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::InvalidAmount(
                "user name must not be empty".to_string(),
            ));
        }
        let email = email.trim();
        if email.is_empty() {
            return Err(LedgerError::InvalidAmount(
                "user email must not be empty".to_string(),
            ));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            avatar: avatar.map(str::trim).filter(|s| !s.is_empty()).map(ToString::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_fields_and_drops_blank_avatar() {
        let user = User::new(Uuid::from_u128(1), " Ada ", " ada@example.com ", Some("  ")).unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.avatar, None);
    }

    #[test]
    fn rejects_empty_name() {
        assert!(User::new(Uuid::from_u128(1), "  ", "a@b.c", None).is_err());
    }
}
