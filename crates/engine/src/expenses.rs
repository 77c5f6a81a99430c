//! Expense primitives.
//!
//! An `Expense` is an atomic record of money fronted by one member and split
//! across the whole group. Expenses are never edited or deleted once stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{LedgerError, Money, ResultLedger, users::User};

/// Default category list shipped with the app. Advisory only: `category`
/// stays a free-form string.
pub const DEFAULT_CATEGORIES: [&str; 10] = [
    "Food",
    "Transportation",
    "Housing",
    "Entertainment",
    "Utilities",
    "Shopping",
    "Travel",
    "Healthcare",
    "Education",
    "Other",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitType {
    Equal,
    Custom,
}

impl SplitType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Custom => "custom",
        }
    }
}

impl TryFrom<&str> for SplitType {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "equal" => Ok(Self::Equal),
            "custom" => Ok(Self::Custom),
            other => Err(LedgerError::SplitMismatch(format!(
                "invalid split type: {other}"
            ))),
        }
    }
}

/// One member's share of an expense.
///
/// The payer's own entry represents the share they keep themselves; it is
/// still counted when checking the split sum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitEntry {
    pub user_id: Uuid,
    pub amount: Money,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub group_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub amount: Money,
    pub timestamp: DateTime<Utc>,
    pub paid_by: User,
    pub split_type: SplitType,
    pub split_details: Vec<SplitEntry>,
}

impl Expense {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: Uuid,
        group_id: Uuid,
        title: String,
        description: Option<String>,
        category: String,
        amount: Money,
        paid_by: User,
        split_type: SplitType,
        split_details: Vec<SplitEntry>,
    ) -> ResultLedger<Self> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(
                "expense amount must be > 0".to_string(),
            ));
        }
        Ok(Self {
            id,
            group_id,
            title,
            description,
            category,
            amount,
            timestamp: Utc::now(),
            paid_by,
            split_type,
            split_details,
        })
    }

    /// The share owed by `user_id`, or zero if they have no entry.
    pub fn share_of(&self, user_id: Uuid) -> Money {
        self.split_details
            .iter()
            .find(|entry| entry.user_id == user_id)
            .map(|entry| entry.amount)
            .unwrap_or(Money::ZERO)
    }

    /// The total owed to the payer by everyone else.
    pub fn owed_to_payer(&self) -> Money {
        self.split_details
            .iter()
            .filter(|entry| entry.user_id != self.paid_by.id)
            .map(|entry| entry.amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payer() -> User {
        User::new(Uuid::from_u128(1), "Ada", "ada@example.com", None).unwrap()
    }

    #[test]
    fn rejects_non_positive_amount() {
        let err = Expense::new(
            Uuid::from_u128(9),
            Uuid::from_u128(10),
            "Dinner".to_string(),
            None,
            "Food".to_string(),
            Money::ZERO,
            payer(),
            SplitType::Equal,
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(_)));
    }

    #[test]
    fn share_helpers() {
        let expense = Expense::new(
            Uuid::from_u128(9),
            Uuid::from_u128(10),
            "Dinner".to_string(),
            None,
            "Food".to_string(),
            Money::new(90_00),
            payer(),
            SplitType::Equal,
            vec![
                SplitEntry { user_id: Uuid::from_u128(1), amount: Money::new(30_00) },
                SplitEntry { user_id: Uuid::from_u128(2), amount: Money::new(30_00) },
                SplitEntry { user_id: Uuid::from_u128(3), amount: Money::new(30_00) },
            ],
        )
        .unwrap();
        assert_eq!(expense.share_of(Uuid::from_u128(2)), Money::new(30_00));
        assert_eq!(expense.share_of(Uuid::from_u128(7)), Money::ZERO);
        assert_eq!(expense.owed_to_payer(), Money::new(60_00));
    }

    #[test]
    fn split_type_round_trips_through_str() {
        assert_eq!(SplitType::try_from("equal").unwrap(), SplitType::Equal);
        assert_eq!(SplitType::Custom.as_str(), "custom");
        assert!(SplitType::try_from("weighted").is_err());
    }
}
