//! Split calculator: turns a raw amount and a split policy into validated
//! per-member shares.
//!
//! The invariant enforced here is the load-bearing one of the whole system:
//! the shares cover exactly the group's member ids and their sum matches the
//! expense amount within [`SPLIT_EPSILON`].

use std::collections::HashSet;

use uuid::Uuid;

use crate::{LedgerError, Money, ResultLedger, expenses::SplitEntry};

/// Tolerance between the expense amount and the sum of its shares.
///
/// One cent, boundary-inclusive: a 1-cent difference is accepted, 2 cents is
/// rejected.
pub const SPLIT_EPSILON: Money = Money::new(1);

/// Divides `amount` evenly across all members, payer included.
///
/// The payer carries their own share like everyone else, so the shares sum
/// to exactly `amount` and conservation holds; the payer is reimbursed
/// `amount - own_share` through the balance algorithm. Integer-cents
/// division hands the remainder out one cent at a time to the earliest
/// members in roster order, so the sum is exact rather than merely within
/// epsilon.
pub fn equal_split(
    amount: Money,
    member_ids: &[Uuid],
    payer_id: Uuid,
) -> ResultLedger<Vec<SplitEntry>> {
    if !amount.is_positive() {
        return Err(LedgerError::InvalidAmount(
            "expense amount must be > 0".to_string(),
        ));
    }
    if member_ids.is_empty() {
        return Err(LedgerError::InvalidAmount(
            "cannot split across zero members".to_string(),
        ));
    }
    let mut seen = HashSet::new();
    for id in member_ids {
        if !seen.insert(*id) {
            return Err(LedgerError::ExistingKey(id.to_string()));
        }
    }
    if !member_ids.contains(&payer_id) {
        return Err(LedgerError::KeyNotFound(
            "payer is not a group member".to_string(),
        ));
    }

    let count = member_ids.len() as i64;
    let base = amount.cents() / count;
    let remainder = amount.cents() % count;

    Ok(member_ids
        .iter()
        .enumerate()
        .map(|(index, id)| SplitEntry {
            user_id: *id,
            amount: Money::new(base + i64::from((index as i64) < remainder)),
        })
        .collect())
}

/// Validates caller-specified shares against the group roster and `amount`.
///
/// Requires exactly one entry per member, each share >= 0, and the sum
/// within [`SPLIT_EPSILON`] of `amount`. Returns the entries unchanged.
pub fn validate_custom_split(
    amount: Money,
    member_ids: &[Uuid],
    entries: &[SplitEntry],
) -> ResultLedger<Vec<SplitEntry>> {
    if !amount.is_positive() {
        return Err(LedgerError::InvalidAmount(
            "expense amount must be > 0".to_string(),
        ));
    }
    check_split_invariant(amount, member_ids, entries)?;
    Ok(entries.to_vec())
}

/// Re-checks the full split invariant: member coverage, non-negative shares,
/// sum within epsilon. Used defensively by the store before any mutation and
/// by snapshot validation.
pub(crate) fn check_split_invariant(
    amount: Money,
    member_ids: &[Uuid],
    entries: &[SplitEntry],
) -> ResultLedger<()> {
    let members: HashSet<Uuid> = member_ids.iter().copied().collect();

    let mut covered = HashSet::new();
    for entry in entries {
        if !members.contains(&entry.user_id) {
            return Err(LedgerError::SplitMismatch(format!(
                "split entry for non-member {}",
                entry.user_id
            )));
        }
        if !covered.insert(entry.user_id) {
            return Err(LedgerError::SplitMismatch(format!(
                "duplicate split entry for {}",
                entry.user_id
            )));
        }
        if entry.amount.is_negative() {
            return Err(LedgerError::InvalidAmount(format!(
                "split share for {} must be >= 0",
                entry.user_id
            )));
        }
    }
    if covered.len() != members.len() {
        return Err(LedgerError::SplitMismatch(format!(
            "split covers {} of {} members",
            covered.len(),
            members.len()
        )));
    }

    let sum: Money = entries.iter().map(|entry| entry.amount).sum();
    if (sum - amount).abs() > SPLIT_EPSILON {
        return Err(LedgerError::SplitMismatch(format!(
            "shares sum to {sum}, expense amount is {amount}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: u128) -> Vec<Uuid> {
        (1..=n).map(Uuid::from_u128).collect()
    }

    fn entry(n: u128, cents: i64) -> SplitEntry {
        SplitEntry {
            user_id: Uuid::from_u128(n),
            amount: Money::new(cents),
        }
    }

    #[test]
    fn equal_split_conserves_amount() {
        let members = ids(3);
        let shares = equal_split(Money::new(90_00), &members, members[0]).unwrap();
        assert_eq!(shares.len(), 3);
        for share in &shares {
            assert_eq!(share.amount, Money::new(30_00));
        }
        let sum: Money = shares.iter().map(|s| s.amount).sum();
        assert_eq!(sum, Money::new(90_00));
    }

    #[test]
    fn equal_split_spreads_remainder_in_roster_order() {
        let members = ids(3);
        let shares = equal_split(Money::new(100_00), &members, members[1]).unwrap();
        assert_eq!(shares[0].amount, Money::new(33_34));
        assert_eq!(shares[1].amount, Money::new(33_33));
        assert_eq!(shares[2].amount, Money::new(33_33));
        let sum: Money = shares.iter().map(|s| s.amount).sum();
        assert_eq!(sum, Money::new(100_00));
    }

    #[test]
    fn equal_split_rejects_outside_payer() {
        let members = ids(3);
        let err = equal_split(Money::new(90_00), &members, Uuid::from_u128(99)).unwrap_err();
        assert!(matches!(err, LedgerError::KeyNotFound(_)));
    }

    #[test]
    fn equal_split_rejects_duplicate_members() {
        let members = vec![Uuid::from_u128(1), Uuid::from_u128(1)];
        let err = equal_split(Money::new(90_00), &members, Uuid::from_u128(1)).unwrap_err();
        assert!(matches!(err, LedgerError::ExistingKey(_)));
    }

    #[test]
    fn custom_split_accepts_one_cent_drift() {
        let members = ids(2);
        let entries = vec![entry(1, 20_00), entry(2, 29_99)];
        assert!(validate_custom_split(Money::new(50_00), &members, &entries).is_ok());
    }

    #[test]
    fn custom_split_rejects_two_cent_drift() {
        let members = ids(2);
        let entries = vec![entry(1, 20_00), entry(2, 29_98)];
        let err = validate_custom_split(Money::new(50_00), &members, &entries).unwrap_err();
        assert!(matches!(err, LedgerError::SplitMismatch(_)));
    }

    #[test]
    fn custom_split_rejects_negative_share() {
        let members = ids(2);
        let entries = vec![entry(1, 60_00), entry(2, -10_00)];
        let err = validate_custom_split(Money::new(50_00), &members, &entries).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(_)));
    }

    #[test]
    fn custom_split_requires_full_coverage() {
        let members = ids(3);
        let entries = vec![entry(1, 25_00), entry(2, 25_00)];
        let err = validate_custom_split(Money::new(50_00), &members, &entries).unwrap_err();
        assert!(matches!(err, LedgerError::SplitMismatch(_)));

        let foreign = vec![entry(1, 25_00), entry(2, 15_00), entry(9, 10_00)];
        let err = validate_custom_split(Money::new(50_00), &members, &foreign).unwrap_err();
        assert!(matches!(err, LedgerError::SplitMismatch(_)));
    }
}
