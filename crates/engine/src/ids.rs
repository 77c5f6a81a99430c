//! Id generation capability.
//!
//! The ledger takes its id source by injection (see [`crate::Ledger`]'s
//! builder) so tests can supply deterministic ids instead of random UUIDs.

use std::fmt;

use uuid::Uuid;

/// Source of fresh entity ids.
pub trait IdGen: fmt::Debug + Send {
    /// Returns a fresh unique id.
    fn new_id(&mut self) -> Uuid;
}

/// Production generator: random v4 UUIDs.
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdGen for RandomIds {
    fn new_id(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic generator for tests: 1, 2, 3, ... encoded as UUIDs.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: u128,
}

impl IdGen for SequentialIds {
    fn new_id(&mut self) -> Uuid {
        self.next += 1;
        Uuid::from_u128(self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_are_stable() {
        let mut ids = SequentialIds::default();
        assert_eq!(ids.new_id(), Uuid::from_u128(1));
        assert_eq!(ids.new_id(), Uuid::from_u128(2));
    }

    #[test]
    fn random_ids_are_unique() {
        let mut ids = RandomIds;
        assert_ne!(ids.new_id(), ids.new_id());
    }
}
