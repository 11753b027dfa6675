//! # Entity — Lightweight Identifiers for Game Objects
//!
//! An [`Entity`] is just a number — it doesn't "contain" anything. All entity
//! data lives in component pools indexed by the entity's id; the handle is
//! the row index shared by every pool.
//!
//! Ids are issued by the [`Registry`](super::registry::Registry) from a
//! monotonic counter and are never reused within a process run, so a stale
//! handle can never silently alias a newer entity. That keeps the handle a
//! single integer — no generation counter to carry around.
//!
//! Entities are totally ordered by id so they can live in ordered sets
//! (system membership, the Registry's pending queues).

use std::fmt;

/// A lightweight handle to an entity owned by a
/// [`Registry`](super::registry::Registry).
///
/// Create one with [`Registry::create_entity`](super::registry::Registry::create_entity).
/// Two handles are equal iff their ids are equal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entity(pub(crate) u64);

impl Entity {
    /// The raw id. Useful for diagnostics, not for general use.
    pub fn id(self) -> u64 {
        self.0
    }

    /// The id as a pool/signature-table index.
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_id() {
        assert_eq!(Entity(3), Entity(3));
        assert_ne!(Entity(3), Entity(4));
    }

    #[test]
    fn ordered_by_id() {
        let mut entities = vec![Entity(5), Entity(1), Entity(3)];
        entities.sort();
        assert_eq!(entities, vec![Entity(1), Entity(3), Entity(5)]);
    }

    #[test]
    fn usable_in_ordered_sets() {
        use std::collections::BTreeSet;
        let mut set = BTreeSet::new();
        set.insert(Entity(2));
        set.insert(Entity(2));
        set.insert(Entity(0));
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![Entity(0), Entity(2)]);
    }
}
