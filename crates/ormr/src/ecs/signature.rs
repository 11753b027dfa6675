//! # Signature — Fixed-Width Component Bitsets
//!
//! A [`Signature`] marks which component types are present (on an entity) or
//! required (by a system), one bit per [`ComponentId`]. System matching is a
//! subset test: an entity matches a system when every required bit is set in
//! the entity's signature.
//!
//! The width is [`MAX_COMPONENTS`] = 128 bits, which fits exactly in a
//! `u128` — set, clear, test, and subset are each one or two integer ops.

use std::fmt;

use super::component::ComponentId;

/// Maximum number of distinct component types per process run. Also the bit
/// width of [`Signature`].
pub const MAX_COMPONENTS: usize = 128;

/// A fixed-width bit vector keyed by [`ComponentId`].
///
/// Bit *i* set means "component with id *i* is present/required".
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Signature(u128);

impl Signature {
    /// The signature with no bits set.
    pub const EMPTY: Self = Self(0);

    /// Set the bit for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id >= MAX_COMPONENTS`.
    pub fn set(&mut self, id: ComponentId) {
        self.0 |= Self::bit(id);
    }

    /// Clear the bit for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id >= MAX_COMPONENTS`.
    pub fn clear(&mut self, id: ComponentId) {
        self.0 &= !Self::bit(id);
    }

    /// Test the bit for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id >= MAX_COMPONENTS`.
    pub fn test(&self, id: ComponentId) -> bool {
        self.0 & Self::bit(id) != 0
    }

    /// Subset test: every bit set in `required` is also set in `self`.
    ///
    /// This is the system-matching predicate,
    /// `(entity & system) == system`.
    pub fn contains_all(&self, required: Signature) -> bool {
        self.0 & required.0 == required.0
    }

    /// Whether no bits are set.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    fn bit(id: ComponentId) -> u128 {
        assert!(
            id < MAX_COMPONENTS,
            "component id {id} out of range (signature width is {MAX_COMPONENTS})"
        );
        1u128 << id
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // List the set bit indices rather than 128 binary digits.
        let ids: Vec<usize> = (0..MAX_COMPONENTS).filter(|&i| self.test(i)).collect();
        write!(f, "Signature{ids:?}")
    }
}
