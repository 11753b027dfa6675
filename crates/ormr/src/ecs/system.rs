//! # System — Per-Frame Behavior Over Matching Entities
//!
//! A system owns a required [`Signature`] (which component types an entity
//! must have) and the live set of entities currently matching it. The
//! [`Registry`](super::registry::Registry) keeps that set in sync at each
//! [`update`](super::registry::Registry::update); the system itself never
//! recomputes membership.
//!
//! ## Writing a system
//!
//! Implement [`System`], embed a [`SystemBase`], and declare requirements in
//! [`require`](System::require):
//!
//! ```ignore
//! struct MovementSystem { base: SystemBase }
//!
//! impl System for MovementSystem {
//!     fn require(&self, require: &mut Require) {
//!         require.component::<Position>().component::<Velocity>();
//!     }
//!     fn base(&self) -> &SystemBase { &self.base }
//!     fn base_mut(&mut self) -> &mut SystemBase { &mut self.base }
//!     fn as_any(&self) -> &dyn Any { self }
//!     fn as_any_mut(&mut self) -> &mut dyn Any { self }
//! }
//! ```
//!
//! Per-frame entry points are the system's own inherent methods — by
//! convention an `update(...)` taking whatever collaborators it needs (the
//! registry, a delta time, a renderer handle). The base contract is only
//! membership bookkeeping.

use std::any::Any;
use std::collections::BTreeSet;

use super::component::ComponentTypes;
use super::entity::Entity;
use super::signature::Signature;

/// A unit of per-frame behavior, registered with the
/// [`Registry`](super::registry::Registry) keyed by its concrete type.
pub trait System: 'static {
    /// Declare the component types an entity must have for this system to
    /// track it. Called exactly once, when the system is registered.
    fn require(&self, require: &mut Require<'_>);

    /// The membership bookkeeping this system embeds.
    fn base(&self) -> &SystemBase;
    fn base_mut(&mut self) -> &mut SystemBase;

    /// Downcast seam for typed lookup through the Registry.
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Builder handed to [`System::require`]; each `component::<T>()` call sets
/// one bit in the system's required signature, resolving the id through the
/// Registry's component-type table.
pub struct Require<'a> {
    types: &'a mut ComponentTypes,
    signature: Signature,
}

impl<'a> Require<'a> {
    pub(crate) fn new(types: &'a mut ComponentTypes) -> Self {
        Self {
            types,
            signature: Signature::EMPTY,
        }
    }

    /// Require component type `T`. Chainable.
    pub fn component<T: 'static>(&mut self) -> &mut Self {
        let id = self.types.id_of::<T>();
        self.signature.set(id);
        self
    }

    pub(crate) fn finish(self) -> Signature {
        self.signature
    }
}

/// Required signature plus the live set of matching entities.
///
/// Mutated only by the Registry during the entity-sync phase; systems and
/// game code read it through [`entities`](SystemBase::entities) snapshots.
#[derive(Default)]
pub struct SystemBase {
    signature: Signature,
    entities: BTreeSet<Entity>,
}

impl SystemBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// The required signature, as resolved at registration.
    pub fn signature(&self) -> Signature {
        self.signature
    }

    pub(crate) fn set_signature(&mut self, signature: Signature) {
        self.signature = signature;
    }

    /// Add `entity` to the live set. Idempotent — the set ignores an entity
    /// it already tracks.
    pub(crate) fn add_entity(&mut self, entity: Entity) -> bool {
        self.entities.insert(entity)
    }

    /// Remove `entity` by identity. Returns whether it was tracked.
    pub(crate) fn remove_entity(&mut self, entity: Entity) -> bool {
        self.entities.remove(&entity)
    }

    /// Snapshot of the currently matching entities, in ascending id order.
    ///
    /// Callers iterate the snapshot during their per-frame update, decoupled
    /// from any mutation of the live set.
    pub fn entities(&self) -> Vec<Entity> {
        self.entities.iter().copied().collect()
    }

    /// Whether `entity` is currently tracked.
    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    /// Number of currently matching entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_remove_entities() {
        let mut base = SystemBase::new();
        assert!(base.add_entity(Entity(1)));
        assert!(base.add_entity(Entity(2)));
        assert!(base.contains(Entity(1)));
        assert_eq!(base.len(), 2);

        assert!(base.remove_entity(Entity(1)));
        assert!(!base.contains(Entity(1)));
        assert!(!base.remove_entity(Entity(1)));
    }

    #[test]
    fn duplicate_add_is_idempotent() {
        let mut base = SystemBase::new();
        assert!(base.add_entity(Entity(7)));
        assert!(!base.add_entity(Entity(7)));
        assert_eq!(base.len(), 1);
    }

    #[test]
    fn entities_snapshot_is_ordered_and_decoupled() {
        let mut base = SystemBase::new();
        base.add_entity(Entity(9));
        base.add_entity(Entity(3));
        base.add_entity(Entity(6));

        let snapshot = base.entities();
        assert_eq!(snapshot, vec![Entity(3), Entity(6), Entity(9)]);

        // Mutating the live set doesn't touch the snapshot.
        base.remove_entity(Entity(6));
        assert_eq!(snapshot.len(), 3);
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn require_builds_signature() {
        struct Position;
        struct Velocity;

        let mut types = ComponentTypes::new();
        let mut require = Require::new(&mut types);
        require.component::<Position>().component::<Velocity>();
        let signature = require.finish();

        assert!(signature.test(0));
        assert!(signature.test(1));
        assert!(!signature.test(2));
    }
}
