//! # Registry — The Central Container
//!
//! The [`Registry`] owns everything: the component-type table, one pool per
//! component type, the signature of every entity, every registered system,
//! and the pending entity queues. It's the single source of truth for game
//! state and the only code allowed to mutate system membership.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ Registry                                             │
//! │                                                      │
//! │  next_entity: u64           monotonic, never reused  │
//! │                                                      │
//! │  types: ComponentTypes      TypeId → ComponentId     │
//! │  pools: Vec<Option<Box<dyn ErasedPool>>>             │
//! │    indexed by ComponentId, one pool per type         │
//! │                                                      │
//! │  signatures: Vec<Signature>                          │
//! │    indexed by entity id, one bit per component type  │
//! │                                                      │
//! │  systems: HashMap<TypeId, Box<dyn System>>           │
//! │                                                      │
//! │  pending_add / pending_destroy: BTreeSet<Entity>     │
//! │    flushed once per frame by update()                │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Frame protocol
//!
//! Entity creation and destruction are deferred: both queue the entity, and
//! [`update`](Registry::update) — called once per frame, before the game
//! loop runs any system — flushes the queues. An entity created this frame
//! is matched into systems at the next `update`; an entity destroyed this
//! frame stays visible until then. This keeps system membership stable while
//! systems iterate.
//!
//! Component add/remove, by contrast, take effect immediately on the
//! entity's signature — but membership is only re-evaluated for entities in
//! the pending-add queue, so removing a component does not eject an already
//! matched entity from a system's live set. Destroy the entity, or accept
//! that the system skips it behind [`has_component`](Registry::has_component).

use std::any::{TypeId, type_name};
use std::collections::{BTreeSet, HashMap};
use std::mem;

use super::component::ComponentTypes;
use super::entity::Entity;
use super::pool::{ErasedPool, Pool};
use super::signature::Signature;
use super::system::{Require, System};

/// Central authority over entities, components, signatures, and systems.
#[derive(Default)]
pub struct Registry {
    /// Next entity id to issue. Ids are monotonic and never reused.
    next_entity: u64,
    types: ComponentTypes,
    /// One pool per component type, indexed by
    /// [`ComponentId`](super::component::ComponentId). `None` until the
    /// type's first `add_component`.
    pools: Vec<Option<Box<dyn ErasedPool>>>,
    /// Which component types each entity has, indexed by entity id.
    signatures: Vec<Signature>,
    /// Registered systems, keyed by concrete system type.
    systems: HashMap<TypeId, Box<dyn System>>,
    /// Entities created since the last `update`, awaiting system matching.
    pending_add: BTreeSet<Entity>,
    /// Entities destroyed since the last `update`, awaiting removal.
    pending_destroy: BTreeSet<Entity>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Entity management ────────────────────────────────────────────

    /// Create a new entity and queue it for system matching at the next
    /// [`update`](Registry::update).
    ///
    /// The handle is returned immediately so components can be attached
    /// before the entity is synced into any system.
    pub fn create_entity(&mut self) -> Entity {
        let entity = Entity(self.next_entity);
        self.next_entity += 1;
        self.signatures.push(Signature::EMPTY);
        self.pending_add.insert(entity);
        log::debug!("created entity {entity}");
        entity
    }

    /// Queue an entity for destruction. Deferred to the next
    /// [`update`](Registry::update) so system membership never changes
    /// mid-frame; until then the entity remains visible to systems.
    pub fn destroy_entity(&mut self, entity: Entity) {
        self.pending_destroy.insert(entity);
        log::debug!("queued entity {entity} for destruction");
    }

    /// Total number of entities ever created. Ids are never reused, so this
    /// is also the next id to be issued.
    pub fn entity_count(&self) -> u64 {
        self.next_entity
    }

    // ── Component management ─────────────────────────────────────────

    /// Attach (or overwrite) a component on an entity, setting its signature
    /// bit. Also the initialization path — there is no get-or-default.
    ///
    /// Takes effect on the signature immediately, but system membership is
    /// only re-evaluated when the entity's creation is flushed by
    /// [`update`](Registry::update).
    ///
    /// # Panics
    ///
    /// Panics if `T` would exceed the component-type capacity, or if
    /// `entity` was not created by this Registry.
    pub fn add_component<T: 'static>(&mut self, entity: Entity, value: T) {
        let id = self.types.id_of::<T>();
        let index = entity.index();
        assert!(
            index < self.signatures.len(),
            "entity {entity} was not created by this Registry"
        );

        // Grow the pool table on first sight of a new component id.
        if id >= self.pools.len() {
            self.pools.resize_with(id + 1, || None);
        }
        let pool = self.pools[id].get_or_insert_with(|| Box::new(Pool::<T>::new()));
        if index >= pool.len() {
            pool.grow_to(index + 1);
        }
        pool.as_any_mut()
            .downcast_mut::<Pool<T>>()
            .unwrap_or_else(|| {
                panic!(
                    "pool for component id {id} does not hold `{}`",
                    type_name::<T>()
                )
            })
            .set(index, value);

        self.signatures[index].set(id);
        log::trace!(
            "added component `{}` (id {id}) to entity {entity}",
            type_name::<T>()
        );
    }

    /// Detach a component: clears the signature bit only. The pool value is
    /// left in place as stale data; the cleared bit keeps anything from
    /// reading it. No-op if `T` was never used as a component.
    pub fn remove_component<T: 'static>(&mut self, entity: Entity) {
        let Some(id) = self.types.get::<T>() else {
            return;
        };
        self.signatures[entity.index()].clear(id);
        log::trace!(
            "removed component `{}` (id {id}) from entity {entity}",
            type_name::<T>()
        );
    }

    /// Whether the entity currently has component `T`. Always check this (or
    /// use the `Option` accessors) before reading a component that may be
    /// absent.
    pub fn has_component<T: 'static>(&self, entity: Entity) -> bool {
        match self.types.get::<T>() {
            Some(id) => self.signatures[entity.index()].test(id),
            None => false,
        }
    }

    /// Shared reference to the entity's `T` component.
    ///
    /// # Panics
    ///
    /// Panics if the entity doesn't have the component. Use
    /// [`get_component`](Registry::get_component) when absence is expected.
    pub fn component<T: 'static>(&self, entity: Entity) -> &T {
        self.get_component(entity).unwrap_or_else(|| {
            panic!(
                "entity {entity} has no `{}` component. Did you check has_component first?",
                type_name::<T>()
            )
        })
    }

    /// Mutable reference to the entity's `T` component.
    ///
    /// # Panics
    ///
    /// Panics if the entity doesn't have the component.
    pub fn component_mut<T: 'static>(&mut self, entity: Entity) -> &mut T {
        self.get_component_mut(entity).unwrap_or_else(|| {
            panic!(
                "entity {entity} has no `{}` component. Did you check has_component first?",
                type_name::<T>()
            )
        })
    }

    /// Shared reference to the entity's `T` component, or `None` if absent.
    ///
    /// The signature bit is the gate: a slot whose bit is clear is never
    /// read, even if stale data sits in the pool.
    pub fn get_component<T: 'static>(&self, entity: Entity) -> Option<&T> {
        let id = self.types.get::<T>()?;
        if !self.signatures[entity.index()].test(id) {
            return None;
        }
        let pool = self.pools[id]
            .as_ref()?
            .as_any()
            .downcast_ref::<Pool<T>>()?;
        Some(pool.get(entity.index()))
    }

    /// Mutable reference to the entity's `T` component, or `None` if absent.
    pub fn get_component_mut<T: 'static>(&mut self, entity: Entity) -> Option<&mut T> {
        let id = self.types.get::<T>()?;
        if !self.signatures[entity.index()].test(id) {
            return None;
        }
        let pool = self.pools[id]
            .as_mut()?
            .as_any_mut()
            .downcast_mut::<Pool<T>>()?;
        Some(pool.get_mut(entity.index()))
    }

    // ── System management ────────────────────────────────────────────

    /// Register a system, resolving its required signature through this
    /// Registry's component-type table. Exactly one instance per concrete
    /// system type — re-adding the same type replaces the previous instance
    /// (and its live entity set).
    pub fn add_system<S: System>(&mut self, mut system: S) {
        let mut require = Require::new(&mut self.types);
        system.require(&mut require);
        system.base_mut().set_signature(require.finish());
        log::debug!(
            "registered system `{}` with signature {:?}",
            type_name::<S>(),
            system.base().signature()
        );
        if self.systems.insert(TypeId::of::<S>(), Box::new(system)).is_some() {
            log::debug!("replaced previous `{}` instance", type_name::<S>());
        }
    }

    /// Unregister a system. No-op if the type was never added.
    pub fn remove_system<S: System>(&mut self) {
        self.systems.remove(&TypeId::of::<S>());
    }

    /// Whether a system of type `S` is registered.
    pub fn has_system<S: System>(&self) -> bool {
        self.systems.contains_key(&TypeId::of::<S>())
    }

    /// Shared reference to the registered `S`.
    ///
    /// # Panics
    ///
    /// Panics if no system of type `S` was added.
    pub fn system<S: System>(&self) -> &S {
        self.get_system().unwrap_or_else(|| {
            panic!(
                "System `{}` not registered. Did you forget to add_system it?",
                type_name::<S>()
            )
        })
    }

    /// Mutable reference to the registered `S`.
    ///
    /// # Panics
    ///
    /// Panics if no system of type `S` was added.
    pub fn system_mut<S: System>(&mut self) -> &mut S {
        self.get_system_mut().unwrap_or_else(|| {
            panic!(
                "System `{}` not registered. Did you forget to add_system it?",
                type_name::<S>()
            )
        })
    }

    /// Shared reference to the registered `S`, or `None` if absent.
    pub fn get_system<S: System>(&self) -> Option<&S> {
        self.systems
            .get(&TypeId::of::<S>())
            .and_then(|s| s.as_any().downcast_ref::<S>())
    }

    /// Mutable reference to the registered `S`, or `None` if absent.
    pub fn get_system_mut<S: System>(&mut self) -> Option<&mut S> {
        self.systems
            .get_mut(&TypeId::of::<S>())
            .and_then(|s| s.as_any_mut().downcast_mut::<S>())
    }

    // ── Entity-sync phase ────────────────────────────────────────────

    /// Flush the pending entity queues. The single synchronization point —
    /// the game loop calls this once per frame, before running systems.
    ///
    /// Pending creations are matched into every system whose required
    /// signature is a subset of the entity's; pending destructions are
    /// removed from every system's live set and have their signature wiped.
    /// An entity both created and destroyed since the last flush is
    /// destroyed without ever becoming visible to systems.
    ///
    /// Calling `update` with nothing pending is a no-op.
    pub fn update(&mut self) {
        let added = mem::take(&mut self.pending_add);
        for entity in added {
            if self.pending_destroy.contains(&entity) {
                continue;
            }
            self.add_entity_to_systems(entity);
        }

        let destroyed = mem::take(&mut self.pending_destroy);
        for entity in destroyed {
            for system in self.systems.values_mut() {
                system.base_mut().remove_entity(entity);
            }
            self.signatures[entity.index()] = Signature::EMPTY;
            log::debug!("destroyed entity {entity}");
        }
    }

    /// Brute-force matching: test the entity's signature against every
    /// registered system and add it where the subset test passes.
    fn add_entity_to_systems(&mut self, entity: Entity) {
        let signature = self.signatures[entity.index()];
        for system in self.systems.values_mut() {
            let base = system.base_mut();
            if signature.contains_all(base.signature()) {
                base.add_entity(entity);
            }
        }
    }
}
