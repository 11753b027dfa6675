//! # Component Type Registry
//!
//! Components are plain data — a `Position`, a `Velocity`, a `Sprite`. The
//! ECS addresses them by a small integer [`ComponentId`], assigned lazily in
//! first-use order from a single shared sequence, stable for the lifetime of
//! the owning [`Registry`](super::registry::Registry).
//!
//! ## Design
//!
//! The classic C++ trick is a global `static` counter bumped once per
//! template instantiation, which makes ids depend on link order and leaves
//! a process-wide mutable global. Here the mapping is one authoritative
//! [`ComponentTypes`] table (`TypeId → ComponentId`) owned by the Registry —
//! created with it, dropped with it, no global state.
//!
//! Ids are bounded by [`MAX_COMPONENTS`]; requesting more distinct types
//! than that is a hard capacity violation and panics.

use std::any::{TypeId, type_name};
use std::collections::HashMap;

use super::signature::MAX_COMPONENTS;

/// Identifier of a component *type*, usable as a bit index in a
/// [`Signature`](super::signature::Signature) and as an index into the
/// Registry's pool table.
pub type ComponentId = usize;

/// The authoritative component-type → id table.
///
/// Owned by the [`Registry`](super::registry::Registry); ids it hands out
/// are process-stable for that Registry's lifetime.
#[derive(Default)]
pub(crate) struct ComponentTypes {
    ids: HashMap<TypeId, ComponentId>,
    /// Type name per id, for diagnostics and panic messages.
    names: Vec<&'static str>,
}

impl ComponentTypes {
    pub fn new() -> Self {
        Self {
            ids: HashMap::new(),
            names: Vec::new(),
        }
    }

    /// The id for component type `T`, registering it on first use.
    ///
    /// Repeated calls return the same id; distinct types get distinct ids in
    /// first-call order starting at 0.
    ///
    /// # Panics
    ///
    /// Panics if `T` would be the [`MAX_COMPONENTS`]-plus-first distinct
    /// component type.
    pub fn id_of<T: 'static>(&mut self) -> ComponentId {
        if let Some(&id) = self.ids.get(&TypeId::of::<T>()) {
            return id;
        }
        let id = self.names.len();
        if id >= MAX_COMPONENTS {
            panic!(
                "component type capacity exceeded: cannot register `{}` (max {} distinct types)",
                type_name::<T>(),
                MAX_COMPONENTS
            );
        }
        self.ids.insert(TypeId::of::<T>(), id);
        self.names.push(type_name::<T>());
        log::debug!("registered component type `{}` as id {id}", type_name::<T>());
        id
    }

    /// Non-registering lookup. Returns `None` if `T` was never used as a
    /// component, without burning an id on it.
    pub fn get<T: 'static>(&self) -> Option<ComponentId> {
        self.ids.get(&TypeId::of::<T>()).copied()
    }

    /// Number of registered component types.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// The type name registered for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was never assigned.
    #[allow(dead_code)]
    pub fn name(&self, id: ComponentId) -> &'static str {
        self.names[id]
    }
}
