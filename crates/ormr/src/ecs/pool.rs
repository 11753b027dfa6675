//! # Pool — Type-Erased Per-Component Storage
//!
//! One [`Pool<T>`] holds every instance of one component type, indexed
//! directly by entity id. The pool is not compacted: slots for entities that
//! never had the component are `None`, and a removed component's value stays
//! behind as stale data — the signature bit gate in the Registry keeps
//! anything from reading it.
//!
//! ## Why `Vec<Option<T>>`?
//!
//! Direct indexing by entity id means O(1) access with no indirection table
//! and no entity ever moving between tables. The cost is holes for entities
//! lacking the component — acceptable at game scale (hundreds to low
//! thousands of entities), and `Option` makes a hole explicit instead of a
//! default-constructed ghost value.
//!
//! The Registry stores pools behind [`ErasedPool`] (it only knows a
//! [`ComponentId`](super::component::ComponentId) at that point) and
//! downcasts to the concrete `Pool<T>` at the typed call sites. All access
//! is safe — type mismatches panic, which indicates a bug in the Registry.

use std::any::Any;

/// Capability surface the Registry needs without knowing the component type:
/// grow on entity creation, report size, downcast at typed call sites.
pub(crate) trait ErasedPool {
    /// Logical slot count.
    fn len(&self) -> usize;

    /// Ensure capacity for at least `len` entity slots. Growing never
    /// destroys existing values; this never shrinks.
    fn grow_to(&mut self, len: usize);

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Dense, resizable storage for one component type across all entity slots.
pub(crate) struct Pool<T> {
    slots: Vec<Option<T>>,
}

impl<T: 'static> Pool<T> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Write (or overwrite) the component value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is beyond current capacity — the Registry grows the
    /// pool before calling.
    pub fn set(&mut self, index: usize, value: T) {
        match self.slots.get_mut(index) {
            Some(slot) => *slot = Some(value),
            None => panic!(
                "pool slot {index} out of range (len {})",
                self.slots.len()
            ),
        }
    }

    /// The component value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range or the slot was never written.
    /// In-contract callers check the entity's signature bit first, which
    /// guarantees the slot holds a value.
    pub fn get(&self, index: usize) -> &T {
        match self.slots.get(index) {
            Some(Some(value)) => value,
            _ => panic!("read of empty pool slot {index}"),
        }
    }

    /// Mutable access to the component value at `index`.
    ///
    /// # Panics
    ///
    /// Same contract as [`get`](Pool::get).
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        match self.slots.get_mut(index) {
            Some(Some(value)) => value,
            _ => panic!("read of empty pool slot {index}"),
        }
    }

    /// Append a value, growing the logical size by one. Bulk-population
    /// helper; per-entity writes go through [`set`](Pool::set).
    #[allow(dead_code)]
    pub fn push(&mut self, value: T) {
        self.slots.push(Some(value));
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<T: 'static> ErasedPool for Pool<T> {
    fn len(&self) -> usize {
        self.slots.len()
    }

    fn grow_to(&mut self, len: usize) {
        if len > self.slots.len() {
            self.slots.resize_with(len, || None);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
