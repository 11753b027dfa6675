//! # Signature-Based ECS
//!
//! This ECS stores each component type in its own densely-indexed pool and
//! matches entities to systems with a fixed-width bitset per entity. The
//! design trades memory density (pools have holes for entities lacking that
//! component) for O(1) access with no indirection table — the right tradeoff
//! for games with hundreds to low thousands of entities.
//!
//! ## Module Overview
//!
//! - [`entity`] — Opaque monotonic entity handles
//! - [`component`] — The component-type id registry
//! - [`pool`] — Type-erased per-component-type storage
//! - [`signature`] — Fixed-width component bitsets
//! - [`system`] — The [`System`] trait and its live entity set
//! - [`registry`] — Central owner and synchronization authority
//!
//! ## Comparison
//!
//! - **hecs / bevy_ecs**: archetype storage — entities grouped by their full
//!   component set, moved between tables on every insert/remove.
//! - **ormr**: one pool per component type, indexed by entity id. No entity
//!   ever moves; adding a component is a single write plus a bit set.

pub(crate) mod pool;

pub mod component;
pub mod entity;
pub mod registry;
pub mod signature;
pub mod system;

pub use component::ComponentId;
pub use entity::Entity;
pub use registry::Registry;
pub use signature::{MAX_COMPONENTS, Signature};
pub use system::{Require, System, SystemBase};
