//! # Ormr — Signature-Matching ECS Core
//!
//! A small entity-component-system core for real-time 2D game loops.
//! Game objects are composed from plain data components, per-frame behavior
//! lives in systems that declare which component combinations they require,
//! and a central [`Registry`](ecs::Registry) keeps the bookkeeping consistent
//! as entities are created, mutated, and destroyed across frames.
//!
//! Windowing, rendering, asset loading, and input are deliberately not here —
//! they are external collaborators passed into concrete systems' `update`
//! methods by the game loop.
//!
//! Start with `use ormr::prelude::*` and build a [`Registry`](ecs::Registry).

pub mod ecs;
pub mod math;
pub mod prelude;
pub mod time;
