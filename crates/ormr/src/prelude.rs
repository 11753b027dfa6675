//! Convenience re-exports — `use ormr::prelude::*` for the common items.

pub use crate::ecs::{
    ComponentId, Entity, MAX_COMPONENTS, Registry, Require, Signature, System, SystemBase,
};
pub use crate::math::Vec2;
pub use crate::time::Time;
