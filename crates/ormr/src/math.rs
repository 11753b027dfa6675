//! Math re-exports.
//!
//! We re-export [glam](https://docs.rs/glam) vector types so gameplay
//! components don't need to depend on it directly.

pub use glam::Vec2;
