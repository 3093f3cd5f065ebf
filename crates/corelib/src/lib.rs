//! Core shared types: math re-exports and bounding extents.

pub use glam::{Vec2, Vec3, vec2, vec3};

pub mod extent;

pub use extent::{Axis, Bounds, Extent, extent};
