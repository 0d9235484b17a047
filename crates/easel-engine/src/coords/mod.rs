//! Coordinate and geometry types shared by the scene graph and sketches.
//!
//! Canonical space:
//! - Logical units, origin at the parent node's position
//! - +X right, +Y down
//! - Rotation in degrees, clockwise on screen

mod affine;
mod corner_radii;
mod vec2;

pub use affine::Affine;
pub use corner_radii::CornerRadii;
pub use vec2::Vec2;
