//! Easel engine crate.
//!
//! This crate owns the retained scene graph that sketches draw into, along
//! with the value types both layers share: geometry, paint and reactive
//! signals. It never rasterizes; consumers sample [`scene::SceneGraph`]
//! through [`scene::SceneGraph::snapshot`].

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod signal;
