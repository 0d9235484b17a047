//! Easel sketch: an immediate-mode drawing context over `easel-engine`.
//!
//! Scripts issue Processing-style calls (`push_matrix`, `fill`,
//! `begin_shape` / `vertex` / `end_shape`, `rect`, ...) and each call
//! builds or configures nodes in a retained [`SceneGraph`]. Nothing is
//! drawn here; node properties stay reactive until the scene is sampled.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use easel_sketch::prelude::*;
//!
//! let mut scene = SceneGraph::new(Vec2::new(800.0, 600.0));
//! let mut g = Sketch::new(&mut scene);
//!
//! g.fill(color(108, 199, 162));
//! g.begin_shape();
//! g.vertex(0.0, 0.0);
//! g.bezier_vertex(2.0, 0.0, 8.0, 0.0, 10.0, 0.0);
//! let path = g.end_shape(false);
//!
//! g.with_root(path, |g| {
//!     g.ellipse(0.0, 0.0, 20.0, 20.0);
//! })?;
//!
//! println!("{}", scene.snapshot());
//! ```

mod error;
mod options;
mod primitives;
mod sketch;

pub mod shape;
pub mod style;
pub mod transform;

pub use error::SketchError;
pub use options::SketchOptions;
pub use sketch::Sketch;

use easel_engine::paint::Color;

/// Opaque color from byte channels.
#[inline]
pub fn color(r: u8, g: u8, b: u8) -> Color {
    Color::rgb(r, g, b)
}

/// Everything a sketch script needs.
pub mod prelude {
    pub use crate::{color, Sketch, SketchError, SketchOptions};

    pub use easel_engine::coords::{CornerRadii, Vec2};
    pub use easel_engine::paint::{Color, ColorStop, LinearGradient, Paint};
    pub use easel_engine::scene::{
        LineCap, LineJoin, Node, NodeId, NodeKind, NodeSnapshot, SceneGraph, ShapeSnapshot, TextAlign,
    };
    pub use easel_engine::signal::{Signal, SignalCell};
}
