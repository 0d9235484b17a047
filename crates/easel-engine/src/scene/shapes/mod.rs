//! Kind-specific node payloads.
//!
//! Each shape lives in its own file together with its sampled form.

pub(crate) mod ellipse;
pub(crate) mod grid;
pub(crate) mod rect;
pub(crate) mod spline;
pub(crate) mod text;

pub use ellipse::EllipseShape;
pub use grid::GridShape;
pub use rect::RectShape;
pub use spline::{CubicSegment, Knot, KnotHandles, ResolvedKnot, SplineShape, SplineSnapshot};
pub use text::TextShape;
