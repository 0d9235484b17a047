//! Retained scene graph.
//!
//! Responsibilities:
//! - own every node created by a sketch, addressed by [`NodeId`]
//! - keep node properties as [`Signal`](crate::signal::Signal)s until sampled
//! - sample the attached tree into plain values ([`NodeSnapshot`])
//! - implement the spline primitive, including auto tangents for knots
//!   that carry no handles

mod error;
mod graph;
mod id;
mod node;
mod snapshot;
mod style;

pub mod shapes;

pub use error::SceneError;
pub use graph::SceneGraph;
pub use id::NodeId;
pub use node::{Node, NodeKind};
pub use snapshot::{NodeSnapshot, ShapeSnapshot};
pub use style::{LineCap, LineJoin, ResolvedStyle, StyleRecord, TextAlign};
