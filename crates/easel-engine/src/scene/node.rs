use crate::coords::Vec2;
use crate::signal::Signal;

use super::shapes::{EllipseShape, GridShape, RectShape, SplineShape, TextShape};
use super::{NodeId, StyleRecord};

/// Kind-specific payload of a node.
///
/// Extending the scene:
/// - add a payload type under `scene::shapes::*`
/// - add a variant here and a matching [`ShapeSnapshot`](super::ShapeSnapshot) variant
/// - sample it in `snapshot.rs`
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// The base view every sketch ultimately attaches to.
    View { size: Vec2 },
    /// Plain transform/grouping node with no geometry.
    Group,
    Rect(RectShape),
    Ellipse(EllipseShape),
    Text(TextShape),
    Grid(GridShape),
    Spline(SplineShape),
}

impl NodeKind {
    /// Short lowercase name, used in logs and tree dumps.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::View { .. } => "view",
            NodeKind::Group => "group",
            NodeKind::Rect(_) => "rect",
            NodeKind::Ellipse(_) => "ellipse",
            NodeKind::Text(_) => "text",
            NodeKind::Grid(_) => "grid",
            NodeKind::Spline(_) => "spline",
        }
    }
}

/// A scene node: common transform properties, style, and a payload.
///
/// Transform and style fields are public and may be replaced at any time;
/// the hierarchy is only changed through [`SceneGraph`](super::SceneGraph).
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub position: Signal<Vec2>,
    /// Degrees, clockwise on screen.
    pub rotation: Signal<f32>,
    pub scale: Signal<Vec2>,
    pub opacity: Signal<f32>,
    pub style: StyleRecord,

    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            position: Signal::default(),
            rotation: Signal::constant(0.0),
            scale: Signal::constant(Vec2::splat(1.0)),
            opacity: Signal::constant(1.0),
            style: StyleRecord::default(),
            parent: None,
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn group() -> Self {
        Self::new(NodeKind::Group)
    }

    pub fn with_position(mut self, position: impl Into<Signal<Vec2>>) -> Self {
        self.position = position.into();
        self
    }

    pub fn with_style(mut self, style: StyleRecord) -> Self {
        self.style = style;
        self
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The spline payload, if this is a spline node.
    pub fn as_spline(&self) -> Option<&SplineShape> {
        match &self.kind {
            NodeKind::Spline(s) => Some(s),
            _ => None,
        }
    }
}
