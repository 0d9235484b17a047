//! Vertex accumulation and knot resolution.
//!
//! A shape is built from three kinds of vertices and resolved into one
//! uniform knot list for the spline node:
//!
//! - [`Vertex::Plain`]: handles point at the neighbouring vertices, so a run
//!   of plain vertices draws straight segments.
//! - [`Vertex::Bezier`]: authored control points override only the two knot
//!   edges they touch.
//! - [`Vertex::Curve`]: no handles at all; the spline derives tangents.

use easel_engine::coords::Vec2;
use easel_engine::scene::shapes::Knot;
use easel_engine::signal::Signal;

/// One accumulated path vertex. Points are absolute.
#[derive(Debug, Clone)]
pub enum Vertex {
    Plain {
        position: Signal<Vec2>,
    },
    /// End point of a cubic segment arriving from the previous vertex.
    ///
    /// `control_a` is the segment's first control point (it shapes the
    /// previous knot's outgoing handle), `control_b` the second (this
    /// knot's incoming handle).
    Bezier {
        position: Signal<Vec2>,
        control_a: Signal<Vec2>,
        control_b: Signal<Vec2>,
    },
    Curve {
        position: Signal<Vec2>,
    },
}

impl Vertex {
    #[inline]
    pub fn position(&self) -> &Signal<Vec2> {
        match self {
            Vertex::Plain { position } | Vertex::Bezier { position, .. } | Vertex::Curve { position } => {
                position
            }
        }
    }
}

/// Ordered vertex list between `begin` and `take`.
#[derive(Debug, Default, Clone)]
pub struct ShapeBuilder {
    vertices: Vec<Vertex>,
}

impl ShapeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards any pending vertices.
    #[inline]
    pub fn begin(&mut self) {
        self.vertices.clear();
    }

    #[inline]
    pub fn push(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    /// Hands over the pending vertices, leaving the builder empty.
    #[inline]
    pub fn take(&mut self) -> Vec<Vertex> {
        std::mem::take(&mut self.vertices)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Resolves vertices into knots, one per vertex, in order.
///
/// For vertex `i` of `n`:
/// - the incoming handle aims at vertex `i - 1` and the outgoing one at
///   vertex `i + 1`, both wrapping modulo `n` whether or not the path is
///   closed;
/// - a Bézier vertex aims its incoming handle at its own `control_b`;
/// - if vertex `i + 1` exists and is a Bézier vertex, the outgoing handle
///   aims at its `control_a` (no wrap for this check);
/// - handles are stored relative to the knot position;
/// - a curve vertex yields a knot with no handles.
///
/// Handles stay reactive: they are derived from the vertex signals.
pub fn resolve_knots(vertices: &[Vertex]) -> Vec<Knot> {
    let n = vertices.len();

    vertices
        .iter()
        .enumerate()
        .map(|(i, vertex)| {
            let position = vertex.position();

            let incoming = match vertex {
                Vertex::Bezier { control_b, .. } => control_b,
                Vertex::Plain { .. } | Vertex::Curve { .. } => vertices[(i + n - 1) % n].position(),
            };
            let outgoing = match vertices.get(i + 1) {
                Some(Vertex::Bezier { control_a, .. }) => control_a,
                Some(Vertex::Plain { .. } | Vertex::Curve { .. }) | None => vertices[(i + 1) % n].position(),
            };

            match vertex {
                Vertex::Curve { .. } => Knot::auto(position.clone()),
                Vertex::Plain { .. } | Vertex::Bezier { .. } => Knot::with_handles(
                    position.clone(),
                    relative_to(incoming, position),
                    relative_to(outgoing, position),
                ),
            }
        })
        .collect()
}

#[inline]
fn relative_to(point: &Signal<Vec2>, origin: &Signal<Vec2>) -> Signal<Vec2> {
    point.zip(origin).map(|(p, o)| p - o)
}
