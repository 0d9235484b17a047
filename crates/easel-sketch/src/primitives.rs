//! The primitive vocabulary.
//!
//! Each call reads the current style and attachment root, creates one node
//! and returns its id. Geometric arguments accept constants or signals.

use easel_engine::coords::{CornerRadii, Vec2};
use easel_engine::scene::shapes::{EllipseShape, GridShape, RectShape, TextShape};
use easel_engine::scene::{Node, NodeId, NodeKind};
use easel_engine::signal::Signal;

use crate::Sketch;

impl Sketch<'_> {
    /// Rectangle centered on `(x, y)` with sharp corners.
    pub fn rect(
        &mut self,
        x: impl Into<Signal<f32>>,
        y: impl Into<Signal<f32>>,
        w: impl Into<Signal<f32>>,
        h: impl Into<Signal<f32>>,
    ) -> NodeId {
        self.rounded_rect(x, y, w, h, 0.0, 0.0, 0.0, 0.0)
    }

    /// Rectangle with per-corner radii (top-left, top-right, bottom-right,
    /// bottom-left). Each radius is reactive on its own; the node samples
    /// all four together.
    #[allow(clippy::too_many_arguments)]
    pub fn rounded_rect(
        &mut self,
        x: impl Into<Signal<f32>>,
        y: impl Into<Signal<f32>>,
        w: impl Into<Signal<f32>>,
        h: impl Into<Signal<f32>>,
        r1: impl Into<Signal<f32>>,
        r2: impl Into<Signal<f32>>,
        r3: impl Into<Signal<f32>>,
        r4: impl Into<Signal<f32>>,
    ) -> NodeId {
        let radius: Signal<CornerRadii> =
            Signal::from_corners([r1.into(), r2.into(), r3.into(), r4.into()]);
        let shape = RectShape::new(Signal::from_xy(w, h))
            .with_radius(radius)
            .with_smooth_corners(true);
        self.emit(NodeKind::Rect(shape), Signal::from_xy(x, y))
    }

    /// Ellipse centered on `(x, y)` inside a `w` by `h` box.
    pub fn ellipse(
        &mut self,
        x: impl Into<Signal<f32>>,
        y: impl Into<Signal<f32>>,
        w: impl Into<Signal<f32>>,
        h: impl Into<Signal<f32>>,
    ) -> NodeId {
        let shape = EllipseShape::new(Signal::from_xy(w, h));
        self.emit(NodeKind::Ellipse(shape), Signal::from_xy(x, y))
    }

    /// Straight open segment, built through the shape builder.
    ///
    /// Like any shape, this discards vertices pending from an unfinished
    /// `begin_shape`.
    pub fn line(
        &mut self,
        x1: impl Into<Signal<f32>>,
        y1: impl Into<Signal<f32>>,
        x2: impl Into<Signal<f32>>,
        y2: impl Into<Signal<f32>>,
    ) -> NodeId {
        self.begin_shape();
        self.vertex(x1, y1);
        self.vertex(x2, y2);
        self.end_shape(false)
    }

    /// Single open cubic segment from `(x1, y1)` to `(x2, y2)`.
    #[allow(clippy::too_many_arguments)]
    pub fn bezier(
        &mut self,
        x1: impl Into<Signal<f32>>,
        y1: impl Into<Signal<f32>>,
        cx1: impl Into<Signal<f32>>,
        cy1: impl Into<Signal<f32>>,
        cx2: impl Into<Signal<f32>>,
        cy2: impl Into<Signal<f32>>,
        x2: impl Into<Signal<f32>>,
        y2: impl Into<Signal<f32>>,
    ) -> NodeId {
        self.begin_shape();
        self.vertex(x1, y1);
        self.bezier_vertex(cx1, cy1, cx2, cy2, x2, y2);
        self.end_shape(false)
    }

    /// Text anchored at `(x, y)`, using the current font fields.
    pub fn text(
        &mut self,
        text: impl Into<Signal<String>>,
        x: impl Into<Signal<f32>>,
        y: impl Into<Signal<f32>>,
    ) -> NodeId {
        self.emit(NodeKind::Text(TextShape::new(text)), Signal::from_xy(x, y))
    }

    /// Grid centered on `(x, y)` with the given line spacing.
    pub fn grid(
        &mut self,
        x: impl Into<Signal<f32>>,
        y: impl Into<Signal<f32>>,
        spacing_x: impl Into<Signal<f32>>,
        spacing_y: impl Into<Signal<f32>>,
    ) -> NodeId {
        let shape = GridShape::new(Signal::from_xy(spacing_x, spacing_y));
        self.emit(NodeKind::Grid(shape), Signal::from_xy(x, y))
    }

    /// Unstyled group at the origin of the current root.
    pub fn empty(&mut self) -> NodeId {
        self.attach(Node::group())
    }

    /// Unstyled group at `(x, y)`.
    pub fn empty_at(&mut self, x: impl Into<Signal<f32>>, y: impl Into<Signal<f32>>) -> NodeId {
        self.attach(Node::group().with_position(Signal::<Vec2>::from_xy(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use easel_engine::coords::{CornerRadii, Vec2};
    use easel_engine::paint::Color;
    use easel_engine::scene::{SceneGraph, ShapeSnapshot};
    use easel_engine::signal::SignalCell;

    use crate::Sketch;

    fn scene() -> SceneGraph {
        SceneGraph::new(Vec2::new(200.0, 200.0))
    }

    fn shape_of(scene: &SceneGraph, id: easel_engine::scene::NodeId) -> ShapeSnapshot {
        scene.snapshot_node(id).unwrap().shape
    }

    #[test]
    fn rect_is_centered_and_sharp() {
        let mut scene = scene();
        let mut g = Sketch::new(&mut scene);
        let id = g.rect(10.0, 20.0, 30.0, 40.0);

        let snap = scene.snapshot_node(id).unwrap();
        assert_eq!(snap.position, Vec2::new(10.0, 20.0));
        assert_eq!(
            snap.shape,
            ShapeSnapshot::Rect {
                size: Vec2::new(30.0, 40.0),
                radius: CornerRadii::all(0.0),
                smooth_corners: true,
            }
        );
    }

    #[test]
    fn rounded_rect_radii_stay_reactive_per_corner() {
        let mut scene = scene();
        let r = SignalCell::new(2.0f32);
        let id = {
            let mut g = Sketch::new(&mut scene);
            g.rounded_rect(0.0, 0.0, 10.0, 10.0, r.signal(), 1.0, r.map(|v| v * 2.0), 0.0)
        };

        r.set(3.0);
        match shape_of(&scene, id) {
            ShapeSnapshot::Rect { radius, .. } => {
                assert_eq!(radius, CornerRadii::new(3.0, 1.0, 6.0, 0.0));
            }
            other => panic!("expected rect, got {other:?}"),
        }
    }

    #[test]
    fn ellipse_and_grid_carry_their_sizes() {
        let mut scene = scene();
        let mut g = Sketch::new(&mut scene);
        let e = g.ellipse(1.0, 2.0, 8.0, 4.0);
        let grid = g.grid(0.0, 0.0, 25.0, 50.0);

        assert_eq!(shape_of(&scene, e), ShapeSnapshot::Ellipse { size: Vec2::new(8.0, 4.0) });
        assert_eq!(shape_of(&scene, grid), ShapeSnapshot::Grid { spacing: Vec2::new(25.0, 50.0) });
    }

    #[test]
    fn text_uses_current_font() {
        let mut scene = scene();
        let mut g = Sketch::new(&mut scene);
        g.font_size(20.0);
        g.font_family("monospace");
        let id = g.text("hello", 5.0, 5.0);

        let snap = scene.snapshot_node(id).unwrap();
        assert_eq!(snap.shape, ShapeSnapshot::Text { text: "hello".to_owned() });
        assert_eq!(snap.style.font_size, 20.0);
        assert_eq!(snap.style.font_family, "monospace");
    }

    #[test]
    fn line_is_an_open_two_knot_spline() {
        let mut scene = scene();
        let mut g = Sketch::new(&mut scene);
        let id = g.line(0.0, 0.0, 10.0, 0.0);

        match shape_of(&scene, id) {
            ShapeSnapshot::Spline(s) => {
                assert!(!s.closed);
                assert_eq!(s.knots.len(), 2);
                assert_eq!(s.knots[1].position, Vec2::new(10.0, 0.0));
            }
            other => panic!("expected spline, got {other:?}"),
        }
    }

    #[test]
    fn bezier_sets_both_inner_handles() {
        let mut scene = scene();
        let mut g = Sketch::new(&mut scene);
        let id = g.bezier(0.0, 0.0, 0.0, 10.0, 10.0, 10.0, 10.0, 0.0);

        match shape_of(&scene, id) {
            ShapeSnapshot::Spline(s) => {
                assert_eq!(s.knots[0].end_handle, Vec2::new(0.0, 10.0));
                assert_eq!(s.knots[1].start_handle, Vec2::new(0.0, 10.0));
                assert_eq!(s.segments().len(), 1);
            }
            other => panic!("expected spline, got {other:?}"),
        }
    }

    #[test]
    fn empty_ignores_current_style() {
        let mut scene = scene();
        let mut g = Sketch::new(&mut scene);
        g.fill(Color::black());
        g.stroke_weight(8.0);
        let plain = g.empty();
        let placed = g.empty_at(4.0, 6.0);

        assert!(scene.node(plain).unwrap().style.is_empty());
        assert!(scene.node(placed).unwrap().style.is_empty());
        assert_eq!(scene.snapshot_node(placed).unwrap().position, Vec2::new(4.0, 6.0));
        assert_eq!(scene.parent(plain), Some(scene.root()));
    }

    #[test]
    fn primitives_attach_under_pushed_frame() {
        let mut scene = scene();
        let mut g = Sketch::new(&mut scene);
        let frame = g.push_matrix();
        let a = g.ellipse(0.0, 0.0, 1.0, 1.0);
        let b = g.line(0.0, 0.0, 1.0, 1.0);
        g.pop_matrix().unwrap();

        assert_eq!(scene.children(frame), &[a, b]);
    }

    #[test]
    fn every_primitive_gets_the_current_root_as_parent() {
        let mut scene = scene();
        let mut g = Sketch::new(&mut scene);
        let frame = g.push_matrix();
        let ids = [
            g.rect(0.0, 0.0, 1.0, 1.0),
            g.rounded_rect(0.0, 0.0, 1.0, 1.0, 0.5, 0.5, 0.5, 0.5),
            g.ellipse(0.0, 0.0, 1.0, 1.0),
            g.text("t", 0.0, 0.0),
            g.grid(0.0, 0.0, 1.0, 1.0),
            g.line(0.0, 0.0, 1.0, 1.0),
            g.bezier(0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0),
            g.empty(),
            g.empty_at(1.0, 1.0),
        ];
        for id in ids {
            assert_eq!(g.scene().parent(id), Some(frame), "{id}");
        }
        g.pop_matrix().unwrap();
        assert!(ids.iter().all(|id| scene.is_attached(*id)));
    }
}
