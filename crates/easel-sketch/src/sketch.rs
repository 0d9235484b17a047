use easel_engine::coords::Vec2;
use easel_engine::paint::Paint;
use easel_engine::scene::shapes::SplineShape;
use easel_engine::scene::{LineCap, LineJoin, Node, NodeId, NodeKind, SceneGraph, StyleRecord, TextAlign};
use easel_engine::signal::Signal;

use crate::shape::{resolve_knots, ShapeBuilder, Vertex};
use crate::style::StyleStack;
use crate::transform::FrameStack;
use crate::{SketchError, SketchOptions};

/// Immediate-mode drawing context over a [`SceneGraph`].
///
/// Every primitive call creates one node, styles it from the top of the
/// style stack and attaches it under the top of the transform stack (or
/// the view when the stack is empty). Properties stay reactive: any
/// argument may be a [`Signal`].
///
/// One `Sketch` drives one scene from one script; it holds no shared
/// state, so independent sketches never interfere.
///
/// ```rust,ignore
/// let mut scene = SceneGraph::new(Vec2::new(800.0, 600.0));
/// let mut g = Sketch::new(&mut scene);
///
/// g.fill(Color::rgb(108, 199, 162));
/// let group = g.push_matrix();
/// g.translate(100.0, 0.0);
/// g.rect(0.0, 0.0, 40.0, 40.0);
/// g.pop_matrix()?;
/// ```
#[derive(Debug)]
pub struct Sketch<'a> {
    scene: &'a mut SceneGraph,
    frames: FrameStack,
    styles: StyleStack,
    shape: ShapeBuilder,
}

impl<'a> Sketch<'a> {
    pub fn new(scene: &'a mut SceneGraph) -> Self {
        Self::with_options(scene, SketchOptions::default())
    }

    pub fn with_options(scene: &'a mut SceneGraph, options: SketchOptions) -> Self {
        Self {
            scene,
            frames: FrameStack::new(),
            styles: StyleStack::new(options.into_base_style()),
            shape: ShapeBuilder::new(),
        }
    }

    // ── scene access ──────────────────────────────────────────────────────

    #[inline]
    pub fn scene(&self) -> &SceneGraph {
        &*self.scene
    }

    /// Mutable access to a node created earlier, for property changes.
    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, SketchError> {
        Ok(self.scene.node_mut(id)?)
    }

    /// The node new primitives attach to.
    #[inline]
    pub fn current_root(&self) -> NodeId {
        self.frames.current_root(self.scene.root())
    }

    #[inline]
    pub fn matrix_depth(&self) -> usize {
        self.frames.depth()
    }

    #[inline]
    pub fn style_depth(&self) -> usize {
        self.styles.depth()
    }

    /// The style record new nodes will receive.
    #[inline]
    pub fn style(&self) -> &StyleRecord {
        self.styles.top()
    }

    #[inline]
    pub fn pending_vertices(&self) -> usize {
        self.shape.len()
    }

    // ── transform stack ───────────────────────────────────────────────────

    /// Pushes a new empty group as the attachment root and returns it.
    ///
    /// The group floats until the matching [`pop_matrix`](Self::pop_matrix),
    /// so it can be fully configured before it joins the tree.
    pub fn push_matrix(&mut self) -> NodeId {
        let id = self.scene.insert(Node::group());
        self.frames.push(id);
        log::trace!("sketch: push_matrix {id} (depth {})", self.frames.depth());
        id
    }

    /// Pushes an existing node as the attachment root.
    ///
    /// The node keeps its current parent, if any, until it is popped; the
    /// pop then moves it under the new top of stack.
    pub fn push_node(&mut self, node: NodeId) -> Result<NodeId, SketchError> {
        self.scene.node(node)?;
        self.frames.push(node);
        log::trace!("sketch: push_node {node} (depth {})", self.frames.depth());
        Ok(node)
    }

    /// Pops the top frame and attaches it under the new top (or the view).
    ///
    /// # Errors
    /// [`SketchError::StackUnderflow`] when nothing is pushed.
    pub fn pop_matrix(&mut self) -> Result<NodeId, SketchError> {
        let frame = self.frames.pop().inspect_err(|_| {
            log::error!("sketch: pop_matrix without a matching push in this scope");
        })?;
        let parent = self.current_root();
        self.scene.add_child(parent, frame)?;
        log::trace!("sketch: pop_matrix {frame} -> {parent} (depth {})", self.frames.depth());
        Ok(frame)
    }

    /// Runs `f` with `node` as the attachment root, then restores the
    /// previous root. `node` is not moved.
    ///
    /// The scoped frame cannot be popped from inside `f`; such a pop is
    /// refused before anything is re-parented. Whatever happens in `f`, the
    /// stack is back at its outer depth on return.
    ///
    /// # Errors
    /// [`SketchError::StackUnderflow`] if `f` tried to pop past its own
    /// scope, [`SketchError::UnbalancedScope`] if it left frames pushed.
    /// Unclosed frames are dropped from the stack and stay floating.
    pub fn with_root<R>(&mut self, node: NodeId, f: impl FnOnce(&mut Self) -> R) -> Result<R, SketchError> {
        let outer = self.frames.depth();
        self.push_node(node)?;
        let scope = self.frames.enter_scope();

        let out = f(self);

        let refused = self.frames.leave_scope(scope);
        let unclosed = self.frames.truncate(outer).len().saturating_sub(1);
        if refused {
            log::error!("sketch: pop past scoped root {node} refused");
            return Err(SketchError::StackUnderflow);
        }
        if unclosed > 0 {
            log::error!("sketch: scoped root {node} closed with {unclosed} open frame(s)");
            return Err(SketchError::UnbalancedScope { unclosed });
        }
        Ok(out)
    }

    /// Offsets the current root. Composes with its previous position.
    pub fn translate(&mut self, x: impl Into<Signal<f32>>, y: impl Into<Signal<f32>>) {
        let offset = Signal::from_xy(x, y);
        self.update_root(|node| {
            node.position = node.position.zip(&offset).map(|(p, o)| p + o);
        });
    }

    /// Rotates the current root by `degrees`, added to its previous rotation.
    pub fn rotate(&mut self, degrees: impl Into<Signal<f32>>) {
        let degrees = degrees.into();
        self.update_root(|node| {
            node.rotation = node.rotation.zip(&degrees).map(|(r, d)| r + d);
        });
    }

    /// Scales the current root, multiplied into its previous scale.
    pub fn scale(&mut self, x: impl Into<Signal<f32>>, y: impl Into<Signal<f32>>) {
        let factor = Signal::from_xy(x, y);
        self.update_root(|node| {
            node.scale = node.scale.zip(&factor).map(|(s, f)| s.scale(f));
        });
    }

    fn update_root(&mut self, f: impl FnOnce(&mut Node)) {
        let root = self.current_root();
        // Frames are validated on push and nodes are never removed.
        if let Some(node) = self.scene.get_mut(root) {
            f(node);
        }
    }

    // ── style stack ───────────────────────────────────────────────────────

    /// Opens a style scope that starts as a copy of the current style.
    pub fn push_style(&mut self) {
        self.styles.push();
        log::trace!("sketch: push_style (depth {})", self.styles.depth());
    }

    /// Closes the innermost style scope. The base frame is never popped.
    pub fn pop_style(&mut self) {
        if !self.styles.pop() {
            log::warn!("sketch: pop_style on the base style frame ignored");
        }
    }

    pub fn fill(&mut self, fill: impl Into<Signal<Option<Paint>>>) {
        self.styles.top_mut().fill = Some(fill.into());
    }

    pub fn no_fill(&mut self) {
        self.styles.top_mut().fill = Some(Signal::constant(None));
    }

    pub fn stroke(&mut self, stroke: impl Into<Signal<Option<Paint>>>) {
        self.styles.top_mut().stroke = Some(stroke.into());
    }

    pub fn no_stroke(&mut self) {
        self.styles.top_mut().stroke = Some(Signal::constant(None));
    }

    pub fn stroke_weight(&mut self, width: impl Into<Signal<f32>>) {
        self.styles.top_mut().line_width = Some(width.into());
    }

    /// Same as [`stroke_weight`](Self::stroke_weight).
    #[inline]
    pub fn line_width(&mut self, width: impl Into<Signal<f32>>) {
        self.stroke_weight(width);
    }

    /// Children of new nodes are clipped to the node's shape.
    pub fn clip(&mut self) {
        self.clip_when(true);
    }

    pub fn no_clip(&mut self) {
        self.clip_when(false);
    }

    pub fn clip_when(&mut self, clip: impl Into<Signal<bool>>) {
        self.styles.top_mut().clip = Some(clip.into());
    }

    /// Strokes are drawn below fills.
    pub fn stroke_first(&mut self) {
        self.stroke_first_when(true);
    }

    pub fn stroke_last(&mut self) {
        self.stroke_first_when(false);
    }

    pub fn stroke_first_when(&mut self, first: impl Into<Signal<bool>>) {
        self.styles.top_mut().stroke_first = Some(first.into());
    }

    pub fn antialiased(&mut self, antialiased: impl Into<Signal<bool>>) {
        self.styles.top_mut().antialiased = Some(antialiased.into());
    }

    /// Dash pattern; each segment length may be reactive.
    pub fn line_dash<I, S>(&mut self, dash: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<Signal<f32>>,
    {
        let parts = dash.into_iter().map(Into::into).collect();
        self.styles.top_mut().line_dash = Some(Signal::combine(parts));
    }

    pub fn line_cap(&mut self, cap: impl Into<Signal<LineCap>>) {
        self.styles.top_mut().line_cap = Some(cap.into());
    }

    pub fn line_join(&mut self, join: impl Into<Signal<LineJoin>>) {
        self.styles.top_mut().line_join = Some(join.into());
    }

    pub fn text_align(&mut self, align: impl Into<Signal<TextAlign>>) {
        self.styles.top_mut().text_align = Some(align.into());
    }

    pub fn font_size(&mut self, size: impl Into<Signal<f32>>) {
        self.styles.top_mut().font_size = Some(size.into());
    }

    pub fn font_family(&mut self, family: impl Into<Signal<String>>) {
        self.styles.top_mut().font_family = Some(family.into());
    }

    pub fn letter_spacing(&mut self, spacing: impl Into<Signal<f32>>) {
        self.styles.top_mut().letter_spacing = Some(spacing.into());
    }

    /// Fills the view itself. Independent of the style stack.
    pub fn background(&mut self, fill: impl Into<Signal<Option<Paint>>>) {
        let root = self.scene.root();
        if let Some(view) = self.scene.get_mut(root) {
            view.style.fill = Some(fill.into());
        }
    }

    // ── shape builder ─────────────────────────────────────────────────────

    /// Starts a new shape, discarding any pending vertices.
    pub fn begin_shape(&mut self) {
        self.shape.begin();
    }

    pub fn vertex(&mut self, x: impl Into<Signal<f32>>, y: impl Into<Signal<f32>>) {
        self.shape.push(Vertex::Plain { position: Signal::from_xy(x, y) });
    }

    /// Appends the end point `(x2, y2)` of a cubic segment from the previous
    /// vertex with control points `(cx1, cy1)` and `(cx2, cy2)`.
    pub fn bezier_vertex(
        &mut self,
        cx1: impl Into<Signal<f32>>,
        cy1: impl Into<Signal<f32>>,
        cx2: impl Into<Signal<f32>>,
        cy2: impl Into<Signal<f32>>,
        x2: impl Into<Signal<f32>>,
        y2: impl Into<Signal<f32>>,
    ) {
        self.shape.push(Vertex::Bezier {
            position: Signal::from_xy(x2, y2),
            control_a: Signal::from_xy(cx1, cy1),
            control_b: Signal::from_xy(cx2, cy2),
        });
    }

    /// Appends a vertex whose tangents the spline computes itself.
    pub fn curve_vertex(&mut self, x: impl Into<Signal<f32>>, y: impl Into<Signal<f32>>) {
        self.shape.push(Vertex::Curve { position: Signal::from_xy(x, y) });
    }

    /// Resolves the pending vertices into one spline node and attaches it.
    ///
    /// `closed` only adds the segment from the last knot back to the first;
    /// handle resolution wraps either way. Zero vertices is fine and gives
    /// an empty spline.
    pub fn end_shape(&mut self, closed: impl Into<Signal<bool>>) -> NodeId {
        let vertices = self.shape.take();
        let knots = resolve_knots(&vertices);
        log::trace!("sketch: end_shape with {} knot(s)", knots.len());
        self.emit(NodeKind::Spline(SplineShape::new(knots, closed)), Vec2::zero())
    }

    // ── node emission ─────────────────────────────────────────────────────

    /// Creates a styled node at `position` and attaches it to the current root.
    pub(crate) fn emit(&mut self, kind: NodeKind, position: impl Into<Signal<Vec2>>) -> NodeId {
        let node = Node::new(kind)
            .with_position(position)
            .with_style(self.styles.top().clone());
        self.attach(node)
    }

    /// Attaches a fresh node under the current root.
    pub(crate) fn attach(&mut self, node: Node) -> NodeId {
        let root = self.current_root();
        let kind = node.kind.name();
        let id = self.scene.insert(node);
        // A fresh node has no children and `root` belongs to this graph,
        // so this cannot fail.
        let attached = self.scene.add_child(root, id);
        if let Err(e) = &attached {
            log::error!("sketch: failed to attach {kind} {id} under {root}: {e}");
        }
        debug_assert!(attached.is_ok(), "fresh node {id} must attach under {root}");
        log::debug!("sketch: {kind} {id} under {root}");
        id
    }
}
