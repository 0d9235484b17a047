use std::fmt;

use crate::coords::{CornerRadii, Vec2};
use crate::paint::Paint;

use super::shapes::SplineSnapshot;
use super::{Node, NodeId, NodeKind, ResolvedStyle, SceneError, SceneGraph};

/// Sampled payload of a node.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeSnapshot {
    View { size: Vec2 },
    Group,
    Rect { size: Vec2, radius: CornerRadii, smooth_corners: bool },
    Ellipse { size: Vec2 },
    Text { text: String },
    Grid { spacing: Vec2 },
    Spline(SplineSnapshot),
}

impl ShapeSnapshot {
    fn sample(kind: &NodeKind) -> Self {
        match kind {
            NodeKind::View { size } => ShapeSnapshot::View { size: *size },
            NodeKind::Group => ShapeSnapshot::Group,
            NodeKind::Rect(r) => ShapeSnapshot::Rect {
                size: r.size.get(),
                radius: r.radius.get(),
                smooth_corners: r.smooth_corners.get(),
            },
            NodeKind::Ellipse(e) => ShapeSnapshot::Ellipse { size: e.size.get() },
            NodeKind::Text(t) => ShapeSnapshot::Text { text: t.text.get() },
            NodeKind::Grid(g) => ShapeSnapshot::Grid { spacing: g.spacing.get() },
            NodeKind::Spline(s) => ShapeSnapshot::Spline(s.sample()),
        }
    }
}

/// Every property of a node sampled once, with its sampled children.
///
/// This is the renderer-facing read of the scene: plain values, no signals.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSnapshot {
    pub id: NodeId,
    pub shape: ShapeSnapshot,
    pub position: Vec2,
    pub rotation: f32,
    pub scale: Vec2,
    pub opacity: f32,
    pub style: ResolvedStyle,
    pub children: Vec<NodeSnapshot>,
}

impl NodeSnapshot {
    /// Depth-first search for `id` in this subtree.
    pub fn find(&self, id: NodeId) -> Option<&NodeSnapshot> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// Number of nodes in this subtree, itself included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(NodeSnapshot::count).sum::<usize>()
    }

    /// Visits the subtree in pre-order with each node's depth.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a NodeSnapshot, usize)) {
        self.walk_at(0, f);
    }

    fn walk_at<'a>(&'a self, depth: usize, f: &mut impl FnMut(&'a NodeSnapshot, usize)) {
        f(self, depth);
        for child in &self.children {
            child.walk_at(depth + 1, f);
        }
    }
}

impl SceneGraph {
    /// Samples the whole attached tree, starting at the view root.
    pub fn snapshot(&self) -> NodeSnapshot {
        self.sample_subtree(self.root(), self.root_node(), &ResolvedStyle::default())
    }

    /// Samples the subtree under `id`, attached or floating.
    ///
    /// Inherited style fields are resolved through `id`'s ancestors.
    pub fn snapshot_node(&self, id: NodeId) -> Result<NodeSnapshot, SceneError> {
        let node = self.node(id)?;

        let mut chain = Vec::new();
        let mut cur = node.parent();
        while let Some(p) = cur {
            chain.push(p);
            cur = self.parent(p);
        }
        let inherited = chain.iter().rev().filter_map(|p| self.get(*p)).fold(
            ResolvedStyle::default(),
            |parent, n| ResolvedStyle::resolve(&n.style, &parent),
        );

        Ok(self.sample_subtree(id, node, &inherited))
    }

    fn sample_subtree(&self, id: NodeId, node: &Node, parent_style: &ResolvedStyle) -> NodeSnapshot {
        let style = ResolvedStyle::resolve(&node.style, parent_style);
        let children = node
            .children()
            .iter()
            .filter_map(|c| self.get(*c).map(|n| self.sample_subtree(*c, n, &style)))
            .collect();

        NodeSnapshot {
            id,
            shape: ShapeSnapshot::sample(&node.kind),
            position: node.position.get(),
            rotation: node.rotation.get(),
            scale: node.scale.get(),
            opacity: node.opacity.get(),
            style,
            children,
        }
    }
}

// ── tree dump ─────────────────────────────────────────────────────────────

struct Pt(Vec2);

impl fmt::Display for Pt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}

fn write_paint(f: &mut fmt::Formatter<'_>, label: &str, paint: &Option<Paint>) -> fmt::Result {
    match paint {
        None => Ok(()),
        Some(Paint::Solid(c)) => {
            let [r, g, b, a] = c.to_srgb_u8();
            write!(f, " {label}=#{r:02x}{g:02x}{b:02x}")?;
            if a < 255 {
                write!(f, "{a:02x}")?;
            }
            Ok(())
        }
        Some(Paint::LinearGradient(g)) if g.is_valid() => write!(f, " {label}=gradient[{}]", g.stops.len()),
        Some(Paint::LinearGradient(_)) => write!(f, " {label}=gradient[invalid]"),
    }
}

impl fmt::Display for NodeSnapshot {
    /// Indented one-line-per-node dump of the subtree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = Ok(());
        self.walk(&mut |node, depth| {
            if result.is_ok() {
                result = node.write_line(f, depth);
            }
        });
        result
    }
}

impl NodeSnapshot {

    fn write_line(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}", "", indent = depth * 2)?;
        match &self.shape {
            ShapeSnapshot::View { size } => write!(f, "view {} size={}", self.id, Pt(*size))?,
            ShapeSnapshot::Group => write!(f, "group {}", self.id)?,
            ShapeSnapshot::Rect { size, radius, .. } => {
                write!(f, "rect {} size={}", self.id, Pt(*size))?;
                if !radius.is_sharp() {
                    let [tl, tr, br, bl] = radius.to_array();
                    write!(f, " radius=[{tl}, {tr}, {br}, {bl}]")?;
                }
            }
            ShapeSnapshot::Ellipse { size } => write!(f, "ellipse {} size={}", self.id, Pt(*size))?,
            ShapeSnapshot::Text { text } => write!(f, "text {} {text:?}", self.id)?,
            ShapeSnapshot::Grid { spacing } => write!(f, "grid {} spacing={}", self.id, Pt(*spacing))?,
            ShapeSnapshot::Spline(s) => write!(
                f,
                "spline {} knots={} {}",
                self.id,
                s.knots.len(),
                if s.closed { "closed" } else { "open" }
            )?,
        }
        write!(f, " at {}", Pt(self.position))?;
        if self.rotation != 0.0 {
            write!(f, " rot={}", self.rotation)?;
        }
        if self.scale != Vec2::splat(1.0) {
            write!(f, " scale={}", Pt(self.scale))?;
        }
        write_paint(f, "fill", &self.style.fill)?;
        write_paint(f, "stroke", &self.style.stroke)?;
        if self.style.clip {
            f.write_str(" clip")?;
        }
        writeln!(f)
    }
}
