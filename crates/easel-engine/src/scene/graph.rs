use crate::coords::{Affine, Vec2};

use super::{Node, NodeId, NodeKind, SceneError};

/// Retained node hierarchy rooted at a view.
///
/// Nodes live in an arena and are addressed by [`NodeId`]. A node inserted
/// with [`insert`](Self::insert) floats (has no parent) until it is
/// attached with [`add_child`](Self::add_child); floating nodes are not
/// part of the rendered tree.
#[derive(Debug)]
pub struct SceneGraph {
    nodes: Vec<Node>,
    root: NodeId,
}

impl SceneGraph {
    /// Creates a graph holding only the view root.
    pub fn new(view_size: Vec2) -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::View { size: view_size })],
            root: NodeId(0),
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The view root. Created in `new` and never removed.
    #[inline]
    pub(super) fn root_node(&self) -> &Node {
        &self.nodes[self.root.index()]
    }

    /// Number of nodes ever inserted, floating ones and the root included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Adds a floating node and returns its id.
    pub fn insert(&mut self, mut node: Node) -> NodeId {
        node.parent = None;
        node.children.clear();
        let id = NodeId(self.nodes.len());
        log::trace!("scene: insert {} {id}", node.kind.name());
        self.nodes.push(node);
        id
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, SceneError> {
        self.get(id).ok_or(SceneError::UnknownNode(id))
    }

    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, SceneError> {
        self.get_mut(id).ok_or(SceneError::UnknownNode(id))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Node::parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(Node::children).unwrap_or_default()
    }

    /// True when `ancestor` is `node` or lies on its parent chain.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cur = Some(node);
        while let Some(id) = cur {
            if id == ancestor {
                return true;
            }
            cur = self.parent(id);
        }
        false
    }

    /// True when the node is reachable from the view root.
    #[inline]
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.get(id).is_some() && self.is_ancestor(self.root, id)
    }

    /// Appends `child` to `parent`'s children.
    ///
    /// A child that already has a parent is moved, not duplicated.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SceneError> {
        self.node(parent)?;
        self.node(child)?;
        if child == self.root {
            return Err(SceneError::RootAttach);
        }
        if self.is_ancestor(child, parent) {
            return Err(SceneError::Cycle { parent, child });
        }

        self.detach(child)?;
        self.nodes[child.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(child);
        log::trace!("scene: attach {child} under {parent}");
        Ok(())
    }

    /// Removes `id` from its parent, leaving it floating. No-op if it has none.
    pub fn detach(&mut self, id: NodeId) -> Result<(), SceneError> {
        let Some(old) = self.node(id)?.parent else {
            return Ok(());
        };
        self.nodes[old.index()].children.retain(|c| *c != id);
        self.nodes[id.index()].parent = None;
        Ok(())
    }

    /// Samples the node's local transform.
    pub fn local_transform(&self, id: NodeId) -> Result<Affine, SceneError> {
        let node = self.node(id)?;
        Ok(Affine::from_parts(node.position.get(), node.rotation.get(), node.scale.get()))
    }

    /// Samples the transform from `id`'s local space to the view's space.
    ///
    /// For a floating node this stops at the top of its own subtree.
    pub fn world_transform(&self, id: NodeId) -> Result<Affine, SceneError> {
        let mut out = Affine::IDENTITY;
        let mut cur = Some(id);
        while let Some(n) = cur {
            if n == self.root {
                break;
            }
            out = self.local_transform(n)?.mul(out);
            cur = self.parent(n);
        }
        Ok(out)
    }
}
