use core::fmt;

/// Handle to a node inside a [`SceneGraph`](super::SceneGraph).
///
/// Ids are indices into the graph's arena and stay valid for the graph's
/// lifetime; nodes are never removed, only detached.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
