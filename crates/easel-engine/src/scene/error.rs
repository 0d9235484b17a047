use std::fmt;

use super::NodeId;

/// Failure of a scene-graph mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The id does not belong to this graph.
    UnknownNode(NodeId),
    /// Attaching `child` under `parent` would make a node its own ancestor.
    Cycle { parent: NodeId, child: NodeId },
    /// The view root cannot be attached under another node.
    RootAttach,
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::UnknownNode(id) => write!(f, "unknown scene node {id}"),
            SceneError::Cycle { parent, child } => {
                write!(f, "cannot attach {child} under {parent}: {child} is an ancestor of {parent}")
            }
            SceneError::RootAttach => f.write_str("the view root cannot be attached to a parent"),
        }
    }
}

impl std::error::Error for SceneError {}
