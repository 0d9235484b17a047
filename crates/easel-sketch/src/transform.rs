use easel_engine::scene::NodeId;

use crate::SketchError;

/// LIFO stack of attachment frames.
///
/// Each frame is a scene node that receives the nodes created while it is
/// on top. The stack only tracks ids; attaching a popped frame to its new
/// parent is the caller's job (see [`Sketch::pop_matrix`](crate::Sketch::pop_matrix)).
///
/// A floor marks frames owned by an enclosing scope: they can only be
/// removed by that scope, never by [`pop`](Self::pop).
#[derive(Debug, Default, Clone)]
pub struct FrameStack {
    frames: Vec<NodeId>,
    floor: usize,
    refused: usize,
}

/// Saved state of the enclosing scope, returned by [`FrameStack::enter_scope`].
#[derive(Debug, Copy, Clone)]
#[must_use]
pub struct ScopeMark {
    floor: usize,
    refused: usize,
}

impl FrameStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, frame: NodeId) {
        self.frames.push(frame);
    }

    /// Removes the top frame.
    ///
    /// An empty stack is an error, never a silent no-op: ignoring it would
    /// send every later node to the wrong parent.
    pub fn pop(&mut self) -> Result<NodeId, SketchError> {
        if self.frames.len() <= self.floor {
            self.refused += 1;
            return Err(SketchError::StackUnderflow);
        }
        self.frames.pop().ok_or(SketchError::StackUnderflow)
    }

    /// Protects every frame currently on the stack from `pop` until the
    /// matching [`leave_scope`](Self::leave_scope).
    pub fn enter_scope(&mut self) -> ScopeMark {
        let mark = ScopeMark { floor: self.floor, refused: self.refused };
        self.floor = self.frames.len();
        mark
    }

    /// Restores the enclosing floor. Returns true if a pop was refused
    /// while the scope was open.
    pub fn leave_scope(&mut self, mark: ScopeMark) -> bool {
        let refused = self.refused > mark.refused;
        self.floor = mark.floor.min(self.frames.len());
        self.refused = mark.refused;
        refused
    }

    /// Drops every frame above `depth`, returning them bottom to top.
    pub fn truncate(&mut self, depth: usize) -> Vec<NodeId> {
        let keep = depth.min(self.frames.len());
        self.frames.split_off(keep)
    }

    #[inline]
    pub fn top(&self) -> Option<NodeId> {
        self.frames.last().copied()
    }

    /// The top frame, or `base` when the stack is empty.
    #[inline]
    pub fn current_root(&self, base: NodeId) -> NodeId {
        self.top().unwrap_or(base)
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
