use easel_engine::scene::StyleRecord;

/// Stack of style records with a permanent base frame.
///
/// `push` copies the top record (shallow: reactive fields are shared, not
/// duplicated) so nested changes stay local to their scope.
#[derive(Debug, Clone)]
pub struct StyleStack {
    base: StyleRecord,
    nested: Vec<StyleRecord>,
}

impl StyleStack {
    pub fn new(base: StyleRecord) -> Self {
        Self { base, nested: Vec::new() }
    }

    pub fn push(&mut self) {
        let copy = self.top().clone();
        self.nested.push(copy);
    }

    /// Drops the top record. Returns `false` (and does nothing) on the base frame.
    pub fn pop(&mut self) -> bool {
        self.nested.pop().is_some()
    }

    #[inline]
    pub fn top(&self) -> &StyleRecord {
        self.nested.last().unwrap_or(&self.base)
    }

    #[inline]
    pub fn top_mut(&mut self) -> &mut StyleRecord {
        self.nested.last_mut().unwrap_or(&mut self.base)
    }

    /// Number of records, base included. Never zero.
    #[inline]
    pub fn depth(&self) -> usize {
        1 + self.nested.len()
    }
}

impl Default for StyleStack {
    fn default() -> Self {
        Self::new(StyleRecord::default())
    }
}

#[cfg(test)]
mod tests {
    use easel_engine::signal::Signal;

    use super::*;

    fn width(stack: &StyleStack) -> Option<f32> {
        stack.top().line_width.as_ref().map(Signal::get)
    }

    #[test]
    fn push_copies_top() {
        let mut stack = StyleStack::default();
        stack.top_mut().line_width = Some(Signal::constant(3.0));
        stack.push();
        assert_eq!(width(&stack), Some(3.0));
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn nested_changes_do_not_leak() {
        let mut stack = StyleStack::default();
        stack.top_mut().line_width = Some(Signal::constant(1.0));
        stack.push();
        stack.top_mut().line_width = Some(Signal::constant(8.0));
        assert!(stack.pop());
        assert_eq!(width(&stack), Some(1.0));
    }

    #[test]
    fn base_frame_is_never_popped() {
        let mut stack = StyleStack::default();
        stack.top_mut().line_width = Some(Signal::constant(2.0));
        assert!(!stack.pop());
        assert!(!stack.pop());
        assert_eq!(stack.depth(), 1);
        assert_eq!(width(&stack), Some(2.0));
    }
}
