use crate::coords::Vec2;
use crate::signal::Signal;

/// Grid payload: line spacing along each axis.
#[derive(Debug, Clone)]
pub struct GridShape {
    pub spacing: Signal<Vec2>,
}

impl GridShape {
    pub fn new(spacing: impl Into<Signal<Vec2>>) -> Self {
        Self { spacing: spacing.into() }
    }
}
