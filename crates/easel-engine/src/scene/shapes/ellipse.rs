use crate::coords::Vec2;
use crate::signal::Signal;

/// Ellipse payload, sized by its bounding box and centered on the node.
#[derive(Debug, Clone)]
pub struct EllipseShape {
    pub size: Signal<Vec2>,
}

impl EllipseShape {
    pub fn new(size: impl Into<Signal<Vec2>>) -> Self {
        Self { size: size.into() }
    }
}
