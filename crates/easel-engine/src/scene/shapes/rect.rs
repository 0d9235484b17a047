use crate::coords::{CornerRadii, Vec2};
use crate::signal::Signal;

/// Rectangle payload. The node's position is the rectangle's center.
#[derive(Debug, Clone)]
pub struct RectShape {
    pub size: Signal<Vec2>,
    pub radius: Signal<CornerRadii>,
    pub smooth_corners: Signal<bool>,
}

impl RectShape {
    pub fn new(size: impl Into<Signal<Vec2>>) -> Self {
        Self {
            size: size.into(),
            radius: Signal::default(),
            smooth_corners: Signal::constant(false),
        }
    }

    pub fn with_radius(mut self, radius: impl Into<Signal<CornerRadii>>) -> Self {
        self.radius = radius.into();
        self
    }

    pub fn with_smooth_corners(mut self, smooth: impl Into<Signal<bool>>) -> Self {
        self.smooth_corners = smooth.into();
        self
    }
}
