use crate::coords::Vec2;

use super::Color;

/// A single gradient stop. `t` is expected in [0, 1].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient in the node's local space.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// Two-stop gradient from `from` at `start` to `to` at `end`.
    pub fn between(start: Vec2, from: Color, end: Vec2, to: Color) -> Self {
        Self::new(start, end, vec![ColorStop::new(0.0, from), ColorStop::new(1.0, to)])
    }

    /// Returns true when the gradient is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.len() >= 2
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.start != self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn between_places_two_end_stops() {
        let g = LinearGradient::between(Vec2::zero(), Color::black(), Vec2::new(0.0, 8.0), Color::white());
        assert_eq!(g.stops, vec![ColorStop::new(0.0, Color::black()), ColorStop::new(1.0, Color::white())]);
        assert!(g.is_valid());
    }

    #[test]
    fn degenerate_gradients_are_invalid() {
        let same_point = LinearGradient::between(Vec2::zero(), Color::black(), Vec2::zero(), Color::white());
        assert!(!same_point.is_valid());

        let one_stop = LinearGradient::new(Vec2::zero(), Vec2::new(1.0, 0.0), vec![ColorStop::new(0.0, Color::black())]);
        assert!(!one_stop.is_valid());
    }
}
