use crate::coords::Vec2;
use crate::signal::Signal;

/// Smoothness used for auto-tangent knots when none is configured.
pub const DEFAULT_SMOOTHNESS: f32 = 0.4;

/// Explicit tangent handles, relative to the owning knot's position.
///
/// `start` points toward the incoming segment, `end` toward the outgoing one.
#[derive(Debug, Clone)]
pub struct KnotHandles {
    pub start: Signal<Vec2>,
    pub end: Signal<Vec2>,
}

/// One spline knot as handed to the scene.
///
/// A knot without handles asks the spline to derive its tangents from the
/// neighbouring knots when the scene is sampled.
#[derive(Debug, Clone)]
pub struct Knot {
    pub position: Signal<Vec2>,
    pub handles: Option<KnotHandles>,
}

impl Knot {
    /// Position-only knot; tangents are computed by the spline.
    pub fn auto(position: impl Into<Signal<Vec2>>) -> Self {
        Self { position: position.into(), handles: None }
    }

    pub fn with_handles(
        position: impl Into<Signal<Vec2>>,
        start: impl Into<Signal<Vec2>>,
        end: impl Into<Signal<Vec2>>,
    ) -> Self {
        Self {
            position: position.into(),
            handles: Some(KnotHandles { start: start.into(), end: end.into() }),
        }
    }

    #[inline]
    pub fn is_auto(&self) -> bool {
        self.handles.is_none()
    }
}

/// Spline payload: an ordered knot list plus the closed flag.
#[derive(Debug, Clone)]
pub struct SplineShape {
    pub knots: Vec<Knot>,
    pub closed: Signal<bool>,
    pub smoothness: Signal<f32>,
}

impl SplineShape {
    pub fn new(knots: Vec<Knot>, closed: impl Into<Signal<bool>>) -> Self {
        Self {
            knots,
            closed: closed.into(),
            smoothness: Signal::constant(DEFAULT_SMOOTHNESS),
        }
    }

    pub fn with_smoothness(mut self, smoothness: impl Into<Signal<f32>>) -> Self {
        self.smoothness = smoothness.into();
        self
    }

    /// Samples every knot and fills in tangents for auto knots.
    ///
    /// An auto knot gets `end = (next - prev) * smoothness / 2` and
    /// `start = -end`. Closed splines wrap around for the neighbours of the
    /// first and last knot; open splines use the knot itself instead.
    pub fn sample(&self) -> SplineSnapshot {
        let closed = self.closed.get();
        let smoothness = self.smoothness.get();
        let positions: Vec<Vec2> = self.knots.iter().map(|k| k.position.get()).collect();
        let n = positions.len();

        let knots = self
            .knots
            .iter()
            .enumerate()
            .map(|(i, knot)| {
                let position = positions[i];
                match &knot.handles {
                    Some(h) => ResolvedKnot {
                        position,
                        start_handle: h.start.get(),
                        end_handle: h.end.get(),
                        auto_tangent: false,
                    },
                    None => {
                        let prev = match i {
                            0 if closed => positions[n - 1],
                            0 => position,
                            _ => positions[i - 1],
                        };
                        let next = if i + 1 < n {
                            positions[i + 1]
                        } else if closed {
                            positions[0]
                        } else {
                            position
                        };
                        let tangent = (next - prev) * (smoothness * 0.5);
                        ResolvedKnot {
                            position,
                            start_handle: -tangent,
                            end_handle: tangent,
                            auto_tangent: true,
                        }
                    }
                }
            })
            .collect();

        SplineSnapshot { knots, closed, smoothness }
    }
}

/// A knot with all handles known, in the spline's local space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ResolvedKnot {
    pub position: Vec2,
    pub start_handle: Vec2,
    pub end_handle: Vec2,
    /// True when the handles were derived by the spline.
    pub auto_tangent: bool,
}

impl ResolvedKnot {
    /// Absolute control point of the segment arriving at this knot.
    #[inline]
    pub fn incoming_control(&self) -> Vec2 {
        self.position + self.start_handle
    }

    /// Absolute control point of the segment leaving this knot.
    #[inline]
    pub fn outgoing_control(&self) -> Vec2 {
        self.position + self.end_handle
    }
}

/// Sampled spline.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineSnapshot {
    pub knots: Vec<ResolvedKnot>,
    pub closed: bool,
    pub smoothness: f32,
}

impl SplineSnapshot {
    /// Cubic Bézier segments in path order. A closed spline with at least
    /// two knots ends with the segment from the last knot back to the first.
    pub fn segments(&self) -> Vec<CubicSegment> {
        let n = self.knots.len();
        if n < 2 {
            return Vec::new();
        }

        let mut out: Vec<CubicSegment> = self
            .knots
            .windows(2)
            .map(|w| CubicSegment::between(&w[0], &w[1]))
            .collect();

        if self.closed {
            out.push(CubicSegment::between(&self.knots[n - 1], &self.knots[0]));
        }
        out
    }
}

/// One cubic Bézier segment with absolute control points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CubicSegment {
    pub from: Vec2,
    pub ctrl1: Vec2,
    pub ctrl2: Vec2,
    pub to: Vec2,
}

impl CubicSegment {
    #[inline]
    pub fn between(a: &ResolvedKnot, b: &ResolvedKnot) -> Self {
        Self {
            from: a.position,
            ctrl1: a.outgoing_control(),
            ctrl2: b.incoming_control(),
            to: b.position,
        }
    }

    /// Point on the curve at `t` in [0, 1].
    pub fn point_at(&self, t: f32) -> Vec2 {
        let u = 1.0 - t;
        self.from * (u * u * u)
            + self.ctrl1 * (3.0 * u * u * t)
            + self.ctrl2 * (3.0 * u * t * t)
            + self.to * (t * t * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    // ── auto tangents ─────────────────────────────────────────────────────

    #[test]
    fn auto_knot_uses_neighbours() {
        let spline = SplineShape::new(
            vec![Knot::auto(v(0.0, 0.0)), Knot::auto(v(10.0, 0.0)), Knot::auto(v(20.0, 10.0))],
            false,
        )
        .with_smoothness(0.5);
        let s = spline.sample();

        // (next - prev) * 0.25
        assert_eq!(s.knots[1].end_handle, v(5.0, 2.5));
        assert_eq!(s.knots[1].start_handle, v(-5.0, -2.5));
        assert!(s.knots[1].auto_tangent);
    }

    #[test]
    fn open_endpoints_use_themselves() {
        let spline = SplineShape::new(vec![Knot::auto(v(0.0, 0.0)), Knot::auto(v(8.0, 0.0))], false)
            .with_smoothness(0.5);
        let s = spline.sample();
        assert_eq!(s.knots[0].end_handle, v(2.0, 0.0));
        assert_eq!(s.knots[1].start_handle, v(-2.0, 0.0));
    }

    #[test]
    fn closed_endpoints_wrap() {
        let spline = SplineShape::new(
            vec![Knot::auto(v(0.0, 0.0)), Knot::auto(v(10.0, 0.0)), Knot::auto(v(10.0, 10.0))],
            true,
        )
        .with_smoothness(1.0);
        let s = spline.sample();
        // prev = (10, 10), next = (10, 0)
        assert_eq!(s.knots[0].end_handle, v(0.0, -5.0));
    }

    #[test]
    fn explicit_handles_are_kept() {
        let spline = SplineShape::new(vec![Knot::with_handles(v(1.0, 1.0), v(-3.0, 0.0), v(3.0, 0.0))], false);
        let s = spline.sample();
        assert!(!s.knots[0].auto_tangent);
        assert_eq!(s.knots[0].incoming_control(), v(-2.0, 1.0));
        assert_eq!(s.knots[0].outgoing_control(), v(4.0, 1.0));
    }

    #[test]
    fn empty_spline_samples() {
        let s = SplineShape::new(Vec::new(), true).sample();
        assert!(s.knots.is_empty());
        assert!(s.segments().is_empty());
    }

    // ── segments ──────────────────────────────────────────────────────────

    #[test]
    fn closed_spline_adds_wrap_segment() {
        let knots = vec![Knot::auto(v(0.0, 0.0)), Knot::auto(v(10.0, 0.0)), Knot::auto(v(10.0, 10.0))];
        assert_eq!(SplineShape::new(knots.clone(), false).sample().segments().len(), 2);

        let closed = SplineShape::new(knots, true).sample().segments();
        assert_eq!(closed.len(), 3);
        assert_eq!(closed[2].from, v(10.0, 10.0));
        assert_eq!(closed[2].to, v(0.0, 0.0));
    }

    #[test]
    fn neighbour_handles_give_straight_segment() {
        // Handles pointing exactly at the neighbours keep the curve on the chord.
        let a = Knot::with_handles(v(0.0, 0.0), v(0.0, 0.0), v(10.0, 0.0));
        let b = Knot::with_handles(v(10.0, 0.0), v(-10.0, 0.0), v(0.0, 0.0));
        let seg = SplineShape::new(vec![a, b], false).sample().segments()[0];
        for t in [0.25, 0.5, 0.75] {
            assert!(seg.point_at(t).y.abs() < 1e-5);
        }
        assert!(approx(seg.point_at(0.5), v(5.0, 0.0)));
    }
}
