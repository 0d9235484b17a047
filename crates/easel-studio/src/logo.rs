//! The Khan Academy hexagon, drawn with sketch calls.

use easel_sketch::prelude::*;

/// Half the distance between opposite hexagon corners.
const RADIUS: f32 = 150.0;

/// Builds the logo under the current root and returns the clipping
/// hexagon that holds every other part.
pub fn khan_logo(g: &mut Sketch<'_>, main: Color) -> Result<NodeId, SketchError> {
    let dark = main.brighten(-20);
    let light = main.brighten(20);

    g.no_stroke();
    g.fill(main);
    g.clip();

    g.begin_shape();
    for i in 0..6 {
        let corner = Vec2::new(0.0, RADIUS).rotated(60.0 * i as f32);
        g.vertex(corner.x, corner.y);
    }
    let hexagon = g.end_shape(true);

    g.with_root(hexagon, |g| {
        // accents
        g.fill(dark);
        g.rect(-75.0, 50.0, 110.0, 180.0);
        g.rect(70.0, -60.0, 60.0, 120.0);

        g.fill(light);
        g.rect(40.0, 40.0, 50.0, 40.0);
        g.rect(-25.0, -120.0, 110.0, 80.0);

        g.fill(color(250, 250, 250));
        for side in [1.0f32, -1.0] {
            g.begin_shape();
            g.vertex(0.0, 100.0);
            g.bezier_vertex(50.0 * side, 100.0, 110.0 * side, 80.0, 110.0 * side, -20.0);
            g.bezier_vertex(90.0 * side, -20.0, 0.0, 0.0, 0.0, 100.0);
            g.end_shape(true);
        }

        g.ellipse(0.0, -50.0, 80.0, 80.0);
    })?;

    Ok(hexagon)
}
