mod logo;

use anyhow::{Context, Result};

use easel_engine::logging::{init_logging, LoggingConfig};
use easel_sketch::prelude::*;

const VIEW_SIZE: Vec2 = Vec2::new(400.0, 400.0);
const DEFAULT_SAMPLES: usize = 5;

/// Logo scale at the first sample; eases to 1.0 by the last.
const START_SCALE: f32 = 1.5;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let samples = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<usize>()
            .with_context(|| format!("sample count must be a positive integer, got {arg:?}"))?,
        None => DEFAULT_SAMPLES,
    };
    anyhow::ensure!(samples > 0, "sample count must be at least 1");

    let mut scene = SceneGraph::new(VIEW_SIZE);
    let time = SignalCell::new(0.0f32);

    {
        let mut g = Sketch::new(&mut scene);
        g.background(color(250, 250, 250));

        let frame = g.push_matrix();
        g.translate(VIEW_SIZE.x / 2.0, VIEW_SIZE.y / 2.0);
        let logo = logo::khan_logo(&mut g, color(108, 199, 162)).context("failed to build logo")?;
        g.pop_matrix().context("unbalanced logo frame")?;

        let zoom = time.map(|t| {
            let s = START_SCALE + (1.0 - START_SCALE) * ease_in_out(t);
            Vec2::splat(s)
        });
        g.node_mut(logo).context("logo node missing")?.scale = zoom;
        log::info!("logo {logo} inside frame {frame}, {} nodes", g.scene().node_count());
    }

    for i in 0..samples {
        let t = if samples == 1 { 1.0 } else { i as f32 / (samples - 1) as f32 };
        time.set(t);
        println!("── t = {t:.2} ──");
        println!("{}", scene.snapshot());
    }

    Ok(())
}

fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 { 4.0 * t * t * t } else { 1.0 - (-2.0 * t + 2.0).powi(3) / 2.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_its_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(0.5), 0.5);
    }

    #[test]
    fn easing_clamps_outside_unit_range() {
        assert_eq!(ease_in_out(-3.0), 0.0);
        assert_eq!(ease_in_out(7.0), 1.0);
    }
}
