use easel_engine::paint::Paint;
use easel_engine::scene::StyleRecord;
use easel_engine::signal::Signal;

/// Construction-time settings for a [`Sketch`](crate::Sketch).
///
/// Only the base style frame is configurable: it is what every node sees
/// before the sketch changes any style, and what `pop_style` can never
/// remove.
///
/// ```rust,ignore
/// let options = SketchOptions::new().fill(Color::white()).line_width(2.0);
/// let mut g = Sketch::with_options(&mut scene, options);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SketchOptions {
    base_style: StyleRecord,
}

impl SketchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill(mut self, fill: impl Into<Signal<Option<Paint>>>) -> Self {
        self.base_style.fill = Some(fill.into());
        self
    }

    pub fn stroke(mut self, stroke: impl Into<Signal<Option<Paint>>>) -> Self {
        self.base_style.stroke = Some(stroke.into());
        self
    }

    pub fn line_width(mut self, width: impl Into<Signal<f32>>) -> Self {
        self.base_style.line_width = Some(width.into());
        self
    }

    pub fn font_size(mut self, size: impl Into<Signal<f32>>) -> Self {
        self.base_style.font_size = Some(size.into());
        self
    }

    pub fn font_family(mut self, family: impl Into<Signal<String>>) -> Self {
        self.base_style.font_family = Some(family.into());
        self
    }

    /// Replaces the whole base record.
    pub fn base_style(mut self, style: StyleRecord) -> Self {
        self.base_style = style;
        self
    }

    pub(crate) fn into_base_style(self) -> StyleRecord {
        self.base_style
    }
}
