use crate::paint::Paint;
use crate::signal::Signal;

/// Line end style for strokes.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Corner style where stroked segments meet.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Horizontal text alignment.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TextAlign {
    #[default]
    Start,
    End,
    Left,
    Right,
    Center,
}

/// Style properties carried by a node.
///
/// Every field is optional: `None` means "not set here", which is not the
/// same as zero. Unset paint and stroke fields fall back to defaults; unset
/// text fields inherit from the parent node when the scene is sampled (see
/// [`ResolvedStyle::resolve`]).
///
/// Fields hold [`Signal`]s, so cloning a record is a shallow copy: the
/// clone shares every reactive value with the original.
#[derive(Debug, Clone, Default)]
pub struct StyleRecord {
    pub fill: Option<Signal<Option<Paint>>>,
    pub stroke: Option<Signal<Option<Paint>>>,
    pub line_width: Option<Signal<f32>>,
    pub clip: Option<Signal<bool>>,
    pub stroke_first: Option<Signal<bool>>,
    pub font_size: Option<Signal<f32>>,
    pub font_family: Option<Signal<String>>,
    pub antialiased: Option<Signal<bool>>,
    pub line_dash: Option<Signal<Vec<f32>>>,
    pub line_cap: Option<Signal<LineCap>>,
    pub line_join: Option<Signal<LineJoin>>,
    pub text_align: Option<Signal<TextAlign>>,
    pub letter_spacing: Option<Signal<f32>>,
}

impl StyleRecord {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.fill.is_none()
            && self.stroke.is_none()
            && self.line_width.is_none()
            && self.clip.is_none()
            && self.stroke_first.is_none()
            && self.font_size.is_none()
            && self.font_family.is_none()
            && self.antialiased.is_none()
            && self.line_dash.is_none()
            && self.line_cap.is_none()
            && self.line_join.is_none()
            && self.text_align.is_none()
            && self.letter_spacing.is_none()
    }
}

/// A sampled [`StyleRecord`] with every field filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub fill: Option<Paint>,
    pub stroke: Option<Paint>,
    pub line_width: f32,
    pub clip: bool,
    pub stroke_first: bool,
    pub font_size: f32,
    pub font_family: String,
    pub antialiased: bool,
    pub line_dash: Vec<f32>,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub text_align: TextAlign,
    pub letter_spacing: f32,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self {
            fill: None,
            stroke: None,
            line_width: 0.0,
            clip: false,
            stroke_first: false,
            font_size: 48.0,
            font_family: String::from("sans-serif"),
            antialiased: true,
            line_dash: Vec::new(),
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            text_align: TextAlign::Start,
            letter_spacing: 0.0,
        }
    }
}

impl ResolvedStyle {
    /// Samples `record`.
    ///
    /// Text fields (font size/family, alignment, letter spacing) inherit
    /// from `parent` when unset; everything else uses the defaults.
    pub fn resolve(record: &StyleRecord, parent: &ResolvedStyle) -> Self {
        let defaults = ResolvedStyle::default();
        Self {
            fill: sample_or(&record.fill, defaults.fill),
            stroke: sample_or(&record.stroke, defaults.stroke),
            line_width: sample_or(&record.line_width, defaults.line_width),
            clip: sample_or(&record.clip, defaults.clip),
            stroke_first: sample_or(&record.stroke_first, defaults.stroke_first),
            antialiased: sample_or(&record.antialiased, defaults.antialiased),
            line_dash: sample_or(&record.line_dash, defaults.line_dash),
            line_cap: sample_or(&record.line_cap, defaults.line_cap),
            line_join: sample_or(&record.line_join, defaults.line_join),

            font_size: sample_or(&record.font_size, parent.font_size),
            font_family: sample_or(&record.font_family, parent.font_family.clone()),
            text_align: sample_or(&record.text_align, parent.text_align),
            letter_spacing: sample_or(&record.letter_spacing, parent.letter_spacing),
        }
    }
}

#[inline]
fn sample_or<T: Clone + 'static>(field: &Option<Signal<T>>, fallback: T) -> T {
    field.as_ref().map_or(fallback, Signal::get)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::signal::SignalCell;

    #[test]
    fn unset_record_resolves_to_defaults() {
        let style = ResolvedStyle::resolve(&StyleRecord::default(), &ResolvedStyle::default());
        assert_eq!(style, ResolvedStyle::default());
    }

    #[test]
    fn text_fields_inherit_from_parent() {
        let parent = ResolvedStyle { font_size: 12.0, line_width: 9.0, ..ResolvedStyle::default() };
        let style = ResolvedStyle::resolve(&StyleRecord::default(), &parent);
        assert_eq!(style.font_size, 12.0);
        // Stroke width does not inherit.
        assert_eq!(style.line_width, 0.0);
    }

    #[test]
    fn clone_shares_reactive_fields() {
        let color = SignalCell::new(Color::black());
        let record = StyleRecord { fill: Some(color.signal().into()), ..StyleRecord::default() };
        let copy = record.clone();

        color.set(Color::white());
        let resolved = ResolvedStyle::resolve(&copy, &ResolvedStyle::default());
        assert_eq!(resolved.fill, Some(Paint::Solid(Color::white())));
    }
}
