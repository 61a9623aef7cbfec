//! Draw instructions and the measuring contract
//!
//! The layout engine never talks to a drawing backend directly: it
//! measures text through [`TextMeasure`] and emits [`DrawOp`]s grouped
//! into [`Page`]s. A backend replays the finished [`Document`] into
//! whatever output it produces.
//!
//! Coordinates are top-down millimeters from the page's top-left
//! corner; text y positions are baselines. Font sizes are points.

/// One of the four font faces the layout uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

/// 8-bit RGB color for strokes and fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Rgb8 = Rgb8 { r: 0, g: 0, b: 0 };

    pub const fn gray(value: u8) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }
}

/// A single page-relative draw instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        text: String,
        x: f32,
        y: f32,
        style: FontStyle,
        size: f32,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: Rgb8,
    },
    /// Stroked rectangle.
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        line_width: f32,
        color: Rgb8,
    },
    /// Filled triangle.
    Triangle {
        points: [[f32; 2]; 3],
        color: Rgb8,
    },
}

/// Draw instructions for one page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

/// A finished render job: ordered pages plus a document title.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    pub pages: Vec<Page>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            pages: Vec::new(),
        }
    }
}

/// Text measurement capability the layout engine depends on.
///
/// Implementations must be deterministic: the engine calls the same
/// measurements from both its height pre-check and its render path and
/// relies on them agreeing.
pub trait TextMeasure {
    /// Rendered width of `text` in millimeters.
    fn text_width(&self, text: &str, style: FontStyle, size: f32) -> f32;

    /// Greedy word wrap of `text` into lines no wider than `max_width`.
    ///
    /// A single word wider than `max_width` occupies its own line, so
    /// every call makes strictly positive progress through the input.
    fn wrap_to_width(
        &self,
        text: &str,
        style: FontStyle,
        size: f32,
        max_width: f32,
    ) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();
        for word in text.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
                continue;
            }
            let candidate = format!("{current} {word}");
            if self.text_width(&candidate, style, size) > max_width {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            } else {
                current = candidate;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

/// Character-cell metrics: every glyph advances by the same fixed
/// width. Useful for deterministic tests and plain-text previews.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidthMeasure {
    pub char_width_mm: f32,
}

impl TextMeasure for FixedWidthMeasure {
    fn text_width(&self, text: &str, _style: FontStyle, _size: f32) -> f32 {
        text.chars().count() as f32 * self.char_width_mm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEASURE: FixedWidthMeasure = FixedWidthMeasure { char_width_mm: 1.0 };

    #[test]
    fn test_wrap_fits_on_one_line() {
        let lines = MEASURE.wrap_to_width("one two", FontStyle::Regular, 7.0, 20.0);
        assert_eq!(lines, vec!["one two"]);
    }

    #[test]
    fn test_wrap_breaks_between_words() {
        // "alpha beta" is 10 chars; a 7mm line fits one word at a time.
        let lines = MEASURE.wrap_to_width("alpha beta gamma", FontStyle::Regular, 7.0, 7.0);
        assert_eq!(lines, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_wrap_overlong_word_gets_own_line() {
        let lines = MEASURE.wrap_to_width("hi extraordinarily so", FontStyle::Regular, 7.0, 6.0);
        assert_eq!(lines, vec!["hi", "extraordinarily", "so"]);
    }

    #[test]
    fn test_wrap_empty_input() {
        let lines = MEASURE.wrap_to_width("", FontStyle::Regular, 7.0, 10.0);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_wrap_collapses_runs_of_whitespace() {
        let lines = MEASURE.wrap_to_width("a   b \t c", FontStyle::Regular, 7.0, 20.0);
        assert_eq!(lines, vec!["a b c"]);
    }
}
