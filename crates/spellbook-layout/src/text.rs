//! Inline emphasis segmentation and styled line flow
//!
//! Spell body text carries `**...**` emphasis spans. A span whose
//! content is one of the conventional section labels renders
//! bold-italic rather than bold, matching how printed spell blocks
//! typeset their "Cantrip Upgrade."-style headers.

use crate::canvas::{FontStyle, TextMeasure};

/// Emphasis spans recognized as section labels.
const BOLD_ITALIC_LABELS: [&str; 2] = ["Using a Higher-Level Spell Slot.", "Cantrip Upgrade."];

const MARKER: &str = "**";

/// A run of text sharing one inline style.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSegment {
    pub text: String,
    pub bold: bool,
    pub bold_italic: bool,
}

impl TextSegment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            bold: false,
            bold_italic: false,
        }
    }

    /// The font face this segment renders in, given the surrounding
    /// base style.
    pub fn style(&self, base: FontStyle) -> FontStyle {
        if self.bold_italic {
            FontStyle::BoldItalic
        } else if self.bold {
            FontStyle::Bold
        } else {
            base
        }
    }
}

/// Split `text` into styled segments on `**...**` emphasis markers.
///
/// Spans cannot nest; an unclosed marker is plain text from the marker
/// to the end of the string. Empty input yields no segments.
pub fn parse_text_segments(text: &str) -> Vec<TextSegment> {
    let mut segments = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(MARKER) {
        let after_open = &rest[start + MARKER.len()..];
        let Some(len) = after_open.find(MARKER) else {
            break;
        };
        if len == 0 {
            break;
        }
        if start > 0 {
            segments.push(TextSegment::plain(&rest[..start]));
        }
        let span = &after_open[..len];
        let bold_italic = BOLD_ITALIC_LABELS.contains(&span);
        segments.push(TextSegment {
            text: span.to_string(),
            bold: !bold_italic,
            bold_italic,
        });
        rest = &after_open[len + MARKER.len()..];
    }

    if !rest.is_empty() {
        segments.push(TextSegment::plain(rest));
    }
    segments
}

/// A run of same-styled text within one wrapped line.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledRun {
    pub text: String,
    pub style: FontStyle,
}

/// One wrapped line of styled runs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledLine {
    pub runs: Vec<StyledRun>,
}

/// Flow styled segments into lines no wider than `max_width`, greedy
/// word by word, preserving each word's segment style across breaks.
///
/// Like [`TextMeasure::wrap_to_width`], an over-long single word takes
/// its own line so progress through the input is always positive.
pub fn layout_segments(
    measure: &dyn TextMeasure,
    segments: &[TextSegment],
    base: FontStyle,
    size: f32,
    max_width: f32,
) -> Vec<StyledLine> {
    let mut lines = Vec::new();
    let mut line = StyledLine::default();
    let mut line_width = 0.0f32;

    for segment in segments {
        let style = segment.style(base);
        for word in segment.text.split_whitespace() {
            let word_width = measure.text_width(word, style, size);
            let space_width = if line.runs.is_empty() {
                0.0
            } else {
                measure.text_width(" ", style, size)
            };

            if !line.runs.is_empty() && line_width + space_width + word_width > max_width {
                lines.push(std::mem::take(&mut line));
                line_width = 0.0;
            }

            match line.runs.last_mut() {
                Some(run) if run.style == style => {
                    run.text.push(' ');
                    run.text.push_str(word);
                    line_width += measure.text_width(" ", style, size) + word_width;
                }
                Some(_) => {
                    line.runs.push(StyledRun {
                        text: format!(" {word}"),
                        style,
                    });
                    line_width += measure.text_width(" ", style, size) + word_width;
                }
                None => {
                    line.runs.push(StyledRun {
                        text: word.to_string(),
                        style,
                    });
                    line_width += word_width;
                }
            }
        }
    }

    if !line.runs.is_empty() {
        lines.push(line);
    }
    lines
}
