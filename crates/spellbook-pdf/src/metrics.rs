//! Approximate Times text metrics.
//!
//! The built-in PDF fonts ship no metrics tables through this code
//! path, so widths come from a coarse per-character table derived from
//! the Times Roman AFM widths. Good enough for line breaking; the
//! glyphs themselves are still positioned by the viewer.

use spellbook_layout::{FontStyle, TextMeasure};

const PT_TO_MM: f32 = 25.4 / 72.0;

/// Width of a character as a fraction of the font size.
fn char_ratio(c: char) -> f32 {
    match c {
        ' ' => 0.25,
        'i' | 'j' | 'l' | '.' | ',' | ';' | ':' | '\'' | '!' | '|' => 0.28,
        'f' | 't' | 'r' | 'I' | '(' | ')' | '[' | ']' | '-' | '/' | '"' => 0.33,
        'm' | 'w' => 0.72,
        'M' | 'W' => 0.89,
        'A'..='Z' => 0.67,
        '0'..='9' => 0.50,
        'a'..='z' => 0.46,
        _ => 0.50,
    }
}

fn style_factor(style: FontStyle) -> f32 {
    match style {
        FontStyle::Regular | FontStyle::Italic => 1.0,
        FontStyle::Bold | FontStyle::BoldItalic => 1.05,
    }
}

/// [`TextMeasure`] backed by the ratio table above.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimesMetrics;

impl TextMeasure for TimesMetrics {
    fn text_width(&self, text: &str, style: FontStyle, size: f32) -> f32 {
        let units: f32 = text.chars().map(char_ratio).sum();
        units * size * PT_TO_MM * style_factor(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wider_glyphs_measure_wider() {
        let m = TimesMetrics;
        let narrow = m.text_width("ill", FontStyle::Regular, 7.0);
        let wide = m.text_width("maw", FontStyle::Regular, 7.0);
        assert!(wide > narrow);
    }

    #[test]
    fn test_bold_wider_than_regular() {
        let m = TimesMetrics;
        let regular = m.text_width("Fireball", FontStyle::Regular, 8.0);
        let bold = m.text_width("Fireball", FontStyle::Bold, 8.0);
        assert!(bold > regular);
    }

    #[test]
    fn test_width_scales_with_size() {
        let m = TimesMetrics;
        let small = m.text_width("spell", FontStyle::Regular, 7.0);
        let large = m.text_width("spell", FontStyle::Regular, 14.0);
        assert!((large - 2.0 * small).abs() < 1e-5);
    }

    #[test]
    fn test_empty_string_is_zero_width() {
        assert_eq!(TimesMetrics.text_width("", FontStyle::Regular, 7.0), 0.0);
    }
}
