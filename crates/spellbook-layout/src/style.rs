//! Typographic style constants
//!
//! One table parameterizes the renderer for every page format; the
//! defaults reproduce the binder layout. Font sizes in points, all
//! other distances in millimeters.

/// Minimum column widths as fractions of the content width, so no
/// metadata column collapses even when its longest value is short.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnMinRatios {
    pub casting_time: f32,
    pub range: f32,
    pub duration: f32,
    pub components: f32,
}

impl Default for ColumnMinRatios {
    fn default() -> Self {
        Self {
            casting_time: 0.15,
            range: 0.12,
            duration: 0.20,
            components: 0.25,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    pub font_spell_name: f32,
    pub font_level_school: f32,
    pub font_metadata: f32,
    pub font_material: f32,
    pub font_body: f32,
    pub font_section: f32,

    pub line_height_body: f32,
    pub line_height_meta: f32,
    pub spell_spacing: f32,
    pub gap_name_to_meta: f32,
    pub gap_after_meta: f32,
    pub section_header_height: f32,

    pub icon_size: f32,
    pub first_indent: f32,
    /// Size multiplier for the non-initial letters of the emulated
    /// small-caps spell name.
    pub small_caps_ratio: f32,

    pub col_padding: f32,
    pub col_min_ratios: ColumnMinRatios,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_spell_name: 8.0,
            font_level_school: 8.0,
            font_metadata: 7.0,
            font_material: 7.0,
            font_body: 7.0,
            font_section: 11.0,

            line_height_body: 3.0,
            line_height_meta: 4.5,
            spell_spacing: 2.0,
            gap_name_to_meta: 2.5,
            gap_after_meta: 2.5,
            section_header_height: 8.0,

            icon_size: 1.8,
            first_indent: 3.0,
            small_caps_ratio: 0.75,

            col_padding: 3.0,
            col_min_ratios: ColumnMinRatios::default(),
        }
    }
}
