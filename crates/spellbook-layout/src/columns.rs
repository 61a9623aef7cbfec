//! Metadata column planning
//!
//! The four metadata columns (casting time, range, duration,
//! components) share one set of widths across every spell in a render
//! job, sized so the longest value of each column fits.

use crate::canvas::{FontStyle, TextMeasure};
use crate::style::StyleConfig;
use crate::types::Spell;

/// Extra advance reserved for an icon glyph plus its trailing gap.
pub(crate) const ICON_GAP: f32 = 1.0;

/// Planned widths for the metadata row, in millimeters. Frozen for the
/// duration of one render job.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColumnWidths {
    pub casting_time: f32,
    pub range: f32,
    pub duration: f32,
    pub components: f32,
}

impl ColumnWidths {
    pub fn total(&self) -> f32 {
        self.casting_time + self.range + self.duration + self.components
    }
}

/// Compute column widths for `spells` against `content_width`.
///
/// Each column gets the maximum rendered width of its values (plus
/// padding, plus icon allowance where the spell is a ritual or requires
/// concentration), raised to a proportional floor. When the four maxima
/// underfill the content width they are scaled up to fill it exactly;
/// when they overflow they are left at their natural widths and the row
/// renders crowded rather than failing.
pub fn plan_column_widths(
    measure: &dyn TextMeasure,
    style: &StyleConfig,
    spells: &[Spell],
    content_width: f32,
) -> ColumnWidths {
    let size = style.font_metadata;
    let icon_advance = style.icon_size + ICON_GAP;

    let mut max_casting = 0.0f32;
    let mut max_range = 0.0f32;
    let mut max_duration = 0.0f32;
    let mut max_components = 0.0f32;

    for spell in spells {
        let mut casting =
            measure.text_width(&spell.casting_time, FontStyle::Regular, size) + style.col_padding;
        if spell.ritual {
            casting += icon_advance;
        }

        let range = measure.text_width(&spell.range, FontStyle::Regular, size) + style.col_padding;

        let mut duration =
            measure.text_width(&spell.duration, FontStyle::Regular, size) + style.col_padding;
        if spell.concentration {
            duration += icon_advance;
        }

        let components = measure.text_width(&spell.components_abbrev(), FontStyle::Regular, size)
            + style.col_padding;

        max_casting = max_casting.max(casting);
        max_range = max_range.max(range);
        max_duration = max_duration.max(duration);
        max_components = max_components.max(components);
    }

    let ratios = &style.col_min_ratios;
    max_casting = max_casting.max(content_width * ratios.casting_time);
    max_range = max_range.max(content_width * ratios.range);
    max_duration = max_duration.max(content_width * ratios.duration);
    max_components = max_components.max(content_width * ratios.components);

    let total = max_casting + max_range + max_duration + max_components;

    if total < content_width {
        let ratio = content_width / total;
        return ColumnWidths {
            casting_time: max_casting * ratio,
            range: max_range * ratio,
            duration: max_duration * ratio,
            components: max_components * ratio,
        };
    }

    if total > content_width {
        log::warn!(
            "metadata columns overflow content width ({total:.1}mm > {content_width:.1}mm); \
             row will render crowded"
        );
    }

    ColumnWidths {
        casting_time: max_casting,
        range: max_range,
        duration: max_duration,
        components: max_components,
    }
}
