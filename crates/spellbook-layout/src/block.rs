//! Spell block rendering
//!
//! Turns one spell record into draw instructions: small-caps header,
//! four-column metadata row with icon glyphs, wrapped description
//! paragraphs, and the optional "At Higher Levels." addendum.
//!
//! `estimate_height` predicts the exact vertical extent of a block by
//! running the same wrapping computations as the render path; the flow
//! controller relies on the two never disagreeing.

use crate::canvas::{DrawOp, FontStyle, Rgb8, TextMeasure};
use crate::columns::ColumnWidths;
use crate::flow::PageCursor;
use crate::icons;
use crate::page_format::PageFormat;
use crate::style::StyleConfig;
use crate::text::{layout_segments, parse_text_segments, StyledLine};
use crate::types::Spell;

/// Literal label introducing the addendum paragraph.
const HIGHER_LEVELS_LABEL: &str = "At Higher Levels.";

/// Gap between the end of the spell name and the level/school note.
const GAP_AFTER_NAME: f32 = 2.0;

/// Stroke for the metadata row borders.
const META_BORDER_WIDTH: f32 = 0.15;
const META_BORDER_COLOR: Rgb8 = Rgb8::gray(180);

/// Inset of cell text from the cell's left edge.
const CELL_INSET: f32 = 1.0;

pub struct SpellBlockRenderer<'a> {
    measure: &'a dyn TextMeasure,
    style: &'a StyleConfig,
    format: &'a PageFormat,
    columns: ColumnWidths,
}

impl<'a> SpellBlockRenderer<'a> {
    pub fn new(
        measure: &'a dyn TextMeasure,
        style: &'a StyleConfig,
        format: &'a PageFormat,
        columns: ColumnWidths,
    ) -> Self {
        Self {
            measure,
            style,
            format,
            columns,
        }
    }

    pub fn columns(&self) -> &ColumnWidths {
        &self.columns
    }

    /// Render a complete spell block at the cursor, advancing it by the
    /// block's height.
    pub fn render_spell(&self, cursor: &mut PageCursor, spell: &Spell) {
        self.render_header(cursor, spell);
        self.render_metadata_row(cursor, spell);
        self.render_description(cursor, &spell.description);
        if let Some(higher) = spell.higher_levels.as_deref() {
            self.render_higher_levels(cursor, higher);
        }
    }

    /// Predicted vertical extent of the block, excluding inter-spell
    /// spacing. Uses the same wrapping as the render path.
    pub fn estimate_height(&self, spell: &Spell) -> f32 {
        let header = self.style.gap_name_to_meta;
        let metadata = self.metadata_row_height(self.material_lines(spell).len())
            + self.style.gap_after_meta;
        let description =
            self.description_line_count(&spell.description) as f32 * self.style.line_height_body;
        let higher = spell
            .higher_levels
            .as_deref()
            .map_or(0.0, |text| self.higher_levels_height(text));
        header + metadata + description + higher
    }

    // ----- header -----

    pub fn render_header(&self, cursor: &mut PageCursor, spell: &Spell) {
        let y = cursor.y();
        let x = self.format.margins.left;
        let name_end = self.emit_small_caps_name(cursor, &spell.name, x, y);
        cursor.push(DrawOp::Text {
            text: format_level_school(spell),
            x: name_end + GAP_AFTER_NAME,
            y,
            style: FontStyle::Italic,
            size: self.style.font_level_school,
        });
        cursor.advance(self.style.gap_name_to_meta);
    }

    /// Emulated small caps: the whole name upper-cased, first letter of
    /// each word at full size, the rest reduced. Returns the x position
    /// after the last glyph.
    fn emit_small_caps_name(
        &self,
        cursor: &mut PageCursor,
        name: &str,
        start_x: f32,
        y: f32,
    ) -> f32 {
        let full = self.style.font_spell_name;
        let small = full * self.style.small_caps_ratio;
        let mut x = start_x;

        for (w, word) in name.to_uppercase().split_whitespace().enumerate() {
            if w > 0 {
                x += self.measure.text_width(" ", FontStyle::Bold, full);
            }
            for (i, ch) in word.chars().enumerate() {
                let size = if i == 0 { full } else { small };
                let glyph = ch.to_string();
                let advance = self.measure.text_width(&glyph, FontStyle::Bold, size);
                cursor.push(DrawOp::Text {
                    text: glyph,
                    x,
                    y,
                    style: FontStyle::Bold,
                    size,
                });
                x += advance;
            }
        }
        x
    }

    // ----- metadata row -----

    pub fn render_metadata_row(&self, cursor: &mut PageCursor, spell: &Spell) {
        let material = self.material_lines(spell);
        let row_height = self.metadata_row_height(material.len());
        let x = self.format.margins.left;
        let y = cursor.y();
        let text_y = y + self.style.line_height_meta - 1.0;

        self.emit_row_borders(cursor, x, y, row_height);
        self.emit_row_cells(cursor, spell, x, text_y, &material);

        cursor.advance(row_height + self.style.gap_after_meta);
    }

    /// Wrapped italic caption for the material component, fit to the
    /// components column.
    fn material_lines(&self, spell: &Spell) -> Vec<String> {
        let Some(description) = spell.material_description() else {
            return Vec::new();
        };
        if description.trim().is_empty() {
            return Vec::new();
        }
        self.measure.wrap_to_width(
            &format!("({description})"),
            FontStyle::Italic,
            self.style.font_material,
            self.columns.components - 2.0 * CELL_INSET,
        )
    }

    fn metadata_row_height(&self, material_line_count: usize) -> f32 {
        let base = self.style.line_height_meta + 1.0;
        base + material_line_count as f32 * self.style.line_height_body
    }

    fn emit_row_borders(&self, cursor: &mut PageCursor, x: f32, y: f32, row_height: f32) {
        let right_edge = x + self.format.content_width();
        let mut line = |x1: f32, y1: f32, x2: f32, y2: f32| {
            cursor.push(DrawOp::Line {
                x1,
                y1,
                x2,
                y2,
                width: META_BORDER_WIDTH,
                color: META_BORDER_COLOR,
            });
        };

        line(x, y, right_edge, y);
        line(x, y + row_height, right_edge, y + row_height);

        let mut divider_x = x + self.columns.casting_time;
        line(divider_x, y, divider_x, y + row_height);
        divider_x += self.columns.range;
        line(divider_x, y, divider_x, y + row_height);
        divider_x += self.columns.duration;
        line(divider_x, y, divider_x, y + row_height);
    }

    fn emit_row_cells(
        &self,
        cursor: &mut PageCursor,
        spell: &Spell,
        x: f32,
        text_y: f32,
        material: &[String],
    ) {
        let size = self.style.font_metadata;
        let icon = self.style.icon_size;
        let mut cell = |cursor: &mut PageCursor, text: &str, cell_x: f32| {
            cursor.push(DrawOp::Text {
                text: text.to_string(),
                x: cell_x,
                y: text_y,
                style: FontStyle::Regular,
                size,
            });
        };

        let mut cell_x = x + CELL_INSET;
        if spell.ritual {
            cursor.push(icons::square(cell_x, text_y - icon - 0.3, icon));
            cell_x += icon + CELL_INSET;
        }
        cell(cursor, &spell.casting_time, cell_x);

        cell(cursor, &spell.range, x + self.columns.casting_time + CELL_INSET);

        let mut cell_x = x + self.columns.casting_time + self.columns.range + CELL_INSET;
        if spell.concentration {
            for op in icons::diamond(cell_x, text_y - icon - 0.3, icon) {
                cursor.push(op);
            }
            cell_x += icon + CELL_INSET;
        }
        cell(cursor, &spell.duration, cell_x);

        let components_x =
            x + self.columns.casting_time + self.columns.range + self.columns.duration + CELL_INSET;
        cell(cursor, &spell.components_abbrev(), components_x);

        let mut material_y = text_y + self.style.line_height_body;
        for line in material {
            cursor.push(DrawOp::Text {
                text: line.clone(),
                x: components_x,
                y: material_y,
                style: FontStyle::Italic,
                size: self.style.font_material,
            });
            material_y += self.style.line_height_body;
        }
    }

    // ----- description -----

    pub fn render_description(&self, cursor: &mut PageCursor, description: &str) {
        let x = self.format.margins.left;
        for (i, paragraph) in description.split("\n\n").enumerate() {
            let lines = self.paragraph_lines(paragraph);
            for (j, line) in lines.iter().enumerate() {
                let line_x = if i > 0 && j == 0 {
                    x + self.style.first_indent
                } else {
                    x
                };
                cursor.break_if_past_bottom();
                self.emit_styled_line(cursor, line, line_x);
                cursor.advance(self.style.line_height_body);
            }
        }
    }

    /// One paragraph, newline-normalized, styled and wrapped to the
    /// content width.
    fn paragraph_lines(&self, paragraph: &str) -> Vec<StyledLine> {
        let normalized = paragraph.replace('\n', " ");
        let segments = parse_text_segments(&normalized);
        layout_segments(
            self.measure,
            &segments,
            FontStyle::Regular,
            self.style.font_body,
            self.format.content_width(),
        )
    }

    fn description_line_count(&self, description: &str) -> usize {
        description
            .split("\n\n")
            .map(|p| self.paragraph_lines(p).len())
            .sum()
    }

    fn emit_styled_line(&self, cursor: &mut PageCursor, line: &StyledLine, x: f32) {
        let size = self.style.font_body;
        let y = cursor.y();
        let mut run_x = x;
        for run in &line.runs {
            cursor.push(DrawOp::Text {
                text: run.text.clone(),
                x: run_x,
                y,
                style: run.style,
                size,
            });
            run_x += self.measure.text_width(&run.text, run.style, size);
        }
    }

    // ----- higher levels -----

    pub fn render_higher_levels(&self, cursor: &mut PageCursor, text: &str) {
        let x = self.format.margins.left;
        let size = self.style.font_body;
        let label_x = x + self.style.first_indent;

        cursor.break_if_past_bottom();
        let y = cursor.y();
        cursor.push(DrawOp::Text {
            text: HIGHER_LEVELS_LABEL.to_string(),
            x: label_x,
            y,
            style: FontStyle::BoldItalic,
            size,
        });
        let label_width = self
            .measure
            .text_width(HIGHER_LEVELS_LABEL, FontStyle::BoldItalic, size);

        let (first, full) = self.higher_level_lines(text);
        if let Some(first) = first {
            cursor.push(DrawOp::Text {
                text: first,
                x: label_x + label_width + CELL_INSET,
                y,
                style: FontStyle::Regular,
                size,
            });
            cursor.advance(self.style.line_height_body);
        }

        for line in full {
            cursor.break_if_past_bottom();
            cursor.push(DrawOp::Text {
                text: line,
                x,
                y: cursor.y(),
                style: FontStyle::Regular,
                size,
            });
            cursor.advance(self.style.line_height_body);
        }
    }

    /// The addendum's first line wraps to the width remaining after the
    /// label; continuation lines re-wrap to the full content width.
    fn higher_level_lines(&self, text: &str) -> (Option<String>, Vec<String>) {
        let size = self.style.font_body;
        let label_width = self
            .measure
            .text_width(HIGHER_LEVELS_LABEL, FontStyle::BoldItalic, size);
        let remaining =
            self.format.content_width() - self.style.first_indent - label_width - GAP_AFTER_NAME;

        // Emphasis markers carry no rendering here; the label already
        // marks the addendum.
        let plain: String = parse_text_segments(&text.replace('\n', " "))
            .into_iter()
            .map(|segment| segment.text)
            .collect();

        let mut lines = self
            .measure
            .wrap_to_width(&plain, FontStyle::Regular, size, remaining)
            .into_iter();
        let first = lines.next();
        let rest: Vec<String> = lines.collect();
        let full = if rest.is_empty() {
            Vec::new()
        } else {
            self.measure.wrap_to_width(
                &rest.join(" "),
                FontStyle::Regular,
                size,
                self.format.content_width(),
            )
        };
        (first, full)
    }

    fn higher_levels_height(&self, text: &str) -> f32 {
        let (first, full) = self.higher_level_lines(text);
        (usize::from(first.is_some()) + full.len()) as f32 * self.style.line_height_body
    }
}

fn format_level_school(spell: &Spell) -> String {
    let school = title_case(&spell.school);
    if spell.level == 0 {
        format!("({school} Cantrip)")
    } else {
        format!("(Level {} {school})", spell.level)
    }
}

fn title_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}
