//! Page flow control
//!
//! Drives pagination for a whole spellbook: spells grouped by level
//! (ascending, alphabetical within a level), one level section per
//! page start, a height pre-check before each spell block, and page
//! breaks that never separate a spell's header from its metadata row.

use crate::block::SpellBlockRenderer;
use crate::canvas::{Document, DrawOp, FontStyle, Page, Rgb8, TextMeasure};
use crate::columns::plan_column_widths;
use crate::filename::build_title;
use crate::page_format::PageFormat;
use crate::sort::{group_spells_by_level, sort_alphabetically};
use crate::style::StyleConfig;
use crate::types::{Character, Result, Spell};

/// Baseline offset of the section header text within its band.
const SECTION_TEXT_OFFSET: f32 = 4.0;
/// Offset of the divider line under the section header.
const SECTION_LINE_OFFSET: f32 = 6.0;
const SECTION_LINE_WIDTH: f32 = 0.3;

/// Mutable draw position owned by a single render job: the open page
/// list plus a top-down y cursor. Never shared across jobs.
pub struct PageCursor<'a> {
    format: &'a PageFormat,
    document: Document,
    y: f32,
}

impl<'a> PageCursor<'a> {
    pub fn new(format: &'a PageFormat, title: String) -> Self {
        Self {
            format,
            document: Document::new(title),
            y: format.margins.top,
        }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Bottom content boundary of the page.
    pub fn bottom(&self) -> f32 {
        self.format.bottom_boundary()
    }

    pub fn advance(&mut self, dy: f32) {
        self.y += dy;
    }

    /// Open a fresh page and reset the cursor to the top margin.
    pub fn new_page(&mut self) {
        self.document.pages.push(Page::default());
        self.y = self.format.margins.top;
    }

    /// Mid-block overflow: move to a new page if the cursor has passed
    /// the bottom boundary.
    pub fn break_if_past_bottom(&mut self) {
        if self.y > self.bottom() {
            self.new_page();
        }
    }

    /// Append an instruction to the current page, opening the first
    /// page if none is open yet.
    pub fn push(&mut self, op: DrawOp) {
        if self.document.pages.is_empty() {
            self.document.pages.push(Page::default());
        }
        let last = self.document.pages.len() - 1;
        self.document.pages[last].ops.push(op);
    }

    pub fn finish(self) -> Document {
        self.document
    }
}

/// The layout engine entry point: renders an entire spellbook into a
/// [`Document`] of draw instructions.
pub struct SpellbookLayout<'a> {
    format: &'a PageFormat,
    style: &'a StyleConfig,
    measure: &'a dyn TextMeasure,
}

impl<'a> SpellbookLayout<'a> {
    pub fn new(
        format: &'a PageFormat,
        style: &'a StyleConfig,
        measure: &'a dyn TextMeasure,
    ) -> Result<Self> {
        format.validate()?;
        Ok(Self {
            format,
            style,
            measure,
        })
    }

    /// Run one render job. Deterministic: the same inputs produce the
    /// same instruction sequence. An empty spell list produces a
    /// document with zero pages.
    pub fn render(&self, spells: &[Spell], character: &Character) -> Document {
        let columns =
            plan_column_widths(self.measure, self.style, spells, self.format.content_width());
        log::debug!(
            "column plan: casting {:.1} / range {:.1} / duration {:.1} / components {:.1}",
            columns.casting_time,
            columns.range,
            columns.duration,
            columns.components
        );
        let block = SpellBlockRenderer::new(self.measure, self.style, self.format, columns);
        let mut cursor = PageCursor::new(self.format, build_title(character));

        for (level, mut group) in group_spells_by_level(spells) {
            sort_alphabetically(&mut group);
            cursor.new_page();
            self.render_section_header(&mut cursor, level);

            for spell in group {
                if cursor.y() + block.estimate_height(spell) > cursor.bottom() {
                    cursor.new_page();
                }
                block.render_spell(&mut cursor, spell);
                cursor.advance(self.style.spell_spacing);
            }
        }

        let document = cursor.finish();
        log::info!(
            "laid out {} spells across {} pages ({})",
            spells.len(),
            document.pages.len(),
            self.format.id
        );
        document
    }

    /// "Cantrips" or "Level N", with a divider line underneath. Not
    /// repeated after a mid-level page break.
    fn render_section_header(&self, cursor: &mut PageCursor, level: u8) {
        let text = if level == 0 {
            "Cantrips".to_string()
        } else {
            format!("Level {level}")
        };
        let x = self.format.margins.left;
        let y = cursor.y();

        cursor.push(DrawOp::Text {
            text,
            x,
            y: y + SECTION_TEXT_OFFSET,
            style: FontStyle::Bold,
            size: self.style.font_section,
        });

        let line_y = y + SECTION_LINE_OFFSET;
        cursor.push(DrawOp::Line {
            x1: x,
            y1: line_y,
            x2: self.format.width - self.format.margins.right,
            y2: line_y,
            width: SECTION_LINE_WIDTH,
            color: Rgb8::BLACK,
        });

        cursor.advance(SECTION_LINE_OFFSET + self.style.section_header_height);
    }
}
