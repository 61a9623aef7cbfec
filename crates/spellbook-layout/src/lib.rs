//! Spellbook layout engine
//!
//! Deterministically flows variable-length spell records into
//! fixed-size pages and emits backend-agnostic draw instructions.
//! Backends supply text metrics through [`TextMeasure`] and replay the
//! resulting [`Document`] into their output format.

pub mod block;
pub mod canvas;
pub mod columns;
pub mod filename;
pub mod filter;
pub mod flow;
pub mod icons;
pub mod page_format;
pub mod sort;
pub mod style;
pub mod text;
pub mod types;

pub use block::SpellBlockRenderer;
pub use canvas::{Document, DrawOp, FixedWidthMeasure, FontStyle, Page, Rgb8, TextMeasure};
pub use columns::{plan_column_widths, ColumnWidths};
pub use filename::{build_filename, build_title};
pub use filter::{filter_by_level, filter_by_max_level, filter_by_search};
pub use flow::{PageCursor, SpellbookLayout};
pub use page_format::{PageFormat, PageMargins};
pub use sort::{group_spells_by_level, sort_alphabetically, sort_by_level_then_alpha};
pub use style::{ColumnMinRatios, StyleConfig};
pub use text::{layout_segments, parse_text_segments, StyledLine, StyledRun, TextSegment};
pub use types::{
    spell_level_name, Character, LayoutError, Result, Spell, SpellComponents, SpellListItem,
    SpellRef, Spellbook,
};
