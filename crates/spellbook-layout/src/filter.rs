//! Spell list filtering helpers

use crate::types::SpellRef;

/// Keep spells whose name contains `term`, case-insensitively. A blank
/// term keeps everything.
pub fn filter_by_search<T: SpellRef>(spells: Vec<T>, term: &str) -> Vec<T> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return spells;
    }
    spells
        .into_iter()
        .filter(|s| s.name().to_lowercase().contains(&term))
        .collect()
}

/// Keep spells of exactly `level`; `None` keeps everything.
pub fn filter_by_level<T: SpellRef>(spells: Vec<T>, level: Option<u8>) -> Vec<T> {
    match level {
        None => spells,
        Some(level) => spells.into_iter().filter(|s| s.level() == level).collect(),
    }
}

/// Keep spells at or below `max_level`.
pub fn filter_by_max_level<T: SpellRef>(spells: Vec<T>, max_level: u8) -> Vec<T> {
    spells
        .into_iter()
        .filter(|s| s.level() <= max_level)
        .collect()
}
