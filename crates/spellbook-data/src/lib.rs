//! Spell data access for spellbook generation.
//!
//! Loads a 5eTools-shaped spell dataset from disk, normalizes it into
//! the layout crate's `Spell` model, and answers class, subclass and
//! spell lookups. Also covers spellbook JSON import/export and the
//! caster-progression spell level caps.

pub mod caster;
pub mod export;
pub mod fivetools;
pub mod provider;

pub use caster::{max_spell_level, CasterType};
pub use export::{load_spellbook, parse_spellbook, save_spellbook};
pub use provider::{ClassInfo, SpellStore, SubclassInfo};

pub type Result<T> = std::result::Result<T, DataError>;

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("spell not found: {0}")]
    SpellNotFound(String),

    #[error("invalid spellbook: {0}")]
    Validation(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("background task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}
