//! Spellbook JSON import and export.
//!
//! The on-disk shape matches the app's export format: a `character`
//! object plus a `spells` array of fully resolved spell records.

use std::path::{Path, PathBuf};

use spellbook_layout::Spellbook;

use crate::{DataError, Result};

/// Parse and validate a spellbook export. Errors name the offending
/// field so a hand-edited file is debuggable.
pub fn parse_spellbook(json: &str) -> Result<Spellbook> {
    let book: Spellbook =
        serde_json::from_str(json).map_err(|e| DataError::Validation(e.to_string()))?;

    if book.character.class_name.trim().is_empty() {
        return Err(DataError::Validation(
            "character.className must not be empty".to_string(),
        ));
    }
    if !(1..=20).contains(&book.character.level) {
        return Err(DataError::Validation(format!(
            "character.level must be 1-20, got {}",
            book.character.level
        )));
    }
    for spell in &book.spells {
        if spell.level > 9 {
            return Err(DataError::Validation(format!(
                "spell {:?} has level {}, expected 0-9",
                spell.name, spell.level
            )));
        }
        if spell.name.trim().is_empty() {
            return Err(DataError::Validation(format!(
                "spell {:?} has an empty name",
                spell.id
            )));
        }
    }
    Ok(book)
}

/// Read and parse a spellbook file off the async runtime.
pub async fn load_spellbook(path: impl Into<PathBuf>) -> Result<Spellbook> {
    let path = path.into();
    let json = tokio::fs::read_to_string(&path).await?;
    tokio::task::spawn_blocking(move || parse_spellbook(&json)).await?
}

/// Write a spellbook as pretty-printed JSON.
pub async fn save_spellbook(path: impl AsRef<Path>, book: &Spellbook) -> Result<()> {
    let json = serde_json::to_vec_pretty(book)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "character": {
            "id": "c1",
            "name": "Ezri",
            "className": "Wizard",
            "subclass": "Evoker",
            "level": 5
        },
        "spells": [
            {
                "id": "fire-bolt",
                "name": "Fire Bolt",
                "level": 0,
                "school": "Evocation",
                "castingTime": "1 action",
                "range": "120 feet",
                "duration": "Instantaneous",
                "components": {"verbal": true, "somatic": true, "material": false},
                "description": "You hurl a mote of fire.",
                "ritual": false,
                "concentration": false
            }
        ]
    }"#;

    #[test]
    fn test_parse_valid_spellbook() {
        let book = parse_spellbook(VALID).unwrap();
        assert_eq!(book.character.class_name, "Wizard");
        assert_eq!(book.spells.len(), 1);
        assert_eq!(book.spells[0].id, "fire-bolt");
    }

    #[test]
    fn test_parse_rejects_missing_character() {
        let err = parse_spellbook(r#"{"spells": []}"#).unwrap_err();
        assert!(matches!(err, DataError::Validation(_)));
    }

    #[test]
    fn test_parse_rejects_out_of_range_levels() {
        let bad_character = VALID.replace("\"level\": 5", "\"level\": 21");
        assert!(parse_spellbook(&bad_character).is_err());

        let bad_spell = VALID.replace("\"level\": 0", "\"level\": 10");
        assert!(parse_spellbook(&bad_spell).is_err());
    }

    #[test]
    fn test_parse_rejects_blank_class() {
        let bad = VALID.replace("\"className\": \"Wizard\"", "\"className\": \" \"");
        let err = parse_spellbook(&bad).unwrap_err();
        assert!(err.to_string().contains("className"));
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        let book = parse_spellbook(VALID).unwrap();

        save_spellbook(&path, &book).await.unwrap();
        let loaded = load_spellbook(&path).await.unwrap();
        assert_eq!(loaded.character.id, book.character.id);
        assert_eq!(loaded.spells[0].name, "Fire Bolt");
    }
}
