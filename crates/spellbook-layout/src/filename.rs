//! Output filename and document title derivation

use crate::page_format::PageFormat;
use crate::types::Character;

/// Build the output filename for a character's spellbook.
///
/// The character name (fallback "spellbook" when blank) is lower-cased
/// with every character outside `[a-z0-9]` replaced by `_`, then the
/// "-spellbook" suffix and page format id are appended.
pub fn build_filename(character: &Character, format: &PageFormat) -> String {
    let name = character.name.trim();
    let base = if name.is_empty() {
        "spellbook".to_string()
    } else {
        let sanitized: String = name
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        format!("{sanitized}-spellbook")
    };
    format!("{base}-{}.pdf", format.id)
}

/// Human-readable document title, e.g. "Wizard (Evoker) Level 5
/// Spellbook".
pub fn build_title(character: &Character) -> String {
    if character.class_name.is_empty() {
        return "Spellbook".to_string();
    }
    let mut parts = vec![character.class_name.clone()];
    if !character.subclass.is_empty() {
        parts.push(format!("({})", character.subclass));
    }
    parts.push(format!("Level {}", character.level));
    format!("{} Spellbook", parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(name: &str) -> Character {
        Character {
            id: "c1".to_string(),
            name: name.to_string(),
            class_name: "Wizard".to_string(),
            subclass: "Evoker".to_string(),
            level: 5,
        }
    }

    #[test]
    fn test_sanitizes_name() {
        let filename = build_filename(&character("Mr. Mime"), &PageFormat::a5());
        assert_eq!(filename, "mr__mime-spellbook-a5.pdf");
    }

    #[test]
    fn test_unnamed_character_falls_back() {
        let filename = build_filename(&character("   "), &PageFormat::letter());
        assert_eq!(filename, "spellbook-letter.pdf");
    }

    #[test]
    fn test_unicode_name_never_fails() {
        let filename = build_filename(&character("Åshlèy the 3rd"), &PageFormat::a5());
        assert_eq!(filename, "_shl_y_the_3rd-spellbook-a5.pdf");
    }

    #[test]
    fn test_title_with_subclass() {
        assert_eq!(
            build_title(&character("Ash")),
            "Wizard (Evoker) Level 5 Spellbook"
        );
    }

    #[test]
    fn test_title_without_class() {
        let mut c = character("Ash");
        c.class_name = String::new();
        assert_eq!(build_title(&c), "Spellbook");
    }
}
