//! Maximum castable spell level per class and character level.

/// Spell slot progression family a class belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasterType {
    /// New spell levels every other character level, capped at 9.
    Full,
    /// Paladin and ranger progression, capped at 5.
    Half,
    /// Subclass casters (Eldritch Knight, Arcane Trickster), capped at 4.
    Third,
    /// Warlock pact magic, capped at 5.
    Pact,
    /// No spellcasting.
    None,
}

impl CasterType {
    /// Classify a class by key. Keys may carry a dataset prefix such as
    /// `srd-2024_wizard`; everything up to the first underscore is
    /// ignored. Unrecognized classes are treated as full casters so a
    /// homebrew class never silently loses spell levels.
    pub fn for_class(class_key: &str) -> Self {
        let normalized = class_key.to_lowercase();
        let name = match normalized.find('_') {
            Some(pos) => &normalized[pos + 1..],
            None => normalized.as_str(),
        };
        match name {
            "bard" | "cleric" | "druid" | "sorcerer" | "wizard" => CasterType::Full,
            "paladin" | "ranger" => CasterType::Half,
            "fighter" | "rogue" => CasterType::Third,
            "warlock" => CasterType::Pact,
            "barbarian" | "monk" => CasterType::None,
            _ => CasterType::Full,
        }
    }
}

/// Highest spell level a character of the given class and level can
/// cast. Character levels outside 1..=20 are clamped. Returns 0 for
/// non-casters and for subclass casters below their entry level.
pub fn max_spell_level(class_key: &str, character_level: u8) -> u8 {
    let level = character_level.clamp(1, 20);
    match CasterType::for_class(class_key) {
        CasterType::Full => (level.div_ceil(2)).min(9),
        CasterType::Half => {
            if level == 1 {
                0
            } else {
                level.div_ceil(4)
            }
        }
        CasterType::Third => {
            if level <= 2 {
                0
            } else {
                level.div_ceil(6)
            }
        }
        CasterType::Pact => (level.div_ceil(2)).min(5),
        CasterType::None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_caster_progression() {
        assert_eq!(max_spell_level("wizard", 1), 1);
        assert_eq!(max_spell_level("wizard", 2), 1);
        assert_eq!(max_spell_level("wizard", 3), 2);
        assert_eq!(max_spell_level("wizard", 5), 3);
        assert_eq!(max_spell_level("wizard", 17), 9);
        assert_eq!(max_spell_level("wizard", 20), 9);
        assert_eq!(max_spell_level("cleric", 9), 5);
        assert_eq!(max_spell_level("druid", 11), 6);
    }

    #[test]
    fn test_half_caster_progression() {
        assert_eq!(max_spell_level("paladin", 1), 0);
        assert_eq!(max_spell_level("paladin", 2), 1);
        assert_eq!(max_spell_level("ranger", 5), 2);
        assert_eq!(max_spell_level("paladin", 9), 3);
        assert_eq!(max_spell_level("ranger", 17), 5);
        assert_eq!(max_spell_level("paladin", 20), 5);
    }

    #[test]
    fn test_third_caster_progression() {
        assert_eq!(max_spell_level("fighter", 1), 0);
        assert_eq!(max_spell_level("fighter", 2), 0);
        assert_eq!(max_spell_level("fighter", 3), 1);
        assert_eq!(max_spell_level("rogue", 7), 2);
        assert_eq!(max_spell_level("fighter", 13), 3);
        assert_eq!(max_spell_level("rogue", 19), 4);
    }

    #[test]
    fn test_pact_caster_progression() {
        assert_eq!(max_spell_level("warlock", 1), 1);
        assert_eq!(max_spell_level("warlock", 3), 2);
        assert_eq!(max_spell_level("warlock", 9), 5);
        assert_eq!(max_spell_level("warlock", 20), 5);
    }

    #[test]
    fn test_non_casters() {
        assert_eq!(max_spell_level("barbarian", 20), 0);
        assert_eq!(max_spell_level("monk", 20), 0);
    }

    #[test]
    fn test_prefixed_class_keys() {
        assert_eq!(max_spell_level("srd-2024_wizard", 5), 3);
        assert_eq!(max_spell_level("srd-2024_paladin", 1), 0);
        assert_eq!(CasterType::for_class("SRD-2024_Warlock"), CasterType::Pact);
    }

    #[test]
    fn test_level_clamping() {
        assert_eq!(max_spell_level("wizard", 0), 1);
        assert_eq!(max_spell_level("wizard", 255), 9);
    }

    #[test]
    fn test_unknown_class_defaults_to_full() {
        assert_eq!(max_spell_level("artificer", 5), 3);
        assert_eq!(CasterType::for_class("bloodhunter"), CasterType::Full);
    }
}
