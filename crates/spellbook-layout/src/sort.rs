//! Spell ordering helpers

use std::collections::BTreeMap;

use crate::types::SpellRef;

/// Sort spells alphabetically by name.
pub fn sort_alphabetically<T: SpellRef>(spells: &mut [T]) {
    spells.sort_by(|a, b| a.name().cmp(b.name()));
}

/// Sort spells by ascending level, then alphabetically within a level.
pub fn sort_by_level_then_alpha<T: SpellRef>(spells: &mut [T]) {
    spells.sort_by(|a, b| a.level().cmp(&b.level()).then_with(|| a.name().cmp(b.name())));
}

/// Group spells by level. The map iterates levels in ascending order.
pub fn group_spells_by_level<T: SpellRef>(spells: &[T]) -> BTreeMap<u8, Vec<&T>> {
    let mut groups: BTreeMap<u8, Vec<&T>> = BTreeMap::new();
    for spell in spells {
        groups.entry(spell.level()).or_default().push(spell);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SpellListItem;

    fn item(name: &str, level: u8) -> SpellListItem {
        SpellListItem {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            level,
        }
    }

    #[test]
    fn test_level_then_alpha_order() {
        let mut spells = vec![
            item("Wish", 9),
            item("Fireball", 3),
            item("Fire Bolt", 0),
            item("Acid Splash", 0),
            item("Cure Wounds", 1),
            item("Aid", 2),
        ];
        sort_by_level_then_alpha(&mut spells);
        let names: Vec<&str> = spells.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Acid Splash", "Fire Bolt", "Cure Wounds", "Aid", "Fireball", "Wish"]
        );
    }

    #[test]
    fn test_grouping_iterates_levels_ascending() {
        let spells = vec![item("Wish", 9), item("Fire Bolt", 0), item("Aid", 2)];
        let groups = group_spells_by_level(&spells);
        let levels: Vec<u8> = groups.keys().copied().collect();
        assert_eq!(levels, vec![0, 2, 9]);
        assert_eq!(groups[&0].len(), 1);
    }
}
