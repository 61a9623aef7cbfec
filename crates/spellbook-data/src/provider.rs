//! Spell dataset store with class and subclass lookups.
//!
//! Loads three files from a data directory:
//!
//! * `spells-xphb.json` - the spell records (required)
//! * `spell-class-lookup.json` - spell name to class/subclass index
//! * `subclasses-xphb.json` - subclass names per class
//!
//! The lookup and subclass files are optional; without them class
//! queries return empty lists.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use spellbook_layout::{Spell, SpellListItem};

use crate::fivetools::{transform_spell, SpellFile};
use crate::{DataError, Result};

pub const SPELLS_FILE: &str = "spells-xphb.json";
pub const CLASS_LOOKUP_FILE: &str = "spell-class-lookup.json";
pub const SUBCLASSES_FILE: &str = "subclasses-xphb.json";

/// Source key of the dataset edition the lookups are scoped to.
const SOURCE: &str = "XPHB";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassInfo {
    pub index: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubclassInfo {
    pub index: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubclassEntry {
    name: String,
    short_name: String,
}

/// In-memory spell dataset. Build once with [`SpellStore::load`] (or
/// [`SpellStore::from_json`] in tests), query synchronously after.
#[derive(Debug)]
pub struct SpellStore {
    spells: Vec<Spell>,
    by_id: HashMap<String, usize>,
    /// Lowercased class name to lowercased spell names.
    class_spells: HashMap<String, HashSet<String>>,
    /// `class:short_name` (both lowercased) to lowercased spell names.
    subclass_spells: HashMap<String, HashSet<String>>,
    /// Lowercased class name to its subclass entries.
    subclasses: HashMap<String, Vec<SubclassEntry>>,
}

impl SpellStore {
    /// Read the dataset files from `dir` on a blocking task.
    pub async fn load(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        tokio::task::spawn_blocking(move || Self::load_sync(&dir)).await?
    }

    pub fn load_sync(dir: &Path) -> Result<Self> {
        let spells = std::fs::read_to_string(dir.join(SPELLS_FILE))?;
        let lookup = read_optional(&dir.join(CLASS_LOOKUP_FILE))?;
        let subclasses = read_optional(&dir.join(SUBCLASSES_FILE))?;
        Self::from_json(&spells, lookup.as_deref(), subclasses.as_deref())
    }

    pub fn from_json(
        spells_json: &str,
        lookup_json: Option<&str>,
        subclasses_json: Option<&str>,
    ) -> Result<Self> {
        let file: SpellFile = serde_json::from_str(spells_json)?;
        let spells: Vec<Spell> = file.spell.iter().map(transform_spell).collect();
        let by_id = spells
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.clone(), i))
            .collect();

        let (class_spells, subclass_spells) = match lookup_json {
            Some(json) => build_lookup_maps(&serde_json::from_str(json)?),
            None => Default::default(),
        };
        let subclasses = match subclasses_json {
            Some(json) => serde_json::from_str(json)?,
            None => HashMap::new(),
        };

        log::info!(
            "loaded {} spells, {} classes with spell lists",
            spells.len(),
            class_spells.len()
        );
        Ok(Self {
            spells,
            by_id,
            class_spells,
            subclass_spells,
            subclasses,
        })
    }

    pub fn list_all_spells(&self) -> Vec<SpellListItem> {
        self.spells.iter().map(SpellListItem::from).collect()
    }

    pub fn get_spell_details(&self, spell_id: &str) -> Result<&Spell> {
        self.by_id
            .get(spell_id)
            .map(|&i| &self.spells[i])
            .ok_or_else(|| DataError::SpellNotFound(spell_id.to_string()))
    }

    /// Resolve many ids at once; the first unknown id fails the whole
    /// call.
    pub fn get_multiple_spell_details(&self, spell_ids: &[String]) -> Result<Vec<Spell>> {
        spell_ids
            .iter()
            .map(|id| self.get_spell_details(id).cloned())
            .collect()
    }

    pub fn get_spells_by_class(&self, class_key: &str) -> Vec<SpellListItem> {
        let class = normalize_class_key(class_key);
        self.spells_matching(self.class_spells.get(&class))
    }

    pub fn get_spells_by_subclass(&self, class_key: &str, subclass_key: &str) -> Vec<SpellListItem> {
        let class = normalize_class_key(class_key);
        let subclass = normalize_subclass_key(subclass_key);

        // The lookup is keyed by short name; the caller may pass either
        // the short name or a slug of the full name.
        let Some(entry) = self.subclasses.get(&class).and_then(|entries| {
            entries.iter().find(|sc| {
                sc.short_name.to_lowercase() == subclass
                    || sc.name.to_lowercase().contains(&subclass)
            })
        }) else {
            return Vec::new();
        };

        let key = format!("{class}:{}", entry.short_name.to_lowercase());
        self.spells_matching(self.subclass_spells.get(&key))
    }

    pub fn all_classes(&self) -> Vec<ClassInfo> {
        [
            "Bard", "Cleric", "Druid", "Paladin", "Ranger", "Sorcerer", "Warlock", "Wizard",
        ]
        .iter()
        .map(|name| ClassInfo {
            index: name.to_lowercase(),
            name: (*name).to_string(),
        })
        .collect()
    }

    pub fn subclasses_by_class(&self, class_key: &str) -> Vec<SubclassInfo> {
        let class = normalize_class_key(class_key);
        self.subclasses
            .get(&class)
            .map(|entries| {
                entries
                    .iter()
                    .map(|sc| SubclassInfo {
                        index: sc.short_name.to_lowercase().replace(' ', "-"),
                        name: sc.name.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn spells_matching(&self, names: Option<&HashSet<String>>) -> Vec<SpellListItem> {
        let Some(names) = names else {
            return Vec::new();
        };
        self.spells
            .iter()
            .filter(|spell| names.contains(&spell.name.to_lowercase()))
            .map(SpellListItem::from)
            .collect()
    }
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Strip a dataset prefix like `srd-2024_` from a class key.
fn normalize_class_key(class_key: &str) -> String {
    let lower = class_key.to_lowercase();
    match lower.find('_') {
        Some(pos) => lower[pos + 1..].to_string(),
        None => lower,
    }
}

/// Subclass keys arrive as slugs like `wizard-war-mage`; strip the
/// class prefix and turn the remaining hyphens back into spaces.
fn normalize_subclass_key(subclass_key: &str) -> String {
    let lower = subclass_key.to_lowercase();
    let rest = match lower.find('-') {
        Some(pos) => &lower[pos + 1..],
        None => lower.as_str(),
    };
    rest.replace('-', " ")
}

type LookupMaps = (
    HashMap<String, HashSet<String>>,
    HashMap<String, HashSet<String>>,
);

/// Walk the nested lookup document. The shape is
/// `{"xphb": {spell_name: {"class": {"XPHB": {class: ..}},
/// "subclass": {"XPHB": {class: {"XPHB": {short: ..}}}}}}}`.
fn build_lookup_maps(lookup: &serde_json::Value) -> LookupMaps {
    let mut class_spells: HashMap<String, HashSet<String>> = HashMap::new();
    let mut subclass_spells: HashMap<String, HashSet<String>> = HashMap::new();

    let Some(entries) = lookup.get("xphb").and_then(|v| v.as_object()) else {
        return (class_spells, subclass_spells);
    };

    for (spell_name, entry) in entries {
        let spell_name = spell_name.to_lowercase();

        if let Some(classes) = entry
            .get("class")
            .and_then(|v| v.get(SOURCE))
            .and_then(|v| v.as_object())
        {
            for class_name in classes.keys() {
                class_spells
                    .entry(class_name.to_lowercase())
                    .or_default()
                    .insert(spell_name.clone());
            }
        }

        if let Some(by_class) = entry
            .get("subclass")
            .and_then(|v| v.get(SOURCE))
            .and_then(|v| v.as_object())
        {
            for (class_name, sources) in by_class {
                let Some(shorts) = sources.get(SOURCE).and_then(|v| v.as_object()) else {
                    continue;
                };
                for short_name in shorts.keys() {
                    let key = format!(
                        "{}:{}",
                        class_name.to_lowercase(),
                        short_name.to_lowercase()
                    );
                    subclass_spells
                        .entry(key)
                        .or_default()
                        .insert(spell_name.clone());
                }
            }
        }
    }

    (class_spells, subclass_spells)
}
