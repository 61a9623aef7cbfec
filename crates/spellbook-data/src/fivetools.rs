//! Raw 5eTools spell JSON and its normalization into [`Spell`].
//!
//! The dataset encodes most fields as compact structures or tagged
//! strings (`{@damage 8d6}`); everything here flattens those into the
//! plain display strings the layout expects.

use serde::Deserialize;
use spellbook_layout::{Spell, SpellComponents};

/// Top level of a `spells-*.json` file.
#[derive(Debug, Deserialize)]
pub struct SpellFile {
    pub spell: Vec<RawSpell>,
}

#[derive(Debug, Deserialize)]
pub struct RawSpell {
    pub name: String,
    pub level: u8,
    pub school: String,
    #[serde(default)]
    pub time: Vec<RawTime>,
    pub range: RawRange,
    pub components: RawComponents,
    #[serde(default)]
    pub duration: Vec<RawDuration>,
    #[serde(default)]
    pub meta: Option<RawMeta>,
    #[serde(default)]
    pub entries: Vec<RawEntry>,
    #[serde(rename = "entriesHigherLevel", default)]
    pub entries_higher_level: Option<Vec<RawEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct RawTime {
    pub number: u32,
    pub unit: String,
}

#[derive(Debug, Deserialize)]
pub struct RawRange {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub distance: Option<RawDistance>,
}

#[derive(Debug, Deserialize)]
pub struct RawDistance {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub amount: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct RawDuration {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub duration: Option<RawDurationAmount>,
    #[serde(default)]
    pub concentration: bool,
}

#[derive(Debug, Deserialize)]
pub struct RawDurationAmount {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub amount: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawComponents {
    #[serde(default)]
    pub v: bool,
    #[serde(default)]
    pub s: bool,
    #[serde(default)]
    pub m: Option<RawMaterial>,
}

/// The `m` field is a bool, a bare string, or an object with a `text`
/// key depending on the spell.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawMaterial {
    Flag(bool),
    Text(String),
    Detailed { text: String },
}

#[derive(Debug, Deserialize)]
pub struct RawMeta {
    #[serde(default)]
    pub ritual: bool,
}

/// Entries are either plain strings or named blocks of nested entries.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawEntry {
    Text(String),
    Block {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        entries: Vec<RawEntry>,
    },
}

fn school_name(code: &str) -> String {
    match code {
        "A" => "Abjuration",
        "C" => "Conjuration",
        "D" => "Divination",
        "E" => "Enchantment",
        "V" => "Evocation",
        "I" => "Illusion",
        "N" => "Necromancy",
        "T" => "Transmutation",
        other => return other.to_string(),
    }
    .to_string()
}

fn format_time(time: &[RawTime]) -> String {
    let Some(t) = time.first() else {
        return "Unknown".to_string();
    };
    let unit = if t.unit == "bonus" {
        "bonus action"
    } else {
        t.unit.as_str()
    };
    if t.number == 1 {
        format!("1 {unit}")
    } else {
        format!("{} {unit}s", t.number)
    }
}

fn format_range(range: &RawRange) -> String {
    match range.kind.as_str() {
        "point" => {
            let Some(distance) = &range.distance else {
                return "Unknown".to_string();
            };
            match distance.kind.as_str() {
                "self" => "Self".to_string(),
                "touch" => "Touch".to_string(),
                "sight" => "Sight".to_string(),
                "unlimited" => "Unlimited".to_string(),
                kind => format!("{} {kind}", distance.amount.unwrap_or(0)),
            }
        }
        "special" => "Special".to_string(),
        other => other.to_string(),
    }
}

fn format_duration(durations: &[RawDuration]) -> String {
    let Some(d) = durations.first() else {
        return "Unknown".to_string();
    };
    match d.kind.as_str() {
        "instant" => "Instantaneous".to_string(),
        "permanent" => "Until dispelled".to_string(),
        "special" => "Special".to_string(),
        "timed" => {
            let Some(amount) = &d.duration else {
                return d.kind.clone();
            };
            let n = amount.amount.unwrap_or(1);
            let prefix = if d.concentration {
                "Concentration, up to "
            } else {
                ""
            };
            let plural = if n > 1 { "s" } else { "" };
            format!("{prefix}{n} {}{plural}", amount.kind)
        }
        other => other.to_string(),
    }
}

fn material_description(components: &RawComponents) -> Option<String> {
    match components.m.as_ref()? {
        RawMaterial::Flag(_) => None,
        RawMaterial::Text(text) => Some(text.clone()),
        RawMaterial::Detailed { text } => Some(text.clone()),
    }
}

fn has_material(components: &RawComponents) -> bool {
    !matches!(components.m, None | Some(RawMaterial::Flag(false)))
}

/// Replace `{@tag payload|chip}` references with the payload's first
/// pipe-separated segment. Unterminated braces pass through unchanged.
pub fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("{@") {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let Some(end) = tail.find('}') else {
            out.push_str(tail);
            return out;
        };
        let inner = &tail[2..end];
        // Skip the tag word; the payload follows the first space.
        let payload = match inner.find(' ') {
            Some(pos) => &inner[pos + 1..],
            None => "",
        };
        let display = payload.split('|').next().unwrap_or("");
        out.push_str(display);
        rest = &tail[end + 1..];
    }
    out.push_str(rest);
    out
}

/// Flatten nested entries to paragraphs separated by blank lines.
/// Named blocks keep their name as a leading bold label.
pub fn flatten_entries(entries: &[RawEntry]) -> String {
    let mut paragraphs = Vec::new();
    for entry in entries {
        match entry {
            RawEntry::Text(text) => paragraphs.push(strip_tags(text)),
            RawEntry::Block { name, entries } => {
                let body = flatten_entries(entries);
                if body.is_empty() {
                    continue;
                }
                match name {
                    Some(name) => paragraphs.push(format!("**{name}.** {body}")),
                    None => paragraphs.push(body),
                }
            }
        }
    }
    paragraphs.retain(|p| !p.is_empty());
    paragraphs.join("\n\n")
}

/// Stable identifier from a spell name: lowercase, runs of anything
/// outside a-z0-9 collapsed to a single hyphen.
pub fn to_spell_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for c in name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !id.is_empty() {
                id.push('-');
            }
            pending_hyphen = false;
            id.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    id
}

/// Normalize one raw dataset record into the layout model.
pub fn transform_spell(raw: &RawSpell) -> Spell {
    let concentration = raw.duration.iter().any(|d| d.concentration);
    let material = has_material(&raw.components);
    Spell {
        id: to_spell_id(&raw.name),
        name: raw.name.clone(),
        level: raw.level,
        school: school_name(&raw.school),
        casting_time: format_time(&raw.time),
        range: format_range(&raw.range),
        duration: format_duration(&raw.duration),
        components: SpellComponents {
            verbal: raw.components.v,
            somatic: raw.components.s,
            material,
            material_description: material_description(&raw.components),
        },
        description: flatten_entries(&raw.entries),
        higher_levels: raw
            .entries_higher_level
            .as_deref()
            .map(flatten_entries)
            .filter(|text| !text.is_empty()),
        ritual: raw.meta.as_ref().is_some_and(|m| m.ritual),
        concentration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_from_json(json: &str) -> RawSpell {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("deal {@damage 8d6} fire damage"), "deal 8d6 fire damage");
        assert_eq!(
            strip_tags("make a {@dice d20|Dexterity save}"),
            "make a d20"
        );
        assert_eq!(strip_tags("no tags here"), "no tags here");
        assert_eq!(strip_tags("broken {@damage 8d6"), "broken {@damage 8d6");
        assert_eq!(
            strip_tags("{@spell fireball|XPHB} and {@condition blinded}"),
            "fireball and blinded"
        );
    }

    #[test]
    fn test_to_spell_id() {
        assert_eq!(to_spell_id("Fireball"), "fireball");
        assert_eq!(to_spell_id("Melf's Acid Arrow"), "melf-s-acid-arrow");
        assert_eq!(to_spell_id("  Wish  "), "wish");
        assert_eq!(to_spell_id("Bigby's Hand (2024)"), "bigby-s-hand-2024");
    }

    #[test]
    fn test_flatten_entries_with_named_block() {
        let entries = vec![
            RawEntry::Text("First paragraph.".to_string()),
            RawEntry::Block {
                name: Some("Combat Use".to_string()),
                entries: vec![RawEntry::Text("Nested {@damage 1d4} text.".to_string())],
            },
        ];
        assert_eq!(
            flatten_entries(&entries),
            "First paragraph.\n\n**Combat Use.** Nested 1d4 text."
        );
    }

    #[test]
    fn test_transform_full_record() {
        let raw = raw_from_json(
            r#"{
                "name": "Fireball",
                "level": 3,
                "school": "V",
                "time": [{"number": 1, "unit": "action"}],
                "range": {"type": "point", "distance": {"type": "feet", "amount": 150}},
                "components": {"v": true, "s": true, "m": "a ball of bat guano and sulfur"},
                "duration": [{"type": "instant"}],
                "entries": ["A bright streak flashes."]
            }"#,
        );
        let spell = transform_spell(&raw);
        assert_eq!(spell.id, "fireball");
        assert_eq!(spell.school, "Evocation");
        assert_eq!(spell.casting_time, "1 action");
        assert_eq!(spell.range, "150 feet");
        assert_eq!(spell.duration, "Instantaneous");
        assert!(spell.components.material);
        assert_eq!(
            spell.components.material_description.as_deref(),
            Some("a ball of bat guano and sulfur")
        );
        assert!(!spell.ritual);
        assert!(!spell.concentration);
    }

    #[test]
    fn test_transform_concentration_and_timed_duration() {
        let raw = raw_from_json(
            r#"{
                "name": "Haste",
                "level": 3,
                "school": "T",
                "time": [{"number": 1, "unit": "action"}],
                "range": {"type": "point", "distance": {"type": "feet", "amount": 30}},
                "components": {"v": true},
                "duration": [{"type": "timed", "duration": {"type": "minute", "amount": 1}, "concentration": true}],
                "entries": ["Choose a willing creature."]
            }"#,
        );
        let spell = transform_spell(&raw);
        assert_eq!(spell.duration, "Concentration, up to 1 minute");
        assert!(spell.concentration);
    }

    #[test]
    fn test_transform_bonus_action_and_self_range() {
        let raw = raw_from_json(
            r#"{
                "name": "Misty Step",
                "level": 2,
                "school": "C",
                "time": [{"number": 1, "unit": "bonus"}],
                "range": {"type": "point", "distance": {"type": "self"}},
                "components": {"v": true},
                "duration": [{"type": "instant"}],
                "entries": ["Teleport up to 30 feet."]
            }"#,
        );
        let spell = transform_spell(&raw);
        assert_eq!(spell.casting_time, "1 bonus action");
        assert_eq!(spell.range, "Self");
    }

    #[test]
    fn test_transform_ritual_and_detailed_material() {
        let raw = raw_from_json(
            r#"{
                "name": "Identify",
                "level": 1,
                "school": "D",
                "time": [{"number": 1, "unit": "minute"}],
                "range": {"type": "point", "distance": {"type": "touch"}},
                "components": {"v": true, "s": true, "m": {"text": "a pearl worth 100+ GP", "cost": 10000}},
                "duration": [{"type": "instant"}],
                "meta": {"ritual": true},
                "entries": ["You learn the item's properties."]
            }"#,
        );
        let spell = transform_spell(&raw);
        assert!(spell.ritual);
        assert_eq!(spell.range, "Touch");
        assert_eq!(
            spell.components.material_description.as_deref(),
            Some("a pearl worth 100+ GP")
        );
    }

    #[test]
    fn test_transform_permanent_and_plural_duration() {
        let raw = raw_from_json(
            r#"{
                "name": "Test",
                "level": 1,
                "school": "N",
                "time": [{"number": 10, "unit": "minute"}],
                "range": {"type": "special"},
                "components": {},
                "duration": [{"type": "timed", "duration": {"type": "hour", "amount": 8}}],
                "entries": []
            }"#,
        );
        let spell = transform_spell(&raw);
        assert_eq!(spell.casting_time, "10 minutes");
        assert_eq!(spell.range, "Special");
        assert_eq!(spell.duration, "8 hours");
        assert!(!spell.components.material);
    }

    #[test]
    fn test_material_flag_without_text() {
        let raw = raw_from_json(
            r#"{
                "name": "Test",
                "level": 0,
                "school": "A",
                "time": [{"number": 1, "unit": "action"}],
                "range": {"type": "point", "distance": {"type": "unlimited"}},
                "components": {"m": true},
                "duration": [{"type": "permanent"}],
                "entries": []
            }"#,
        );
        let spell = transform_spell(&raw);
        assert!(spell.components.material);
        assert!(spell.components.material_description.is_none());
        assert_eq!(spell.duration, "Until dispelled");
        assert_eq!(spell.range, "Unlimited");
    }
}
