use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid page format: {0}")]
    Format(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Spell component requirements (verbal, somatic, material).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SpellComponents {
    #[cfg_attr(feature = "serde", serde(default))]
    pub verbal: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub somatic: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub material: bool,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub material_description: Option<String>,
}

/// A fully detailed spell record. Immutable during a render job.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Spell {
    pub id: String,
    pub name: String,
    /// 0 = cantrip, 1..=9 = spell level.
    pub level: u8,
    pub school: String,
    pub casting_time: String,
    pub range: String,
    pub duration: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub components: SpellComponents,
    pub description: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub higher_levels: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ritual: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub concentration: bool,
}

impl Spell {
    /// Components abbreviation for the metadata row, e.g. "V S M".
    pub fn components_abbrev(&self) -> String {
        let mut parts = Vec::new();
        if self.components.verbal {
            parts.push("V");
        }
        if self.components.somatic {
            parts.push("S");
        }
        if self.components.material {
            parts.push("M");
        }
        parts.join(" ")
    }

    /// The material description, only when the spell actually has a
    /// material component.
    pub fn material_description(&self) -> Option<&str> {
        if !self.components.material {
            return None;
        }
        self.components.material_description.as_deref()
    }
}

/// Lightweight spell shape used for listings; no body text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SpellListItem {
    pub id: String,
    pub name: String,
    pub level: u8,
}

impl From<&Spell> for SpellListItem {
    fn from(spell: &Spell) -> Self {
        Self {
            id: spell.id.clone(),
            name: spell.name.clone(),
            level: spell.level,
        }
    }
}

/// The character a spellbook belongs to. The layout engine only reads
/// this for titles and filenames.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Character {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub class_name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub subclass: String,
    /// 1..=20
    pub level: u8,
}

/// A character plus their selected spells; the persisted export shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Spellbook {
    pub character: Character,
    pub spells: Vec<Spell>,
}

/// Display name for a spell level ("Cantrip", "3rd Level", ...).
pub fn spell_level_name(level: u8) -> String {
    match level {
        0 => "Cantrip".to_string(),
        1 => "1st Level".to_string(),
        2 => "2nd Level".to_string(),
        3 => "3rd Level".to_string(),
        n => format!("{n}th Level"),
    }
}

/// Common view over [`Spell`] and [`SpellListItem`] so sorting and
/// filtering work on either shape.
pub trait SpellRef {
    fn name(&self) -> &str;
    fn level(&self) -> u8;
}

impl SpellRef for Spell {
    fn name(&self) -> &str {
        &self.name
    }
    fn level(&self) -> u8 {
        self.level
    }
}

impl SpellRef for SpellListItem {
    fn name(&self) -> &str {
        &self.name
    }
    fn level(&self) -> u8 {
        self.level
    }
}

impl<T: SpellRef> SpellRef for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
    fn level(&self) -> u8 {
        (**self).level()
    }
}
