//! PDF output for rendered spellbooks.
//!
//! Runs the layout engine with Times metrics and replays the resulting
//! draw instructions through printpdf's built-in fonts.

pub mod metrics;
pub mod render;

pub use metrics::TimesMetrics;
pub use render::document_to_pdf_bytes;

use std::path::{Path, PathBuf};

use spellbook_layout::{
    build_filename, Character, Document, PageFormat, Spell, SpellbookLayout, StyleConfig,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("layout error: {0}")]
    Layout(#[from] spellbook_layout::LayoutError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, PdfError>;

/// Run the layout engine over the given spells.
pub fn render_spellbook(
    spells: &[Spell],
    character: &Character,
    format: &PageFormat,
    style: &StyleConfig,
) -> Result<Document> {
    let layout = SpellbookLayout::new(format, style, &TimesMetrics)?;
    Ok(layout.render(spells, character))
}

/// Layout plus PDF serialization in one step.
pub fn spellbook_pdf_bytes(
    spells: &[Spell],
    character: &Character,
    format: &PageFormat,
    style: &StyleConfig,
) -> Result<Vec<u8>> {
    let document = render_spellbook(spells, character, format, style)?;
    Ok(document_to_pdf_bytes(&document, format))
}

/// Generate a spellbook PDF into `out_dir`, named after the character
/// and page format. Returns the written path.
pub async fn generate_spellbook_pdf(
    spells: &[Spell],
    character: &Character,
    format: &PageFormat,
    style: &StyleConfig,
    out_dir: impl AsRef<Path>,
) -> Result<PathBuf> {
    let spells = spells.to_vec();
    let character = character.clone();
    let format = format.clone();
    let style = style.clone();
    let path = out_dir.as_ref().join(build_filename(&character, &format));

    // Layout and serialization are CPU-bound, spawn blocking
    let bytes = tokio::task::spawn_blocking(move || {
        spellbook_pdf_bytes(&spells, &character, &format, &style)
    })
    .await??;

    log::info!("writing {} ({} bytes)", path.display(), bytes.len());
    tokio::fs::write(&path, bytes).await?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spellbook_layout::SpellComponents;

    fn character() -> Character {
        Character {
            id: "c1".to_string(),
            name: "Ezri834".to_string(),
            class_name: "Wizard".to_string(),
            subclass: String::new(),
            level: 5,
        }
    }

    fn fire_bolt() -> Spell {
        Spell {
            id: "fire-bolt".to_string(),
            name: "Fire Bolt".to_string(),
            level: 0,
            school: "Evocation".to_string(),
            casting_time: "1 action".to_string(),
            range: "120 feet".to_string(),
            duration: "Instantaneous".to_string(),
            components: SpellComponents {
                verbal: true,
                somatic: true,
                material: false,
                material_description: None,
            },
            description: "You hurl a mote of fire at a creature or object within range."
                .to_string(),
            higher_levels: None,
            ritual: false,
            concentration: false,
        }
    }

    #[test]
    fn test_pdf_bytes_have_header() {
        let bytes = spellbook_pdf_bytes(
            &[fire_bolt()],
            &character(),
            &PageFormat::a5(),
            &StyleConfig::default(),
        )
        .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_empty_spell_list_still_serializes() {
        let bytes = spellbook_pdf_bytes(
            &[],
            &character(),
            &PageFormat::letter(),
            &StyleConfig::default(),
        )
        .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_generate_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = generate_spellbook_pdf(
            &[fire_bolt()],
            &character(),
            &PageFormat::a5(),
            &StyleConfig::default(),
            dir.path(),
        )
        .await
        .unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "ezri_834-spellbook-a5.pdf"
        );
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
