use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use spellbook_data::{max_spell_level, SpellStore};
use spellbook_layout::{
    filter_by_level, filter_by_max_level, filter_by_search, sort_by_level_then_alpha,
    spell_level_name, PageFormat, StyleConfig,
};

#[derive(Parser)]
#[command(name = "spellbook", about = "D&D spellbook PDF generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a spellbook PDF from an exported spellbook JSON
    Generate {
        /// Input spellbook JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Page format
        #[arg(long, default_value = "a5", value_enum)]
        format: FormatArg,

        /// Directory for the generated PDF (named after the character)
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Explicit output path, overrides --out-dir and the derived name
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List spells from a 5eTools-shaped data directory
    Spells {
        /// Data directory containing spells-xphb.json
        #[arg(short, long)]
        data: PathBuf,

        /// Restrict to a class spell list
        #[arg(long)]
        class: Option<String>,

        /// Restrict to a subclass spell list (requires --class)
        #[arg(long, requires = "class")]
        subclass: Option<String>,

        /// Case-insensitive name filter
        #[arg(long)]
        search: Option<String>,

        /// Exact spell level
        #[arg(long)]
        level: Option<u8>,

        /// Maximum spell level
        #[arg(long)]
        max_level: Option<u8>,

        /// Cap the list at what this character level can cast
        /// (requires --class)
        #[arg(long, requires = "class")]
        character_level: Option<u8>,
    },

    /// List classes, or the subclasses of one class
    Classes {
        /// Data directory containing subclasses-xphb.json
        #[arg(short, long)]
        data: PathBuf,

        /// Class whose subclasses to list
        #[arg(long)]
        class: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    A5,
    Letter,
}

impl From<FormatArg> for PageFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::A5 => PageFormat::a5(),
            FormatArg::Letter => PageFormat::letter(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            format,
            out_dir,
            output,
        } => {
            let book = spellbook_data::load_spellbook(&input).await?;
            let format: PageFormat = format.into();
            let style = StyleConfig::default();

            let path = match output {
                Some(path) => {
                    let bytes = spellbook_pdf::spellbook_pdf_bytes(
                        &book.spells,
                        &book.character,
                        &format,
                        &style,
                    )?;
                    tokio::fs::write(&path, bytes).await?;
                    path
                }
                None => {
                    spellbook_pdf::generate_spellbook_pdf(
                        &book.spells,
                        &book.character,
                        &format,
                        &style,
                        &out_dir,
                    )
                    .await?
                }
            };
            println!(
                "Generated {} spells → {}",
                book.spells.len(),
                path.display()
            );
        }

        Commands::Spells {
            data,
            class,
            subclass,
            search,
            level,
            max_level,
            character_level,
        } => {
            let store = SpellStore::load(&data).await?;

            let mut spells = match (&class, &subclass) {
                (Some(class), Some(subclass)) => store.get_spells_by_subclass(class, subclass),
                (Some(class), None) => store.get_spells_by_class(class),
                _ => store.list_all_spells(),
            };

            if let Some(search) = &search {
                spells = filter_by_search(spells, search);
            }
            spells = filter_by_level(spells, level);
            if let Some(max) = max_level {
                spells = filter_by_max_level(spells, max);
            }
            if let (Some(class), Some(level)) = (&class, character_level) {
                spells = filter_by_max_level(spells, max_spell_level(class, level));
            }

            sort_by_level_then_alpha(&mut spells);
            for spell in &spells {
                println!("{} ({})", spell.name, spell_level_name(spell.level));
            }
            println!("{} spells", spells.len());
        }

        Commands::Classes { data, class } => {
            let store = SpellStore::load(&data).await?;
            match class {
                Some(class) => {
                    for sc in store.subclasses_by_class(&class) {
                        println!("{} ({})", sc.name, sc.index);
                    }
                }
                None => {
                    for class in store.all_classes() {
                        println!("{} ({})", class.name, class.index);
                    }
                }
            }
        }
    }

    Ok(())
}
