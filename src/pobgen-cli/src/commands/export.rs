//! Export command handler

use anyhow::{Context, Result};
use pobgen::{CharacterRecord, Dictionary, ExportOptions, Passthrough, TreeRecord, Translator};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Read and parse the character and tree responses
pub fn read_records(items: &Path, tree: &Path) -> Result<(CharacterRecord, TreeRecord)> {
    let items_json = fs::read_to_string(items)
        .with_context(|| format!("Failed to read {}", items.display()))?;
    let character = CharacterRecord::from_json(&items_json)
        .with_context(|| format!("Failed to parse character items from {}", items.display()))?;

    let tree_json =
        fs::read_to_string(tree).with_context(|| format!("Failed to read {}", tree.display()))?;
    let tree = TreeRecord::from_json(&tree_json)
        .with_context(|| format!("Failed to parse passive tree from {}", tree.display()))?;

    Ok((character, tree))
}

/// Load the translator; without a dictionary names pass through unchanged
pub fn load_translator(dictionary: Option<&Path>) -> Result<Box<dyn Translator>> {
    let Some(path) = dictionary else {
        tracing::debug!("no dictionary configured, passing names through");
        return Ok(Box::new(Passthrough));
    };

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dictionary {}", path.display()))?;
    let dictionary = Dictionary::from_json(&json)
        .with_context(|| format!("Failed to parse dictionary {}", path.display()))?;
    tracing::debug!(entries = dictionary.len(), path = %path.display(), "loaded dictionary");

    Ok(Box::new(dictionary))
}

/// Run the whole conversion and return the import code
pub fn export_code(
    items: &Path,
    tree: &Path,
    dictionary: Option<&Path>,
    options: &ExportOptions,
) -> Result<String> {
    let (character, tree) = read_records(items, tree)?;
    let translator = load_translator(dictionary)?;

    pobgen::export(&character, &tree, translator.as_ref(), options)
        .context("Failed to convert character")
}

/// Handle the export command
pub fn handle(
    items: &Path,
    tree: &Path,
    dictionary: Option<PathBuf>,
    output: Option<&Path>,
) -> Result<()> {
    let config = Config::load()?;
    let dictionary = dictionary.or_else(|| config.dictionary.clone());
    let options = config.export_options();

    let code = export_code(items, tree, dictionary.as_deref(), &options)?;

    match output {
        Some(path) => {
            fs::write(path, &code)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote import code to {}", path.display());
        }
        None => println!("{}", code),
    }

    Ok(())
}
