//! Name and modifier translation
//!
//! The converter never owns translation data. It consumes a [`Translator`],
//! which maps localized text to the canonical English the import grammar
//! expects. [`Dictionary`] is a table-backed implementation that can be
//! loaded from JSON; [`Passthrough`] is for data already in English.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

/// Numbers inside modifier lines, replaced by `#` in templates
static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("number pattern is valid"));

/// Placeholder for a number in a modifier template
const PLACEHOLDER: char = '#';

/// No mapping exists for the given text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No translation for {0:?}")]
pub struct UntranslatableError(pub String);

/// Localized text to canonical text
pub trait Translator {
    /// Translate an item, base type, or gem name
    fn translate(&self, text: &str) -> Result<String, UntranslatableError>;

    /// Translate a modifier line
    fn translate_mod(&self, text: &str) -> Result<String, UntranslatableError> {
        self.translate(text)
    }
}

/// Identity translator
#[derive(Debug, Default, Clone, Copy)]
pub struct Passthrough;

impl Translator for Passthrough {
    fn translate(&self, text: &str) -> Result<String, UntranslatableError> {
        Ok(text.to_string())
    }
}

/// Table-backed translator.
///
/// Modifier lines are matched exactly first, then as templates with every
/// number replaced by `#`; the numbers are put back into the canonical
/// template in the order they appeared.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Dictionary {
    #[serde(default)]
    names: HashMap<String, String>,
    #[serde(default)]
    mods: HashMap<String, String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `{"names": {...}, "mods": {...}}`
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn insert_name(&mut self, localized: impl Into<String>, canonical: impl Into<String>) {
        self.names.insert(localized.into(), canonical.into());
    }

    /// Add a modifier mapping; either side may use `#` for numbers
    pub fn insert_mod(&mut self, localized: impl Into<String>, canonical: impl Into<String>) {
        self.mods.insert(localized.into(), canonical.into());
    }

    pub fn len(&self) -> usize {
        self.names.len() + self.mods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn translate_template(&self, text: &str) -> Option<String> {
        let numbers: Vec<&str> = NUMBER.find_iter(text).map(|m| m.as_str()).collect();
        if numbers.is_empty() {
            return None;
        }

        let template = NUMBER.replace_all(text, PLACEHOLDER.to_string().as_str());
        let canonical = self.mods.get(template.as_ref())?;
        if canonical.matches(PLACEHOLDER).count() != numbers.len() {
            return None;
        }

        let mut numbers = numbers.into_iter();
        let mut out = String::with_capacity(canonical.len() + 8);
        for ch in canonical.chars() {
            match ch {
                PLACEHOLDER => out.push_str(numbers.next()?),
                other => out.push(other),
            }
        }
        Some(out)
    }
}

impl Translator for Dictionary {
    fn translate(&self, text: &str) -> Result<String, UntranslatableError> {
        self.names
            .get(text)
            .cloned()
            .ok_or_else(|| UntranslatableError(text.to_string()))
    }

    fn translate_mod(&self, text: &str) -> Result<String, UntranslatableError> {
        if let Some(canonical) = self.mods.get(text) {
            return Ok(canonical.clone());
        }
        self.translate_template(text)
            .ok_or_else(|| UntranslatableError(text.to_string()))
    }
}
