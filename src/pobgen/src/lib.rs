//! # pobgen
//!
//! Path of Exile character to Path of Building import code converter.
//!
//! This library provides functionality to:
//! - Render equipped items in the Path of Building item text format,
//!   translating localized names and modifiers on the way
//! - Resolve socketed gems into skill groups and abyss jewels into items
//! - Pack the allocated passive tree into a shareable tree URL
//! - Compose, compress, and encode the complete build document
//!
//! ## Example
//!
//! ```no_run
//! use std::fs;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let character = pobgen::CharacterRecord::from_json(&fs::read_to_string("items.json")?)?;
//! let tree = pobgen::TreeRecord::from_json(&fs::read_to_string("tree.json")?)?;
//! let dictionary = pobgen::Dictionary::from_json(&fs::read_to_string("dictionary.json")?)?;
//!
//! let code = pobgen::export(&character, &tree, &dictionary, &pobgen::ExportOptions::default())?;
//! println!("{}", code);
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod error;
pub mod inventory;
pub mod model;
pub mod reference;
pub mod render;
pub mod sockets;
pub mod translate;
pub mod tree;
mod xml;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used items
#[doc(inline)]
pub use document::{
    compose, decode_document, document_xml, encode_document, export, main_socket_group,
    ExportOptions,
};
#[doc(inline)]
pub use error::ConvertError;
#[doc(inline)]
pub use inventory::{assemble, Inventory};
#[doc(inline)]
pub use model::{
    Category, Character, CharacterRecord, Gem, Item, RenderedItem, SkillGroup, Slot, TreeRecord,
    TreeSocket,
};
#[doc(inline)]
pub use reference::Rarity;
#[doc(inline)]
pub use render::{item_text, render_item};
#[doc(inline)]
pub use sockets::{resolve_sockets, ResolvedSockets};
#[doc(inline)]
pub use translate::{Dictionary, Passthrough, Translator, UntranslatableError};
#[doc(inline)]
pub use tree::{decode_tree, encode_tree, tree_url, TreeError, TreeSpec};
