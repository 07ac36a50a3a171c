//! Conversion errors

use thiserror::Error;

use crate::translate::UntranslatableError;

/// Errors that abort a conversion
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Untranslatable(#[from] UntranslatableError),

    #[error("No translatable suffix in magic item name: {0}")]
    MagicName(String),

    #[error("Invalid {property} value: {value:?}")]
    InvalidNumber {
        property: &'static str,
        value: String,
    },

    #[error("Unknown jewel radius: {0}")]
    UnknownRadius(String),

    #[error("Unknown frame type {frame_type} on item {id}")]
    UnknownFrameType { frame_type: u32, id: String },

    #[error("No equipment slot for inventory id: {0}")]
    UnknownInventorySlot(String),

    #[error("Socketed item {id} refers to missing socket {socket:?}")]
    MissingSocket { id: String, socket: Option<usize> },

    #[error("Failed to compress document: {0}")]
    Compress(#[from] std::io::Error),

    #[error("Failed to decode document: {0}")]
    Decode(String),
}
