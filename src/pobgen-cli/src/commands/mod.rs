//! Command handlers for pobgen CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod configure;
pub mod decode;
pub mod export;
pub mod tree;
