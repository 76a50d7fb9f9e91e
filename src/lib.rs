//! Commandbox - Text-command interpreter for scene-based interactive fiction
//!
//! This crate re-exports all layers of the Commandbox system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: commandbox_runtime   : Stories, session host, saves, player CLI
//! Layer 1: commandbox_parser    : Tokenizer, resolver, validator, dispatcher
//! Layer 0: commandbox_foundation: Inventories, callback handles, Error
//! ```

pub use commandbox_foundation as foundation;
pub use commandbox_parser as parser;
pub use commandbox_runtime as runtime;
