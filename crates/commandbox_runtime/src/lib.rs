//! Story loading, session host, persistence, and the interactive player.
//!
//! This crate provides:
//! - [`Story`] - Scenes, subjects and callbacks read from TOML
//! - [`Session`] - A host that owns the interpreter, the current scene,
//!   inventories and flags
//! - Session save and load via `MessagePack`
//! - [`Player`] - The interactive read-interpret-print loop

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod repl;
pub mod serialize;
pub mod session;
pub mod story;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::{ERROR_MARKER, Player, Reply};
pub use serialize::{from_bytes, load_from_file, save_to_file, to_bytes};
pub use session::{SaveState, Session};
pub use story::{CallbackDecl, CallbackEffect, SceneDecl, Story, SubjectDecl};
