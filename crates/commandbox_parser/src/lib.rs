//! Command interpretation core for scene-based interactive fiction.
//!
//! This crate turns a line the player typed, like "take the gold key" or
//! "use key on door", into exactly one effect on the game.
//!
//! # Architecture
//!
//! ```text
//! "use the key on the door"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → verb "use", remainder "the key on the door"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ NORMALIZER      │  → Action::Use
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SUBJECT         │  → [key, door]   (registry order, deduplicated)
//! │ RESOLVER        │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VALIDATOR       │  → Route::Use, or a Rejection
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ DISPATCHER      │  → Outcome { message, scene, callback, inventory change }
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`action`] - Canonical actions and the verb synonym table
//! - [`tokenizer`] - Split a raw line into verb and remainder
//! - [`subject`] - Subjects and their capability records
//! - [`registry`] - Scene-scoped subject registry
//! - [`resolver`] - Subject, custom-action, and use-partner resolution
//! - [`command`] - A resolved command
//! - [`validator`] - Command validity rules
//! - [`dispatch`] - Effect execution
//! - [`outcome`] - The result of one interpretation cycle
//! - [`help`] - The help listing
//! - [`host`] - Scene engine and callback table interfaces
//! - [`config`] - Interpreter configuration
//! - [`interpreter`] - The facade hosts call once per scene and per line

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod help;
pub mod host;
pub mod interpreter;
pub mod outcome;
pub mod registry;
pub mod resolver;
pub mod subject;
pub mod tokenizer;
pub mod validator;

// Re-export main types for convenience
pub use action::Action;
pub use command::Command;
pub use config::InterpreterConfig;
pub use dispatch::Dispatcher;
pub use help::HelpComposer;
pub use host::{CallbackTable, SceneEngine};
pub use interpreter::{ERROR_PREFIX, Interpreter};
pub use outcome::{InventoryChange, Outcome, SceneRequest, Verdict};
pub use registry::SubjectRegistry;
pub use resolver::SubjectResolver;
pub use subject::{Capabilities, CustomAction, RememberCapability, Subject, TakeCapability, UsePartner};
pub use tokenizer::{CommandLine, InputTokenizer};
pub use validator::{CommandValidator, Rejection, Route};
