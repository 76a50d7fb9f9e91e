//! Integration tests for the commandbox_runtime crate.
//!
//! - Story parsing and validation
//! - Session hosting: scene rendering, callbacks, message survival
//! - Saving and loading progress

mod persistence_tests;
mod story_tests;
