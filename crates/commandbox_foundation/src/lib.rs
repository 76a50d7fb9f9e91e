//! Core types, errors, and inventory collections for Commandbox.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`Inventory`] / [`InventoryStore`] - The capability interface the
//!   interpreter uses to read and mutate item collections
//! - [`ItemList`] / [`Inventories`] - Persistent, ordered implementations
//! - [`CallbackId`] - Opaque handle for author-registered callbacks

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod callback;
pub mod error;
pub mod inventory;

pub use callback::CallbackId;
pub use error::{Error, ErrorContext, ErrorKind};
pub use inventory::{Inventories, Inventory, InventoryStore, ItemList};

/// Result type alias using Commandbox's error type.
pub type Result<T> = std::result::Result<T, Error>;
