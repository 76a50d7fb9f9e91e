//! Integration tests for the commandbox_foundation crate.
//!
//! - Error kinds and context
//! - Inventories and the inventory store interface

mod errors;
mod inventories;
