//! Interfaces the interpreter consumes from its host.
//!
//! Inventories are reached through
//! [`InventoryStore`](commandbox_foundation::InventoryStore). The scene
//! engine and the callback table are only touched when an
//! [`Outcome`](crate::Outcome) is applied.

use commandbox_foundation::CallbackId;

/// The presentation layer that owns scenes.
pub trait SceneEngine {
    /// Re-renders the current scene, rebuilding its subjects.
    fn render_current_scene(&mut self);

    /// Leaves the current scene for `target`.
    fn transition_to(&mut self, target: &str);
}

/// The authoring layer's table of named callbacks.
pub trait CallbackTable {
    /// Runs the callback the handle names.
    fn invoke(&mut self, callback: &CallbackId);
}
