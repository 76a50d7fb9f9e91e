//! The result of one interpretation cycle.
//!
//! Each effect is an `Option`, so a cycle can carry at most one message,
//! one scene request, one callback and one inventory change.

use commandbox_foundation::CallbackId;

use crate::action::Action;
use crate::host::{CallbackTable, SceneEngine};
use crate::validator::Rejection;

/// Whether the command was carried out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The command ran.
    Accepted,
    /// The command was refused; the host should signal the error affordance.
    Rejected(Rejection),
}

/// A scene change requested by the command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SceneRequest {
    /// Move to another scene.
    Transition(String),
    /// Re-render the current scene.
    Rerender,
}

/// The inventory mutation the command performed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InventoryChange {
    /// An item was inserted.
    Added {
        /// Inventory name.
        inventory: String,
        /// Item name.
        item: String,
    },
    /// An item was removed.
    Removed {
        /// Inventory name.
        inventory: String,
        /// Item name.
        item: String,
    },
}

/// Everything one submitted line produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// The normalized action.
    pub action: Action,
    /// Names of the resolved subjects.
    pub subjects: Vec<String>,
    /// Accepted or rejected.
    pub verdict: Verdict,
    /// Text to show the player.
    pub message: Option<String>,
    /// Requested scene change.
    pub scene: Option<SceneRequest>,
    /// Callback to invoke.
    pub callback: Option<CallbackId>,
    /// Inventory mutation already applied to the store.
    pub inventory_change: Option<InventoryChange>,
}

impl Outcome {
    /// An accepted outcome with no effects yet.
    #[must_use]
    pub fn accepted(action: Action, subjects: Vec<String>) -> Self {
        Self {
            action,
            subjects,
            verdict: Verdict::Accepted,
            message: None,
            scene: None,
            callback: None,
            inventory_change: None,
        }
    }

    /// A rejected outcome.
    #[must_use]
    pub fn rejected(action: Action, subjects: Vec<String>, rejection: Rejection) -> Self {
        Self {
            verdict: Verdict::Rejected(rejection),
            ..Self::accepted(action, subjects)
        }
    }

    /// Sets the message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the scene request.
    #[must_use]
    pub fn with_scene(mut self, scene: SceneRequest) -> Self {
        self.scene = Some(scene);
        self
    }

    /// Sets the callback, if any.
    #[must_use]
    pub fn with_callback(mut self, callback: Option<CallbackId>) -> Self {
        self.callback = callback;
        self
    }

    /// Records the inventory change.
    #[must_use]
    pub fn with_inventory_change(mut self, change: InventoryChange) -> Self {
        self.inventory_change = Some(change);
        self
    }

    /// Returns true if the command ran.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.verdict == Verdict::Accepted
    }

    /// Returns true if the host should signal the error affordance.
    #[must_use]
    pub fn signals_error(&self) -> bool {
        matches!(self.verdict, Verdict::Rejected(_))
    }

    /// Returns the rejection, if any.
    #[must_use]
    pub fn rejection(&self) -> Option<&Rejection> {
        match &self.verdict {
            Verdict::Rejected(rejection) => Some(rejection),
            Verdict::Accepted => None,
        }
    }

    /// Applies the callback and the scene request to the host, in that order.
    ///
    /// The message and inventory change are left to the caller: the change
    /// has already been written to the store during dispatch.
    pub fn apply<H>(&self, host: &mut H)
    where
        H: SceneEngine + CallbackTable + ?Sized,
    {
        if let Some(callback) = &self.callback {
            host.invoke(callback);
        }
        match &self.scene {
            Some(SceneRequest::Transition(target)) => host.transition_to(target),
            Some(SceneRequest::Rerender) => host.render_current_scene(),
            None => {}
        }
    }
}
