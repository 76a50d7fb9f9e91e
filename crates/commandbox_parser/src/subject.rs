//! Subjects and their capability records.
//!
//! A [`Subject`] is something the player can act on in the current scene.
//! What can be done with it is declared in its [`Capabilities`]: an action
//! is available exactly when the matching optional field is present.

use commandbox_foundation::CallbackId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default text shown when taking a subject.
pub const DEFAULT_TAKE_DESCRIPTION: &str = "You take it.";
/// Default text shown when a subject cannot be taken.
pub const DEFAULT_TAKE_DISABLED_DESCRIPTION: &str = "You can't take it.";
/// Default text shown when remembering a subject.
pub const DEFAULT_REMEMBER_DESCRIPTION: &str = "You'll never forget it.";
/// Default text shown when two subjects are used together.
pub const DEFAULT_USE_DESCRIPTION: &str = "You use the item on it.";
/// Default text shown for a custom action.
pub const DEFAULT_CUSTOM_DESCRIPTION: &str = "You do the thing.";

fn default_take_description() -> String {
    DEFAULT_TAKE_DESCRIPTION.to_string()
}

fn default_take_disabled_description() -> String {
    DEFAULT_TAKE_DISABLED_DESCRIPTION.to_string()
}

fn default_remember_description() -> String {
    DEFAULT_REMEMBER_DESCRIPTION.to_string()
}

fn default_use_description() -> String {
    DEFAULT_USE_DESCRIPTION.to_string()
}

fn default_custom_description() -> String {
    DEFAULT_CUSTOM_DESCRIPTION.to_string()
}

/// A noun-like entity the player can target with an action.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Subject {
    /// Canonical identity, also the inventory key.
    pub name: String,
    /// Words that recognize the subject in free text. The first is the
    /// display keyword.
    #[cfg_attr(feature = "serde", serde(default))]
    pub keywords: Vec<String>,
    /// Hidden from the help listing.
    #[cfg_attr(feature = "serde", serde(default))]
    pub secret: bool,
    /// What can be done with the subject.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub capabilities: Capabilities,
}

impl Subject {
    /// Creates a subject with no keywords and no capabilities.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keywords: Vec::new(),
            secret: false,
            capabilities: Capabilities::default(),
        }
    }

    /// Sets the recognition keywords.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Marks the subject as secret.
    #[must_use]
    pub fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    /// Declares the scene `go` leads to.
    #[must_use]
    pub fn with_go(mut self, target: impl Into<String>) -> Self {
        self.capabilities.go = Some(target.into());
        self
    }

    /// Declares the `look` description.
    #[must_use]
    pub fn with_look(mut self, description: impl Into<String>) -> Self {
        self.capabilities.look = Some(description.into());
        self
    }

    /// Declares the `take` capability.
    #[must_use]
    pub fn with_take(mut self, take: TakeCapability) -> Self {
        self.capabilities.take = Some(take);
        self
    }

    /// Declares the `remember` capability.
    #[must_use]
    pub fn with_remember(mut self, remember: RememberCapability) -> Self {
        self.capabilities.remember = Some(remember);
        self
    }

    /// Adds a use partner.
    #[must_use]
    pub fn with_use(mut self, partner: UsePartner) -> Self {
        self.capabilities.uses.push(partner);
        self
    }

    /// Adds a custom action.
    #[must_use]
    pub fn with_custom_action(mut self, action: CustomAction) -> Self {
        self.capabilities.custom_actions.push(action);
        self
    }

    /// Returns the keyword shown in listings, falling back to the name.
    #[must_use]
    pub fn primary_keyword(&self) -> &str {
        self.keywords.first().map_or(self.name.as_str(), String::as_str)
    }
}

/// The actions a subject supports. Absent fields mean unsupported.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Capabilities {
    /// Target scene for `go`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub go: Option<String>,
    /// Description for `look`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub look: Option<String>,
    /// Configuration for `take`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub take: Option<TakeCapability>,
    /// Configuration for `remember`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub remember: Option<RememberCapability>,
    /// Subjects this one can be used with, in declaration order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub uses: Vec<UsePartner>,
    /// Author-defined actions, in declaration order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub custom_actions: Vec<CustomAction>,
}

/// Configuration for taking a subject.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TakeCapability {
    /// Whether the subject can actually be taken.
    #[cfg_attr(feature = "serde", serde(default))]
    pub enabled: bool,
    /// Shown when the subject is taken.
    #[cfg_attr(feature = "serde", serde(default = "default_take_description"))]
    pub description: String,
    /// Shown when taking is disabled.
    #[cfg_attr(
        feature = "serde",
        serde(default = "default_take_disabled_description")
    )]
    pub disabled_description: String,
    /// Inventory to store the subject in; the configured default if absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub inventory: Option<String>,
}

impl TakeCapability {
    /// A takeable subject with the default description.
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    /// A subject that refuses to be taken.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Sets the take description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the description used when taking is disabled.
    #[must_use]
    pub fn with_disabled_description(mut self, description: impl Into<String>) -> Self {
        self.disabled_description = description.into();
        self
    }

    /// Sets the inventory.
    #[must_use]
    pub fn in_inventory(mut self, inventory: impl Into<String>) -> Self {
        self.inventory = Some(inventory.into());
        self
    }
}

impl Default for TakeCapability {
    fn default() -> Self {
        Self {
            enabled: false,
            description: default_take_description(),
            disabled_description: default_take_disabled_description(),
            inventory: None,
        }
    }
}

/// Configuration for remembering a subject.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RememberCapability {
    /// Shown when the subject is remembered.
    #[cfg_attr(feature = "serde", serde(default = "default_remember_description"))]
    pub description: String,
    /// Memory bank to store the subject in; the configured default if absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub inventory: Option<String>,
    /// Callback invoked when the subject is remembered.
    #[cfg_attr(feature = "serde", serde(default))]
    pub on_trigger: Option<CallbackId>,
}

impl RememberCapability {
    /// Creates a remember capability with the given description.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    /// Sets the memory bank.
    #[must_use]
    pub fn in_inventory(mut self, inventory: impl Into<String>) -> Self {
        self.inventory = Some(inventory.into());
        self
    }

    /// Sets the callback.
    #[must_use]
    pub fn on_trigger(mut self, callback: impl Into<CallbackId>) -> Self {
        self.on_trigger = Some(callback.into());
        self
    }
}

impl Default for RememberCapability {
    fn default() -> Self {
        Self {
            description: default_remember_description(),
            inventory: None,
            on_trigger: None,
        }
    }
}

/// Declares that a subject can be used with another subject.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UsePartner {
    /// Name of the other subject.
    pub partner: String,
    /// Shown when the two are used together.
    #[cfg_attr(feature = "serde", serde(default = "default_use_description"))]
    pub description: String,
    /// Callback invoked when the two are used together.
    #[cfg_attr(feature = "serde", serde(default))]
    pub on_trigger: Option<CallbackId>,
}

impl UsePartner {
    /// Creates a use partner entry with the default description.
    #[must_use]
    pub fn new(partner: impl Into<String>) -> Self {
        Self {
            partner: partner.into(),
            description: default_use_description(),
            on_trigger: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the callback.
    #[must_use]
    pub fn on_trigger(mut self, callback: impl Into<CallbackId>) -> Self {
        self.on_trigger = Some(callback.into());
        self
    }
}

/// An author-defined action on one subject.
///
/// When two custom actions on the same subject share a keyword, the one
/// declared first wins. Keep keyword sets disjoint per subject.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CustomAction {
    /// Verbs that trigger the action.
    pub keywords: Vec<String>,
    /// Shown when the action runs.
    #[cfg_attr(feature = "serde", serde(default = "default_custom_description"))]
    pub description: String,
    /// Callback invoked when the action runs.
    #[cfg_attr(feature = "serde", serde(default))]
    pub on_trigger: Option<CallbackId>,
}

impl CustomAction {
    /// Creates a custom action triggered by the given verbs.
    #[must_use]
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            description: default_custom_description(),
            on_trigger: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the callback.
    #[must_use]
    pub fn on_trigger(mut self, callback: impl Into<CallbackId>) -> Self {
        self.on_trigger = Some(callback.into());
        self
    }

    /// Returns true if the verb is one of this action's keywords.
    #[must_use]
    pub fn responds_to(&self, verb: &str) -> bool {
        self.keywords.iter().any(|keyword| keyword == verb)
    }
}
