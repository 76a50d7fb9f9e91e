//! Canonical actions.
//!
//! Maps the verbs a player types onto the fixed set of actions the
//! interpreter knows how to validate and dispatch. Any verb outside the
//! synonym table survives as [`Action::Custom`] and is matched later
//! against per-subject custom actions.

use std::fmt;

/// Every surface verb the synonym table recognizes, canonical forms first.
pub const VERBS: &[&str] = &[
    "go", "look", "take", "remember", "drop", "forget", "use", "help", "pick", "examine",
    "check", "see",
];

/// A normalized verb.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move to another scene.
    Go,
    /// Describe a subject.
    Look,
    /// Put a subject into an inventory.
    Take,
    /// Put a subject into the memory bank.
    Remember,
    /// Take a subject back out of its inventory.
    Drop,
    /// Take a subject back out of the memory bank.
    Forget,
    /// Combine two subjects.
    Use,
    /// List what can be interacted with.
    Help,
    /// Any other verb, matched against per-subject custom actions.
    Custom(String),
}

impl Action {
    /// Normalizes a single verb token.
    ///
    /// The token must already be lower-cased; only whole tokens match.
    #[must_use]
    pub fn normalize(verb: &str) -> Self {
        match verb {
            "go" => Self::Go,
            "look" | "examine" | "check" | "see" => Self::Look,
            "take" | "pick" => Self::Take,
            "remember" => Self::Remember,
            "drop" => Self::Drop,
            "forget" => Self::Forget,
            "use" => Self::Use,
            "help" => Self::Help,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Returns the canonical spelling of the action.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Go => "go",
            Self::Look => "look",
            Self::Take => "take",
            Self::Remember => "remember",
            Self::Drop => "drop",
            Self::Forget => "forget",
            Self::Use => "use",
            Self::Help => "help",
            Self::Custom(verb) => verb,
        }
    }

    /// Returns true for verbs outside the fixed table.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
