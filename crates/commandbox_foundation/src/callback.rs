//! Callback handles.
//!
//! Authoring data never carries executable payloads. A subject that wants
//! something to happen names a callback by handle, and the host resolves
//! the handle through its own table when the interpreter asks for it.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque handle naming an author-registered callback.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct CallbackId(String);

impl CallbackId {
    /// Creates a handle from a callback name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the callback name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CallbackId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for CallbackId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for CallbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
