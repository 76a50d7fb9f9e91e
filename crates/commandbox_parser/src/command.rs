//! Resolved commands.

use crate::action::Action;
use crate::subject::Subject;

/// One interpretation of a line: an action and the subjects it mentions.
///
/// Borrowed from the registry for the length of a single cycle.
#[derive(Clone, Debug)]
pub struct Command<'r> {
    /// The canonical action.
    pub action: Action,
    /// The mentioned subjects, in registry order.
    pub subjects: Vec<&'r Subject>,
}

impl<'r> Command<'r> {
    /// Creates a command.
    #[must_use]
    pub fn new(action: Action, subjects: Vec<&'r Subject>) -> Self {
        Self { action, subjects }
    }

    /// Returns the subject when exactly one was resolved.
    #[must_use]
    pub fn sole_subject(&self) -> Option<&'r Subject> {
        match self.subjects.as_slice() {
            [subject] => Some(*subject),
            _ => None,
        }
    }

    /// Returns both subjects when exactly two were resolved.
    #[must_use]
    pub fn pair(&self) -> Option<(&'r Subject, &'r Subject)> {
        match self.subjects.as_slice() {
            [first, second] => Some((*first, *second)),
            _ => None,
        }
    }

    /// Returns the names of the resolved subjects.
    #[must_use]
    pub fn subject_names(&self) -> Vec<String> {
        self.subjects.iter().map(|s| s.name.clone()).collect()
    }
}
