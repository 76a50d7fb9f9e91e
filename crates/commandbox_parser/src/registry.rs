//! Scene-scoped subject registry.
//!
//! Holds the subjects actionable in the current scene, in declaration
//! order. The registry is emptied on every scene entry and refilled by the
//! scene's declarations before the player can submit a command.

use commandbox_foundation::{Error, Result};

use crate::subject::Subject;

/// Ordered set of the current scene's subjects, unique by name.
#[derive(Clone, Debug, Default)]
pub struct SubjectRegistry {
    subjects: Vec<Subject>,
}

impl SubjectRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every subject.
    pub fn clear(&mut self) {
        self.subjects.clear();
    }

    /// Registers a subject.
    ///
    /// # Errors
    ///
    /// Returns an error if a subject with the same name is already registered.
    pub fn register(&mut self, subject: Subject) -> Result<()> {
        if self.contains(&subject.name) {
            return Err(Error::duplicate_subject(subject.name));
        }
        self.subjects.push(subject);
        Ok(())
    }

    /// Returns true if a subject with the name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Looks up a subject by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Subject> {
        self.subjects.iter().find(|subject| subject.name == name)
    }

    /// Returns the subjects in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Subject> {
        self.subjects.iter()
    }

    /// Returns the number of registered subjects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Returns the display keyword of each subject, in registration order.
    #[must_use]
    pub fn primary_keywords(&self, include_secret: bool) -> Vec<&str> {
        self.subjects
            .iter()
            .filter(|subject| include_secret || !subject.secret)
            .map(Subject::primary_keyword)
            .collect()
    }

    /// Returns every action keyword available across the registry.
    ///
    /// Built-in actions appear in the order `go, look, take, remember, use`
    /// per subject, followed by that subject's custom-action keywords.
    /// Duplicates keep their first position.
    #[must_use]
    pub fn available_actions(&self) -> Vec<&str> {
        let mut actions: Vec<&str> = Vec::new();

        for subject in &self.subjects {
            let caps = &subject.capabilities;
            let builtin = [
                ("go", caps.go.is_some()),
                ("look", caps.look.is_some()),
                ("take", caps.take.is_some()),
                ("remember", caps.remember.is_some()),
                ("use", !caps.uses.is_empty()),
            ];
            for (name, declared) in builtin {
                if declared {
                    push_unique(&mut actions, name);
                }
            }
            for custom in &caps.custom_actions {
                for keyword in &custom.keywords {
                    push_unique(&mut actions, keyword);
                }
            }
        }

        actions
    }
}

fn push_unique<'a>(actions: &mut Vec<&'a str>, action: &'a str) {
    if !actions.contains(&action) {
        actions.push(action);
    }
}
