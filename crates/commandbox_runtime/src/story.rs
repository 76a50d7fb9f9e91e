//! Stories: scenes, their subjects, and named callbacks, read from TOML.
//!
//! ```toml
//! title = "The Cellar"
//! start = "cellar"
//!
//! [[scenes]]
//! id = "cellar"
//! text = "A damp cellar."
//!
//! [[scenes.subjects]]
//! name = "key"
//! keywords = ["key"]
//! take = { enabled = true }
//! hidden_when_held = true
//!
//! [callbacks.unlock-door]
//! effects = [{ say = "Click." }, { goto = "hall" }]
//! ```

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use commandbox_foundation::{Error, ErrorContext, ErrorKind, Result};
use commandbox_parser::{InterpreterConfig, Subject};
use log::info;
use serde::{Deserialize, Serialize};

/// A complete story.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Story {
    /// Shown when play begins.
    #[serde(default)]
    pub title: String,
    /// Id of the first scene.
    pub start: String,
    /// Every scene, in declaration order.
    #[serde(default)]
    pub scenes: Vec<SceneDecl>,
    /// Named callbacks subjects may trigger.
    #[serde(default)]
    pub callbacks: BTreeMap<String, CallbackDecl>,
}

/// One scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneDecl {
    /// Unique id, the target of `go` and `goto`.
    pub id: String,
    /// Description shown on entry.
    #[serde(default)]
    pub text: String,
    /// Subjects registered on each render, in order.
    #[serde(default)]
    pub subjects: Vec<SubjectDecl>,
}

/// A subject plus the conditions under which it is present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubjectDecl {
    /// The subject itself.
    #[serde(flatten)]
    pub subject: Subject,
    /// Present only while this flag is set.
    #[serde(default)]
    pub requires_flag: Option<String>,
    /// Absent while this flag is set.
    #[serde(default)]
    pub unless_flag: Option<String>,
    /// Absent once the subject is in its take inventory.
    #[serde(default)]
    pub hidden_when_held: bool,
}

impl SubjectDecl {
    /// Wraps a subject with no presence conditions.
    #[must_use]
    pub fn new(subject: Subject) -> Self {
        Self {
            subject,
            requires_flag: None,
            unless_flag: None,
            hidden_when_held: false,
        }
    }

    /// Inventory checked by `hidden_when_held`.
    #[must_use]
    pub fn held_in<'a>(&'a self, config: &'a InterpreterConfig) -> &'a str {
        config.take_inventory_for(
            self.subject
                .capabilities
                .take
                .as_ref()
                .and_then(|take| take.inventory.as_deref()),
        )
    }
}

/// A named sequence of effects.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CallbackDecl {
    /// Effects run in order.
    #[serde(default)]
    pub effects: Vec<CallbackEffect>,
}

/// One step of a callback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallbackEffect {
    /// Replace the message shown this turn.
    Say(String),
    /// Set a flag.
    SetFlag(String),
    /// Clear a flag.
    ClearFlag(String),
    /// Put an item into an inventory.
    Give {
        /// Inventory name.
        inventory: String,
        /// Item name.
        item: String,
    },
    /// Remove an item from an inventory.
    Discard {
        /// Inventory name.
        inventory: String,
        /// Item name.
        item: String,
    },
    /// Move to another scene.
    Goto(String),
}

impl Story {
    /// Parses and validates a story.
    ///
    /// # Errors
    ///
    /// Returns a `StoryFormat` error for malformed TOML, and the errors of
    /// [`Story::validate`].
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let story: Self = toml::from_str(source).map_err(|e| Error::story_format(e.to_string()))?;
        story.validate()?;
        Ok(story)
    }

    /// Reads, parses and validates a story file.
    ///
    /// # Errors
    ///
    /// Returns an `IoError` if the file cannot be read, and the errors of
    /// [`Story::from_toml_str`] with the path attached.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            Error::new(ErrorKind::IoError(format!(
                "failed to read story '{}': {e}",
                path.display()
            )))
        })?;
        let story = Self::from_toml_str(&source).map_err(|e| {
            let context = e.context.clone().unwrap_or_default();
            e.with_context(context.with_source(path.display().to_string()))
        })?;
        info!(
            "loaded story {:?}: {} scenes, {} callbacks",
            story.title,
            story.scenes.len(),
            story.callbacks.len()
        );
        Ok(story)
    }

    /// Looks up a scene by id.
    #[must_use]
    pub fn scene(&self, id: &str) -> Option<&SceneDecl> {
        self.scenes.iter().find(|scene| scene.id == id)
    }

    /// Looks up a callback by id.
    #[must_use]
    pub fn callback(&self, id: &str) -> Option<&CallbackDecl> {
        self.callbacks.get(id)
    }

    /// Checks cross references.
    ///
    /// # Errors
    ///
    /// - `StoryFormat` for a repeated scene id
    /// - `UnknownScene` for a missing start, `go` or `goto` target
    /// - `DuplicateSubject` for a name repeated within one scene
    /// - `UnknownCallback` for an `on_trigger` naming no callback
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for scene in &self.scenes {
            if !ids.insert(scene.id.as_str()) {
                return Err(Error::story_format(format!(
                    "scene '{}' is declared twice",
                    scene.id
                )));
            }
        }

        if !ids.contains(self.start.as_str()) {
            return Err(Error::unknown_scene(&self.start)
                .with_context(ErrorContext::new().with_frame("start")));
        }

        for scene in &self.scenes {
            self.validate_scene(scene, &ids)
                .map_err(|e| e.with_context(ErrorContext::new().with_scene(&scene.id)))?;
        }

        for (id, callback) in &self.callbacks {
            for effect in &callback.effects {
                if let CallbackEffect::Goto(target) = effect {
                    if !ids.contains(target.as_str()) {
                        return Err(Error::unknown_scene(target)
                            .with_context(ErrorContext::new().with_frame(format!("callback {id}"))));
                    }
                }
            }
        }

        Ok(())
    }

    fn validate_scene(&self, scene: &SceneDecl, ids: &HashSet<&str>) -> Result<()> {
        let mut names = HashSet::new();
        for decl in &scene.subjects {
            let subject = &decl.subject;
            if !names.insert(subject.name.as_str()) {
                return Err(Error::duplicate_subject(&subject.name));
            }

            if let Some(target) = &subject.capabilities.go {
                if !ids.contains(target.as_str()) {
                    return Err(Error::unknown_scene(target));
                }
            }

            let capabilities = &subject.capabilities;
            let triggers = capabilities
                .remember
                .iter()
                .filter_map(|remember| remember.on_trigger.as_ref())
                .chain(capabilities.uses.iter().filter_map(|u| u.on_trigger.as_ref()))
                .chain(
                    capabilities
                        .custom_actions
                        .iter()
                        .filter_map(|custom| custom.on_trigger.as_ref()),
                );
            for trigger in triggers {
                if !self.callbacks.contains_key(trigger.as_str()) {
                    return Err(Error::unknown_callback(trigger.as_str()));
                }
            }
        }
        Ok(())
    }
}
