//! Session state for a story being played.
//!
//! The session is the host the interpreter talks to: it owns the inventories,
//! renders scenes into the interpreter's registry, and runs story callbacks.

use std::collections::BTreeSet;
use std::path::Path;

use commandbox_foundation::{
    CallbackId, Error, ErrorContext, Inventories, Inventory, InventoryStore, Result,
};
use commandbox_parser::action::VERBS;
use commandbox_parser::{CallbackTable, Interpreter, InterpreterConfig, Outcome, SceneEngine, Subject};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::serialize;
use crate::story::{CallbackEffect, SceneDecl, Story, SubjectDecl};

/// Progress that survives a save and load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveState {
    /// Id of the current scene.
    pub scene: String,
    /// Every inventory and its items.
    pub inventories: Inventories,
    /// Flags set by callbacks.
    pub flags: BTreeSet<String>,
}

/// A story in play.
pub struct Session {
    /// The story being played.
    story: Story,

    /// Interpreter holding the current scene's subjects.
    interpreter: Interpreter,

    /// Id of the current scene.
    scene: String,

    /// Inventories and memory banks.
    inventories: Inventories,

    /// Flags set by callbacks.
    flags: BTreeSet<String>,

    /// Message of the latest cycle, kept across a re-render.
    message: Option<String>,

    /// How many submitted lines were rejected.
    error_signals: usize,
}

impl Session {
    /// Starts a story at its start scene.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Story::validate`].
    pub fn new(story: Story, config: InterpreterConfig) -> Result<Self> {
        story.validate()?;
        let start = story.start.clone();
        let mut session = Self {
            story,
            interpreter: Interpreter::new(config),
            scene: start.clone(),
            inventories: Inventories::new(),
            flags: BTreeSet::new(),
            message: None,
            error_signals: 0,
        };
        session.enter(&start)?;
        Ok(session)
    }

    /// Returns the story.
    #[must_use]
    pub const fn story(&self) -> &Story {
        &self.story
    }

    /// Returns the interpreter.
    #[must_use]
    pub const fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Returns the current scene id.
    #[must_use]
    pub fn scene_id(&self) -> &str {
        &self.scene
    }

    /// Returns the current scene's description.
    #[must_use]
    pub fn scene_text(&self) -> &str {
        self.current_scene().map_or("", |scene| scene.text.as_str())
    }

    /// Returns the display keywords of the visible subjects, in order.
    #[must_use]
    pub fn visible_subjects(&self) -> Vec<&str> {
        self.interpreter.registry().primary_keywords(false)
    }

    /// Returns the words offered for completion: the verbs plus the visible
    /// subjects' display keywords.
    #[must_use]
    pub fn completions(&self) -> Vec<String> {
        VERBS
            .iter()
            .copied()
            .chain(self.visible_subjects())
            .map(String::from)
            .collect()
    }

    /// Returns the inventories.
    #[must_use]
    pub const fn inventories(&self) -> &Inventories {
        &self.inventories
    }

    /// Returns true if the flag is set.
    #[must_use]
    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    /// Returns the message of the latest cycle.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Takes the message so it is shown only once.
    pub fn take_message(&mut self) -> Option<String> {
        self.message.take()
    }

    /// Returns how many submitted lines were rejected.
    #[must_use]
    pub const fn error_signals(&self) -> usize {
        self.error_signals
    }

    /// Runs one interpretation cycle and applies its outcome.
    pub fn submit(&mut self, line: &str) -> Outcome {
        let outcome = self.interpreter.interpret(line, &mut self.inventories);
        self.message.clone_from(&outcome.message);
        if outcome.signals_error() {
            self.error_signals += 1;
        }
        outcome.apply(self);
        outcome
    }

    /// Captures the current progress.
    #[must_use]
    pub fn snapshot(&self) -> SaveState {
        SaveState {
            scene: self.scene.clone(),
            inventories: self.inventories.clone(),
            flags: self.flags.clone(),
        }
    }

    /// Replaces the current progress and re-enters the saved scene.
    ///
    /// # Errors
    ///
    /// Returns an `UnknownScene` error if the saved scene is not in this
    /// story; the session is left unchanged.
    pub fn restore(&mut self, state: SaveState) -> Result<()> {
        if self.story.scene(&state.scene).is_none() {
            return Err(Error::unknown_scene(state.scene));
        }
        self.inventories = state.inventories;
        self.flags = state.flags;
        self.message = None;
        self.enter(&state.scene)
    }

    /// Saves progress to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        serialize::save_to_file(&self.snapshot(), path.as_ref())?;
        info!("saved progress to {}", path.as_ref().display());
        Ok(())
    }

    /// Loads progress from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or decoding fails, or the saved scene is
    /// not in this story.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let state = serialize::load_from_file(path.as_ref())?;
        self.restore(state)?;
        info!("loaded progress from {}", path.as_ref().display());
        Ok(())
    }

    fn current_scene(&self) -> Option<&SceneDecl> {
        self.story.scene(&self.scene)
    }

    /// Renders a scene: resets the registry and registers the subjects that
    /// are present given the current flags and inventories.
    fn enter(&mut self, id: &str) -> Result<()> {
        let scene = self
            .story
            .scene(id)
            .ok_or_else(|| Error::unknown_scene(id))?;
        let subjects: Vec<Subject> = scene
            .subjects
            .iter()
            .filter(|decl| self.is_present(decl))
            .map(|decl| decl.subject.clone())
            .collect();

        self.interpreter.begin_scene();
        self.interpreter
            .register_subjects(subjects)
            .map_err(|e| e.with_context(ErrorContext::new().with_scene(id)))?;
        self.scene = id.to_string();
        info!(
            "entered scene {id} with {} subjects",
            self.interpreter.registry().len()
        );
        Ok(())
    }

    fn is_present(&self, decl: &SubjectDecl) -> bool {
        if let Some(flag) = &decl.requires_flag {
            if !self.flags.contains(flag) {
                return false;
            }
        }
        if let Some(flag) = &decl.unless_flag {
            if self.flags.contains(flag) {
                return false;
            }
        }
        !(decl.hidden_when_held
            && self
                .inventories
                .holds(decl.held_in(self.interpreter.config()), &decl.subject.name))
    }
}

impl InventoryStore for Session {
    fn inventory(&self, name: &str) -> Option<&dyn Inventory> {
        self.inventories.inventory(name)
    }

    fn inventory_mut(&mut self, name: &str) -> &mut dyn Inventory {
        self.inventories.inventory_mut(name)
    }
}

impl SceneEngine for Session {
    fn render_current_scene(&mut self) {
        let id = self.scene.clone();
        if let Err(e) = self.enter(&id) {
            warn!("cannot re-render scene {id}: {e}");
        }
    }

    fn transition_to(&mut self, target: &str) {
        if let Err(e) = self.enter(target) {
            warn!("cannot enter scene {target}: {e}");
        }
    }
}

impl CallbackTable for Session {
    fn invoke(&mut self, callback: &CallbackId) {
        let Some(decl) = self.story.callback(callback.as_str()) else {
            warn!("unknown callback {callback}");
            return;
        };
        let effects = decl.effects.clone();
        debug!("callback {callback}: {} effects", effects.len());

        let mut moved = false;
        let mut changed = false;
        for effect in effects {
            match effect {
                CallbackEffect::Say(text) => self.message = Some(text),
                CallbackEffect::SetFlag(flag) => changed |= self.flags.insert(flag),
                CallbackEffect::ClearFlag(flag) => changed |= self.flags.remove(&flag),
                CallbackEffect::Give { inventory, item } => {
                    self.inventories.inventory_mut(&inventory).add(&item);
                    changed = true;
                }
                CallbackEffect::Discard { inventory, item } => {
                    self.inventories.inventory_mut(&inventory).remove(&item);
                    changed = true;
                }
                CallbackEffect::Goto(target) => {
                    self.transition_to(&target);
                    moved = true;
                }
            }
        }

        if changed && !moved {
            self.render_current_scene();
        }
    }
}
