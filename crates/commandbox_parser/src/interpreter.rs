//! The interpreter facade.
//!
//! Hosts call [`Interpreter::begin_scene`] and
//! [`Interpreter::register_subjects`] once per scene render, and
//! [`Interpreter::interpret`] once per submitted line.

use commandbox_foundation::{ErrorContext, InventoryStore, Result};
use log::{debug, info};

use crate::command::Command;
use crate::config::InterpreterConfig;
use crate::dispatch::Dispatcher;
use crate::outcome::Outcome;
use crate::registry::SubjectRegistry;
use crate::resolver::SubjectResolver;
use crate::subject::Subject;
use crate::tokenizer::InputTokenizer;
use crate::validator::{CommandValidator, Rejection};

/// Prefix of the verbose diagnostic message.
pub const ERROR_PREFIX: &str = "ERROR: ";

/// Owns the scene registry and runs interpretation cycles.
#[derive(Clone, Debug, Default)]
pub struct Interpreter {
    registry: SubjectRegistry,
    config: InterpreterConfig,
}

impl Interpreter {
    /// Creates an interpreter with an empty registry.
    #[must_use]
    pub fn new(config: InterpreterConfig) -> Self {
        Self {
            registry: SubjectRegistry::new(),
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Returns a mutable reference to the configuration.
    pub fn config_mut(&mut self) -> &mut InterpreterConfig {
        &mut self.config
    }

    /// Returns the current scene's subjects.
    #[must_use]
    pub fn registry(&self) -> &SubjectRegistry {
        &self.registry
    }

    /// Empties the registry. Call on every scene entry.
    pub fn begin_scene(&mut self) {
        self.registry.clear();
    }

    /// Registers the current scene's subjects, in order.
    ///
    /// # Errors
    ///
    /// Returns an error on the first subject whose name is already
    /// registered. Subjects before it stay registered.
    pub fn register_subjects<I>(&mut self, subjects: I) -> Result<()>
    where
        I: IntoIterator<Item = Subject>,
    {
        for subject in subjects {
            let name = subject.name.clone();
            self.registry.register(subject).map_err(|e| {
                e.with_context(ErrorContext::new().with_frame(format!("subject {name}")))
            })?;
        }
        info!("registered {} subjects", self.registry.len());
        Ok(())
    }

    /// Interprets one line the player submitted.
    ///
    /// Never fails: a line that does not make sense yields a rejected
    /// [`Outcome`] that the host turns into its error affordance.
    pub fn interpret(&self, input: &str, inventories: &mut dyn InventoryStore) -> Outcome {
        let line = InputTokenizer::split(input);
        let action = line.action();
        let subjects = SubjectResolver::resolve(&line.remainder, &self.registry);
        let command = Command::new(action, subjects);

        debug!(
            "interpret {input:?}: action={} subjects={:?}",
            command.action,
            command.subject_names()
        );

        let result = CommandValidator::new(&self.registry, &self.config)
            .validate(&command, &*inventories)
            .and_then(|route| {
                debug!("route {route:?}");
                Dispatcher::new(&self.registry, &self.config).execute(route, &command, inventories)
            });

        match result {
            Ok(outcome) => outcome,
            Err(rejection) => self.reject(&command, rejection),
        }
    }

    fn reject(&self, command: &Command<'_>, rejection: Rejection) -> Outcome {
        debug!("rejected: {rejection}");
        let message = self
            .config
            .verbose_errors
            .then(|| format!("{ERROR_PREFIX}{rejection}"));
        let mut outcome =
            Outcome::rejected(command.action.clone(), command.subject_names(), rejection);
        outcome.message = message;
        outcome
    }
}
