//! Effect execution.
//!
//! Runs a command the validator accepted. Entries are looked up again here
//! rather than carried over from validation; a lookup that fails turns into
//! [`Rejection::Unresolved`] instead of a panic.

use commandbox_foundation::InventoryStore;
use log::debug;

use crate::command::Command;
use crate::config::InterpreterConfig;
use crate::help::HelpComposer;
use crate::outcome::{InventoryChange, Outcome, SceneRequest};
use crate::registry::SubjectRegistry;
use crate::resolver::SubjectResolver;
use crate::subject::Subject;
use crate::validator::{Rejection, Route, memory_bank, take_inventory};

/// Message shown after a successful `drop`.
pub const DROP_MESSAGE: &str = "You drop it.";

/// Message shown after a successful `forget`.
pub const FORGET_MESSAGE: &str = "It's forgotten.";

/// Executes validated commands.
pub struct Dispatcher<'a> {
    registry: &'a SubjectRegistry,
    config: &'a InterpreterConfig,
}

impl<'a> Dispatcher<'a> {
    /// Creates a dispatcher over the current registry.
    #[must_use]
    pub fn new(registry: &'a SubjectRegistry, config: &'a InterpreterConfig) -> Self {
        Self { registry, config }
    }

    /// Performs the effect for `route`.
    ///
    /// Inventory mutations are written to `inventories` directly; the scene
    /// request and callback are returned in the [`Outcome`] for the host.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::AlreadyHeld`] when taking something already
    /// held, and [`Rejection::Unresolved`] when the entry validation
    /// accepted cannot be found again.
    pub fn execute(
        &self,
        route: Route,
        command: &Command<'_>,
        inventories: &mut dyn InventoryStore,
    ) -> Result<Outcome, Rejection> {
        let outcome = Outcome::accepted(command.action.clone(), command.subject_names());

        match route {
            Route::Go => {
                let subject = self.sole(command)?;
                let target = subject
                    .capabilities
                    .go
                    .as_ref()
                    .ok_or_else(|| unresolved(command, subject))?;
                Ok(outcome.with_scene(SceneRequest::Transition(target.clone())))
            }
            Route::Look => {
                let subject = self.sole(command)?;
                let text = subject
                    .capabilities
                    .look
                    .as_ref()
                    .ok_or_else(|| unresolved(command, subject))?;
                Ok(outcome.with_message(text.clone()))
            }
            Route::Take => self.take(command, outcome, inventories),
            Route::Remember => {
                let subject = self.sole(command)?;
                let remember = subject
                    .capabilities
                    .remember
                    .as_ref()
                    .ok_or_else(|| unresolved(command, subject))?;
                let bank = memory_bank(subject, self.config);
                inventories.inventory_mut(bank).add(&subject.name);
                Ok(outcome
                    .with_message(remember.description.clone())
                    .with_callback(remember.on_trigger.clone())
                    .with_inventory_change(InventoryChange::Added {
                        inventory: bank.to_string(),
                        item: subject.name.clone(),
                    }))
            }
            Route::Drop => {
                let subject = self.sole(command)?;
                let inventory = take_inventory(subject, self.config);
                inventories.inventory_mut(inventory).remove(&subject.name);
                Ok(outcome
                    .with_message(DROP_MESSAGE)
                    .with_scene(SceneRequest::Rerender)
                    .with_inventory_change(InventoryChange::Removed {
                        inventory: inventory.to_string(),
                        item: subject.name.clone(),
                    }))
            }
            Route::Forget => {
                let subject = self.sole(command)?;
                let bank = memory_bank(subject, self.config);
                inventories.inventory_mut(bank).remove(&subject.name);
                Ok(outcome
                    .with_message(FORGET_MESSAGE)
                    .with_inventory_change(InventoryChange::Removed {
                        inventory: bank.to_string(),
                        item: subject.name.clone(),
                    }))
            }
            Route::Use => {
                let (first, second) = command.pair().ok_or_else(|| Rejection::Unresolved {
                    action: command.action.to_string(),
                    subject: command.subject_names().join(", "),
                })?;
                let entry = SubjectResolver::resolve_use_action(first, second).ok_or_else(|| {
                    Rejection::NoUsePairing {
                        first: first.name.clone(),
                        second: second.name.clone(),
                    }
                })?;
                Ok(outcome
                    .with_message(entry.description.clone())
                    .with_callback(entry.on_trigger.clone()))
            }
            Route::Help => Ok(outcome.with_message(HelpComposer::compose(self.registry))),
            Route::Custom => {
                let subject = self.sole(command)?;
                let custom = SubjectResolver::resolve_custom_action(
                    command.action.as_str(),
                    subject,
                    self.registry,
                )
                .ok_or_else(|| unresolved(command, subject))?;
                Ok(outcome
                    .with_message(custom.description.clone())
                    .with_callback(custom.on_trigger.clone()))
            }
        }
    }

    fn take(
        &self,
        command: &Command<'_>,
        outcome: Outcome,
        inventories: &mut dyn InventoryStore,
    ) -> Result<Outcome, Rejection> {
        let subject = self.sole(command)?;
        let take = subject
            .capabilities
            .take
            .as_ref()
            .ok_or_else(|| unresolved(command, subject))?;

        if !take.enabled {
            return Ok(outcome.with_message(take.disabled_description.clone()));
        }

        let inventory = take_inventory(subject, self.config);
        if inventories.holds(inventory, &subject.name) {
            debug!("{} already in {inventory}", subject.name);
            return Err(Rejection::AlreadyHeld {
                subject: subject.name.clone(),
                inventory: inventory.to_string(),
            });
        }

        inventories.inventory_mut(inventory).add(&subject.name);
        Ok(outcome
            .with_message(take.description.clone())
            .with_scene(SceneRequest::Rerender)
            .with_inventory_change(InventoryChange::Added {
                inventory: inventory.to_string(),
                item: subject.name.clone(),
            }))
    }

    #[allow(clippy::unused_self)]
    fn sole<'r>(&self, command: &Command<'r>) -> Result<&'r Subject, Rejection> {
        command.sole_subject().ok_or_else(|| Rejection::Unresolved {
            action: command.action.to_string(),
            subject: command.subject_names().join(", "),
        })
    }
}

fn unresolved(command: &Command<'_>, subject: &Subject) -> Rejection {
    Rejection::Unresolved {
        action: command.action.to_string(),
        subject: subject.name.clone(),
    }
}
