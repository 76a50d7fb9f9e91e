//! Command validity rules.
//!
//! A subject supports an action exactly when it declares it. The two
//! exceptions are `drop` and `forget`, which nobody declares: they are
//! legal when the subject currently sits in the matching inventory, which
//! is what makes `take` and `remember` reversible.

use commandbox_foundation::InventoryStore;
use thiserror::Error;

use crate::action::Action;
use crate::command::Command;
use crate::config::InterpreterConfig;
use crate::registry::SubjectRegistry;
use crate::resolver::SubjectResolver;
use crate::subject::Subject;

/// Why a command was refused.
///
/// The `Display` text is the diagnostic shown when verbose errors are on.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    /// `drop` on a subject that is not held.
    #[error("You cannot drop {0} because it's not in your inventory.")]
    NotInInventory(String),

    /// `forget` on a subject that is not remembered.
    #[error("You cannot forget {0} because it's not in your memory bank.")]
    NotInMemoryBank(String),

    /// `use` with a single subject.
    #[error("The USE action requires two subjects. Only one was found.")]
    UseNeedsTwoSubjects,

    /// The subject declares nothing for the action.
    #[error("The {action} action is not defined in the options for {subject}.")]
    UndefinedAction {
        /// The action the player typed.
        action: String,
        /// The subject it was aimed at.
        subject: String,
    },

    /// Neither subject lists the other as a use partner.
    #[error("Neither {first} nor {second} has the other defined in their USE property.")]
    NoUsePairing {
        /// First subject in registry order.
        first: String,
        /// Second subject in registry order.
        second: String,
    },

    /// No subject, or a subject count the action cannot take.
    #[error("No valid subjects found in the command.")]
    NoValidSubject,

    /// `take` on a subject already in its inventory.
    #[error("{subject} is already in {inventory}.")]
    AlreadyHeld {
        /// The subject.
        subject: String,
        /// The inventory holding it.
        inventory: String,
    },

    /// Dispatch could not find the entry validation accepted.
    #[error("The {action} action could not be resolved for {subject}.")]
    Unresolved {
        /// The action being dispatched.
        action: String,
        /// The subject it was aimed at.
        subject: String,
    },
}

/// Which effect an accepted command leads to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Transition to the subject's `go` target.
    Go,
    /// Show the subject's `look` text.
    Look,
    /// Put the subject into its inventory.
    Take,
    /// Put the subject into its memory bank.
    Remember,
    /// Remove the subject from its inventory.
    Drop,
    /// Remove the subject from its memory bank.
    Forget,
    /// Run the use entry pairing two subjects.
    Use,
    /// Show the help listing.
    Help,
    /// Run the subject's matching custom action.
    Custom,
}

/// Decides whether a command is legal.
pub struct CommandValidator<'a> {
    registry: &'a SubjectRegistry,
    config: &'a InterpreterConfig,
}

impl<'a> CommandValidator<'a> {
    /// Creates a validator over the current registry.
    #[must_use]
    pub fn new(registry: &'a SubjectRegistry, config: &'a InterpreterConfig) -> Self {
        Self { registry, config }
    }

    /// Validates a command, returning the route to dispatch on.
    ///
    /// Rules, in order:
    /// 1. One subject: declared capability, then custom action, then the
    ///    inventory checks for `drop`/`forget`.
    /// 2. Two subjects with `use`: either lists the other as a partner.
    /// 3. No subject with `help`, when help is enabled.
    /// 4. Anything else is rejected.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] describing the first rule that failed.
    pub fn validate(
        &self,
        command: &Command<'_>,
        inventories: &dyn InventoryStore,
    ) -> Result<Route, Rejection> {
        if let Some(subject) = command.sole_subject() {
            return self.validate_single(&command.action, subject, inventories);
        }

        if command.action == Action::Use {
            if let Some((first, second)) = command.pair() {
                return match SubjectResolver::resolve_use_action(first, second) {
                    Some(_) => Ok(Route::Use),
                    None => Err(Rejection::NoUsePairing {
                        first: first.name.clone(),
                        second: second.name.clone(),
                    }),
                };
            }
        }

        if command.subjects.is_empty() && command.action == Action::Help && self.config.help_enabled
        {
            return Ok(Route::Help);
        }

        Err(Rejection::NoValidSubject)
    }

    fn validate_single(
        &self,
        action: &Action,
        subject: &Subject,
        inventories: &dyn InventoryStore,
    ) -> Result<Route, Rejection> {
        if let Some(route) = declared_route(action, subject) {
            return Ok(route);
        }

        if SubjectResolver::resolve_custom_action(action.as_str(), subject, self.registry).is_some()
        {
            return Ok(Route::Custom);
        }

        match action {
            Action::Drop => {
                let inventory = take_inventory(subject, self.config);
                if inventories.holds(inventory, &subject.name) {
                    Ok(Route::Drop)
                } else {
                    Err(Rejection::NotInInventory(subject.name.clone()))
                }
            }
            Action::Forget => {
                let bank = memory_bank(subject, self.config);
                if inventories.holds(bank, &subject.name) {
                    Ok(Route::Forget)
                } else {
                    Err(Rejection::NotInMemoryBank(subject.name.clone()))
                }
            }
            Action::Use => Err(Rejection::UseNeedsTwoSubjects),
            _ => Err(Rejection::UndefinedAction {
                action: action.to_string(),
                subject: subject.name.clone(),
            }),
        }
    }
}

/// Route for an action the subject declares as a capability.
///
/// `use` is not listed: a single subject can never satisfy it, whatever
/// partners it declares.
fn declared_route(action: &Action, subject: &Subject) -> Option<Route> {
    let caps = &subject.capabilities;
    let declared = match action {
        Action::Go => caps.go.is_some(),
        Action::Look => caps.look.is_some(),
        Action::Take => caps.take.is_some(),
        Action::Remember => caps.remember.is_some(),
        _ => return None,
    };
    if !declared {
        return None;
    }
    match action {
        Action::Go => Some(Route::Go),
        Action::Look => Some(Route::Look),
        Action::Take => Some(Route::Take),
        _ => Some(Route::Remember),
    }
}

/// The inventory a subject is taken into and dropped from.
pub(crate) fn take_inventory<'a>(subject: &'a Subject, config: &'a InterpreterConfig) -> &'a str {
    config.take_inventory_for(
        subject
            .capabilities
            .take
            .as_ref()
            .and_then(|take| take.inventory.as_deref()),
    )
}

/// The memory bank a subject is remembered into and forgotten from.
pub(crate) fn memory_bank<'a>(subject: &'a Subject, config: &'a InterpreterConfig) -> &'a str {
    config.memory_bank_for(
        subject
            .capabilities
            .remember
            .as_ref()
            .and_then(|remember| remember.inventory.as_deref()),
    )
}
