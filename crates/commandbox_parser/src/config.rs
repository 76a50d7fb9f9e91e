//! Configuration for the interpreter.

/// Inventory used by `take` and `drop` when a subject does not name one.
pub const DEFAULT_TAKE_INVENTORY: &str = "inventory";

/// Inventory used by `remember` and `forget` when a subject does not name one.
pub const DEFAULT_MEMORY_BANK: &str = "memorybank";

/// Configuration for the interpreter.
///
/// Controls the help command, error verbosity, and inventory defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Whether a bare `help` lists subjects and commands.
    pub help_enabled: bool,

    /// Whether rejected commands produce an `ERROR: ...` message.
    pub verbose_errors: bool,

    /// Inventory for `take`/`drop` when the subject names none.
    pub take_inventory: String,

    /// Inventory for `remember`/`forget` when the subject names none.
    pub memory_bank: String,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            help_enabled: true,
            verbose_errors: false,
            take_inventory: DEFAULT_TAKE_INVENTORY.to_string(),
            memory_bank: DEFAULT_MEMORY_BANK.to_string(),
        }
    }
}

impl InterpreterConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enable/disable the help command.
    #[must_use]
    pub fn with_help(mut self, enabled: bool) -> Self {
        self.help_enabled = enabled;
        self
    }

    /// Builder method to enable/disable verbose error messages.
    #[must_use]
    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }

    /// Builder method to set the default take inventory.
    #[must_use]
    pub fn with_take_inventory(mut self, name: impl Into<String>) -> Self {
        self.take_inventory = name.into();
        self
    }

    /// Builder method to set the default memory bank.
    #[must_use]
    pub fn with_memory_bank(mut self, name: impl Into<String>) -> Self {
        self.memory_bank = name.into();
        self
    }

    /// Returns the inventory `take`/`drop` use for a declared name.
    #[must_use]
    pub fn take_inventory_for<'a>(&'a self, declared: Option<&'a str>) -> &'a str {
        declared.unwrap_or(&self.take_inventory)
    }

    /// Returns the memory bank `remember`/`forget` use for a declared name.
    #[must_use]
    pub fn memory_bank_for<'a>(&'a self, declared: Option<&'a str>) -> &'a str {
        declared.unwrap_or(&self.memory_bank)
    }
}
