//! The help listing.

use crate::registry::SubjectRegistry;

/// Shown in place of an empty list.
pub const NOTHING: &str = "Nothing.";

/// Composes the text shown for a bare `help`.
pub struct HelpComposer;

impl HelpComposer {
    /// Lists the non-secret subjects and every available action keyword.
    ///
    /// ```text
    /// Known things to interact with: key, door
    /// Valid commands: look, take, use, kick
    /// ```
    #[must_use]
    pub fn compose(registry: &SubjectRegistry) -> String {
        let subjects = registry.primary_keywords(false);
        let actions = registry.available_actions();
        format!(
            "Known things to interact with: {}\nValid commands: {}",
            Self::join(&subjects),
            Self::join(&actions)
        )
    }

    fn join(items: &[&str]) -> String {
        if items.is_empty() {
            NOTHING.to_string()
        } else {
            items.join(", ")
        }
    }
}
