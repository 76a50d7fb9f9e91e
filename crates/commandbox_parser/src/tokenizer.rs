//! Input tokenization.
//!
//! Splits a raw command line into its verb and the free text after it.

use crate::action::Action;

/// A raw line split into verb and remainder, both lower-cased.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLine {
    /// The first whitespace-delimited token.
    pub verb: String,
    /// Everything after the first whitespace run, or empty.
    pub remainder: String,
}

impl CommandLine {
    /// Returns the canonical action for the verb.
    #[must_use]
    pub fn action(&self) -> Action {
        Action::normalize(&self.verb)
    }
}

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Splits a raw input line into verb and remainder.
    ///
    /// - Lower-cases the whole line
    /// - Skips leading whitespace
    /// - A line with a single word has an empty remainder
    #[must_use]
    pub fn split(input: &str) -> CommandLine {
        let lowered = input.to_lowercase();
        let trimmed = lowered.trim();

        match trimmed.split_once(char::is_whitespace) {
            Some((verb, rest)) => CommandLine {
                verb: verb.to_string(),
                remainder: rest.trim_start().to_string(),
            },
            None => CommandLine {
                verb: trimmed.to_string(),
                remainder: String::new(),
            },
        }
    }
}
