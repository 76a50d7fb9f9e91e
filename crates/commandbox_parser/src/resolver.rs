//! Subject, custom-action, and use-partner resolution.
//!
//! Matching is deliberately simple: a subject is mentioned when any of its
//! keywords occurs as a substring of the text after the verb. Custom and
//! use lookups are ordered scans that stop at the first match.

use crate::registry::SubjectRegistry;
use crate::subject::{CustomAction, Subject, UsePartner};

/// Resolves subjects and their action entries.
pub struct SubjectResolver;

impl SubjectResolver {
    /// Finds every subject mentioned in the remainder text.
    ///
    /// Results follow registry order, not text order, and each subject
    /// appears at most once no matter how many of its keywords match.
    /// No match is an empty list.
    #[must_use]
    pub fn resolve<'r>(remainder: &str, registry: &'r SubjectRegistry) -> Vec<&'r Subject> {
        let text = remainder.to_lowercase();
        if text.is_empty() {
            return Vec::new();
        }

        registry
            .iter()
            .filter(|subject| Self::mentions(&text, subject))
            .collect()
    }

    /// Returns true if any non-empty keyword of the subject occurs in `text`.
    fn mentions(text: &str, subject: &Subject) -> bool {
        subject
            .keywords
            .iter()
            .filter(|keyword| !keyword.is_empty())
            .any(|keyword| text.contains(keyword.to_lowercase().as_str()))
    }

    /// Finds the custom action on `subject` that responds to `verb`.
    ///
    /// The lookup goes through the registry entry with the subject's name,
    /// so a subject that is no longer registered resolves to `None`. When
    /// two custom actions share the verb, the first declared wins.
    #[must_use]
    pub fn resolve_custom_action<'r>(
        verb: &str,
        subject: &Subject,
        registry: &'r SubjectRegistry,
    ) -> Option<&'r CustomAction> {
        registry
            .get(&subject.name)?
            .capabilities
            .custom_actions
            .iter()
            .find(|custom| custom.responds_to(verb))
    }

    /// Finds the use entry pairing `first` with `second`.
    ///
    /// Checks `first`'s partners for `second`, then `second`'s partners for
    /// `first`. If both declare each other, `first`'s entry wins.
    #[must_use]
    pub fn resolve_use_action<'s>(
        first: &'s Subject,
        second: &'s Subject,
    ) -> Option<&'s UsePartner> {
        Self::partner_entry(first, second).or_else(|| Self::partner_entry(second, first))
    }

    fn partner_entry<'s>(subject: &'s Subject, partner: &Subject) -> Option<&'s UsePartner> {
        subject
            .capabilities
            .uses
            .iter()
            .find(|entry| entry.partner == partner.name)
    }
}
