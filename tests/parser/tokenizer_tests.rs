//! Tokenizer tests.
//!
//! Tests for splitting raw input into verb and remainder.

use commandbox_parser::{Action, InputTokenizer};

#[test]
fn split_simple_command() {
    let line = InputTokenizer::split("take sword");
    assert_eq!(line.verb, "take");
    assert_eq!(line.remainder, "sword");
}

#[test]
fn split_lowers_case() {
    let line = InputTokenizer::split("TAKE The SWORD");
    assert_eq!(line.verb, "take");
    assert_eq!(line.remainder, "the sword");
}

#[test]
fn split_skips_leading_whitespace() {
    let line = InputTokenizer::split("   look    at the door");
    assert_eq!(line.verb, "look");
    assert_eq!(line.remainder, "at the door");
}

#[test]
fn split_single_word() {
    let line = InputTokenizer::split("help");
    assert_eq!(line.verb, "help");
    assert!(line.remainder.is_empty());
}

#[test]
fn split_empty_input() {
    let line = InputTokenizer::split("   ");
    assert!(line.verb.is_empty());
    assert!(line.remainder.is_empty());
}

#[test]
fn synonyms_normalize() {
    assert_eq!(InputTokenizer::split("examine key").action(), Action::Look);
    assert_eq!(InputTokenizer::split("check key").action(), Action::Look);
    assert_eq!(InputTokenizer::split("see key").action(), Action::Look);
    assert_eq!(InputTokenizer::split("pick up key").action(), Action::Take);
}

#[test]
fn unknown_verbs_pass_through() {
    let action = InputTokenizer::split("kick door").action();
    assert_eq!(action, Action::Custom("kick".to_string()));
    assert!(action.is_custom());
    assert_eq!(action.as_str(), "kick");
}

#[test]
fn only_whole_tokens_match() {
    assert_eq!(
        InputTokenizer::split("looking glass").action(),
        Action::Custom("looking".to_string())
    );
}
