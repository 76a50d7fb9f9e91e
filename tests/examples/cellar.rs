//! The Cellar: a locked door, a key, a secret inscription and a hall.
//!
//! Demonstrates:
//! - Taking, dropping and re-taking an item
//! - A use pairing that sets a flag and swaps the scene's subjects
//! - Remembering a secret subject with a callback message
//! - A custom action whose callback gives an item

use std::path::PathBuf;

use commandbox_foundation::InventoryStore;
use commandbox_parser::{InterpreterConfig, Rejection};
use commandbox_runtime::{Session, Story};

// =============================================================================
// Setup
// =============================================================================

fn story_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("stories/cellar.toml")
}

fn start() -> Session {
    let story = Story::load(story_path()).expect("cellar story loads");
    Session::new(story, InterpreterConfig::default()).expect("session starts")
}

// =============================================================================
// Walkthrough
// =============================================================================

#[test]
fn opening_scene() {
    let session = start();
    assert_eq!(session.story().title, "The Cellar");
    assert_eq!(session.scene_id(), "cellar");
    assert_eq!(session.visible_subjects(), vec!["key", "lamp", "door"]);
}

#[test]
fn help_lists_visible_things_and_all_commands() {
    let mut session = start();
    session.submit("help");
    assert_eq!(
        session.message(),
        Some(
            "Known things to interact with: key, lamp, door\n\
             Valid commands: look, take, use, kick, push, remember"
        )
    );
}

#[test]
fn the_lamp_stays_on_its_hook() {
    let mut session = start();
    let outcome = session.submit("take the lantern");
    assert!(outcome.is_accepted());
    assert_eq!(
        session.message(),
        Some("The hook is rusted shut around its handle.")
    );
    assert!(!session.holds("inventory", "lamp"));
}

#[test]
fn key_can_be_taken_dropped_and_retaken() {
    let mut session = start();

    session.submit("pick up the gold key");
    assert_eq!(session.message(), Some("You pocket the key."));

    let again = session.submit("take key");
    assert!(matches!(again.rejection(), Some(Rejection::AlreadyHeld { .. })));

    session.submit("drop key");
    assert_eq!(session.message(), Some("You drop it."));
    assert!(!session.holds("inventory", "key"));

    session.submit("take key");
    assert!(session.holds("inventory", "key"));
}

#[test]
fn unlocking_the_door_opens_the_way_north() {
    let mut session = start();

    assert!(session.submit("go north").signals_error());
    session.submit("kick door");
    assert_eq!(session.message(), Some("The door does not budge."));

    session.submit("use the key on the door");
    assert_eq!(session.message(), Some("The key turns with a grinding click."));
    assert!(session.has_flag("door-open"));
    assert_eq!(session.visible_subjects(), vec!["key", "lamp", "doorway"]);

    session.submit("go north");
    assert_eq!(session.scene_id(), "hall");
}

#[test]
fn the_inscription_is_secret_but_memorable() {
    let mut session = start();

    session.submit("examine the inscription");
    assert_eq!(session.message(), Some("Scratched into the stone: LUX IN TENEBRIS."));

    session.submit("remember the words");
    assert_eq!(session.message(), Some("LUX IN TENEBRIS. You won't forget it."));
    assert!(session.holds("memorybank", "inscription"));

    session.submit("forget inscription");
    assert_eq!(session.message(), Some("It's forgotten."));
    assert!(!session.holds("memorybank", "inscription"));
}

#[test]
fn the_hall_rewards_curiosity() {
    let mut session = start();
    session.submit("use key door");
    session.submit("go doorway");
    assert_eq!(session.visible_subjects(), vec!["stairs", "coin", "tapestry"]);

    session.submit("lift the tapestry");
    assert_eq!(
        session.message(),
        Some("Behind the tapestry, a folded note. You take it.")
    );
    assert!(session.holds("inventory", "note"));

    session.submit("take coin");
    assert_eq!(session.visible_subjects(), vec!["stairs", "tapestry"]);

    session.submit("go down the stairs");
    assert_eq!(session.scene_id(), "cellar");
}
