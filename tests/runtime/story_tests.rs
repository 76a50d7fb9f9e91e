//! Story loading tests.

use commandbox_foundation::ErrorKind;
use commandbox_runtime::{CallbackEffect, Story};

#[test]
fn minimal_story() {
    let story = Story::from_toml_str("start = \"void\"\n[[scenes]]\nid = \"void\"\n").unwrap();
    assert!(story.title.is_empty());
    assert!(story.scene("void").unwrap().subjects.is_empty());
    assert!(story.callbacks.is_empty());
}

#[test]
fn subject_capabilities_read_from_flat_fields() {
    let story = Story::from_toml_str(
        r#"
start = "yard"

[[scenes]]
id = "yard"

[[scenes.subjects]]
name = "well"
keywords = ["well"]
secret = true
look = "Deep."
remember = { inventory = "notes" }
requires_flag = "dawn"

[[scenes.subjects.custom_actions]]
keywords = ["shout"]
"#,
    )
    .unwrap();

    let decl = &story.scene("yard").unwrap().subjects[0];
    assert_eq!(decl.requires_flag.as_deref(), Some("dawn"));
    assert!(!decl.hidden_when_held);

    let well = &decl.subject;
    assert!(well.secret);
    assert_eq!(well.capabilities.look.as_deref(), Some("Deep."));
    let remember = well.capabilities.remember.as_ref().unwrap();
    assert_eq!(remember.description, "You'll never forget it.");
    assert_eq!(remember.inventory.as_deref(), Some("notes"));
    assert_eq!(well.capabilities.custom_actions[0].description, "You do the thing.");
}

#[test]
fn every_effect_kind_parses() {
    let story = Story::from_toml_str(
        r#"
start = "a"
[[scenes]]
id = "a"

[callbacks.all]
effects = [
    { say = "Hi." },
    { set_flag = "f" },
    { clear_flag = "f" },
    { give = { inventory = "bag", item = "apple" } },
    { discard = { inventory = "bag", item = "apple" } },
    { goto = "a" },
]
"#,
    )
    .unwrap();

    let effects = &story.callback("all").unwrap().effects;
    assert_eq!(effects.len(), 6);
    assert_eq!(effects[2], CallbackEffect::ClearFlag("f".to_string()));
    assert!(matches!(&effects[4], CallbackEffect::Discard { item, .. } if item == "apple"));
}

#[test]
fn goto_target_must_exist() {
    let err = Story::from_toml_str(
        "start = \"a\"\n[[scenes]]\nid = \"a\"\n[callbacks.leave]\neffects = [{ goto = \"b\" }]\n",
    )
    .unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownScene("b".to_string()));
}

#[test]
fn use_trigger_must_name_a_callback() {
    let err = Story::from_toml_str(
        r#"
start = "a"
[[scenes]]
id = "a"
[[scenes.subjects]]
name = "key"
[[scenes.subjects.uses]]
partner = "door"
on_trigger = "open"
"#,
    )
    .unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownCallback("open".to_string()));
}

#[test]
fn load_missing_file() {
    let err = Story::load("/nonexistent/story.toml").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IoError(_)));
}
