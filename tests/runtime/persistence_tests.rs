//! Save and load tests.

use commandbox_foundation::ErrorKind;
use commandbox_parser::InterpreterConfig;
use commandbox_runtime::{Session, Story, from_bytes, to_bytes};

const STORY: &str = r#"
start = "shop"

[[scenes]]
id = "shop"

[[scenes.subjects]]
name = "coin"
keywords = ["coin"]
take = { enabled = true }
hidden_when_held = true

[[scenes.subjects]]
name = "door"
keywords = ["door"]
go = "street"

[[scenes]]
id = "street"

[[scenes.subjects]]
name = "door"
keywords = ["door"]
go = "shop"
"#;

fn session() -> Session {
    Session::new(Story::from_toml_str(STORY).unwrap(), InterpreterConfig::default()).unwrap()
}

#[test]
fn save_then_load_restores_progress() {
    let mut played = session();
    played.submit("take coin");
    played.submit("go door");

    let path = std::env::temp_dir().join("commandbox_persistence_test.msgpack");
    played.save(&path).unwrap();

    let mut resumed = session();
    resumed.load(&path).unwrap();
    assert_eq!(resumed.scene_id(), "street");
    assert_eq!(resumed.snapshot(), played.snapshot());

    resumed.submit("go door");
    assert_eq!(resumed.visible_subjects(), vec!["door"]);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn save_from_another_story_is_refused() {
    let mut state = session().snapshot();
    state.scene = "moon".to_string();
    let bytes = to_bytes(&state).unwrap();

    let mut session = session();
    let err = session.restore(from_bytes(&bytes).unwrap()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownScene("moon".to_string()));
}

#[test]
fn load_missing_save() {
    let err = session().load("/nonexistent/save.msgpack").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IoError(_)));
}
