//! Full interpretation cycle tests.

use commandbox_foundation::{CallbackId, Inventories, InventoryStore};
use commandbox_parser::{
    Action, CallbackTable, CustomAction, InventoryChange, Interpreter, InterpreterConfig,
    Rejection, RememberCapability, SceneEngine, SceneRequest, Subject, TakeCapability,
    UsePartner,
};

fn interpreter(subjects: Vec<Subject>) -> Interpreter {
    let mut interpreter = Interpreter::new(InterpreterConfig::default());
    interpreter.register_subjects(subjects).unwrap();
    interpreter
}

fn key() -> Subject {
    Subject::new("key")
        .with_keywords(["key"])
        .with_take(TakeCapability::enabled().with_description("You take the key."))
}

#[test]
fn take_key_then_take_again() {
    let interpreter = interpreter(vec![key()]);
    let mut inv = Inventories::new();

    let outcome = interpreter.interpret("take key", &mut inv);
    assert!(outcome.is_accepted());
    assert_eq!(outcome.message.as_deref(), Some("You take the key."));
    assert_eq!(outcome.scene, Some(SceneRequest::Rerender));
    assert_eq!(
        outcome.inventory_change,
        Some(InventoryChange::Added {
            inventory: "inventory".to_string(),
            item: "key".to_string()
        })
    );
    assert!(inv.holds("inventory", "key"));

    let again = interpreter.interpret("take key", &mut inv);
    assert!(again.signals_error());
    assert!(matches!(
        again.rejection(),
        Some(Rejection::AlreadyHeld { .. })
    ));
    assert!(again.inventory_change.is_none());
    assert_eq!(inv.get("inventory").unwrap().len(), 1);
}

#[test]
fn use_key_on_door_in_either_order() {
    let interpreter = interpreter(vec![
        Subject::new("key")
            .with_keywords(["key"])
            .with_use(UsePartner::new("door").with_description("The key opens the door.")),
        Subject::new("door").with_keywords(["door"]),
    ]);
    let mut inv = Inventories::new();

    for line in ["use key door", "use door key", "use the key on the door"] {
        let outcome = interpreter.interpret(line, &mut inv);
        assert_eq!(
            outcome.message.as_deref(),
            Some("The key opens the door."),
            "line {line:?}"
        );
    }
}

#[test]
fn drop_cycle_is_reversible_and_idempotent() {
    let interpreter = interpreter(vec![key()]);
    let mut inv = Inventories::new();

    assert!(interpreter.interpret("drop key", &mut inv).signals_error());
    assert!(interpreter.interpret("take key", &mut inv).is_accepted());

    let dropped = interpreter.interpret("drop key", &mut inv);
    assert!(dropped.is_accepted());
    assert_eq!(dropped.message.as_deref(), Some("You drop it."));
    assert_eq!(dropped.scene, Some(SceneRequest::Rerender));
    assert!(!inv.holds("inventory", "key"));

    assert!(interpreter.interpret("drop key", &mut inv).signals_error());
}

#[test]
fn remember_and_forget() {
    let interpreter = interpreter(vec![
        Subject::new("song")
            .with_keywords(["song"])
            .with_remember(RememberCapability::default().on_trigger("hum")),
    ]);
    let mut inv = Inventories::new();

    let remembered = interpreter.interpret("remember the song", &mut inv);
    assert_eq!(remembered.message.as_deref(), Some("You'll never forget it."));
    assert_eq!(remembered.callback, Some(CallbackId::new("hum")));
    assert!(remembered.scene.is_none());
    assert!(inv.holds("memorybank", "song"));

    let forgotten = interpreter.interpret("forget song", &mut inv);
    assert_eq!(forgotten.message.as_deref(), Some("It's forgotten."));
    assert!(!inv.holds("memorybank", "song"));
}

#[test]
fn go_requests_a_transition() {
    let interpreter = interpreter(vec![
        Subject::new("stairs").with_keywords(["stairs", "up"]).with_go("attic"),
    ]);
    let outcome = interpreter.interpret("go up", &mut Inventories::new());
    assert_eq!(outcome.action, Action::Go);
    assert_eq!(outcome.subjects, vec!["stairs"]);
    assert_eq!(
        outcome.scene,
        Some(SceneRequest::Transition("attic".to_string()))
    );
    assert!(outcome.message.is_none());
}

#[test]
fn custom_action_runs_its_callback() {
    let interpreter = interpreter(vec![
        Subject::new("bell").with_keywords(["bell"]).with_custom_action(
            CustomAction::new(["ring"])
                .with_description("Dong.")
                .on_trigger("summon"),
        ),
    ]);
    let outcome = interpreter.interpret("Ring the BELL", &mut Inventories::new());
    assert_eq!(outcome.message.as_deref(), Some("Dong."));
    assert_eq!(outcome.callback, Some(CallbackId::new("summon")));
}

#[test]
fn help_listing_hides_secrets_and_duplicates() {
    let interpreter = interpreter(vec![
        Subject::new("key").with_keywords(["key"]).with_look("Gold."),
        Subject::new("door").with_keywords(["door"]).with_look("Oak."),
        Subject::new("crack")
            .with_keywords(["crack"])
            .secret()
            .with_look("Dark."),
    ]);
    let outcome = interpreter.interpret("help", &mut Inventories::new());
    assert_eq!(
        outcome.message.as_deref(),
        Some("Known things to interact with: key, door\nValid commands: look")
    );
}

#[test]
fn help_with_subject_is_rejected() {
    let interpreter = interpreter(vec![key()]);
    assert!(interpreter.interpret("help key", &mut Inventories::new()).signals_error());
}

#[test]
fn disabled_help_is_rejected() {
    let mut interpreter = interpreter(vec![key()]);
    interpreter.config_mut().help_enabled = false;
    assert!(interpreter.interpret("help", &mut Inventories::new()).signals_error());
}

#[test]
fn verbose_errors_explain_the_rejection() {
    let mut interpreter = interpreter(vec![Subject::new("door").with_keywords(["door"])]);
    let mut inv = Inventories::new();

    let quiet = interpreter.interpret("dance", &mut inv);
    assert!(quiet.signals_error());
    assert!(quiet.message.is_none());

    interpreter.config_mut().verbose_errors = true;
    let loud = interpreter.interpret("dance", &mut inv);
    assert_eq!(
        loud.message.as_deref(),
        Some("ERROR: No valid subjects found in the command.")
    );
    let undefined = interpreter.interpret("kick door", &mut inv);
    assert_eq!(
        undefined.message.as_deref(),
        Some("ERROR: The kick action is not defined in the options for door.")
    );
}

/// Host that records what the outcome asks of it.
#[derive(Default)]
struct Host {
    log: Vec<String>,
}

impl SceneEngine for Host {
    fn render_current_scene(&mut self) {
        self.log.push("render".to_string());
    }

    fn transition_to(&mut self, target: &str) {
        self.log.push(format!("enter {target}"));
    }
}

impl CallbackTable for Host {
    fn invoke(&mut self, callback: &CallbackId) {
        self.log.push(format!("invoke {callback}"));
    }
}

#[test]
fn outcomes_apply_to_the_host() {
    let interpreter = interpreter(vec![
        key(),
        Subject::new("trapdoor").with_keywords(["trapdoor"]).with_go("pit"),
    ]);
    let mut inv = Inventories::new();
    let mut host = Host::default();

    interpreter.interpret("take key", &mut inv).apply(&mut host);
    interpreter.interpret("go trapdoor", &mut inv).apply(&mut host);
    interpreter.interpret("dance", &mut inv).apply(&mut host);

    assert_eq!(host.log, vec!["render", "enter pit"]);
}
