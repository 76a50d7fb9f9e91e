//! Subject resolution tests.

use commandbox_parser::{CustomAction, Subject, SubjectRegistry, SubjectResolver, UsePartner};

fn registry(subjects: Vec<Subject>) -> SubjectRegistry {
    let mut registry = SubjectRegistry::new();
    for subject in subjects {
        registry.register(subject).unwrap();
    }
    registry
}

fn names(subjects: &[&Subject]) -> Vec<String> {
    subjects.iter().map(|s| s.name.clone()).collect()
}

#[test]
fn subject_matched_once_for_several_keywords() {
    let registry = registry(vec![Subject::new("key").with_keywords(["key", "gold key"])]);
    let found = SubjectResolver::resolve("the gold key", &registry);
    assert_eq!(names(&found), vec!["key"]);
}

#[test]
fn results_follow_registry_order() {
    let registry = registry(vec![
        Subject::new("key").with_keywords(["key"]),
        Subject::new("door").with_keywords(["door"]),
    ]);
    let found = SubjectResolver::resolve("door with the key", &registry);
    assert_eq!(names(&found), vec!["key", "door"]);
}

#[test]
fn matching_is_substring_based() {
    let registry = registry(vec![Subject::new("key").with_keywords(["key"])]);
    assert_eq!(SubjectResolver::resolve("keyhole", &registry).len(), 1);
    assert!(SubjectResolver::resolve("lock", &registry).is_empty());
}

#[test]
fn mixed_case_keywords_match() {
    let registry = registry(vec![Subject::new("statue").with_keywords(["Statue"])]);
    assert_eq!(SubjectResolver::resolve("the statue", &registry).len(), 1);
}

#[test]
fn empty_remainder_matches_nothing() {
    let registry = registry(vec![Subject::new("key").with_keywords(["key"])]);
    assert!(SubjectResolver::resolve("", &registry).is_empty());
}

#[test]
fn empty_keywords_never_match() {
    let registry = registry(vec![Subject::new("ghost").with_keywords([""])]);
    assert!(SubjectResolver::resolve("anything at all", &registry).is_empty());
}

#[test]
fn custom_action_first_declared_wins() {
    let registry = registry(vec![
        Subject::new("drum")
            .with_custom_action(CustomAction::new(["hit", "beat"]).with_description("Boom."))
            .with_custom_action(CustomAction::new(["beat"]).with_description("Bam.")),
    ]);
    let drum = registry.get("drum").unwrap();
    let found = SubjectResolver::resolve_custom_action("beat", drum, &registry).unwrap();
    assert_eq!(found.description, "Boom.");
    assert!(SubjectResolver::resolve_custom_action("kick", drum, &registry).is_none());
}

#[test]
fn custom_action_needs_registered_subject() {
    let registry = SubjectRegistry::new();
    let stray = Subject::new("drum").with_custom_action(CustomAction::new(["hit"]));
    assert!(SubjectResolver::resolve_custom_action("hit", &stray, &registry).is_none());
}

#[test]
fn use_lookup_checks_both_directions() {
    let key = Subject::new("key").with_use(UsePartner::new("door").with_description("Open."));
    let door = Subject::new("door");

    let forward = SubjectResolver::resolve_use_action(&key, &door).unwrap();
    let backward = SubjectResolver::resolve_use_action(&door, &key).unwrap();
    assert_eq!(forward.description, "Open.");
    assert_eq!(backward.description, "Open.");
}

#[test]
fn use_lookup_prefers_first_subject() {
    let key = Subject::new("key").with_use(UsePartner::new("door").with_description("From key."));
    let door = Subject::new("door").with_use(UsePartner::new("key").with_description("From door."));

    let entry = SubjectResolver::resolve_use_action(&key, &door).unwrap();
    assert_eq!(entry.description, "From key.");
}
