//! Error type tests.

use commandbox_foundation::{Error, ErrorContext, ErrorKind};

#[test]
fn kinds_display_their_payload() {
    assert_eq!(
        Error::unknown_callback("ring-bell").to_string(),
        "unknown callback: ring-bell"
    );
    assert_eq!(
        Error::story_format("missing start").to_string(),
        "story format error: missing start"
    );
    assert_eq!(
        Error::new(ErrorKind::IoError("disk full".into())).to_string(),
        "io error: disk full"
    );
}

#[test]
fn context_is_optional() {
    let err = Error::unknown_scene("attic");
    assert!(err.context.is_none());

    let err = err.with_context(ErrorContext::new().with_source("cellar.toml"));
    assert_eq!(format!("{}", err.context.unwrap()), "at cellar.toml");
}

#[test]
fn errors_are_std_errors() {
    fn boxed(err: Error) -> Box<dyn std::error::Error> {
        Box::new(err)
    }
    let err = boxed(Error::duplicate_subject("key"));
    assert_eq!(err.to_string(), "duplicate subject: key");
}
