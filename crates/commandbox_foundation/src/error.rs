//! Error types for the Commandbox system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! These are host and authoring failures. A command the player types that
//! does not make sense is not an [`Error`]; the interpreter reports it as a
//! rejection and the player simply tries again.

use std::fmt;

use thiserror::Error;

/// The main error type for Commandbox operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a duplicate subject error.
    #[must_use]
    pub fn duplicate_subject(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateSubject(name.into()))
    }

    /// Creates an unknown scene error.
    #[must_use]
    pub fn unknown_scene(id: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownScene(id.into()))
    }

    /// Creates an unknown callback error.
    #[must_use]
    pub fn unknown_callback(id: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCallback(id.into()))
    }

    /// Creates a story format error.
    #[must_use]
    pub fn story_format(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::StoryFormat(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Two subjects with the same name were registered in one scene.
    #[error("duplicate subject: {0}")]
    DuplicateSubject(String),

    /// A scene identifier does not name any scene in the story.
    #[error("unknown scene: {0}")]
    UnknownScene(String),

    /// A callback handle does not name any registered callback.
    #[error("unknown callback: {0}")]
    UnknownCallback(String),

    /// Story source could not be parsed or failed validation.
    #[error("story format error: {0}")]
    StoryFormat(String),

    /// Encoding or decoding of saved state failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Reading or writing a file failed.
    #[error("io error: {0}")]
    IoError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or story name.
    pub source: Option<String>,
    /// Scene being loaded or entered when the error occurred.
    pub scene: Option<String>,
    /// Enclosing declarations, innermost last.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the scene.
    #[must_use]
    pub fn with_scene(mut self, scene: impl Into<String>) -> Self {
        self.scene = Some(scene.into());
        self
    }

    /// Adds a frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if let Some(scene) = &self.scene {
            if self.source.is_some() {
                write!(f, " ")?;
            }
            write!(f, "in scene {scene}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
