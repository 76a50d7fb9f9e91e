//! The interactive player loop.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use commandbox_foundation::{Error, ErrorKind, Result};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// Printed when a line is rejected and produced no message.
pub const ERROR_MARKER: &str = "\x07\x1b[31m?\x1b[0m";

/// What the loop should do after a line.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Print the text, if any, and keep reading.
    Continue(Option<String>),
    /// Stop the loop.
    Quit,
}

/// The interactive player.
pub struct Player<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The story in play.
    session: Session,

    /// Whether to show the title banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Player<RustylineEditor> {
    /// Creates a player with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Player<E> {
    /// Creates a player with the given editor.
    pub fn with_editor(editor: E, session: Session) -> Self {
        Self {
            editor,
            session,
            show_banner: true,
            prompt: "> ".to_string(),
        }
    }

    /// Disables the title banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the loop until `:quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }
        println!("{}", self.describe_scene());

        loop {
            self.editor.set_keywords(self.session.completions());
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            match self.respond(&line) {
                Ok(Reply::Continue(Some(text))) => println!("{text}"),
                Ok(Reply::Continue(None)) => {}
                Ok(Reply::Quit) => break,
                Err(e) => self.print_error(&e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Feeds every line of a script through the loop, echoing each one.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the script cannot be read. Errors from
    /// individual lines are printed and do not stop the script.
    pub fn run_script(&mut self, path: &Path) -> Result<()> {
        let source = fs::read_to_string(path).map_err(|e| {
            Error::new(ErrorKind::IoError(format!(
                "failed to read {}: {e}",
                path.display()
            )))
        })?;

        println!("{}", self.describe_scene());
        for line in source.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            println!("{}{trimmed}", self.prompt);
            match self.respond(trimmed) {
                Ok(Reply::Continue(Some(text))) => println!("{text}"),
                Ok(Reply::Continue(None)) => {}
                Ok(Reply::Quit) => break,
                Err(e) => self.print_error(&e),
            }
        }
        Ok(())
    }

    /// Handles one line: a `:` meta-command or a game command.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown meta-command or a failed save/load.
    pub fn respond(&mut self, line: &str) -> Result<Reply> {
        let trimmed = line.trim();
        if let Some(meta) = trimmed.strip_prefix(':') {
            return self.meta_command(meta);
        }

        let before = self.session.scene_id().to_string();
        let outcome = self.session.submit(trimmed);

        let mut text = self.session.take_message().unwrap_or_default();
        if outcome.signals_error() && text.is_empty() {
            text.push_str(ERROR_MARKER);
        }
        if self.session.scene_id() != before {
            if !text.is_empty() {
                text.push_str("\n\n");
            }
            text.push_str(&self.describe_scene());
        }

        Ok(Reply::Continue((!text.is_empty()).then_some(text)))
    }

    fn meta_command(&mut self, meta: &str) -> Result<Reply> {
        let (name, argument) = match meta.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument.trim()),
            None => (meta, ""),
        };

        match name {
            "quit" | "q" => Ok(Reply::Quit),
            "look" | "l" => Ok(Reply::Continue(Some(self.describe_scene()))),
            "inventory" | "i" => Ok(Reply::Continue(Some(self.describe_inventories()))),
            "save" => {
                let path = Self::require_path(name, argument)?;
                self.session.save(path)?;
                Ok(Reply::Continue(Some(format!("Saved to {argument}."))))
            }
            "load" => {
                let path = Self::require_path(name, argument)?;
                self.session.load(path)?;
                Ok(Reply::Continue(Some(self.describe_scene())))
            }
            other => Err(Error::new(ErrorKind::Internal(format!(
                "unknown command :{other}"
            )))),
        }
    }

    fn require_path<'a>(name: &str, argument: &'a str) -> Result<&'a Path> {
        if argument.is_empty() {
            Err(Error::new(ErrorKind::Internal(format!(
                ":{name} requires a path"
            ))))
        } else {
            Ok(Path::new(argument))
        }
    }

    /// Formats the current scene and what can be seen in it.
    #[must_use]
    pub fn describe_scene(&self) -> String {
        let mut text = format!("\x1b[1m{}\x1b[0m", self.session.scene_text());
        let visible = self.session.visible_subjects();
        if !visible.is_empty() {
            let _ = write!(text, "\nYou notice: {}", visible.join(", "));
        }
        text
    }

    fn describe_inventories(&self) -> String {
        let mut text = String::new();
        for (name, items) in self.session.inventories().iter() {
            if items.is_empty() {
                continue;
            }
            if !text.is_empty() {
                text.push('\n');
            }
            let items: Vec<&str> = items.iter().collect();
            let _ = write!(text, "{name}: {}", items.join(", "));
        }
        if text.is_empty() {
            text.push_str("You carry nothing.");
        }
        text
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Prints the story title.
    fn print_banner(&self) {
        let title = &self.session.story().title;
        if !title.is_empty() {
            println!("\x1b[1;36m{title}\x1b[0m\n");
        }
        let _ = io::stdout().flush();
    }
}
