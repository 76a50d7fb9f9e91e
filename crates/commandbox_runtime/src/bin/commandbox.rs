//! Commandbox CLI entry point.

use commandbox_foundation::Error;
use commandbox_parser::InterpreterConfig;
use commandbox_runtime::{Player, Session, Story};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Why the CLI stopped.
#[derive(Debug, Error)]
enum CliError {
    #[error("{0} requires a file")]
    MissingValue(&'static str),
    #[error("unknown option: {0}")]
    UnknownOption(String),
    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
    #[error("no story file given")]
    NoStory,
    #[error(transparent)]
    Game(#[from] Error),
}

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    story: Option<PathBuf>,
    script: Option<PathBuf>,
    load: Option<PathBuf>,
    verbose_errors: bool,
    no_help_command: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, CliError> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--verbose-errors" => config.verbose_errors = true,
            "--no-help-command" => config.no_help_command = true,
            "--script" => {
                let path = args.next().ok_or(CliError::MissingValue("--script"))?;
                config.script = Some(PathBuf::from(path));
            }
            "--load" => {
                let path = args.next().ok_or(CliError::MissingValue("--load"))?;
                config.load = Some(PathBuf::from(path));
            }
            flag if flag.starts_with('-') => {
                return Err(CliError::UnknownOption(flag.to_string()));
            }
            path => {
                if config.story.is_some() {
                    return Err(CliError::UnexpectedArgument(path.to_string()));
                }
                config.story = Some(PathBuf::from(path));
            }
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), CliError> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("commandbox {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let Some(story_path) = config.story else {
        print_help();
        return Err(CliError::NoStory);
    };

    let story = Story::load(&story_path)?;
    let interpreter_config = InterpreterConfig::new()
        .with_help(!config.no_help_command)
        .with_verbose_errors(config.verbose_errors);
    let mut session = Session::new(story, interpreter_config)?;

    if let Some(save) = &config.load {
        session.load(save)?;
    }

    let mut player = Player::new(session)?;

    if let Some(script) = &config.script {
        player.run_script(script)?;
        return Ok(());
    }

    if config.load.is_some() {
        player = player.without_banner();
    }

    player.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mCommandbox\x1b[0m - Play scene-based interactive fiction

\x1b[1mUSAGE:\x1b[0m
    commandbox [OPTIONS] STORY

\x1b[1mARGUMENTS:\x1b[0m
    STORY                 Story file (TOML) to play

\x1b[1mOPTIONS:\x1b[0m
    -h, --help            Print help information
    -V, --version         Print version information
    --verbose-errors      Explain why a command was not understood
    --no-help-command     Disable the in-game help listing
    --script FILE         Feed commands from FILE and exit
    --load SAVE           Resume from a saved game

\x1b[1mEXAMPLES:\x1b[0m
    commandbox stories/cellar.toml
    commandbox --verbose-errors stories/cellar.toml
    commandbox --script walkthrough.txt stories/cellar.toml

\x1b[1mIN-GAME COMMANDS:\x1b[0m
    :look                 Describe the current scene
    :inventory            List what you carry and remember
    :save PATH            Save progress
    :load PATH            Load progress
    :quit                 Leave the game
    Ctrl+D                Leave the game

Set RUST_LOG=debug to trace how each command is interpreted."
    );
}
