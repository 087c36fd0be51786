//! Command-line interface for typeset
//!
//! Parses flags, merges them with the optional config file, validates the
//! result against the engine, reads the input and hands it to the dispatcher.

use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches, Parser};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_config, resolve_prefs};
use crate::dispatch::dispatch;
use crate::domain::{HtmlEntityLayer, PrefsLayer};
use crate::engine::{BuiltinEngine, Engine};
use crate::input::InputSource;

mod utils;

use utils::parse_list;

/// Fix typography in text: dashes, spaces, symbols and HTML entities
#[derive(Parser, Debug)]
#[command(name = "typeset")]
#[command(author, version, about, long_about = None)]
#[command(override_usage = "typeset [OPTIONS] <FILE>\n       typeset [OPTIONS] --stdin")]
pub struct Cli {
    /// Text file to process
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Set the locale for rules (separated by commas)
    #[arg(short = 'l', long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Disable rules (separated by commas)
    #[arg(short = 'd', long, value_name = "RULE")]
    pub disable_rule: Option<String>,

    /// Enable rules (separated by commas)
    #[arg(short = 'e', long, value_name = "RULE")]
    pub enable_rule: Option<String>,

    /// Lint text with selected rules instead of rewriting it
    #[arg(long)]
    pub lint: bool,

    /// Process text provided on standard input
    #[arg(long)]
    pub stdin: bool,

    /// Filename to report for text read from standard input
    #[arg(long, value_name = "FILE")]
    pub stdin_filename: Option<String>,

    /// Use preferences from this JSON file
    #[arg(long, value_name = "FILE", env = "TYPESET_CONFIG")]
    pub config: Option<PathBuf>,

    /// HTML entities as: "digit" - &#160;, "name" - &nbsp;, "default" - UTF-8 symbols
    #[arg(long, value_name = "TYPE")]
    pub html_entity_type: Option<String>,

    /// Convert only invisible symbols to the selected entity type
    #[arg(long)]
    pub html_entity_only_invisible: bool,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The command-line precedence layer.
    pub fn prefs_layer(&self) -> PrefsLayer {
        let html_entity = if self.html_entity_type.is_some() || self.html_entity_only_invisible {
            Some(HtmlEntityLayer {
                kind: self.html_entity_type.clone(),
                only_invisible: self.html_entity_only_invisible.then_some(true),
            })
        } else {
            None
        };

        PrefsLayer {
            locale: parse_list(&self.locale),
            enable_rule: parse_list(&self.enable_rule),
            disable_rule: parse_list(&self.disable_rule),
            html_entity,
        }
    }

    fn input_source(&self) -> Result<InputSource, CliError> {
        if self.stdin {
            return Ok(InputSource::Stdin);
        }
        match &self.file {
            Some(path) => Ok(InputSource::File(path.clone())),
            None => Err(CliError::MissingFile(Cli::command().render_usage().to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Error: file isn't specified.\n\n{0}")]
    MissingFile(String),
}

/// Build the clap command with the engine's locale list in the help text.
fn parse_args(engine: &dyn Engine) -> Cli {
    let locales = engine.locales().join("\", \"");
    let command = Cli::command().mut_arg("locale", |arg| {
        arg.help(format!(
            "Set the locale for rules (separated by commas). Available locales: \"{}\"",
            locales
        ))
    });
    let matches = command.get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit())
}

pub fn run() -> Result<()> {
    let engine = BuiltinEngine::new();
    let cli = parse_args(&engine);

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(&cli, &engine, stdin.lock(), &mut stdout.lock())
}

/// One full run: resolve preferences, read the input, dispatch.
///
/// Fails before writing anything to `out` when the arguments, preferences or
/// input are unusable.
pub fn execute<R: Read, W: Write>(
    cli: &Cli,
    engine: &dyn Engine,
    stdin: R,
    out: &mut W,
) -> Result<()> {
    let source = cli.input_source()?;

    let config = load_config(cli.config.as_deref());
    let prefs = resolve_prefs(&cli.prefs_layer(), cli.lint, config.as_ref()).validate(engine)?;

    let filename = match &source {
        InputSource::File(path) => Some(path.display().to_string()),
        InputSource::Stdin => cli.stdin_filename.clone(),
    };
    let prefs = prefs.with_filename(filename);
    tracing::debug!("Resolved preferences: {:?}", prefs);

    let text = source.read(stdin)?;

    dispatch(engine, &text, &prefs, out).context("Error: cannot write output.")
}
