use crate::constants::{exit_codes, verbosity};
use crate::error::{Error, Result};
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for antdg.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Scaffold kind to generate, eg. `module`, `page` or `component`.
    #[arg(value_name = "KIND")]
    pub kind: String,

    /// File or directory the generation starts from. Its location inside the
    /// project becomes the `--path` option.
    #[arg(value_name = "CONTEXT_PATH")]
    pub context_path: Option<PathBuf>,

    /// Candidate project folder (repeatable). Defaults to the current directory.
    #[arg(short, long = "workspace", value_name = "DIR")]
    pub workspaces: Vec<PathBuf>,

    /// Config file to use instead of `antdg.{json,yaml,yml}` in the current directory.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// How many times to look for the generated file.
    #[arg(long = "max-attempts", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: Option<u32>,

    /// Milliseconds between two looks for the generated file.
    #[arg(long = "interval-ms")]
    pub interval_ms: Option<u64>,

    /// Print the command instead of launching it.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Answer the questionnaire from `--name` and `--option` without prompting.
    #[arg(short, long, requires = "name")]
    pub yes: bool,

    /// Name, or path with name, of what to generate (with `--yes`).
    #[arg(short, long)]
    pub name: Option<String>,

    /// Extra option as NAME or NAME=VALUE (with `--yes`, repeatable).
    #[arg(short, long = "option", value_name = "NAME[=VALUE]", requires = "yes")]
    pub options: Vec<String>,
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

/// Splits a `--option` argument into its name and optional value.
/// A leading `--` on the name is accepted.
pub fn parse_option_arg(raw: &str) -> Result<(String, Option<String>)> {
    let (name, value) = match raw.split_once('=') {
        Some((name, value)) => (name, Some(value.trim().to_string())),
        None => (raw, None),
    };
    let name = name.trim().trim_start_matches("--");
    if name.is_empty() || name.contains(char::is_whitespace) {
        return Err(Error::InvalidOptionArg(raw.to_string()));
    }
    Ok((name.to_string(), value.filter(|value| !value.is_empty())))
}
