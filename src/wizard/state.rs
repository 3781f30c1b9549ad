//! States and outcomes of one wizard run.

use crate::{catalog::OptionDefinition, command::CommandModel};
use std::fmt::{self, Display};
use std::path::PathBuf;

/// Everything one run has learned so far. Owned by the run and dropped with
/// it; nothing is shared between runs.
#[derive(Debug, Clone)]
pub struct Session<'c> {
    pub folder: PathBuf,
    pub command: CommandModel,
    /// Catalog slice of the active scaffold kind.
    pub options: &'c [OptionDefinition],
    /// Option names picked in the options step.
    pub selected: Vec<String>,
}

/// Named states of the questionnaire. Each variant is resumed exactly once.
#[derive(Debug)]
pub enum WizardState<'c> {
    ResolvingFolder,
    AskingName(Session<'c>),
    ShortcutGate(Session<'c>),
    AskingOptionNames(Session<'c>),
    AskingOptionValues(Session<'c>),
    Confirming(Session<'c>),
    Launching(Session<'c>),
    WatchingFile(Session<'c>),
    Finished(Outcome),
}

impl WizardState<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            WizardState::ResolvingFolder => "resolving folder",
            WizardState::AskingName(_) => "asking name",
            WizardState::ShortcutGate(_) => "shortcut gate",
            WizardState::AskingOptionNames(_) => "asking option names",
            WizardState::AskingOptionValues(_) => "asking option values",
            WizardState::Confirming(_) => "confirming",
            WizardState::Launching(_) => "launching",
            WizardState::WatchingFile(_) => "watching file",
            WizardState::Finished(_) => "finished",
        }
    }
}

/// Step at which the user walked away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelStep {
    FolderPick,
    Name,
    Shortcut,
    Confirmation,
}

impl Display for CancelStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CancelStep::FolderPick => "project folder choice",
            CancelStep::Name => "name input",
            CancelStep::Shortcut => "generation",
            CancelStep::Confirmation => "generation",
        };
        write!(f, "{s}")
    }
}

/// Why the generation result could not be confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownReason {
    /// The artifact never became readable within the retry budget.
    WatchExhausted,
    /// No artifact path could be determined.
    EmptyExpectedPath,
    /// The shell refused the command.
    LaunchFailed,
}

/// Terminal state of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The command ran and the artifact showed up.
    Done { command: String, artifact: PathBuf },
    /// The command was handed over but its result is unknown.
    UnknownStatus { command: String, reason: UnknownReason },
    /// Dry run: the command was rendered but not launched.
    Previewed { command: String },
    Cancelled(CancelStep),
}

impl Outcome {
    /// The command that was launched or previewed, if any.
    pub fn command(&self) -> Option<&str> {
        match self {
            Outcome::Done { command, .. }
            | Outcome::UnknownStatus { command, .. }
            | Outcome::Previewed { command } => Some(command),
            Outcome::Cancelled(_) => None,
        }
    }
}
