//! Interactive scaffold orchestration.
//!
//! [`ScaffoldWizard`] walks the user through the questionnaire as an explicit
//! state machine: resolve the project folder, ask for the name, optionally
//! collect extra options, launch the generator and watch for its artifact.
//! Cancelling at any prompt ends the run before anything is launched.

pub mod state;

use crate::{
    catalog::{OptionCatalog, ValueKind},
    command::{last_segment, parent_segments, CommandModel, OptionValue},
    config::Settings,
    constants::{labels, PATH_OPTION},
    error::{Error, Result},
    ext::PathExt,
    host::{FileOpener, FolderResolver, Notifier, ProcessLauncher},
    prompt::{Choice, ChoiceConfig, PromptProvider, TextPromptConfig},
    renderer::{expected_artifact, MiniJinjaRenderer},
    watcher::{FileArrivalWatcher, WatchOutcome},
};
use std::path::{Path, PathBuf};

pub use state::{CancelStep, Outcome, Session, UnknownReason, WizardState};

/// The external capabilities a run talks to.
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub prompts: &'a dyn PromptProvider,
    pub folders: &'a dyn FolderResolver,
    pub launcher: &'a dyn ProcessLauncher,
    pub opener: &'a dyn FileOpener,
    pub notifier: &'a dyn Notifier,
}

pub struct ScaffoldWizard<'a> {
    host: Collaborators<'a>,
    settings: &'a Settings,
    catalog: &'a OptionCatalog,
    renderer: MiniJinjaRenderer,
    watcher: FileArrivalWatcher,
    dry_run: bool,
}

impl<'a> ScaffoldWizard<'a> {
    pub fn new(
        host: Collaborators<'a>,
        settings: &'a Settings,
        catalog: &'a OptionCatalog,
    ) -> Self {
        Self {
            host,
            settings,
            catalog,
            renderer: MiniJinjaRenderer::new(),
            watcher: FileArrivalWatcher::from_settings(&settings.watch),
            dry_run: false,
        }
    }

    pub fn with_watcher(mut self, watcher: FileArrivalWatcher) -> Self {
        self.watcher = watcher;
        self
    }

    /// Stops at the launch step and reports the command instead.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Runs the questionnaire for `kind`, optionally started from
    /// `context_path`, until it reaches a terminal state.
    pub fn run(&self, kind: &str, context_path: Option<&Path>) -> Result<Outcome> {
        let mut state = WizardState::ResolvingFolder;
        loop {
            log::debug!("Wizard state: {}", state.name());
            state = match state {
                WizardState::ResolvingFolder => self.resolve_folder(kind, context_path)?,
                WizardState::AskingName(session) => self.ask_name(session)?,
                WizardState::ShortcutGate(session) => self.ask_shortcut(session)?,
                WizardState::AskingOptionNames(session) => self.ask_option_names(session)?,
                WizardState::AskingOptionValues(session) => self.ask_option_values(session)?,
                WizardState::Confirming(session) => self.ask_confirmation(session)?,
                WizardState::Launching(session) => self.launch(session)?,
                WizardState::WatchingFile(session) => self.watch(session)?,
                WizardState::Finished(outcome) => return Ok(outcome),
            };
        }
    }

    fn cancel(&self, step: CancelStep) -> WizardState<'a> {
        log::info!("You have canceled the {step}.");
        WizardState::Finished(Outcome::Cancelled(step))
    }

    fn resolve_folder(&self, kind: &str, context_path: Option<&Path>) -> Result<WizardState<'a>> {
        let Some(folder) = self.host.folders.resolve(context_path)? else {
            return Ok(self.cancel(CancelStep::FolderPick));
        };
        log::info!("Project folder selected: \"{}\"", folder.display());

        let command = CommandModel::new(&folder, kind, context_path)
            .with_base_command(&self.settings.base_command);
        let options = self.catalog.options_for(kind);
        if options.is_empty() {
            let known: Vec<&str> = self.catalog.kinds().collect();
            log::debug!("No options declared for \"{kind}\" (known: {}).", known.join(", "));
        }

        Ok(WizardState::AskingName(Session { folder, command, options, selected: Vec::new() }))
    }

    fn ask_name(&self, mut session: Session<'a>) -> Result<WizardState<'a>> {
        let kind = session.command.kind().to_string();
        let inferred = session
            .command
            .option_value(PATH_OPTION)
            .and_then(OptionValue::as_text)
            .map(str::to_string);

        let config = match &inferred {
            Some(path) => TextPromptConfig::new(format!(
                "Input the {kind} name. Pro-tip: the path is inferred from the directory you started from."
            ))
            .with_prefill(format!("{path}/")),
            None => TextPromptConfig::new(format!(
                "Input the path with {kind} name (eg: src/routers/some-{kind})."
            )),
        };

        let Some(input) = self.host.prompts.prompt_text(&config)? else {
            return Ok(self.cancel(CancelStep::Name));
        };
        let input = input.trim();
        let untouched = inferred
            .as_deref()
            .is_some_and(|path| input.trim_end_matches(['/', '\\']) == path);
        if untouched {
            return Ok(self.cancel(CancelStep::Name));
        }

        let input = self.relative_input(&session.folder, input);
        if matches!(last_segment(&input), "" | "." | "..") {
            return Ok(self.cancel(CancelStep::Name));
        }
        session.command.set_positional_name(&input);
        let parent = parent_segments(&input);
        if !parent.is_empty() {
            session.command.add_options([(PATH_OPTION, parent)]);
        }

        if session.options.is_empty() {
            return Ok(WizardState::Launching(session));
        }
        Ok(WizardState::ShortcutGate(session))
    }

    /// Absolute inputs are made relative to the project folder; absolute
    /// inputs outside of it only keep their last segment.
    fn relative_input(&self, folder: &Path, input: &str) -> String {
        let path = Path::new(input);
        if !path.is_absolute() {
            return input.to_string();
        }
        match path.relative_to(folder) {
            Some(relative) => relative.to_slash_string(),
            None => {
                log::warn!(
                    "{input} is outside of the project folder {}, keeping only its name.",
                    folder.display()
                );
                last_segment(input).to_string()
            }
        }
    }

    fn ask_shortcut(&self, session: Session<'a>) -> Result<WizardState<'a>> {
        let config = ChoiceConfig::new(
            session.command.render(),
            vec![
                Choice::new(labels::YES).with_description(labels::YES_DESCRIPTION),
                Choice::new(labels::MORE_OPTIONS)
                    .with_description(labels::MORE_OPTIONS_DESCRIPTION),
            ],
        );

        match self.host.prompts.prompt_choice(&config)? {
            Some(0) => Ok(WizardState::Launching(session)),
            Some(_) => Ok(WizardState::AskingOptionNames(session)),
            None => Ok(self.cancel(CancelStep::Shortcut)),
        }
    }

    fn ask_option_names(&self, mut session: Session<'a>) -> Result<WizardState<'a>> {
        if session.options.is_empty() {
            session.selected.clear();
            return Ok(WizardState::AskingOptionValues(session));
        }

        let choices = session
            .options
            .iter()
            .map(|option| {
                Choice::new(&option.name)
                    .with_description(&option.description)
                    .picked(option.picked)
            })
            .collect();
        let config = ChoiceConfig::new(labels::OPTIONS_PLACEHOLDER, choices);

        let indices = self.host.prompts.prompt_multi_choice(&config)?;
        session.selected = indices
            .into_iter()
            .filter_map(|index| session.options.get(index))
            .map(|option| option.name.clone())
            .collect();

        Ok(WizardState::AskingOptionValues(session))
    }

    fn ask_option_values(&self, mut session: Session<'a>) -> Result<WizardState<'a>> {
        let mut filled: Vec<(String, OptionValue)> = Vec::new();

        let selected =
            session.options.iter().filter(|option| session.selected.contains(&option.name));
        for option in selected {
            match option.value_kind {
                ValueKind::Boolean => filled.push((option.name.clone(), OptionValue::Flag(true))),
                ValueKind::Text => {
                    let guidance = if option.description.is_empty() {
                        "What value do you want for this option?"
                    } else {
                        option.description.as_str()
                    };
                    let config = TextPromptConfig::new(format!("--{}: {guidance}", option.name));
                    match self.host.prompts.prompt_text(&config)? {
                        Some(value) if !value.trim().is_empty() => {
                            filled.push((option.name.clone(), value.trim().into()))
                        }
                        _ => log::debug!("No value given for --{}, skipping it.", option.name),
                    }
                }
            }
        }

        session.command.add_options(filled);
        Ok(WizardState::Confirming(session))
    }

    fn ask_confirmation(&self, session: Session<'a>) -> Result<WizardState<'a>> {
        let config = ChoiceConfig::new(
            session.command.render(),
            vec![
                Choice::new(labels::CONFIRM).with_description(labels::CONFIRM_DESCRIPTION),
                Choice::new(labels::CANCEL),
            ],
        );

        match self.host.prompts.prompt_choice(&config)? {
            Some(0) => Ok(WizardState::Launching(session)),
            _ => Ok(self.cancel(CancelStep::Confirmation)),
        }
    }

    fn launch(&self, session: Session<'a>) -> Result<WizardState<'a>> {
        let command = session.command.to_string();
        if self.dry_run {
            log::info!("Dry run, not launching: {command}");
            return Ok(WizardState::Finished(Outcome::Previewed { command }));
        }

        if let Err(e) = self.host.launcher.send(&session.folder, &command) {
            log::error!("{e}");
            return self.unknown_status(&session, None, UnknownReason::LaunchFailed);
        }
        Ok(WizardState::WatchingFile(session))
    }

    fn watch(&self, session: Session<'a>) -> Result<WizardState<'a>> {
        let template = self.settings.artifact_for(session.command.kind());
        let artifact =
            match expected_artifact(&self.renderer, template, &session.folder, &session.command) {
                Ok(artifact) => artifact,
                Err(e) => {
                    log::warn!("Cannot determine the generated file: {e}");
                    None
                }
            };

        let path = artifact.clone().unwrap_or_default();
        match self.watcher.await_arrival(&path) {
            Ok(WatchOutcome::Arrived { .. }) => {
                if let Err(e) = self.host.opener.open(&path) {
                    log::warn!("Could not open {}: {e}", path.display());
                }
                log::info!("Command has succeeded! Check the terminal for more details.");
                Ok(WizardState::Finished(Outcome::Done {
                    command: session.command.render(),
                    artifact: path,
                }))
            }
            Ok(WatchOutcome::Exhausted { .. }) => {
                self.unknown_status(&session, artifact.as_deref(), UnknownReason::WatchExhausted)
            }
            Err(Error::EmptyExpectedPath) => {
                log::warn!("No generated file to watch for.");
                self.unknown_status(&session, None, UnknownReason::EmptyExpectedPath)
            }
            Err(e) => Err(e),
        }
    }

    /// Tells the user the command was launched without a known result and
    /// offers to refresh their view of the generated files.
    fn unknown_status(
        &self,
        session: &Session<'a>,
        artifact: Option<&Path>,
        reason: UnknownReason,
    ) -> Result<WizardState<'a>> {
        log::info!("Command launched.");

        if self.host.notifier.notify(labels::UNKNOWN_STATUS, Some(labels::REFRESH_EXPLORER))? {
            let root = self.refresh_root(session, artifact);
            self.host.notifier.refresh_explorer(&root)?;
        }

        Ok(WizardState::Finished(Outcome::UnknownStatus {
            command: session.command.render(),
            reason,
        }))
    }

    fn refresh_root(&self, session: &Session<'a>, artifact: Option<&Path>) -> PathBuf {
        if let Some(parent) = artifact.and_then(Path::parent) {
            return parent.to_path_buf();
        }
        match session.command.option_value(PATH_OPTION).and_then(OptionValue::as_text) {
            Some(dir) => dir
                .split('/')
                .fold(session.folder.clone(), |path, segment| path.join(segment)),
            None => session.folder.clone(),
        }
    }
}
