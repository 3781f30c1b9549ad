use crate::{
    catalog::{OptionCatalog, ValueKind},
    cli::{parse_option_arg, Args},
    config::Settings,
    ext::PathExt,
    constants::labels,
    error::Result,
    host::{ShellLauncher, SystemOpener, TerminalNotifier, WorkspaceResolver},
    prompt::{get_prompt_provider, AutomaticPrompter, PromptProvider},
    wizard::{Collaborators, Outcome, ScaffoldWizard},
};
use std::path::{Path, PathBuf};

/// Main CLI runner that wires the terminal collaborators into the wizard
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Runs one questionnaire and reports its outcome
    pub fn run(self) -> Result<Outcome> {
        let cwd = std::env::current_dir()?;
        let settings = self.load_settings(&cwd)?;
        let catalog = settings.catalog();

        let interactive;
        let scripted;
        let prompts: &dyn PromptProvider = if self.args.yes {
            scripted = self.script(&catalog)?;
            &scripted
        } else {
            interactive = get_prompt_provider();
            &interactive
        };

        let mut folders = WorkspaceResolver::new(self.workspaces(&cwd), prompts);
        if self.args.yes {
            folders = folders.non_interactive();
        }
        let launcher = ShellLauncher::new();
        let opener = SystemOpener;
        let notifier = TerminalNotifier::new(prompts);
        let host = Collaborators {
            prompts,
            folders: &folders,
            launcher: &launcher,
            opener: &opener,
            notifier: &notifier,
        };

        let context_path = self.args.context_path.as_ref().map(|path| absolute(&cwd, path));
        let wizard =
            ScaffoldWizard::new(host, &settings, &catalog).with_dry_run(self.args.dry_run);
        let outcome = wizard.run(&self.args.kind, context_path.as_deref())?;

        report(&outcome);
        Ok(outcome)
    }

    /// Loads the config file and applies command line overrides
    fn load_settings(&self, cwd: &Path) -> Result<Settings> {
        let mut settings = match &self.args.config {
            Some(path) => Settings::load(absolute(cwd, path))?,
            None => Settings::discover(cwd)?,
        };
        if let Some(max_attempts) = self.args.max_attempts {
            settings.watch.max_attempts = max_attempts;
        }
        if let Some(interval_ms) = self.args.interval_ms {
            settings.watch.interval_ms = interval_ms;
        }
        settings.validate()?;
        Ok(settings)
    }

    fn workspaces(&self, cwd: &Path) -> Vec<PathBuf> {
        if self.args.workspaces.is_empty() {
            return vec![cwd.to_path_buf()];
        }
        self.args.workspaces.iter().map(|path| absolute(cwd, path)).collect()
    }

    /// Builds the answers a user would give for `--name` and `--option`, in
    /// the order the wizard asks for them.
    fn script(&self, catalog: &OptionCatalog) -> Result<AutomaticPrompter> {
        let kind = self.args.kind.as_str();
        let requested = self
            .args
            .options
            .iter()
            .map(|raw| parse_option_arg(raw))
            .collect::<Result<Vec<_>>>()?;

        let declared = catalog.options_for(kind);
        for (name, _) in &requested {
            if catalog.find(kind, name).is_none() {
                log::warn!("Option --{name} is not offered for \"{kind}\", ignoring it.");
            }
        }

        let prompter = AutomaticPrompter::new()
            .with_text_response(self.args.name.as_deref().unwrap_or_default());
        if declared.is_empty() {
            return Ok(prompter);
        }

        let picked: Vec<_> = declared
            .iter()
            .filter_map(|option| {
                requested
                    .iter()
                    .find(|(name, _)| *name == option.name)
                    .map(|(_, value)| (option, value.as_deref()))
            })
            .collect();
        if picked.is_empty() {
            return Ok(prompter.with_choice_response(labels::YES));
        }

        let names: Vec<&str> = picked.iter().map(|(option, _)| option.name.as_str()).collect();
        let mut prompter = prompter
            .with_choice_response(labels::MORE_OPTIONS)
            .with_multi_choice_response(&names);
        for (option, value) in &picked {
            if option.value_kind != ValueKind::Text {
                continue;
            }
            prompter = match value {
                Some(value) => prompter.with_text_response(value),
                None => prompter.with_text_dismissed(),
            };
        }
        Ok(prompter.with_choice_response(labels::CONFIRM))
    }
}

fn absolute(cwd: &Path, path: &Path) -> PathBuf {
    cwd.join(path).normalize()
}

fn report(outcome: &Outcome) {
    match outcome {
        Outcome::Done { artifact, .. } => println!("Generated {}", artifact.display()),
        Outcome::Previewed { command } => println!("{command}"),
        Outcome::UnknownStatus { .. } | Outcome::Cancelled(_) => {}
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<Outcome> {
    let runner = Runner::new(args);
    runner.run()
}
