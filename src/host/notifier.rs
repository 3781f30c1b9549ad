use super::interface::Notifier;
use crate::{
    constants::labels,
    error::{Error, Result},
    prompt::{Choice, ChoiceConfig, PromptProvider},
};
use std::path::Path;
use walkdir::WalkDir;

/// Prints messages to stderr and offers actions through a choice prompt.
/// Refreshing the explorer lists the files under the folder, following
/// symlinks and skipping hidden entries and `node_modules`.
pub struct TerminalNotifier<'a> {
    prompts: &'a dyn PromptProvider,
}

impl<'a> TerminalNotifier<'a> {
    pub fn new(prompts: &'a dyn PromptProvider) -> Self {
        Self { prompts }
    }
}

impl Notifier for TerminalNotifier<'_> {
    fn notify(&self, message: &str, action: Option<&str>) -> Result<bool> {
        let Some(action) = action else {
            eprintln!("{message}");
            return Ok(false);
        };

        let config = ChoiceConfig::new(
            message,
            vec![Choice::new(action), Choice::new(labels::DISMISS)],
        );
        Ok(self.prompts.prompt_choice(&config)? == Some(0))
    }

    fn refresh_explorer(&self, folder: &Path) -> Result<()> {
        if !folder.is_dir() {
            eprintln!("{} does not exist (yet).", folder.display());
            return Ok(());
        }

        let visible = |entry: &walkdir::DirEntry| {
            let name = entry.file_name().to_string_lossy();
            entry.depth() == 0 || !(name.starts_with('.') || name == "node_modules")
        };
        let walker = WalkDir::new(folder).follow_links(true).sort_by_file_name();
        for entry in walker.into_iter().filter_entry(visible) {
            let entry = entry.map_err(|e| {
                Error::Other(anyhow::anyhow!("Failed to list {}: {e}", folder.display()))
            })?;
            if entry.file_type().is_file() {
                let relative = entry.path().strip_prefix(folder).unwrap_or(entry.path());
                eprintln!("  {}", relative.display());
            }
        }
        Ok(())
    }
}
