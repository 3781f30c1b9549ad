use super::interface::FolderResolver;
use crate::{
    constants::labels,
    error::{Error, Result},
    prompt::{Choice, ChoiceConfig, PromptProvider},
};
use std::path::{Path, PathBuf};

/// Resolves the project folder among a set of candidate roots.
///
/// Resolution order:
/// 1. the deepest candidate that contains the context path
/// 2. the only candidate, when there is exactly one
/// 3. a choice prompt over all candidates, or an error when prompting is
///    not allowed
pub struct WorkspaceResolver<'a> {
    roots: Vec<PathBuf>,
    prompts: &'a dyn PromptProvider,
    interactive: bool,
}

impl<'a> WorkspaceResolver<'a> {
    pub fn new(roots: Vec<PathBuf>, prompts: &'a dyn PromptProvider) -> Self {
        Self { roots, prompts, interactive: true }
    }

    /// Fails on ambiguous candidates instead of prompting.
    pub fn non_interactive(mut self) -> Self {
        self.interactive = false;
        self
    }

    fn containing(&self, context_path: &Path) -> Option<&PathBuf> {
        self.roots
            .iter()
            .filter(|root| context_path.starts_with(root))
            .max_by_key(|root| root.components().count())
    }
}

impl FolderResolver for WorkspaceResolver<'_> {
    fn resolve(&self, context_path: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(context_path) = context_path {
            log::info!("Context path detected: resolving current project folder from it.");
            if let Some(root) = self.containing(context_path) {
                return Ok(Some(root.clone()));
            }
        }

        match self.roots.as_slice() {
            [] => Ok(None),
            [only] => {
                log::info!("There is only one project folder, default to it.");
                Ok(Some(only.clone()))
            }
            roots if !self.interactive => Err(Error::AmbiguousWorkspace {
                candidates: roots.iter().map(|root| root.display().to_string()).collect(),
            }),
            roots => {
                let choices =
                    roots.iter().map(|root| Choice::new(root.display().to_string())).collect();
                let config = ChoiceConfig::new(labels::WORKSPACE_PLACEHOLDER, choices);
                let selected = self.prompts.prompt_choice(&config)?;
                Ok(selected.and_then(|index| roots.get(index).cloned()))
            }
        }
    }
}
