use crate::error::Result;
use std::path::{Path, PathBuf};

/// Resolves the project folder the generation runs in.
pub trait FolderResolver {
    /// Returns `None` when the user declined to pick a folder.
    fn resolve(&self, context_path: Option<&Path>) -> Result<Option<PathBuf>>;
}

/// Hands a command line to a long-lived shell-like channel.
pub trait ProcessLauncher {
    /// Fire-and-forget: returns once the command was handed over, without
    /// waiting for it to complete.
    fn send(&self, folder: &Path, command: &str) -> Result<()>;
}

/// Shows a generated file to the user.
pub trait FileOpener {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Informational messages with an optional follow-up action.
pub trait Notifier {
    /// Shows `message`; returns true when the user took `action`.
    fn notify(&self, message: &str, action: Option<&str>) -> Result<bool>;

    /// Refreshes the user's view of `folder` so generated files show up.
    fn refresh_explorer(&self, folder: &Path) -> Result<()>;
}
