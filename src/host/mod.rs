//! Collaborators the wizard drives besides prompts: picking the project
//! folder, sending the command to a shell, opening the generated file and
//! telling the user when the outcome is unknown.

pub mod interface;
pub mod launcher;
pub mod notifier;
pub mod opener;
pub mod workspace;

pub use interface::{FileOpener, FolderResolver, Notifier, ProcessLauncher};
pub use launcher::ShellLauncher;
pub use notifier::TerminalNotifier;
pub use opener::SystemOpener;
pub use workspace::WorkspaceResolver;
