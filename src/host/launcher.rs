use super::interface::ProcessLauncher;
use crate::error::{Error, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs commands through the platform shell, sharing this terminal.
///
/// The child is spawned and left running: its output goes straight to the
/// terminal and its exit status is never collected.
#[derive(Debug, Default)]
pub struct ShellLauncher;

impl ShellLauncher {
    pub fn new() -> Self {
        Self
    }

    fn shell(command: &str) -> Command {
        if cfg!(windows) {
            let mut shell = Command::new("cmd");
            shell.arg("/C").arg(command);
            shell
        } else {
            let mut shell = Command::new("sh");
            shell.arg("-c").arg(command);
            shell
        }
    }
}

impl ProcessLauncher for ShellLauncher {
    fn send(&self, folder: &Path, command: &str) -> Result<()> {
        log::info!("Launching this command: {command}");

        let child = Self::shell(command)
            .current_dir(folder)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| Error::LaunchError {
                command: command.to_string(),
                folder: folder.display().to_string(),
                e,
            })?;

        log::debug!("Command handed to shell (pid {}).", child.id());
        Ok(())
    }
}
