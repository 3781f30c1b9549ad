//! Fake collaborators shared by the integration tests.

use antdg::error::{Error, Result};
use antdg::host::{FileOpener, FolderResolver, Notifier, ProcessLauncher};
use std::cell::{Cell, RefCell};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves to a fixed folder, or to nothing as if the picker was dismissed.
pub struct FixedFolder(pub Option<PathBuf>);

impl FolderResolver for FixedFolder {
    fn resolve(&self, _context_path: Option<&Path>) -> Result<Option<PathBuf>> {
        Ok(self.0.clone())
    }
}

/// Records launched commands and optionally plays the generator by writing
/// a file relative to the folder.
#[derive(Default)]
pub struct RecordingLauncher {
    pub sent: RefCell<Vec<(PathBuf, String)>>,
    pub creates: Option<PathBuf>,
    pub fails: bool,
}

impl RecordingLauncher {
    pub fn creating(relative: &str) -> Self {
        Self { creates: Some(PathBuf::from(relative)), ..Self::default() }
    }

    pub fn failing() -> Self {
        Self { fails: true, ..Self::default() }
    }

    pub fn commands(&self) -> Vec<String> {
        self.sent.borrow().iter().map(|(_, command)| command.clone()).collect()
    }
}

impl ProcessLauncher for RecordingLauncher {
    fn send(&self, folder: &Path, command: &str) -> Result<()> {
        self.sent.borrow_mut().push((folder.to_path_buf(), command.to_string()));
        if self.fails {
            return Err(Error::LaunchError {
                command: command.to_string(),
                folder: folder.display().to_string(),
                e: std::io::Error::new(std::io::ErrorKind::NotFound, "sh not found"),
            });
        }
        if let Some(relative) = &self.creates {
            let artifact = folder.join(relative);
            fs::create_dir_all(artifact.parent().unwrap())?;
            fs::write(artifact, "export default () => null;\n")?;
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingOpener {
    pub opened: RefCell<Vec<PathBuf>>,
}

impl FileOpener for RecordingOpener {
    fn open(&self, path: &Path) -> Result<()> {
        self.opened.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

/// Takes the offered action when `accept` is set.
#[derive(Default)]
pub struct RecordingNotifier {
    pub accept: bool,
    pub messages: RefCell<Vec<String>>,
    pub refreshed: RefCell<Vec<PathBuf>>,
    pub notified: Cell<u32>,
}

impl RecordingNotifier {
    pub fn accepting() -> Self {
        Self { accept: true, ..Self::default() }
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, action: Option<&str>) -> Result<bool> {
        self.notified.set(self.notified.get() + 1);
        self.messages.borrow_mut().push(message.to_string());
        Ok(self.accept && action.is_some())
    }

    fn refresh_explorer(&self, folder: &Path) -> Result<()> {
        self.refreshed.borrow_mut().push(folder.to_path_buf());
        Ok(())
    }
}
