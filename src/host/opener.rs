use super::interface::FileOpener;
use crate::error::Result;
use std::path::Path;

/// Opens files with the system's default handler.
#[derive(Debug, Default)]
pub struct SystemOpener;

impl FileOpener for SystemOpener {
    fn open(&self, path: &Path) -> Result<()> {
        open::that(path)?;
        Ok(())
    }
}
