use crate::areas::repository::Repository;
use anyhow::Context;
use std::fs;
use std::io::Write;

const DEFAULT_BRANCH: &str = "master";

impl Repository {
    /// Create the metadata area: object store, refs area, `HEAD` pointing
    /// symbolically at the default branch (which does not exist yet), an
    /// empty staging index, and an empty ignore list.
    ///
    /// Re-running on an initialized repository is a notice, not an error.
    pub fn init(&mut self) -> anyhow::Result<()> {
        if self.is_initialized() {
            writeln!(self.writer(), "Repository already initialized.")?;
            return Ok(());
        }

        fs::create_dir_all(self.database().objects_path())
            .context("failed to create objects directory")?;

        fs::create_dir_all(self.refs().refs_path())
            .context("failed to create refs directory")?;

        self.refs()
            .set_head(DEFAULT_BRANCH)
            .context("failed to create initial HEAD reference")?;

        let index = self.index();
        fs::write(index.path(), b"{}").context("failed to create index file")?;

        fs::write(self.ignore_path(), b"").context("failed to create ignore file")?;

        writeln!(
            self.writer(),
            "Initialized empty repository in {}",
            self.metadata_path().display()
        )?;

        Ok(())
    }
}
