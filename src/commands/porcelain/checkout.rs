use crate::areas::repository::Repository;
use crate::errors::JotError;
use std::io::Write;

impl Repository {
    /// Switch `HEAD` to another branch.
    ///
    /// Only the symbolic `HEAD` target changes: the staging index and the
    /// working tree are left untouched. A missing branch leaves `HEAD`
    /// exactly as it was.
    pub fn checkout(&mut self, name: &str) -> anyhow::Result<()> {
        if !self.refs().exists(name) {
            return Err(JotError::UnknownBranch(name.to_string()).into());
        }

        self.refs().set_head(name)?;
        writeln!(self.writer(), "Switched to branch '{}'", name)?;

        Ok(())
    }
}
