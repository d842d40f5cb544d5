use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Report the branch `HEAD` names and the commit it resolves to.
    pub fn status(&self) -> anyhow::Result<()> {
        let branch = self.refs().current_branch()?;
        writeln!(self.writer(), "On branch {}", branch)?;

        match self.refs().resolve(&branch)? {
            Some(oid) => {
                let commit = self.database().parse_commit(&oid)?;
                writeln!(
                    self.writer(),
                    "HEAD at {} {}",
                    oid.to_short_oid(),
                    commit.short_message()
                )?;
            }
            None => {
                writeln!(self.writer(), "No commits yet")?;
            }
        }

        Ok(())
    }
}
