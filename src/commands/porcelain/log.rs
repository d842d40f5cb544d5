use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::HEAD_REF_NAME;
use crate::artifacts::log::History;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Walk history from `HEAD`'s resolution, most recent first.
    ///
    /// An empty repository prints nothing. A parent digest that cannot be
    /// loaded aborts the walk with the underlying integrity error instead
    /// of silently truncating the output.
    pub fn log(&self) -> anyhow::Result<()> {
        let branch = self.refs().current_branch()?;
        let tip = self.refs().resolve(HEAD_REF_NAME)?;

        for entry in History::starting_at(self.database(), tip.clone()) {
            let (oid, commit) = entry?;

            let decoration = if Some(&oid) == tip.as_ref() {
                format!(" (HEAD -> {})", branch)
            } else {
                String::new()
            };

            writeln!(
                self.writer(),
                "{}",
                format!("commit {}{}", oid, decoration).yellow()
            )?;
            writeln!(self.writer(), "Date:   {}", commit.readable_timestamp())?;
            writeln!(self.writer())?;
            for message_line in commit.message().lines() {
                writeln!(self.writer(), "    {}", message_line)?;
            }
            writeln!(self.writer())?;
        }

        Ok(())
    }
}
