use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::errors::JotError;
use std::io::Write;

impl Repository {
    /// Record the staged tree as a new commit on the current branch.
    ///
    /// The parent is whatever the current branch resolves to; a branch
    /// with no commit yet starts a fresh lineage. The staging index is
    /// left as it is — entries stay staged across commits.
    pub fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        let mut index = self.index();
        index.rehydrate()?;

        if index.is_empty() {
            return Err(JotError::NothingToCommit.into());
        }

        let branch = self.refs().current_branch()?;
        let parent = self.refs().resolve(&branch)?;
        let is_root = match parent {
            Some(_) => "",
            None => "(root-commit) ",
        };

        let message = message.trim().to_string();
        let commit = Commit::new(index.snapshot(), parent, message);

        // the object must be durable before the ref moves: a crash in
        // between leaves an unreferenced object, never a dangling ref
        let commit_id = self.database().store(&commit)?;
        self.refs().update_branch(&branch, &commit_id)?;

        writeln!(
            self.writer(),
            "[{}{}] {}",
            is_root,
            commit_id.to_short_oid(),
            commit.short_message()
        )?;

        Ok(())
    }
}
