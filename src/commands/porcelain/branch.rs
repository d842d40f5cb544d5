use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::{BranchName, HEAD_REF_NAME};
use std::io::Write;

impl Repository {
    /// Create a branch at the commit `HEAD` currently resolves to.
    ///
    /// In an empty repository the branch is created unborn: it exists,
    /// points at no commit, and its first commit starts a fresh lineage.
    pub fn branch(&mut self, name: &str) -> anyhow::Result<()> {
        let branch_name = BranchName::try_parse(name.to_string())?;

        if self.refs().exists(branch_name.as_ref()) {
            anyhow::bail!("branch {} already exists", branch_name);
        }

        let source_oid = self.refs().resolve(HEAD_REF_NAME)?;
        self.refs().create_branch(&branch_name, source_oid.as_ref())?;

        writeln!(self.writer(), "Created branch {}.", branch_name)?;

        Ok(())
    }
}
