//! Named references (branches and `HEAD`)
//!
//! A reference is a mutable pointer resolving to a commit digest. It is
//! either direct (the file holds a 40-hex digest) or symbolic (the file
//! holds `ref: <name>`, naming another reference). `HEAD` is always
//! symbolic and names the currently checked-out branch; only branch refs
//! ever hold direct targets.
//!
//! ## File format
//!
//! - `HEAD` lives at the top of the metadata area
//! - branches live under `refs/`, one text file per branch
//! - an existing but empty branch file is an "unborn" branch: it exists,
//!   resolves to no digest, and its first commit starts a fresh lineage

use crate::artifacts::branch::branch_name::{BranchName, HEAD_REF_NAME};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{JotError, MAX_SYMREF_HOPS};
use anyhow::Context;
use derive_new::new;
use std::path::Path;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefTarget {
    /// Direct reference holding a commit digest
    Direct(ObjectId),
    /// Symbolic reference naming another reference
    Symbolic(String),
}

/// Reference store rooted at the metadata area.
#[derive(Debug, new)]
pub struct Refs {
    path: Box<Path>,
}

impl Refs {
    /// Read a reference's stored target.
    ///
    /// Returns `None` both for a name that was never written (the normal
    /// state of a branch that does not exist yet) and for an unborn branch
    /// file with no target; use [`Refs::exists`] to tell them apart.
    pub fn read(&self, name: &str) -> anyhow::Result<Option<RefTarget>> {
        let ref_path = self.ref_path(name);
        if !ref_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&ref_path)
            .with_context(|| format!("unable to read ref file {}", ref_path.display()))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        match symref_match {
            Some(symref_match) => Ok(Some(RefTarget::Symbolic(symref_match[1].to_string()))),
            None => Ok(Some(RefTarget::Direct(ObjectId::try_parse(
                content.to_string(),
            )?))),
        }
    }

    /// Whether a reference entry exists at all, unborn branches included.
    pub fn exists(&self, name: &str) -> bool {
        self.ref_path(name).exists()
    }

    /// Follow symbolic targets transitively until a digest is reached or
    /// the chain runs out.
    ///
    /// The hop count is bounded: a chain longer than
    /// [`MAX_SYMREF_HOPS`] fails with [`JotError::ReferenceCycle`] instead
    /// of hanging on a corrupted refs area.
    pub fn resolve(&self, name: &str) -> anyhow::Result<Option<ObjectId>> {
        let mut current = name.to_string();

        for _ in 0..MAX_SYMREF_HOPS {
            match self.read(&current)? {
                None => return Ok(None),
                Some(RefTarget::Direct(oid)) => return Ok(Some(oid)),
                Some(RefTarget::Symbolic(next)) => current = next,
            }
        }

        Err(JotError::ReferenceCycle(name.to_string()).into())
    }

    /// The branch name `HEAD` currently points at.
    ///
    /// `HEAD` holding a raw digest would mean the two reference roles got
    /// conflated somewhere; that is corruption, not a valid state.
    pub fn current_branch(&self) -> anyhow::Result<String> {
        match self.read(HEAD_REF_NAME)? {
            Some(RefTarget::Symbolic(branch)) => Ok(branch),
            Some(RefTarget::Direct(oid)) => Err(anyhow::anyhow!(
                "HEAD holds a raw digest ({}) instead of a branch name",
                oid.to_short_oid()
            )),
            None => Err(anyhow::anyhow!("HEAD reference is missing")),
        }
    }

    /// Point `HEAD` at a branch by name.
    pub fn set_head(&self, branch: &str) -> anyhow::Result<()> {
        self.write_ref_file(&self.head_path(), &format!("ref: {}", branch))
    }

    /// Advance a branch to a new commit digest.
    pub fn update_branch(&self, branch: &str, oid: &ObjectId) -> anyhow::Result<()> {
        log::info!("branch {} -> {}", branch, oid);
        self.write_ref_file(&self.branch_path(branch), oid.as_ref())
    }

    /// Create a branch ref, either at a digest or unborn (no commit yet).
    pub fn create_branch(
        &self,
        name: &BranchName,
        source_oid: Option<&ObjectId>,
    ) -> anyhow::Result<()> {
        let content = source_oid.map(|oid| oid.as_ref().to_string()).unwrap_or_default();
        self.write_ref_file(&self.branch_path(name.as_ref()), &content)
    }

    fn write_ref_file(&self, path: &Path, raw_ref: &str) -> anyhow::Result<()> {
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!("invalid ref file path {}", path.display())
        })?)?;

        std::fs::write(path, raw_ref)
            .with_context(|| format!("unable to write ref file {}", path.display()))
    }

    fn ref_path(&self, name: &str) -> std::path::PathBuf {
        if name == HEAD_REF_NAME {
            self.head_path()
        } else {
            self.branch_path(name)
        }
    }

    pub fn head_path(&self) -> std::path::PathBuf {
        self.path.join(HEAD_REF_NAME)
    }

    pub fn refs_path(&self) -> std::path::PathBuf {
        self.path.join("refs")
    }

    fn branch_path(&self, branch: &str) -> std::path::PathBuf {
        self.refs_path().join(branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_refs() -> (tempfile::TempDir, Refs) {
        let dir = tempfile::tempdir().unwrap();
        let refs = Refs::new(dir.path().to_path_buf().into_boxed_path());
        std::fs::create_dir_all(refs.refs_path()).unwrap();
        (dir, refs)
    }

    fn oid(hex_char: char) -> ObjectId {
        ObjectId::try_parse(hex_char.to_string().repeat(40)).unwrap()
    }

    #[test]
    fn unwritten_reference_reads_as_absent() {
        let (_dir, refs) = test_refs();
        assert_eq!(refs.read("master").unwrap(), None);
        assert!(!refs.exists("master"));
    }

    #[test]
    fn head_resolves_through_its_branch() {
        let (_dir, refs) = test_refs();
        refs.set_head("master").unwrap();
        refs.update_branch("master", &oid('a')).unwrap();

        assert_eq!(
            refs.read(HEAD_REF_NAME).unwrap(),
            Some(RefTarget::Symbolic("master".to_string()))
        );
        assert_eq!(refs.resolve(HEAD_REF_NAME).unwrap(), Some(oid('a')));
    }

    #[test]
    fn head_over_unborn_branch_resolves_to_nothing() {
        let (_dir, refs) = test_refs();
        refs.set_head("master").unwrap();

        assert_eq!(refs.resolve(HEAD_REF_NAME).unwrap(), None);
        assert_eq!(refs.current_branch().unwrap(), "master");
    }

    #[test]
    fn unborn_branch_exists_but_has_no_digest() {
        let (_dir, refs) = test_refs();
        let name = BranchName::try_parse("feature".to_string()).unwrap();
        refs.create_branch(&name, None).unwrap();

        assert!(refs.exists("feature"));
        assert_eq!(refs.read("feature").unwrap(), None);
        assert_eq!(refs.resolve("feature").unwrap(), None);
    }

    #[test]
    fn update_overwrites_prior_target() {
        let (_dir, refs) = test_refs();
        refs.update_branch("master", &oid('a')).unwrap();
        refs.update_branch("master", &oid('b')).unwrap();

        assert_eq!(refs.resolve("master").unwrap(), Some(oid('b')));
    }

    #[test]
    fn cyclic_symbolic_chain_is_detected() {
        let (_dir, refs) = test_refs();
        refs.write_ref_file(&refs.refs_path().join("a"), "ref: b").unwrap();
        refs.write_ref_file(&refs.refs_path().join("b"), "ref: a").unwrap();

        let err = refs.resolve("a").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<JotError>(),
            Some(JotError::ReferenceCycle(_))
        ));
    }
}
