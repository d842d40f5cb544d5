//! Staging index
//!
//! The index is the staging area describing the tree the next commit will
//! capture: a mapping from repository-relative path to blob digest. It is
//! persisted as JSON in the metadata area and survives between process
//! invocations; every command rehydrates it from disk before use and
//! persists what it changed before returning.
//!
//! There is no unstage operation, and the index is deliberately not cleared
//! after a commit: a staged entry stays staged until it is replaced by
//! another `add` for the same path.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file in the metadata area
    path: Box<Path>,
    /// Staged entries: repository-relative path -> blob digest
    entries: BTreeMap<String, ObjectId>,
    /// Whether the in-memory state has diverged from disk
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index from disk, replacing any in-memory state. A missing
    /// index file reads as an empty index.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.entries.clear();
        self.changed = false;

        if !self.path.exists() {
            return Ok(());
        }

        let file = std::fs::File::open(&self.path)
            .with_context(|| format!("unable to open index file {}", self.path.display()))?;
        self.entries = serde_json::from_reader(file)
            .with_context(|| format!("unable to parse index file {}", self.path.display()))?;

        Ok(())
    }

    /// Upsert one staged entry. Staging a path twice replaces the digest.
    pub fn add(&mut self, path: String, oid: ObjectId) {
        log::debug!("staging {} -> {}", path, oid);
        self.entries.insert(path, oid);
        self.changed = true;
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &ObjectId)> {
        self.entries.iter()
    }

    /// The full staged mapping, for commit construction.
    pub fn snapshot(&self) -> BTreeMap<String, ObjectId> {
        self.entries.clone()
    }

    /// Persist the index if it changed since rehydration.
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        if !self.changed {
            return Ok(());
        }

        let file = std::fs::File::create(&self.path)
            .with_context(|| format!("unable to write index file {}", self.path.display()))?;
        serde_json::to_writer_pretty(file, &self.entries)
            .with_context(|| format!("unable to serialize index to {}", self.path.display()))?;
        self.changed = false;

        Ok(())
    }
}
