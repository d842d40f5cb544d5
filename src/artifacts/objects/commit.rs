//! Commit object
//!
//! A commit captures a snapshot of the tracked tree together with its place
//! in history:
//! - `tree`: repository-relative path -> blob digest, taken from the
//!   staging index at commit time
//! - `parent`: digest of the preceding commit, absent for the first commit
//!   on a lineage
//! - `message` and `timestamp`
//!
//! ## Format
//!
//! On disk: compact JSON of `{tree, parent, message, timestamp}`. Field
//! order is fixed by the struct and the tree map is a `BTreeMap`, so the
//! serialized form is canonical and the commit's ID is the SHA-1 of exactly
//! these bytes. Any mutation would change the identity, which makes commits
//! structurally immutable.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    tree: BTreeMap<String, ObjectId>,
    parent: Option<ObjectId>,
    message: String,
    timestamp: chrono::DateTime<chrono::FixedOffset>,
}

impl Commit {
    /// Create a new commit stamped with the current local time.
    pub fn new(
        tree: BTreeMap<String, ObjectId>,
        parent: Option<ObjectId>,
        message: String,
    ) -> Self {
        Commit {
            tree,
            parent,
            message,
            timestamp: chrono::Local::now().fixed_offset(),
        }
    }

    pub fn tree(&self) -> &BTreeMap<String, ObjectId> {
        &self.tree
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the commit message, for short-form display.
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn timestamp(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.timestamp
    }

    /// Timestamp in human-readable form, e.g. "Mon Jan 1 12:34:56 2024 +0000".
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let content = serde_json::to_vec(self).context("unable to serialize commit record")?;
        Ok(Bytes::from(content))
    }
}

impl Unpackable for Commit {
    fn deserialize(bytes: Bytes) -> anyhow::Result<Self> {
        serde_json::from_slice(&bytes).context("unable to parse commit record")
    }
}

impl Object for Commit {}

#[cfg(test)]
mod tests {
    use super::*;

    fn oid(hex_char: char) -> ObjectId {
        ObjectId::try_parse(hex_char.to_string().repeat(40)).unwrap()
    }

    fn sample_tree() -> BTreeMap<String, ObjectId> {
        BTreeMap::from([("a.txt".to_string(), oid('a'))])
    }

    #[test]
    fn serialization_round_trips() {
        let commit = Commit::new(sample_tree(), Some(oid('b')), "first".to_string());
        let bytes = Packable::serialize(&commit).unwrap();
        assert_eq!(<Commit as Unpackable>::deserialize(bytes).unwrap(), commit);
    }

    #[test]
    fn digest_is_stable_across_reserialization() {
        let commit = Commit::new(sample_tree(), None, "first".to_string());
        let reparsed =
            <Commit as Unpackable>::deserialize(Packable::serialize(&commit).unwrap()).unwrap();
        assert_eq!(commit.object_id().unwrap(), reparsed.object_id().unwrap());
    }

    #[test]
    fn digest_covers_the_parent_link() {
        let orphan = Commit::new(sample_tree(), None, "same message".to_string());
        let child = Commit {
            parent: Some(oid('c')),
            ..orphan.clone()
        };
        assert_ne!(orphan.object_id().unwrap(), child.object_id().unwrap());
    }

    #[test]
    fn digest_covers_the_tree() {
        let base = Commit::new(sample_tree(), None, "msg".to_string());
        let mut other_tree = sample_tree();
        other_tree.insert("b.txt".to_string(), oid('d'));
        let other = Commit {
            tree: other_tree,
            ..base.clone()
        };
        assert_ne!(base.object_id().unwrap(), other.object_id().unwrap());
    }
}
