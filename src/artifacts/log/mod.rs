//! Commit history traversal.
//!
//! `History` walks the commit graph lazily from a starting digest, yielding
//! each commit and then following its `parent` link until the lineage runs
//! out. The walk is restartable: constructing a new iterator from the same
//! digest replays the same finite sequence.

use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;

pub struct History<'d> {
    database: &'d Database,
    next: Option<ObjectId>,
}

impl<'d> History<'d> {
    /// Start a walk at the given commit digest. `None` yields an empty
    /// history (an unborn branch).
    pub fn starting_at(database: &'d Database, start: Option<ObjectId>) -> Self {
        History {
            database,
            next: start,
        }
    }
}

impl Iterator for History<'_> {
    type Item = anyhow::Result<(ObjectId, Commit)>;

    /// A `parent` digest that cannot be loaded is a broken chain: the error
    /// (carrying `JotError::ObjectNotFound`) is yielded to the caller
    /// instead of silently truncating the walk, and iteration stops.
    fn next(&mut self) -> Option<Self::Item> {
        let oid = self.next.take()?;

        match self.database.parse_commit(&oid) {
            Ok(commit) => {
                self.next = commit.parent().cloned();
                Some(Ok((oid, commit)))
            }
            Err(err) => Some(Err(err)),
        }
    }
}
