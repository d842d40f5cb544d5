//! Object types stored in the database: file blobs and commit records.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;

/// Length of a hex-encoded SHA-1 digest.
pub const OBJECT_ID_LENGTH: usize = 40;
