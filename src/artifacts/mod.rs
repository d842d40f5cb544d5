//! Core data structures and algorithms:
//!
//! - `branch`: branch name validation
//! - `ignore`: prefix-based ignore predicate
//! - `log`: commit history traversal
//! - `objects`: stored object types (blob, commit) and their identifiers

pub mod branch;
pub mod ignore;
pub mod log;
pub mod objects;
