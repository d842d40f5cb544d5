//! User-facing operations, implemented as `impl Repository` blocks with
//! one file per command.

pub mod porcelain;
