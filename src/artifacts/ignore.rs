//! Prefix-based ignore predicate.
//!
//! The core never parses ignore configuration itself: the caller loads the
//! rules (one path prefix per line in the metadata area's `ignore` file)
//! and passes them into `add`. A repository-relative path is excluded when
//! it starts with any configured prefix.

use anyhow::Context;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreRules {
    prefixes: Vec<String>,
}

impl IgnoreRules {
    pub fn new(prefixes: Vec<String>) -> Self {
        IgnoreRules { prefixes }
    }

    /// Load rules from an ignore file, one prefix per line.
    ///
    /// A missing file is an empty rule set, not an error; blank lines are
    /// skipped.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("unable to read ignore file {}", path.display()))?;
        let prefixes = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();

        Ok(IgnoreRules { prefixes })
    }

    pub fn matches(&self, relative_path: &str) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| relative_path.starts_with(prefix.as_str()))
    }
}
