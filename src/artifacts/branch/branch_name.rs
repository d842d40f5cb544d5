use crate::artifacts::branch::INVALID_BRANCH_NAME_REGEX;
use crate::errors::JotError;
use anyhow::Context;

/// A validated branch name.
///
/// Reference files are stored flat under the refs area, so a branch name is
/// a single path component; `HEAD` is reserved for the symbolic current-
/// branch pointer and can never name a branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

pub const HEAD_REF_NAME: &str = "HEAD";

impl BranchName {
    pub fn try_parse(name: String) -> anyhow::Result<Self> {
        if name.is_empty() || name == HEAD_REF_NAME {
            return Err(JotError::InvalidName(name).into());
        }

        let re = regex::Regex::new(INVALID_BRANCH_NAME_REGEX)
            .with_context(|| format!("invalid branch name regex: {INVALID_BRANCH_NAME_REGEX}"))?;

        if re.is_match(&name) {
            Err(JotError::InvalidName(name).into())
        } else {
            Ok(Self(name))
        }
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
