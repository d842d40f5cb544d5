pub mod branch_name;

/// Characters and sequences a branch name may not contain: whitespace,
/// control characters, path separators, and ref-syntax metacharacters.
pub(crate) const INVALID_BRANCH_NAME_REGEX: &str = r"[\s:?*\[\]\\^~/\x00-\x1f]|\.\.|^\.|\.$";
