use std::fmt;

use serde::{Deserialize, Serialize};

/// How a merge target's content combines with a merge point's existing content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStrategy {
    /// New content wholly replaces the old.
    #[default]
    Replace,
    /// Old content, a newline, then the new content.
    Append,
    /// New content, a newline, then the old content.
    Prepend,
}

impl MergeStrategy {
    /// Resolve a strategy tag. Unrecognized tags behave as `replace`.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "append" => Self::Append,
            "prepend" => Self::Prepend,
            _ => Self::Replace,
        }
    }

    /// Returns `true` if `tag` names one of the known strategies.
    pub fn is_valid_tag(tag: &str) -> bool {
        matches!(tag, "replace" | "append" | "prepend")
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::Append => "append",
            Self::Prepend => "prepend",
        }
    }

    /// Combine `old` and `new` content.
    pub fn apply(&self, old: &str, new: &str) -> String {
        match self {
            Self::Replace => new.to_string(),
            Self::Append if old.is_empty() => new.to_string(),
            Self::Append => format!("{old}\n{new}"),
            Self::Prepend if old.is_empty() => new.to_string(),
            Self::Prepend => format!("{new}\n{old}"),
        }
    }
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
