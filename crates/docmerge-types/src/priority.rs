use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// Merge priority attached to metadata, sections, merge points and targets.
///
/// Precedence is three-tiered: an explicit priority overrides everything that
/// is not explicit, a relative priority only protects against untagged
/// content, and untagged content falls back to sequence order. Two priorities
/// are compared exclusively through [`Priority::strictly_outranks`] and
/// [`Priority::outranks_or_ties`].
///
/// On the wire a priority is a table `{ type = "explicit", value = 10 }`. A
/// missing table, an empty `type`, or `type = "none"` all mean
/// [`Priority::None`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawPriority", into = "RawPriority")]
pub enum Priority {
    /// No priority; ordering falls back to input position.
    #[default]
    None,
    /// Outranks untagged content; compared by magnitude against its peers.
    Relative(i64),
    /// Outranks any non-explicit priority regardless of magnitude.
    Explicit(i64),
}

impl Priority {
    /// An explicit priority with the given magnitude.
    pub const fn explicit(value: i64) -> Self {
        Self::Explicit(value)
    }

    /// A relative priority with the given magnitude.
    pub const fn relative(value: i64) -> Self {
        Self::Relative(value)
    }

    /// The tag of this priority.
    pub fn kind(&self) -> PriorityKind {
        match self {
            Self::None => PriorityKind::None,
            Self::Relative(_) => PriorityKind::Relative,
            Self::Explicit(_) => PriorityKind::Explicit,
        }
    }

    /// The magnitude, or `None` for an untagged priority.
    pub fn magnitude(&self) -> Option<i64> {
        match self {
            Self::None => None,
            Self::Relative(v) | Self::Explicit(v) => Some(*v),
        }
    }

    /// Returns `true` for a tagged priority with a negative magnitude.
    pub fn has_negative_magnitude(&self) -> bool {
        self.magnitude().is_some_and(|v| v < 0)
    }

    /// Returns `true` if `self` takes precedence over `other`.
    ///
    /// Equal priorities never outrank each other.
    pub fn strictly_outranks(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Explicit(a), Self::Explicit(b)) => a > b,
            (Self::Explicit(_), _) => true,
            (Self::Relative(a), Self::Relative(b)) => a > b,
            (Self::Relative(_), Self::None) => true,
            _ => false,
        }
    }

    /// Returns `true` if `self` takes precedence over or ties with `other`.
    ///
    /// Used wherever a later input should override an earlier one of equal
    /// rank, so ties (including none vs none) favor `self`.
    pub fn outranks_or_ties(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Explicit(a), Self::Explicit(b)) => a >= b,
            (Self::Explicit(_), _) => true,
            (Self::Relative(a), Self::Relative(b)) => a >= b,
            (Self::Relative(_), Self::None) => true,
            (Self::None, Self::None) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Relative(v) => write!(f, "relative({v})"),
            Self::Explicit(v) => write!(f, "explicit({v})"),
        }
    }
}

/// The tag of a [`Priority`], as written in the `type` field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PriorityKind {
    #[default]
    None,
    Relative,
    Explicit,
}

impl PriorityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Relative => "relative",
            Self::Explicit => "explicit",
        }
    }
}

impl FromStr for PriorityKind {
    type Err = TypeError;

    /// Case-insensitive; the empty string means `none`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "explicit" => Ok(Self::Explicit),
            "relative" => Ok(Self::Relative),
            "none" | "" => Ok(Self::None),
            _ => Err(TypeError::UnknownPriorityKind(s.to_string())),
        }
    }
}

impl fmt::Display for PriorityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PriorityKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PriorityKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Wire shape of a priority table.
#[derive(Serialize, Deserialize)]
struct RawPriority {
    #[serde(rename = "type", default)]
    kind: PriorityKind,
    #[serde(default)]
    value: i64,
}

impl From<RawPriority> for Priority {
    fn from(raw: RawPriority) -> Self {
        match raw.kind {
            PriorityKind::None => Self::None,
            PriorityKind::Relative => Self::Relative(raw.value),
            PriorityKind::Explicit => Self::Explicit(raw.value),
        }
    }
}

impl From<Priority> for RawPriority {
    fn from(priority: Priority) -> Self {
        Self {
            kind: priority.kind(),
            value: priority.magnitude().unwrap_or(0),
        }
    }
}
