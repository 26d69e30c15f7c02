//! Path tokens and transition identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Marker every path token starts with.
pub const PATH_MARKER: char = '#';

/// Token used when the location carries no fragment.
pub const DEFAULT_PATH: &str = "#home";

/// Opaque identifier for a logical page section.
///
/// A token drives both the address-bar fragment (`#about`) and the page
/// lookup (`about`). Tokens are compared verbatim.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathToken(String);

impl PathToken {
    /// Build a token from a raw href or fragment.
    ///
    /// A missing marker is added. An empty input, or a bare marker, yields
    /// the default token.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let id = trimmed.strip_prefix(PATH_MARKER).unwrap_or(trimmed);
        if id.is_empty() {
            Self::default()
        } else {
            Self(format!("{PATH_MARKER}{id}"))
        }
    }

    /// Resolve the token for a location fragment, falling back to the default.
    pub fn from_fragment(fragment: Option<&str>) -> Self {
        fragment.map(Self::parse).unwrap_or_default()
    }

    /// The page identifier, i.e. the token without its leading marker.
    pub fn page_id(&self) -> &str {
        &self.0[PATH_MARKER.len_utf8()..]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PathToken {
    fn default() -> Self {
        Self(DEFAULT_PATH.to_string())
    }
}

impl fmt::Display for PathToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for PathToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PathToken({})", self.0)
    }
}

impl From<&str> for PathToken {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl PartialEq<str> for PathToken {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PathToken {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Identifier of one accepted transition.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionId(Uuid);

impl TransitionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TransitionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
