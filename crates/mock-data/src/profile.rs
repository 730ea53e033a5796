//! Profile records.
//!
//! A profile is the role a user is attached to. Many users may share one
//! profile.

use std::fmt;

use serde::Serialize;

/// Positive integer identifier of a [`Profile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ProfileId(u32);

impl ProfileId {
    /// Wraps a raw identifier.
    ///
    /// Zero is representable here; [`DataFixture::check_integrity`] rejects it.
    ///
    /// [`DataFixture::check_integrity`]: crate::DataFixture::check_integrity
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role category carried by a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    /// Regular account.
    Common,
    /// Account with administrative rights.
    Administrator,
}

impl ProfileKind {
    /// Returns the wire name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Administrator => "administrator",
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role record referenced by users.
///
/// Serializes as `{"id": 1, "type": "common"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Profile {
    /// Unique identifier.
    pub id: ProfileId,
    /// Role category, exported under the `type` key.
    #[serde(rename = "type")]
    pub kind: ProfileKind,
}
