//! User records.

use std::fmt;

use serde::Serialize;

use crate::profile::ProfileId;

/// Positive integer identifier of a [`User`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(u32);

impl UserId {
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

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserStatus {
    /// The account can be used.
    Active,
    /// The account exists but is dormant.
    Inactive,
    /// The account has been blocked.
    Blocked,
}

impl UserStatus {
    /// Returns the wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Blocked => "BLOCKED",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A person record attached to a profile.
///
/// The email is carried verbatim; its format is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct User {
    /// Unique identifier.
    pub id: UserId,
    /// Display name.
    pub name: &'static str,
    /// Contact address.
    pub email: &'static str,
    /// Age in years.
    pub age: u8,
    /// Profile this user belongs to.
    pub profile_id: ProfileId,
    /// Account status.
    pub status: UserStatus,
}
