//! The `{users, profiles}` export surface.

use serde::Serialize;
use tracing::debug;

use crate::error::FixtureError;
use crate::profile::Profile;
use crate::user::User;

/// Borrowed view of both sequences, serialized with `users` first.
///
/// # Example
///
/// ```
/// use mock_data::fixture;
///
/// let json = fixture().export().to_json(false).expect("render export");
/// assert!(json.starts_with(r#"{"users":[{"id":1,"name":"Mota""#));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Export<'a> {
    users: &'a [User],
    profiles: &'a [Profile],
}

impl<'a> Export<'a> {
    /// Builds an export view over the given sequences.
    #[must_use]
    pub const fn new(users: &'a [User], profiles: &'a [Profile]) -> Self {
        Self { users, profiles }
    }

    /// Returns the exported users.
    #[must_use]
    pub const fn users(&self) -> &'a [User] {
        self.users
    }

    /// Returns the exported profiles.
    #[must_use]
    pub const fn profiles(&self) -> &'a [Profile] {
        self.profiles
    }

    /// Renders the export as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Serialize`] if serialization fails.
    pub fn to_json(&self, pretty: bool) -> Result<String, FixtureError> {
        debug!(
            user_count = self.users.len(),
            profile_count = self.profiles.len(),
            pretty,
            "rendering export"
        );
        let rendered = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        rendered.map_err(|err| FixtureError::Serialize {
            message: err.to_string(),
        })
    }
}
