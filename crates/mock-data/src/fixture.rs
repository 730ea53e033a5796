//! The built-in profile and user table.
//!
//! Records live in `static` arrays and are handed out as `&'static` slices,
//! so every read returns the same data without allocation or locking.

use crate::error::FixtureError;
use crate::export::Export;
use crate::integrity;
use crate::profile::{Profile, ProfileId, ProfileKind};
use crate::user::{User, UserId, UserStatus};

static PROFILES: [Profile; 2] = [
    Profile {
        id: ProfileId::new(1),
        kind: ProfileKind::Common,
    },
    Profile {
        id: ProfileId::new(2),
        kind: ProfileKind::Administrator,
    },
];

static USERS: [User; 3] = [
    User {
        id: UserId::new(1),
        name: "Mota",
        email: "mota@guilherr.me",
        age: 20,
        profile_id: ProfileId::new(1),
        status: UserStatus::Active,
    },
    User {
        id: UserId::new(2),
        name: "Guilherme",
        email: "guilhermebromonschenkel@gmail.com",
        age: 22,
        profile_id: ProfileId::new(2),
        status: UserStatus::Inactive,
    },
    User {
        id: UserId::new(3),
        name: "Daniella",
        email: "dani@gmail.com",
        age: 19,
        profile_id: ProfileId::new(1),
        status: UserStatus::Blocked,
    },
];

static BUILTIN: DataFixture = DataFixture::from_parts(&PROFILES, &USERS);

/// Returns the built-in fixture.
///
/// Every call returns the same instance.
///
/// # Example
///
/// ```
/// use mock_data::fixture;
///
/// let data = fixture();
/// assert_eq!(data.profiles().len(), 2);
/// assert_eq!(data.users().len(), 3);
/// ```
#[must_use]
pub fn fixture() -> &'static DataFixture {
    &BUILTIN
}

/// Read-only view over ordered profile and user sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataFixture {
    profiles: &'static [Profile],
    users: &'static [User],
}

impl DataFixture {
    /// Builds a fixture over caller-supplied tables.
    ///
    /// No checks are made here; call [`DataFixture::check_integrity`] to
    /// validate identifiers and references.
    #[must_use]
    pub const fn from_parts(profiles: &'static [Profile], users: &'static [User]) -> Self {
        Self { profiles, users }
    }

    /// Returns the profiles in declaration order.
    #[must_use]
    pub const fn profiles(&self) -> &'static [Profile] {
        self.profiles
    }

    /// Returns the users in declaration order.
    #[must_use]
    pub const fn users(&self) -> &'static [User] {
        self.users
    }

    /// Finds a profile by identifier.
    #[must_use]
    pub fn find_profile(&self, id: ProfileId) -> Option<&'static Profile> {
        self.profiles.iter().find(|profile| profile.id == id)
    }

    /// Finds a user by identifier.
    #[must_use]
    pub fn find_user(&self, id: UserId) -> Option<&'static User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Resolves the profile a user belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::UnknownProfile`] when the user's `profile_id`
    /// does not match any profile in this fixture.
    pub fn profile_of(&self, user: &User) -> Result<&'static Profile, FixtureError> {
        self.find_profile(user.profile_id)
            .ok_or(FixtureError::UnknownProfile {
                user_id: user.id,
                profile_id: user.profile_id,
            })
    }

    /// Iterates over the users attached to a profile, in table order.
    pub fn users_with_profile(&self, id: ProfileId) -> impl Iterator<Item = &'static User> {
        self.users.iter().filter(move |user| user.profile_id == id)
    }

    /// Iterates over the users in a given status, in table order.
    pub fn users_with_status(&self, status: UserStatus) -> impl Iterator<Item = &'static User> {
        self.users.iter().filter(move |user| user.status == status)
    }

    /// Validates identifier uniqueness and profile references.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, checking profile ids (zero, then
    /// duplicates), then user ids the same way, then each user's
    /// `profile_id`.
    pub fn check_integrity(&self) -> Result<(), FixtureError> {
        integrity::check(self.profiles, self.users)
    }

    /// Returns the `{users, profiles}` export view.
    #[must_use]
    pub const fn export(&self) -> Export<'static> {
        Export::new(self.users, self.profiles)
    }
}
