//! Identifier and reference checks over a fixture table.
//!
//! # Rules
//!
//! - Profile ids are positive and unique
//! - User ids are positive and unique
//! - Every user's `profile_id` names an existing profile

use std::collections::HashSet;

use tracing::debug;

use crate::error::FixtureError;
use crate::profile::Profile;
use crate::user::User;

/// Checks the rules above in order and returns the first violation.
pub(crate) fn check(profiles: &[Profile], users: &[User]) -> Result<(), FixtureError> {
    let mut profile_ids = HashSet::with_capacity(profiles.len());
    for (index, profile) in profiles.iter().enumerate() {
        if profile.id.get() == 0 {
            return Err(FixtureError::ZeroProfileId { index });
        }
        if !profile_ids.insert(profile.id) {
            return Err(FixtureError::DuplicateProfileId { id: profile.id });
        }
    }

    let mut user_ids = HashSet::with_capacity(users.len());
    for (index, user) in users.iter().enumerate() {
        if user.id.get() == 0 {
            return Err(FixtureError::ZeroUserId { index });
        }
        if !user_ids.insert(user.id) {
            return Err(FixtureError::DuplicateUserId { id: user.id });
        }
    }

    if let Some(orphan) = users
        .iter()
        .find(|user| !profile_ids.contains(&user.profile_id))
    {
        return Err(FixtureError::UnknownProfile {
            user_id: orphan.id,
            profile_id: orphan.profile_id,
        });
    }

    debug!(
        profile_count = profiles.len(),
        user_count = users.len(),
        "fixture integrity check passed"
    );
    Ok(())
}
