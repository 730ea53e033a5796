//! Error types for the mock-data crate.
//!
//! Reads from the fixture never fail. These errors cover the integrity check
//! and JSON rendering.

use thiserror::Error;

use crate::profile::ProfileId;
use crate::user::UserId;

/// Errors raised while validating or exporting a fixture.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// A profile carries the identifier zero.
    #[error("profile at index {index} has id 0; ids must be positive")]
    ZeroProfileId {
        /// Position of the profile in its sequence.
        index: usize,
    },

    /// A user carries the identifier zero.
    #[error("user at index {index} has id 0; ids must be positive")]
    ZeroUserId {
        /// Position of the user in its sequence.
        index: usize,
    },

    /// Two profiles share the same identifier.
    #[error("duplicate profile id {id}")]
    DuplicateProfileId {
        /// The repeated identifier.
        id: ProfileId,
    },

    /// Two users share the same identifier.
    #[error("duplicate user id {id}")]
    DuplicateUserId {
        /// The repeated identifier.
        id: UserId,
    },

    /// A user references a profile that is not in the fixture.
    #[error("user {user_id} references unknown profile {profile_id}")]
    UnknownProfile {
        /// The user holding the dangling reference.
        user_id: UserId,
        /// The profile identifier that could not be resolved.
        profile_id: ProfileId,
    },

    /// The export could not be rendered as JSON.
    #[error("failed to serialize export: {message}")]
    Serialize {
        /// Description of the serializer failure.
        message: String,
    },
}
