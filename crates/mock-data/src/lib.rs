//! Static profile and user records for demonstrations and tutorials.
//!
//! The crate exposes a fixed table of two profiles and three users. Reads are
//! infallible and always return the same `'static` data.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Ordered, read-only access to `profiles` and `users`
//! - Lookups by identifier, profile, and status
//! - An integrity check for identifier uniqueness and profile references
//! - A `{users, profiles}` JSON export
//!
//! # Example
//!
//! ```
//! use mock_data::{ProfileKind, UserStatus, fixture};
//!
//! let data = fixture();
//! assert_eq!(data.profiles()[1].kind, ProfileKind::Administrator);
//!
//! let blocked: Vec<_> = data
//!     .users_with_status(UserStatus::Blocked)
//!     .map(|user| user.name)
//!     .collect();
//! assert_eq!(blocked, ["Daniella"]);
//! ```

mod error;
mod export;
mod fixture;
mod integrity;
mod profile;
mod user;

pub use error::FixtureError;
pub use export::Export;
pub use fixture::{DataFixture, fixture};
pub use profile::{Profile, ProfileId, ProfileKind};
pub use user::{User, UserId, UserStatus};
