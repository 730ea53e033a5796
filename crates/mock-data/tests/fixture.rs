//! Integration tests for the built-in fixture.
//!
//! These tests check the literal records and the identifier invariants
//! through the public API only.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::collections::HashSet;

use mock_data::{
    DataFixture, FixtureError, Profile, ProfileId, ProfileKind, User, UserId, UserStatus, fixture,
};
use rstest::rstest;

#[test]
fn profile_ids_are_unique() {
    let ids: HashSet<_> = fixture().profiles().iter().map(|profile| profile.id).collect();
    assert_eq!(ids.len(), fixture().profiles().len());
}

#[test]
fn user_ids_are_unique() {
    let ids: HashSet<_> = fixture().users().iter().map(|user| user.id).collect();
    assert_eq!(ids.len(), fixture().users().len());
}

#[test]
fn every_user_references_an_existing_profile() {
    let data = fixture();
    for user in data.users() {
        assert!(
            data.find_profile(user.profile_id).is_some(),
            "user {} references missing profile {}",
            user.id,
            user.profile_id
        );
    }
}

#[test]
fn profiles_match_literal_records() {
    assert_eq!(
        fixture().profiles(),
        [
            Profile {
                id: ProfileId::new(1),
                kind: ProfileKind::Common,
            },
            Profile {
                id: ProfileId::new(2),
                kind: ProfileKind::Administrator,
            },
        ]
    );
}

#[rstest]
#[case(1, "Mota", "mota@guilherr.me", 20, 1, UserStatus::Active)]
#[case(2, "Guilherme", "guilhermebromonschenkel@gmail.com", 22, 2, UserStatus::Inactive)]
#[case(3, "Daniella", "dani@gmail.com", 19, 1, UserStatus::Blocked)]
fn users_match_literal_records(
    #[case] id: u32,
    #[case] name: &str,
    #[case] email: &str,
    #[case] age: u8,
    #[case] profile_id: u32,
    #[case] status: UserStatus,
) {
    let user = fixture().find_user(UserId::new(id)).expect("user exists");
    assert_eq!(user.name, name);
    assert_eq!(user.email, email);
    assert_eq!(user.age, age);
    assert_eq!(user.profile_id, ProfileId::new(profile_id));
    assert_eq!(user.status, status);
}

#[test]
fn users_keep_declaration_order() {
    let ids: Vec<_> = fixture().users().iter().map(|user| user.id.get()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn repeated_reads_are_identical() {
    let first = *fixture();
    let second = *fixture();
    assert_eq!(first, second);
    assert_eq!(first.users(), second.users());
    assert_eq!(first.profiles(), second.profiles());
}

#[test]
fn fixture_is_shareable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| fixture().users().len()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("reader thread"), 3);
    }
}

#[test]
fn crafted_fixture_with_duplicate_user_fails_integrity_check() {
    static PROFILES: [Profile; 1] = [Profile {
        id: ProfileId::new(1),
        kind: ProfileKind::Common,
    }];
    static USERS: [User; 2] = [
        User {
            id: UserId::new(8),
            name: "First",
            email: "first@example.com",
            age: 25,
            profile_id: ProfileId::new(1),
            status: UserStatus::Active,
        },
        User {
            id: UserId::new(8),
            name: "Second",
            email: "second@example.com",
            age: 26,
            profile_id: ProfileId::new(1),
            status: UserStatus::Active,
        },
    ];

    let data = DataFixture::from_parts(&PROFILES, &USERS);

    assert_eq!(
        data.check_integrity(),
        Err(FixtureError::DuplicateUserId { id: UserId::new(8) })
    );
}

#[test]
fn crafted_fixture_with_zero_profile_id_fails_integrity_check() {
    static PROFILES: [Profile; 1] = [Profile {
        id: ProfileId::new(0),
        kind: ProfileKind::Administrator,
    }];
    static USERS: [User; 1] = [User {
        id: UserId::new(1),
        name: "Zero",
        email: "zero@example.com",
        age: 41,
        profile_id: ProfileId::new(0),
        status: UserStatus::Active,
    }];

    let data = DataFixture::from_parts(&PROFILES, &USERS);

    assert_eq!(
        data.check_integrity(),
        Err(FixtureError::ZeroProfileId { index: 0 })
    );
}
