//! Random credential generation and user construction
//!
//! Logins and passwords are drawn independently from fixed character sets
//! with bounded length. The space is large enough that repeated runs do not
//! collide with each other or with the seeded records.

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::error::{FixtureError, Result};
use crate::seeds::SeedCatalog;
use crate::user::{User, UserStatus};

const LOGIN_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const LOGIN_LEN_RANGE: std::ops::RangeInclusive<usize> = 8..=12;
const PASSWORD_LEN_RANGE: std::ops::RangeInclusive<usize> = 10..=16;

/// Random lowercase alphabetic login, 8 to 12 characters.
pub fn random_login() -> String {
    let mut rng = rand::thread_rng();
    let len = rng.gen_range(LOGIN_LEN_RANGE);
    (0..len)
        .map(|_| LOGIN_CHARSET[rng.gen_range(0..LOGIN_CHARSET.len())] as char)
        .collect()
}

/// Random alphanumeric password, 10 to 16 characters.
pub fn random_password() -> String {
    let mut rng = rand::thread_rng();
    let len = rng.gen_range(PASSWORD_LEN_RANGE);
    (&mut rng)
        .sample_iter(Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// A freshly randomized user tagged with `status`.
///
/// The credentials are not known to the application's store regardless of
/// the tag; use [`registered_user`] when the scenario needs a record the
/// store recognizes.
pub fn user(status: UserStatus) -> User {
    User::new(random_login(), random_password(), status)
}

/// The seeded user for `status`.
///
/// Only `Active` and `Blocked` have records in the application's store;
/// asking for anything else is a caller bug and fails fast.
pub fn registered_user(catalog: &SeedCatalog, status: UserStatus) -> Result<User> {
    let creds = match status {
        UserStatus::Active => &catalog.active,
        UserStatus::Blocked => &catalog.blocked,
        other => return Err(FixtureError::UnsupportedStatus(other)),
    };
    Ok(User::new(
        creds.login.clone(),
        creds.password.clone(),
        status,
    ))
}
