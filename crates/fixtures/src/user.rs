//! User fixture model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FixtureError;

/// Account status as the application's backing store understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// No record in the application's store.
    Unregistered,
    /// Seeded record that is allowed to log in.
    Active,
    /// Seeded record that is refused with the blocked message.
    Blocked,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Unregistered => "unregistered",
            UserStatus::Active => "active",
            UserStatus::Blocked => "blocked",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unregistered" => Ok(UserStatus::Unregistered),
            "active" => Ok(UserStatus::Active),
            "blocked" => Ok(UserStatus::Blocked),
            other => Err(FixtureError::UnknownStatus(other.to_string())),
        }
    }
}

/// A login/password pair tagged with the account status it represents.
///
/// Built fresh for every scenario and discarded afterwards.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    pub password: String,
    pub status: UserStatus,
}

impl User {
    pub fn new(
        login: impl Into<String>,
        password: impl Into<String>,
        status: UserStatus,
    ) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
            status,
        }
    }
}

// Passwords stay out of logs and failure reports.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .field("status", &self.status)
            .finish()
    }
}
