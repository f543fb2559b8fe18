//! Error types for fixture generation

use thiserror::Error;

use crate::user::UserStatus;

/// Result type alias using FixtureError
pub type Result<T> = std::result::Result<T, FixtureError>;

/// Fixture generation error types
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("no seeded record exists for status '{0}'")]
    UnsupportedStatus(UserStatus),

    #[error("unknown user status: {0}")]
    UnknownStatus(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
