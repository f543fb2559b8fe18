//! Error types for the login E2E suite

use thiserror::Error;

/// Result type alias using E2eError
pub type E2eResult<T> = Result<T, E2eError>;

#[derive(Error, Debug)]
pub enum E2eError {
    #[error("SUT failed to start: {0}")]
    SutStartup(String),

    #[error("SUT not reachable after {attempts} attempts")]
    SutUnreachable { attempts: usize },

    #[error("Playwright not found. Install with: npm install playwright && npx playwright install")]
    PlaywrightNotFound,

    #[error("driver error in step '{step}': {reason}")]
    Driver { step: String, reason: String },

    #[error("expected text {expected:?} never appeared at {locator}")]
    AssertionTimeout { locator: String, expected: String },

    #[error("no scenario named '{0}'")]
    UnknownScenario(String),

    #[error("fixture error: {0}")]
    Fixture(#[from] ibank_fixtures::FixtureError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl E2eError {
    /// Environment trouble (SUT/driver plumbing) as opposed to a product
    /// behavior failure. Assertion timeouts are the only failures that say
    /// something about the application itself.
    pub fn is_environment(&self) -> bool {
        !matches!(self, E2eError::AssertionTimeout { .. })
    }
}
