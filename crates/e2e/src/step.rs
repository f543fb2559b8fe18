//! Step vocabulary scenarios compile to

use serde::{Deserialize, Serialize};

/// Default wait for text assertions, matching the driver's polling wait.
pub const DEFAULT_ASSERT_TIMEOUT_MS: u64 = 5_000;

/// A single browser action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Open a path relative to the SUT base URL.
    Navigate { url: String },

    /// Set an input's value via its XPath locator.
    Fill { locator: String, value: String },

    /// Click the element at the locator.
    Click { locator: String },

    /// Wait until the element's text contains `text`, or fail on timeout.
    ExpectText {
        locator: String,
        text: String,
        timeout_ms: u64,
    },
}

impl Step {
    /// Short label used in logs and failure reports.
    pub fn label(&self) -> String {
        match self {
            Step::Navigate { url } => format!("navigate:{url}"),
            Step::Fill { locator, .. } => format!("fill:{locator}"),
            Step::Click { locator } => format!("click:{locator}"),
            Step::ExpectText { locator, .. } => format!("expect:{locator}"),
        }
    }

    /// Whether the step belongs to a scenario's assert phase.
    pub fn is_assertion(&self) -> bool {
        matches!(self, Step::ExpectText { .. })
    }
}
