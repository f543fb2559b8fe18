//! iBank Login E2E Suite
//!
//! Rust-controlled browser tests for the login/authorization flow of the
//! iBank demo application.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Scenario Runner (Rust)                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ScenarioRunner                                             │
//! │    ├── SutHandle        acquire SUT, poll until reachable   │
//! │    ├── catalogue()      one row per login behavior          │
//! │    ├── resolve(row)     fixture values from ibank-fixtures  │
//! │    └── PlaywrightHandle row -> steps -> one browser script  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Scenario (table row)                                       │
//! │    ├── fixture: none | unregistered | active | blocked      │
//! │    ├── login/password: fixture | random | skip              │
//! │    └── expect: account page | error text | field hint       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each row runs in its own browser session; cookies and local storage are
//! cleared on every exit path, so no scenario leaks state into the next.

pub mod error;
pub mod locators;
pub mod playwright;
pub mod runner;
pub mod scenario;
pub mod step;
pub mod sut;

pub use error::{E2eError, E2eResult};
pub use runner::{RunnerConfig, ScenarioRunner};
pub use scenario::{catalogue, Scenario};
