//! iBank Fixture Generation
//!
//! Builds the synthetic user records the login scenarios feed into the form:
//! unregistered users with freshly randomized credentials, and the
//! active/blocked users the application's backing store is seeded with.
//!
//! Every record is created fresh per scenario and never reused; there is no
//! shared mutable state beyond the thread-local random source, so generation
//! is safe from concurrent test cases.

pub mod error;
pub mod generator;
pub mod seeds;
pub mod user;

pub use error::{FixtureError, Result};
pub use generator::{random_login, random_password, registered_user, user};
pub use seeds::{Credentials, SeedCatalog};
pub use user::{User, UserStatus};
