//! Table-driven scenario catalogue for the login flow
//!
//! Every behavior of the login form is one row: which fixture it starts
//! from, what goes into each field, and what the page must show afterwards.
//! Keeping the catalogue as data makes the edge-case policy auditable in one
//! place instead of being spread across one procedure per case.

use serde::Serialize;

use ibank_fixtures::{self as fixtures, SeedCatalog, User, UserStatus};

use crate::error::E2eResult;
use crate::locators;
use crate::step::{Step, DEFAULT_ASSERT_TIMEOUT_MS};

/// Which user record a scenario starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureKind {
    /// No credentials at all; the form is submitted empty.
    None,
    /// Freshly randomized credentials unknown to the store.
    Unregistered,
    /// The seeded active account.
    Active,
    /// The seeded blocked account.
    Blocked,
}

/// Where a form field's value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldFill {
    /// Use the fixture's value.
    Fixture,
    /// Overwrite the fixture's value with a fresh random one.
    Random,
    /// Leave the field empty.
    Skip,
}

/// What the page must show after submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Personal-account heading appears.
    AccountPage,
    /// Generic bad-credentials notification.
    BadCredentials,
    /// Blocked-account notification.
    Blocked,
    /// Requirement hint under the login field.
    LoginRequired,
    /// Requirement hint under the password field.
    PasswordRequired,
    /// Requirement hints under both fields.
    BothRequired,
}

impl Outcome {
    /// Locator/text pairs that must become visible for this outcome.
    pub fn assertions(&self) -> Vec<(&'static str, &'static str)> {
        match self {
            Outcome::AccountPage => {
                vec![(locators::ACCOUNT_HEADING, locators::TEXT_ACCOUNT)]
            }
            Outcome::BadCredentials => {
                vec![(locators::ERROR_NOTIFICATION, locators::TEXT_BAD_CREDENTIALS)]
            }
            Outcome::Blocked => {
                vec![(locators::ERROR_NOTIFICATION, locators::TEXT_BLOCKED)]
            }
            Outcome::LoginRequired => {
                vec![(locators::LOGIN_FIELD_HINT, locators::TEXT_FIELD_REQUIRED)]
            }
            Outcome::PasswordRequired => {
                vec![(locators::PASSWORD_FIELD_HINT, locators::TEXT_FIELD_REQUIRED)]
            }
            Outcome::BothRequired => vec![
                (locators::PASSWORD_FIELD_HINT, locators::TEXT_FIELD_REQUIRED),
                (locators::LOGIN_FIELD_HINT, locators::TEXT_FIELD_REQUIRED),
            ],
        }
    }
}

/// One row of the catalogue.
#[derive(Debug, Clone, Serialize)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub fixture: FixtureKind,
    pub login: FieldFill,
    pub password: FieldFill,
    pub expect: Outcome,
}

/// The full scenario table: one row per behavior of the login form.
///
/// A blocked account submitted with a wrong password gets the generic
/// bad-credentials error, not the blocked one: the application validates the
/// password before it consults the account status. That ordering is observed
/// behavior and is pinned here as data.
pub fn catalogue() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "login-active-user",
            description: "Registered active user logs in and lands on the account page",
            fixture: FixtureKind::Active,
            login: FieldFill::Fixture,
            password: FieldFill::Fixture,
            expect: Outcome::AccountPage,
        },
        Scenario {
            name: "login-unregistered-user",
            description: "Credentials unknown to the store are rejected",
            fixture: FixtureKind::Unregistered,
            login: FieldFill::Fixture,
            password: FieldFill::Fixture,
            expect: Outcome::BadCredentials,
        },
        Scenario {
            name: "login-wrong-login",
            description: "Random login with a valid password is rejected",
            fixture: FixtureKind::Active,
            login: FieldFill::Random,
            password: FieldFill::Fixture,
            expect: Outcome::BadCredentials,
        },
        Scenario {
            name: "login-wrong-password",
            description: "Valid login with a random password is rejected",
            fixture: FixtureKind::Active,
            login: FieldFill::Fixture,
            password: FieldFill::Random,
            expect: Outcome::BadCredentials,
        },
        Scenario {
            name: "login-blocked-user",
            description: "Blocked account with correct credentials sees the blocked message",
            fixture: FixtureKind::Blocked,
            login: FieldFill::Fixture,
            password: FieldFill::Fixture,
            expect: Outcome::Blocked,
        },
        Scenario {
            name: "login-blocked-wrong-password",
            description: "Blocked account with a wrong password sees the generic error",
            fixture: FixtureKind::Blocked,
            login: FieldFill::Fixture,
            password: FieldFill::Random,
            expect: Outcome::BadCredentials,
        },
        Scenario {
            name: "login-blocked-wrong-login",
            description: "Random login with the blocked account's password sees the generic error",
            fixture: FixtureKind::Blocked,
            login: FieldFill::Random,
            password: FieldFill::Fixture,
            expect: Outcome::BadCredentials,
        },
        Scenario {
            name: "login-missing-password",
            description: "Empty password field is flagged inline",
            fixture: FixtureKind::Active,
            login: FieldFill::Fixture,
            password: FieldFill::Skip,
            expect: Outcome::PasswordRequired,
        },
        Scenario {
            name: "login-missing-login",
            description: "Empty login field is flagged inline",
            fixture: FixtureKind::Active,
            login: FieldFill::Skip,
            password: FieldFill::Fixture,
            expect: Outcome::LoginRequired,
        },
        Scenario {
            name: "login-missing-both",
            description: "Both fields empty are flagged inline",
            fixture: FixtureKind::None,
            login: FieldFill::Skip,
            password: FieldFill::Skip,
            expect: Outcome::BothRequired,
        },
    ]
}

/// A scenario with concrete field values.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedScenario {
    pub name: &'static str,
    pub login_value: Option<String>,
    pub password_value: Option<String>,
    pub expect: Outcome,
}

impl Scenario {
    /// Materialize field values: seeded credentials for registered fixtures,
    /// fresh random values everywhere else.
    pub fn resolve(&self, seeds: &SeedCatalog) -> E2eResult<ResolvedScenario> {
        let base: Option<User> = match self.fixture {
            FixtureKind::None => None,
            FixtureKind::Unregistered => Some(fixtures::user(UserStatus::Unregistered)),
            FixtureKind::Active => Some(fixtures::registered_user(seeds, UserStatus::Active)?),
            FixtureKind::Blocked => Some(fixtures::registered_user(seeds, UserStatus::Blocked)?),
        };

        // A fixture fill with no fixture record degenerates to an empty
        // field; the catalogue never pairs the two.
        let login_value = match self.login {
            FieldFill::Skip => None,
            FieldFill::Random => Some(fixtures::random_login()),
            FieldFill::Fixture => base.as_ref().map(|u| u.login.clone()),
        };
        let password_value = match self.password {
            FieldFill::Skip => None,
            FieldFill::Random => Some(fixtures::random_password()),
            FieldFill::Fixture => base.as_ref().map(|u| u.password.clone()),
        };

        Ok(ResolvedScenario {
            name: self.name,
            login_value,
            password_value,
            expect: self.expect,
        })
    }
}

impl ResolvedScenario {
    /// Compile the row into driver steps: open the page, fill what the row
    /// calls for, submit, then wait for the expected text.
    pub fn steps(&self) -> Vec<Step> {
        let mut steps = vec![Step::Navigate {
            url: "/".to_string(),
        }];

        if let Some(value) = &self.login_value {
            steps.push(Step::Fill {
                locator: locators::LOGIN_INPUT.to_string(),
                value: value.clone(),
            });
        }
        if let Some(value) = &self.password_value {
            steps.push(Step::Fill {
                locator: locators::PASSWORD_INPUT.to_string(),
                value: value.clone(),
            });
        }

        steps.push(Step::Click {
            locator: locators::LOGIN_BUTTON.to_string(),
        });

        for (locator, text) in self.expect.assertions() {
            steps.push(Step::ExpectText {
                locator: locator.to_string(),
                text: text.to_string(),
                timeout_ms: DEFAULT_ASSERT_TIMEOUT_MS,
            });
        }

        steps
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use test_case::test_case;

    use super::*;

    fn row(name: &str) -> Scenario {
        catalogue()
            .into_iter()
            .find(|s| s.name == name)
            .unwrap_or_else(|| panic!("no row named {name}"))
    }

    #[test]
    fn names_are_unique() {
        let rows = catalogue();
        let names: HashSet<_> = rows.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), rows.len());
    }

    #[test_case("login-active-user", Outcome::AccountPage)]
    #[test_case("login-unregistered-user", Outcome::BadCredentials)]
    #[test_case("login-wrong-login", Outcome::BadCredentials)]
    #[test_case("login-wrong-password", Outcome::BadCredentials)]
    #[test_case("login-blocked-user", Outcome::Blocked)]
    #[test_case("login-blocked-wrong-password", Outcome::BadCredentials)]
    #[test_case("login-blocked-wrong-login", Outcome::BadCredentials)]
    #[test_case("login-missing-password", Outcome::PasswordRequired)]
    #[test_case("login-missing-login", Outcome::LoginRequired)]
    #[test_case("login-missing-both", Outcome::BothRequired)]
    fn row_expects(name: &str, expect: Outcome) {
        assert_eq!(row(name).expect, expect);
    }

    #[test]
    fn registered_rows_resolve_to_seeded_credentials() {
        let seeds = SeedCatalog::default();
        let resolved = row("login-active-user").resolve(&seeds).unwrap();
        assert_eq!(resolved.login_value.as_deref(), Some(seeds.active.login.as_str()));
        assert_eq!(
            resolved.password_value.as_deref(),
            Some(seeds.active.password.as_str())
        );
    }

    #[test]
    fn randomized_fields_differ_between_resolutions() {
        let seeds = SeedCatalog::default();
        let wrong_password = row("login-wrong-password");
        let first = wrong_password.resolve(&seeds).unwrap();
        let second = wrong_password.resolve(&seeds).unwrap();
        assert_ne!(first.password_value, second.password_value);
        // The login stays the seeded one in both resolutions.
        assert_eq!(first.login_value, second.login_value);
    }

    #[test]
    fn blocked_row_with_wrong_password_keeps_the_seeded_login() {
        let seeds = SeedCatalog::default();
        let resolved = row("login-blocked-wrong-password").resolve(&seeds).unwrap();
        assert_eq!(
            resolved.login_value.as_deref(),
            Some(seeds.blocked.login.as_str())
        );
        assert_ne!(
            resolved.password_value.as_deref(),
            Some(seeds.blocked.password.as_str())
        );
    }

    #[test]
    fn skipped_fields_produce_no_fill_steps() {
        let seeds = SeedCatalog::default();

        let missing_password = row("login-missing-password").resolve(&seeds).unwrap();
        let steps = missing_password.steps();
        let fills: Vec<_> = steps
            .iter()
            .filter(|s| matches!(s, Step::Fill { .. }))
            .collect();
        assert_eq!(fills.len(), 1);
        assert!(matches!(
            fills[0],
            Step::Fill { locator, .. } if locator == locators::LOGIN_INPUT
        ));

        let missing_both = row("login-missing-both").resolve(&seeds).unwrap();
        assert!(missing_both
            .steps()
            .iter()
            .all(|s| !matches!(s, Step::Fill { .. })));
    }

    #[test]
    fn every_row_compiles_to_navigate_submit_assert() {
        let seeds = SeedCatalog::default();
        for scenario in catalogue() {
            let steps = scenario.resolve(&seeds).unwrap().steps();
            assert!(matches!(steps.first(), Some(Step::Navigate { .. })), "{}", scenario.name);
            assert!(
                steps.iter().any(|s| matches!(s, Step::Click { .. })),
                "{}",
                scenario.name
            );
            assert!(
                steps.last().map(Step::is_assertion).unwrap_or(false),
                "{}",
                scenario.name
            );
        }
    }

    #[test]
    fn both_required_asserts_each_field_hint() {
        let assertions = Outcome::BothRequired.assertions();
        assert_eq!(assertions.len(), 2);
        let locs: HashSet<_> = assertions.iter().map(|(l, _)| *l).collect();
        assert!(locs.contains(locators::LOGIN_FIELD_HINT));
        assert!(locs.contains(locators::PASSWORD_FIELD_HINT));
    }
}
