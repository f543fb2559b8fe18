//! Audits the scenario table against the observed behavior of the login
//! form. Pure data checks; no browser involved.

use std::collections::HashSet;

use ibank_e2e::locators;
use ibank_e2e::scenario::{catalogue, FieldFill, FixtureKind, Outcome};

#[test]
fn the_table_covers_every_login_behavior() {
    let rows = catalogue();
    assert_eq!(rows.len(), 10);

    let names: HashSet<_> = rows.iter().map(|r| r.name).collect();
    for expected in [
        "login-active-user",
        "login-unregistered-user",
        "login-wrong-login",
        "login-wrong-password",
        "login-blocked-user",
        "login-blocked-wrong-password",
        "login-blocked-wrong-login",
        "login-missing-password",
        "login-missing-login",
        "login-missing-both",
    ] {
        assert!(names.contains(expected), "missing row {expected}");
    }
}

#[test]
fn only_the_happy_path_reaches_the_account_page() {
    let rows = catalogue();
    let happy: Vec<_> = rows
        .iter()
        .filter(|r| r.expect == Outcome::AccountPage)
        .collect();
    assert_eq!(happy.len(), 1);
    assert_eq!(happy[0].fixture, FixtureKind::Active);
    assert_eq!(happy[0].login, FieldFill::Fixture);
    assert_eq!(happy[0].password, FieldFill::Fixture);
}

/// The application checks credential correctness before account status:
/// only the exact credentials of a blocked account surface the blocked
/// message, every other miss on that account falls back to the generic
/// error. The table must preserve that ordering, not normalize it away.
#[test]
fn blocked_error_requires_exact_credentials() {
    let rows = catalogue();

    let blocked_rows: Vec<_> = rows
        .iter()
        .filter(|r| r.fixture == FixtureKind::Blocked)
        .collect();
    assert_eq!(blocked_rows.len(), 3);

    for row in &blocked_rows {
        let exact_credentials =
            row.login == FieldFill::Fixture && row.password == FieldFill::Fixture;
        let expected = if exact_credentials {
            Outcome::Blocked
        } else {
            Outcome::BadCredentials
        };
        assert_eq!(row.expect, expected, "row {}", row.name);
    }
}

#[test]
fn required_hints_are_scoped_to_the_empty_field() {
    for row in catalogue() {
        match row.expect {
            Outcome::LoginRequired => {
                assert_eq!(row.login, FieldFill::Skip, "row {}", row.name);
                assert_ne!(row.password, FieldFill::Skip, "row {}", row.name);
                assert_eq!(
                    row.expect.assertions(),
                    vec![(locators::LOGIN_FIELD_HINT, locators::TEXT_FIELD_REQUIRED)]
                );
            }
            Outcome::PasswordRequired => {
                assert_eq!(row.password, FieldFill::Skip, "row {}", row.name);
                assert_ne!(row.login, FieldFill::Skip, "row {}", row.name);
                assert_eq!(
                    row.expect.assertions(),
                    vec![(locators::PASSWORD_FIELD_HINT, locators::TEXT_FIELD_REQUIRED)]
                );
            }
            Outcome::BothRequired => {
                assert_eq!(row.login, FieldFill::Skip);
                assert_eq!(row.password, FieldFill::Skip);
                assert_eq!(row.expect.assertions().len(), 2);
            }
            _ => {}
        }
    }
}

#[test]
fn error_texts_are_asserted_verbatim() {
    assert_eq!(
        Outcome::BadCredentials.assertions(),
        vec![(
            locators::ERROR_NOTIFICATION,
            "Неверно указан логин или пароль"
        )]
    );
    assert_eq!(
        Outcome::Blocked.assertions(),
        vec![(locators::ERROR_NOTIFICATION, "Пользователь заблокирован")]
    );
    assert_eq!(
        Outcome::AccountPage.assertions(),
        vec![(locators::ACCOUNT_HEADING, "кабинет")]
    );
}
