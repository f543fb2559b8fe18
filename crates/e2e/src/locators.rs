//! DOM contract of the login page
//!
//! The application exposes stable `data-test-id` hooks; everything the suite
//! locates or asserts against lives here, so a markup change is a one-file
//! fix. Texts are asserted verbatim as the page renders them.

/// Login input inside its field wrapper.
pub const LOGIN_INPUT: &str = "//span[@data-test-id='login']//child::input";

/// Password input inside its field wrapper.
pub const PASSWORD_INPUT: &str = "//span[@data-test-id='password']//child::input";

/// Form submit button.
pub const LOGIN_BUTTON: &str = "//button[@data-test-id='action-login']";

/// Page heading shown after a successful login.
pub const ACCOUNT_HEADING: &str = "//h2";

/// Body of the error notification popup.
pub const ERROR_NOTIFICATION: &str =
    "//div[@data-test-id='error-notification']//child::div[@class='notification__content']";

/// Inline hint under the login field.
pub const LOGIN_FIELD_HINT: &str =
    "//span[@data-test-id='login']//child::span[@class='input__sub']";

/// Inline hint under the password field.
pub const PASSWORD_FIELD_HINT: &str =
    "//span[@data-test-id='password']//child::span[@class='input__sub']";

/// Fragment of the personal-account heading.
pub const TEXT_ACCOUNT: &str = "кабинет";

/// Error shown for any credential pair the store does not recognize.
pub const TEXT_BAD_CREDENTIALS: &str = "Неверно указан логин или пароль";

/// Error shown for a blocked account submitted with its correct credentials.
pub const TEXT_BLOCKED: &str = "Пользователь заблокирован";

/// Inline requirement hint under an empty field.
pub const TEXT_FIELD_REQUIRED: &str = "Поле обязательно";
