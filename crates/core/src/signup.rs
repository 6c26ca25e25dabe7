//! Sign-up form rules.
//!
//! [`build_rules`] declares the checks for the `user` object submitted to the
//! sign-up endpoint. The rule set is built once at startup and shared.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::validation::{FieldSpec, Rule, RuleSet};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const FIRST_NAME: &str = "user.first_name";
pub const LAST_NAME: &str = "user.last_name";
pub const EMAIL: &str = "user.email";
pub const PASSWORD: &str = "user.password";
pub const AGE: &str = "user.age";

/// Minimum password length in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Anything other than an ASCII letter or underscore: digits, whitespace,
/// punctuation, and non-ASCII characters.
static NAME_FORBIDDEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z_]").expect("valid regex"));

/// Every pattern must match for a password to be complex enough: eight or
/// more characters on a single line, an uppercase letter, a lowercase letter,
/// a digit, and a character that is neither a word character nor whitespace.
static PASSWORD_REQUIREMENTS: LazyLock<[Regex; 5]> = LazyLock::new(|| {
    [
        r"^[^\n\r\x{2028}\x{2029}]{8,}$",
        r"[A-Z]",
        r"[a-z]",
        r"[0-9]",
        r"[^A-Za-z0-9_\s]",
    ]
    .map(|pattern| Regex::new(pattern).expect("valid regex"))
});

// ---------------------------------------------------------------------------
// Rule set
// ---------------------------------------------------------------------------

/// Build the sign-up rule set.
///
/// | Field        | Trim | Checks                                        |
/// |--------------|------|-----------------------------------------------|
/// | `first_name` | yes  | required, string, letters/underscore only     |
/// | `last_name`  | no   | required, string, letters/underscore only     |
/// | `email`      | yes  | required, email                               |
/// | `password`   | yes  | required, min length 8, complexity            |
/// | `age`        | no   | required, integer                             |
///
/// "Required" uses loose truthiness, so an age of `0` is reported as missing.
pub fn build_rules() -> RuleSet {
    RuleSet::new(vec![
        FieldSpec::new(FIRST_NAME)
            .trim()
            .check(Rule::Required, "First name is required")
            .check(Rule::IsString, "First name must be a string")
            .check(
                Rule::Custom(is_clean_name),
                "First name must not contain special characters or numbers",
            ),
        FieldSpec::new(LAST_NAME)
            .check(Rule::Required, "Last name is required")
            .check(Rule::IsString, "Last name must be a string")
            .check(
                Rule::Custom(is_clean_name),
                "Last name must not contain special characters or numbers",
            ),
        FieldSpec::new(EMAIL)
            .trim()
            .check(Rule::Required, "Email is required")
            .check(Rule::IsEmail, "Email must be a valid email address"),
        FieldSpec::new(PASSWORD)
            .trim()
            .check(Rule::Required, "Password is required")
            .check(
                Rule::MinLength(MIN_PASSWORD_LENGTH),
                "Password must be at least 8 characters long",
            )
            .check(
                Rule::Custom(is_complex_password),
                "Password must contain at least one uppercase letter, one lowercase letter, one number, and one special character",
            ),
        FieldSpec::new(AGE)
            .check(Rule::Required, "Age is Required")
            .check(Rule::IsInt, "Age must be an Integer"),
    ])
}

fn is_clean_name(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|name| !NAME_FORBIDDEN_RE.is_match(name))
}

fn is_complex_password(value: &Value) -> bool {
    value.as_str().is_some_and(|password| {
        PASSWORD_REQUIREMENTS
            .iter()
            .all(|requirement| requirement.is_match(password))
    })
}
