//! Signup form state and validation, mirrored from the account form the
//! web client ships. Field checks collect per-field messages so the form
//! can render them inline instead of failing on the first problem.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::api::Sex;

const USER_ID_LENGTH: &str = "User id must be 8 to 16 characters long.";
const PASSWORD_CONTENT: &str =
    "Password must mix letters, digits and a symbol, with no spaces.";
const PASSWORD_LENGTH: &str = "Password must be 8 to 16 characters long.";
const EMAIL_INVALID: &str = "Email address is not valid.";
const USERNAME_REQUIRED: &str = "Name is required.";

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"[a-z0-9]+@[a-z0-9]+\.[a-z]{2,4}").expect("email pattern is valid")
    })
}

/// Everything the signup endpoint expects, serialized camelCase
#[derive(Debug, Clone, Serialize)]
pub struct SignupForm {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub password: String,
    pub email: String,
    pub username: String,
    pub nickname: String,
    pub sex: Sex,
    pub city: String,
    pub district: String,
    #[serde(rename = "roadAddress")]
    pub road_address: String,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            password: String::new(),
            email: String::new(),
            username: String::new(),
            nickname: String::new(),
            sex: Sex::Man,
            city: String::new(),
            district: String::new(),
            road_address: String::new(),
        }
    }
}

/// Per-field validation messages; `None` means the field passed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupIssues {
    pub user_id: Option<&'static str>,
    pub password: Option<&'static str>,
    pub email: Option<&'static str>,
    pub username: Option<&'static str>,
}

impl SignupIssues {
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none()
            && self.password.is_none()
            && self.email.is_none()
            && self.username.is_none()
    }
}

impl SignupForm {
    /// Run every field check; `Err` carries one message per failing field.
    /// When a password breaks both the length and content rules, the
    /// length message wins.
    pub fn validate(&self) -> Result<(), SignupIssues> {
        let mut issues = SignupIssues::default();

        if !(8..=16).contains(&self.user_id.chars().count()) {
            issues.user_id = Some(USER_ID_LENGTH);
        }

        if !password_content_ok(&self.password) {
            issues.password = Some(PASSWORD_CONTENT);
        }
        if !(8..=16).contains(&self.password.chars().count()) {
            issues.password = Some(PASSWORD_LENGTH);
        }

        if !email_pattern().is_match(&self.email) {
            issues.email = Some(EMAIL_INVALID);
        }

        if self.username.is_empty() {
            issues.username = Some(USERNAME_REQUIRED);
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

/// Letters, digits and at least one symbol, no whitespace anywhere
fn password_content_ok(password: &str) -> bool {
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_alpha = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_symbol = password
        .chars()
        .any(|c| !c.is_alphanumeric() && c != '_' && !c.is_whitespace());
    let has_whitespace = password.chars().any(char::is_whitespace);

    has_digit && has_alpha && has_symbol && !has_whitespace
}
