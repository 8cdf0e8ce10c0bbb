//! Per-field validation rules
//!
//! Limits mirror the server's forms: the login form allows usernames of
//! 3-15 characters and passwords of at least 8, while the admin creation
//! form allows usernames up to 16 and passwords of at least 6.

use regex::Regex;

const LOGIN_USERNAME_MIN: usize = 3;
const LOGIN_USERNAME_MAX: usize = 15;
const LOGIN_PASSWORD_MIN: usize = 8;

const ADMIN_USERNAME_MIN: usize = 3;
const ADMIN_USERNAME_MAX: usize = 16;
const ADMIN_PASSWORD_MIN: usize = 6;

/// Outcome of a single field check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldCheck {
    Valid,
    Invalid(String),
}

impl FieldCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldCheck::Valid)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            FieldCheck::Valid => None,
            FieldCheck::Invalid(reason) => Some(reason),
        }
    }
}

fn length_between(value: &str, min: usize, max: usize) -> FieldCheck {
    let len = value.chars().count();
    if len < min || len > max {
        FieldCheck::Invalid(format!("must be between {} and {} characters", min, max))
    } else {
        FieldCheck::Valid
    }
}

/// Username rule for the login form
pub fn login_username(value: &str) -> FieldCheck {
    if value.is_empty() {
        return FieldCheck::Invalid("username is required".to_string());
    }
    length_between(value, LOGIN_USERNAME_MIN, LOGIN_USERNAME_MAX)
}

/// Password rule for the login form
pub fn login_password(value: &str) -> FieldCheck {
    if value.is_empty() {
        return FieldCheck::Invalid("password is required".to_string());
    }
    if value.chars().count() < LOGIN_PASSWORD_MIN {
        return FieldCheck::Invalid(format!(
            "must be at least {} characters",
            LOGIN_PASSWORD_MIN
        ));
    }
    FieldCheck::Valid
}

/// Username rule for the admin creation form
pub fn admin_username(value: &str) -> FieldCheck {
    if value.is_empty() {
        return FieldCheck::Invalid("username is required".to_string());
    }
    length_between(value, ADMIN_USERNAME_MIN, ADMIN_USERNAME_MAX)
}

/// Password rule for the admin creation form
pub fn admin_password(value: &str) -> FieldCheck {
    if value.chars().count() < ADMIN_PASSWORD_MIN {
        return FieldCheck::Invalid(format!(
            "must be at least {} characters",
            ADMIN_PASSWORD_MIN
        ));
    }
    FieldCheck::Valid
}

/// A field that must not be empty or whitespace-only
pub fn required(label: &str, value: &str) -> FieldCheck {
    if value.trim().is_empty() {
        FieldCheck::Invalid(format!("{} is required", label))
    } else {
        FieldCheck::Valid
    }
}

/// Email format check
pub fn email(value: &str) -> FieldCheck {
    // This regex is a compile-time constant, panicking is acceptable here
    // as it indicates a programming error in the codebase, not a runtime issue
    let re = Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,4}$")
        .expect("Invalid regex pattern - this is a bug in the codebase");

    if re.is_match(value) {
        FieldCheck::Valid
    } else {
        FieldCheck::Invalid("invalid email format".to_string())
    }
}

/// Phone numbers must contain only digits
pub fn phone_number(value: &str) -> FieldCheck {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        FieldCheck::Valid
    } else {
        FieldCheck::Invalid("must contain only numbers".to_string())
    }
}
