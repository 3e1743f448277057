//! Client-side form rules for the auth forms.
//!
//! A failing rule blocks submission before any request is built.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern compiles")
});

/// Form inputs that carry validation rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Password,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Password => "Password",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(Field),
    #[error("Please provide a valid email address")]
    InvalidEmail,
}

impl FieldError {
    pub fn field(self) -> Field {
        match self {
            Self::Required(field) => field,
            Self::InvalidEmail => Field::Email,
        }
    }
}

/// Every rule failure from one validation pass, in form order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// First message for `field`, for display under its input.
    pub fn message(&self, field: Field) -> Option<String> {
        self.0.iter().find(|e| e.field() == field).map(ToString::to_string)
    }

    /// Flag `field` when nothing was typed. Whitespace counts as a value.
    pub fn require(&mut self, field: Field, value: &str) {
        if value.is_empty() {
            self.0.push(FieldError::Required(field));
        }
    }

    pub fn require_email(&mut self, value: &str) {
        if value.is_empty() {
            self.0.push(FieldError::Required(Field::Email));
        } else if !is_valid_email(value) {
            self.0.push(FieldError::InvalidEmail);
        }
    }

    /// `Ok(())` when no rule failed.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one rule failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
