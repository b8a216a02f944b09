//! Parameter validation for draft operations.
//!
//! Each parameter struct implements [`Validate`] by describing its rules
//! against a [`Report`]. [`check`] runs those rules and turns any collected
//! violations into a [`ValidationError`] naming every offending key.

use std::fmt;

use email_address::EmailAddress;
use email_address::Options as AddressOptions;
use thiserror::Error;

use super::models::Recipient;

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub key: String,
    pub reason: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.reason)
    }
}

#[derive(Debug, Clone, Error)]
#[error("{}", render(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn keys(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.key.as_str()).collect()
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.violations.iter().any(|v| v.key == key)
    }
}

fn render(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub trait Validate {
    fn validate(&self, report: &mut Report);
}

/// Runs the rules of `value` and fails if any of them were violated.
pub fn check<T: Validate + ?Sized>(value: &T) -> Result<(), ValidationError> {
    let mut report = Report::default();
    value.validate(&mut report);
    report.finish()
}

/// Collects violations while rules are evaluated.
#[derive(Debug, Default)]
pub struct Report {
    violations: Vec<Violation>,
}

impl Report {
    pub fn fail(&mut self, key: impl Into<String>, reason: impl Into<String>) {
        self.violations.push(Violation {
            key: key.into(),
            reason: reason.into(),
        });
    }

    pub fn required_non_empty(&mut self, key: &str, value: Option<&str>) {
        match value {
            None => self.fail(key, "is required"),
            Some(value) => self.non_empty(key, value),
        }
    }

    pub fn non_empty(&mut self, key: &str, value: &str) {
        if value.is_empty() {
            self.fail(key, "must not be empty");
        }
    }

    pub fn min_length(&mut self, key: &str, value: Option<&str>, min: usize) {
        match value {
            None => self.fail(key, "is required"),
            Some(value) if value.chars().count() < min => {
                self.fail(key, format!("must be at least {min} characters long"));
            }
            Some(_) => {}
        }
    }

    pub fn email(&mut self, key: &str, value: &str) {
        // Bare addresses only; `Name <addr>` belongs in the recipient name field.
        let options = AddressOptions::default().without_display_text();
        if EmailAddress::parse_with_options(value, options).is_err() {
            self.fail(key, "must be a valid email address");
        }
    }

    pub fn string_list(&mut self, key: &str, values: &[String]) {
        for (index, value) in values.iter().enumerate() {
            self.non_empty(&format!("{key}[{index}]"), value);
        }
    }

    pub fn recipients(&mut self, key: &str, recipients: &[Recipient]) {
        for (index, recipient) in recipients.iter().enumerate() {
            self.email(&format!("{key}[{index}].email"), &recipient.email);
        }
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            return Ok(());
        }

        Err(ValidationError {
            violations: self.violations,
        })
    }
}
