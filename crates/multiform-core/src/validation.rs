//! Full-schema validation of form values
//!
//! The accepted shape is the conjunction of two independent choices:
//! `mode` decides whether `phoneNumber` is required, `isCheck` decides
//! whether `days` is required. Leaf rules (email syntax, non-empty plan
//! names) come from `validator`; the discriminated composition is done here
//! over the tagged unions in [`crate::models::valid`].

use crate::models::{CheckedState, FormValues, Mode, ModeKind, PhoneNumber, ValidForm};
use heck::ToLowerCamelCase;
use serde::{Serialize, Serializer};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use validator::{Validate, ValidateEmail, ValidateRegex, ValidationErrors, ValidationErrorsKind};

/// Error codes attached to [`FieldError`]
pub mod codes {
    pub const EMAIL: &str = "email";
    pub const REQUIRED: &str = "required";
    pub const PHONE_DIGITS: &str = "phone_digits";
}

/// One segment of a dotted field path
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Dotted/indexed field address, e.g. `days.1.steps.0.planName`
///
/// Ordering compares segment by segment, so `days.2` sorts before `days.10`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.0.push(PathSegment::Key(key.into()));
        self
    }

    pub fn index(mut self, index: usize) -> Self {
        self.0.push(PathSegment::Index(index));
        self
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            match segment {
                PathSegment::Key(key) => f.write_str(key)?,
                PathSegment::Index(index) => write!(f, "{}", index)?,
            }
        }
        Ok(())
    }
}

impl FromStr for FieldPath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments = s
            .split('.')
            .filter(|part| !part.is_empty())
            .map(|part| match part.parse::<usize>() {
                Ok(index) => PathSegment::Index(index),
                Err(_) => PathSegment::Key(part.to_string()),
            })
            .collect();
        Ok(Self(segments))
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Single violated constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub path: FieldPath,
    pub code: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: FieldPath, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path,
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Every constraint violated by a candidate value, ordered by path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// First message at `path`, for rendering beside a single field
    pub fn message_for(&self, path: &FieldPath) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| &e.path == path)
            .map(|e| e.message.as_str())
    }

    fn sort(&mut self) {
        self.errors
            .sort_by(|a, b| a.path.cmp(&b.path).then_with(|| a.code.cmp(&b.code)));
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.errors.len())
    }
}

/// Validate a candidate value against the full schema
pub fn validate(values: &FormValues) -> Result<ValidForm, ValidationReport> {
    let mut report = ValidationReport::new();

    if !is_valid_email(&values.email) {
        report.push(FieldError::new(
            FieldPath::root().key("email"),
            codes::EMAIL,
            "Invalid email address",
        ));
    }

    let mode = validate_mode(values, &mut report);
    let checked = validate_checked(values, &mut report);

    report.sort();

    match (mode, checked) {
        (Some(mode), Some(checked)) if report.is_empty() => Ok(ValidForm {
            email: values.email.clone(),
            mode,
            checked,
            start_date: values.start_date,
        }),
        _ => Err(report),
    }
}

/// Address syntax plus a dotted domain ending in a 2+ letter TLD
fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
            .expect("email pattern compiles")
    })
}

fn is_valid_email(email: &str) -> bool {
    email.validate_email()
        && !email.starts_with('.')
        && !email.contains("..")
        && email.validate_regex(email_regex())
}

fn validate_mode(values: &FormValues, report: &mut ValidationReport) -> Option<Mode> {
    match values.mode {
        ModeKind::Create => Some(Mode::Create),
        ModeKind::Edit => {
            let path = FieldPath::root().key("phoneNumber");
            match values.phone_number {
                None => {
                    report.push(FieldError::new(
                        path,
                        codes::REQUIRED,
                        "Phone number is required",
                    ));
                    None
                }
                Some(raw) => match PhoneNumber::new(raw) {
                    Some(phone_number) => Some(Mode::Edit { phone_number }),
                    None => {
                        report.push(FieldError::new(
                            path,
                            codes::PHONE_DIGITS,
                            format!("Phone number must be exactly {} digits", PhoneNumber::DIGITS),
                        ));
                        None
                    }
                },
            }
        }
    }
}

fn validate_checked(values: &FormValues, report: &mut ValidationReport) -> Option<CheckedState> {
    if !values.is_check {
        return Some(CheckedState::Unchecked);
    }

    let days_path = FieldPath::root().key("days");
    let Some(days) = &values.days else {
        report.push(FieldError::new(
            days_path,
            codes::REQUIRED,
            "Day plans are required",
        ));
        return None;
    };

    let before = report.len();
    for (index, day) in days.iter().enumerate() {
        if let Err(errors) = day.validate() {
            collect_validator_errors(&days_path.clone().index(index), &errors, report);
        }
    }

    (report.len() == before).then(|| CheckedState::Checked { days: days.clone() })
}

/// Flatten `validator`'s nested error tree into path-addressed errors
fn collect_validator_errors(
    prefix: &FieldPath,
    errors: &ValidationErrors,
    report: &mut ValidationReport,
) {
    for (field, kind) in errors.errors() {
        let name: &str = field;
        let path = prefix.clone().key(name.to_lower_camel_case());
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    report.push(FieldError::new(path.clone(), error.code.to_string(), message));
                }
            }
            ValidationErrorsKind::Struct(inner) => {
                collect_validator_errors(&path, inner, report);
            }
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_validator_errors(&path.clone().index(*index), inner, report);
                }
            }
        }
    }
}
