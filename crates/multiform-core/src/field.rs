//! Field addressing for `set_field` / `watch`

use crate::error::CoreError;
use crate::models::{DayPlan, ModeKind};
use crate::validation::{FieldPath, PathSegment};
use chrono::NaiveDateTime;
use std::fmt;
use std::str::FromStr;

/// Addressable form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Mode,
    PhoneNumber,
    IsCheck,
    Days,
    DayIndex { day: usize },
    PlanName { day: usize, step: usize },
    Desc { day: usize, step: usize },
    StartDate,
}

impl Field {
    /// Dotted path used in validation errors
    pub fn path(&self) -> FieldPath {
        let root = FieldPath::root();
        match *self {
            Field::Email => root.key("email"),
            Field::Mode => root.key("mode"),
            Field::PhoneNumber => root.key("phoneNumber"),
            Field::IsCheck => root.key("isCheck"),
            Field::Days => root.key("days"),
            Field::DayIndex { day } => root.key("days").index(day).key("dayIndex"),
            Field::PlanName { day, step } => root
                .key("days")
                .index(day)
                .key("steps")
                .index(step)
                .key("planName"),
            Field::Desc { day, step } => root
                .key("days")
                .index(day)
                .key("steps")
                .index(step)
                .key("desc"),
            Field::StartDate => root.key("start_date"),
        }
    }

    fn expected(&self) -> &'static str {
        match self {
            Field::Email | Field::PlanName { .. } | Field::Desc { .. } => "text",
            Field::Mode => "mode",
            Field::PhoneNumber => "integer",
            Field::IsCheck => "bool",
            Field::Days => "days",
            Field::DayIndex { .. } => "index",
            Field::StartDate => "timestamp",
        }
    }

    pub(crate) fn mismatch(&self, actual: &FieldValue) -> CoreError {
        CoreError::TypeMismatch {
            field: self.to_string(),
            expected: self.expected(),
            actual: actual.kind(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl TryFrom<&FieldPath> for Field {
    type Error = CoreError;

    fn try_from(path: &FieldPath) -> Result<Self, Self::Error> {
        use PathSegment::{Index, Key};

        let field = match path.segments() {
            [Key(k)] => match k.as_str() {
                "email" => Some(Field::Email),
                "mode" => Some(Field::Mode),
                "phoneNumber" => Some(Field::PhoneNumber),
                "isCheck" => Some(Field::IsCheck),
                "days" => Some(Field::Days),
                "start_date" => Some(Field::StartDate),
                _ => None,
            },
            [Key(days), Index(day), Key(leaf)] if days == "days" && leaf == "dayIndex" => {
                Some(Field::DayIndex { day: *day })
            }
            [Key(days), Index(day), Key(steps), Index(step), Key(leaf)]
                if days == "days" && steps == "steps" =>
            {
                match leaf.as_str() {
                    "planName" => Some(Field::PlanName {
                        day: *day,
                        step: *step,
                    }),
                    "desc" => Some(Field::Desc {
                        day: *day,
                        step: *step,
                    }),
                    _ => None,
                }
            }
            _ => None,
        };

        field.ok_or_else(|| CoreError::UnknownField {
            path: path.to_string(),
        })
    }
}

impl FromStr for Field {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path: FieldPath = match s.parse() {
            Ok(path) => path,
            Err(never) => match never {},
        };
        Field::try_from(&path)
    }
}

/// Value carried in and out of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Mode(ModeKind),
    Integer(Option<i64>),
    Bool(bool),
    Index(usize),
    Days(Option<Vec<DayPlan>>),
    Timestamp(Option<NaiveDateTime>),
}

impl FieldValue {
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Mode(_) => "mode",
            FieldValue::Integer(_) => "integer",
            FieldValue::Bool(_) => "bool",
            FieldValue::Index(_) => "index",
            FieldValue::Days(_) => "days",
            FieldValue::Timestamp(_) => "timestamp",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<ModeKind> for FieldValue {
    fn from(value: ModeKind) -> Self {
        FieldValue::Mode(value)
    }
}
