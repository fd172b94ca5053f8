//! Wire-level form values
//!
//! `FormValues` is the loose, possibly invalid shape the user is editing. It
//! serializes with the same keys the browser form uses (`isCheck`,
//! `phoneNumber`, `days.N.steps.M.planName`, ...).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Number of blank steps created for each appended day
pub const STEPS_PER_DAY: usize = 3;

/// Discriminant selecting whether a phone number is required
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeKind {
    #[default]
    Create,
    Edit,
}

impl ModeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModeKind::Create => "create",
            ModeKind::Edit => "edit",
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(ModeKind::Create),
            "edit" => Ok(ModeKind::Edit),
            other => Err(format!("unknown mode: {}", other)),
        }
    }
}

/// Single named step inside a day plan
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    #[serde(default)]
    #[validate(length(min = 1, code = "required", message = "Plan name is required"))]
    pub plan_name: String,

    #[serde(default)]
    pub desc: String,
}

/// One day of plans
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// List length at the moment the day was appended; never renumbered
    #[serde(default)]
    pub day_index: usize,

    #[serde(default)]
    #[validate(nested)]
    pub steps: Vec<Step>,
}

impl DayPlan {
    /// Day with `STEPS_PER_DAY` blank steps
    pub fn blank(day_index: usize) -> Self {
        Self {
            day_index,
            steps: vec![Step::default(); STEPS_PER_DAY],
        }
    }
}

/// Current values of the form, valid or not
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub mode: ModeKind,

    /// Only meaningful in edit mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<i64>,

    #[serde(default)]
    pub is_check: bool,

    /// Present only while `is_check` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<DayPlan>>,

    #[serde(rename = "start_date", default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDateTime>,
}
