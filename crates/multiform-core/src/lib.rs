//! multiform-core - Core library for multiform
//!
//! Provides the form state model, schema validation, and the date-time
//! selection model used by the web frontend and the CLI.

pub mod datetime;
pub mod error;
pub mod field;
pub mod models;
pub mod payload;
pub mod state;
pub mod submit;
pub mod validation;

pub use error::CoreError;
pub use field::{Field, FieldValue};
pub use models::{CheckedState, DayPlan, FormValues, Mode, ModeKind, Step, ValidForm};
pub use payload::{load_form_values, parse_form_values};
pub use state::{DayEntry, DayKey, FormState};
pub use submit::{submission_payload, LogSubmitHandler, SubmitHandler};
pub use validation::{validate, FieldError, FieldPath, ValidationReport};
