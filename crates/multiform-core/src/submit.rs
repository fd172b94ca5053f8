//! Submit handler seam
//!
//! The form hands a validated value to a `SubmitHandler` and nothing else.
//! Persistence or network submission would live behind this trait; the
//! handlers shipped here only log.

use crate::models::{FormValues, ValidForm};
use tracing::{info, warn};

/// Receives the normalized value after a successful submit
pub trait SubmitHandler {
    fn on_valid_submit(&mut self, form: &ValidForm);
}

impl<F> SubmitHandler for F
where
    F: FnMut(&ValidForm),
{
    fn on_valid_submit(&mut self, form: &ValidForm) {
        self(form)
    }
}

/// JSON payload in the wire shape (inactive branches omitted)
pub fn submission_payload(form: &ValidForm) -> serde_json::Result<String> {
    serde_json::to_string(&FormValues::from(form.clone()))
}

/// Logs the submitted payload through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSubmitHandler;

impl SubmitHandler for LogSubmitHandler {
    fn on_valid_submit(&mut self, form: &ValidForm) {
        match submission_payload(form) {
            Ok(payload) => info!(payload = %payload, "Form submitted"),
            Err(e) => warn!(error = %e, "Form submitted but payload could not be serialized"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CheckedState, Mode};

    fn form() -> ValidForm {
        ValidForm {
            email: "a@b.com".to_string(),
            mode: Mode::Create,
            checked: CheckedState::Unchecked,
            start_date: None,
        }
    }

    #[test]
    fn test_closure_is_a_handler() {
        let mut seen = Vec::new();
        let mut handler = |f: &ValidForm| seen.push(f.email.clone());
        handler.on_valid_submit(&form());
        assert_eq!(seen, vec!["a@b.com".to_string()]);
    }

    #[test]
    fn test_payload_uses_wire_shape() {
        let payload = submission_payload(&form()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["isCheck"], false);
        assert!(json.get("days").is_none());
    }

    #[test]
    fn test_log_handler_does_not_panic_without_subscriber() {
        LogSubmitHandler.on_valid_submit(&form());
    }
}
