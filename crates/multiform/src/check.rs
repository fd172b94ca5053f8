//! `check` command: validate a saved form payload offline

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Table};
use multiform_core::{load_form_values, validate, FormValues, ValidForm, ValidationReport};
use std::path::Path;
use tracing::debug;

/// Load `path`, validate it, and return the rendered report plus validity
pub fn run_check(path: &Path, json: bool, no_color: bool) -> Result<(String, bool)> {
    let values = load_form_values(path)
        .with_context(|| format!("Failed to load form payload {}", path.display()))?;
    debug!(path = %path.display(), "Loaded form payload");

    let outcome = validate(&values);
    let valid = outcome.is_ok();
    let rendered = if json {
        format_json(&outcome)?
    } else {
        format_table(&outcome, no_color)
    };

    Ok((rendered, valid))
}

fn format_json(outcome: &Result<ValidForm, ValidationReport>) -> Result<String> {
    let value = match outcome {
        Ok(form) => serde_json::json!({
            "valid": true,
            "values": FormValues::from(form.clone()),
        }),
        Err(report) => serde_json::json!({
            "valid": false,
            "errors": report.errors,
        }),
    };
    serde_json::to_string_pretty(&value).context("Failed to serialize check result")
}

/// Human output: one row per violated constraint
fn format_table(outcome: &Result<ValidForm, ValidationReport>, no_color: bool) -> String {
    let report = match outcome {
        Ok(form) => {
            let days = form.checked.days().len();
            return format!(
                "Valid ({} mode, {} day plan{})",
                form.mode.kind(),
                days,
                if days == 1 { "" } else { "s" }
            );
        }
        Err(report) => report,
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if no_color {
        table.set_header(vec!["Path", "Code", "Message"]);
    } else {
        table.set_header(vec![
            Cell::new("Path").fg(Color::Cyan),
            Cell::new("Code").fg(Color::Cyan),
            Cell::new("Message").fg(Color::Cyan),
        ]);
    }

    for error in report.iter() {
        table.add_row(vec![
            error.path.to_string(),
            error.code.clone(),
            error.message.clone(),
        ]);
    }

    format!("{}\n{} invalid field(s)", table, report.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_payload(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("form.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_check_valid_payload() {
        let dir = TempDir::new().unwrap();
        let path = write_payload(&dir, r#"{"email": "a@b.com", "mode": "create"}"#);

        let (output, valid) = run_check(&path, false, true).unwrap();
        assert!(valid);
        assert!(output.contains("Valid (create mode, 0 day plans)"));
    }

    #[test]
    fn test_check_invalid_payload_lists_paths() {
        let dir = TempDir::new().unwrap();
        let path = write_payload(
            &dir,
            r#"{"email": "nope", "mode": "edit", "phoneNumber": 123}"#,
        );

        let (output, valid) = run_check(&path, false, true).unwrap();
        assert!(!valid);
        assert!(output.contains("email"));
        assert!(output.contains("phoneNumber"));
        assert!(output.contains("2 invalid field(s)"));
    }

    #[test]
    fn test_check_json_output() {
        let dir = TempDir::new().unwrap();
        let path = write_payload(
            &dir,
            r#"{"email": "a@b.com", "isCheck": true, "days": [
                {"dayIndex": 0, "steps": [
                    {"planName": "run", "desc": ""},
                    {"planName": "", "desc": ""},
                    {"planName": "swim", "desc": ""}
                ]}
            ]}"#,
        );

        let (output, valid) = run_check(&path, true, true).unwrap();
        assert!(!valid);

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["errors"][0]["path"], "days.0.steps.1.planName");
        assert_eq!(json["errors"][0]["code"], "required");
    }

    #[test]
    fn test_check_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = run_check(&dir.path().join("absent.json"), false, true).unwrap_err();
        assert!(err.to_string().contains("Failed to load form payload"));
    }
}
