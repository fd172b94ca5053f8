//! Loading candidate form values from JSON files

use crate::error::CoreError;
use crate::models::FormValues;
use std::path::Path;
use tracing::debug;

/// Parse a JSON document into `FormValues`; `path` is only used in errors
pub fn parse_form_values(content: &str, path: &Path) -> Result<FormValues, CoreError> {
    serde_json::from_str(content).map_err(|e| CoreError::JsonParse {
        path: path.to_path_buf(),
        message: e.to_string(),
        source: e,
    })
}

/// Read and parse a JSON file into `FormValues`
pub fn load_form_values(path: &Path) -> Result<FormValues, CoreError> {
    let content = std::fs::read_to_string(path).map_err(|e| CoreError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "Loaded form payload");
    parse_form_values(&content, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModeKind;
    use std::io::Write;

    #[test]
    fn test_load_form_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"email":"a@b.com","mode":"edit","phoneNumber":13800138000,"isCheck":false}}"#
        )
        .unwrap();

        let values = load_form_values(file.path()).unwrap();
        assert_eq!(values.email, "a@b.com");
        assert_eq!(values.mode, ModeKind::Edit);
        assert_eq!(values.phone_number, Some(13800138000));
    }

    #[test]
    fn test_missing_file() {
        let err = load_form_values(Path::new("/nonexistent/form.json")).unwrap_err();
        assert!(matches!(err, CoreError::FileRead { .. }));
    }

    #[test]
    fn test_bad_mode_is_parse_error() {
        let err = parse_form_values(r#"{"mode":"delete"}"#, Path::new("form.json")).unwrap_err();
        assert!(matches!(err, CoreError::JsonParse { .. }));
        assert!(err.to_string().contains("form.json"));
    }
}
