//! Reading JSON and YAML documents from disk.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{GridError, Result};

/// Extensions probed by [`locate`], in priority order.
pub const DOCUMENT_EXTENSIONS: &[&str] = &[".json", ".yaml", ".yml"];

/// Finds a document for `path`.
///
/// An existing path is returned as-is. Otherwise each of
/// [`DOCUMENT_EXTENSIONS`] is appended in turn and the first existing file
/// wins, so `grid` finds `grid.json` before `grid.yaml`.
pub fn locate(path: &Path) -> Option<PathBuf> {
    if path.is_file() {
        return Some(path.to_path_buf());
    }
    DOCUMENT_EXTENSIONS.iter().find_map(|ext| {
        let mut candidate = path.as_os_str().to_os_string();
        candidate.push(ext);
        let candidate = PathBuf::from(candidate);
        candidate.is_file().then_some(candidate)
    })
}

/// Reads a document, parsing `.json` files as JSON and anything else as
/// YAML.
pub fn load_document(path: &Path) -> Result<Value> {
    let resolved = locate(path).ok_or_else(|| GridError::Load {
        path: path.to_path_buf(),
        message: "no such file".to_string(),
    })?;

    let text = std::fs::read_to_string(&resolved).map_err(|e| GridError::Load {
        path: resolved.clone(),
        message: e.to_string(),
    })?;

    let is_json = resolved
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

    tracing::debug!(path = %resolved.display(), json = is_json, "loading document");

    if is_json {
        serde_json::from_str(&text).map_err(|e| GridError::parse(Some(resolved.as_path()), e))
    } else {
        serde_yaml::from_str(&text).map_err(|e| GridError::parse(Some(resolved.as_path()), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_json_and_yaml() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.json"), r#"{ "rowHeight": 30 }"#).unwrap();
        fs::write(dir.path().join("b.yml"), "rowHeight: 31\n").unwrap();

        assert_eq!(
            load_document(&dir.path().join("a.json")).unwrap(),
            json!({ "rowHeight": 30 })
        );
        assert_eq!(
            load_document(&dir.path().join("b.yml")).unwrap(),
            json!({ "rowHeight": 31 })
        );
    }

    #[test]
    fn test_locate_priority() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("grid.yaml"), "a: 1\n").unwrap();
        fs::write(dir.path().join("grid.json"), "{}").unwrap();

        let found = locate(&dir.path().join("grid")).unwrap();
        assert_eq!(found.file_name().unwrap(), "grid.json");
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_document(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, GridError::Load { .. }));
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ nope").unwrap();
        let err = load_document(&path).unwrap_err();
        assert!(err.to_string().contains("bad.json"));
    }
}
