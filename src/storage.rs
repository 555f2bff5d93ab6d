use crate::models::{self, TranscriptKey};
use anyhow::{bail, Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Write one transcript document to the archive directory.
///
/// Creates the directory if missing and overwrites any prior file for the
/// same key. Empty documents are rejected without touching the filesystem.
pub fn persist(document: &Value, key: &TranscriptKey, output_dir: &Path) -> Result<PathBuf> {
    if models::is_empty_document(document) {
        bail!("no transcript data to save for {}", key);
    }

    std::fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "cannot create transcript directory: {}",
            output_dir.display()
        )
    })?;

    let path = output_dir.join(key.file_name());
    let rendered = to_pretty_json(document)?;
    std::fs::write(&path, rendered)
        .with_context(|| format!("failed to write transcript file: {}", path.display()))?;

    Ok(path)
}

// Archive files are indented with 4 spaces; serde_json's default pretty
// printer uses 2.
fn to_pretty_json(document: &Value) -> Result<Vec<u8>> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_persist_writes_expected_path_and_content() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("transcripts");
        let key = TranscriptKey::new("AAPL", 2023, 4);
        let document = json!({"transcript": "..."});

        let path = persist(&document, &key, &dir).unwrap();

        assert_eq!(path, dir.join("AAPL_2023_Q4.json"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(serde_json::from_str::<Value>(&written).unwrap(), document);
        // 4-space indentation
        assert!(written.contains("\n    \"transcript\""));
    }

    #[test]
    fn test_persist_overwrites_prior_file() {
        let temp_dir = TempDir::new().unwrap();
        let key = TranscriptKey::new("MSFT", 2021, 1);

        persist(&json!({"transcript": "first"}), &key, temp_dir.path()).unwrap();
        let path = persist(&json!({"transcript": "second"}), &key, temp_dir.path()).unwrap();

        let written: Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(written["transcript"], "second");
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_persist_rejects_empty_document() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("transcripts");
        let key = TranscriptKey::new("AAPL", 2020, 2);

        assert!(persist(&Value::Null, &key, &dir).is_err());
        assert!(persist(&json!({}), &key, &dir).is_err());
        assert!(persist(&json!([]), &key, &dir).is_err());
        // nothing touched the filesystem
        assert!(!dir.exists());
    }
}
