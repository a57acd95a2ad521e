//! File system utilities.

use crate::Result;
use serde_json::{Map, Value};
use std::io::Write;
use std::path::Path;

/// Create the parent directory of `path` if needed.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Read a JSON object file. A missing or empty file is an empty object.
pub fn read_json_object(path: &Path) -> Result<Map<String, Value>> {
    if !path.exists() {
        return Ok(Map::new());
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Map::new());
    }

    match serde_json::from_str(&content)? {
        Value::Object(map) => Ok(map),
        other => Err(crate::Error::other(format!(
            "Expected a JSON object in {}, found {}",
            path.display(),
            other
        ))),
    }
}

/// Write a JSON object file, creating parent directories.
pub fn write_json_object(path: &Path, object: &Map<String, Value>) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(object)?;

    // Write a sibling temp file and rename it into place.
    let tmp = path.with_extension("json.tmp");
    let mut file = std::fs::File::create(&tmp)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_file_is_empty() {
        let map = read_json_object(Path::new("/nonexistent/state.json")).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_write_creates_parents() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("state.json");

        let mut map = Map::new();
        map.insert("language".to_string(), json!("ar"));
        write_json_object(&path, &map).unwrap();

        assert!(path.exists());
        assert_eq!(read_json_object(&path).unwrap(), map);
    }

    #[test]
    fn test_non_object_is_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        std::fs::write(&path, "[1, 2]").unwrap();
        assert!(read_json_object(&path).is_err());
    }
}
