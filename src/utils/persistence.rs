//! JSON persistence helpers for files under ~/.flapper/.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the per-user data directory inside $HOME.
pub const DATA_DIR_NAME: &str = ".flapper";

/// Get the ~/.flapper/ directory path, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(DATA_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.flapper/.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(data_dir()?.join(filename))
}

/// Read a JSON file. `Ok(None)` when the file does not exist.
pub fn load_json_from<T: serde::de::DeserializeOwned>(path: &Path) -> io::Result<Option<T>> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    serde_json::from_str(&json)
        .map(Some)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Write a value as pretty-printed JSON, creating parent directories.
pub fn save_json_to<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "flapper-persistence-{}-{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_missing_returns_none() {
        let dir = scratch_dir("missing");
        let val: Option<Vec<String>> = load_json_from(&dir.join("nope.json")).unwrap();
        assert!(val.is_none());
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = scratch_dir("roundtrip");
        let path = dir.join("nested").join("data.json");
        let data = vec!["hello".to_string(), "world".to_string()];
        save_json_to(&path, &data).expect("save should succeed");

        let loaded: Option<Vec<String>> = load_json_from(&path).unwrap();
        assert_eq!(loaded, Some(data));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_load_invalid_json_is_invalid_data() {
        let dir = scratch_dir("invalid");
        let path = dir.join("bad.json");
        fs::write(&path, "{not json").unwrap();
        let err = load_json_from::<Vec<u32>>(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_save_path_format() {
        let path = save_path("test.json").expect("save_path should succeed");
        assert!(path.to_string_lossy().ends_with(".flapper/test.json"));
    }
}
