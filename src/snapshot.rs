//! Snapshot files
//!
//! A snapshot is one [`AppConfig`] stored as JSON or YAML. The format is
//! chosen by file extension: `.yaml`/`.yml` are YAML, anything else is JSON.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{PlanError, PlanResult};
use crate::models::AppConfig;

/// Serialization format of a snapshot file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapshotFormat {
    #[default]
    Json,
    Yaml,
}

impl SnapshotFormat {
    /// Pick the format from a path's extension
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }

    pub fn parse(s: &str) -> PlanResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(PlanError::Config(format!(
                "Unknown snapshot format '{}' (expected json or yaml)",
                other
            ))),
        }
    }

    pub fn encode(&self, config: &AppConfig) -> PlanResult<String> {
        match self {
            Self::Json => config.to_json(),
            Self::Yaml => config.to_yaml(),
        }
    }

    pub fn decode(&self, contents: &str) -> PlanResult<AppConfig> {
        match self {
            Self::Json => AppConfig::from_json(contents),
            Self::Yaml => AppConfig::from_yaml(contents),
        }
    }
}

/// Read and validate a snapshot file
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> PlanResult<AppConfig> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path)
        .map_err(|e| PlanError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    let config = SnapshotFormat::from_path(path).decode(&contents)?;
    tracing::debug!(
        path = %path.display(),
        accounts = config.accounts.len(),
        debts = config.debts.len(),
        "loaded snapshot"
    );
    Ok(config)
}

/// Validate and write a snapshot, format chosen by extension
pub fn save_snapshot<P: AsRef<Path>>(path: P, config: &AppConfig) -> PlanResult<()> {
    let path = path.as_ref();
    config.validate()?;
    let contents = SnapshotFormat::from_path(path).encode(config)?;
    write_atomic(path, contents.as_bytes())
}

/// Write to a temp file next to `path`, then rename over it
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> PlanResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            PlanError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = std::path::PathBuf::from(temp_name);

    let file = File::create(&temp_path)
        .map_err(|e| PlanError::Io(format!("Failed to create temp file: {}", e)))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents)
        .and_then(|_| writer.flush())
        .map_err(|e| PlanError::Io(format!("Failed to write data: {}", e)))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| PlanError::Io(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        PlanError::Io(format!("Failed to rename temp file: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(SnapshotFormat::from_path(&PathBuf::from("a.json")), SnapshotFormat::Json);
        assert_eq!(SnapshotFormat::from_path(&PathBuf::from("a.YAML")), SnapshotFormat::Yaml);
        assert_eq!(SnapshotFormat::from_path(&PathBuf::from("a.yml")), SnapshotFormat::Yaml);
        assert_eq!(SnapshotFormat::from_path(&PathBuf::from("snapshot")), SnapshotFormat::Json);
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(SnapshotFormat::parse("YAML").unwrap(), SnapshotFormat::Yaml);
        assert!(SnapshotFormat::parse("toml").is_err());
    }

    #[test]
    fn test_save_and_load_both_formats() {
        let temp_dir = TempDir::new().unwrap();
        let snapshot = fixtures::default_snapshot();

        for name in ["snapshot.json", "snapshot.yaml"] {
            let path = temp_dir.path().join("nested").join(name);
            save_snapshot(&path, &snapshot).unwrap();
            assert!(!temp_dir.path().join("nested").join(format!("{name}.tmp")).exists());

            let loaded = load_snapshot(&path).unwrap();
            assert_eq!(loaded, snapshot);
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_snapshot(temp_dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, PlanError::Io(_)));
    }

    #[test]
    fn test_invalid_snapshot_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        let json = fixtures::default_snapshot()
            .to_json()
            .unwrap()
            .replace("\"bi-weekly\"", "\"fortnightly\"");
        fs::write(&path, json).unwrap();

        let err = load_snapshot(&path).unwrap_err();
        assert_eq!(err.field(), Some("frequency"));
    }
}
