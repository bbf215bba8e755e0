//! Path management for ProserPlan
//!
//! ## Path Resolution Order
//!
//! 1. `PROSERPLAN_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from [`directories::ProjectDirs`]
//!    (`~/.config/proserplan` on Linux, `%APPDATA%\proserplan` on Windows)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::PlanError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "PROSERPLAN_DATA_DIR";

/// Manages the paths ProserPlan reads and writes
#[derive(Debug, Clone)]
pub struct ProserPaths {
    base_dir: PathBuf,
}

impl ProserPaths {
    /// Resolve the base directory from the environment or the platform
    ///
    /// # Errors
    ///
    /// Returns a config error if no home directory can be determined.
    pub fn new() -> Result<Self, PlanError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Use an explicit base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Where `defaults` writes a starter snapshot when no path is given
    pub fn default_snapshot_file(&self) -> PathBuf {
        self.base_dir.join("snapshot.json")
    }

    /// Directory for CSV and JSON exports
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Create the base and export directories
    pub fn ensure_directories(&self) -> Result<(), PlanError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PlanError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| PlanError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }

    /// True once a settings file has been saved
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, PlanError> {
    ProjectDirs::from("", "", "proserplan")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PlanError::Config("Could not determine a home directory".into()))
}
