//! Placeholder project configuration.
//!
//! `init` writes a JSON stub describing an empty project. Nothing reads the
//! file back yet; it reserves the on-disk shape for the spec and test-case
//! scaffolding that will fill it in.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpecsmithError};

/// File name of the project config inside the project directory.
pub const CONFIG_FILE: &str = ".specsmith.json";

/// Placeholder project config written by `init`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Config schema version.
    pub version: u32,
    /// Spec documents registered for this project.
    pub specifications: Vec<String>,
    /// Test cases scaffolded from specs.
    pub test_cases: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectConfig {
    /// Create an empty config stamped with the current time.
    pub fn empty() -> Self {
        let now = Utc::now();
        Self {
            version: 1,
            specifications: Vec::new(),
            test_cases: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Path of the config file inside `project_dir`.
    pub fn path_in(project_dir: &Path) -> PathBuf {
        project_dir.join(CONFIG_FILE)
    }

    /// Write the config as pretty-printed JSON into `project_dir`.
    pub fn write_to(&self, project_dir: &Path) -> Result<PathBuf> {
        let path = Self::path_in(project_dir);
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            SpecsmithError::ConfigWriteError {
                path: path.clone(),
                message: e.to_string(),
            }
        })?;
        fs::write(&path, json).map_err(|e| SpecsmithError::ConfigWriteError {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Ok(path)
    }
}
