//! Project files.
//!
//! A project file is a JSON document holding one project and the window
//! records that belong to it. It is the input format of the command line
//! renderer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::ProjectError;
use crate::window::WindowSpec;

/// Project file format version
pub const FILE_FORMAT_VERSION: &str = "1.0";

/// A customer project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
}

impl Project {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            client: None,
        }
    }
}

/// File metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetadata {
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    #[serde(default)]
    pub notes: String,
}

/// Complete project file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectFile {
    pub version: String,
    pub metadata: ProjectMetadata,
    pub project: Project,
    #[serde(default)]
    pub windows: Vec<WindowSpec>,
}

impl ProjectFile {
    /// Create an empty project file
    pub fn new(project: Project) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: ProjectMetadata {
                created_at: now,
                modified_at: now,
                notes: String::new(),
            },
            project,
            windows: Vec::new(),
        }
    }

    /// Add a window, assigning the project id and the next free window id
    pub fn add_window(&mut self, mut window: WindowSpec) -> u64 {
        let next_id = self.windows.iter().map(|w| w.id).max().unwrap_or(0) + 1;
        window.id = next_id;
        window.project_id = self.project.id;
        self.windows.push(window);
        self.metadata.modified_at = Utc::now();
        next_id
    }

    /// Remove a window by id
    pub fn remove_window(&mut self, id: u64) -> Option<WindowSpec> {
        let pos = self.windows.iter().position(|w| w.id == id)?;
        self.metadata.modified_at = Utc::now();
        Some(self.windows.remove(pos))
    }

    /// Find a window by id
    pub fn window(&self, id: u64) -> Option<&WindowSpec> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Check window ids are unique and belong to this project
    pub fn validate(&self) -> Result<(), ProjectError> {
        let mut seen = HashSet::new();
        for window in &self.windows {
            if !seen.insert(window.id) {
                return Err(ProjectError::DuplicateWindow(window.id));
            }
            if window.project_id != self.project.id {
                return Err(ProjectError::ForeignWindow {
                    window_id: window.id,
                    found: window.project_id,
                    expected: self.project.id,
                });
            }
        }
        Ok(())
    }

    /// Parse a project file from JSON
    pub fn from_json(json: &str) -> Result<Self, ProjectError> {
        let file: ProjectFile = serde_json::from_str(json)?;
        if file.version != FILE_FORMAT_VERSION {
            return Err(ProjectError::UnsupportedVersion(file.version));
        }
        if let Err(e) = file.validate() {
            tracing::warn!("Project '{}': {}", file.project.name, e);
        }
        Ok(file)
    }

    /// Save project to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ProjectError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// Load project from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ProjectError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let file = Self::from_json(&content)?;
        tracing::debug!(
            "Loaded project '{}' with {} windows",
            file.project.name,
            file.windows.len()
        );
        Ok(file)
    }
}
