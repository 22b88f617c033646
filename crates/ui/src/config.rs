//! Drawer configuration
//!
//! Notification texts shown after a submission. Hosts can load them from a
//! JSON file; any key left out falls back to its default.

use drawer_core::DrawerResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Texts shown by the drawer after a submission resolves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawerConfig {
    /// Success toast after a project was created
    pub create_success: String,
    /// Success toast after a project was updated
    pub update_success: String,
    /// Error toast when creating failed
    pub create_failure: String,
    /// Error toast when updating failed
    pub update_failure: String,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            create_success: "Project created".to_string(),
            update_success: "Project updated".to_string(),
            create_failure: "Failed to create project".to_string(),
            update_failure: "Failed to update project".to_string(),
        }
    }
}

impl DrawerConfig {
    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> DrawerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> DrawerResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        tracing::debug!("Loaded drawer config from {}", path.display());
        Ok(config)
    }

    /// Success text for the given mode
    pub fn success_message(&self, was_editing: bool) -> &str {
        if was_editing {
            &self.update_success
        } else {
            &self.create_success
        }
    }

    /// Failure text for the given mode
    pub fn failure_message(&self, was_editing: bool) -> &str {
        if was_editing {
            &self.update_failure
        } else {
            &self.create_failure
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use drawer_core::DrawerError;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DrawerConfig::default();
        assert_eq!(config.success_message(false), "Project created");
        assert_eq!(config.success_message(true), "Project updated");
        assert_eq!(config.failure_message(true), "Failed to update project");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = DrawerConfig::from_json(r#"{"create_success": "Created!"}"#).unwrap();
        assert_eq!(config.create_success, "Created!");
        assert_eq!(config.update_success, "Project updated");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"update_success": "Saved"}}"#).unwrap();

        let config = DrawerConfig::load(file.path()).unwrap();
        assert_eq!(config.update_success, "Saved");
    }

    #[test]
    fn test_load_errors() {
        let err = DrawerConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, DrawerError::Io(_)));

        let err = DrawerConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, DrawerError::Json(_)));
    }
}
