//! Checks over the target directory and project files

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::ProjectGate;
use crate::core::{Error, Result};

/// The fields of the project descriptor the gate cares about
#[derive(Debug, Deserialize)]
struct ProjectDescriptor {
    #[serde(rename = "appType")]
    app_type: Option<String>,
}

impl ProjectGate {
    /// Fails unless the project marker exists at the root
    pub fn ensure_in_project(&self) -> Result<()> {
        if !self.marker_path().exists() {
            return Err(Error::project_state(format!(
                "{} is not a Swift Server Generator project directory",
                self.root().display()
            )));
        }
        Ok(())
    }

    /// Fails if the project marker exists at the root
    pub fn ensure_not_in_project(&self) -> Result<()> {
        if self.marker_path().exists() {
            return Err(Error::project_state(format!(
                "{} is already a Swift Server Generator project directory",
                self.root().display()
            )));
        }
        Ok(())
    }

    /// Fails if the root exists and contains anything
    pub fn ensure_empty_directory(&self) -> Result<()> {
        let root = self.root();
        if !root.exists() {
            return Ok(());
        }

        let mut entries = std::fs::read_dir(root).map_err(|e| {
            Error::project_state(format!("{} could not be listed: {e}", root.display()))
        })?;
        if let Some(entry) = entries.next() {
            debug!(
                root = %root.display(),
                first_entry = ?entry.map(|e| e.file_name()).ok(),
                "ensure_empty_directory found entries"
            );
            return Err(Error::project_state(format!(
                "{} is not an empty directory",
                root.display()
            )));
        }
        Ok(())
    }

    /// Fails unless the project descriptor declares the CRUD application type
    pub fn ensure_project_is_crud(&self) -> Result<()> {
        let path = self.descriptor_path();
        let descriptor = read_descriptor(&path).ok_or_else(|| {
            Error::project_state(format!("Unable to read {}", path.display()))
        })?;

        let expected = &self.config().crud_app_type;
        match descriptor.app_type.as_deref() {
            Some(app_type) if app_type == expected => Ok(()),
            found => Err(Error::project_state(format!(
                "{} is not a CRUD project (appType is {}), this generator requires appType '{expected}'",
                self.root().display(),
                found.map_or_else(|| "missing".to_string(), |t| format!("'{t}'")),
            ))),
        }
    }
}

fn read_descriptor(path: &Path) -> Option<ProjectDescriptor> {
    let content = std::fs::read(path)
        .inspect_err(|e| debug!(path = %path.display(), error = %e, "descriptor unreadable"))
        .ok()?;
    serde_json::from_slice(&content)
        .inspect_err(|e| debug!(path = %path.display(), error = %e, "descriptor is not valid JSON"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use std::fs;
    use tempfile::tempdir;

    fn gate(root: &Path) -> ProjectGate {
        ProjectGate::new(root, Config::default())
    }

    fn mark_project(root: &Path) {
        fs::write(root.join(".swiftservergenerator-project"), b"").unwrap();
    }

    #[test]
    fn test_ensure_in_project() {
        let dir = tempdir().unwrap();
        let err = gate(dir.path()).ensure_in_project().unwrap_err();
        assert!(matches!(err, Error::ProjectState(_)));
        assert!(err.to_string().contains(&dir.path().display().to_string()));

        mark_project(dir.path());
        assert!(gate(dir.path()).ensure_in_project().is_ok());
    }

    #[test]
    fn test_ensure_not_in_project() {
        let dir = tempdir().unwrap();
        assert!(gate(dir.path()).ensure_not_in_project().is_ok());

        mark_project(dir.path());
        let err = gate(dir.path()).ensure_not_in_project().unwrap_err();
        assert!(err.to_string().contains("already a Swift Server Generator project"));
    }

    #[test]
    fn test_custom_marker_name() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".scaffold"), b"").unwrap();

        let config = Config {
            project_marker: ".scaffold".to_string(),
            ..Config::default()
        };
        assert!(ProjectGate::new(dir.path(), config).ensure_in_project().is_ok());
        assert!(gate(dir.path()).ensure_in_project().is_err());
    }

    #[test]
    fn test_ensure_empty_directory_absent() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("notes");
        assert!(gate(&missing).ensure_empty_directory().is_ok());
    }

    #[test]
    fn test_ensure_empty_directory_empty() {
        let dir = tempdir().unwrap();
        assert!(gate(dir.path()).ensure_empty_directory().is_ok());
    }

    #[test]
    fn test_ensure_empty_directory_with_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("README.md"), b"hello").unwrap();

        let err = gate(dir.path()).ensure_empty_directory().unwrap_err();
        assert!(matches!(err, Error::ProjectState(_)));
        assert!(err.to_string().contains("is not an empty directory"));
    }

    #[test]
    fn test_ensure_empty_directory_with_hidden_subdirectory() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        assert!(gate(dir.path()).ensure_empty_directory().is_err());
    }

    #[test]
    fn test_ensure_project_is_crud() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("spec.json"),
            br#"{"appType": "crud", "appName": "notes"}"#,
        )
        .unwrap();
        assert!(gate(dir.path()).ensure_project_is_crud().is_ok());
    }

    #[test]
    fn test_ensure_project_is_crud_wrong_type() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("spec.json"), br#"{"appType": "scaffold"}"#).unwrap();

        let err = gate(dir.path()).ensure_project_is_crud().unwrap_err();
        assert!(err.to_string().contains("'scaffold'"));
    }

    #[test]
    fn test_ensure_project_is_crud_missing_app_type() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("spec.json"), b"{}").unwrap();

        let err = gate(dir.path()).ensure_project_is_crud().unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_ensure_project_is_crud_unreadable() {
        let dir = tempdir().unwrap();
        let err = gate(dir.path()).ensure_project_is_crud().unwrap_err();
        assert!(err.to_string().starts_with("Unable to read"));
        assert!(err.to_string().contains("spec.json"));

        fs::write(dir.path().join("spec.json"), b"not json").unwrap();
        let err = gate(dir.path()).ensure_project_is_crud().unwrap_err();
        assert!(err.to_string().starts_with("Unable to read"));
    }
}
