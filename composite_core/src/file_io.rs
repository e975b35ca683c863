//! # File I/O Module
//!
//! Project file operations:
//! - **Atomic saves**: write to `.cbd.tmp`, fsync, rename over the target
//! - **Version validation**: refuse files from an incompatible schema
//!
//! ## Example
//!
//! ```rust,no_run
//! use composite_core::file_io::{load_project, save_project};
//! use composite_core::project::Project;
//! use std::path::Path;
//!
//! let project = Project::new("Engineer", "25-001", "Client");
//! let path = Path::new("floor.cbd");
//!
//! save_project(&project, path)?;
//! let loaded = load_project(path)?;
//! assert_eq!(loaded.meta.job_id, "25-001");
//! # Ok::<(), composite_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::errors::{CalcError, CalcResult};
use crate::project::{Project, PROJECT_EXTENSION, SCHEMA_VERSION};

/// Save a project with atomic write semantics.
///
/// 1. Serialize the project to pretty JSON
/// 2. Write to `<path>.cbd.tmp`
/// 3. fsync
/// 4. Rename over `path`
///
/// An interrupted save leaves the previous file intact.
pub fn save_project(project: &Project, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(project).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;

    let tmp_path = path.with_extension(format!("{}.tmp", PROJECT_EXTENSION));

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    drop(tmp_file);

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    tracing::info!(path = %path.display(), items = project.item_count(), "project saved");
    Ok(())
}

/// Load a project from a file.
///
/// # Errors
///
/// * `FileError` - the file cannot be read
/// * `SerializationError` - invalid JSON or an unknown item type
/// * `VersionMismatch` - the file's schema is incompatible
pub fn load_project(path: &Path) -> CalcResult<Project> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let project: Project = serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })?;

    validate_version(&project.meta.version)?;

    tracing::info!(path = %path.display(), items = project.item_count(), "project loaded");
    Ok(project)
}

/// Check that a file version is compatible with [`SCHEMA_VERSION`].
///
/// Major versions must match; while the major version is 0, a file with a
/// newer minor version is refused.
pub fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let parse = |v: &str| -> Option<Vec<u32>> { v.split('.').map(|p| p.parse().ok()).collect() };
    let file_parts = parse(file_version).filter(|p| !p.is_empty()).ok_or_else(mismatch)?;
    let current_parts = parse(SCHEMA_VERSION).ok_or_else(mismatch)?;

    match (file_parts.first(), current_parts.first()) {
        (Some(file_major), Some(current_major)) if file_major == current_major => {}
        _ => return Err(mismatch()),
    }

    if current_parts[0] == 0 {
        if let (Some(file_minor), Some(current_minor)) = (file_parts.get(1), current_parts.get(1)) {
            if file_minor > current_minor {
                return Err(mismatch());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{CalculationItem, DesignInput};
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roundtrip.cbd");

        let mut project = Project::new("Test Engineer", "TEST-001", "Test Client");
        project.settings.design.long_term_multiplier = 3.0;
        let id = project.add_item(CalculationItem::CompositeBeam(DesignInput::typical_floor_beam()));
        save_project(&project, &path).unwrap();

        let loaded = load_project(&path).unwrap();
        assert_eq!(loaded.meta.engineer, "Test Engineer");
        assert_eq!(loaded.meta.job_id, "TEST-001");
        assert_eq!(loaded.settings.design.long_term_multiplier, 3.0);
        assert_eq!(loaded.get_item(&id), project.get_item(&id));
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("atomic.cbd");
        let tmp_path = path.with_extension("cbd.tmp");

        save_project(&Project::new("Test", "TEST", "Client"), &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());
    }

    #[test]
    fn test_save_overwrites_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("overwrite.cbd");

        save_project(&Project::new("A", "first", "C"), &path).unwrap();
        save_project(&Project::new("A", "second", "C"), &path).unwrap();
        assert_eq!(load_project(&path).unwrap().meta.job_id, "second");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_project(&dir.path().join("absent.cbd")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.cbd");
        fs::write(&path, "{ not json").unwrap();
        let err = load_project(&path).unwrap_err();
        assert!(matches!(err, CalcError::SerializationError { .. }));
    }

    #[test]
    fn test_load_rejects_future_version() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("future.cbd");
        let mut project = Project::default();
        project.meta.version = "1.0.0".to_string();
        let json = serde_json::to_string(&project).unwrap();
        fs::write(&path, json).unwrap();

        let err = load_project(&path).unwrap_err();
        assert!(matches!(err, CalcError::VersionMismatch { .. }));
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.0").is_ok());
        assert!(validate_version("0.1.5").is_ok());
        assert!(validate_version("0.0.9").is_ok());

        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("").is_err());
        assert!(validate_version("zero.one").is_err());
    }
}
