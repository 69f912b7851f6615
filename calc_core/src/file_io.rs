//! # File I/O Module
//!
//! Reads and writes calculator catalogs as JSON files:
//! - **Atomic saves**: Write to .tmp, verify, rename to prevent corruption
//! - **Version validation**: Ensure schema compatibility
//! - **Consistency checks**: A loaded catalog must pass [`Catalog::validate`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use calc_core::catalog::Catalog;
//! use calc_core::file_io::{load_catalog, save_catalog};
//! use std::path::Path;
//!
//! let path = Path::new("calculators.json");
//! save_catalog(Catalog::builtin(), path)?;
//! let catalog = load_catalog(path)?;
//! assert_eq!(catalog.len(), Catalog::builtin().len());
//! # Ok::<(), calc_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::catalog::{Catalog, CATALOG_SCHEMA_VERSION};
use crate::errors::{CalcError, CalcResult};

/// Temporary sibling used while saving `path`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

/// Save a catalog to a file with atomic write semantics.
///
/// The save process:
/// 1. Serialize catalog to JSON
/// 2. Write to a temporary file (.tmp) and sync it to disk
/// 3. Read the temporary file back and check it parses
/// 4. Rename .tmp over the target (atomic on most filesystems)
pub fn save_catalog(catalog: &Catalog, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(catalog)?;
    let tmp_path = tmp_path_for(path);

    let write = || -> CalcResult<()> {
        let mut tmp_file = File::create(&tmp_path).map_err(|e| {
            CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
        })?;
        tmp_file.write_all(json.as_bytes()).map_err(|e| {
            CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
        })?;
        tmp_file.sync_all().map_err(|e| {
            CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
        })?;

        let written = read_to_string(&tmp_path, "verify temp file")?;
        let reread: Catalog = serde_json::from_str(&written).map_err(|e| {
            CalcError::serialization(format!("Temp file {} did not read back: {}", tmp_path.display(), e))
        })?;
        if reread.calculators.len() != catalog.calculators.len() {
            return Err(CalcError::file_error(
                "verify temp file",
                tmp_path.display().to_string(),
                "catalog read back with a different number of calculators",
            ));
        }

        fs::rename(&tmp_path, path).map_err(|e| {
            CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
        })
    };

    if let Err(err) = write() {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }

    info!(path = %path.display(), calculators = catalog.len(), "saved catalog");
    Ok(())
}

/// Load a catalog from a file.
///
/// # Returns
///
/// * `Ok(Catalog)` - Successfully loaded and consistent catalog
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
/// * `Err(CalcError::DuplicateCalculator | InvalidInput)` - Inconsistent catalog
pub fn load_catalog(path: &Path) -> CalcResult<Catalog> {
    let contents = read_to_string(path, "read")?;

    let catalog: Catalog = serde_json::from_str(&contents)
        .map_err(|e| CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))?;

    validate_version(&catalog.meta.version)?;
    catalog.validate()?;

    debug!(path = %path.display(), calculators = catalog.len(), "loaded catalog");
    Ok(catalog)
}

fn read_to_string(path: &Path, operation: &str) -> CalcResult<String> {
    let mut file = File::open(path)
        .map_err(|e| CalcError::file_error(operation, path.display().to_string(), e.to_string()))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| CalcError::file_error(operation, path.display().to_string(), e.to_string()))?;
    Ok(contents)
}

/// Validate that a file version is compatible with the current schema.
///
/// The major version must match and the file's minor version must not be
/// newer than ours.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: CATALOG_SCHEMA_VERSION.to_string(),
    };

    let parse = |v: &str| -> Option<(u32, u32)> {
        let mut parts = v.trim().split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next().unwrap_or("0").parse().ok()?;
        Some((major, minor))
    };

    let (file_major, file_minor) = parse(file_version).ok_or_else(mismatch)?;
    let (our_major, our_minor) = parse(CATALOG_SCHEMA_VERSION).ok_or_else(mismatch)?;

    if file_major != our_major || file_minor > our_minor {
        return Err(mismatch());
    }
    Ok(())
}
