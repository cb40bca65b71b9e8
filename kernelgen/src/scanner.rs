//! Kernel folder scanning
//!
//! Kernel headers live flat in one folder and are recognised purely by their
//! file name: `<prefix><name><suffix>`, `smm_acc_<name>.h` by default.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GenError, Result};

/// Check a file name against the kernel naming convention
pub fn is_kernel_file_name(file_name: &str, prefix: &str, suffix: &str) -> bool {
    file_name.len() >= prefix.len() + suffix.len()
        && file_name.starts_with(prefix)
        && file_name.ends_with(suffix)
}

/// List kernel files in `folder`, in directory-listing order
///
/// Sub-directories are never entered. The matches are reported on stdout.
pub fn scan_kernel_folder(folder: &Path, prefix: &str, suffix: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(folder).map_err(|e| GenError::io(folder, e))?;

    let mut kernel_files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| GenError::io(folder, e))?;
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            log::debug!("Skipping non UTF-8 entry {:?}", entry.path());
            continue;
        };
        if !is_kernel_file_name(file_name, prefix, suffix) {
            continue;
        }
        if entry.path().is_dir() {
            log::debug!("Skipping directory {}", entry.path().display());
            continue;
        }
        kernel_files.push(folder.join(file_name));
    }

    println!("Found {} kernel files:", kernel_files.len());
    for kernel_file in &kernel_files {
        println!("<- {}", kernel_file.display());
    }

    Ok(kernel_files)
}

/// Derive the kernel name from its path by stripping prefix and suffix
///
/// The name is not validated here; see [`crate::serializer::validate_identifier`].
pub fn kernel_name(path: &Path, prefix: &str, suffix: &str) -> Result<String> {
    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| GenError::InvalidIdentifier {
            name: path.to_string_lossy().into_owned(),
            path: path.to_path_buf(),
        })?;

    let name = file_name.strip_prefix(prefix).unwrap_or(file_name);
    let name = name.strip_suffix(suffix).unwrap_or(name);
    Ok(name.to_string())
}
