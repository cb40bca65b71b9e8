//! Generator configuration

use std::path::PathBuf;

/// Folder scanned when no argument is given
pub const DEFAULT_KERNELS_FOLDER: &str = "./kernels";
/// Generated header, relative to the current directory
pub const DEFAULT_OUTPUT_FILE: &str = "smm_acc_kernels.h";
/// Kernel headers are named `smm_acc_<name>.h`
pub const KERNEL_FILE_PREFIX: &str = "smm_acc_";
pub const KERNEL_FILE_SUFFIX: &str = ".h";
/// Include line dropped from every kernel body
pub const COMMON_INCLUDE: &str = "#include \"smm_acc_common.h\"";

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub kernels_folder: PathBuf,
    pub output_path: PathBuf,
    pub file_prefix: String,
    pub file_suffix: String,
    pub skipped_include: String,
}

impl GeneratorConfig {
    /// Default configuration reading from `kernels_folder`
    pub fn with_folder(kernels_folder: impl Into<PathBuf>) -> Self {
        Self {
            kernels_folder: kernels_folder.into(),
            ..Self::default()
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            kernels_folder: PathBuf::from(DEFAULT_KERNELS_FOLDER),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            file_prefix: KERNEL_FILE_PREFIX.to_string(),
            file_suffix: KERNEL_FILE_SUFFIX.to_string(),
            skipped_include: COMMON_INCLUDE.to_string(),
        }
    }
}
