//! Error type for the kernel string generator

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while packing kernels
#[derive(Debug)]
pub enum GenError {
    /// Filesystem error on the given path
    Io { path: PathBuf, source: io::Error },
    /// Kernel name is not usable as a C/C++ variable name
    InvalidIdentifier { name: String, path: PathBuf },
    /// Bad command line
    Usage(String),
}

impl GenError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GenError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
            GenError::InvalidIdentifier { name, path } => write!(
                f,
                "kernel name '{}' (from {}) must be a valid C/C++ variable name",
                name,
                path.display()
            ),
            GenError::Usage(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GenError>;
