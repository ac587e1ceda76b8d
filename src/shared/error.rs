use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every module has a known license, or unknowns are tolerated
    Success = 0,
    /// At least one module has an unknown license and `--fail-on-unknown` was given
    UnknownLicensesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing manifest, malformed JSON, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::UnknownLicensesDetected => write!(f, "Unknown Licenses Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while sniffing licenses.
///
/// Strategies never raise on a "no match" condition; that is the unknown
/// `LicenseResult`. These variants are reserved for failures that abort the
/// whole call (and, for tree walks, the whole traversal).
#[derive(Debug, Error)]
pub enum SnifferError {
    #[error("File not found: {path}\n\n💡 Hint: {hint}")]
    NotFound { path: PathBuf, hint: String },

    #[error("Failed to parse {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file contains valid JSON")]
    ParseError { path: PathBuf, details: String },

    #[error("I/O error on {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have read permissions")]
    Io { path: PathBuf, details: String },

    #[error("Invalid module path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a directory containing a package.json")]
    InvalidModulePath { path: PathBuf, reason: String },

    #[error("Invalid license catalog\nDetails: {details}")]
    InvalidCatalog { details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

impl SnifferError {
    /// Classifies a raw I/O error into `NotFound` or `Io`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            SnifferError::NotFound {
                path: path.to_path_buf(),
                hint: "Please verify that the path points to an installed module".to_string(),
            }
        } else {
            SnifferError::Io {
                path: path.to_path_buf(),
                details: err.to_string(),
            }
        }
    }

    /// Returns true when `err` carries a `SnifferError::NotFound`.
    pub fn is_not_found(err: &anyhow::Error) -> bool {
        matches!(
            err.downcast_ref::<SnifferError>(),
            Some(SnifferError::NotFound { .. })
        )
    }
}
