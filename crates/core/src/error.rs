use std::path::PathBuf;
use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Syntax error in {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Could not repair {}: {reason}", .path.display())]
    RepairFailed { path: PathBuf, reason: String },

    #[error("No free port found in range {lower}-{upper} after {attempts} attempts")]
    PortExhausted { lower: u16, upper: u16, attempts: u32 },

    #[error("Required directory not found: {}", .path.display())]
    MissingDirectory { path: PathBuf },

    #[error("Invalid port range {lower}-{upper} with {attempts} attempts")]
    InvalidRange { lower: u16, upper: u16, attempts: u32 },
}

pub type Result<T> = std::result::Result<T, CoreError>;
