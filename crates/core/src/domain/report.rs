use std::path::{Path, PathBuf};

use crate::error::CoreError;

/// Outcome of parsing a single source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub parsed_ok: bool,
    pub error_message: Option<String>,
}

impl FileReport {
    pub fn ok(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            parsed_ok: true,
            error_message: None,
        }
    }

    pub fn failed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            parsed_ok: false,
            error_message: Some(message.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The diagnostic as a domain error, `None` when the file parsed
    pub fn to_error(&self) -> Option<CoreError> {
        if self.parsed_ok {
            return None;
        }
        Some(CoreError::Parse {
            path: self.path.clone(),
            message: self.error_message.clone().unwrap_or_default(),
        })
    }
}

/// Counters accumulated over one `fix-syntax` run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_checked: usize,
    pub issues_found: usize,
    pub files_fixed: usize,
}

impl RunSummary {
    pub fn record_checked(&mut self) {
        self.files_checked += 1;
    }

    pub fn record_issue(&mut self) {
        self.issues_found += 1;
    }

    pub fn record_fix(&mut self) {
        self.files_fixed += 1;
    }

    /// Issues still requiring a manual fix
    pub fn unfixed(&self) -> usize {
        self.issues_found.saturating_sub(self.files_fixed)
    }

    /// True when every discovered issue was repaired, including when there were none
    pub fn is_clean(&self) -> bool {
        self.issues_found == self.files_fixed
    }
}
