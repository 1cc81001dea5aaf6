use anyhow::Result;
use std::path::Path;

/// Port for an external source formatter
pub trait FormatterPort {
    /// Short name used in progress output and logs
    fn name(&self) -> &str;

    /// Rewrite the file in place using the formatter's fixed style.
    /// Any error means the file could not be formatted.
    fn format_in_place(&self, path: &Path) -> Result<()>;
}
