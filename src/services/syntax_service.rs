use anyhow::Result;
use repokit_core::domain::{FileReport, RunSummary};
use repokit_core::error::CoreError;
use repokit_core::ports::FormatterPort;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::adapters::{discovery, parser};
use crate::config::SyntaxConfig;

pub const MISSING_SOURCE_HINT: &str =
    "Source directory not found. Are you in the project root?";

/// Scans a project's sources, repairing unparsable files with a formatter
pub struct SyntaxChecker<F: FormatterPort> {
    formatter: F,
    project_root: PathBuf,
    roots: Vec<PathBuf>,
    config: SyntaxConfig,
}

impl<F: FormatterPort> SyntaxChecker<F> {
    pub fn new(formatter: F, project_root: impl Into<PathBuf>, config: SyntaxConfig) -> Self {
        let project_root = project_root.into();
        let roots = config
            .roots
            .iter()
            .map(|root| project_root.join(root))
            .collect();
        Self {
            formatter,
            project_root,
            roots,
            config,
        }
    }

    /// Lazily walk all source files under the configured roots
    pub fn discover(&self) -> impl Iterator<Item = PathBuf> + '_ {
        discovery::discover(&self.roots, &self.config.extension)
    }

    pub fn check(&self, path: &Path) -> FileReport {
        parser::check(path)
    }

    /// Run the formatter over `path`. Failures are reported, never propagated.
    pub fn repair<W: Write>(&self, path: &Path, out: &mut W) -> Result<bool> {
        match self.formatter.format_in_place(path) {
            Ok(()) => Ok(true),
            Err(err) => {
                let failure = CoreError::RepairFailed {
                    path: path.to_path_buf(),
                    reason: format!("{:#}", err),
                };
                warn!("{}", failure);
                writeln!(out, "Error formatting {}: {:#}", path.display(), err)?;
                Ok(false)
            }
        }
    }

    /// Check every discovered file and try to repair the broken ones.
    ///
    /// Errors only on a missing required root or a failed write to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        let required = self.project_root.join(&self.config.required_root);
        if !required.is_dir() {
            writeln!(out, "{}", MISSING_SOURCE_HINT)?;
            return Err(CoreError::MissingDirectory { path: required }.into());
        }

        let total = self.discover().count();
        writeln!(out, "Checking {} source files...", total)?;
        info!(files = total, formatter = self.formatter.name(), "Starting syntax check");

        let mut summary = RunSummary::default();
        for path in self.discover() {
            summary.record_checked();
            let report = self.check(&path);
            if report.parsed_ok {
                debug!(file = %path.display(), "Parsed");
                continue;
            }

            summary.record_issue();
            if let Some(err) = report.to_error() {
                info!("{}", err);
            }
            writeln!(out, "\nSyntax error in {}:", path.display())?;
            writeln!(out, "  {}", report.error_message.as_deref().unwrap_or_default())?;

            if self.repair(&path, out)? && self.check(&path).parsed_ok {
                summary.record_fix();
                writeln!(out, "  ✅ Fixed!")?;
            } else {
                writeln!(out, "  ❌ Could not fix automatically")?;
            }
        }

        self.write_summary(&summary, out)?;
        Ok(summary)
    }

    fn write_summary<W: Write>(&self, summary: &RunSummary, out: &mut W) -> Result<()> {
        if summary.issues_found == 0 {
            writeln!(out, "\n✅ No syntax issues found!")?;
            return Ok(());
        }

        writeln!(out, "\n📊 Summary:")?;
        writeln!(out, "  - Files checked: {}", summary.files_checked)?;
        writeln!(out, "  - Issues found: {}", summary.issues_found)?;
        writeln!(out, "  - Files fixed: {}", summary.files_fixed)?;
        writeln!(out, "  - Files requiring manual fix: {}", summary.unfixed())?;
        Ok(())
    }
}
