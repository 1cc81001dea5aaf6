use anyhow::{Context, Result, bail};
use repokit_core::ports::FormatterPort;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

use crate::config::FormatterConfig;

/// Formatter adapter that runs `rustfmt` with a fixed style.
///
/// The file is fed through stdin and the output written back, so `rustfmt`
/// never follows `mod` declarations into sibling files.
pub struct RustfmtFormatter {
    program: Option<PathBuf>,
    max_width: u16,
    edition: String,
}

impl RustfmtFormatter {
    pub fn new(config: &FormatterConfig) -> Self {
        Self {
            program: None,
            max_width: config.max_width,
            edition: config.edition.clone(),
        }
    }

    /// Use a specific executable instead of looking `rustfmt` up on `PATH`
    pub fn with_program<P: Into<PathBuf>>(mut self, program: P) -> Self {
        self.program = Some(program.into());
        self
    }

    fn resolve_program(&self) -> Result<PathBuf> {
        match &self.program {
            Some(program) => Ok(program.clone()),
            None => which::which("rustfmt").context("rustfmt not found on PATH"),
        }
    }

    fn style_args(&self) -> Vec<String> {
        vec![
            "--edition".to_string(),
            self.edition.clone(),
            "--config".to_string(),
            format!("max_width={}", self.max_width),
            "--emit".to_string(),
            "stdout".to_string(),
        ]
    }
}

impl FormatterPort for RustfmtFormatter {
    fn name(&self) -> &str {
        "rustfmt"
    }

    fn format_in_place(&self, path: &Path) -> Result<()> {
        let program = self.resolve_program()?;
        let source =
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

        debug!(program = %program.display(), file = %path.display(), "Running formatter");

        let mut child = Command::new(&program)
            .args(self.style_args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to spawn {}", program.display()))?;

        // rustfmt may exit before draining stdin, so its status and stderr
        // take precedence over a broken pipe here
        let write_result = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(&source),
            None => Ok(()),
        };

        let output = child
            .wait_with_output()
            .context("Failed to wait for formatter")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("{} exited with {}: {}", self.name(), output.status, stderr.trim());
        }
        write_result.context("Failed to write source to formatter")?;

        fs::write(path, &output.stdout)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_args_use_fixed_config() {
        let formatter = RustfmtFormatter::new(&FormatterConfig {
            max_width: 88,
            edition: "2018".to_string(),
        });
        assert_eq!(
            formatter.style_args(),
            vec!["--edition", "2018", "--config", "max_width=88", "--emit", "stdout"]
        );
        assert_eq!(formatter.name(), "rustfmt");
    }

    #[test]
    fn test_missing_program_is_error() -> Result<()> {
        let temp_dir = tempfile::TempDir::new()?;
        let path = temp_dir.path().join("lib.rs");
        fs::write(&path, "fn main() {}\n")?;

        let formatter = RustfmtFormatter::new(&FormatterConfig::default())
            .with_program(temp_dir.path().join("no-such-rustfmt"));

        assert!(formatter.format_in_place(&path).is_err());
        // Failure leaves the file untouched
        assert_eq!(fs::read_to_string(&path)?, "fn main() {}\n");
        Ok(())
    }

    #[test]
    fn test_missing_file_is_error() {
        let formatter =
            RustfmtFormatter::new(&FormatterConfig::default()).with_program("rustfmt");
        assert!(formatter.format_in_place(Path::new("/nonexistent/dir/lib.rs")).is_err());
    }

    fn rustfmt_available() -> bool {
        which::which("rustfmt").is_ok()
    }

    #[test]
    fn test_formats_file_in_place() -> Result<()> {
        if !rustfmt_available() {
            return Ok(());
        }
        let temp_dir = tempfile::TempDir::new()?;
        let path = temp_dir.path().join("main.rs");
        fs::write(&path, "fn   main( ){let x=1;}")?;

        RustfmtFormatter::new(&FormatterConfig::default()).format_in_place(&path)?;

        assert_eq!(fs::read_to_string(&path)?, "fn main() {\n    let x = 1;\n}\n");
        Ok(())
    }

    #[test]
    fn test_max_width_is_applied() -> Result<()> {
        if !rustfmt_available() {
            return Ok(());
        }
        let temp_dir = tempfile::TempDir::new()?;
        let source = "fn main() { let total = first_value + second_value + third_value; }\n";
        let wide = temp_dir.path().join("wide.rs");
        let narrow = temp_dir.path().join("narrow.rs");
        fs::write(&wide, source)?;
        fs::write(&narrow, source)?;

        RustfmtFormatter::new(&FormatterConfig::default()).format_in_place(&wide)?;
        RustfmtFormatter::new(&FormatterConfig {
            max_width: 40,
            ..FormatterConfig::default()
        })
        .format_in_place(&narrow)?;

        let wide = fs::read_to_string(&wide)?;
        let narrow = fs::read_to_string(&narrow)?;
        assert!(narrow.lines().all(|line| line.len() <= 40), "got: {}", narrow);
        assert!(narrow.lines().count() > wide.lines().count());
        Ok(())
    }

    #[test]
    fn test_rejected_config_reports_rustfmt_diagnostic() -> Result<()> {
        if !rustfmt_available() {
            return Ok(());
        }
        let temp_dir = tempfile::TempDir::new()?;
        let path = temp_dir.path().join("big.rs");
        // Larger than a pipe buffer, so rustfmt exits before reading it all
        let source = "fn filler() {}\n".repeat(16 * 1024);
        fs::write(&path, &source)?;

        let formatter = RustfmtFormatter::new(&FormatterConfig {
            edition: "2099".to_string(),
            ..FormatterConfig::default()
        });
        let err = formatter.format_in_place(&path).unwrap_err();
        let message = format!("{:#}", err);

        assert!(message.contains("rustfmt exited with"), "got: {}", message);
        assert!(message.to_lowercase().contains("edition"), "got: {}", message);
        assert!(!message.contains("Broken pipe"), "got: {}", message);
        assert_eq!(fs::read_to_string(&path)?, source);
        Ok(())
    }
}
