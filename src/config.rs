use anyhow::{Context, Result};
use directories::ProjectDirs;
use repokit_core::domain::{DEFAULT_ATTEMPTS, DEFAULT_PORT_END, DEFAULT_PORT_START, PortRange};
use serde::Deserialize;
use std::fs;
use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::cli::PickPortArgs;

pub const CONFIG_FILE_NAME: &str = "repokit.toml";

#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub syntax: SyntaxConfig,
    pub ports: PortsConfig,
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct SyntaxConfig {
    /// Directories scanned, relative to the project root
    pub roots: Vec<PathBuf>,
    /// Directory that must exist before any scanning starts
    pub required_root: PathBuf,
    pub extension: String,
    pub formatter: FormatterConfig,
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct FormatterConfig {
    pub max_width: u16,
    pub edition: String,
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct PortsConfig {
    pub start: u16,
    pub end: u16,
    pub attempts: u32,
    pub host: IpAddr,
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self {
            roots: vec![PathBuf::from("src"), PathBuf::from("tests")],
            required_root: PathBuf::from("src"),
            extension: "rs".to_string(),
            formatter: FormatterConfig::default(),
        }
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            max_width: 100,
            edition: "2021".to_string(),
        }
    }
}

impl Default for PortsConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_PORT_START,
            end: DEFAULT_PORT_END,
            attempts: DEFAULT_ATTEMPTS,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        }
    }
}

pub fn get_user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "repokit").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `repokit.toml` in
    /// `project_root` is tried, then the user config directory, and finally
    /// the built-in defaults are used.
    pub fn load(config_path: Option<PathBuf>, project_root: &Path) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::from_file(&path);
        }

        let candidates = std::iter::once(project_root.join(CONFIG_FILE_NAME))
            .chain(get_user_config_path());
        for path in candidates {
            if path.is_file() {
                return Self::from_file(&path);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }
}

impl PortsConfig {
    /// Build the search range, CLI args override config values
    pub fn range_from_cli(&self, args: &PickPortArgs) -> Result<PortRange> {
        let range = PortRange::new(
            args.start.unwrap_or(self.start),
            args.end.unwrap_or(self.end),
            args.attempts.unwrap_or(self.attempts),
        )?;
        Ok(range)
    }

    pub fn host_from_cli(&self, args: &PickPortArgs) -> IpAddr {
        args.host.unwrap_or(self.host)
    }
}
