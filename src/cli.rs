use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "fix-syntax")]
#[command(about = "Check project sources for syntax errors and try to repair them with rustfmt")]
pub struct FixSyntaxArgs {
    /// Project root containing the source directories
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Parser, Debug, PartialEq)]
#[command(name = "pick-port")]
#[command(about = "Find an available TCP port")]
pub struct PickPortArgs {
    /// Check if a specific port is available
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub check: Option<u16>,

    /// Start of port range (default: 8100)
    #[arg(long)]
    pub start: Option<u16>,

    /// End of port range (default: 9000)
    #[arg(long)]
    pub end: Option<u16>,

    /// Number of random ports to try (default: 20)
    #[arg(long)]
    pub attempts: Option<u32>,

    /// Address to bind when probing (default: 0.0.0.0)
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Scan the whole range in order once the random attempts run out
    #[arg(long)]
    pub fallback_scan: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
