use anyhow::Result;
use repokit_core::app::{find_free_port, find_free_port_or_scan};
use repokit_core::domain::{PortProbeResult, PortRange};
use repokit_core::ports::PortProbe;
use std::io::Write;
use tracing::info;

/// How `pick` searches the range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Random draws only, may miss free ports on a crowded range
    #[default]
    Random,
    /// Random draws, then an ordered scan of the whole range
    RandomThenScan,
}

impl SearchMode {
    pub fn from_fallback_flag(fallback_scan: bool) -> Self {
        if fallback_scan {
            Self::RandomThenScan
        } else {
            Self::Random
        }
    }
}

/// Picks or validates TCP ports through a `PortProbe`
pub struct PortPicker<P: PortProbe> {
    probe: P,
}

impl<P: PortProbe> PortPicker<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// Report whether `port` can be bound right now. Returns the verdict.
    pub fn check<W: Write>(&self, port: u16, out: &mut W) -> Result<bool> {
        let free = self.probe.is_free(port);
        if free {
            writeln!(out, "Port {} is available", port)?;
        } else {
            writeln!(out, "Port {} is in use", port)?;
        }
        Ok(free)
    }

    pub fn pick(&self, range: &PortRange, mode: SearchMode) -> PortProbeResult {
        let mut rng = rand::thread_rng();
        let result = match mode {
            SearchMode::Random => find_free_port(range, &self.probe, &mut rng),
            SearchMode::RandomThenScan => find_free_port_or_scan(range, &self.probe, &mut rng),
        };
        if let Ok(port) = result {
            info!(port, lower = range.lower(), upper = range.upper(), "Picked free port");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use repokit_core::error::CoreError;

    #[test]
    fn test_check_reports_available() -> Result<()> {
        let picker = PortPicker::new(|_: u16| true);
        let mut out = Vec::new();

        assert!(picker.check(8080, &mut out)?);
        assert_eq!(String::from_utf8(out)?, "Port 8080 is available\n");
        Ok(())
    }

    #[test]
    fn test_check_reports_in_use() -> Result<()> {
        let picker = PortPicker::new(|_: u16| false);
        let mut out = Vec::new();

        assert!(!picker.check(8080, &mut out)?);
        assert_eq!(String::from_utf8(out)?, "Port 8080 is in use\n");
        Ok(())
    }

    #[test]
    fn test_pick_random_exhausts() {
        let picker = PortPicker::new(|_: u16| false);
        let range = PortRange::new(20000, 20000, 3).unwrap();

        let err = picker.pick(&range, SearchMode::Random).unwrap_err();
        assert!(matches!(err, CoreError::PortExhausted { attempts: 3, .. }));
    }

    #[test]
    fn test_pick_with_fallback_scan() {
        let picker = PortPicker::new(|p: u16| p == 20999);
        let range = PortRange::new(20000, 20999, 1).unwrap();

        assert_eq!(picker.pick(&range, SearchMode::RandomThenScan).unwrap(), 20999);
    }

    #[test]
    fn test_search_mode_from_flag() {
        assert_eq!(SearchMode::from_fallback_flag(false), SearchMode::Random);
        assert_eq!(SearchMode::from_fallback_flag(true), SearchMode::RandomThenScan);
        assert_eq!(SearchMode::default(), SearchMode::Random);
    }
}
