//! Randomized free-port search
//!
//! Draws ports uniformly from the range and returns the first one the checker
//! reports free. This favors latency over completeness: on a mostly occupied
//! range it may give up while free ports still exist, which is what
//! [`scan_sequential`] is for.

use rand::Rng;

use crate::domain::{PortProbeResult, PortRange};
use crate::ports::PortProbe;

/// Try up to `range.max_attempts()` random ports in `range`.
pub fn find_free_port<P, R>(range: &PortRange, probe: &P, rng: &mut R) -> PortProbeResult
where
    P: PortProbe + ?Sized,
    R: Rng,
{
    for _ in 0..range.max_attempts() {
        let port = rng.gen_range(range.ports());
        if probe.is_free(port) {
            return Ok(port);
        }
    }
    Err(range.exhausted())
}

/// Walk `range` in ascending order and return the first free port.
pub fn scan_sequential<P>(range: &PortRange, probe: &P) -> Option<u16>
where
    P: PortProbe + ?Sized,
{
    range.ports().find(|&port| probe.is_free(port))
}

/// Random search first, then an exhaustive scan when the draws come up empty.
pub fn find_free_port_or_scan<P, R>(range: &PortRange, probe: &P, rng: &mut R) -> PortProbeResult
where
    P: PortProbe + ?Sized,
    R: Rng,
{
    find_free_port(range, probe, rng).or_else(|err| scan_sequential(range, probe).ok_or(err))
}
