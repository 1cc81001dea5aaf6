use std::ops::RangeInclusive;

use crate::error::{CoreError, Result};

pub const DEFAULT_PORT_START: u16 = 8100;
pub const DEFAULT_PORT_END: u16 = 9000;
pub const DEFAULT_ATTEMPTS: u32 = 20;

/// Inclusive band of candidate ports plus the random draw budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortRange {
    lower: u16,
    upper: u16,
    max_attempts: u32,
}

/// Either a free port or `CoreError::PortExhausted`
pub type PortProbeResult = Result<u16>;

impl PortRange {
    pub fn new(lower: u16, upper: u16, max_attempts: u32) -> Result<Self> {
        if lower == 0 || lower > upper || max_attempts == 0 {
            return Err(CoreError::InvalidRange {
                lower,
                upper,
                attempts: max_attempts,
            });
        }
        Ok(Self {
            lower,
            upper,
            max_attempts,
        })
    }

    pub fn lower(&self) -> u16 {
        self.lower
    }

    pub fn upper(&self) -> u16 {
        self.upper
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn ports(&self) -> RangeInclusive<u16> {
        self.lower..=self.upper
    }

    pub fn contains(&self, port: u16) -> bool {
        self.ports().contains(&port)
    }

    pub fn exhausted(&self) -> CoreError {
        CoreError::PortExhausted {
            lower: self.lower,
            upper: self.upper,
            attempts: self.max_attempts,
        }
    }
}

impl Default for PortRange {
    fn default() -> Self {
        Self {
            lower: DEFAULT_PORT_START,
            upper: DEFAULT_PORT_END,
            max_attempts: DEFAULT_ATTEMPTS,
        }
    }
}
