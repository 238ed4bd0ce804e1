use std::fmt;

use svcprobe_core::ProbeError;

/// Probe counts for one suite run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteSummary {
    pub name: &'static str,
    pub attempted: u32,
    pub failed: u32,
}

impl SuiteSummary {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            attempted: 0,
            failed: 0,
        }
    }

    /// Count a probe from its outcome
    pub fn record<T>(&mut self, outcome: &Result<T, ProbeError>) {
        match outcome {
            Ok(_) => self.pass(),
            Err(error) => self.fail(error),
        }
    }

    pub fn pass(&mut self) {
        self.attempted += 1;
    }

    pub fn fail(&mut self, reason: &dyn fmt::Display) {
        self.attempted += 1;
        self.failed += 1;
        tracing::warn!(suite = self.name, reason = %reason, "probe failed");
    }
}

impl fmt::Display for SuiteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} probes, {} failed", self.name, self.attempted, self.failed)
    }
}
