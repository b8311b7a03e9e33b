//! Operation counters for the elastic stacks

/// Counter snapshot for stack operations
///
/// Plain fields: the container mutates through `&mut self`, so there is
/// nothing to synchronize. [`stats()`](crate::ElasticStack::stats) hands
/// out a copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StackStats {
    /// Successful pushes
    pub pushes: u64,
    /// Successful pops (`pop` and `try_pop`)
    pub pops: u64,
    /// Completed buffer growths
    pub grows: u64,
    /// Completed buffer shrinks (a failed shrink is swallowed and not counted)
    pub shrinks: u64,
    /// Rejected pushes (full, oversized element, failed growth)
    pub failed_pushes: u64,
    /// Highest occupancy observed
    pub peak_len: u64,
}

impl StackStats {
    /// Record a successful push at the new occupancy
    pub(crate) fn record_push(&mut self, len: usize) {
        self.pushes += 1;
        self.peak_len = self.peak_len.max(len as u64);
    }

    /// Record a successful pop
    pub(crate) fn record_pop(&mut self) {
        self.pops += 1;
    }

    /// Record a completed growth
    pub(crate) fn record_grow(&mut self) {
        self.grows += 1;
    }

    /// Record a completed shrink
    pub(crate) fn record_shrink(&mut self) {
        self.shrinks += 1;
    }

    /// Record a rejected push
    pub(crate) fn record_failed_push(&mut self) {
        self.failed_pushes += 1;
    }
}

impl core::fmt::Display for StackStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Stack Statistics:")?;
        writeln!(
            f,
            "  Pushes: {} (failed: {})",
            self.pushes, self.failed_pushes
        )?;
        writeln!(f, "  Pops: {}", self.pops)?;
        writeln!(f, "  Grows: {}", self.grows)?;
        writeln!(f, "  Shrinks: {}", self.shrinks)?;
        writeln!(f, "  Peak occupancy: {}", self.peak_len)?;
        Ok(())
    }
}
