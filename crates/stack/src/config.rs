//! Capacity policy configuration
//!
//! The policy is deliberately asymmetric: a stack grows the moment its
//! buffer is exhausted (double, capped at `max_capacity`) but only shrinks
//! once occupancy retreats to a quarter of the buffer (halve, floored at
//! `initial_capacity`). The gap between the two thresholds keeps capacity
//! stable under push/pop churn near a boundary.

use crate::error::{StackError, StackResult};

/// Slot count allocated at construction when none is configured.
pub const INITIAL_CAPACITY: usize = 16;

/// Hard bound on element count when none is configured.
pub const MAX_CAPACITY: usize = 32768;

/// Per-element byte bound used by [`TextStack::new`](crate::TextStack::new).
///
/// The check is `>=`: an element is accepted only when strictly smaller
/// than the bound.
pub const MAX_ELEMENT_BYTES: usize = 256;

/// Configuration for elastic stacks
#[derive(Debug, Clone)]
pub struct StackConfig {
    /// Slot count allocated at construction (also the shrink floor)
    pub initial_capacity: usize,

    /// Hard bound on element count; `is_full` checks this, not the
    /// current buffer size
    pub max_capacity: usize,

    /// Per-element byte bound for byte-sequence elements (None = unchecked)
    pub max_element_bytes: Option<usize>,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            initial_capacity: INITIAL_CAPACITY,
            max_capacity: MAX_CAPACITY,
            max_element_bytes: None,
        }
    }
}

impl StackConfig {
    /// Create a configuration bounded at `max_capacity` elements
    ///
    /// The initial capacity is clamped down so small bounds stay valid.
    pub fn bounded(max_capacity: usize) -> Self {
        Self {
            initial_capacity: INITIAL_CAPACITY.min(max_capacity),
            max_capacity,
            ..Default::default()
        }
    }

    /// Set initial capacity (also the shrink floor)
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Set the hard bound on element count
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Set the per-element byte bound
    pub fn with_max_element_bytes(mut self, max_element_bytes: usize) -> Self {
        self.max_element_bytes = Some(max_element_bytes);
        self
    }

    /// Validate the configuration
    ///
    /// Checked once at construction; the policy methods below assume a
    /// valid config.
    pub fn validate(&self) -> StackResult<()> {
        if self.initial_capacity == 0 {
            return Err(StackError::invalid_config(
                "initial capacity must be at least 1",
            ));
        }
        if self.initial_capacity > self.max_capacity {
            return Err(StackError::invalid_config(
                "initial capacity exceeds maximum capacity",
            ));
        }
        if self.max_element_bytes == Some(0) {
            return Err(StackError::invalid_config(
                "element byte bound must be at least 1",
            ));
        }
        Ok(())
    }

    // ========================================================================
    // Capacity policy
    // ========================================================================

    /// Next capacity when the buffer is exhausted: double, capped at the
    /// hard bound
    #[must_use]
    pub fn grow_target(&self, capacity: usize) -> usize {
        capacity.saturating_mul(2).min(self.max_capacity)
    }

    /// Whether the buffer should shrink after a pop left `len` live elements
    ///
    /// True once occupancy retreats to a quarter of the buffer, except at
    /// the floor. Popping the last element never shrinks: capacity stays
    /// wherever the workload pushed it.
    #[must_use]
    pub fn should_shrink(&self, len: usize, capacity: usize) -> bool {
        len > 0 && len <= capacity / 4 && capacity > self.initial_capacity
    }

    /// Next capacity when occupancy has retreated: halve, floored at the
    /// initial capacity
    #[must_use]
    pub fn shrink_target(&self, capacity: usize) -> usize {
        (capacity / 2).max(self.initial_capacity)
    }
}
