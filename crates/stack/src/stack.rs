//! Generic elastic stack implementation
//!
//! Push and pop are amortized O(1): reallocation cost is spread across
//! the doubling/halving schedule, and the asymmetric thresholds (grow at
//! 100% occupancy, shrink at 25%) keep capacity from thrashing when a
//! workload oscillates around a boundary.

use crate::buffer::SlotBuffer;
use crate::config::StackConfig;
use crate::error::{StackError, StackResult};
use crate::stats::StackStats;

#[cfg(feature = "logging")]
use tracing::{debug, trace};

/// Elastic LIFO stack over a raw slot buffer
///
/// Capacity follows demand: the buffer doubles when exhausted (capped at
/// `max_capacity`) and halves when occupancy retreats to a quarter of the
/// buffer (floored at `initial_capacity`). [`is_full`](Self::is_full)
/// reports the logical bound, never the current buffer size: a stack can
/// be "not full" while its buffer is exhausted and about to grow.
///
/// # Memory Layout
/// ```text
/// [0]-----[1]-----...-----[len-1]-----[len]-----...-----[capacity-1]
///  <------ live, bottom to top ------> <----- uninitialized ----->
/// ```
///
/// # Example
/// ```
/// use strata_stack::ElasticStack;
///
/// let mut stack = ElasticStack::new().unwrap();
/// stack.push("first").unwrap();
/// stack.push("second").unwrap();
///
/// assert_eq!(stack.pop().unwrap(), "second");
/// assert_eq!(stack.pop().unwrap(), "first");
/// assert!(stack.pop().is_err());
/// ```
pub struct ElasticStack<T> {
    /// Slot storage; slots `[len, capacity)` are uninitialized
    buffer: SlotBuffer<T>,

    /// Number of live elements; index `len - 1` is the top
    len: usize,

    /// Capacity policy, immutable after construction
    config: StackConfig,

    /// Operation counters
    stats: StackStats,
}

impl<T> ElasticStack<T> {
    /// Creates an empty stack with the default capacity policy
    pub fn new() -> StackResult<Self> {
        Self::with_config(StackConfig::default())
    }

    /// Creates an empty stack with a custom capacity policy
    ///
    /// Validates the config, then allocates `initial_capacity` slots up
    /// front. Fails with `InvalidConfig` or `AllocationFailed`.
    pub fn with_config(config: StackConfig) -> StackResult<Self> {
        config.validate()?;
        let buffer = SlotBuffer::allocate(config.initial_capacity)?;
        Ok(Self {
            buffer,
            len: 0,
            config,
            stats: StackStats::default(),
        })
    }

    /// Number of elements on the stack
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the stack holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the stack is at its logical maximum
    ///
    /// Checks `max_capacity`, not the current buffer size.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len >= self.config.max_capacity
    }

    /// Current buffer capacity in slots
    ///
    /// Moves with the grow/shrink policy; see [`StackConfig`].
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// The capacity policy this stack was created with
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Pushes an element onto the stack
    ///
    /// Grows the buffer first when it is exhausted. On any failure the
    /// stack is unchanged: same length, same capacity, same contents.
    pub fn push(&mut self, item: T) -> StackResult<()> {
        if self.is_full() {
            self.stats.record_failed_push();
            return Err(StackError::full(self.config.max_capacity));
        }

        if self.len == self.buffer.capacity() {
            if let Err(e) = self.grow() {
                self.stats.record_failed_push();
                return Err(e);
            }
        }

        // SAFETY: slot `len` is in bounds (grow above guarantees
        // len < capacity) and uninitialized (slots at and past `len` are
        // always dead).
        unsafe { self.buffer.write(self.len, item) };
        self.len += 1;
        self.stats.record_push(self.len);
        Ok(())
    }

    /// Count a rejection decided by a wrapper before it reached `push`
    ///
    /// `TextStack` rejects oversized elements without constructing them;
    /// the rejection still belongs in this stack's counters.
    pub(crate) fn record_failed_push(&mut self) {
        self.stats.record_failed_push();
    }

    /// Pops the top element, transferring ownership to the caller
    ///
    /// After a successful pop the buffer may shrink; see
    /// [`StackConfig::should_shrink`]. Fails with `Empty` on an empty
    /// stack.
    pub fn pop(&mut self) -> StackResult<T> {
        if self.is_empty() {
            return Err(StackError::empty());
        }

        self.len -= 1;
        // SAFETY: slot `len` held the top element before the decrement
        // and is initialized; after the read it is dead and `len` already
        // excludes it.
        let item = unsafe { self.buffer.read(self.len) };
        self.stats.record_pop();

        self.maybe_shrink();
        Ok(item)
    }

    /// Option-shaped pop for callers that treat an empty stack as normal
    ///
    /// Identical mutation semantics to [`pop`](Self::pop), including the
    /// shrink check.
    pub fn try_pop(&mut self) -> Option<T> {
        self.pop().ok()
    }

    /// Borrows the top element without removing it
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: len > 0, so slot `len - 1` is in bounds and initialized.
        Some(unsafe { self.buffer.peek(self.len - 1) })
    }

    /// Drops all elements in place, keeping the current capacity
    ///
    /// Capacity deliberately stays put, consistent with the rule that
    /// emptying the stack never shrinks it.
    pub fn clear(&mut self) {
        if self.len == 0 {
            return;
        }

        let live = self.len;
        // Reset before dropping so a panicking destructor cannot leave
        // half-dead slots observable as live.
        self.len = 0;
        // SAFETY: slots `[0, live)` held the elements counted by the old
        // `len` and are initialized exactly once each.
        unsafe { self.buffer.drop_live(live) };

        #[cfg(feature = "logging")]
        trace!(cleared = live, capacity = self.buffer.capacity(), "stack cleared");
    }

    /// Snapshot of the operation counters
    pub fn stats(&self) -> StackStats {
        self.stats
    }

    /// Double the buffer, capped at the logical maximum
    fn grow(&mut self) -> StackResult<()> {
        let old_capacity = self.buffer.capacity();
        let new_capacity = self.config.grow_target(old_capacity);
        debug_assert!(new_capacity > old_capacity);

        self.buffer.reallocate(new_capacity, self.len)?;
        self.stats.record_grow();

        #[cfg(feature = "logging")]
        debug!(old_capacity, new_capacity, len = self.len, "buffer grew");
        Ok(())
    }

    /// Halve the buffer once occupancy has retreated far enough
    ///
    /// A failed shrink is swallowed: the stack keeps the old buffer and
    /// only wastes space.
    fn maybe_shrink(&mut self) {
        let old_capacity = self.buffer.capacity();
        if !self.config.should_shrink(self.len, old_capacity) {
            return;
        }

        let new_capacity = self.config.shrink_target(old_capacity);
        if self.buffer.reallocate(new_capacity, self.len).is_ok() {
            self.stats.record_shrink();

            #[cfg(feature = "logging")]
            debug!(old_capacity, new_capacity, len = self.len, "buffer shrank");
        }
    }
}

impl<T> Drop for ElasticStack<T> {
    fn drop(&mut self) {
        let live = self.len;
        self.len = 0;
        // SAFETY: slots `[0, live)` hold the remaining elements; each is
        // dropped exactly once. The buffer's own Drop then releases the
        // spine.
        unsafe { self.buffer.drop_live(live) };
    }
}

impl<T> core::fmt::Debug for ElasticStack<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ElasticStack")
            .field("len", &self.len)
            .field("capacity", &self.buffer.capacity())
            .field("max_capacity", &self.config.max_capacity)
            .finish_non_exhaustive()
    }
}
