//! Owning text stack with a per-element byte bound
//!
//! The byte-sequence instantiation of the elastic stack: push copies a
//! borrowed `&str` into an owned `String`, pop transfers the `String`
//! out. Elements at or above the configured byte bound are rejected
//! before any other precondition and before any mutation.

use crate::config::{MAX_ELEMENT_BYTES, StackConfig};
use crate::error::{StackError, StackResult};
use crate::stack::ElasticStack;
use crate::stats::StackStats;

/// Elastic stack of owned strings
///
/// Thin wrapper over [`ElasticStack<String>`] that adds the per-element
/// byte bound on push. The capacity policy is identical.
///
/// # Example
/// ```
/// use strata_stack::TextStack;
///
/// let mut stack = TextStack::new().unwrap();
/// stack.push("a").unwrap();
/// stack.push("b").unwrap();
/// stack.push("c").unwrap();
///
/// assert_eq!(stack.pop().unwrap(), "c");
/// assert_eq!(stack.pop().unwrap(), "b");
/// assert_eq!(stack.pop().unwrap(), "a");
/// assert!(stack.pop().is_err());
/// ```
pub struct TextStack {
    inner: ElasticStack<String>,
}

impl TextStack {
    /// Creates an empty text stack with the default policy and the
    /// default element bound of [`MAX_ELEMENT_BYTES`]
    pub fn new() -> StackResult<Self> {
        Self::with_config(StackConfig::default().with_max_element_bytes(MAX_ELEMENT_BYTES))
    }

    /// Creates an empty text stack with a custom capacity policy
    ///
    /// A config without `max_element_bytes` disables the per-element
    /// check entirely.
    pub fn with_config(config: StackConfig) -> StackResult<Self> {
        Ok(Self {
            inner: ElasticStack::with_config(config)?,
        })
    }

    /// Number of strings on the stack
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the stack holds no strings
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Whether the stack is at its logical maximum
    #[inline]
    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    /// Current buffer capacity in slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// The capacity policy this stack was created with
    pub fn config(&self) -> &StackConfig {
        self.inner.config()
    }

    /// Copies `item` into an owned string and pushes it
    ///
    /// The byte-bound check runs first: an oversized element fails with
    /// `ElementTooLarge` before fullness is even considered, and the
    /// stack is untouched. The owned copy is only made once the bound
    /// check has passed. The bound is exclusive: `len >= max` fails.
    pub fn push(&mut self, item: &str) -> StackResult<()> {
        if let Some(max_size) = self.config().max_element_bytes {
            if item.len() >= max_size {
                self.inner.record_failed_push();
                return Err(StackError::element_too_large(item.len(), max_size));
            }
        }
        self.inner.push(item.to_owned())
    }

    /// Pops the top string, transferring ownership to the caller
    pub fn pop(&mut self) -> StackResult<String> {
        self.inner.pop()
    }

    /// Option-shaped pop for callers that treat an empty stack as normal
    pub fn try_pop(&mut self) -> Option<String> {
        self.inner.try_pop()
    }

    /// Borrows the top string without removing it
    pub fn peek(&self) -> Option<&str> {
        self.inner.peek().map(String::as_str)
    }

    /// Drops all strings in place, keeping the current capacity
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Snapshot of the operation counters
    pub fn stats(&self) -> StackStats {
        self.inner.stats()
    }
}

impl core::fmt::Debug for TextStack {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TextStack")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}
