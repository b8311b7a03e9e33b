//! # strata-stack
//!
//! Elastic LIFO containers with bounded, demand-driven capacity.
//!
//! The stacks here sit over a raw slot buffer and manage its size
//! themselves:
//! - grow by doubling when the buffer is exhausted, capped at a hard
//!   `max_capacity`
//! - shrink by halving when occupancy retreats to a quarter of the
//!   buffer, floored at `initial_capacity`
//! - report fullness against the logical bound, never the buffer size
//!
//! The asymmetry between the grow and shrink thresholds is deliberate:
//! a workload oscillating around a capacity boundary never thrashes the
//! allocator.
//!
//! ## Quick Start
//!
//! ```rust
//! use strata_stack::prelude::*;
//!
//! // Generic elements
//! let mut stack = ElasticStack::new().unwrap();
//! stack.push(1).unwrap();
//! stack.push(2).unwrap();
//! assert_eq!(stack.pop().unwrap(), 2);
//!
//! // Owned strings with a per-element byte bound
//! let mut text = TextStack::new().unwrap();
//! text.push("hello").unwrap();
//! assert_eq!(text.peek(), Some("hello"));
//! ```
//!
//! ## Features
//!
//! - `logging` (default): capacity-transition events via `tracing`
//!
//! ## Architecture
//!
//! - [`ElasticStack`]: the generic container
//! - [`TextStack`]: owned strings plus the per-element byte bound
//! - [`StackConfig`]: the capacity policy (constants, thresholds,
//!   validation)
//! - [`StackError`] / [`StackResult`]: discriminated failures; every
//!   failed operation leaves the stack in its prior valid state
//! - [`StackStats`]: per-stack operation counters

#![cfg_attr(docsrs, feature(doc_cfg))]
// The slot buffer is the one unsafe surface of the crate (raw spine
// management); everything else is safe code layered over it.
#![allow(unsafe_code)]

mod buffer;
pub mod config;
pub mod error;
pub mod stats;

mod stack;
mod text;

// Re-export the working set at crate root for convenience
pub use crate::config::{INITIAL_CAPACITY, MAX_CAPACITY, MAX_ELEMENT_BYTES, StackConfig};
pub use crate::error::{Result, StackError, StackResult};
pub use crate::stack::ElasticStack;
pub use crate::stats::StackStats;
pub use crate::text::TextStack;

pub mod prelude {
    //! Convenient re-exports of commonly used types.

    pub use crate::config::{INITIAL_CAPACITY, MAX_CAPACITY, MAX_ELEMENT_BYTES, StackConfig};
    pub use crate::error::{Result, StackError, StackResult};
    pub use crate::stack::ElasticStack;
    pub use crate::stats::StackStats;
    pub use crate::text::TextStack;
}
