//! Error types for the elastic stack containers
//!
//! Uses thiserror for clean, idiomatic Rust error definitions.

use core::alloc::Layout;
use thiserror::Error;

#[cfg(feature = "logging")]
use tracing::error;

// ============================================================================
// Main Error Type
// ============================================================================

/// Stack operation errors
#[must_use = "errors should be handled"]
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    // --- Allocation Errors ---
    #[error("buffer allocation failed: {size} bytes with {align} byte alignment")]
    AllocationFailed { size: usize, align: usize },

    // --- Capacity Errors ---
    #[error("stack full: logical capacity {capacity} reached")]
    Full { capacity: usize },

    #[error("stack is empty")]
    Empty,

    // --- Element Errors ---
    #[error("element exceeds maximum size: {size} bytes (max: {max_size})")]
    ElementTooLarge { size: usize, max_size: usize },

    // --- Configuration Errors ---
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl StackError {
    /// Check if error is retryable
    ///
    /// `Full` and `Empty` describe a momentary state: the same call can
    /// succeed after the stack changes. The rest are terminal for the
    /// given input.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Full { .. } | Self::Empty)
    }

    /// Get error code for categorization
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::AllocationFailed { .. } => "STACK:ALLOC:FAILED",
            Self::Full { .. } => "STACK:FULL",
            Self::Empty => "STACK:EMPTY",
            Self::ElementTooLarge { .. } => "STACK:ELEMENT:TOO_LARGE",
            Self::InvalidConfig { .. } => "STACK:CONFIG:INVALID",
        }
    }

    // ============================================================================
    // Convenience Constructors
    // ============================================================================

    /// Create allocation failed error
    pub fn allocation_failed(size: usize, align: usize) -> Self {
        #[cfg(feature = "logging")]
        error!(
            "buffer allocation failed: {} bytes with {} alignment",
            size, align
        );

        Self::AllocationFailed { size, align }
    }

    /// Create allocation failed error from layout
    #[must_use]
    pub fn allocation_failed_with_layout(layout: Layout) -> Self {
        Self::allocation_failed(layout.size(), layout.align())
    }

    /// Create stack full error
    #[must_use]
    pub fn full(capacity: usize) -> Self {
        Self::Full { capacity }
    }

    /// Create stack empty error
    #[must_use]
    pub fn empty() -> Self {
        Self::Empty
    }

    /// Create element too large error
    #[must_use]
    pub fn element_too_large(size: usize, max_size: usize) -> Self {
        Self::ElementTooLarge { size, max_size }
    }

    /// Create invalid config error
    pub fn invalid_config(reason: &str) -> Self {
        Self::InvalidConfig {
            reason: reason.to_string(),
        }
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// Result type for stack operations
pub type StackResult<T> = core::result::Result<T, StackError>;

/// Generic result type alias
pub type Result<T> = StackResult<T>;

// ============================================================================
// Tests
// ============================================================================
