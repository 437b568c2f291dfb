//! Typed failure modes for the chain buffer core.
//!
//! Bounds violations, mutation of a fixed chain, and a [`Reader`] exhausted
//! past its end are hard errors: they terminate the in-progress operation.
//! Numeric, boolean, and char parsing are deliberately *not* represented
//! here — those fail soft, returning the caller-supplied default, so a
//! solver can express "try this projection, else fall back" without paying
//! for a `Result`.
//!
//! [`Reader`]: crate::reader::Reader
use thiserror::Error;

/// A hard failure from a chain or reader operation.
///
/// Every variant carries the offending index/length alongside the chain's
/// current length, so the message is enough to diagnose the call site
/// without a debugger.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ChainError {
    /// A byte-range helper (`toBytes`, `toChars`, `update`, ...) was asked
    /// for a range that does not fit inside `[0, count)`.
    #[error("range [{index}, {index} + {length}) out of bounds for chain of {count} bytes")]
    Bounds {
        /// Start of the requested range.
        index: usize,
        /// Length of the requested range.
        length: usize,
        /// The chain's logical length at the time of the call.
        count: usize,
    },

    /// A mutator ran against a chain constructed as [`fixed`](crate::chain::Chain::is_fixed).
    #[error("mutation attempted on a fixed chain of {count} bytes")]
    IllegalState {
        /// The chain's logical length at the time of the call.
        count: usize,
    },

    /// [`Reader::next`](crate::reader::Reader::next) was called after the
    /// cursor reached `end`.
    #[error("reader exhausted at end of stream (end = {end})")]
    ReaderCrash {
        /// The exclusive end of the reader's view.
        end: usize,
    },
}

impl ChainError {
    /// Build a [`ChainError::Bounds`] for a rejected `(index, length)` range
    /// against a chain of `count` bytes.
    #[must_use]
    pub fn bounds(index: usize, length: usize, count: usize) -> Self {
        Self::Bounds {
            index,
            length,
            count,
        }
    }

    /// Build a [`ChainError::IllegalState`] for a mutation rejected because
    /// the chain is fixed.
    #[must_use]
    pub fn illegal_state(count: usize) -> Self {
        Self::IllegalState { count }
    }
}

/// Convenience alias for fallible chain operations.
pub type Result<T> = core::result::Result<T, ChainError>;
