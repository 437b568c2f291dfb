//! Pluggable buffer pool used to amortize [`Chain`](crate::chain::Chain)
//! growth.
//!
//! A bucket is a narrow capability: given `(old_buffer, used_length,
//! min_capacity)`, return a replacement buffer of size at least
//! `min_capacity` whose first `used_length` bytes equal those of
//! `old_buffer`. Implementations may pool and recycle; callers must not use
//! `old_buffer` after the call returns (it is moved in).
//!
//! When a chain has no bucket attached, growth falls back to geometric
//! expansion by a factor of 1.5, clamped up to the requested capacity — see
//! [`Chain::grow`](crate::chain::Chain::grow).
use alloc::vec::Vec;
use core::cell::RefCell;

/// A size-addressed byte-array pool contract for amortized allocation
/// reuse.
///
/// Implementations are free to pool by size class, use a single free list,
/// or simply allocate fresh every time (degrading to the no-bucket growth
/// policy). Thread-safety, if any, is the implementation's concern: a
/// `Bucket` may be shared across chains that live on different threads, but
/// no single [`Chain`](crate::chain::Chain) may be mutated from more than
/// one thread regardless of whether it has a bucket attached.
pub trait Bucket {
    /// Return a buffer of capacity at least `min_capacity` whose first
    /// `used` bytes equal `old[..used]`. `old` is consumed; implementations
    /// that recycle buffers should return it (or its storage) to the pool
    /// once its replacement has been produced.
    fn resize(&self, old: Vec<u8>, used: usize, min_capacity: usize) -> Vec<u8>;
}

/// Configuration for [`VecPool`].
#[derive(Debug, Clone, Copy)]
pub struct PoolConfig {
    /// Capacity newly-allocated buffers are given when the pool is empty
    /// and the caller's `min_capacity` is smaller than this hint. Avoids
    /// thrashing on a pool that is handed a string of tiny chains.
    ///
    /// # Default
    ///
    /// `64`
    pub capacity_hint: usize,
    /// Maximum number of retired buffers the pool keeps on hand. Buffers
    /// returned once this limit is reached are simply dropped.
    ///
    /// # Default
    ///
    /// `16`
    pub max_buffers: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            capacity_hint: 64,
            max_buffers: 16,
        }
    }
}

/// A simple free-list [`Bucket`] backed by a `Vec<Vec<u8>>`.
///
/// Retired buffers are kept, largest-capacity first, and a `resize` call
/// takes the smallest retired buffer that already meets `min_capacity`
/// before falling back to a fresh allocation. Not thread-safe: `VecPool`
/// uses a `RefCell` and is meant to be held behind a single-owner
/// `Rc<VecPool>`, matching the chain's own single-owner contract.
#[derive(Debug)]
pub struct VecPool {
    config: PoolConfig,
    free: RefCell<Vec<Vec<u8>>>,
}

impl VecPool {
    /// Create an empty pool with the given configuration.
    #[must_use]
    pub fn new(config: PoolConfig) -> Self {
        Self {
            config,
            free: RefCell::new(Vec::new()),
        }
    }

    /// Number of buffers currently retired in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.free.borrow().len()
    }

    /// Whether the pool currently holds no retired buffers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for VecPool {
    fn default() -> Self {
        Self::new(PoolConfig::default())
    }
}

impl Bucket for VecPool {
    fn resize(&self, old: Vec<u8>, used: usize, min_capacity: usize) -> Vec<u8> {
        debug_assert!(used <= old.len());

        let mut free = self.free.borrow_mut();
        let candidate = free
            .iter()
            .position(|buf| buf.capacity() >= min_capacity)
            .map(|idx| free.swap_remove(idx));

        let mut replacement = match candidate {
            Some(buf) => buf,
            None => Vec::with_capacity(core::cmp::max(min_capacity, self.config.capacity_hint)),
        };
        replacement.clear();
        replacement.extend_from_slice(&old[..used]);

        if free.len() < self.config.max_buffers {
            free.push(old);
        }
        replacement
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{Bucket, PoolConfig, VecPool};

    #[test]
    fn resize_preserves_prefix() {
        let pool = VecPool::default();
        let old = vec![1u8, 2, 3, 4];
        let replacement = pool.resize(old, 3, 16);
        assert_eq!(&replacement[..3], &[1, 2, 3]);
        assert!(replacement.capacity() >= 16);
    }

    #[test]
    fn retired_buffers_are_reused() {
        let pool = VecPool::new(PoolConfig {
            capacity_hint: 4,
            max_buffers: 4,
        });
        let first = pool.resize(Vec::new(), 0, 32);
        assert!(pool.is_empty());
        let _second = pool.resize(first, 0, 8);
        assert_eq!(pool.len(), 1);
        let third = pool.resize(Vec::new(), 0, 8);
        assert!(third.capacity() >= 8);
        // One retired buffer (capacity 32) should have been reused rather
        // than a fresh allocation made, and the pool now holds the other.
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn respects_max_buffers() {
        let pool = VecPool::new(PoolConfig {
            capacity_hint: 4,
            max_buffers: 1,
        });
        let a = pool.resize(Vec::new(), 0, 4);
        let b = pool.resize(Vec::new(), 0, 4);
        let _ = pool.resize(a, 0, 4);
        let _ = pool.resize(b, 0, 4);
        assert!(pool.len() <= 1);
    }
}
