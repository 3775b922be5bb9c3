use std::cell::RefCell;

use sha2::{Digest, Sha256};

use crate::hash::Hash256;

/// Double-SHA256 of the input, the digest used for block and message
/// identification throughout the format.
pub fn double_sha256(data: &[u8]) -> Hash256 {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    Hash256::from_bytes(second.into())
}

/// A per-thread pool of reusable SHA-256 contexts.
///
/// Hashing sits on the hot path when assembling preimages, so contexts
/// are acquired from a pool, reset, and returned rather than allocated
/// per call. The pool is deliberately not `Sync`: each worker thread
/// owns its own pool, so there is no shared mutable state and no lock.
///
/// [`acquire`](Self::acquire) hands out a [`PooledHasher`] guard; the
/// context returns to the free list when the guard drops.
#[derive(Default)]
pub struct HasherPool {
    free: RefCell<Vec<Sha256>>,
}

impl HasherPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of idle contexts currently held.
    pub fn idle(&self) -> usize {
        self.free.borrow().len()
    }

    /// Borrow a context, creating one if the free list is empty.
    pub fn acquire(&self) -> PooledHasher<'_> {
        let hasher = self.free.borrow_mut().pop().unwrap_or_default();
        PooledHasher {
            pool: self,
            hasher: Some(hasher),
        }
    }
}

/// A SHA-256 context borrowed from a [`HasherPool`].
///
/// Dropping the guard resets the context and returns it to the pool, so
/// release is deterministic on scope exit even on error paths.
pub struct PooledHasher<'p> {
    pool: &'p HasherPool,
    hasher: Option<Sha256>,
}

impl PooledHasher<'_> {
    /// Feed bytes into the running digest.
    pub fn update(&mut self, data: &[u8]) {
        if let Some(hasher) = self.hasher.as_mut() {
            hasher.update(data);
        }
    }

    /// Finish the double-SHA256 digest and reset the context so the
    /// guard can be reused for another preimage.
    pub fn finalize_double(&mut self) -> Hash256 {
        let hasher = self.hasher.get_or_insert_with(Sha256::default);
        let first = hasher.finalize_reset();
        let second = Sha256::digest(first);
        Hash256::from_bytes(second.into())
    }
}

impl Drop for PooledHasher<'_> {
    fn drop(&mut self) {
        if let Some(mut hasher) = self.hasher.take() {
            hasher.reset();
            self.pool.free.borrow_mut().push(hasher);
        }
    }
}
