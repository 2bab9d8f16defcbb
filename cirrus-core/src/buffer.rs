//! Growable byte buffer with explicit capacity bookkeeping.

use std::fmt;
use std::sync::Arc;

use crate::alloc::{BufferAllocator, SystemAllocator};
use crate::error::CodecError;

/// Owned, contiguous storage for one encoded message.
///
/// The buffer tracks the bytes holding valid encoded content (`len`)
/// separately from the bytes it has been granted (`capacity`), and it
/// only acquires or returns storage through its [`BufferAllocator`].
/// `len() <= capacity()` holds at all times.
///
/// Lifecycle: created by [`init`](Self::init) (zero capacity is legal and
/// performs no allocation), grown on demand by encoding or by
/// [`ensure_capacity`](Self::ensure_capacity), and destroyed by
/// [`release`](Self::release), which is idempotent and also runs on drop,
/// so storage goes back through the allocator on every exit path.
///
/// ## Example
///
/// ```rust
/// use cirrus_core::SerializedBuffer;
///
/// let mut buffer = SerializedBuffer::new();
/// buffer.put_slice(b"payload").unwrap();
/// assert_eq!(buffer.len(), 7);
///
/// buffer.release();
/// assert_eq!(buffer.capacity(), 0);
/// buffer.release(); // second release is a no-op
/// ```
pub struct SerializedBuffer {
    data: Vec<u8>,
    capacity: usize,
    allocator: Arc<dyn BufferAllocator>,
}

impl SerializedBuffer {
    /// Create an empty buffer on the system allocator. Never allocates.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            capacity: 0,
            allocator: Arc::new(SystemAllocator),
        }
    }

    /// Create a buffer with `initial_capacity` bytes from `allocator`.
    ///
    /// A zero capacity is legal and skips the allocator entirely, so it
    /// succeeds even on an allocator that refuses every request. On
    /// failure nothing is constructed.
    pub fn init(
        initial_capacity: usize,
        allocator: Arc<dyn BufferAllocator>,
    ) -> Result<Self, CodecError> {
        let data = if initial_capacity == 0 {
            Vec::new()
        } else {
            allocator.allocate(initial_capacity)?
        };
        Ok(Self {
            data,
            capacity: initial_capacity,
            allocator,
        })
    }

    /// Create a buffer with `initial_capacity` bytes on the system allocator.
    pub fn with_capacity(initial_capacity: usize) -> Result<Self, CodecError> {
        Self::init(initial_capacity, Arc::new(SystemAllocator))
    }

    /// Bytes currently holding valid encoded content.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the buffer holds no encoded content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes granted by the allocator.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// View the valid encoded content.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Mutable view of the valid encoded content. Length and capacity are
    /// unaffected; this exists so callers can patch bytes in place.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Grow the granted capacity to at least `needed` bytes. Never shrinks.
    ///
    /// On failure the buffer's content and capacity are untouched.
    pub fn ensure_capacity(&mut self, needed: usize) -> Result<(), CodecError> {
        if needed <= self.capacity {
            return Ok(());
        }
        self.allocator.reallocate(&mut self.data, needed)?;
        tracing::trace!(from = self.capacity, to = needed, "grew serialized buffer");
        self.capacity = needed;
        Ok(())
    }

    /// Discard the encoded content, keeping the granted capacity.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Append `bytes`, growing the granted capacity if required.
    pub fn put_slice(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        let needed = self.data.len() + bytes.len();
        self.ensure_capacity(needed)?;
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    /// Return the storage to the allocator and zero the buffer.
    ///
    /// Safe on a buffer that was never grown, and idempotent: a second
    /// release of an already-released buffer is a no-op. Also runs on
    /// drop.
    pub fn release(&mut self) {
        let data = std::mem::take(&mut self.data);
        if data.capacity() > 0 {
            self.allocator.deallocate(data);
        }
        self.capacity = 0;
    }
}

impl Default for SerializedBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SerializedBuffer {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for SerializedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializedBuffer")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::testing::{BudgetAllocator, FailingAllocator};

    #[test]
    fn test_zero_capacity_init_skips_allocator() {
        let buffer = SerializedBuffer::init(0, Arc::new(FailingAllocator)).unwrap();
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), 0);
    }

    #[test]
    fn test_init_propagates_allocator_failure() {
        let result = SerializedBuffer::init(16, Arc::new(FailingAllocator));
        assert_eq!(result.unwrap_err(), CodecError::Allocation { needed: 16 });
    }

    #[test]
    fn test_grow_failure_preserves_content() {
        let mut buffer = SerializedBuffer::init(4, Arc::new(BudgetAllocator::new(1))).unwrap();
        buffer.put_slice(&[0xAA, 0xBB, 0xCC, 0xDD]).unwrap();

        let err = buffer.ensure_capacity(1024).unwrap_err();
        assert_eq!(err, CodecError::Allocation { needed: 1024 });
        assert_eq!(buffer.as_slice(), &[0xAA, 0xBB, 0xCC, 0xDD]);
        assert_eq!(buffer.capacity(), 4);
    }

    #[test]
    fn test_put_slice_grows_transparently() {
        let mut buffer = SerializedBuffer::new();
        buffer.put_slice(&[1, 2, 3]).unwrap();
        buffer.put_slice(&[4, 5]).unwrap();
        assert_eq!(buffer.as_slice(), &[1, 2, 3, 4, 5]);
        assert!(buffer.capacity() >= 5);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut buffer = SerializedBuffer::with_capacity(32).unwrap();
        buffer.put_slice(b"stale").unwrap();
        buffer.clear();
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), 32);
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut buffer = SerializedBuffer::with_capacity(16).unwrap();
        buffer.put_slice(b"abc").unwrap();
        buffer.release();
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), 0);
        buffer.release();
        assert_eq!(buffer.capacity(), 0);
    }

    #[test]
    fn test_ensure_capacity_never_shrinks() {
        let mut buffer = SerializedBuffer::with_capacity(64).unwrap();
        buffer.ensure_capacity(8).unwrap();
        assert_eq!(buffer.capacity(), 64);
    }
}
