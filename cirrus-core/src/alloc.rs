//! Allocator capability for serialized buffers.
//!
//! Buffers never touch the heap directly; they go through a
//! [`BufferAllocator`], which may refuse any request. This keeps every
//! growth path honest about exhaustion and lets tests swap in allocators
//! that fail on purpose (see [`testing`]).

use crate::error::CodecError;

/// Capability that grants and reclaims buffer storage.
///
/// Implementations must treat every request as fallible; callers check
/// and propagate failure rather than assume success.
pub trait BufferAllocator: Send + Sync {
    /// Allocate storage able to hold `capacity` bytes, returned empty.
    fn allocate(&self, capacity: usize) -> Result<Vec<u8>, CodecError>;

    /// Grow `buffer` so it can hold at least `capacity` bytes in total,
    /// preserving its contents. Must leave `buffer` untouched on failure.
    fn reallocate(&self, buffer: &mut Vec<u8>, capacity: usize) -> Result<(), CodecError>;

    /// Return storage to the allocator. Dropping it is the default.
    fn deallocate(&self, buffer: Vec<u8>) {
        drop(buffer);
    }
}

/// Allocator backed by the global heap, using fallible `Vec` reservation.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemAllocator;

impl BufferAllocator for SystemAllocator {
    fn allocate(&self, capacity: usize) -> Result<Vec<u8>, CodecError> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| CodecError::Allocation { needed: capacity })?;
        Ok(data)
    }

    fn reallocate(&self, buffer: &mut Vec<u8>, capacity: usize) -> Result<(), CodecError> {
        let additional = capacity.saturating_sub(buffer.len());
        buffer
            .try_reserve_exact(additional)
            .map_err(|_| CodecError::Allocation { needed: capacity })
    }
}

/// Allocators that fail on purpose, for exercising exhaustion paths.
pub mod testing {
    use parking_lot::Mutex;

    use super::{BufferAllocator, SystemAllocator};
    use crate::error::CodecError;

    /// Allocator that refuses every request.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct FailingAllocator;

    impl BufferAllocator for FailingAllocator {
        fn allocate(&self, capacity: usize) -> Result<Vec<u8>, CodecError> {
            Err(CodecError::Allocation { needed: capacity })
        }

        fn reallocate(&self, _buffer: &mut Vec<u8>, capacity: usize) -> Result<(), CodecError> {
            Err(CodecError::Allocation { needed: capacity })
        }
    }

    /// Allocator that grants a fixed number of requests, then fails.
    ///
    /// Useful for failing the growth path of a buffer whose initial
    /// allocation must succeed.
    #[derive(Debug)]
    pub struct BudgetAllocator {
        grants: Mutex<usize>,
    }

    impl BudgetAllocator {
        /// Create an allocator that will satisfy `grants` requests.
        #[must_use]
        pub fn new(grants: usize) -> Self {
            Self {
                grants: Mutex::new(grants),
            }
        }

        fn spend(&self) -> bool {
            let mut grants = self.grants.lock();
            if *grants == 0 {
                return false;
            }
            *grants -= 1;
            true
        }
    }

    impl BufferAllocator for BudgetAllocator {
        fn allocate(&self, capacity: usize) -> Result<Vec<u8>, CodecError> {
            if !self.spend() {
                return Err(CodecError::Allocation { needed: capacity });
            }
            SystemAllocator.allocate(capacity)
        }

        fn reallocate(&self, buffer: &mut Vec<u8>, capacity: usize) -> Result<(), CodecError> {
            if !self.spend() {
                return Err(CodecError::Allocation { needed: capacity });
            }
            SystemAllocator.reallocate(buffer, capacity)
        }
    }
}
