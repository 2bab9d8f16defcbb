//! Error types for the cirrus serialization boundary.

/// Errors produced while serializing or deserializing messages.
///
/// Every failing operation returns one of these; nothing in the core
/// panics on a malformed input or an exhausted allocator. The variants
/// distinguish caller mistakes (`UnsupportedType`, `InvalidArgument`)
/// from untrusted-input rejection (`MalformedLength`, `BufferUnderrun`,
/// `InvalidData`) so callers can decide whether a retry makes sense.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Descriptor tag unknown to the registry, or the descriptor's type
    /// support does not belong to the codec that the tag resolved to.
    #[error("unsupported type support: {tag}")]
    UnsupportedType {
        /// The tag carried by the offending descriptor.
        tag: String,
    },

    /// The allocator could not satisfy an init or growth request.
    #[error("allocation of {needed} bytes failed")]
    Allocation {
        /// Total capacity in bytes that was requested.
        needed: usize,
    },

    /// A sequence length prefix promises more data than the buffer holds.
    #[error("sequence length {declared} exceeds remaining buffer space ({remaining} bytes)")]
    MalformedLength {
        /// Element count declared by the wire prefix.
        declared: u64,
        /// Bytes left in the buffer after the prefix.
        remaining: usize,
    },

    /// A fixed-size read would run past the end of the buffer.
    #[error("read of {needed} bytes overruns buffer ({remaining} bytes remaining)")]
    BufferUnderrun {
        /// Bytes the read required.
        needed: usize,
        /// Bytes actually remaining.
        remaining: usize,
    },

    /// A caller-supplied argument is unusable: an empty input buffer, a
    /// bounded sequence past its schema bound, registry misuse.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Payload bytes are well-delimited but not representable: an
    /// unknown representation header, a string without its terminator,
    /// text that is not valid UTF-8.
    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl CodecError {
    /// Check if this error rejects untrusted wire input, as opposed to
    /// flagging a caller mistake or resource exhaustion.
    #[must_use]
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::MalformedLength { .. } | Self::BufferUnderrun { .. } | Self::InvalidData(_)
        )
    }

    /// Check if this error may clear with a different allocator.
    #[must_use]
    pub fn is_resource_exhaustion(&self) -> bool {
        matches!(self, Self::Allocation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CodecError::MalformedLength {
            declared: u64::from(u32::MAX),
            remaining: 128,
        };
        assert_eq!(
            err.to_string(),
            "sequence length 4294967295 exceeds remaining buffer space (128 bytes)"
        );
    }

    #[test]
    fn test_malformed_input_predicate() {
        assert!(CodecError::BufferUnderrun {
            needed: 8,
            remaining: 3
        }
        .is_malformed_input());
        assert!(CodecError::InvalidData("no terminator".into()).is_malformed_input());
        assert!(!CodecError::Allocation { needed: 64 }.is_malformed_input());
        assert!(CodecError::Allocation { needed: 64 }.is_resource_exhaustion());
    }
}
