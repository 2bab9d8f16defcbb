//! # Cirrus
//!
//! Typed-message serialization boundary with runtime codec dispatch.
//!
//! Cirrus provides:
//! - **Runtime codec dispatch** from the identifier tag on a message's
//!   [`TypeDescriptor`] — unknown or tampered tags are rejected before
//!   any caller state is touched
//! - **CDR encoding** of fixed scalars plus bounded and unbounded
//!   sequences, recursively for nested messages
//! - **Hostile-input rejection**: every length prefix is validated
//!   against the remaining bytes before anything is allocated
//! - **Allocator-backed buffers** with exact capacity/length bookkeeping
//!   and leak-free release on every exit path
//!
//! ## Quick Start
//!
//! ```rust
//! use cirrus::{descriptor_for, SerializedBuffer, Serializer};
//! use cirrus_messages::BasicTypes;
//!
//! let serializer = Serializer::cdr();
//! assert_eq!(serializer.serialization_format(), "cdr");
//!
//! let descriptor = descriptor_for::<BasicTypes>();
//! let mut message = BasicTypes::default();
//! message.bool_value = true;
//! message.int16_value = -7;
//!
//! let mut buffer = SerializedBuffer::new();
//! serializer.serialize(&message, &descriptor, &mut buffer).unwrap();
//! assert!(buffer.len() > 0);
//!
//! let mut decoded = BasicTypes::default();
//! serializer.deserialize(&buffer, &descriptor, &mut decoded).unwrap();
//! assert_eq!(decoded, message);
//! ```
//!
//! ## Architecture
//!
//! Cirrus is composed of several crates:
//!
//! - [`cirrus-core`](cirrus_core) - Buffer, allocator capability,
//!   descriptor, error type, and the codec seam
//! - [`cirrus-cdr`](cirrus_cdr) - The CDR codec family
//! - `cirrus-messages` - Hand-maintained message definitions standing in
//!   for generator output
//! - `cirrus` - Registry, serializer facade, and re-exports

// Re-export core types
pub use cirrus_core::{
    alloc, BufferAllocator, CodecError, MessageCodec, SerializedBuffer, SystemAllocator,
    TypeDescriptor,
};

// Re-export the CDR codec family
pub use cirrus_cdr::{
    descriptor_for, ByteCounter, ByteOrder, CdrCodec, CdrMessage, CdrReader, CdrSink, CdrSupport,
    CdrWriter, CDR_FORMAT, CDR_TAG, HEADER_LEN,
};

mod registry;
mod serializer;

pub use registry::{CodecRegistry, CodecRegistryBuilder};
pub use serializer::Serializer;

/// Prelude module for convenient imports.
///
/// ```rust
/// use cirrus::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        descriptor_for, CdrMessage, CodecError, CodecRegistry, CodecRegistryBuilder,
        SerializedBuffer, Serializer, TypeDescriptor,
    };
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
