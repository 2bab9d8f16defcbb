//! The serialization facade.

use std::any::Any;
use std::sync::Arc;

use cirrus_cdr::CdrCodec;
use cirrus_core::{CodecError, SerializedBuffer, TypeDescriptor};

use crate::registry::CodecRegistry;

/// The four public operations, composed over a [`CodecRegistry`].
///
/// Every operation resolves the descriptor's tag first; a failed
/// resolution returns [`CodecError::UnsupportedType`] and leaves all
/// caller-supplied state byte-for-byte unchanged.
///
/// ## Example
///
/// ```rust
/// use cirrus::{descriptor_for, SerializedBuffer, Serializer};
/// use cirrus_messages::BasicTypes;
///
/// let serializer = Serializer::cdr();
/// let descriptor = descriptor_for::<BasicTypes>();
///
/// let mut message = BasicTypes::default();
/// message.uint32_value = 1_000_000;
///
/// let mut buffer = SerializedBuffer::new();
/// serializer.serialize(&message, &descriptor, &mut buffer).unwrap();
///
/// let mut decoded = BasicTypes::default();
/// serializer.deserialize(&buffer, &descriptor, &mut decoded).unwrap();
/// assert_eq!(decoded, message);
/// ```
pub struct Serializer {
    registry: Arc<CodecRegistry>,
}

impl Serializer {
    /// Create a serializer over an externally assembled registry.
    #[must_use]
    pub fn new(registry: Arc<CodecRegistry>) -> Self {
        Self { registry }
    }

    /// Serializer wired with the CDR codec as its only, default codec.
    #[must_use]
    pub fn cdr() -> Self {
        Self::new(Arc::new(CodecRegistry::single(Arc::new(CdrCodec::new()))))
    }

    /// The registry this serializer dispatches through.
    #[must_use]
    pub fn registry(&self) -> &CodecRegistry {
        &self.registry
    }

    /// Stable, non-empty name of the active wire-format family.
    ///
    /// Two calls return identical strings.
    #[must_use]
    pub fn serialization_format(&self) -> &str {
        self.registry.default_codec().format_name()
    }

    /// Encode `message` into `out`, replacing any previous encoding.
    ///
    /// On success `out.len()` is exactly the encoded size; stale bytes
    /// from an earlier, longer encoding are never counted as valid.
    pub fn serialize(
        &self,
        message: &dyn Any,
        descriptor: &TypeDescriptor,
        out: &mut SerializedBuffer,
    ) -> Result<(), CodecError> {
        let codec = self.registry.resolve(descriptor.tag())?;
        codec.encode(message, descriptor, out)
    }

    /// Decode `input` into `out`.
    ///
    /// A descriptor rejected at dispatch leaves `out` untouched; a
    /// payload rejected by the codec leaves `out` reset to its default,
    /// with an error distinguishing malformed input from a type
    /// mismatch.
    pub fn deserialize(
        &self,
        input: &SerializedBuffer,
        descriptor: &TypeDescriptor,
        out: &mut dyn Any,
    ) -> Result<(), CodecError> {
        let codec = self.registry.resolve(descriptor.tag())?;
        codec.decode(input, descriptor, out)
    }

    /// Exact byte count [`serialize`](Self::serialize) would produce,
    /// without mutating anything.
    ///
    /// `Ok(None)` means the resolved codec family cannot compute sizes
    /// ahead of time — a capability gap, not an error.
    pub fn serialized_message_size(
        &self,
        message: &dyn Any,
        descriptor: &TypeDescriptor,
    ) -> Result<Option<usize>, CodecError> {
        let codec = self.registry.resolve(descriptor.tag())?;
        codec.serialized_size(message, descriptor)
    }
}

#[cfg(test)]
mod tests {
    use cirrus_cdr::descriptor_for;
    use cirrus_messages::BasicTypes;

    use super::*;

    #[test]
    fn test_format_name_is_stable() {
        let serializer = Serializer::cdr();
        let first = serializer.serialization_format().to_string();
        assert!(!first.is_empty());
        assert_eq!(serializer.serialization_format(), first);
    }

    #[test]
    fn test_unknown_tag_touches_nothing() {
        let serializer = Serializer::cdr();
        let tampered = descriptor_for::<BasicTypes>().with_tag("not-a-typesupport-identifier");
        let message = BasicTypes::default();

        let mut buffer = SerializedBuffer::new();
        let err = serializer
            .serialize(&message, &tampered, &mut buffer)
            .unwrap_err();
        assert_eq!(
            err,
            CodecError::UnsupportedType {
                tag: "not-a-typesupport-identifier".to_string()
            }
        );
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), 0);
    }

    #[test]
    fn test_size_query_matches_encoding() {
        let serializer = Serializer::cdr();
        let descriptor = descriptor_for::<BasicTypes>();
        let message = BasicTypes::default();

        let size = serializer
            .serialized_message_size(&message, &descriptor)
            .unwrap()
            .expect("cdr computes sizes");

        let mut buffer = SerializedBuffer::new();
        serializer
            .serialize(&message, &descriptor, &mut buffer)
            .unwrap();
        assert_eq!(size, buffer.len());
    }
}
