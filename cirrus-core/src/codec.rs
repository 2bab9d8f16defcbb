//! The codec seam: one implementation per wire-format family.

use std::any::Any;

use crate::buffer::SerializedBuffer;
use crate::descriptor::TypeDescriptor;
use crate::error::CodecError;

/// Encoder/decoder for one wire-format family.
///
/// Implementations are registered by tag and resolved at runtime from a
/// message's [`TypeDescriptor`]. Messages cross this seam type-erased;
/// the codec recovers the per-type routines through the descriptor's
/// support handle and must fail with
/// [`CodecError::UnsupportedType`] — before mutating any caller state —
/// when the handle does not belong to it.
pub trait MessageCodec: Send + Sync {
    /// Registry key. Every descriptor this codec accepts carries it.
    fn tag(&self) -> &str;

    /// Stable, non-empty name of the wire-format family (e.g. `"cdr"`).
    fn format_name(&self) -> &str;

    /// Exact byte count `encode` would produce for `message`, computed
    /// without touching any buffer.
    ///
    /// Returns `Ok(None)` when the family cannot compute sizes ahead of
    /// time; that is not an error.
    fn serialized_size(
        &self,
        message: &dyn Any,
        descriptor: &TypeDescriptor,
    ) -> Result<Option<usize>, CodecError>;

    /// Encode `message` into `out`, replacing any previous content.
    ///
    /// On success `out.len()` is exactly the number of bytes written.
    fn encode(
        &self,
        message: &dyn Any,
        descriptor: &TypeDescriptor,
        out: &mut SerializedBuffer,
    ) -> Result<(), CodecError>;

    /// Decode `input` into `out`.
    ///
    /// On failure `out` is left in a safe state: untouched if the
    /// descriptor was rejected, fully reset if the payload was.
    fn decode(
        &self,
        input: &SerializedBuffer,
        descriptor: &TypeDescriptor,
        out: &mut dyn Any,
    ) -> Result<(), CodecError>;
}
