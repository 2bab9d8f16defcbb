//! The CDR implementation of the codec seam.

use std::any::Any;

use cirrus_core::{CodecError, MessageCodec, SerializedBuffer, TypeDescriptor};

use crate::message::{CdrSupport, CDR_TAG};
use crate::order::{ByteOrder, HEADER_LEN};
use crate::reader::CdrReader;
use crate::writer::{ByteCounter, CdrWriter};

/// Stable name of the wire-format family.
pub const CDR_FORMAT: &str = "cdr";

/// CDR codec: a 4-byte representation header followed by the
/// alignment-aware, length-prefixed message body.
///
/// Encoding always runs in the configured byte order (little-endian by
/// default); decoding honors whichever order the header announces.
///
/// ## Example
///
/// ```rust
/// use cirrus_cdr::CdrCodec;
/// use cirrus_core::MessageCodec;
///
/// let codec = CdrCodec::new();
/// assert_eq!(codec.format_name(), "cdr");
/// ```
#[derive(Debug, Clone)]
pub struct CdrCodec {
    encode_order: ByteOrder,
}

impl CdrCodec {
    /// Create a codec that encodes little-endian.
    #[must_use]
    pub fn new() -> Self {
        Self {
            encode_order: ByteOrder::LittleEndian,
        }
    }

    /// Create a codec with an explicit encode byte order.
    #[must_use]
    pub fn with_byte_order(order: ByteOrder) -> Self {
        Self {
            encode_order: order,
        }
    }

    fn support<'a>(&self, descriptor: &'a TypeDescriptor) -> Result<&'a CdrSupport, CodecError> {
        descriptor
            .support()
            .downcast_ref::<CdrSupport>()
            .ok_or_else(|| CodecError::UnsupportedType {
                tag: descriptor.tag().to_string(),
            })
    }

    fn body_size(&self, support: &CdrSupport, message: &dyn Any) -> Result<usize, CodecError> {
        let mut counter = ByteCounter::new();
        let mut writer = CdrWriter::new(&mut counter, self.encode_order);
        (support.encode)(message, &mut writer)?;
        Ok(counter.written())
    }
}

impl Default for CdrCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageCodec for CdrCodec {
    fn tag(&self) -> &str {
        CDR_TAG
    }

    fn format_name(&self) -> &str {
        CDR_FORMAT
    }

    fn serialized_size(
        &self,
        message: &dyn Any,
        descriptor: &TypeDescriptor,
    ) -> Result<Option<usize>, CodecError> {
        let support = self.support(descriptor)?;
        Ok(Some(HEADER_LEN + self.body_size(support, message)?))
    }

    fn encode(
        &self,
        message: &dyn Any,
        descriptor: &TypeDescriptor,
        out: &mut SerializedBuffer,
    ) -> Result<(), CodecError> {
        let support = self.support(descriptor)?;
        // A measuring pass first: it surfaces contract errors (bounded
        // sequence overflow, mismatched message) and yields the exact
        // size, so growth happens once and before any mutation of `out`.
        let total = HEADER_LEN + self.body_size(support, message)?;
        out.ensure_capacity(total)?;

        out.clear();
        out.put_slice(&self.encode_order.header())?;
        let mut writer = CdrWriter::new(out, self.encode_order);
        (support.encode)(message, &mut writer)?;

        tracing::trace!(
            type_name = support.type_name,
            bytes = total,
            "encoded message"
        );
        Ok(())
    }

    fn decode(
        &self,
        input: &SerializedBuffer,
        descriptor: &TypeDescriptor,
        out: &mut dyn Any,
    ) -> Result<(), CodecError> {
        let support = self.support(descriptor)?;
        if input.is_empty() {
            return Err(CodecError::InvalidArgument(
                "cannot decode from an empty buffer".into(),
            ));
        }
        let bytes = input.as_slice();
        if bytes.len() < HEADER_LEN {
            return Err(CodecError::BufferUnderrun {
                needed: HEADER_LEN,
                remaining: bytes.len(),
            });
        }
        let order = ByteOrder::from_header([bytes[0], bytes[1], bytes[2], bytes[3]])?;

        let mut reader = CdrReader::new(&bytes[HEADER_LEN..], order);
        if let Err(error) = (support.decode)(&mut reader, out) {
            // Never hand back a half-populated message.
            (support.reset)(out);
            tracing::debug!(
                type_name = support.type_name,
                %error,
                "rejected serialized message"
            );
            return Err(error);
        }
        Ok(())
    }
}
