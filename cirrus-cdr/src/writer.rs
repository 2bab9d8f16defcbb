//! Alignment-aware CDR encoding cursor.

use cirrus_core::{CodecError, SerializedBuffer};

use crate::message::CdrMessage;
use crate::order::ByteOrder;
use crate::scalar::CdrScalar;

/// Write target for the encoding cursor.
///
/// The same per-type encode routine drives two sinks: a real buffer when
/// serializing, and a [`ByteCounter`] when only the encoded size is
/// wanted. Growth and its failure stay the sink's concern.
pub trait CdrSink {
    /// Append `bytes` to the sink.
    fn put(&mut self, bytes: &[u8]) -> Result<(), CodecError>;
}

impl CdrSink for SerializedBuffer {
    fn put(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        self.put_slice(bytes)
    }
}

/// Sink that measures the encoding instead of storing it.
#[derive(Debug, Default)]
pub struct ByteCounter {
    written: usize,
}

impl ByteCounter {
    /// Create a counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes the encoding would have produced.
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }
}

impl CdrSink for ByteCounter {
    fn put(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        self.written += bytes.len();
        Ok(())
    }
}

const PADDING: [u8; 8] = [0; 8];

/// Encoding cursor over a [`CdrSink`].
///
/// Tracks the position relative to the start of the payload (the
/// representation header is not part of it) and inserts the zero padding
/// CDR requires before every scalar whose width exceeds its offset
/// alignment.
pub struct CdrWriter<'a> {
    sink: &'a mut dyn CdrSink,
    order: ByteOrder,
    position: usize,
}

impl<'a> CdrWriter<'a> {
    /// Create a cursor at payload position zero.
    pub fn new(sink: &'a mut dyn CdrSink, order: ByteOrder) -> Self {
        Self {
            sink,
            order,
            position: 0,
        }
    }

    /// Bytes written since the payload origin, padding included.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    fn put(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        self.sink.put(bytes)?;
        self.position += bytes.len();
        Ok(())
    }

    fn align(&mut self, alignment: usize) -> Result<(), CodecError> {
        let pad = (alignment - self.position % alignment) % alignment;
        if pad > 0 {
            self.put(&PADDING[..pad])?;
        }
        Ok(())
    }

    /// Encode one scalar, aligned to its width.
    pub fn write<T: CdrScalar>(&mut self, value: T) -> Result<(), CodecError> {
        self.align(T::WIRE_SIZE)?;
        let mut raw = [0u8; 8];
        value.write_bytes(self.order, &mut raw[..T::WIRE_SIZE]);
        self.put(&raw[..T::WIRE_SIZE])
    }

    /// Encode a scalar sequence: aligned 4-byte element count, then the
    /// elements. `bound` is the schema maximum for bounded sequences;
    /// exceeding it is the caller's contract error.
    pub fn write_sequence<T: CdrScalar>(
        &mut self,
        items: &[T],
        bound: Option<usize>,
    ) -> Result<(), CodecError> {
        self.write_sequence_len(items.len(), bound)?;
        for &item in items {
            self.write(item)?;
        }
        Ok(())
    }

    /// Encode a string: 4-byte length counting the NUL terminator, the
    /// bytes, then the terminator.
    pub fn write_string(&mut self, value: &str) -> Result<(), CodecError> {
        let wire_len = value.len() + 1;
        let prefix = u32::try_from(wire_len).map_err(|_| {
            CodecError::InvalidArgument(format!("string of {} bytes exceeds wire limit", value.len()))
        })?;
        self.write::<u32>(prefix)?;
        self.put(value.as_bytes())?;
        self.put(&[0])
    }

    /// Encode a sequence of strings.
    pub fn write_string_sequence(
        &mut self,
        items: &[String],
        bound: Option<usize>,
    ) -> Result<(), CodecError> {
        self.write_sequence_len(items.len(), bound)?;
        for item in items {
            self.write_string(item)?;
        }
        Ok(())
    }

    /// Encode a nested message in place. Alignment continues from the
    /// current position; nested messages do not restart the origin.
    pub fn write_message<M: CdrMessage>(&mut self, message: &M) -> Result<(), CodecError> {
        message.encode(self)
    }

    /// Encode a sequence of nested messages.
    pub fn write_message_sequence<M: CdrMessage>(
        &mut self,
        items: &[M],
        bound: Option<usize>,
    ) -> Result<(), CodecError> {
        self.write_sequence_len(items.len(), bound)?;
        for item in items {
            item.encode(self)?;
        }
        Ok(())
    }

    fn write_sequence_len(&mut self, len: usize, bound: Option<usize>) -> Result<(), CodecError> {
        if let Some(bound) = bound {
            if len > bound {
                return Err(CodecError::InvalidArgument(format!(
                    "sequence of {len} elements exceeds its bound of {bound}"
                )));
            }
        }
        let prefix = u32::try_from(len).map_err(|_| {
            CodecError::InvalidArgument(format!("sequence of {len} elements exceeds wire limit"))
        })?;
        self.write::<u32>(prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_with<F>(f: F) -> Vec<u8>
    where
        F: FnOnce(&mut CdrWriter<'_>),
    {
        let mut buffer = SerializedBuffer::new();
        {
            let mut writer = CdrWriter::new(&mut buffer, ByteOrder::LittleEndian);
            f(&mut writer);
        }
        buffer.as_slice().to_vec()
    }

    #[test]
    fn test_scalars_align_to_their_width() {
        let bytes = encode_with(|w| {
            w.write::<u8>(0xAB).unwrap();
            w.write::<u32>(1).unwrap();
        });
        // 1 data byte, 3 padding bytes, then the aligned u32.
        assert_eq!(bytes, [0xAB, 0, 0, 0, 0x01, 0, 0, 0]);
    }

    #[test]
    fn test_sequence_prefix_counts_elements() {
        let bytes = encode_with(|w| {
            w.write_sequence::<u16>(&[7, 8, 9], None).unwrap();
        });
        assert_eq!(bytes, [3, 0, 0, 0, 7, 0, 8, 0, 9, 0]);
    }

    #[test]
    fn test_bounded_sequence_rejected_past_bound() {
        let mut buffer = SerializedBuffer::new();
        let mut writer = CdrWriter::new(&mut buffer, ByteOrder::LittleEndian);

        writer.write_sequence::<u8>(&[1, 2, 3], Some(3)).unwrap();
        let err = writer
            .write_sequence::<u8>(&[1, 2, 3, 4], Some(3))
            .unwrap_err();
        assert!(matches!(err, CodecError::InvalidArgument(_)));
    }

    #[test]
    fn test_string_length_counts_terminator() {
        let bytes = encode_with(|w| {
            w.write_string("hi").unwrap();
        });
        assert_eq!(bytes, [3, 0, 0, 0, b'h', b'i', 0]);
    }

    #[test]
    fn test_counter_matches_buffer() {
        let bytes = encode_with(|w| {
            w.write::<u8>(1).unwrap();
            w.write::<u64>(2).unwrap();
            w.write_sequence::<i32>(&[-1, -2], None).unwrap();
        });

        let mut counter = ByteCounter::new();
        let mut writer = CdrWriter::new(&mut counter, ByteOrder::LittleEndian);
        writer.write::<u8>(1).unwrap();
        writer.write::<u64>(2).unwrap();
        writer.write_sequence::<i32>(&[-1, -2], None).unwrap();

        assert_eq!(counter.written(), bytes.len());
    }
}
