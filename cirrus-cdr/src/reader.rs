//! Bounds-checked CDR decoding cursor.
//!
//! Every read follows the same discipline: align, check the remaining
//! bytes, then read. Sequence decodes additionally validate the declared
//! element count against the remaining bytes before allocating or
//! writing anything into the destination — the length prefix is
//! untrusted input.

use cirrus_core::CodecError;

use crate::message::CdrMessage;
use crate::order::ByteOrder;
use crate::scalar::CdrScalar;

/// Smallest wire footprint of a string: its length prefix plus the NUL.
const MIN_STRING_WIRE_SIZE: usize = 5;

/// Decoding cursor over a payload slice.
///
/// The slice starts after the representation header; alignment is
/// relative to its first byte, mirroring [`CdrWriter`](crate::CdrWriter).
pub struct CdrReader<'a> {
    payload: &'a [u8],
    order: ByteOrder,
    position: usize,
}

impl<'a> CdrReader<'a> {
    /// Create a cursor at payload position zero.
    #[must_use]
    pub fn new(payload: &'a [u8], order: ByteOrder) -> Self {
        Self {
            payload,
            order,
            position: 0,
        }
    }

    /// Bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.payload.len() - self.position
    }

    /// Bytes consumed since the payload origin, padding included.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    fn align(&mut self, alignment: usize) -> Result<(), CodecError> {
        let pad = (alignment - self.position % alignment) % alignment;
        if pad > self.remaining() {
            return Err(CodecError::BufferUnderrun {
                needed: pad,
                remaining: self.remaining(),
            });
        }
        self.position += pad;
        Ok(())
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], CodecError> {
        if len > self.remaining() {
            return Err(CodecError::BufferUnderrun {
                needed: len,
                remaining: self.remaining(),
            });
        }
        let bytes = &self.payload[self.position..self.position + len];
        self.position += len;
        Ok(bytes)
    }

    /// Decode one scalar, aligned to its width.
    pub fn read<T: CdrScalar>(&mut self) -> Result<T, CodecError> {
        self.align(T::WIRE_SIZE)?;
        let bytes = self.take(T::WIRE_SIZE)?;
        Ok(T::read_bytes(bytes, self.order))
    }

    /// Decode a scalar sequence into `out`, replacing its contents.
    ///
    /// The declared element count is validated against the remaining
    /// bytes before `out` is touched or any storage reserved.
    pub fn read_sequence<T: CdrScalar>(
        &mut self,
        out: &mut Vec<T>,
        bound: Option<usize>,
    ) -> Result<(), CodecError> {
        let count = self.read_sequence_len(T::WIRE_SIZE, bound)?;
        out.clear();
        out.reserve(count);
        for _ in 0..count {
            out.push(self.read::<T>()?);
        }
        Ok(())
    }

    /// Decode a string.
    pub fn read_string(&mut self) -> Result<String, CodecError> {
        let declared = u64::from(self.read::<u32>()?);
        if declared == 0 {
            return Err(CodecError::InvalidData(
                "string length of zero leaves no room for the terminator".into(),
            ));
        }
        if declared > self.remaining() as u64 {
            return Err(CodecError::MalformedLength {
                declared,
                remaining: self.remaining(),
            });
        }
        let bytes = self.take(declared as usize)?;
        let (body, terminator) = bytes.split_at(bytes.len() - 1);
        if terminator[0] != 0 {
            return Err(CodecError::InvalidData("string is missing its NUL terminator".into()));
        }
        String::from_utf8(body.to_vec())
            .map_err(|_| CodecError::InvalidData("string is not valid UTF-8".into()))
    }

    /// Decode a sequence of strings into `out`, replacing its contents.
    pub fn read_string_sequence(
        &mut self,
        out: &mut Vec<String>,
        bound: Option<usize>,
    ) -> Result<(), CodecError> {
        let count = self.read_sequence_len(MIN_STRING_WIRE_SIZE, bound)?;
        out.clear();
        out.reserve(count);
        for _ in 0..count {
            out.push(self.read_string()?);
        }
        Ok(())
    }

    /// Decode a nested message in place.
    pub fn read_message<M: CdrMessage>(&mut self, out: &mut M) -> Result<(), CodecError> {
        out.decode(self)
    }

    /// Decode a sequence of nested messages into `out`, replacing its
    /// contents. Validation uses the element type's minimum wire size.
    pub fn read_message_sequence<M: CdrMessage>(
        &mut self,
        out: &mut Vec<M>,
        bound: Option<usize>,
    ) -> Result<(), CodecError> {
        let count = self.read_sequence_len(M::MIN_WIRE_SIZE, bound)?;
        out.clear();
        out.reserve(count);
        for _ in 0..count {
            let mut element = M::default();
            element.decode(self)?;
            out.push(element);
        }
        Ok(())
    }

    /// Read and validate a sequence length prefix.
    ///
    /// `min_element_size` is the smallest possible wire footprint of one
    /// element (clamped to at least one byte so a huge count can never
    /// pass validation against a zero-size element).
    fn read_sequence_len(
        &mut self,
        min_element_size: usize,
        bound: Option<usize>,
    ) -> Result<usize, CodecError> {
        let declared = u64::from(self.read::<u32>()?);
        let min_element_size = min_element_size.max(1) as u64;
        if declared * min_element_size > self.remaining() as u64 {
            return Err(CodecError::MalformedLength {
                declared,
                remaining: self.remaining(),
            });
        }
        if let Some(bound) = bound {
            if declared > bound as u64 {
                return Err(CodecError::InvalidData(format!(
                    "sequence of {declared} elements exceeds its bound of {bound}"
                )));
            }
        }
        Ok(declared as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_skips_alignment_padding() {
        let payload = [0xAB, 0, 0, 0, 0x2A, 0, 0, 0];
        let mut reader = CdrReader::new(&payload, ByteOrder::LittleEndian);
        assert_eq!(reader.read::<u8>().unwrap(), 0xAB);
        assert_eq!(reader.read::<u32>().unwrap(), 0x2A);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_scalar_underrun() {
        let payload = [0x01, 0x02];
        let mut reader = CdrReader::new(&payload, ByteOrder::LittleEndian);
        let err = reader.read::<u32>().unwrap_err();
        assert_eq!(
            err,
            CodecError::BufferUnderrun {
                needed: 4,
                remaining: 2
            }
        );
    }

    #[test]
    fn test_sequence_length_validated_before_allocation() {
        // Prefix claims u32::MAX elements; only two bytes follow.
        let payload = [0xFF, 0xFF, 0xFF, 0xFF, 0x01, 0x02];
        let mut reader = CdrReader::new(&payload, ByteOrder::LittleEndian);
        let mut out = vec![0xEE_u8];

        let err = reader.read_sequence::<u8>(&mut out, None).unwrap_err();
        assert_eq!(
            err,
            CodecError::MalformedLength {
                declared: u64::from(u32::MAX),
                remaining: 2
            }
        );
        // Destination untouched by the rejected prefix.
        assert_eq!(out, [0xEE]);
    }

    #[test]
    fn test_sequence_roundtrip() {
        let payload = [2, 0, 0, 0, 0, 0, 0, 0, 7, 0, 0, 0, 0, 0, 0, 0, 9, 0, 0, 0, 0, 0, 0, 0];
        let mut reader = CdrReader::new(&payload, ByteOrder::LittleEndian);
        let mut out = Vec::new();
        reader.read_sequence::<u64>(&mut out, None).unwrap();
        assert_eq!(out, [7, 9]);
    }

    #[test]
    fn test_decoded_bound_violation() {
        let payload = [4, 0, 0, 0, 1, 2, 3, 4];
        let mut reader = CdrReader::new(&payload, ByteOrder::LittleEndian);
        let mut out: Vec<u8> = Vec::new();
        let err = reader.read_sequence(&mut out, Some(3)).unwrap_err();
        assert!(matches!(err, CodecError::InvalidData(_)));
    }

    #[test]
    fn test_string_requires_terminator() {
        let payload = [3, 0, 0, 0, b'h', b'i', b'!'];
        let mut reader = CdrReader::new(&payload, ByteOrder::LittleEndian);
        let err = reader.read_string().unwrap_err();
        assert!(matches!(err, CodecError::InvalidData(_)));
    }

    #[test]
    fn test_string_roundtrip() {
        let payload = [3, 0, 0, 0, b'h', b'i', 0];
        let mut reader = CdrReader::new(&payload, ByteOrder::LittleEndian);
        assert_eq!(reader.read_string().unwrap(), "hi");
    }

    #[test]
    fn test_big_endian_payload() {
        let payload = [0, 0, 0, 2, 0, 5, 0, 6];
        let mut reader = CdrReader::new(&payload, ByteOrder::BigEndian);
        let mut out = Vec::new();
        reader.read_sequence::<u16>(&mut out, None).unwrap();
        assert_eq!(out, [5, 6]);
    }
}
