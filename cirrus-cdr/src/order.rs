//! Byte order and the CDR representation header.

use cirrus_core::CodecError;

/// Length of the representation header that leads every encoding.
pub const HEADER_LEN: usize = 4;

/// Byte order of a CDR payload.
///
/// Encoders pick one; decoders recover it from the representation
/// header, so a little-endian host can consume a big-endian encoding
/// and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Least significant byte first. The encode default.
    LittleEndian,
    /// Most significant byte first.
    BigEndian,
}

impl ByteOrder {
    /// The representation header announcing this byte order.
    #[must_use]
    pub fn header(self) -> [u8; HEADER_LEN] {
        match self {
            Self::LittleEndian => [0x01, 0x00, 0x00, 0x00],
            Self::BigEndian => [0x00, 0x00, 0x00, 0x00],
        }
    }

    /// Recover the byte order from a representation header.
    pub fn from_header(header: [u8; HEADER_LEN]) -> Result<Self, CodecError> {
        match header {
            [0x01, 0x00, 0x00, 0x00] => Ok(Self::LittleEndian),
            [0x00, 0x00, 0x00, 0x00] => Ok(Self::BigEndian),
            _ => Err(CodecError::InvalidData(format!(
                "unrecognized representation header {header:02x?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_roundtrip() {
        for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
            assert_eq!(ByteOrder::from_header(order.header()).unwrap(), order);
        }
    }

    #[test]
    fn test_unknown_header_rejected() {
        let err = ByteOrder::from_header([0x02, 0x00, 0x00, 0x00]).unwrap_err();
        assert!(matches!(err, CodecError::InvalidData(_)));
    }
}
