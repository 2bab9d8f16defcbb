//! Fixed-width scalar encoding.

use crate::order::ByteOrder;

/// A scalar with a fixed CDR wire representation.
///
/// `WIRE_SIZE` doubles as the CDR alignment requirement: every scalar
/// aligns to its own width relative to the start of the payload.
pub trait CdrScalar: Copy + Default + Send + 'static {
    /// Encoded width in bytes.
    const WIRE_SIZE: usize;

    /// Write the wire representation into `out` (`WIRE_SIZE` bytes).
    fn write_bytes(self, order: ByteOrder, out: &mut [u8]);

    /// Read the wire representation from `bytes` (`WIRE_SIZE` bytes).
    fn read_bytes(bytes: &[u8], order: ByteOrder) -> Self;
}

macro_rules! numeric_scalar {
    ($($ty:ty),* $(,)?) => {$(
        impl CdrScalar for $ty {
            const WIRE_SIZE: usize = std::mem::size_of::<$ty>();

            fn write_bytes(self, order: ByteOrder, out: &mut [u8]) {
                let raw = match order {
                    ByteOrder::LittleEndian => self.to_le_bytes(),
                    ByteOrder::BigEndian => self.to_be_bytes(),
                };
                out.copy_from_slice(&raw);
            }

            fn read_bytes(bytes: &[u8], order: ByteOrder) -> Self {
                let mut raw = [0u8; std::mem::size_of::<$ty>()];
                raw.copy_from_slice(bytes);
                match order {
                    ByteOrder::LittleEndian => <$ty>::from_le_bytes(raw),
                    ByteOrder::BigEndian => <$ty>::from_be_bytes(raw),
                }
            }
        }
    )*};
}

numeric_scalar!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

impl CdrScalar for bool {
    const WIRE_SIZE: usize = 1;

    fn write_bytes(self, _order: ByteOrder, out: &mut [u8]) {
        out[0] = u8::from(self);
    }

    fn read_bytes(bytes: &[u8], _order: ByteOrder) -> Self {
        bytes[0] != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endianness_mirrors() {
        let mut out = [0u8; 4];
        0x0102_0304_u32.write_bytes(ByteOrder::LittleEndian, &mut out);
        assert_eq!(out, [0x04, 0x03, 0x02, 0x01]);
        0x0102_0304_u32.write_bytes(ByteOrder::BigEndian, &mut out);
        assert_eq!(out, [0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_scalar_roundtrip() {
        for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
            let mut out = [0u8; 8];
            (-1.25_f64).write_bytes(order, &mut out);
            assert_eq!(f64::read_bytes(&out, order), -1.25);

            let mut out = [0u8; 2];
            (-7_i16).write_bytes(order, &mut out);
            assert_eq!(i16::read_bytes(&out, order), -7);
        }
    }

    #[test]
    fn test_bool_decodes_any_nonzero() {
        assert!(bool::read_bytes(&[0x01], ByteOrder::LittleEndian));
        assert!(bool::read_bytes(&[0xFF], ByteOrder::LittleEndian));
        assert!(!bool::read_bytes(&[0x00], ByteOrder::LittleEndian));
    }
}
