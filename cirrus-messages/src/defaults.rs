//! A message whose fields carry non-zero schema defaults.

use cirrus_cdr::{CdrMessage, CdrReader, CdrWriter};
use cirrus_core::CodecError;

/// Scalar fields whose default values are deliberately not the Rust
/// zero values, so default-vs-decoded comparisons catch stale fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Defaults {
    pub bool_value: bool,
    pub byte_value: u8,
    pub char_value: u8,
    pub float32_value: f32,
    pub float64_value: f64,
    pub int8_value: i8,
    pub uint8_value: u8,
    pub int16_value: i16,
    pub uint16_value: u16,
    pub int32_value: i32,
    pub uint32_value: u32,
    pub int64_value: i64,
    pub uint64_value: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            bool_value: true,
            byte_value: 50,
            char_value: 100,
            float32_value: 1.125,
            float64_value: 1.125,
            int8_value: -50,
            uint8_value: 200,
            int16_value: -1000,
            uint16_value: 2000,
            int32_value: -30_000,
            uint32_value: 60_000,
            int64_value: -40_000_000,
            uint64_value: 50_000_000,
        }
    }
}

impl CdrMessage for Defaults {
    const TYPE_NAME: &'static str = "cirrus_msgs/Defaults";
    const MIN_WIRE_SIZE: usize = 45;

    fn encode(&self, writer: &mut CdrWriter<'_>) -> Result<(), CodecError> {
        writer.write(self.bool_value)?;
        writer.write(self.byte_value)?;
        writer.write(self.char_value)?;
        writer.write(self.float32_value)?;
        writer.write(self.float64_value)?;
        writer.write(self.int8_value)?;
        writer.write(self.uint8_value)?;
        writer.write(self.int16_value)?;
        writer.write(self.uint16_value)?;
        writer.write(self.int32_value)?;
        writer.write(self.uint32_value)?;
        writer.write(self.int64_value)?;
        writer.write(self.uint64_value)
    }

    fn decode(&mut self, reader: &mut CdrReader<'_>) -> Result<(), CodecError> {
        self.bool_value = reader.read()?;
        self.byte_value = reader.read()?;
        self.char_value = reader.read()?;
        self.float32_value = reader.read()?;
        self.float64_value = reader.read()?;
        self.int8_value = reader.read()?;
        self.uint8_value = reader.read()?;
        self.int16_value = reader.read()?;
        self.uint16_value = reader.read()?;
        self.int32_value = reader.read()?;
        self.uint32_value = reader.read()?;
        self.int64_value = reader.read()?;
        self.uint64_value = reader.read()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_not_zero() {
        let defaults = Defaults::default();
        assert!(defaults.bool_value);
        assert_eq!(defaults.int16_value, -1000);
        assert_eq!(defaults.uint64_value, 50_000_000);
    }
}
