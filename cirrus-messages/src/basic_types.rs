//! A message of one field per scalar kind.

use cirrus_cdr::{CdrMessage, CdrReader, CdrWriter};
use cirrus_core::CodecError;

/// Every fixed-width scalar the wire format knows, one field each.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BasicTypes {
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

impl CdrMessage for BasicTypes {
    const TYPE_NAME: &'static str = "cirrus_msgs/BasicTypes";
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
    use cirrus_cdr::{ByteCounter, ByteOrder, CdrWriter};

    use super::*;

    #[test]
    fn test_encoded_size_with_alignment() {
        let mut counter = ByteCounter::new();
        let mut writer = CdrWriter::new(&mut counter, ByteOrder::LittleEndian);
        BasicTypes::default().encode(&mut writer).unwrap();
        // Packed fields are 45 bytes; alignment padding brings it to 48.
        assert_eq!(counter.written(), 48);
        assert!(counter.written() >= BasicTypes::MIN_WIRE_SIZE);
    }
}
