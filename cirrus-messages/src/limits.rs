//! A message pinned to the numeric extremes.

use cirrus_cdr::{CdrMessage, CdrReader, CdrWriter};
use cirrus_core::CodecError;

/// Integer extremes as runtime fields, for exercising the widest wire
/// representations of every width.
#[derive(Debug, Clone, PartialEq)]
pub struct Limits {
    pub int8_min: i8,
    pub int8_max: i8,
    pub uint8_max: u8,
    pub int16_min: i16,
    pub int16_max: i16,
    pub uint16_max: u16,
    pub int32_min: i32,
    pub int32_max: i32,
    pub uint32_max: u32,
    pub int64_min: i64,
    pub int64_max: i64,
    pub uint64_max: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            int8_min: i8::MIN,
            int8_max: i8::MAX,
            uint8_max: u8::MAX,
            int16_min: i16::MIN,
            int16_max: i16::MAX,
            uint16_max: u16::MAX,
            int32_min: i32::MIN,
            int32_max: i32::MAX,
            uint32_max: u32::MAX,
            int64_min: i64::MIN,
            int64_max: i64::MAX,
            uint64_max: u64::MAX,
        }
    }
}

impl CdrMessage for Limits {
    const TYPE_NAME: &'static str = "cirrus_msgs/Limits";
    const MIN_WIRE_SIZE: usize = 45;

    fn encode(&self, writer: &mut CdrWriter<'_>) -> Result<(), CodecError> {
        writer.write(self.int8_min)?;
        writer.write(self.int8_max)?;
        writer.write(self.uint8_max)?;
        writer.write(self.int16_min)?;
        writer.write(self.int16_max)?;
        writer.write(self.uint16_max)?;
        writer.write(self.int32_min)?;
        writer.write(self.int32_max)?;
        writer.write(self.uint32_max)?;
        writer.write(self.int64_min)?;
        writer.write(self.int64_max)?;
        writer.write(self.uint64_max)
    }

    fn decode(&mut self, reader: &mut CdrReader<'_>) -> Result<(), CodecError> {
        self.int8_min = reader.read()?;
        self.int8_max = reader.read()?;
        self.uint8_max = reader.read()?;
        self.int16_min = reader.read()?;
        self.int16_max = reader.read()?;
        self.uint16_max = reader.read()?;
        self.int32_min = reader.read()?;
        self.int32_max = reader.read()?;
        self.uint32_max = reader.read()?;
        self.int64_min = reader.read()?;
        self.int64_max = reader.read()?;
        self.uint64_max = reader.read()?;
        Ok(())
    }
}
