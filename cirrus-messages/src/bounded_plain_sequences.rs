//! Bounded scalar sequences.

use cirrus_cdr::{CdrMessage, CdrReader, CdrWriter};
use cirrus_core::CodecError;

/// One bounded sequence per scalar kind.
///
/// Each field may hold at most [`BoundedPlainSequences::BOUND`]
/// elements; encoding past the bound is a contract error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundedPlainSequences {
    pub bool_values: Vec<bool>,
    pub byte_values: Vec<u8>,
    pub char_values: Vec<u8>,
    pub float32_values: Vec<f32>,
    pub float64_values: Vec<f64>,
    pub int8_values: Vec<i8>,
    pub uint8_values: Vec<u8>,
    pub int16_values: Vec<i16>,
    pub uint16_values: Vec<u16>,
    pub int32_values: Vec<i32>,
    pub uint32_values: Vec<u32>,
    pub int64_values: Vec<i64>,
    pub uint64_values: Vec<u64>,
}

impl BoundedPlainSequences {
    /// Schema maximum for every sequence field.
    pub const BOUND: usize = 3;
}

impl CdrMessage for BoundedPlainSequences {
    const TYPE_NAME: &'static str = "cirrus_msgs/BoundedPlainSequences";
    const MIN_WIRE_SIZE: usize = 52;

    fn encode(&self, writer: &mut CdrWriter<'_>) -> Result<(), CodecError> {
        let bound = Some(Self::BOUND);
        writer.write_sequence(&self.bool_values, bound)?;
        writer.write_sequence(&self.byte_values, bound)?;
        writer.write_sequence(&self.char_values, bound)?;
        writer.write_sequence(&self.float32_values, bound)?;
        writer.write_sequence(&self.float64_values, bound)?;
        writer.write_sequence(&self.int8_values, bound)?;
        writer.write_sequence(&self.uint8_values, bound)?;
        writer.write_sequence(&self.int16_values, bound)?;
        writer.write_sequence(&self.uint16_values, bound)?;
        writer.write_sequence(&self.int32_values, bound)?;
        writer.write_sequence(&self.uint32_values, bound)?;
        writer.write_sequence(&self.int64_values, bound)?;
        writer.write_sequence(&self.uint64_values, bound)
    }

    fn decode(&mut self, reader: &mut CdrReader<'_>) -> Result<(), CodecError> {
        let bound = Some(Self::BOUND);
        reader.read_sequence(&mut self.bool_values, bound)?;
        reader.read_sequence(&mut self.byte_values, bound)?;
        reader.read_sequence(&mut self.char_values, bound)?;
        reader.read_sequence(&mut self.float32_values, bound)?;
        reader.read_sequence(&mut self.float64_values, bound)?;
        reader.read_sequence(&mut self.int8_values, bound)?;
        reader.read_sequence(&mut self.uint8_values, bound)?;
        reader.read_sequence(&mut self.int16_values, bound)?;
        reader.read_sequence(&mut self.uint16_values, bound)?;
        reader.read_sequence(&mut self.int32_values, bound)?;
        reader.read_sequence(&mut self.uint32_values, bound)?;
        reader.read_sequence(&mut self.int64_values, bound)?;
        reader.read_sequence(&mut self.uint64_values, bound)
    }
}

#[cfg(test)]
mod tests {
    use cirrus_cdr::{ByteCounter, ByteOrder, CdrWriter};

    use super::*;

    #[test]
    fn test_all_empty_encodes_to_prefixes_only() {
        let mut counter = ByteCounter::new();
        let mut writer = CdrWriter::new(&mut counter, ByteOrder::LittleEndian);
        BoundedPlainSequences::default().encode(&mut writer).unwrap();
        // 13 sequence fields, nothing but their 4-byte counts.
        assert_eq!(counter.written(), 52);
    }

    #[test]
    fn test_encode_rejects_past_bound() {
        let mut message = BoundedPlainSequences::default();
        message.int32_values = vec![0; BoundedPlainSequences::BOUND + 1];

        let mut counter = ByteCounter::new();
        let mut writer = CdrWriter::new(&mut counter, ByteOrder::LittleEndian);
        let err = message.encode(&mut writer).unwrap_err();
        assert!(matches!(err, CodecError::InvalidArgument(_)));
    }
}
