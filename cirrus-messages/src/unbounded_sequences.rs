//! Unbounded sequences of every element kind, including nested messages.

use cirrus_cdr::{CdrMessage, CdrReader, CdrWriter};
use cirrus_core::CodecError;

use crate::basic_types::BasicTypes;
use crate::defaults::Defaults;
use crate::limits::Limits;

/// Thirty-one unbounded sequences — scalars, strings, and nested
/// messages — followed by a fixed trailing field.
///
/// With every sequence empty this encodes to exactly 132 bytes: the
/// 4-byte representation header, 31 zero counts, and the trailing
/// `alignment_check`. That layout makes each length prefix's offset
/// predictable, which the corruption tests rely on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnboundedSequences {
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
    pub string_values: Vec<String>,
    pub basic_types_values: Vec<BasicTypes>,
    pub defaults_values: Vec<Defaults>,
    pub limits_values: Vec<Limits>,
    pub bool_values_default: Vec<bool>,
    pub byte_values_default: Vec<u8>,
    pub char_values_default: Vec<u8>,
    pub float32_values_default: Vec<f32>,
    pub float64_values_default: Vec<f64>,
    pub int8_values_default: Vec<i8>,
    pub uint8_values_default: Vec<u8>,
    pub int16_values_default: Vec<i16>,
    pub uint16_values_default: Vec<u16>,
    pub int32_values_default: Vec<i32>,
    pub uint32_values_default: Vec<u32>,
    pub int64_values_default: Vec<i64>,
    pub uint64_values_default: Vec<u64>,
    pub string_values_default: Vec<String>,
    pub alignment_check: i32,
}

impl CdrMessage for UnboundedSequences {
    const TYPE_NAME: &'static str = "cirrus_msgs/UnboundedSequences";
    const MIN_WIRE_SIZE: usize = 128;

    fn encode(&self, writer: &mut CdrWriter<'_>) -> Result<(), CodecError> {
        writer.write_sequence(&self.bool_values, None)?;
        writer.write_sequence(&self.byte_values, None)?;
        writer.write_sequence(&self.char_values, None)?;
        writer.write_sequence(&self.float32_values, None)?;
        writer.write_sequence(&self.float64_values, None)?;
        writer.write_sequence(&self.int8_values, None)?;
        writer.write_sequence(&self.uint8_values, None)?;
        writer.write_sequence(&self.int16_values, None)?;
        writer.write_sequence(&self.uint16_values, None)?;
        writer.write_sequence(&self.int32_values, None)?;
        writer.write_sequence(&self.uint32_values, None)?;
        writer.write_sequence(&self.int64_values, None)?;
        writer.write_sequence(&self.uint64_values, None)?;
        writer.write_string_sequence(&self.string_values, None)?;
        writer.write_message_sequence(&self.basic_types_values, None)?;
        writer.write_message_sequence(&self.defaults_values, None)?;
        writer.write_message_sequence(&self.limits_values, None)?;
        writer.write_sequence(&self.bool_values_default, None)?;
        writer.write_sequence(&self.byte_values_default, None)?;
        writer.write_sequence(&self.char_values_default, None)?;
        writer.write_sequence(&self.float32_values_default, None)?;
        writer.write_sequence(&self.float64_values_default, None)?;
        writer.write_sequence(&self.int8_values_default, None)?;
        writer.write_sequence(&self.uint8_values_default, None)?;
        writer.write_sequence(&self.int16_values_default, None)?;
        writer.write_sequence(&self.uint16_values_default, None)?;
        writer.write_sequence(&self.int32_values_default, None)?;
        writer.write_sequence(&self.uint32_values_default, None)?;
        writer.write_sequence(&self.int64_values_default, None)?;
        writer.write_sequence(&self.uint64_values_default, None)?;
        writer.write_string_sequence(&self.string_values_default, None)?;
        writer.write(self.alignment_check)
    }

    fn decode(&mut self, reader: &mut CdrReader<'_>) -> Result<(), CodecError> {
        reader.read_sequence(&mut self.bool_values, None)?;
        reader.read_sequence(&mut self.byte_values, None)?;
        reader.read_sequence(&mut self.char_values, None)?;
        reader.read_sequence(&mut self.float32_values, None)?;
        reader.read_sequence(&mut self.float64_values, None)?;
        reader.read_sequence(&mut self.int8_values, None)?;
        reader.read_sequence(&mut self.uint8_values, None)?;
        reader.read_sequence(&mut self.int16_values, None)?;
        reader.read_sequence(&mut self.uint16_values, None)?;
        reader.read_sequence(&mut self.int32_values, None)?;
        reader.read_sequence(&mut self.uint32_values, None)?;
        reader.read_sequence(&mut self.int64_values, None)?;
        reader.read_sequence(&mut self.uint64_values, None)?;
        reader.read_string_sequence(&mut self.string_values, None)?;
        reader.read_message_sequence(&mut self.basic_types_values, None)?;
        reader.read_message_sequence(&mut self.defaults_values, None)?;
        reader.read_message_sequence(&mut self.limits_values, None)?;
        reader.read_sequence(&mut self.bool_values_default, None)?;
        reader.read_sequence(&mut self.byte_values_default, None)?;
        reader.read_sequence(&mut self.char_values_default, None)?;
        reader.read_sequence(&mut self.float32_values_default, None)?;
        reader.read_sequence(&mut self.float64_values_default, None)?;
        reader.read_sequence(&mut self.int8_values_default, None)?;
        reader.read_sequence(&mut self.uint8_values_default, None)?;
        reader.read_sequence(&mut self.int16_values_default, None)?;
        reader.read_sequence(&mut self.uint16_values_default, None)?;
        reader.read_sequence(&mut self.int32_values_default, None)?;
        reader.read_sequence(&mut self.uint32_values_default, None)?;
        reader.read_sequence(&mut self.int64_values_default, None)?;
        reader.read_sequence(&mut self.uint64_values_default, None)?;
        reader.read_string_sequence(&mut self.string_values_default, None)?;
        self.alignment_check = reader.read()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cirrus_cdr::{ByteCounter, ByteOrder, CdrWriter};

    use super::*;

    #[test]
    fn test_all_empty_body_is_128_bytes() {
        let mut counter = ByteCounter::new();
        let mut writer = CdrWriter::new(&mut counter, ByteOrder::LittleEndian);
        UnboundedSequences::default().encode(&mut writer).unwrap();
        // 31 sequence counts plus the trailing alignment_check.
        assert_eq!(counter.written(), 128);
        assert_eq!(counter.written(), UnboundedSequences::MIN_WIRE_SIZE);
    }
}
