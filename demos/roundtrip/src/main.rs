//! Round-trip demo for cirrus.
//!
//! This demo walks the full serialization boundary:
//! - Building a serializer over the CDR codec
//! - Serializing a message with populated sequence fields
//! - Deserializing it back and checking equality
//! - Corrupting a sequence length prefix and watching the decoder
//!   reject it without touching the destination
//!
//! Run with `RUST_LOG=trace` to see the codec's internal tracing.

use cirrus::{descriptor_for, CodecError, SerializedBuffer, Serializer};
use cirrus_messages::{BasicTypes, UnboundedSequences};

fn main() -> Result<(), CodecError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let serializer = Serializer::cdr();
    tracing::info!(format = serializer.serialization_format(), "serializer ready");

    // Populate a message with a bit of everything.
    let mut message = UnboundedSequences::default();
    message.int32_values = vec![-1, 0, 1];
    message.string_values = vec!["cirrus".into(), "round trip".into()];
    message.basic_types_values = vec![BasicTypes {
        bool_value: true,
        uint32_value: 1_000_000,
        ..BasicTypes::default()
    }];
    message.alignment_check = 42;

    let descriptor = descriptor_for::<UnboundedSequences>();

    // Serialize: the size query predicts the exact encoding length.
    let predicted = serializer
        .serialized_message_size(&message, &descriptor)?
        .expect("cdr computes sizes");
    let mut buffer = SerializedBuffer::new();
    serializer.serialize(&message, &descriptor, &mut buffer)?;
    tracing::info!(predicted, actual = buffer.len(), "serialized");
    assert_eq!(predicted, buffer.len());

    // Deserialize into a fresh message.
    let mut decoded = UnboundedSequences::default();
    serializer.deserialize(&buffer, &descriptor, &mut decoded)?;
    assert_eq!(decoded, message);
    tracing::info!("round trip matches field for field");

    // Corrupt the first sequence length prefix: the decoder must
    // reject it before allocating anything.
    buffer.as_mut_slice()[4..8].copy_from_slice(&[0xFF; 4]);
    match serializer.deserialize(&buffer, &descriptor, &mut decoded) {
        Err(error) => {
            tracing::warn!(%error, "corrupted input rejected, as it should be");
            assert_eq!(decoded, UnboundedSequences::default());
        }
        Ok(()) => unreachable!("a 0xFFFFFFFF length prefix cannot decode"),
    }

    buffer.release();
    Ok(())
}
