//! Per-type hooks: what a message generator emits for the CDR family.

use std::any::Any;
use std::sync::Arc;

use cirrus_core::{CodecError, TypeDescriptor};

use crate::reader::CdrReader;
use crate::writer::CdrWriter;

/// Tag carried by every descriptor of the CDR codec family.
pub const CDR_TAG: &str = "cirrus/cdr";

/// A message type with CDR encode/decode routines.
///
/// Implementations are normally generated from a schema; this repo's
/// `cirrus-messages` crate hand-maintains them. The routines walk the
/// fields in declaration order through the cursor, so the field order is
/// the wire order.
pub trait CdrMessage: Default + Send + 'static {
    /// Fully-qualified message name, e.g. `"cirrus_msgs/BasicTypes"`.
    const TYPE_NAME: &'static str;

    /// Smallest legal encoded size of the message body in bytes, with
    /// every sequence empty and no alignment padding counted. Used to
    /// validate sequence length prefixes before allocating.
    const MIN_WIRE_SIZE: usize;

    /// Encode all fields in declaration order.
    fn encode(&self, writer: &mut CdrWriter<'_>) -> Result<(), CodecError>;

    /// Decode all fields in declaration order, overwriting `self`.
    fn decode(&mut self, reader: &mut CdrReader<'_>) -> Result<(), CodecError>;
}

fn not_a<M: CdrMessage>() -> CodecError {
    CodecError::InvalidArgument(format!("message is not a {}", M::TYPE_NAME))
}

/// Monomorphized per-type routines behind a descriptor's support handle.
///
/// The codec recovers this table by downcasting
/// [`TypeDescriptor::support`]; a descriptor whose handle is not a
/// `CdrSupport` does not belong to the CDR family, no matter what its
/// tag claims.
pub struct CdrSupport {
    pub(crate) type_name: &'static str,
    pub(crate) encode: fn(&dyn Any, &mut CdrWriter<'_>) -> Result<(), CodecError>,
    pub(crate) decode: fn(&mut CdrReader<'_>, &mut dyn Any) -> Result<(), CodecError>,
    pub(crate) reset: fn(&mut dyn Any),
}

impl CdrSupport {
    /// Build the routine table for one message type.
    #[must_use]
    pub fn of<M: CdrMessage>() -> Self {
        Self {
            type_name: M::TYPE_NAME,
            encode: |message, writer| {
                let message = message.downcast_ref::<M>().ok_or_else(not_a::<M>)?;
                message.encode(writer)
            },
            decode: |reader, message| {
                let message = message.downcast_mut::<M>().ok_or_else(not_a::<M>)?;
                message.decode(reader)
            },
            reset: |message| {
                if let Some(message) = message.downcast_mut::<M>() {
                    *message = M::default();
                }
            },
        }
    }
}

/// Build the CDR-family descriptor for one message type.
#[must_use]
pub fn descriptor_for<M: CdrMessage>() -> TypeDescriptor {
    TypeDescriptor::new(CDR_TAG, M::TYPE_NAME, Arc::new(CdrSupport::of::<M>()))
}
