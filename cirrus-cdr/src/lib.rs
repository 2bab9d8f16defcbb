//! # cirrus-cdr
//!
//! CDR wire-format codec for the cirrus serialization boundary.
//!
//! This crate provides:
//! - `CdrCodec` - The CDR implementation of [`cirrus_core::MessageCodec`]
//! - `CdrWriter` / `CdrReader` - Alignment-aware encoding/decoding cursors
//! - `CdrMessage` - The per-type routine trait a message generator targets
//! - `CdrSupport` / `descriptor_for` - Descriptor construction for the family
//!
//! ## Wire Format
//!
//! ```text
//! +--------------------+----------------------------------+
//! | Header (4 bytes)   | Fields in declaration order      |
//! +--------------------+----------------------------------+
//! ```
//!
//! The header announces the byte order (`[0x01, 0, 0, 0]` little-endian,
//! `[0x00, 0, 0, 0]` big-endian). Scalars align to their own width
//! relative to the first byte after the header; every sequence is an
//! aligned 4-byte element count followed by packed elements, recursively
//! for sequences of nested messages. Decoders validate each length
//! prefix against the remaining bytes before allocating anything.

mod codec;
mod message;
mod order;
mod reader;
mod scalar;
mod writer;

pub use codec::{CdrCodec, CDR_FORMAT};
pub use message::{descriptor_for, CdrMessage, CdrSupport, CDR_TAG};
pub use order::{ByteOrder, HEADER_LEN};
pub use reader::CdrReader;
pub use scalar::CdrScalar;
pub use writer::{ByteCounter, CdrSink, CdrWriter};
