//! # cirrus-messages
//!
//! Hand-maintained message definitions for exercising the cirrus
//! serialization boundary.
//!
//! In a deployed system these impls come out of a message generator;
//! code generation is out of scope here, so this crate maintains by hand
//! exactly what a generator would emit: plain structs plus
//! [`CdrMessage`](cirrus_cdr::CdrMessage) routines walking the fields in
//! declaration order.
//!
//! The shapes cover the interesting wire cases:
//! - [`BasicTypes`], [`Defaults`], [`Limits`] - fixed scalar fields
//! - [`BoundedPlainSequences`] - schema-bounded sequences
//! - [`UnboundedSequences`] - unbounded sequences of scalars, strings,
//!   and nested messages

mod basic_types;
mod bounded_plain_sequences;
mod defaults;
mod limits;
mod unbounded_sequences;

pub use basic_types::BasicTypes;
pub use bounded_plain_sequences::BoundedPlainSequences;
pub use defaults::Defaults;
pub use limits::Limits;
pub use unbounded_sequences::UnboundedSequences;
