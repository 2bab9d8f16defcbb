//! # cirrus-core
//!
//! Core types, traits, and error definitions for the cirrus
//! serialization boundary.
//!
//! This crate provides:
//! - Error type ([`CodecError`])
//! - Allocator capability ([`BufferAllocator`], plus failing allocators
//!   under [`alloc::testing`])
//! - Growable, allocator-backed byte buffer ([`SerializedBuffer`])
//! - Message type identity ([`TypeDescriptor`])
//! - The codec seam ([`MessageCodec`])

pub mod alloc;
mod buffer;
mod codec;
mod descriptor;
mod error;

pub use alloc::{BufferAllocator, SystemAllocator};
pub use buffer::SerializedBuffer;
pub use codec::MessageCodec;
pub use descriptor::TypeDescriptor;
pub use error::CodecError;
