//! Type descriptors: the opaque handle tying a message type to its codec
//! family.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Runtime identity of a message type.
///
/// The serialization core inspects only the `tag`, which names the codec
/// family that must process the message. Everything else — field layout,
/// per-type encode/decode routines — hides behind the `support` handle,
/// which only the matching codec knows how to interpret. Descriptors are
/// immutable once constructed and cheap to clone; callers typically hold
/// one per message type for the life of the process.
#[derive(Clone)]
pub struct TypeDescriptor {
    tag: Cow<'static, str>,
    type_name: &'static str,
    support: Arc<dyn Any + Send + Sync>,
}

impl TypeDescriptor {
    /// Create a descriptor from a codec-family tag, a message type name,
    /// and the family's opaque per-type support handle.
    pub fn new(
        tag: impl Into<Cow<'static, str>>,
        type_name: &'static str,
        support: Arc<dyn Any + Send + Sync>,
    ) -> Self {
        Self {
            tag: tag.into(),
            type_name,
            support,
        }
    }

    /// The codec-family tag used for dispatch.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The message type this descriptor identifies.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The per-type metadata, interpretable only by the matching codec.
    #[must_use]
    pub fn support(&self) -> &(dyn Any + Send + Sync) {
        self.support.as_ref()
    }

    /// Copy of this descriptor carrying a different tag.
    ///
    /// The support handle is shared unchanged, which makes this the
    /// canonical way to model a corrupted or mismatched descriptor in
    /// tests: dispatch must reject it without interpreting the handle.
    #[must_use]
    pub fn with_tag(&self, tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tag: tag.into(),
            type_name: self.type_name,
            support: Arc::clone(&self.support),
        }
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("tag", &self.tag)
            .field("type_name", &self.type_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_tag_shares_support() {
        let descriptor = TypeDescriptor::new("family/a", "pkg/Message", Arc::new(42_u32));
        let tampered = descriptor.with_tag("not-a-codec");

        assert_eq!(tampered.tag(), "not-a-codec");
        assert_eq!(tampered.type_name(), "pkg/Message");
        assert_eq!(tampered.support().downcast_ref::<u32>(), Some(&42));
    }
}
