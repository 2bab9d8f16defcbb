//! Codec registry: tag-to-codec dispatch.

use std::collections::HashMap;
use std::sync::Arc;

use cirrus_core::{CodecError, MessageCodec};

/// Builder for a [`CodecRegistry`].
///
/// Codecs are supplied once, by whatever discovers them at startup; the
/// built registry is immutable, so concurrent resolution needs no
/// locking.
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
/// use cirrus::{CdrCodec, CodecRegistryBuilder};
///
/// let registry = CodecRegistryBuilder::new()
///     .register(Arc::new(CdrCodec::new()))
///     .build()
///     .unwrap();
/// assert_eq!(registry.default_codec().format_name(), "cdr");
/// ```
#[derive(Default)]
#[must_use]
pub struct CodecRegistryBuilder {
    codecs: Vec<Arc<dyn MessageCodec>>,
    default_tag: Option<String>,
}

impl CodecRegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a codec. Its tag becomes a registry key.
    pub fn register(mut self, codec: Arc<dyn MessageCodec>) -> Self {
        self.codecs.push(codec);
        self
    }

    /// Mark the codec registered under `tag` as the default for format
    /// queries. Without this, the first registered codec is the default.
    pub fn default_tag(mut self, tag: impl Into<String>) -> Self {
        self.default_tag = Some(tag.into());
        self
    }

    /// Freeze the registry.
    ///
    /// Fails with [`CodecError::InvalidArgument`] when no codec was
    /// registered, two codecs share a tag, or the default tag names no
    /// registered codec.
    pub fn build(self) -> Result<CodecRegistry, CodecError> {
        let Some(first) = self.codecs.first().cloned() else {
            return Err(CodecError::InvalidArgument(
                "a registry needs at least one codec".into(),
            ));
        };

        let mut codecs: HashMap<String, Arc<dyn MessageCodec>> = HashMap::new();
        for codec in self.codecs {
            let tag = codec.tag().to_string();
            tracing::info!(tag = tag.as_str(), format = codec.format_name(), "registering codec");
            if codecs.insert(tag.clone(), codec).is_some() {
                return Err(CodecError::InvalidArgument(format!(
                    "duplicate codec tag: {tag}"
                )));
            }
        }

        let default_codec = match self.default_tag {
            Some(tag) => codecs
                .get(&tag)
                .cloned()
                .ok_or_else(|| {
                    CodecError::InvalidArgument(format!("default tag {tag} is not registered"))
                })?,
            None => first,
        };

        Ok(CodecRegistry {
            codecs,
            default_codec,
        })
    }
}

/// Immutable tag-to-codec table.
///
/// Populated once at startup and read-only afterwards; resolution from
/// any number of threads is a pure read.
pub struct CodecRegistry {
    codecs: HashMap<String, Arc<dyn MessageCodec>>,
    default_codec: Arc<dyn MessageCodec>,
}

impl CodecRegistry {
    /// Registry holding exactly one codec, which is also the default.
    #[must_use]
    pub fn single(codec: Arc<dyn MessageCodec>) -> Self {
        tracing::info!(
            tag = codec.tag(),
            format = codec.format_name(),
            "registering codec"
        );
        let mut codecs: HashMap<String, Arc<dyn MessageCodec>> = HashMap::new();
        codecs.insert(codec.tag().to_string(), Arc::clone(&codec));
        Self {
            codecs,
            default_codec: codec,
        }
    }

    /// Look up the codec registered under `tag`.
    ///
    /// An unknown tag fails with [`CodecError::UnsupportedType`]; no
    /// codec is consulted and no caller state is touched.
    pub fn resolve(&self, tag: &str) -> Result<&Arc<dyn MessageCodec>, CodecError> {
        self.codecs.get(tag).ok_or_else(|| {
            tracing::debug!(tag, "no codec registered for tag");
            CodecError::UnsupportedType {
                tag: tag.to_string(),
            }
        })
    }

    /// The codec answering format queries.
    #[must_use]
    pub fn default_codec(&self) -> &Arc<dyn MessageCodec> {
        &self.default_codec
    }

    /// Number of registered codecs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    /// Check if the registry is empty. It never is once built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;

    use cirrus_core::{SerializedBuffer, TypeDescriptor};

    use super::*;

    struct StubCodec {
        tag: &'static str,
        format: &'static str,
    }

    impl MessageCodec for StubCodec {
        fn tag(&self) -> &str {
            self.tag
        }

        fn format_name(&self) -> &str {
            self.format
        }

        fn serialized_size(
            &self,
            _message: &dyn Any,
            _descriptor: &TypeDescriptor,
        ) -> Result<Option<usize>, CodecError> {
            Ok(None)
        }

        fn encode(
            &self,
            _message: &dyn Any,
            _descriptor: &TypeDescriptor,
            _out: &mut SerializedBuffer,
        ) -> Result<(), CodecError> {
            Err(CodecError::InvalidArgument("stub codec".into()))
        }

        fn decode(
            &self,
            _input: &SerializedBuffer,
            _descriptor: &TypeDescriptor,
            _out: &mut dyn Any,
        ) -> Result<(), CodecError> {
            Err(CodecError::InvalidArgument("stub codec".into()))
        }
    }

    #[test]
    fn test_resolve_exact_match_only() {
        let registry = CodecRegistry::single(Arc::new(StubCodec {
            tag: "stub/a",
            format: "a",
        }));

        assert!(registry.resolve("stub/a").is_ok());
        let err = match registry.resolve("stub/A") {
            Ok(_) => panic!("expected resolve to fail"),
            Err(e) => e,
        };
        assert_eq!(
            err,
            CodecError::UnsupportedType {
                tag: "stub/A".to_string()
            }
        );
    }

    #[test]
    fn test_first_registered_is_default() {
        let registry = CodecRegistryBuilder::new()
            .register(Arc::new(StubCodec {
                tag: "stub/a",
                format: "a",
            }))
            .register(Arc::new(StubCodec {
                tag: "stub/b",
                format: "b",
            }))
            .build()
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.default_codec().format_name(), "a");
    }

    #[test]
    fn test_default_tag_override() {
        let registry = CodecRegistryBuilder::new()
            .register(Arc::new(StubCodec {
                tag: "stub/a",
                format: "a",
            }))
            .register(Arc::new(StubCodec {
                tag: "stub/b",
                format: "b",
            }))
            .default_tag("stub/b")
            .build()
            .unwrap();

        assert_eq!(registry.default_codec().format_name(), "b");
    }

    #[test]
    fn test_duplicate_tag_rejected() {
        let result = CodecRegistryBuilder::new()
            .register(Arc::new(StubCodec {
                tag: "stub/a",
                format: "a",
            }))
            .register(Arc::new(StubCodec {
                tag: "stub/a",
                format: "other",
            }))
            .build();

        assert!(matches!(result, Err(CodecError::InvalidArgument(_))));
    }

    #[test]
    fn test_empty_registry_rejected() {
        assert!(matches!(
            CodecRegistryBuilder::new().build(),
            Err(CodecError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_unknown_default_tag_rejected() {
        let result = CodecRegistryBuilder::new()
            .register(Arc::new(StubCodec {
                tag: "stub/a",
                format: "a",
            }))
            .default_tag("stub/missing")
            .build();

        assert!(matches!(result, Err(CodecError::InvalidArgument(_))));
    }
}
