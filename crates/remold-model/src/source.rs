//! Metadata Sources
//!
//! The oracle port through which extended metadata is obtained. A source is
//! deliberately fallible and advisory: `Ok(None)` means the class simply
//! carries no usable metadata, `Err` means the reflective bridge itself
//! failed while producing it. The introspection core treats both outcomes
//! the same way (decline) and never lets either escape to the host.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::descriptor::ClassDescriptor;
use crate::marker;
use crate::meta::MetaClass;

/// Errors a metadata source can report
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MetadataError {
    /// The embedded metadata payload could not be decoded
    #[error("malformed extended metadata: {reason}")]
    Malformed {
        /// Decoder diagnostic
        reason: String,
    },

    /// The reflective bridge failed while inspecting the class
    #[error("reflective access failure: {reason}")]
    Access {
        /// Bridge diagnostic
        reason: String,
    },
}

/// A facility that recovers the compiler-recorded description of a class.
///
/// Implementations must be pure per call: the same class yields the same
/// answer as long as its markers are unchanged. Queries are synchronous and
/// in-process; no implementation may block on I/O.
pub trait MetadataSource: Send + Sync {
    /// The recorded description of `class`, `Ok(None)` when the class
    /// carries none
    fn class_metadata(&self, class: &ClassDescriptor)
        -> Result<Option<MetaClass>, MetadataError>;
}

/// Source that decodes the metadata payload embedded on the class's own
/// extended-metadata marker.
///
/// The payload is decoded fresh on every call; the host owns any caching of
/// the binding plan it derives from the answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedMetadataSource;

impl EmbeddedMetadataSource {
    /// Create the source
    pub fn new() -> Self {
        Self
    }
}

impl MetadataSource for EmbeddedMetadataSource {
    fn class_metadata(
        &self,
        class: &ClassDescriptor,
    ) -> Result<Option<MetaClass>, MetadataError> {
        let Some(payload) = class.markers.payload(marker::EXTENDED_METADATA) else {
            return Ok(None);
        };
        serde_json::from_str(payload)
            .map(Some)
            .map_err(|e| MetadataError::Malformed {
                reason: e.to_string(),
            })
    }
}

/// Source backed by a class-name-keyed registry, for hosts that sideload
/// metadata and for tests that need a mockable oracle.
#[derive(Debug, Default)]
pub struct RegistryMetadataSource {
    /// Metadata indexed by fully-qualified class name
    classes: FxHashMap<String, MetaClass>,
}

impl RegistryMetadataSource {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register metadata for a class name
    pub fn register(&mut self, class_name: impl Into<String>, meta: MetaClass) {
        self.classes.insert(class_name.into(), meta);
    }

    /// Get registered metadata for a class name
    pub fn get(&self, class_name: &str) -> Option<&MetaClass> {
        self.classes.get(class_name)
    }

    /// Get number of registered classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl MetadataSource for RegistryMetadataSource {
    fn class_metadata(
        &self,
        class: &ClassDescriptor,
    ) -> Result<Option<MetaClass>, MetadataError> {
        Ok(self.classes.get(&class.name).cloned())
    }
}
