//! Declarative Markers
//!
//! Markers are annotation-like tags attached to classes and members by the
//! source compiler or by the author. Each marker is identified by a fixed
//! fully-qualified name and may carry an opaque string payload (the
//! extended-metadata marker carries the serialized [`MetaClass`] there).
//!
//! [`MetaClass`]: crate::meta::MetaClass

use rustc_hash::FxHashMap;

/// Fully-qualified identity of the extended-metadata marker. The compiler
/// stamps this on every class it emits; its payload is the JSON-encoded
/// structural description of the class.
pub const EXTENDED_METADATA: &str = "meta.Metadata";

/// Fully-qualified identity of the explicit creator marker. An author places
/// this on a constructor or factory function to name it as the
/// deserialization entry point.
pub const CREATOR: &str = "bind.Creator";

/// Fully-qualified identity of the explicit property-name marker. Consumed
/// by the host framework before it falls back to implicit name resolution.
pub const PROPERTY_NAME: &str = "bind.Property";

/// A set of declarative markers attached to one class or member.
///
/// Marker identities are unique within a set; adding an identity twice
/// replaces the earlier payload.
#[derive(Debug, Clone, Default)]
pub struct MarkerSet {
    markers: FxHashMap<String, Option<String>>,
}

impl MarkerSet {
    /// Create an empty marker set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a marker without a payload
    pub fn add(&mut self, name: impl Into<String>) {
        self.markers.insert(name.into(), None);
    }

    /// Add a marker carrying an opaque string payload
    pub fn add_with_payload(&mut self, name: impl Into<String>, payload: impl Into<String>) {
        self.markers.insert(name.into(), Some(payload.into()));
    }

    /// Check whether a marker with the given fully-qualified name is present
    pub fn has(&self, name: &str) -> bool {
        self.markers.contains_key(name)
    }

    /// Get the payload of a marker, if the marker is present and carries one
    pub fn payload(&self, name: &str) -> Option<&str> {
        self.markers.get(name)?.as_deref()
    }

    /// Iterate over the marker names in this set
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.markers.keys().map(String::as_str)
    }

    /// Get number of markers in the set
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
