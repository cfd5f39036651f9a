//! Metadata Detector
//!
//! Gate for the whole adapter: classes that were not produced by the
//! metadata-embedding compiler are left entirely to the host framework's
//! default behavior.

use remold_model::marker;
use remold_model::ClassDescriptor;

/// Whether `class` was produced by a compiler that embeds extended metadata.
///
/// True iff the class declares at least one constructor and carries the
/// well-known extended-metadata marker. There is no failure path; a class
/// without constructors or without the marker is simply not ours to handle.
pub fn is_extended_metadata_class(class: &ClassDescriptor) -> bool {
    !class.constructors.is_empty() && class.markers.has(marker::EXTENDED_METADATA)
}

#[cfg(test)]
mod tests {
    use super::*;
    use remold_model::{ClassBuilder, ConstructorDescriptor};

    #[test]
    fn test_marker_and_constructor_required() {
        let both = ClassBuilder::new("Point")
            .marker(marker::EXTENDED_METADATA)
            .constructor(ConstructorDescriptor::with_params(2))
            .build();
        assert!(is_extended_metadata_class(&both));

        let no_marker = ClassBuilder::new("Legacy")
            .constructor(ConstructorDescriptor::with_params(1))
            .build();
        assert!(!is_extended_metadata_class(&no_marker));

        let no_constructor = ClassBuilder::new("Facade")
            .marker(marker::EXTENDED_METADATA)
            .build();
        assert!(!is_extended_metadata_class(&no_constructor));
    }

    #[test]
    fn test_unrelated_markers_ignored() {
        let class = ClassBuilder::new("Tagged")
            .marker("other.Tag")
            .constructor(ConstructorDescriptor::new())
            .build();
        assert!(!is_extended_metadata_class(&class));
    }
}
