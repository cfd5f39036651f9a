//! Class Descriptor Builder
//!
//! Fluent construction of [`ClassDescriptor`] values. Hosts use it to adapt
//! their own reflective facts into the remold model; tests use it to shape
//! fixture classes without hand-assembling the structs.

use crate::descriptor::{
    ClassDescriptor, CompanionDescriptor, ConstructorDescriptor, FieldDescriptor,
    MethodDescriptor,
};
use crate::marker;
use crate::meta::MetaClass;

/// Builder for a [`ClassDescriptor`].
#[derive(Debug, Clone)]
pub struct ClassBuilder {
    class: ClassDescriptor,
}

impl ClassBuilder {
    /// Start building a class with the given fully-qualified name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            class: ClassDescriptor::new(name),
        }
    }

    /// Attach a payload-less marker to the class
    pub fn marker(mut self, name: &str) -> Self {
        self.class.markers.add(name);
        self
    }

    /// Attach the extended-metadata marker carrying `meta` as its encoded
    /// payload, the way the compiler embeds it
    pub fn metadata(mut self, meta: &MetaClass) -> Self {
        // Encoding these plain derives cannot fail
        if let Ok(payload) = serde_json::to_string(meta) {
            self.class
                .markers
                .add_with_payload(marker::EXTENDED_METADATA, payload);
        }
        self
    }

    /// Declare a constructor
    pub fn constructor(mut self, ctor: ConstructorDescriptor) -> Self {
        self.class.constructors.push(ctor);
        self
    }

    /// Declare a method
    pub fn method(mut self, method: MethodDescriptor) -> Self {
        self.class.methods.push(method);
        self
    }

    /// Declare a field
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.class.fields.push(field);
        self
    }

    /// Declare a function on the class's companion holder, creating the
    /// holder on first use
    pub fn companion_function(mut self, function: MethodDescriptor) -> Self {
        self.class
            .companion
            .get_or_insert_with(|| CompanionDescriptor::new("Companion"))
            .functions
            .push(function);
        self
    }

    /// Finish building
    pub fn build(self) -> ClassDescriptor {
        self.class
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::{MetaFunction, MetaParam};
    use crate::source::{EmbeddedMetadataSource, MetadataSource};

    #[test]
    fn test_builds_members_in_order() {
        let class = ClassBuilder::new("Shape")
            .constructor(ConstructorDescriptor::with_params(1))
            .constructor(ConstructorDescriptor::new())
            .method(MethodDescriptor::new("area"))
            .field(FieldDescriptor::new("sides"))
            .build();

        assert_eq!(class.name, "Shape");
        assert_eq!(class.constructors.len(), 2);
        assert_eq!(class.constructors[0].param_count(), 1);
        assert_eq!(class.methods[0].name, "area");
        assert_eq!(class.fields[0].name, "sides");
        assert!(class.companion.is_none());
    }

    #[test]
    fn test_companion_created_on_first_function() {
        let class = ClassBuilder::new("Money")
            .companion_function(MethodDescriptor::new("of").as_static())
            .companion_function(MethodDescriptor::new("zero").as_static())
            .build();

        let companion = class.companion.unwrap();
        assert_eq!(companion.name, "Companion");
        assert_eq!(companion.functions.len(), 2);
    }

    #[test]
    fn test_metadata_payload_decodes_back() {
        let meta = MetaClass {
            primary_constructor: None,
            constructors: vec![MetaFunction::constructor(vec![MetaParam::value("a")])],
            functions: vec![],
        };

        let class = ClassBuilder::new("Holder")
            .constructor(ConstructorDescriptor::with_params(1))
            .metadata(&meta)
            .build();

        assert!(class.markers.has(marker::EXTENDED_METADATA));
        let decoded = EmbeddedMetadataSource::new()
            .class_metadata(&class)
            .unwrap()
            .unwrap();
        assert_eq!(decoded, meta);
    }
}
