//! Reflective Descriptors
//!
//! Plain read-only descriptions of a declared class and its members, as the
//! host runtime's ordinary reflection exposes them. The introspection core
//! consumes these through the borrowed view types ([`ConstructorView`],
//! [`MethodView`], [`ParameterView`]), which pair a member with its declaring
//! class and position.

use crate::marker::MarkerSet;

/// A declared class, immutable for the lifetime of an introspection pass.
#[derive(Debug, Clone)]
pub struct ClassDescriptor {
    /// Fully-qualified class name
    pub name: String,
    /// Declared constructors, in declaration order
    pub constructors: Vec<ConstructorDescriptor>,
    /// Declared instance and static methods
    pub methods: Vec<MethodDescriptor>,
    /// Declared fields
    pub fields: Vec<FieldDescriptor>,
    /// Companion (static holder) construct, if the class declares one
    pub companion: Option<CompanionDescriptor>,
    /// Markers attached to the class itself
    pub markers: MarkerSet,
}

impl ClassDescriptor {
    /// Create a class with no members and no markers
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constructors: Vec::new(),
            methods: Vec::new(),
            fields: Vec::new(),
            companion: None,
            markers: MarkerSet::new(),
        }
    }

    /// View of the constructor at `index`, if one is declared there
    pub fn constructor_view(&self, index: usize) -> Option<ConstructorView<'_>> {
        self.constructors.get(index).map(|descriptor| ConstructorView {
            class: self,
            descriptor,
            index,
        })
    }

    /// Iterate over views of all declared constructors
    pub fn constructor_views(&self) -> impl Iterator<Item = ConstructorView<'_>> {
        self.constructors
            .iter()
            .enumerate()
            .map(|(index, descriptor)| ConstructorView {
                class: self,
                descriptor,
                index,
            })
    }

    /// View of the declared method at `index`
    pub fn method_view(&self, index: usize) -> Option<MethodView<'_>> {
        self.methods.get(index).map(|descriptor| MethodView {
            class: self,
            descriptor,
            companion: false,
        })
    }

    /// View of the companion function at `index`, if a companion is declared
    pub fn companion_function_view(&self, index: usize) -> Option<MethodView<'_>> {
        self.companion
            .as_ref()?
            .functions
            .get(index)
            .map(|descriptor| MethodView {
                class: self,
                descriptor,
                companion: true,
            })
    }
}

/// One declared constructor of a class.
#[derive(Debug, Clone, Default)]
pub struct ConstructorDescriptor {
    /// Ordered formal parameters
    pub params: Vec<ParameterDescriptor>,
    /// Markers attached to the constructor
    pub markers: MarkerSet,
}

impl ConstructorDescriptor {
    /// Create a parameterless constructor
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a constructor with `count` unmarked parameters
    pub fn with_params(count: usize) -> Self {
        Self {
            params: vec![ParameterDescriptor::default(); count],
            markers: MarkerSet::new(),
        }
    }

    /// Attach a marker, builder-style
    pub fn marked(mut self, name: &str) -> Self {
        self.markers.add(name);
        self
    }

    /// Number of formal parameters
    pub fn param_count(&self) -> usize {
        self.params.len()
    }
}

/// One declared method or factory function.
#[derive(Debug, Clone)]
pub struct MethodDescriptor {
    /// Method name
    pub name: String,
    /// Ordered formal parameters, as runtime reflection sees them
    pub params: Vec<ParameterDescriptor>,
    /// Markers attached to the method
    pub markers: MarkerSet,
    /// Whether the method is callable without an instance
    pub is_static: bool,
}

impl MethodDescriptor {
    /// Create an instance method with no parameters
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            markers: MarkerSet::new(),
            is_static: false,
        }
    }

    /// Set `count` unmarked parameters, builder-style
    pub fn with_params(mut self, count: usize) -> Self {
        self.params = vec![ParameterDescriptor::default(); count];
        self
    }

    /// Mark as callable without an instance
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Attach a marker, builder-style
    pub fn marked(mut self, name: &str) -> Self {
        self.markers.add(name);
        self
    }
}

/// One declared field.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Field name
    pub name: String,
    /// Markers attached to the field
    pub markers: MarkerSet,
    /// Whether the field is static
    pub is_static: bool,
}

impl FieldDescriptor {
    /// Create an instance field
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            markers: MarkerSet::new(),
            is_static: false,
        }
    }
}

/// The companion (static holder) construct of a class.
#[derive(Debug, Clone, Default)]
pub struct CompanionDescriptor {
    /// Holder name
    pub name: String,
    /// Functions declared on the holder
    pub functions: Vec<MethodDescriptor>,
}

impl CompanionDescriptor {
    /// Create an empty companion with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            functions: Vec::new(),
        }
    }
}

/// One formal parameter. Its position is its index within the owning member.
#[derive(Debug, Clone, Default)]
pub struct ParameterDescriptor {
    /// Markers attached to the parameter
    pub markers: MarkerSet,
}

/// A constructor paired with its declaring class and declaration index.
///
/// The index is the key under which extended metadata records the same
/// constructor.
#[derive(Debug, Clone, Copy)]
pub struct ConstructorView<'a> {
    /// Declaring class
    pub class: &'a ClassDescriptor,
    /// The constructor itself
    pub descriptor: &'a ConstructorDescriptor,
    /// Position within the class's declared constructors
    pub index: usize,
}

impl<'a> ConstructorView<'a> {
    /// View of the parameter at `index` within this constructor
    pub fn parameter(self, index: usize) -> Option<ParameterView<'a>> {
        if index < self.descriptor.params.len() {
            Some(ParameterView {
                class: self.class,
                owner: MemberView::Constructor(self),
                index,
            })
        } else {
            None
        }
    }
}

/// A method paired with its declaring class.
#[derive(Debug, Clone, Copy)]
pub struct MethodView<'a> {
    /// Declaring class
    pub class: &'a ClassDescriptor,
    /// The method itself
    pub descriptor: &'a MethodDescriptor,
    /// Whether the method is declared on the class's companion holder
    pub companion: bool,
}

impl<'a> MethodView<'a> {
    /// View of the parameter at `index` within this method
    pub fn parameter(self, index: usize) -> Option<ParameterView<'a>> {
        if index < self.descriptor.params.len() {
            Some(ParameterView {
                class: self.class,
                owner: MemberView::Method(self),
                index,
            })
        } else {
            None
        }
    }
}

/// The member owning a parameter: a constructor, a method, or (for
/// completeness of the host's member model) a field.
#[derive(Debug, Clone, Copy)]
pub enum MemberView<'a> {
    /// A declared constructor
    Constructor(ConstructorView<'a>),
    /// A declared method or companion function
    Method(MethodView<'a>),
    /// A declared field; fields own no parameters, so name resolution
    /// always declines for this kind
    Field(&'a FieldDescriptor),
}

/// One formal parameter paired with its owning member and declaring class.
#[derive(Debug, Clone, Copy)]
pub struct ParameterView<'a> {
    /// Declaring class
    pub class: &'a ClassDescriptor,
    /// Owning member
    pub owner: MemberView<'a>,
    /// Zero-based position within the owner's runtime parameter list
    pub index: usize,
}

impl<'a> ParameterView<'a> {
    /// The parameter descriptor this view points at, if the owner has a
    /// parameter at this position
    pub fn descriptor(self) -> Option<&'a ParameterDescriptor> {
        match self.owner {
            MemberView::Constructor(ctor) => ctor.descriptor.params.get(self.index),
            MemberView::Method(method) => method.descriptor.params.get(self.index),
            MemberView::Field(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker;

    #[test]
    fn test_constructor_view_indexing() {
        let mut class = ClassDescriptor::new("Point");
        class.constructors.push(ConstructorDescriptor::with_params(2));
        class.constructors.push(ConstructorDescriptor::new());

        let first = class.constructor_view(0).unwrap();
        assert_eq!(first.index, 0);
        assert_eq!(first.descriptor.param_count(), 2);

        let second = class.constructor_view(1).unwrap();
        assert_eq!(second.descriptor.param_count(), 0);

        assert!(class.constructor_view(2).is_none());
        assert_eq!(class.constructor_views().count(), 2);
    }

    #[test]
    fn test_parameter_view_bounds() {
        let mut class = ClassDescriptor::new("Point");
        class.constructors.push(ConstructorDescriptor::with_params(2));

        let ctor = class.constructor_view(0).unwrap();
        assert!(ctor.parameter(0).is_some());
        assert!(ctor.parameter(1).is_some());
        assert!(ctor.parameter(2).is_none());

        let param = ctor.parameter(1).unwrap();
        assert_eq!(param.index, 1);
        assert!(param.descriptor().is_some());
    }

    #[test]
    fn test_companion_function_view() {
        let mut class = ClassDescriptor::new("Money");
        let mut companion = CompanionDescriptor::new("Companion");
        companion
            .functions
            .push(MethodDescriptor::new("of").with_params(1).as_static());
        class.companion = Some(companion);

        let function = class.companion_function_view(0).unwrap();
        assert!(function.companion);
        assert!(function.descriptor.is_static);
        assert_eq!(function.descriptor.name, "of");

        assert!(class.companion_function_view(1).is_none());
        assert!(ClassDescriptor::new("Bare").companion_function_view(0).is_none());
    }

    #[test]
    fn test_marked_builder_helpers() {
        let ctor = ConstructorDescriptor::with_params(1).marked(marker::CREATOR);
        assert!(ctor.markers.has(marker::CREATOR));

        let method = MethodDescriptor::new("parse")
            .with_params(1)
            .as_static()
            .marked(marker::CREATOR);
        assert!(method.is_static);
        assert!(method.markers.has(marker::CREATOR));
    }
}
