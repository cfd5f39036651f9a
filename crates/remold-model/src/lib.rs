//! Remold Reflective Model
//!
//! Read-only views over the reflective facts the remold introspection
//! adapter consumes:
//! - **Descriptors**: classes, constructors, methods, fields, and parameters
//!   as the host runtime's reflection exposes them (`descriptor` module)
//! - **Markers**: declarative annotation-like tags attached to classes and
//!   members (`marker` module)
//! - **Extended metadata**: the compiler-recorded structural description of
//!   a class's true constructor/parameter shape (`meta` module)
//! - **Sources**: the fallible oracle port through which extended metadata
//!   is obtained (`source` module)
//!
//! Every type here is a plain value constructed fresh per introspection
//! pass; nothing is cached or mutated by the adapter itself.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod builder;
pub mod descriptor;
pub mod marker;
pub mod meta;
pub mod source;

pub use builder::ClassBuilder;
pub use descriptor::{
    ClassDescriptor, CompanionDescriptor, ConstructorDescriptor, ConstructorView,
    FieldDescriptor, MemberView, MethodDescriptor, MethodView, ParameterDescriptor,
    ParameterView,
};
pub use marker::MarkerSet;
pub use meta::{MetaClass, MetaFunction, MetaParam, ParamKind};
pub use source::{
    EmbeddedMetadataSource, MetadataError, MetadataSource, RegistryMetadataSource,
};
