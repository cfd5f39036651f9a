//! Remold Introspection Core
//!
//! The decision procedure a data-binding framework consults to reconstruct
//! immutable, constructor-initialized objects from structured data when the
//! compiled class retains its true shape only in extended compiler metadata:
//! - **Detector**: does this class carry extended metadata at all?
//!   (`detect` module)
//! - **Creator Selector**: should this constructor be treated as the
//!   implicit deserialization entry point? (`creator` module)
//! - **Name Resolver**: what is the declared name of this constructor or
//!   function parameter? (`names` module)
//!
//! All three are pure functions over the reflective facts passed in plus a
//! read-only [`MetadataSource`] query; they hold no state, never fail, and
//! degrade every metadata problem to a conservative "decline" the host
//! resolves through its own fallbacks.
//!
//! Hosts wire the core in through [`RemoldModule`], which registers a
//! [`MetaNamesIntrospector`] and the built-in value-type mix-ins.
//!
//! [`MetadataSource`]: remold_model::MetadataSource

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod creator;
pub mod detect;
pub mod introspector;
pub mod module;
pub mod names;

pub use creator::{has_explicit_creator, is_implicit_creator};
pub use detect::is_extended_metadata_class;
pub use introspector::{AnnotationIntrospector, MetaNamesIntrospector};
pub use module::{RemoldModule, SetupContext};
pub use names::resolve_name;
