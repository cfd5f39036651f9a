//! Introspector Port
//!
//! The surface the host framework calls while building a binding plan. The
//! framework consults its explicit markers first and queries this port only
//! to fill the gaps: once per constructor for implicit-creator selection and
//! once per parameter lacking an explicit name marker.

use remold_model::{ConstructorView, MetadataSource, ParameterView};

use crate::creator;
use crate::names;

/// Introspection hooks a host framework folds into its annotation-processing
/// pipeline. Implementations must be pure and thread-safe; the host may call
/// them concurrently from several binding-plan builds.
pub trait AnnotationIntrospector: Send + Sync {
    /// Implicit name for a parameter that carries no explicit name marker
    fn find_implicit_parameter_name(&self, param: ParameterView<'_>) -> Option<String>;

    /// Whether a constructor should be treated as if explicitly marked as
    /// the creator
    fn is_implicit_creator(&self, ctor: ConstructorView<'_>) -> bool;
}

/// The remold introspector: extended-metadata-backed creator selection and
/// parameter-name resolution over a [`MetadataSource`] oracle.
#[derive(Debug, Clone, Default)]
pub struct MetaNamesIntrospector<S: MetadataSource> {
    source: S,
}

impl<S: MetadataSource> MetaNamesIntrospector<S> {
    /// Create an introspector over the given metadata source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The metadata source this introspector queries
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: MetadataSource> AnnotationIntrospector for MetaNamesIntrospector<S> {
    fn find_implicit_parameter_name(&self, param: ParameterView<'_>) -> Option<String> {
        names::resolve_name(param, &self.source)
    }

    fn is_implicit_creator(&self, ctor: ConstructorView<'_>) -> bool {
        creator::is_implicit_creator(ctor, &self.source)
    }
}
