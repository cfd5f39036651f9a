//! Module Registration
//!
//! Glue that plugs the introspector into a host framework. The host hands
//! its setup context to [`RemoldModule::setup`], which appends a
//! [`MetaNamesIntrospector`] backed by the embedded metadata source and
//! wires mix-in overlays for the built-in value types whose compiled shape
//! needs them.

use rustc_hash::FxHashSet;

use remold_model::EmbeddedMetadataSource;

use crate::introspector::{AnnotationIntrospector, MetaNamesIntrospector};

/// Mix-in overlay applied to the closed-range value types so their
/// start/end accessors bind cleanly.
pub const CLOSED_RANGE_MIXIN: &str = "bind.mixin.ClosedRange";

/// Built-in closed-range types that receive [`CLOSED_RANGE_MIXIN`].
pub const CLOSED_RANGE_TARGETS: [&str; 3] =
    ["lang.IntRange", "lang.CharRange", "lang.LongRange"];

/// Setup surface a host framework exposes to modules during registration.
pub trait SetupContext {
    /// Append an introspector to the host's annotation-processing pipeline
    fn append_introspector(&mut self, introspector: Box<dyn AnnotationIntrospector>);

    /// Overlay the markers of `mixin` onto the class named `target`
    fn set_mixin(&mut self, target: &str, mixin: &str);
}

/// The remold framework module.
#[derive(Debug)]
pub struct RemoldModule {
    /// Built-in classes the module takes responsibility for binding
    implied_classes: FxHashSet<String>,
}

impl RemoldModule {
    /// Create the module
    pub fn new() -> Self {
        let mut implied_classes = FxHashSet::default();
        implied_classes.insert("lang.Pair".to_string());
        implied_classes.insert("lang.Triple".to_string());
        Self { implied_classes }
    }

    /// Register the introspector and built-in mix-ins with the host
    pub fn setup(&mut self, context: &mut dyn SetupContext) {
        context.append_introspector(Box::new(MetaNamesIntrospector::new(
            EmbeddedMetadataSource::new(),
        )));

        for target in CLOSED_RANGE_TARGETS {
            self.add_mixin(context, target, CLOSED_RANGE_MIXIN);
        }
    }

    fn add_mixin(&mut self, context: &mut dyn SetupContext, target: &str, mixin: &str) {
        self.implied_classes.insert(target.to_string());
        context.set_mixin(target, mixin);
    }

    /// Whether the module claims binding responsibility for the named
    /// built-in class
    pub fn is_implied_class(&self, name: &str) -> bool {
        self.implied_classes.contains(name)
    }

    /// Version stamp the host reports for this module
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

impl Default for RemoldModule {
    fn default() -> Self {
        Self::new()
    }
}
