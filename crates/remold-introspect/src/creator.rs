//! Creator Selector
//!
//! Decides, for one constructor at a time, whether the host framework should
//! treat it as if the author had explicitly marked it as the deserialization
//! entry point. Explicit markers always win: the selector only fills the gap
//! the author left, and it declines the moment an explicit creator marker
//! exists anywhere on the type.

use remold_model::marker;
use remold_model::{ClassDescriptor, ConstructorView, MetadataSource};

use crate::detect::is_extended_metadata_class;

/// Whether `ctor` should be treated as the implicit deserialization entry
/// point.
///
/// Returns true only when all of the following hold:
/// - the constructor carries no explicit creator marker itself and has at
///   least one parameter;
/// - the declaring class passes [`is_extended_metadata_class`];
/// - the metadata records a constructor at the same position and designates
///   it primary, or designates no primary while the class declares exactly
///   one constructor;
/// - no member of the type carries an explicit creator marker
///   ([`has_explicit_creator`]);
/// - the recorded parameter count matches runtime reflection and every
///   recorded parameter has a declared name. A single unrecoverable name
///   declines the whole constructor rather than risking mis-aligned
///   positional bindings.
///
/// Metadata-source failures are treated as "no metadata available"; this
/// predicate never propagates an error.
pub fn is_implicit_creator(ctor: ConstructorView<'_>, source: &dyn MetadataSource) -> bool {
    if ctor.descriptor.markers.has(marker::CREATOR) {
        return false;
    }
    if ctor.descriptor.params.is_empty() {
        return false;
    }
    let class = ctor.class;
    if !is_extended_metadata_class(class) {
        return false;
    }

    let Ok(Some(meta)) = source.class_metadata(class) else {
        return false;
    };
    // No recorded constructor at this position means the metadata does not
    // line up with runtime reflection
    let Some(recorded) = meta.constructor(ctor.index) else {
        return false;
    };

    let is_primary = match meta.primary_constructor {
        Some(primary) => primary == ctor.index,
        None => class.constructors.len() == 1,
    };

    is_primary
        && !has_explicit_creator(class)
        && recorded.param_count() == ctor.descriptor.param_count()
        && recorded.all_params_named()
}

/// Whether any member of `class` already carries the explicit creator
/// marker: a constructor, a companion function that is callable without an
/// instance, or a static method on the class itself.
///
/// Kept as one explicit scan so the explicit-beats-implicit precedence rule
/// stays auditable in a single place.
pub fn has_explicit_creator(class: &ClassDescriptor) -> bool {
    let constructor_marked = class
        .constructors
        .iter()
        .any(|c| c.markers.has(marker::CREATOR));

    let companion_marked = class.companion.as_ref().is_some_and(|companion| {
        companion
            .functions
            .iter()
            .any(|f| f.is_static && f.markers.has(marker::CREATOR))
    });

    let static_marked = class
        .methods
        .iter()
        .any(|m| m.is_static && m.markers.has(marker::CREATOR));

    constructor_marked || companion_marked || static_marked
}
