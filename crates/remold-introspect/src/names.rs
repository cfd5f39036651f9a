//! Parameter Name Resolver
//!
//! Recovers the declared name of a constructor or function parameter from
//! extended compiler metadata. Absence is always a normal outcome here: the
//! host falls back to its other naming strategies (or fails at its own
//! layer) whenever this resolver declines.

use remold_model::{MemberView, MetadataSource, ParameterView};

use crate::detect::is_extended_metadata_class;

/// The declared name of `param`, recovered from extended metadata.
///
/// Declines (returns `None`) when the declaring class carries no extended
/// metadata, when the metadata source fails, or when the recorded shape does
/// not line up with runtime reflection:
/// - for a constructor parameter, the recorded parameter count must be
///   nonzero and equal the runtime count exactly — a mismatch means
///   synthetic parameters make the positions untrustworthy;
/// - for a function parameter, the runtime index is shifted by the
///   function's logical offset (instance/receiver slots are recorded in the
///   metadata but invisible to runtime reflection) and bounds-checked;
/// - parameters owned by any other member kind have no recoverable name.
pub fn resolve_name(param: ParameterView<'_>, source: &dyn MetadataSource) -> Option<String> {
    if !is_extended_metadata_class(param.class) {
        return None;
    }
    let meta = source.class_metadata(param.class).ok().flatten()?;

    match param.owner {
        MemberView::Constructor(ctor) => {
            let recorded = meta.constructor(ctor.index)?;
            if recorded.param_count() == 0
                || recorded.param_count() != ctor.descriptor.param_count()
            {
                return None;
            }
            recorded.params.get(param.index)?.name.clone()
        }
        MemberView::Method(method) => {
            let recorded = meta.function(&method.descriptor.name)?;
            let index = param.index + recorded.logical_offset();
            recorded.params.get(index)?.name.clone()
        }
        MemberView::Field(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remold_model::{
        ClassBuilder, ConstructorDescriptor, FieldDescriptor, MetaClass, MetaFunction,
        MetaParam, MethodDescriptor,
    };

    fn point_meta() -> MetaClass {
        MetaClass {
            primary_constructor: Some(0),
            constructors: vec![MetaFunction::constructor(vec![
                MetaParam::value("x"),
                MetaParam::value("y"),
            ])],
            functions: vec![MetaFunction::function(
                "translate",
                vec![
                    MetaParam::instance(),
                    MetaParam::value("dx"),
                    MetaParam::value("dy"),
                ],
            )],
        }
    }

    fn point_class() -> remold_model::ClassDescriptor {
        ClassBuilder::new("Point")
            .metadata(&point_meta())
            .constructor(ConstructorDescriptor::with_params(2))
            .method(MethodDescriptor::new("translate").with_params(2))
            .field(FieldDescriptor::new("x"))
            .build()
    }

    #[test]
    fn test_constructor_parameter_names() {
        let class = point_class();
        let source = remold_model::EmbeddedMetadataSource::new();
        let ctor = class.constructor_view(0).unwrap();

        assert_eq!(
            resolve_name(ctor.parameter(0).unwrap(), &source),
            Some("x".to_string())
        );
        assert_eq!(
            resolve_name(ctor.parameter(1).unwrap(), &source),
            Some("y".to_string())
        );
    }

    #[test]
    fn test_method_parameter_names_shifted_past_instance_slot() {
        let class = point_class();
        let source = remold_model::EmbeddedMetadataSource::new();
        let method = class.method_view(0).unwrap();

        assert_eq!(
            resolve_name(method.parameter(0).unwrap(), &source),
            Some("dx".to_string())
        );
        assert_eq!(
            resolve_name(method.parameter(1).unwrap(), &source),
            Some("dy".to_string())
        );
    }

    #[test]
    fn test_constructor_count_mismatch_declines() {
        // Metadata records one parameter, runtime reflection sees two
        let meta = MetaClass {
            primary_constructor: Some(0),
            constructors: vec![MetaFunction::constructor(vec![MetaParam::value("x")])],
            functions: vec![],
        };
        let class = ClassBuilder::new("Skewed")
            .metadata(&meta)
            .constructor(ConstructorDescriptor::with_params(2))
            .build();
        let source = remold_model::EmbeddedMetadataSource::new();
        let ctor = class.constructor_view(0).unwrap();

        assert_eq!(resolve_name(ctor.parameter(0).unwrap(), &source), None);
    }

    #[test]
    fn test_field_owner_declines() {
        let class = point_class();
        let source = remold_model::EmbeddedMetadataSource::new();
        let param = remold_model::ParameterView {
            class: &class,
            owner: MemberView::Field(&class.fields[0]),
            index: 0,
        };

        assert_eq!(resolve_name(param, &source), None);
    }

    #[test]
    fn test_unknown_function_declines() {
        let class = ClassBuilder::new("Point")
            .metadata(&point_meta())
            .constructor(ConstructorDescriptor::with_params(2))
            .method(MethodDescriptor::new("unrecorded").with_params(1))
            .build();
        let source = remold_model::EmbeddedMetadataSource::new();
        let method = class.method_view(0).unwrap();

        assert_eq!(resolve_name(method.parameter(0).unwrap(), &source), None);
    }
}
