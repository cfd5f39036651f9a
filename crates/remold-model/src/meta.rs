//! Extended Compiler Metadata
//!
//! The structural description of a class that the source compiler embeds in
//! its output, beyond what ordinary runtime reflection retains: parameter
//! names, parameter kinds, and the designated primary constructor. Obtained
//! through a [`MetadataSource`] and treated as advisory data only — the
//! introspection core cross-checks counts and positions against runtime
//! reflection before trusting a recorded name.
//!
//! Constructors correspond to runtime constructors by position; functions
//! correspond by name.
//!
//! [`MetadataSource`]: crate::source::MetadataSource

use serde::{Deserialize, Serialize};

/// Compiler-recorded structural description of one class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaClass {
    /// Index of the designated primary constructor within `constructors`,
    /// if the compiler designated one
    pub primary_constructor: Option<usize>,
    /// Recorded constructors, positionally aligned with the runtime's
    /// declared constructors
    pub constructors: Vec<MetaFunction>,
    /// Recorded functions, looked up by name
    pub functions: Vec<MetaFunction>,
}

impl MetaClass {
    /// Create an empty description
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded constructor aligned with the runtime constructor at
    /// `index`
    pub fn constructor(&self, index: usize) -> Option<&MetaFunction> {
        self.constructors.get(index)
    }

    /// The recorded function with the given name
    pub fn function(&self, name: &str) -> Option<&MetaFunction> {
        self.functions
            .iter()
            .find(|f| f.name.as_deref() == Some(name))
    }
}

/// Compiler-recorded shape of one constructor or function.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaFunction {
    /// Function name; constructors carry none
    pub name: Option<String>,
    /// Recorded parameters in logical order, which may include leading
    /// instance/receiver slots invisible to runtime reflection
    pub params: Vec<MetaParam>,
}

impl MetaFunction {
    /// Create an unnamed function shape (a constructor) with the given
    /// parameters
    pub fn constructor(params: Vec<MetaParam>) -> Self {
        Self { name: None, params }
    }

    /// Create a named function shape with the given parameters
    pub fn function(name: impl Into<String>, params: Vec<MetaParam>) -> Self {
        Self {
            name: Some(name.into()),
            params,
        }
    }

    /// Shift between the runtime parameter list and this recorded list.
    ///
    /// When the first logical parameter is not a plain value parameter
    /// (an instance or receiver slot the runtime's own parameter list does
    /// not show), runtime position `i` corresponds to recorded position
    /// `i + 1`; otherwise the lists align.
    pub fn logical_offset(&self) -> usize {
        match self.params.first() {
            Some(p) if p.kind != ParamKind::Value => 1,
            _ => 0,
        }
    }

    /// Number of recorded parameters, including synthetic slots
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Whether every recorded parameter carries a declared name
    pub fn all_params_named(&self) -> bool {
        self.params.iter().all(|p| p.name.is_some())
    }
}

/// Compiler-recorded shape of one parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaParam {
    /// Declared name, absent when the compiler could not retain it
    pub name: Option<String>,
    /// Parameter kind
    #[serde(default)]
    pub kind: ParamKind,
}

impl MetaParam {
    /// A plain value parameter with a declared name
    pub fn value(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            kind: ParamKind::Value,
        }
    }

    /// A plain value parameter whose name was not retained
    pub fn unnamed() -> Self {
        Self {
            name: None,
            kind: ParamKind::Value,
        }
    }

    /// The synthetic instance slot of a member function
    pub fn instance() -> Self {
        Self {
            name: None,
            kind: ParamKind::Instance,
        }
    }

    /// The synthetic receiver slot of an extension-style function
    pub fn receiver() -> Self {
        Self {
            name: None,
            kind: ParamKind::Receiver,
        }
    }
}

/// Kind of a recorded parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamKind {
    /// Synthetic slot for the instance a member function is invoked on
    Instance,
    /// Synthetic slot for the receiver of an extension-style function
    Receiver,
    /// An ordinary declared value parameter
    #[default]
    Value,
}
