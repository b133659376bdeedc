//! Inferred type descriptors

use std::fmt;

/// TypeScript primitive type name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    String,
    Number,
    Boolean,
    Null,
    Undefined,
    Any,
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::String => write!(f, "string"),
            Primitive::Number => write!(f, "number"),
            Primitive::Boolean => write!(f, "boolean"),
            Primitive::Null => write!(f, "null"),
            Primitive::Undefined => write!(f, "undefined"),
            Primitive::Any => write!(f, "any"),
        }
    }
}

/// An inferred type before it is rendered to declaration text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Descriptor {
    /// A TypeScript primitive
    Primitive(Primitive),
    /// A reference to a named interface declaration
    Named(String),
    /// An array of the inner descriptor
    Array(Box<Descriptor>),
}

impl Descriptor {
    /// The `any[]` descriptor, the fallback for empty and mixed arrays
    pub fn any_array() -> Self {
        Descriptor::Array(Box::new(Descriptor::Primitive(Primitive::Any)))
    }

    /// Wrap this descriptor in an array
    pub fn into_array(self) -> Self {
        Descriptor::Array(Box::new(self))
    }

    /// True if a named reference appears anywhere in this descriptor,
    /// including inside nested arrays.
    pub fn mentions_named(&self) -> bool {
        match self {
            Descriptor::Named(_) => true,
            Descriptor::Array(inner) => inner.mentions_named(),
            Descriptor::Primitive(_) => false,
        }
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Descriptor::Primitive(p) => write!(f, "{p}"),
            Descriptor::Named(name) => write!(f, "{name}"),
            Descriptor::Array(inner) => write!(f, "{inner}[]"),
        }
    }
}
