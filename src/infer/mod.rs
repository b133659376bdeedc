//! Type inference module
//!
//! Infers TypeScript type declarations from JSON values.
//!
//! # Features
//!
//! - **Shape Classification**: Maps every JSON value kind to a descriptor
//! - **Interface Generation**: Recursive, declare-before-use emission
//! - **Name De-duplication**: Per-conversion registry of emitted names
//! - **Array Element Naming**: Singularized names for arrays of objects

mod inference;
mod types;

pub use inference::{
    build_declaration, declaration_name, declarations_for, infer_descriptor, ROOT_ITEM_NAME,
    ROOT_NAME,
};
pub use types::{Descriptor, Primitive};

#[cfg(test)]
mod tests;
