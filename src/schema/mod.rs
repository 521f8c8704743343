//! GraphQL schema support
//!
//! This module holds the fixed introspection document, the raw (wire-shaped)
//! introspection types, and the normalized schema model consumed by the
//! documentation synthesizers.

pub mod introspection;
pub mod model;

pub use introspection::{IntrospectionDocument, INTROSPECTION_QUERY, PROBE_QUERY};
pub use model::{
    ArgumentDescriptor, EnumValueDescriptor, FieldDescriptor, InputFieldDescriptor, OperationKind,
    ScalarDescriptor, SchemaModel, Tab, TypeEntry,
};
