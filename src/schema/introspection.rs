//! GraphQL schema introspection
//!
//! The fixed introspection query sent to the endpoint, plus the raw
//! (wire-shaped) types it decodes into. Everything here mirrors the standard
//! GraphQL introspection envelope; normalization into the navigable model
//! happens in [`super::model`].

use serde::{Deserialize, Serialize};

/// Standard GraphQL introspection query
///
/// Requests the query/mutation root names and all named types with their
/// fields, arguments, input fields, enum values and deprecation metadata.
/// Type references carry several levels of `ofType` so list/non-null
/// wrapping can be unwrapped without a second round trip.
pub const INTROSPECTION_QUERY: &str = r#"
query IntrospectionQuery {
  __schema {
    queryType { name }
    mutationType { name }
    types {
      ...FullType
    }
  }
}

fragment FullType on __Type {
  kind
  name
  description
  fields(includeDeprecated: true) {
    name
    description
    args {
      ...InputValue
    }
    type {
      ...TypeRef
    }
    isDeprecated
    deprecationReason
  }
  inputFields {
    ...InputValue
  }
  enumValues(includeDeprecated: true) {
    name
    description
    isDeprecated
    deprecationReason
  }
}

fragment InputValue on __InputValue {
  name
  description
  type {
    ...TypeRef
  }
  defaultValue
}

fragment TypeRef on __Type {
  kind
  name
  ofType {
    kind
    name
    ofType {
      kind
      name
      ofType {
        kind
        name
      }
    }
  }
}
"#;

/// Minimal health-check query: asks only for the query root name.
pub const PROBE_QUERY: &str = "{ __schema { queryType { name } } }";

/// Raw `__schema` document as returned by introspection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionDocument {
    #[serde(default)]
    pub query_type: Option<RootTypeName>,
    #[serde(default)]
    pub mutation_type: Option<RootTypeName>,
    #[serde(default)]
    pub types: Vec<RawType>,
}

/// `queryType { name }` / `mutationType { name }` envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RootTypeName {
    #[serde(default)]
    pub name: Option<String>,
}

/// One entry of `__schema.types`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawType {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Option<Vec<RawField>>,
    #[serde(default)]
    pub input_fields: Option<Vec<RawInputValue>>,
    #[serde(default)]
    pub enum_values: Option<Vec<RawEnumValue>>,
}

/// A field of an object type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawField {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub args: Option<Vec<RawInputValue>>,
    #[serde(rename = "type", default)]
    pub type_ref: Option<RawTypeRef>,
    #[serde(default)]
    pub is_deprecated: Option<bool>,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

/// An argument or input-object field
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInputValue {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub type_ref: Option<RawTypeRef>,
    #[serde(default)]
    pub default_value: Option<String>,
}

/// An enum value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEnumValue {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_deprecated: Option<bool>,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

/// Nested `ofType` chain of a type reference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTypeRef {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub of_type: Option<Box<RawTypeRef>>,
}
