//! Normalized schema model
//!
//! Flattens a raw introspection document into query-friendly maps of
//! queries, mutations, object types, input types and enum types, with the
//! nested `ofType` chains resolved into canonical type strings like
//! `[ProductInterface]` or `ID!`. The model is the single read-only artifact
//! every synthesizer works from.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use std::str::FromStr;

use crate::describe;
use crate::errors::GqldocsError;
use crate::schema::introspection::{
    IntrospectionDocument, RawEnumValue, RawField, RawInputValue, RawTypeRef,
};

/// GraphQL meta-types and root names excluded from user-facing type listings
const INTERNAL_TYPES: &[&str] = &[
    "__Schema",
    "__Type",
    "__TypeKind",
    "__Field",
    "__InputValue",
    "__EnumValue",
    "__Directive",
    "__DirectiveLocation",
    "String",
    "Int",
    "Float",
    "Boolean",
    "ID",
    "Query",
    "Mutation",
];

/// The five built-in scalars
const BUILTIN_SCALARS: &[&str] = &["String", "Int", "Float", "Boolean", "ID"];

/// Field-name keywords marking a likely custom resolver
const CUSTOM_RESOLVER_KEYWORDS: &[&str] =
    &["change", "update", "create", "delete", "admin", "custom"];

/// Whether an operation is a query or a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    /// The GraphQL keyword (`query` / `mutation`)
    pub fn keyword(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
        }
    }

    /// Suffix appended to generated operation names (`Query` / `Mutation`)
    pub fn label(&self) -> &'static str {
        match self {
            OperationKind::Query => "Query",
            OperationKind::Mutation => "Mutation",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A query, mutation or object-type field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub args: IndexMap<String, ArgumentDescriptor>,
    pub is_deprecated: bool,
    pub deprecation_reason: Option<String>,
    pub is_custom_resolver: bool,
}

impl FieldDescriptor {
    /// True when the field's type carries a non-null wrapper
    pub fn is_required(&self) -> bool {
        self.ty.contains('!')
    }

    /// True when the field's type carries a list wrapper
    pub fn is_list(&self) -> bool {
        self.ty.contains('[')
    }
}

/// An argument of a query/mutation/field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub default_value: Option<String>,
    pub is_required: bool,
}

/// A field of an input object type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputFieldDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub default_value: Option<String>,
    pub is_required: bool,
}

/// A value of an enum type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValueDescriptor {
    pub name: String,
    pub description: String,
    pub is_deprecated: bool,
    pub deprecation_reason: Option<String>,
}

/// A custom scalar surfaced in the types map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarDescriptor {
    pub kind: String,
    pub description: String,
}

/// Entry of the object-types map: either a full object type or a custom
/// scalar recorded for discoverability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeEntry {
    Scalar(ScalarDescriptor),
    Object(IndexMap<String, FieldDescriptor>),
}

impl TypeEntry {
    /// Fields when this entry is an object type
    pub fn fields(&self) -> Option<&IndexMap<String, FieldDescriptor>> {
        match self {
            TypeEntry::Object(fields) => Some(fields),
            TypeEntry::Scalar(_) => None,
        }
    }
}

/// One slice of the schema model, addressable by the documentation UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Mutations,
    Types,
    InputTypes,
    EnumTypes,
}

impl Tab {
    pub const ALL: &'static [Tab] = &[Tab::Mutations, Tab::Types, Tab::InputTypes, Tab::EnumTypes];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Mutations => "mutations",
            Tab::Types => "types",
            Tab::InputTypes => "input-types",
            Tab::EnumTypes => "enum-types",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = GqldocsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mutations" => Ok(Tab::Mutations),
            "types" => Ok(Tab::Types),
            "input-types" => Ok(Tab::InputTypes),
            "enum-types" => Ok(Tab::EnumTypes),
            _ => Err(GqldocsError::Argument(format!(
                "Invalid tab '{}' (expected mutations|types|input-types|enum-types)",
                s
            ))),
        }
    }
}

/// The normalized, request-scoped schema representation.
///
/// `error` and data are mutually exclusive: an error-tagged model carries
/// empty collections, and the count accessors derive from the collections so
/// they are zero whenever `error` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaModel {
    pub queries: IndexMap<String, FieldDescriptor>,
    pub mutations: IndexMap<String, FieldDescriptor>,
    pub types: IndexMap<String, TypeEntry>,
    pub input_types: IndexMap<String, IndexMap<String, InputFieldDescriptor>>,
    pub enum_types: IndexMap<String, IndexMap<String, EnumValueDescriptor>>,
    pub error: Option<String>,
}

impl SchemaModel {
    /// An error-tagged model with empty data collections
    pub fn from_error(message: impl Into<String>) -> Self {
        SchemaModel {
            error: Some(message.into()),
            ..Default::default()
        }
    }

    /// Normalize a raw introspection document into the flat model.
    ///
    /// Dispatches on the raw `kind` tag: `Query`/`Mutation` objects become
    /// the operation maps, other objects and custom scalars land in the
    /// types map, input objects and enums in their own maps. `INTERFACE`
    /// and `UNION` kinds are ignored.
    pub fn from_introspection(doc: &IntrospectionDocument) -> Self {
        if doc.types.is_empty() {
            return SchemaModel::from_error("No types found in GraphQL schema");
        }

        let mut model = SchemaModel::default();
        for raw in &doc.types {
            let Some(kind) = raw.kind.as_deref() else {
                continue;
            };
            let name = raw.name.clone().unwrap_or_default();
            match kind {
                "OBJECT" => {
                    let fields = process_fields(raw.fields.as_deref().unwrap_or_default());
                    if name == "Query" {
                        model.queries = fields;
                    } else if name == "Mutation" {
                        model.mutations = fields;
                    } else if !is_internal_type(&name) {
                        model.types.insert(name, TypeEntry::Object(fields));
                    }
                }
                "INPUT_OBJECT" => {
                    if !is_internal_type(&name) {
                        let fields =
                            process_input_fields(raw.input_fields.as_deref().unwrap_or_default());
                        model.input_types.insert(name, fields);
                    }
                }
                "ENUM" => {
                    if !is_internal_type(&name) {
                        let values =
                            process_enum_values(raw.enum_values.as_deref().unwrap_or_default());
                        model.enum_types.insert(name, values);
                    }
                }
                "SCALAR" => {
                    if !is_builtin_scalar(&name) {
                        model.types.insert(
                            name,
                            TypeEntry::Scalar(ScalarDescriptor {
                                kind: "SCALAR".to_string(),
                                description: raw
                                    .description
                                    .clone()
                                    .unwrap_or_else(|| "Custom scalar type".to_string()),
                            }),
                        );
                    }
                }
                // INTERFACE and UNION are not documented here
                _ => {}
            }
        }
        model
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn total_queries(&self) -> usize {
        self.queries.len()
    }

    pub fn total_mutations(&self) -> usize {
        self.mutations.len()
    }

    pub fn total_types(&self) -> usize {
        self.types.len()
    }

    pub fn total_input_types(&self) -> usize {
        self.input_types.len()
    }

    pub fn total_enum_types(&self) -> usize {
        self.enum_types.len()
    }

    pub fn is_input_type(&self, name: &str) -> bool {
        self.input_types.contains_key(name)
    }

    pub fn is_enum_type(&self, name: &str) -> bool {
        self.enum_types.contains_key(name)
    }

    pub fn input_type_structure(&self, name: &str) -> Option<&IndexMap<String, InputFieldDescriptor>> {
        self.input_types.get(name)
    }

    pub fn enum_type_structure(&self, name: &str) -> Option<&IndexMap<String, EnumValueDescriptor>> {
        self.enum_types.get(name)
    }

    /// Fields of an object type, by clean (unwrapped) name
    pub fn object_fields(&self, name: &str) -> Option<&IndexMap<String, FieldDescriptor>> {
        self.types.get(name).and_then(TypeEntry::fields)
    }

    /// Declared return type of an operation, as a canonical type string
    pub fn return_type(&self, name: &str, kind: OperationKind) -> Option<&str> {
        let operations = match kind {
            OperationKind::Query => &self.queries,
            OperationKind::Mutation => &self.mutations,
        };
        operations.get(name).map(|field| field.ty.as_str())
    }

    /// Operation descriptor lookup across both maps.
    ///
    /// When `kind` is omitted, queries win over mutations.
    pub fn operation(
        &self,
        name: &str,
        kind: Option<OperationKind>,
    ) -> Option<(OperationKind, &FieldDescriptor)> {
        match kind {
            Some(OperationKind::Query) => {
                self.queries.get(name).map(|f| (OperationKind::Query, f))
            }
            Some(OperationKind::Mutation) => self
                .mutations
                .get(name)
                .map(|f| (OperationKind::Mutation, f)),
            None => self
                .queries
                .get(name)
                .map(|f| (OperationKind::Query, f))
                .or_else(|| self.mutations.get(name).map(|f| (OperationKind::Mutation, f))),
        }
    }

    /// True when the (cleaned) type name resolves to any known type
    pub fn is_known_type(&self, type_string: &str) -> bool {
        let clean = clean_type_name(type_string);
        self.types.contains_key(&clean)
            || self.input_types.contains_key(&clean)
            || self.enum_types.contains_key(&clean)
    }

    /// True when the (cleaned) type name is an expandable object type
    pub fn is_object_type(&self, type_string: &str) -> bool {
        let clean = clean_type_name(type_string);
        !is_builtin_scalar(&clean) && self.object_fields(&clean).is_some()
    }

    /// One slice of the model as JSON, for independent tab rendering
    pub fn tab_slice(&self, tab: Tab) -> JsonValue {
        let slice = match tab {
            Tab::Mutations => serde_json::to_value(&self.mutations),
            Tab::Types => serde_json::to_value(&self.types),
            Tab::InputTypes => serde_json::to_value(&self.input_types),
            Tab::EnumTypes => serde_json::to_value(&self.enum_types),
        };
        slice.unwrap_or(JsonValue::Null)
    }
}

/// Strip list/non-null markers from a canonical type string
pub fn clean_type_name(type_string: &str) -> String {
    type_string
        .chars()
        .filter(|c| !matches!(c, '!' | '[' | ']'))
        .collect()
}

/// Uppercase the first character, leaving the rest untouched
pub fn ucfirst(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn is_internal_type(name: &str) -> bool {
    INTERNAL_TYPES.contains(&name) || name.starts_with("__")
}

fn is_builtin_scalar(name: &str) -> bool {
    BUILTIN_SCALARS.contains(&name)
}

/// Resolve a nested `ofType` chain into canonical notation.
///
/// Tracks a nullable flag (cleared on `NON_NULL`) and a list flag (set on
/// `LIST`) while walking inward; the terminal name is wrapped in `[...]` if
/// a list was seen and suffixed with `!` if the chain was non-null. Missing
/// metadata resolves to the `Unknown` sentinel rather than failing.
pub fn resolve_type_ref(type_ref: Option<&RawTypeRef>) -> String {
    let mut nullable = true;
    let mut is_list = false;
    let mut current = type_ref;
    let mut terminal_name: Option<&str> = None;

    while let Some(t) = current {
        match t.of_type.as_deref() {
            Some(inner) => {
                match t.kind.as_deref() {
                    Some("NON_NULL") => nullable = false,
                    Some("LIST") => is_list = true,
                    _ => {}
                }
                current = Some(inner);
            }
            None => {
                terminal_name = t.name.as_deref();
                current = None;
            }
        }
    }

    let mut name = terminal_name.unwrap_or("Unknown").to_string();
    if is_list {
        name = format!("[{}]", name);
    }
    if !nullable {
        name.push('!');
    }
    name
}

/// True when the chain contains a non-null wrapper at any level
pub fn type_ref_required(type_ref: Option<&RawTypeRef>) -> bool {
    let mut current = type_ref;
    while let Some(t) = current {
        if t.kind.as_deref() == Some("NON_NULL") {
            return true;
        }
        current = t.of_type.as_deref();
    }
    false
}

fn is_custom_resolver(field_name: &str) -> bool {
    let lower = field_name.to_lowercase();
    CUSTOM_RESOLVER_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
}

fn process_fields(raw_fields: &[RawField]) -> IndexMap<String, FieldDescriptor> {
    let mut result = IndexMap::new();
    for field in raw_fields {
        let Some(name) = field.name.clone() else {
            continue;
        };
        let description = match &field.description {
            Some(d) => d.clone(),
            None => describe::describe_field(&name),
        };
        result.insert(
            name.clone(),
            FieldDescriptor {
                description,
                ty: resolve_type_ref(field.type_ref.as_ref()),
                args: process_args(field.args.as_deref().unwrap_or_default()),
                is_deprecated: field.is_deprecated.unwrap_or(false),
                deprecation_reason: field.deprecation_reason.clone(),
                is_custom_resolver: is_custom_resolver(&name),
                name,
            },
        );
    }
    result
}

fn process_args(raw_args: &[RawInputValue]) -> IndexMap<String, ArgumentDescriptor> {
    let mut result = IndexMap::new();
    for arg in raw_args {
        let Some(name) = arg.name.clone() else {
            continue;
        };
        let description = match &arg.description {
            Some(d) => d.clone(),
            None => describe::describe_argument(&name),
        };
        result.insert(
            name.clone(),
            ArgumentDescriptor {
                description,
                ty: resolve_type_ref(arg.type_ref.as_ref()),
                default_value: arg.default_value.clone(),
                is_required: type_ref_required(arg.type_ref.as_ref()),
                name,
            },
        );
    }
    result
}

fn process_input_fields(raw_fields: &[RawInputValue]) -> IndexMap<String, InputFieldDescriptor> {
    let mut result = IndexMap::new();
    for field in raw_fields {
        let Some(name) = field.name.clone() else {
            continue;
        };
        result.insert(
            name.clone(),
            InputFieldDescriptor {
                description: field
                    .description
                    .clone()
                    .unwrap_or_else(|| "No description available".to_string()),
                ty: resolve_type_ref(field.type_ref.as_ref()),
                default_value: field.default_value.clone(),
                is_required: type_ref_required(field.type_ref.as_ref()),
                name,
            },
        );
    }
    result
}

fn process_enum_values(raw_values: &[RawEnumValue]) -> IndexMap<String, EnumValueDescriptor> {
    let mut result = IndexMap::new();
    for value in raw_values {
        let Some(name) = value.name.clone() else {
            continue;
        };
        result.insert(
            name.clone(),
            EnumValueDescriptor {
                description: value
                    .description
                    .clone()
                    .unwrap_or_else(|| "No description available".to_string()),
                is_deprecated: value.is_deprecated.unwrap_or(false),
                deprecation_reason: value.deprecation_reason.clone(),
                name,
            },
        );
    }
    result
}
